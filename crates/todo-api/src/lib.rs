pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod service;
pub mod state;

pub use error::{ApiError, Operation};
pub use router::app;
pub use service::TodoService;
pub use state::AppState;
