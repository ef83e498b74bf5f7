pub mod database;
pub mod memory;
pub mod models;
pub mod repositories;

pub use database::*;
pub use memory::*;
pub use models::*;
pub use repositories::*;
