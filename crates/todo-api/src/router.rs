use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/todo",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todo/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/api/todo/:id/toggle", patch(handlers::toggle_todo))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), cors))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::info!(path = %path, method = %method, "Incoming request");

    let response = next.run(req).await;
    tracing::info!(
        path = %path,
        method = %method,
        status = response.status().as_u16(),
        "Request completed"
    );
    response
}

/// プリフライトへの応答と CORS ヘッダーの付与
async fn cors(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        state.cors_allow_origin.clone(),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST,PUT,PATCH,DELETE,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type,Authorization"),
    );
    response
}
