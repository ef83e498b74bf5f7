use crate::service::TodoService;
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use shared::ServerConfig;

/// リクエスト間で共有する状態（不変）
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
    pub cors_allow_origin: HeaderValue,
}

impl AppState {
    pub fn new(service: TodoService, server: &ServerConfig) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            service,
            cors_allow_origin: HeaderValue::from_str(&server.cors_allow_origin)?,
        })
    }
}
