use crate::error::ApiError;
use axum::async_trait;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use domain::{TodoId, Validate, ValidationError};
use serde::de::DeserializeOwned;

/// JSON ボディを読み取り、ハンドラ本体の前で検証する
///
/// 検証に失敗した入力はサービスに到達しない。`T` は受け付ける入力型で、
/// 取り出されるのは検証済みの `T::Output`。
pub struct ValidatedJson<T: Validate>(pub T::Output);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Validate + DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                ValidationError::field("body", rejection.body_text())
            })?;

        Ok(ValidatedJson(input.validate()?))
    }
}

/// パスの `{id}` を `TodoId` として取り出す
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub TodoId);

#[async_trait]
impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                ValidationError::field("id", rejection.body_text())
            })?;

        Ok(PathId(TodoId::new(id)))
    }
}
