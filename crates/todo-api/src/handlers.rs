use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use domain::{CreateTodoInput, TodoView, UpdateTodoInput};
use tracing::info;

use crate::error::{ApiError, Operation};
use crate::extract::{PathId, ValidatedJson};
use crate::state::AppState;

pub const TODO_ROUTE: &str = "/api/todo";

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoView>>, ApiError> {
    let todos = state
        .service
        .list_all()
        .await
        .map_err(|e| ApiError::internal(Operation::List, None, e))?;

    Ok(Json(todos))
}

pub async fn get_todo(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<TodoView>, ApiError> {
    state
        .service
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::internal(Operation::Get, Some(id), e))?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<CreateTodoInput>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state
        .service
        .create(draft)
        .await
        .map_err(|e| ApiError::internal(Operation::Create, None, e))?;

    info!(todo_id = todo.id.value(), "Created todo");

    let location = format!("{TODO_ROUTE}/{}", todo.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(draft): ValidatedJson<UpdateTodoInput>,
) -> Result<Json<TodoView>, ApiError> {
    let todo = state
        .service
        .update(id, draft)
        .await
        .map_err(|e| ApiError::internal(Operation::Update, Some(id), e))?
        .ok_or(ApiError::NotFound(id))?;

    info!(todo_id = id.value(), "Updated todo");
    Ok(Json(todo))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<TodoView>, ApiError> {
    let todo = state
        .service
        .toggle(id)
        .await
        .map_err(|e| ApiError::internal(Operation::Toggle, Some(id), e))?
        .ok_or(ApiError::NotFound(id))?;

    info!(
        todo_id = id.value(),
        is_completed = todo.is_completed,
        "Toggled todo"
    );
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .service
        .delete(id)
        .await
        .map_err(|e| ApiError::internal(Operation::Delete, Some(id), e))?;

    if !deleted {
        return Err(ApiError::NotFound(id));
    }

    info!(todo_id = id.value(), "Deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
