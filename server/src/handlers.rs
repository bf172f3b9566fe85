use axum::{
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    Json,
};
use todo_core::{Todo, TodoPayload};

use crate::{error::ApiError, Db};

/// Todo id taken from the whole path remainder after `/api/todos/`.
///
/// Anything that is not a base-10 integer, including an empty remainder or
/// extra path segments, is rejected with `ApiError::InvalidIdentifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidIdentifier)?;
        parse_id(&raw).map(TodoId)
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidIdentifier)
}

pub(crate) async fn preflight() -> StatusCode {
    StatusCode::OK
}

// --- collection ---

pub(crate) async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await.list();
    tracing::debug!(count = todos.len(), "listed todos");
    Json(todos)
}

pub(crate) async fn create_todo(
    State(db): State<Db>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = TodoPayload::from_slice(&body)?;
    let todo = db.write().await.create(input.text, input.completed);
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

pub(crate) async fn collection_method_not_allowed() -> ApiError {
    ApiError::UnsupportedMethod
}

// --- item ---

pub(crate) async fn get_todo(TodoId(id): TodoId, State(db): State<Db>) -> Result<Json<Todo>, ApiError> {
    let todo = db.read().await.get(id)?;
    tracing::debug!(id, "fetched todo");
    Ok(Json(todo))
}

pub(crate) async fn replace_todo(
    TodoId(id): TodoId,
    State(db): State<Db>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let input = TodoPayload::from_slice(&body)?;
    if input.id != 0 && input.id != id {
        tracing::debug!(id, body_id = input.id, "ignoring body id on replace");
    }
    let todo = db.write().await.replace(id, input.text, input.completed)?;
    tracing::info!(id, completed = todo.completed, "replaced todo");
    Ok(Json(todo))
}

pub(crate) async fn delete_todo(TodoId(id): TodoId, State(db): State<Db>) -> Result<StatusCode, ApiError> {
    db.write().await.delete(id)?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

/// Unsupported methods on the item endpoint still validate the id first.
pub(crate) async fn item_method_not_allowed(_id: TodoId) -> ApiError {
    ApiError::UnsupportedMethod
}

pub(crate) async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("1"), Ok(1));
        assert_eq!(parse_id("0042"), Ok(42));
        assert_eq!(parse_id("-3"), Ok(-3));
        assert_eq!(parse_id("+7"), Ok(7));
    }

    #[test]
    fn parse_id_rejects_partial_suffixes() {
        for raw in ["", "abc", "1a", "1/2", " 1", "1.0", "99999999999999999999"] {
            assert_eq!(parse_id(raw), Err(ApiError::InvalidIdentifier), "{raw:?}");
        }
    }
}
