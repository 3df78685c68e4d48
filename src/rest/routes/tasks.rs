// rest/routes/tasks.rs — Task CRUD routes.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::store::{Task, TaskError};
use crate::AppContext;

/// Request body for POST and PUT. `None` means "field absent" — for an
/// update that is "no change", which is distinct from an explicitly empty
/// title.
#[derive(Deserialize, Default)]
pub struct TaskPayload {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// Missing or malformed JSON bodies are treated as an empty object; field
/// validation then reports the real problem ("title is required", …).
fn decode_payload(body: &Bytes) -> TaskPayload {
    serde_json::from_slice(body).unwrap_or_default()
}

fn error_response(err: TaskError) -> (StatusCode, Json<Value>) {
    let status = match err {
        TaskError::Validation(_) => StatusCode::BAD_REQUEST,
        TaskError::NotFound => StatusCode::NOT_FOUND,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.list().await)
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<Value>)> {
    let payload = decode_payload(&body);
    match ctx
        .store
        .create(payload.title.as_deref(), payload.status.as_deref())
        .await
    {
        Ok(task) => Ok((StatusCode::CREATED, Json(task))),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
    body: Bytes,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    let payload = decode_payload(&body);
    match ctx
        .store
        .update(id, payload.title.as_deref(), payload.status.as_deref())
        .await
    {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    match ctx.store.delete(id).await {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(error_response(e)),
    }
}
