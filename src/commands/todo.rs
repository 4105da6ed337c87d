//! Todo Commands
//!
//! Frontend bindings for the to-do service.

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{call, encode_args};
use crate::error::ServiceError;
use crate::models::{Todo, TodoId, TodoPatch};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct UpdateTodoArgs<'a> {
    id: &'a str,
    fields: &'a TodoPatch,
}

#[derive(Serialize)]
struct IdsArgs<'a> {
    ids: &'a [TodoId],
}

// ========================
// Commands
// ========================

/// Fetch every todo; an absent response is read as an empty list
pub async fn get_todos() -> Result<Vec<Todo>, ServiceError> {
    let todos: Option<Vec<Todo>> = call("get_todos", JsValue::NULL).await?;
    Ok(todos.unwrap_or_default())
}

pub async fn create_todo(content: &str) -> Result<Todo, ServiceError> {
    const COMMAND: &str = "create_todo";
    let js_args = encode_args(COMMAND, &CreateTodoArgs { content })?;
    call(COMMAND, js_args).await
}

/// `Ok(false)` when the service declines (a null answer counts as declined)
pub async fn update_todo(id: &str, fields: &TodoPatch) -> Result<bool, ServiceError> {
    const COMMAND: &str = "update_todo";
    let js_args = encode_args(COMMAND, &UpdateTodoArgs { id, fields })?;
    let accepted: Option<bool> = call(COMMAND, js_args).await?;
    Ok(accepted.unwrap_or(false))
}

pub async fn delete_todo(id: &str) -> Result<bool, ServiceError> {
    const COMMAND: &str = "delete_todo";
    let js_args = encode_args(COMMAND, &IdArgs { id })?;
    let accepted: Option<bool> = call(COMMAND, js_args).await?;
    Ok(accepted.unwrap_or(false))
}

pub async fn batch_delete_todos(ids: &[TodoId]) -> Result<bool, ServiceError> {
    const COMMAND: &str = "batch_delete_todos";
    let js_args = encode_args(COMMAND, &IdsArgs { ids })?;
    let accepted: Option<bool> = call(COMMAND, js_args).await?;
    Ok(accepted.unwrap_or(false))
}
