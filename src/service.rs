//! To-do Service Seam
//!
//! The page talks to the remote service through `TodoService`, so the
//! controller can be driven by the Tauri bridge in the app and by a fake in tests.

use crate::commands;
use crate::error::ServiceError;
use crate::models::{Todo, TodoId, TodoPatch};

/// Remote to-do service. The `bool` answers report whether the service accepted the change.
#[allow(async_fn_in_trait)]
pub trait TodoService {
    async fn get_todos(&self) -> Result<Vec<Todo>, ServiceError>;
    async fn create_todo(&self, content: &str) -> Result<Todo, ServiceError>;
    async fn update(&self, id: &str, fields: &TodoPatch) -> Result<bool, ServiceError>;
    async fn delete_todo(&self, id: &str) -> Result<bool, ServiceError>;
    async fn batch_delete(&self, ids: &[TodoId]) -> Result<bool, ServiceError>;
}

/// Service reached over Tauri IPC
#[derive(Clone, Copy, Debug, Default)]
pub struct TauriTodoService;

impl TodoService for TauriTodoService {
    async fn get_todos(&self) -> Result<Vec<Todo>, ServiceError> {
        commands::get_todos().await
    }

    async fn create_todo(&self, content: &str) -> Result<Todo, ServiceError> {
        commands::create_todo(content).await
    }

    async fn update(&self, id: &str, fields: &TodoPatch) -> Result<bool, ServiceError> {
        commands::update_todo(id, fields).await
    }

    async fn delete_todo(&self, id: &str) -> Result<bool, ServiceError> {
        commands::delete_todo(id).await
    }

    async fn batch_delete(&self, ids: &[TodoId]) -> Result<bool, ServiceError> {
        commands::batch_delete_todos(ids).await
    }
}
