//! Page Controller Operations
//!
//! Each operation talks to the service first and only then yields the
//! `TodoAction` to dispatch. A failed or declined call yields an error and no
//! action, so the store is never changed ahead of the service.

use crate::error::ServiceError;
use crate::models::{Todo, TodoId, TodoPatch, TodoStatus};
use crate::service::TodoService;
use crate::store::TodoAction;

/// Turn a service acknowledgement into the action to dispatch
fn accepted(command: &'static str, ok: bool, action: TodoAction) -> Result<TodoAction, ServiceError> {
    if ok {
        Ok(action)
    } else {
        Err(ServiceError::Rejected { command })
    }
}

/// Initial fetch on mount
pub async fn load<S: TodoService>(service: &S) -> Result<TodoAction, ServiceError> {
    let todos = service.get_todos().await?;
    log::info!("loaded {} todos", todos.len());
    Ok(TodoAction::SetTodos(todos))
}

pub async fn create<S: TodoService>(service: &S, content: &str) -> Result<TodoAction, ServiceError> {
    let todo = service.create_todo(content).await?;
    Ok(TodoAction::CreateTodo(todo))
}

pub async fn change_status<S: TodoService>(
    service: &S,
    id: TodoId,
    status: TodoStatus,
) -> Result<TodoAction, ServiceError> {
    let ok = service.update(&id, &TodoPatch::status(status)).await?;
    accepted("update_todo", ok, TodoAction::UpdateTodoStatus { id, status })
}

pub async fn delete_one<S: TodoService>(service: &S, id: TodoId) -> Result<TodoAction, ServiceError> {
    let ok = service.delete_todo(&id).await?;
    accepted("delete_todo", ok, TodoAction::DeleteTodos(vec![id]))
}

/// Delete `targets` in one call; an empty target list never reaches the service
pub async fn delete_batch<S: TodoService>(service: &S, targets: Vec<TodoId>) -> Result<TodoAction, ServiceError> {
    if targets.is_empty() {
        log::debug!("batch delete with nothing to delete");
        return Ok(TodoAction::DeleteTodos(targets));
    }
    let ok = service.batch_delete(&targets).await?;
    accepted("batch_delete_todos", ok, TodoAction::DeleteTodos(targets))
}

/// Save the edit dialog's todo; id is sent separately from the changed fields
pub async fn confirm_edit<S: TodoService>(service: &S, todo: Todo) -> Result<TodoAction, ServiceError> {
    let (id, fields) = todo.split();
    let ok = service.update(&id, &fields).await?;
    accepted("update_todo", ok, TodoAction::UpdateTodo { id, fields })
}

/// Edit dialog state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditDialog {
    #[default]
    Closed,
    Open(TodoId),
}

impl EditDialog {
    pub fn target(&self) -> Option<&str> {
        match self {
            EditDialog::Closed => None,
            EditDialog::Open(id) => Some(id),
        }
    }

    /// Id the dialog should render for, or `None` once that todo is gone
    pub fn visible_target(&self, todos: &[Todo]) -> Option<TodoId> {
        let id = self.target()?;
        todos.iter().any(|todo| todo.id == id).then(|| id.to_string())
    }

    /// State after a confirm attempt for `confirmed_id`: closes on success,
    /// stays put on failure or when another todo's dialog is open by now
    pub fn after_confirm(self, confirmed_id: &str, succeeded: bool) -> Self {
        if succeeded && self.target() == Some(confirmed_id) {
            EditDialog::Closed
        } else {
            self
        }
    }
}
