//! Application Context
//!
//! Values shared with the component tree via the Leptos Context API, plus the
//! per-mount handles the page uses to apply service results.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::controller::EditDialog;
use crate::error::ServiceError;
use crate::service::TauriTodoService;
use crate::store::{reduce, TodoAction, TodoStore};

/// Whether the page that started an async operation is still mounted
#[derive(Clone, Debug)]
pub struct PageScope {
    active: Arc<AtomicBool>,
}

impl PageScope {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Scope that closes when the current reactive owner is cleaned up (unmount)
    pub fn for_current_owner() -> Self {
        let scope = Self::new();
        let handle = scope.clone();
        on_cleanup(move || handle.close());
        scope
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn close(&self) {
        self.active.store(false, Ordering::Release);
    }
}

/// Write side of one mounted page, moved into async tasks.
///
/// Every write checks the scope before touching a reactive handle and then
/// goes through the `try_*` setters, so a result that resolves after unmount
/// is dropped instead of reaching a disposed node.
#[derive(Clone)]
pub struct PageHandle {
    scope: PageScope,
    state: TodoStore,
    set_last_error: WriteSignal<Option<String>>,
    set_edit_dialog: WriteSignal<EditDialog>,
}

impl PageHandle {
    pub fn new(
        scope: PageScope,
        state: TodoStore,
        set_last_error: WriteSignal<Option<String>>,
        set_edit_dialog: WriteSignal<EditDialog>,
    ) -> Self {
        Self {
            scope,
            state,
            set_last_error,
            set_edit_dialog,
        }
    }

    /// Returns whether the action reached the store
    pub fn dispatch(&self, action: TodoAction) -> bool {
        if !self.scope.is_active() {
            log::debug!("page unmounted, dropping {}", action.name());
            return false;
        }
        log::debug!("dispatch {}", action.name());
        self.state
            .try_update(|current| *current = reduce(current, action))
            .is_some()
    }

    /// Dispatch a successful outcome, surface a failed one
    pub fn apply(&self, outcome: Result<TodoAction, ServiceError>) -> bool {
        match outcome {
            Ok(action) => self.dispatch(action),
            Err(err) => {
                if !self.scope.is_active() {
                    log::debug!("page unmounted, dropping error from {}", err.command());
                    return false;
                }
                log::warn!("{}", err);
                self.set_last_error.try_set(Some(err.to_string()));
                false
            }
        }
    }

    /// Close the dialog after a confirm for `id`, if it is still showing `id`
    pub fn finish_edit(&self, id: &str, succeeded: bool) {
        if !self.scope.is_active() {
            return;
        }
        self.set_edit_dialog
            .try_update(|dialog| *dialog = std::mem::take(dialog).after_confirm(id, succeeded));
    }
}

/// Config provided by `App`, or defaults when rendered standalone
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

pub fn use_todo_service() -> TauriTodoService {
    use_context::<TauriTodoService>().unwrap_or_default()
}
