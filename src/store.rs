//! Page State Store
//!
//! Reducer-driven to-do state. `reduce` is pure; the page wraps its result in
//! a Leptos `reactive_stores::Store` for field-level reactivity.

use std::collections::BTreeSet;

use reactive_stores::Store;

use crate::models::{Todo, TodoId, TodoPatch, TodoStatus};

/// To-do list state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// All todos, in display order
    pub todos: Vec<Todo>,
    /// Ids the user has ticked
    pub selected_item_ids: BTreeSet<TodoId>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Every state transition the page can request
#[derive(Clone, Debug, PartialEq)]
pub enum TodoAction {
    SetTodos(Vec<Todo>),
    CreateTodo(Todo),
    UpdateTodoStatus { id: TodoId, status: TodoStatus },
    DeleteTodos(Vec<TodoId>),
    ToggleTickTodo { id: TodoId, checked: bool },
    ToggleTickAllTodos(bool),
    UpdateTodo { id: TodoId, fields: TodoPatch },
}

impl TodoAction {
    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            TodoAction::SetTodos(_) => "SetTodos",
            TodoAction::CreateTodo(_) => "CreateTodo",
            TodoAction::UpdateTodoStatus { .. } => "UpdateTodoStatus",
            TodoAction::DeleteTodos(_) => "DeleteTodos",
            TodoAction::ToggleTickTodo { .. } => "ToggleTickTodo",
            TodoAction::ToggleTickAllTodos(_) => "ToggleTickAllTodos",
            TodoAction::UpdateTodo { .. } => "UpdateTodo",
        }
    }
}

/// Apply `action` to `state`, returning the next state
pub fn reduce(state: &TodoState, action: TodoAction) -> TodoState {
    let mut next = state.clone();
    match action {
        TodoAction::SetTodos(todos) => {
            next.todos = todos;
        }
        TodoAction::CreateTodo(todo) => {
            next.todos.push(todo);
        }
        TodoAction::UpdateTodoStatus { id, status } => {
            if let Some(todo) = next.todos.iter_mut().find(|todo| todo.id == id) {
                todo.status = status;
            }
        }
        TodoAction::DeleteTodos(ids) => {
            let ids: BTreeSet<TodoId> = ids.into_iter().collect();
            next.todos.retain(|todo| !ids.contains(&todo.id));
            next.selected_item_ids.retain(|id| !ids.contains(id));
        }
        TodoAction::ToggleTickTodo { id, checked } => {
            if checked {
                next.selected_item_ids.insert(id);
            } else {
                next.selected_item_ids.remove(&id);
            }
        }
        TodoAction::ToggleTickAllTodos(checked) => {
            next.selected_item_ids = if checked {
                next.todos.iter().map(|todo| todo.id.clone()).collect()
            } else {
                BTreeSet::new()
            };
        }
        TodoAction::UpdateTodo { id, fields } => {
            if let Some(todo) = next.todos.iter_mut().find(|todo| todo.id == id) {
                todo.merge(&fields);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_logic::{all_ticked, filter_todos, selected_in, TodoFilter};

    fn make_todo(id: &str, status: TodoStatus) -> Todo {
        Todo {
            id: id.to_string(),
            content: format!("Todo {}", id),
            status,
        }
    }

    fn state_with(todos: Vec<Todo>, selected: &[&str]) -> TodoState {
        TodoState {
            todos,
            selected_item_ids: selected.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn sample() -> TodoState {
        state_with(
            vec![
                make_todo("1", TodoStatus::Active),
                make_todo("2", TodoStatus::Completed),
                make_todo("3", TodoStatus::Active),
            ],
            &["1"],
        )
    }

    #[test]
    fn test_set_todos_replaces_list() {
        let state = sample();
        let list = vec![make_todo("1", TodoStatus::Completed), make_todo("9", TodoStatus::Active)];
        let next = reduce(&state, TodoAction::SetTodos(list.clone()));
        assert_eq!(next.todos, list);
        assert_eq!(next.selected_item_ids, state.selected_item_ids);

        let empty = reduce(&TodoState::default(), TodoAction::SetTodos(Vec::new()));
        assert!(empty.todos.is_empty());
        assert!(empty.selected_item_ids.is_empty());
    }

    #[test]
    fn test_set_todos_keeps_selection() {
        let state = sample();
        let next = reduce(&state, TodoAction::SetTodos(vec![make_todo("7", TodoStatus::Active)]));
        assert_eq!(next.todos, vec![make_todo("7", TodoStatus::Active)]);
        assert_eq!(next.selected_item_ids, state.selected_item_ids);
    }

    #[test]
    fn test_create_appends() {
        let state = sample();
        let item = make_todo("4", TodoStatus::Active);
        let next = reduce(&state, TodoAction::CreateTodo(item.clone()));
        assert_eq!(next.todos.len(), state.todos.len() + 1);
        assert_eq!(next.todos.last(), Some(&item));
        assert_eq!(&next.todos[..3], &state.todos[..]);
    }

    #[test]
    fn test_update_status_only_touches_match() {
        let state = sample();
        let next = reduce(
            &state,
            TodoAction::UpdateTodoStatus { id: "3".to_string(), status: TodoStatus::Completed },
        );
        assert_eq!(next.todos[2].status, TodoStatus::Completed);
        assert_eq!(next.todos[2].content, state.todos[2].content);
        assert_eq!(&next.todos[..2], &state.todos[..2]);

        let unchanged = reduce(
            &state,
            TodoAction::UpdateTodoStatus { id: "missing".to_string(), status: TodoStatus::Completed },
        );
        assert_eq!(unchanged, state);
    }

    #[test]
    fn test_delete_removes_and_prunes_selection() {
        let state = sample();
        let next = reduce(
            &state,
            TodoAction::DeleteTodos(vec!["1".to_string(), "2".to_string(), "missing".to_string()]),
        );
        assert_eq!(next.todos.len(), state.todos.len() - 2);
        assert_eq!(next.todos[0].id, "3");
        assert!(next.selected_item_ids.is_empty());
    }

    #[test]
    fn test_tick_is_idempotent() {
        let tick = || TodoAction::ToggleTickTodo { id: "2".to_string(), checked: true };
        let once = reduce(&sample(), tick());
        let twice = reduce(&once, tick());
        assert_eq!(once.selected_item_ids, twice.selected_item_ids);
        assert_eq!(once.selected_item_ids.len(), 2);

        let unticked = reduce(&twice, TodoAction::ToggleTickTodo { id: "2".to_string(), checked: false });
        assert_eq!(unticked.selected_item_ids, sample().selected_item_ids);
    }

    #[test]
    fn test_tick_all_covers_every_filter() {
        let next = reduce(&sample(), TodoAction::ToggleTickAllTodos(true));
        for filter in TodoFilter::ALL {
            let visible = filter_todos(&next.todos, filter);
            let selected = selected_in(&visible, &next.selected_item_ids);
            assert!(all_ticked(&selected, &visible), "filter {:?}", filter);
        }

        let cleared = reduce(&next, TodoAction::ToggleTickAllTodos(false));
        assert!(cleared.selected_item_ids.is_empty());
    }

    #[test]
    fn test_update_todo_merges_fields() {
        let state = sample();
        let fields = TodoPatch {
            content: Some("walk dog".to_string()),
            status: None,
        };
        let next = reduce(&state, TodoAction::UpdateTodo { id: "1".to_string(), fields });
        assert_eq!(next.todos[0].id, "1");
        assert_eq!(next.todos[0].content, "walk dog");
        assert_eq!(next.todos[0].status, TodoStatus::Active);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = sample();
        let snapshot = state.clone();
        let _ = reduce(&state, TodoAction::DeleteTodos(vec!["1".to_string()]));
        assert_eq!(state, snapshot);
    }
}
