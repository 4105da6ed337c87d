//! View Logic
//!
//! Pure projections from store state and the filter tab to what the page shows.

use std::collections::BTreeSet;

use crate::models::{Todo, TodoId, TodoStatus};

/// Filter tab selected in the page header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    /// Suffix used in the tab's aria-label
    pub fn slug(self) -> &'static str {
        match self {
            TodoFilter::All => "all",
            TodoFilter::Active => "active",
            TodoFilter::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => TodoStatus::Active.label(),
            TodoFilter::Completed => TodoStatus::Completed.label(),
        }
    }

    pub fn accepts(self, status: TodoStatus) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => status == TodoStatus::Active,
            TodoFilter::Completed => status == TodoStatus::Completed,
        }
    }
}

/// Todos visible under `filter`, order preserved
pub fn filter_todos(todos: &[Todo], filter: TodoFilter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| filter.accepts(todo.status))
        .cloned()
        .collect()
}

/// Visible todos that are also ticked
pub fn selected_in(visible: &[Todo], selected_ids: &BTreeSet<TodoId>) -> Vec<Todo> {
    visible
        .iter()
        .filter(|todo| selected_ids.contains(&todo.id))
        .cloned()
        .collect()
}

/// True when every visible todo is ticked (vacuously true for an empty view)
pub fn all_ticked(selected: &[Todo], visible: &[Todo]) -> bool {
    selected.len() == visible.len()
}

/// Ids removed by the toolbar button: the ticked ones, or the whole view if none are ticked
pub fn batch_delete_targets(visible: &[Todo], selected: &[Todo]) -> Vec<TodoId> {
    let source = if selected.is_empty() { visible } else { selected };
    source.iter().map(|todo| todo.id.clone()).collect()
}

pub fn delete_button_label(selected_count: usize, all_ticked: bool) -> String {
    if all_ticked || selected_count == 0 {
        "Clear all todos".to_string()
    } else {
        format!("Clear {} todo(s) selected", selected_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{reduce, TodoAction, TodoState};

    fn make_todo(id: &str, content: &str, status: TodoStatus) -> Todo {
        Todo {
            id: id.to_string(),
            content: content.to_string(),
            status,
        }
    }

    /// (visible, selected, all ticked, label, targets)
    fn project(state: &TodoState, filter: TodoFilter) -> (Vec<Todo>, Vec<Todo>, bool, String, Vec<TodoId>) {
        let visible = filter_todos(&state.todos, filter);
        let selected = selected_in(&visible, &state.selected_item_ids);
        let ticked = all_ticked(&selected, &visible);
        let label = delete_button_label(selected.len(), ticked);
        let targets = batch_delete_targets(&visible, &selected);
        (visible, selected, ticked, label, targets)
    }

    #[test]
    fn test_filter_preserves_order() {
        let todos = vec![
            make_todo("1", "a", TodoStatus::Active),
            make_todo("2", "b", TodoStatus::Completed),
            make_todo("3", "c", TodoStatus::Active),
        ];
        assert_eq!(filter_todos(&todos, TodoFilter::All), todos);
        let active: Vec<_> = filter_todos(&todos, TodoFilter::Active).into_iter().map(|t| t.id).collect();
        assert_eq!(active, vec!["1", "3"]);
        let completed: Vec<_> = filter_todos(&todos, TodoFilter::Completed).into_iter().map(|t| t.id).collect();
        assert_eq!(completed, vec!["2"]);
    }

    #[test]
    fn test_empty_page() {
        let state = reduce(&TodoState::default(), TodoAction::SetTodos(Vec::new()));
        let (visible, _, ticked, label, targets) = project(&state, TodoFilter::All);
        assert!(visible.is_empty());
        assert!(ticked);
        assert_eq!(label, "Clear all todos");
        assert!(targets.is_empty());
    }

    #[test]
    fn test_nothing_selected_targets_whole_view() {
        let state = reduce(
            &TodoState::default(),
            TodoAction::SetTodos(vec![make_todo("1", "buy milk", TodoStatus::Active)]),
        );
        let (_, selected, ticked, label, targets) = project(&state, TodoFilter::All);
        assert!(selected.is_empty());
        assert!(!ticked);
        assert_eq!(label, "Clear all todos");
        assert_eq!(targets, vec!["1"]);
    }

    #[test]
    fn test_single_ticked_item() {
        let state = reduce(
            &TodoState::default(),
            TodoAction::SetTodos(vec![make_todo("1", "buy milk", TodoStatus::Active)]),
        );
        let state = reduce(&state, TodoAction::ToggleTickTodo { id: "1".to_string(), checked: true });
        assert!(state.selected_item_ids.contains("1"));

        let (_, selected, ticked, label, targets) = project(&state, TodoFilter::All);
        assert_eq!(selected.len(), 1);
        assert!(ticked);
        assert_eq!(label, "Clear all todos");
        assert_eq!(targets, vec!["1"]);
    }

    #[test]
    fn test_selection_outside_filter_is_ignored() {
        let state = reduce(
            &TodoState::default(),
            TodoAction::SetTodos(vec![
                make_todo("1", "buy milk", TodoStatus::Active),
                make_todo("2", "pay rent", TodoStatus::Completed),
            ]),
        );
        let state = reduce(&state, TodoAction::ToggleTickTodo { id: "2".to_string(), checked: true });

        let (visible, selected, ticked, label, targets) = project(&state, TodoFilter::Active);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
        assert!(selected.is_empty());
        assert!(!ticked);
        assert_eq!(label, "Clear all todos");
        assert_eq!(targets, vec!["1"]);
    }

    #[test]
    fn test_partial_selection_label() {
        let state = reduce(
            &TodoState::default(),
            TodoAction::SetTodos(vec![
                make_todo("1", "a", TodoStatus::Active),
                make_todo("2", "b", TodoStatus::Active),
                make_todo("3", "c", TodoStatus::Active),
            ]),
        );
        let state = reduce(&state, TodoAction::ToggleTickTodo { id: "1".to_string(), checked: true });
        let state = reduce(&state, TodoAction::ToggleTickTodo { id: "3".to_string(), checked: true });

        let (_, _, ticked, label, targets) = project(&state, TodoFilter::All);
        assert!(!ticked);
        assert_eq!(label, "Clear 2 todo(s) selected");
        assert_eq!(targets, vec!["1", "3"]);
    }
}
