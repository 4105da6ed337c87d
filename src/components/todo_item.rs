//! Todo Item Component
//!
//! Individual row in the todo list.

use leptos::prelude::*;

use crate::models::{Todo, TodoId, TodoStatus};

/// A single todo row: tick box, content (double-click to edit), status toggle, delete
#[component]
pub fn TodoItem(
    todo: Todo,
    /// Whether the row is ticked
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_change_status: Callback<(TodoId, TodoStatus)>,
    #[prop(into)] on_remove: Callback<TodoId>,
    #[prop(into)] on_tick: Callback<(TodoId, bool)>,
    #[prop(into)] on_double_click: Callback<TodoId>,
) -> impl IntoView {
    let Todo { id, content, status } = todo;
    let completed = status == TodoStatus::Completed;
    let tick_id = id.clone();
    let status_id = id.clone();
    let remove_id = id.clone();
    let edit_id = id;

    view! {
        <div class=if completed { "ToDo__item ToDo__item--completed" } else { "ToDo__item" }>
            <input
                type="checkbox"
                aria-label="todo-item-tick"
                prop:checked=move || active.get()
                on:change=move |ev| on_tick.run((tick_id.clone(), event_target_checked(&ev)))
            />

            <span
                class="ToDo__item__content"
                aria-label="todo-item-content"
                on:dblclick=move |_| on_double_click.run(edit_id.clone())
            >
                {content}
            </span>

            <button
                class=if completed { "Action__btn Todo__status Todo__status--completed" } else { "Action__btn Todo__status" }
                aria-label="todo-item-status"
                title=format!("Mark as {}", status.toggled().label().to_lowercase())
                on:click=move |_| on_change_status.run((status_id.clone(), status.toggled()))
            >
                {status.label()}
            </button>

            <button
                class="Todo__delete"
                aria-label="todo-item-delete"
                on:click=move |_| on_remove.run(remove_id.clone())
            >
                "×"
            </button>
        </div>
    }
}
