//! Edit Todo Dialog
//!
//! Modal form for changing a todo's content and status.

use leptos::prelude::*;

use crate::models::{Todo, TodoStatus};

/// Edit dialog for one todo. Confirm hands back the edited todo; the caller
/// decides whether the dialog closes.
#[component]
pub fn EditTodo(
    todo: Todo,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_confirm: Callback<Todo>,
) -> impl IntoView {
    let Todo { id, content, status } = todo;
    let (content, set_content) = signal(content);
    let (status, set_status) = signal(status);

    let confirm = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        let text = text.trim();
        if text.is_empty() { return; }

        on_confirm.run(Todo {
            id: id.clone(),
            content: text.to_string(),
            status: status.get(),
        });
    };

    view! {
        <div class="Modal__backdrop">
            <form class="Modal EditTodo" aria-label="edit-todo" on:submit=confirm>
                <h2 class="Modal__title">"Edit todo"</h2>

                <input
                    type="text"
                    aria-label="edit-todo-content"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                />

                <select
                    aria-label="edit-todo-status"
                    on:change=move |ev| {
                        if let Ok(selected) = event_target_value(&ev).parse::<TodoStatus>() {
                            set_status.set(selected);
                        }
                    }
                >
                    {TodoStatus::ALL.iter().map(|&option| view! {
                        <option value=option.as_str() prop:selected=move || status.get() == option>
                            {option.label()}
                        </option>
                    }).collect_view()}
                </select>

                <div class="Modal__actions">
                    <button
                        type="button"
                        class="Action__btn"
                        aria-label="edit-todo-cancel"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="Action__btn Action__btn--primary" aria-label="edit-todo-confirm">
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}
