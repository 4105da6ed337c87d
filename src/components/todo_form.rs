//! Todo Form Component
//!
//! Input row for creating todos.

use leptos::prelude::*;

/// Form for creating a new todo; blank input is ignored
#[component]
pub fn TodoForm(#[prop(into)] on_submit: Callback<String>) -> impl IntoView {
    let (content, set_content) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        let text = text.trim();
        if text.is_empty() { return; }

        on_submit.run(text.to_string());
        set_content.set(String::new());
    };

    view! {
        <form class="Todo__form" on:submit=submit>
            <input
                type="text"
                class="Todo__input"
                aria-label="todo-form-input"
                placeholder="What needs to be done?"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            />
            <button type="submit" class="Action__btn" aria-label="todo-form-submit">"Add"</button>
        </form>
    }
}
