//! Error Banner Component
//!
//! Shows the last failed service call until dismissed or timed out.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_config;

#[component]
pub fn ErrorBanner(
    message: ReadSignal<Option<String>>,
    set_message: WriteSignal<Option<String>>,
) -> impl IntoView {
    let timeout_ms = use_config().error_banner_timeout_ms;

    // Auto-dismiss, unless a newer error replaced this one meanwhile
    Effect::new(move |_| {
        let shown = message.get();
        if shown.is_none() || timeout_ms == 0 { return; }
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            if message.try_get_untracked().flatten() == shown {
                set_message.try_set(None);
            }
        });
    });

    view! {
        {move || message.get().map(|text| view! {
            <div class="Todo__error" role="alert" aria-label="todo-page-error">
                <span class="Todo__error__text">{text}</span>
                <button
                    class="Action__btn"
                    aria-label="todo-page-error-dismiss"
                    on:click=move |_| set_message.set(None)
                >
                    "×"
                </button>
            </div>
        })}
    }
}
