//! Todo Frontend App
//!
//! Root component: provides shared context and mounts the todo page.

use leptos::prelude::*;

use crate::components::ToDoPage;
use crate::config::AppConfig;
use crate::service::TauriTodoService;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(config);
    provide_context(TauriTodoService);

    view! {
        <main class="App">
            <ToDoPage />
        </main>
    }
}
