//! Filter Tabs Component
//!
//! All / Active / Completed switch in the page header.

use leptos::prelude::*;

use crate::view_logic::TodoFilter;

#[component]
pub fn FilterTabs(
    showing: ReadSignal<TodoFilter>,
    set_showing: WriteSignal<TodoFilter>,
) -> impl IntoView {
    view! {
        <div class="Todo__tabs">
            {TodoFilter::ALL.iter().map(|&filter| {
                let tab_class = move || {
                    if showing.get() == filter { "Action__btn Action__btn--primary" } else { "Action__btn" }
                };
                view! {
                    <button
                        aria-label=format!("todo-page-filter-{}", filter.slug())
                        class=tab_class
                        on:click=move |_| set_showing.set(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
