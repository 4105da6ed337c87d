//! Todo Page
//!
//! Owns the page's store and transient UI state, runs controller operations
//! against the service and dispatches their results.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{EditTodo, ErrorBanner, FilterTabs, TodoForm, TodoItem};
use crate::context::{use_todo_service, PageHandle, PageScope};
use crate::controller::{self, EditDialog};
use crate::models::{Todo, TodoId, TodoStatus};
use crate::store::{TodoAction, TodoState, TodoStateStoreFields, TodoStore};
use crate::view_logic::{
    all_ticked, batch_delete_targets, delete_button_label, filter_todos, selected_in, TodoFilter,
};

#[component]
pub fn ToDoPage() -> impl IntoView {
    let service = use_todo_service();

    // State
    let state: TodoStore = Store::new(TodoState::default());
    let (showing, set_showing) = signal(TodoFilter::All);
    let (edit_dialog, set_edit_dialog) = signal(EditDialog::Closed);
    let (last_error, set_last_error) = signal::<Option<String>>(None);

    // Async tasks write through this handle, never through the page's callbacks
    let page = PageHandle::new(PageScope::for_current_owner(), state, set_last_error, set_edit_dialog);

    // Derived views
    let items_after_filter = Memo::new(move |_| {
        let filter = showing.get();
        state.todos().with(|todos| filter_todos(todos, filter))
    });
    let items_selected_after_filter = Memo::new(move |_| {
        items_after_filter.with(|visible| state.selected_item_ids().with(|ids| selected_in(visible, ids)))
    });
    let tick_all_todos = Memo::new(move |_| {
        items_selected_after_filter.with(|selected| items_after_filter.with(|visible| all_ticked(selected, visible)))
    });
    // Changes only when the dialog target changes or disappears, so edits to
    // the same row do not reset the open form
    let editing_id =
        Memo::new(move |_| edit_dialog.with(|dialog| state.todos().with(|todos| dialog.visible_target(todos))));

    // Load todos on mount
    Effect::new({
        let page = page.clone();
        move |_| {
            let page = page.clone();
            spawn_local(async move {
                page.apply(controller::load(&service).await);
            });
        }
    });

    let handle_submit = Callback::new({
        let page = page.clone();
        move |content: String| {
            let page = page.clone();
            spawn_local(async move {
                page.apply(controller::create(&service, &content).await);
            });
        }
    });

    let on_update_todo_status = Callback::new({
        let page = page.clone();
        move |(id, status): (TodoId, TodoStatus)| {
            let page = page.clone();
            spawn_local(async move {
                page.apply(controller::change_status(&service, id, status).await);
            });
        }
    });

    let on_delete_todo = Callback::new({
        let page = page.clone();
        move |id: TodoId| {
            let page = page.clone();
            spawn_local(async move {
                page.apply(controller::delete_one(&service, id).await);
            });
        }
    });

    // Delete the ticked todos, or everything in the current view if none are ticked
    let on_delete_all_todo = {
        let page = page.clone();
        move |_: web_sys::MouseEvent| {
            let targets = items_after_filter
                .with(|visible| items_selected_after_filter.with(|selected| batch_delete_targets(visible, selected)));
            let page = page.clone();
            spawn_local(async move {
                page.apply(controller::delete_batch(&service, targets).await);
            });
        }
    };

    let on_tick_todo = Callback::new({
        let page = page.clone();
        move |(id, checked): (TodoId, bool)| {
            page.dispatch(TodoAction::ToggleTickTodo { id, checked });
        }
    });

    let on_tick_all_todos = Callback::new({
        let page = page.clone();
        move |checked: bool| {
            page.dispatch(TodoAction::ToggleTickAllTodos(checked));
        }
    });

    let handle_open_edit_todo = Callback::new(move |id: TodoId| set_edit_dialog.set(EditDialog::Open(id)));
    let handle_close_edit_todo = Callback::new(move |_: ()| set_edit_dialog.set(EditDialog::Closed));

    let handle_confirm = Callback::new(move |todo: Todo| {
        let page = page.clone();
        spawn_local(async move {
            let id = todo.id.clone();
            let outcome = controller::confirm_edit(&service, todo).await;
            let succeeded = outcome.is_ok();
            page.apply(outcome);
            page.finish_edit(&id, succeeded);
        });
    });

    view! {
        <div class="ToDo__container" aria-label="todo-page">
            <div class="ToDo__container__head">
                <div class="Todo__creation">
                    <TodoForm on_submit=handle_submit />
                </div>
                <div class="ToDo__container__filter">
                    <Show
                        when=move || items_after_filter.with(|visible| !visible.is_empty())
                        fallback=|| view! { <div /> }
                    >
                        <input
                            aria-label="todo-page-check-all"
                            type="checkbox"
                            prop:checked=move || tick_all_todos.get()
                            on:change=move |ev| on_tick_all_todos.run(event_target_checked(&ev))
                        />
                    </Show>
                    <FilterTabs showing=showing set_showing=set_showing />
                </div>
            </div>

            <ErrorBanner message=last_error set_message=set_last_error />

            <div class="ToDo__list">
                <For
                    each=move || items_after_filter.get()
                    key=|todo| (todo.id.clone(), todo.content.clone(), todo.status)
                    children=move |todo| {
                        let id = todo.id.clone();
                        let active = Signal::derive(move || state.selected_item_ids().with(|ids| ids.contains(&id)));
                        view! {
                            <TodoItem
                                todo=todo
                                active=active
                                on_change_status=on_update_todo_status
                                on_remove=on_delete_todo
                                on_tick=on_tick_todo
                                on_double_click=handle_open_edit_todo
                            />
                        }
                    }
                />
            </div>

            <div class="Todo__toolbar">
                <button
                    aria-label="todo-page-delete"
                    class="Action__btn Todo__toolbar__delete-all"
                    on:click=on_delete_all_todo
                >
                    {move || delete_button_label(items_selected_after_filter.with(Vec::len), tick_all_todos.get())}
                </button>
            </div>
        </div>

        {move || {
            let id = editing_id.get()?;
            let todo = state.todos().with_untracked(|todos| todos.iter().find(|todo| todo.id == id).cloned())?;
            Some(view! {
                <EditTodo todo=todo on_cancel=handle_close_edit_todo on_confirm=handle_confirm />
            })
        }}
    }
}
