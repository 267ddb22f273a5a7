//! New Task Form Component
//!
//! Draft input plus submit button. Submitting (button or Enter in the
//! input) breaks the task down and prepends it to the store.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::planner;
use crate::store::{use_app_store, store_add_task};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Whitespace-only drafts are rejected silently; the draft keeps
        // whatever the user typed.
        let Some(task) = planner::create_task(&draft.get()) else {
            return;
        };
        store_add_task(&store, task);
        set_draft.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(input.value());
                }
            />
            <button type="submit">"Add Task"</button>
        </form>
    }
}
