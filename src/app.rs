//! Task Planner App
//!
//! Main application component. Owns the task store and provides it to
//! the form and list via context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTaskForm, TaskList};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Sole process-wide state: empty on load, gone on teardown
    let store = Store::new(AppState::default());
    provide_context(store);

    view! {
        <div class="app-layout">
            <h1>"AI Task Planner"</h1>
            <p class="tagline">"Your productivity, supercharged by AI."</p>

            <NewTaskForm />

            <TaskList />

            <p class="task-count">{move || format!("{} tasks", store.tasks().get().len())}</p>
        </div>
    }
}
