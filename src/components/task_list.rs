//! Task List Component
//!
//! Projects the store into a vertical list, newest first.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Task list with empty-state message
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="task-list">
            {move || store.tasks().get().is_empty().then(|| view! {
                <div class="empty-state">"No tasks yet. Add your first task above!"</div>
            })}
            {move || store.tasks().get().into_iter().map(|task| {
                view! { <TaskCard task=task /> }
            }).collect_view()}
        </div>
    }
}
