//! Task Card Component
//!
//! One task row with its checkbox and the generated plan beneath it.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{use_app_store, store_toggle_task, store_toggle_subtask};

/// A single task with its plan steps
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();

    let task_id = task.id;
    let completed = task.completed;
    let text = task.text.clone();

    view! {
        <div class="task-card">
            <div class="task-row">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| store_toggle_task(&store, task_id)
                />
                <span class=if completed { "task-text completed" } else { "task-text" }>
                    {text}
                </span>
            </div>
            <div class="plan-block">
                <div class="plan-label">"Plan:"</div>
                <ul class="subtask-list">
                    {task.subtasks.iter().map(|st| {
                        let subtask_id = st.id;
                        let st_completed = st.completed;
                        view! {
                            <li class="subtask-row">
                                <input
                                    type="checkbox"
                                    checked=st_completed
                                    on:change=move |_| store_toggle_subtask(&store, task_id, subtask_id)
                                />
                                <span class=if st_completed { "subtask-text completed" } else { "subtask-text" }>
                                    {st.text.clone()}
                                </span>
                                <span class="subtask-time">"(" {st.time.clone()} ")"</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
