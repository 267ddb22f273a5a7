//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The mutation
//! logic itself is plain functions over `Vec<Task>` so it can be unit
//! tested without a reactive runtime.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::Task;

/// Global application state, scoped to one page session
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, newest first
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task to the store, newest first
pub fn store_add_task(store: &AppStore, task: Task) {
    add_task(&mut store.tasks().write(), task);
}

/// Toggle a task's completion in the store by ID
pub fn store_toggle_task(store: &AppStore, task_id: u64) {
    toggle_task(&mut store.tasks().write(), task_id);
}

/// Toggle one subtask's completion in the store by ID pair
pub fn store_toggle_subtask(store: &AppStore, task_id: u64, subtask_id: u32) {
    toggle_subtask(&mut store.tasks().write(), task_id, subtask_id);
}

// ========================
// Mutations
// ========================

/// Prepend a task. No deduplication, no capacity limit.
pub fn add_task(tasks: &mut Vec<Task>, task: Task) {
    tasks.insert(0, task);
}

/// Flip a task's completed flag. Unknown ids are a no-op, not an error.
pub fn toggle_task(tasks: &mut [Task], task_id: u64) {
    tasks.iter_mut()
        .find(|task| task.id == task_id)
        .map(|task| task.completed = !task.completed);
}

/// Flip one subtask's completed flag, leaving the parent task's own flag
/// and sibling subtasks alone. No-op if either id fails to match.
pub fn toggle_subtask(tasks: &mut [Task], task_id: u64, subtask_id: u32) {
    tasks.iter_mut()
        .find(|task| task.id == task_id)
        .and_then(|task| task.subtasks.iter_mut().find(|st| st.id == subtask_id))
        .map(|st| st.completed = !st.completed);
}
