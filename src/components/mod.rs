//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod task_card;
mod task_list;

pub use new_task_form::NewTaskForm;
pub use task_card::TaskCard;
pub use task_list::TaskList;
