//! Task Breakdown Stub
//!
//! Placeholder for a real planning engine. Embeds the task text verbatim
//! into three canned steps; no inference happens here.

use crate::models::{Subtask, Task};

const STEP_PREFIXES: [&str; 3] = ["Plan", "Do", "Review"];
const STEP_TIMES: [&str; 3] = ["15 min", "30 min", "10 min"];

/// Break a task into exactly three canned plan steps.
/// Subtask ids are 1..=3 in order; times are assigned positionally.
pub fn break_down(task_text: &str) -> Vec<Subtask> {
    STEP_PREFIXES
        .iter()
        .zip(STEP_TIMES.iter())
        .enumerate()
        .map(|(i, (prefix, time))| Subtask {
            id: i as u32 + 1,
            text: format!("{}: {}", prefix, task_text),
            time: (*time).to_string(),
            completed: false,
        })
        .collect()
}

/// Build a new task from the draft text.
/// Returns `None` when the trimmed draft is empty; the caller treats
/// that as a full no-op and leaves the draft as-is.
pub fn create_task(draft: &str) -> Option<Task> {
    let text = draft.trim();
    if text.is_empty() {
        return None;
    }
    Some(Task {
        id: next_task_id(),
        text: text.to_string(),
        completed: false,
        subtasks: break_down(text),
    })
}

/// Millisecond wall-clock id. Two tasks created within the same tick
/// collide; accepted for a single-session in-memory list.
#[cfg(target_arch = "wasm32")]
fn next_task_id() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn next_task_id() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_down_three_canned_steps() {
        let steps = break_down("Buy milk");

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].text, "Plan: Buy milk");
        assert_eq!(steps[1].text, "Do: Buy milk");
        assert_eq!(steps[2].text, "Review: Buy milk");
        assert_eq!(steps[0].time, "15 min");
        assert_eq!(steps[1].time, "30 min");
        assert_eq!(steps[2].time, "10 min");
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.id, i as u32 + 1);
            assert!(!step.completed);
        }
    }

    #[test]
    fn test_break_down_embeds_text_verbatim() {
        // Content is ignored beyond embedding, including odd whitespace
        let steps = break_down("  spaced   out  ");
        assert_eq!(steps[0].text, "Plan:   spaced   out  ");
    }

    #[test]
    fn test_create_task_trims_draft() {
        let task = create_task("  Buy milk  ").expect("non-empty draft");

        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.subtasks.len(), 3);
        assert_eq!(task.subtasks[0].text, "Plan: Buy milk");
    }

    #[test]
    fn test_create_task_rejects_empty_and_whitespace() {
        assert!(create_task("").is_none());
        assert!(create_task("   ").is_none());
        assert!(create_task("\t\n").is_none());
    }
}
