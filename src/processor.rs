use serde_json::Value;

use crate::error::{Result, TaskFetchError};
use crate::filter::{Selector, StatusFilter};
use crate::models::Task;

/// Outcome of shaping and filtering one response.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    pub fetched: usize,
    pub tasks: Vec<Task>,
    /// A filter was asked for and nothing matched it.
    pub no_match: bool,
}

/// The response must be a JSON array; anything else is rejected before
/// any record is looked at.
pub fn into_tasks(body: Value) -> Result<Vec<Task>> {
    match body {
        Value::Array(items) => Ok(items.into_iter().map(Task::new).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Object(_) => {
            Err(TaskFetchError::UnexpectedShape)
        }
    }
}

pub fn apply_selector(tasks: Vec<Task>, selector: Selector) -> Vec<Task> {
    if selector == Selector::All {
        return tasks;
    }
    tasks.into_iter().filter(|task| selector.keeps(task)).collect()
}

pub fn process(body: Value, filter: &StatusFilter) -> Result<Processed> {
    let tasks = into_tasks(body)?;
    let fetched = tasks.len();
    let tasks = apply_selector(tasks, filter.selector);

    log::debug!(
        "kept {} of {} tasks with selector {:?}",
        tasks.len(),
        fetched,
        filter.selector
    );

    Ok(Processed {
        fetched,
        no_match: filter.is_requested() && tasks.is_empty(),
        tasks,
    })
}
