//! One page of the task list plus its pagination block.

use serde::{Deserialize, Serialize};
use tq_shared::types::{PageMeta, Pagination};

use crate::domain::entities::Task;

/// Page result of a list query. Its JSON form is what gets cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    pub pagination: PageMeta,
}

impl TaskPage {
    pub fn new(tasks: Vec<Task>, pagination: Pagination, total_tasks: u64) -> Self {
        Self {
            tasks,
            pagination: PageMeta::new(pagination, total_tasks),
        }
    }
}
