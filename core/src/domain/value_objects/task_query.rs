//! Planned SQL statements for task list queries.

use serde::{Deserialize, Serialize};

use super::task_filter::TaskFilter;

/// A bound statement argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlParam {
    Text(String),
    Int(i64),
}

/// SQL text with `$n` placeholders and the arguments they bind, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Statement {
    /// Number of bound arguments
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Select and count statements derived from the same normalized filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListQuery {
    pub filter: TaskFilter,
    pub select: Statement,
    pub count: Statement,
}
