//! Objective entity: an ordered group of tasks.

use crate::id::{EntityId, IdGenerator, OBJECTIVE_ID_LEN};
use crate::model::task::Task;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Dated container of tasks.
///
/// Unlike [`Task`], the start/end dates are not cross-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    id: EntityId,
    end_date: NaiveDate,
    task_list: Vec<Task>,
    start_date: NaiveDate,
    description: String,
}

impl Objective {
    pub fn new(
        ids: &mut IdGenerator,
        end_date: NaiveDate,
        task_list: &[Task],
        start_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let objective = Self {
            id: ids.generate(OBJECTIVE_ID_LEN),
            end_date,
            task_list: task_list.to_vec(),
            start_date,
            description: description.into(),
        };
        debug!(
            "event=entity_created module=model kind=objective id={} tasks={}",
            objective.id,
            objective.task_list.len()
        );
        objective
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        self.end_date = end_date;
    }

    pub fn task_list(&self) -> Vec<Task> {
        self.task_list.clone()
    }

    pub fn set_task_list(&mut self, task_list: &[Task]) {
        self.task_list = task_list.to_vec();
    }

    /// Appends a copy of `task` to the end of the list.
    pub fn add_task(&mut self, task: &Task) {
        self.task_list.push(task.clone());
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}
