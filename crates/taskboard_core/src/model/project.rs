//! Project entity: the root container.
//!
//! # Invariants
//! - `id` is always generated; callers cannot supply one at construction.
//! - The objective list is copied on every read and write.
//! - The manager is a shared handle, never owned by the project.
//! - Start/end dates are stored as given, without ordering checks.

use crate::id::{EntityId, IdGenerator, PROJECT_ID_LEN};
use crate::model::manager::Manager;
use crate::model::objective::Objective;
use crate::model::Shared;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: EntityId,
    manager: Shared<Manager>,
    end_date: NaiveDate,
    objective_list: Vec<Objective>,
    start_date: NaiveDate,
    description: String,
}

impl Project {
    pub fn new(
        ids: &mut IdGenerator,
        manager: Shared<Manager>,
        end_date: NaiveDate,
        objective_list: &[Objective],
        start_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let project = Self {
            id: ids.generate(PROJECT_ID_LEN),
            manager,
            end_date,
            objective_list: objective_list.to_vec(),
            start_date,
            description: description.into(),
        };
        debug!(
            "event=entity_created module=model kind=project id={} manager_id={} objectives={}",
            project.id,
            project.manager.user().id(),
            project.objective_list.len()
        );
        project
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn manager(&self) -> Shared<Manager> {
        Shared::clone(&self.manager)
    }

    pub fn set_manager(&mut self, manager: Shared<Manager>) {
        self.manager = manager;
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        self.end_date = end_date;
    }

    pub fn objective_list(&self) -> Vec<Objective> {
        self.objective_list.clone()
    }

    pub fn set_objective_list(&mut self, objective_list: &[Objective]) {
        self.objective_list = objective_list.to_vec();
    }

    /// Appends a copy of `objective` to the end of the list.
    pub fn add_objective(&mut self, objective: &Objective) {
        self.objective_list.push(objective.clone());
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
