//! Material entity.

use crate::id::{EntityId, IdGenerator, MATERIAL_ID_LEN};
use crate::model::task::Task;
use log::debug;
use serde::{Deserialize, Serialize};

/// Named, typed resource with the tasks it is used by.
///
/// The task list is copied on every read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    id: EntityId,
    tasks: Vec<Task>,
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

impl Material {
    pub fn new(
        ids: &mut IdGenerator,
        tasks: &[Task],
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        let material = Self {
            id: ids.generate(MATERIAL_ID_LEN),
            tasks: tasks.to_vec(),
            name: name.into(),
            kind: kind.into(),
        };
        debug!(
            "event=entity_created module=model kind=material id={}",
            material.id
        );
        material
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn set_tasks(&mut self, tasks: &[Task]) {
        self.tasks = tasks.to_vec();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Free-form material type (`type` on the wire).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }
}
