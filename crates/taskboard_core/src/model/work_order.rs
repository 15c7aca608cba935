//! Work order attached to a task.

use crate::id::{EntityId, IdGenerator, WORK_ORDER_ID_LEN};
use log::debug;
use serde::{Deserialize, Serialize};

/// Titled unit of work with an 8-symbol id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    id: EntityId,
    title: String,
    description: String,
}

impl WorkOrder {
    pub fn new(
        ids: &mut IdGenerator,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let work_order = Self {
            id: ids.generate(WORK_ORDER_ID_LEN),
            title: title.into(),
            description: description.into(),
        };
        debug!(
            "event=entity_created module=model kind=work_order id={}",
            work_order.id
        );
        work_order
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}
