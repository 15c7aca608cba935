//! Notification raised for a task.

use crate::id::{EntityId, IdGenerator, NOTIFICATION_ID_LEN};
use crate::model::task::Task;
use crate::model::Shared;
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

/// Delivery channel of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    Email,
    Sms,
}

/// Timestamped message pointing at one task.
///
/// The task is a shared handle: the notification never owns it. No field is
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: EntityId,
    date: NaiveDateTime,
    #[serde(rename = "type")]
    kind: NotificationType,
    task: Shared<Task>,
    description: String,
}

impl Notification {
    pub fn new(
        ids: &mut IdGenerator,
        date: NaiveDateTime,
        kind: NotificationType,
        task: Shared<Task>,
        description: impl Into<String>,
    ) -> Self {
        let notification = Self {
            id: ids.generate(NOTIFICATION_ID_LEN),
            date,
            kind,
            task,
            description: description.into(),
        };
        debug!(
            "event=entity_created module=model kind=notification id={} task_id={}",
            notification.id,
            notification.task.id()
        );
        notification
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDateTime) {
        self.date = date;
    }

    pub fn kind(&self) -> NotificationType {
        self.kind
    }

    pub fn set_kind(&mut self, kind: NotificationType) {
        self.kind = kind;
    }

    /// Shared handle to the task this notification is about.
    pub fn task(&self) -> Shared<Task> {
        Shared::clone(&self.task)
    }

    pub fn set_task(&mut self, task: Shared<Task>) {
        self.task = task;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}
