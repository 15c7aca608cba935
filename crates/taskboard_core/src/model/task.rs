//! Task entity.
//!
//! # Responsibility
//! - Carry priority, date range and status for one unit of work.
//! - Own copies of its material, notification, member and work-order lists.
//!
//! # Invariants
//! - `priority >= 1`.
//! - `start_date <= end_date`, checked by whichever setter moves a bound.
//! - `id` is generated once (10 symbols) and never changes.
//! - List getters return fresh copies; list setters store fresh copies.

use crate::id::{EntityId, IdGenerator, TASK_ID_LEN};
use crate::model::material::Material;
use crate::model::member::Member;
use crate::model::notification::Notification;
use crate::model::task_status::TaskStatus;
use crate::model::work_order::WorkOrder;
use crate::model::{log_rejection, Shared};
use crate::validation::{check_date_range, check_priority, ValidationError, ValidationResult};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Construction input for [`Task::new`].
///
/// Lists are borrowed; the task stores its own copies.
#[derive(Debug, Clone, Copy)]
pub struct NewTask<'a> {
    pub description: &'a str,
    pub priority: i32,
    pub materials: &'a [Shared<Material>],
    pub notifications: &'a [Notification],
    pub start_date: NaiveDate,
    pub members: &'a [Shared<Member>],
    pub work_orders: &'a [WorkOrder],
    pub end_date: NaiveDate,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: EntityId,
    description: String,
    priority: i32,
    materials: Vec<Shared<Material>>,
    notifications: Vec<Notification>,
    start_date: NaiveDate,
    members: Vec<Shared<Member>>,
    work_orders: Vec<WorkOrder>,
    end_date: NaiveDate,
    status: TaskStatus,
}

impl Task {
    /// Creates a task with a generated id.
    ///
    /// Fields are applied in the order description, priority, materials,
    /// notifications, start date, members, work orders, end date, status.
    /// The start date is taken before any end date exists, so a reversed
    /// range surfaces on the end-date step.
    ///
    /// # Errors
    /// - `InvalidPriority` when `priority < 1`.
    /// - `InvalidDateRange` when `start_date > end_date`.
    pub fn new(ids: &mut IdGenerator, input: NewTask<'_>) -> ValidationResult<Self> {
        check_priority(input.priority).inspect_err(|err| log_rejection("task", "priority", err))?;
        check_date_range(input.start_date, input.end_date)
            .inspect_err(|err| log_rejection("task", "end_date", err))?;

        let task = Self {
            id: ids.generate(TASK_ID_LEN),
            description: input.description.to_string(),
            priority: input.priority,
            materials: input.materials.to_vec(),
            notifications: input.notifications.to_vec(),
            start_date: input.start_date,
            members: input.members.to_vec(),
            work_orders: input.work_orders.to_vec(),
            end_date: input.end_date,
            status: input.status,
        };
        debug!("event=entity_created module=model kind=task id={}", task.id);
        Ok(task)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// # Errors
    /// `InvalidPriority` when `priority < 1`; the previous value is kept.
    pub fn set_priority(&mut self, priority: i32) -> ValidationResult<()> {
        check_priority(priority).inspect_err(|err| log_rejection("task", "priority", err))?;
        self.priority = priority;
        Ok(())
    }

    pub fn materials(&self) -> Vec<Shared<Material>> {
        self.materials.clone()
    }

    pub fn set_materials(&mut self, materials: &[Shared<Material>]) {
        self.materials = materials.to_vec();
    }

    pub fn add_material(&mut self, material: Shared<Material>) {
        self.materials.push(material);
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    pub fn set_notifications(&mut self, notifications: &[Notification]) {
        self.notifications = notifications.to_vec();
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// # Errors
    /// `InvalidDateRange` when `start_date` is after the current end date.
    pub fn set_start_date(&mut self, start_date: NaiveDate) -> ValidationResult<()> {
        check_date_range(start_date, self.end_date)
            .inspect_err(|err| log_rejection("task", "start_date", err))?;
        self.start_date = start_date;
        Ok(())
    }

    pub fn members(&self) -> Vec<Shared<Member>> {
        self.members.clone()
    }

    pub fn set_members(&mut self, members: &[Shared<Member>]) {
        self.members = members.to_vec();
    }

    pub fn add_member(&mut self, member: Shared<Member>) {
        self.members.push(member);
    }

    pub fn work_orders(&self) -> Vec<WorkOrder> {
        self.work_orders.clone()
    }

    pub fn set_work_orders(&mut self, work_orders: &[WorkOrder]) {
        self.work_orders = work_orders.to_vec();
    }

    pub fn add_work_order(&mut self, work_order: WorkOrder) {
        self.work_orders.push(work_order);
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// # Errors
    /// `InvalidDateRange` when `end_date` is before the current start date.
    pub fn set_end_date(&mut self, end_date: NaiveDate) -> ValidationResult<()> {
        check_date_range(self.start_date, end_date)
            .inspect_err(|err| log_rejection("task", "end_date", err))?;
        self.end_date = end_date;
        Ok(())
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

/// Persisted task shape; invariants are re-checked on load.
#[derive(Deserialize)]
struct TaskRecord {
    id: EntityId,
    description: String,
    priority: i32,
    materials: Vec<Shared<Material>>,
    notifications: Vec<Notification>,
    start_date: NaiveDate,
    members: Vec<Shared<Member>>,
    work_orders: Vec<WorkOrder>,
    end_date: NaiveDate,
    status: TaskStatus,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        check_priority(record.priority)?;
        check_date_range(record.start_date, record.end_date)?;
        Ok(Self {
            id: record.id,
            description: record.description,
            priority: record.priority,
            materials: record.materials,
            notifications: record.notifications,
            start_date: record.start_date,
            members: record.members,
            work_orders: record.work_orders,
            end_date: record.end_date,
            status: record.status,
        })
    }
}
