//! Task-management domain model.
//!
//! # Responsibility
//! - Define the entities and their field-level and cross-field invariants.
//! - Tie projects -> objectives -> tasks -> (materials, members, work
//!   orders, notifications) together.
//!
//! # Invariants
//! - Every entity with identity gets a generated id at construction.
//! - Containers own private copies of the lists handed to them.
//! - Cross-references (task members/materials, notification task, project
//!   manager) are [`Shared`] handles and never owned by the referrer.

use crate::validation::ValidationError;
use log::warn;
use std::rc::Rc;

pub mod manager;
pub mod material;
pub mod member;
pub mod notification;
pub mod objective;
pub mod project;
pub mod skill;
pub mod task;
pub mod task_status;
pub mod user;
pub mod work_order;

/// Non-owning handle to an entity held by another container.
///
/// Immutable once shared; use `Rc::make_mut` to edit a private copy.
pub type Shared<T> = Rc<T>;

pub(crate) fn log_rejection(entity: &'static str, field: &'static str, err: &ValidationError) {
    warn!(
        "event=validation_rejected module=model status=error entity={} field={} reason={}",
        entity,
        field,
        err.kind()
    );
}
