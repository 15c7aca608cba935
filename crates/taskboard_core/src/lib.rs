//! Core domain logic for Taskboard.
//! This crate is the single source of truth for business invariants: entity
//! shapes, field validation, date ordering and id generation.

pub mod id;
pub mod logging;
pub mod model;
pub mod validation;

pub use id::{generate_id, EntityId, IdGenerator};
pub use logging::{
    default_log_level, init_logging, logging_status, LogLevel, LoggingConfig, LoggingError,
};
pub use model::manager::Manager;
pub use model::material::Material;
pub use model::member::Member;
pub use model::notification::{Notification, NotificationType};
pub use model::objective::Objective;
pub use model::project::Project;
pub use model::skill::Skill;
pub use model::task::{NewTask, Task};
pub use model::task_status::{TaskStatus, UnknownTaskStatus};
pub use model::user::{Account, NewUser, Sex, User};
pub use model::work_order::WorkOrder;
pub use model::Shared;
pub use validation::{PasswordRule, ValidationError, ValidationResult};

/// Minimal health-check API for integration probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
