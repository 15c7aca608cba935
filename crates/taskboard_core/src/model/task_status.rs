//! Task lifecycle status.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Closed set of task states.
///
/// Serialized by canonical label (`"InProgress"`, `"ToDo"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Canceled,
    InProgress,
    Pending,
    Done,
    ToDo,
    Blocked,
    ToReview,
    Rejected,
}

impl TaskStatus {
    /// Every variant, in declaration order.
    pub const ALL: [TaskStatus; 8] = [
        Self::Canceled,
        Self::InProgress,
        Self::Pending,
        Self::Done,
        Self::ToDo,
        Self::Blocked,
        Self::ToReview,
        Self::Rejected,
    ];

    /// Canonical label, also used on the wire.
    pub fn description(self) -> &'static str {
        match self {
            Self::Canceled => "Canceled",
            Self::InProgress => "InProgress",
            Self::Pending => "Pending",
            Self::Done => "Done",
            Self::ToDo => "ToDo",
            Self::Blocked => "Blocked",
            Self::ToReview => "ToReview",
            Self::Rejected => "Rejected",
        }
    }

    /// French display label.
    pub fn in_french(self) -> &'static str {
        match self {
            Self::Canceled => "Annulé",
            Self::InProgress => "En cours",
            Self::Pending => "En attente",
            Self::Done => "Terminé",
            Self::ToDo => "À faire",
            Self::Blocked => "Bloqué",
            Self::ToReview => "À revoir",
            Self::Rejected => "Rejeté",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Parse failure for an unknown canonical status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTaskStatus(pub String);

impl Display for UnknownTaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown task status: `{}`", self.0)
    }
}

impl Error for UnknownTaskStatus {}

impl FromStr for TaskStatus {
    type Err = UnknownTaskStatus;

    /// Parses a canonical label. Matching is exact and case-sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.description() == value)
            .ok_or_else(|| UnknownTaskStatus(value.to_string()))
    }
}
