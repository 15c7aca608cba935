//! Skill attached to a user.

use serde::{Deserialize, Serialize};

/// Named capability with an optional free-form level. Unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Skill {
    name: String,
    level: Option<String>,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn set_level(&mut self, level: Option<String>) {
        self.level = level;
    }
}
