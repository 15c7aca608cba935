//! Member account: a user who is assigned tasks.

use crate::model::skill::Skill;
use crate::model::task::Task;
use crate::model::user::{Account, User};
use serde::{Deserialize, Serialize};

/// User record plus the member's assigned tasks.
///
/// The task list follows the same copy-in/copy-out rule as every other
/// container in the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    user: User,
    tasks: Vec<Task>,
}

impl Member {
    /// Wraps `user` with an empty task list.
    pub fn new(user: User) -> Self {
        Self {
            user,
            tasks: Vec::new(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn into_user(self) -> User {
        self.user
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn set_tasks(&mut self, tasks: &[Task]) {
        self.tasks = tasks.to_vec();
    }

    pub fn assign_task(&mut self, task: &Task) {
        self.tasks.push(task.clone());
    }

    pub fn skill(&self) -> Option<&Skill> {
        self.user.skill()
    }

    pub fn set_skill(&mut self, skill: Option<Skill>) {
        self.user.set_skill(skill);
    }
}

impl Account for Member {
    fn user(&self) -> &User {
        &self.user
    }

    fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }
}
