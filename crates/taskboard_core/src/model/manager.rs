//! Manager account: a user who owns projects and materials.

use crate::model::material::Material;
use crate::model::project::Project;
use crate::model::skill::Skill;
use crate::model::user::{Account, User};
use serde::{Deserialize, Serialize};

/// User record plus the projects and materials the manager owns.
///
/// Both lists are copied on every read and write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    user: User,
    projects: Vec<Project>,
    materials: Vec<Material>,
}

impl Manager {
    pub fn new(user: User, projects: &[Project], materials: &[Material]) -> Self {
        Self {
            user,
            projects: projects.to_vec(),
            materials: materials.to_vec(),
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

    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn set_projects(&mut self, projects: &[Project]) {
        self.projects = projects.to_vec();
    }

    pub fn add_project(&mut self, project: &Project) {
        self.projects.push(project.clone());
    }

    pub fn materials(&self) -> Vec<Material> {
        self.materials.clone()
    }

    pub fn set_materials(&mut self, materials: &[Material]) {
        self.materials = materials.to_vec();
    }

    pub fn skill(&self) -> Option<&Skill> {
        self.user.skill()
    }

    pub fn set_skill(&mut self, skill: Option<Skill>) {
        self.user.set_skill(skill);
    }
}

impl Account for Manager {
    fn user(&self) -> &User {
        &self.user
    }

    fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }
}
