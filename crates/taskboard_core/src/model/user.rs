//! User base record and the shared account capability.
//!
//! # Responsibility
//! - Hold identity and contact fields common to managers and members.
//! - Validate every user-supplied field on construction and on each setter.
//!
//! # Invariants
//! - `id` and `registration_date` are fixed at construction.
//! - Construction validates username, password, full name, phone number,
//!   birthday, email in that order and stops at the first failure.
//! - A rejected setter call leaves the previous value in place.
//! - The password is never written to logs or error messages.

use crate::id::{EntityId, IdGenerator, USER_ID_LEN};
use crate::model::log_rejection;
use crate::model::skill::Skill;
use crate::validation::{
    check_birthday, check_email, check_password, check_phone_number, require_non_empty, today,
    ValidationError, ValidationResult,
};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Construction input for [`User::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub phone_number: String,
    pub birth_day: NaiveDate,
    pub email: String,
    pub role: String,
    pub sex: Sex,
    pub skill: Option<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    id: EntityId,
    username: String,
    password: String,
    full_name: String,
    phone_number: String,
    birth_day: NaiveDate,
    email: String,
    role: String,
    registration_date: NaiveDate,
    sex: Sex,
    skill: Option<Skill>,
}

impl User {
    /// Validates `input` and creates a user registered today.
    ///
    /// # Errors
    /// The first of `EmptyField("username")`, `InvalidPassword`,
    /// `EmptyField("full_name")`, `InvalidPhone`, `FutureBirthday`,
    /// `InvalidEmail` that applies.
    pub fn new(ids: &mut IdGenerator, input: NewUser) -> ValidationResult<Self> {
        validate_fields(
            &input.username,
            &input.password,
            &input.full_name,
            &input.phone_number,
            input.birth_day,
            &input.email,
        )?;

        let user = Self {
            id: ids.generate(USER_ID_LEN),
            username: input.username,
            password: input.password,
            full_name: input.full_name,
            phone_number: input.phone_number,
            birth_day: input.birth_day,
            email: input.email,
            role: input.role,
            registration_date: today(),
            sex: input.sex,
            skill: input.skill,
        };
        debug!(
            "event=entity_created module=model kind=user id={} role={}",
            user.id, user.role
        );
        Ok(user)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> ValidationResult<()> {
        let username = username.into();
        require_non_empty("username", &username)
            .inspect_err(|err| log_rejection("user", "username", err))?;
        self.username = username;
        Ok(())
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> ValidationResult<()> {
        let password = password.into();
        check_password(&password).inspect_err(|err| log_rejection("user", "password", err))?;
        self.password = password;
        Ok(())
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) -> ValidationResult<()> {
        let full_name = full_name.into();
        require_non_empty("full_name", &full_name)
            .inspect_err(|err| log_rejection("user", "full_name", err))?;
        self.full_name = full_name;
        Ok(())
    }

    /// Phone number exactly as supplied; no normalization is applied.
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) -> ValidationResult<()> {
        let phone_number = phone_number.into();
        check_phone_number(&phone_number)
            .inspect_err(|err| log_rejection("user", "phone_number", err))?;
        self.phone_number = phone_number;
        Ok(())
    }

    pub fn birth_day(&self) -> NaiveDate {
        self.birth_day
    }

    /// Compares against the local date at call time.
    pub fn set_birth_day(&mut self, birth_day: NaiveDate) -> ValidationResult<()> {
        check_birthday(birth_day).inspect_err(|err| log_rejection("user", "birth_day", err))?;
        self.birth_day = birth_day;
        Ok(())
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> ValidationResult<()> {
        let email = email.into();
        check_email(&email).inspect_err(|err| log_rejection("user", "email", err))?;
        self.email = email;
        Ok(())
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    pub fn registration_date(&self) -> NaiveDate {
        self.registration_date
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn set_sex(&mut self, sex: Sex) {
        self.sex = sex;
    }

    pub fn skill(&self) -> Option<&Skill> {
        self.skill.as_ref()
    }

    pub fn set_skill(&mut self, skill: Option<Skill>) {
        self.skill = skill;
    }
}

/// Read/write access to the user record behind a manager, member or
/// plain user, with shortcuts for the fields every account shares.
pub trait Account {
    fn user(&self) -> &User;

    fn user_mut(&mut self) -> &mut User;

    fn id(&self) -> &str {
        self.user().id()
    }

    fn username(&self) -> &str {
        self.user().username()
    }

    fn full_name(&self) -> &str {
        self.user().full_name()
    }

    fn email(&self) -> &str {
        self.user().email()
    }

    fn phone_number(&self) -> &str {
        self.user().phone_number()
    }

    fn role(&self) -> &str {
        self.user().role()
    }

    fn skill(&self) -> Option<&Skill> {
        self.user().skill()
    }
}

impl Account for User {
    fn user(&self) -> &User {
        self
    }

    fn user_mut(&mut self) -> &mut User {
        self
    }
}

fn validate_fields(
    username: &str,
    password: &str,
    full_name: &str,
    phone_number: &str,
    birth_day: NaiveDate,
    email: &str,
) -> ValidationResult<()> {
    require_non_empty("username", username)
        .inspect_err(|err| log_rejection("user", "username", err))?;
    check_password(password).inspect_err(|err| log_rejection("user", "password", err))?;
    require_non_empty("full_name", full_name)
        .inspect_err(|err| log_rejection("user", "full_name", err))?;
    check_phone_number(phone_number)
        .inspect_err(|err| log_rejection("user", "phone_number", err))?;
    check_birthday(birth_day).inspect_err(|err| log_rejection("user", "birth_day", err))?;
    check_email(email).inspect_err(|err| log_rejection("user", "email", err))?;
    Ok(())
}

/// Persisted user shape; every field rule is re-checked on load.
#[derive(Deserialize)]
struct UserRecord {
    id: EntityId,
    username: String,
    password: String,
    full_name: String,
    phone_number: String,
    birth_day: NaiveDate,
    email: String,
    role: String,
    registration_date: NaiveDate,
    sex: Sex,
    skill: Option<Skill>,
}

impl TryFrom<UserRecord> for User {
    type Error = ValidationError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        validate_fields(
            &record.username,
            &record.password,
            &record.full_name,
            &record.phone_number,
            record.birth_day,
            &record.email,
        )?;
        Ok(Self {
            id: record.id,
            username: record.username,
            password: record.password,
            full_name: record.full_name,
            phone_number: record.phone_number,
            birth_day: record.birth_day,
            email: record.email,
            role: record.role,
            registration_date: record.registration_date,
            sex: record.sex,
            skill: record.skill,
        })
    }
}
