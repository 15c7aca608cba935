use chrono::{Days, NaiveDate};
use taskboard_core::validation::today;
use taskboard_core::{
    Account, IdGenerator, Manager, Member, NewTask, NewUser, PasswordRule, Sex, Skill, Task,
    TaskStatus, User, ValidationError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn valid_input() -> NewUser {
    NewUser {
        username: "jdoe".to_string(),
        password: "Passw0rd@".to_string(),
        full_name: "Jane Doe".to_string(),
        phone_number: "+33 6 12 34 56 78".to_string(),
        birth_day: date(1990, 4, 12),
        email: "jane.doe@example.com".to_string(),
        role: "member".to_string(),
        sex: Sex::Female,
        skill: Some(Skill::new("rust").with_level("senior")),
    }
}

#[test]
fn user_new_keeps_every_field() {
    let mut ids = IdGenerator::seeded(1);
    let user = User::new(&mut ids, valid_input()).expect("valid user");

    assert_eq!(user.id().len(), 4);
    assert_eq!(user.username(), "jdoe");
    assert_eq!(user.password(), "Passw0rd@");
    assert_eq!(user.full_name(), "Jane Doe");
    assert_eq!(user.phone_number(), "+33 6 12 34 56 78");
    assert_eq!(user.birth_day(), date(1990, 4, 12));
    assert_eq!(user.email(), "jane.doe@example.com");
    assert_eq!(user.role(), "member");
    assert_eq!(user.sex(), Sex::Female);
    assert_eq!(user.skill().map(Skill::name), Some("rust"));
    assert_eq!(user.skill().and_then(Skill::level), Some("senior"));
    assert!(user.registration_date() <= today());
}

#[test]
fn weak_password_fails_construction() {
    let mut ids = IdGenerator::seeded(2);
    let mut input = valid_input();
    input.password = "password".to_string();

    let err = User::new(&mut ids, input).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidPassword(PasswordRule::MissingCharacterClass)
    );
}

#[test]
fn every_missing_password_class_is_rejected() {
    let mut ids = IdGenerator::seeded(3);
    for password in ["Pw0@", "passw0rd@", "PASSW0RD@", "Password@", "Passw0rdX"] {
        let mut input = valid_input();
        input.password = password.to_string();
        let err = User::new(&mut ids, input).expect_err("weak password must fail");
        assert!(
            matches!(err, ValidationError::InvalidPassword(_)),
            "unexpected error for {password}: {err}"
        );
    }
}

#[test]
fn construction_reports_first_violation_in_field_order() {
    let mut ids = IdGenerator::seeded(4);

    let mut input = valid_input();
    input.username = String::new();
    input.password = "weak".to_string();
    input.email = "broken".to_string();
    assert_eq!(
        User::new(&mut ids, input).unwrap_err(),
        ValidationError::EmptyField("username")
    );

    let mut input = valid_input();
    input.password = "weak".to_string();
    input.full_name = String::new();
    assert_eq!(
        User::new(&mut ids, input).unwrap_err(),
        ValidationError::InvalidPassword(PasswordRule::TooShort)
    );

    let mut input = valid_input();
    input.full_name = String::new();
    input.phone_number = "12".to_string();
    assert_eq!(
        User::new(&mut ids, input).unwrap_err(),
        ValidationError::EmptyField("full_name")
    );

    let mut input = valid_input();
    input.phone_number = "12".to_string();
    input.email = "broken".to_string();
    assert_eq!(
        User::new(&mut ids, input).unwrap_err(),
        ValidationError::InvalidPhone("12".to_string())
    );

    let mut input = valid_input();
    input.birth_day = today() + Days::new(1);
    input.email = "broken".to_string();
    assert!(matches!(
        User::new(&mut ids, input).unwrap_err(),
        ValidationError::FutureBirthday { .. }
    ));

    let mut input = valid_input();
    input.email = "broken".to_string();
    assert_eq!(
        User::new(&mut ids, input).unwrap_err(),
        ValidationError::InvalidEmail("broken".to_string())
    );
}

#[test]
fn phone_setter_stores_input_verbatim() {
    let mut ids = IdGenerator::seeded(5);
    let mut user = User::new(&mut ids, valid_input()).expect("valid user");

    for phone in ["0612345678", "(555) 123-4567", "+1.555.123.4567", "06-12-34-56-78"] {
        user.set_phone_number(phone).expect("valid phone");
        assert_eq!(user.phone_number(), phone);
        assert_eq!(user.phone_number(), phone);
    }
}

#[test]
fn rejected_setters_keep_previous_values() {
    let mut ids = IdGenerator::seeded(6);
    let mut user = User::new(&mut ids, valid_input()).expect("valid user");

    assert!(user.set_phone_number("call me").is_err());
    assert_eq!(user.phone_number(), "+33 6 12 34 56 78");

    assert!(user.set_email("jane at example").is_err());
    assert_eq!(user.email(), "jane.doe@example.com");

    assert!(user.set_password("NoDigits@").is_err());
    assert_eq!(user.password(), "Passw0rd@");

    assert_eq!(
        user.set_username(""),
        Err(ValidationError::EmptyField("username"))
    );
    assert_eq!(user.username(), "jdoe");

    assert_eq!(
        user.set_full_name(""),
        Err(ValidationError::EmptyField("full_name"))
    );
    assert_eq!(user.full_name(), "Jane Doe");
}

#[test]
fn birthday_setter_checks_against_today() {
    let mut ids = IdGenerator::seeded(7);
    let mut user = User::new(&mut ids, valid_input()).expect("valid user");

    user.set_birth_day(today()).expect("today is not in the future");
    assert_eq!(user.birth_day(), today());

    let tomorrow = today() + Days::new(1);
    let err = user.set_birth_day(tomorrow).unwrap_err();
    assert!(matches!(err, ValidationError::FutureBirthday { birthday, .. } if birthday == tomorrow));
    assert_eq!(user.birth_day(), today());
}

#[test]
fn unvalidated_fields_accept_anything() {
    let mut ids = IdGenerator::seeded(8);
    let mut user = User::new(&mut ids, valid_input()).expect("valid user");

    user.set_role("");
    user.set_sex(Sex::Other);
    user.set_skill(None);
    assert_eq!(user.role(), "");
    assert_eq!(user.sex(), Sex::Other);
    assert!(user.skill().is_none());
}

fn describe(account: &impl Account) -> String {
    format!("{} <{}> [{}]", account.full_name(), account.email(), account.role())
}

#[test]
fn account_capability_covers_managers_and_members() {
    let mut ids = IdGenerator::seeded(9);
    let mut manager_input = valid_input();
    manager_input.username = "boss".to_string();
    manager_input.full_name = "Ada Boss".to_string();
    manager_input.role = "manager".to_string();
    let manager = Manager::new(
        User::new(&mut ids, manager_input).expect("manager user"),
        &[],
        &[],
    );
    let member = Member::new(User::new(&mut ids, valid_input()).expect("member user"));

    assert_eq!(describe(&manager), "Ada Boss <jane.doe@example.com> [manager]");
    assert_eq!(describe(&member), "Jane Doe <jane.doe@example.com> [member]");
    assert_eq!(Account::id(&manager), manager.user().id());
    assert_eq!(Account::skill(&member).map(Skill::name), Some("rust"));
}

#[test]
fn account_mutation_goes_through_validation() {
    let mut ids = IdGenerator::seeded(10);
    let mut member = Member::new(User::new(&mut ids, valid_input()).expect("member user"));

    assert!(member.user_mut().set_email("not-an-email").is_err());
    member
        .user_mut()
        .set_email("new@example.org")
        .expect("valid email");
    assert_eq!(member.user().email(), "new@example.org");

    member.set_skill(Some(Skill::new("sql")));
    assert_eq!(member.skill().map(Skill::name), Some("sql"));
}

#[test]
fn member_task_list_is_copied() {
    let mut ids = IdGenerator::seeded(11);
    let mut member = Member::new(User::new(&mut ids, valid_input()).expect("member user"));
    assert!(member.tasks().is_empty());

    let task = Task::new(
        &mut ids,
        NewTask {
            description: "Review",
            priority: 1,
            materials: &[],
            notifications: &[],
            start_date: date(2024, 3, 1),
            members: &[],
            work_orders: &[],
            end_date: date(2024, 3, 2),
            status: TaskStatus::ToReview,
        },
    )
    .expect("valid task");

    let mut assigned = vec![task.clone()];
    member.set_tasks(&assigned);
    assigned.clear();
    assert_eq!(member.tasks(), vec![task.clone()]);

    let mut snapshot = member.tasks();
    snapshot.push(task.clone());
    assert_eq!(member.tasks().len(), 1);

    member.assign_task(&task);
    assert_eq!(member.tasks().len(), 2);
}
