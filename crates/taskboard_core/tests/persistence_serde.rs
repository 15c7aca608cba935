use chrono::NaiveDate;
use std::rc::Rc;
use taskboard_core::{
    IdGenerator, Manager, Material, Member, NewTask, NewUser, Notification, NotificationType,
    Objective, Project, Sex, Skill, Task, TaskStatus, User, WorkOrder,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn user(ids: &mut IdGenerator, username: &str, role: &str) -> User {
    User::new(
        ids,
        NewUser {
            username: username.to_string(),
            password: "Passw0rd@".to_string(),
            full_name: format!("{username} full"),
            phone_number: "(555) 123-4567".to_string(),
            birth_day: date(1992, 2, 29),
            email: format!("{username}@example.com"),
            role: role.to_string(),
            sex: Sex::Female,
            skill: Some(Skill::new("planning")),
        },
    )
    .expect("valid user")
}

fn sample_project(ids: &mut IdGenerator) -> Project {
    let lead = Rc::new(Manager::new(user(ids, "lead", "manager"), &[], &[]));
    let worker = Rc::new(Member::new(user(ids, "worker", "member")));
    let bricks = Rc::new(Material::new(ids, &[], "bricks", "masonry"));
    let order = WorkOrder::new(ids, "Order bricks", "500 units");

    let mut wall = Task::new(
        ids,
        NewTask {
            description: "Build wall",
            priority: 2,
            materials: &[Rc::clone(&bricks)],
            notifications: &[],
            start_date: date(2024, 4, 1),
            members: &[Rc::clone(&worker)],
            work_orders: &[order],
            end_date: date(2024, 4, 15),
            status: TaskStatus::InProgress,
        },
    )
    .expect("valid task");
    let reminder = Notification::new(
        ids,
        date(2024, 4, 14).and_hms_opt(17, 0, 0).expect("valid time"),
        NotificationType::Email,
        Rc::new(wall.clone()),
        "Deadline tomorrow",
    );
    wall.add_notification(reminder);

    let objective = Objective::new(ids, date(2024, 6, 30), &[wall], date(2024, 4, 1), "Shell");
    Project::new(
        ids,
        lead,
        date(2024, 12, 31),
        &[objective],
        date(2024, 4, 1),
        "House",
    )
}

#[test]
fn project_graph_round_trips_losslessly() {
    let mut ids = IdGenerator::seeded(300);
    let project = sample_project(&mut ids);

    let json = serde_json::to_string(&project).expect("serialize project");
    let decoded: Project = serde_json::from_str(&json).expect("deserialize project");

    assert_eq!(decoded, project);
    assert_eq!(decoded.id(), project.id());
    let objectives = decoded.objective_list();
    let tasks = objectives[0].task_list();
    let task = &tasks[0];
    assert_eq!(task.id().len(), 10);
    assert_eq!(task.members()[0].user().username(), "worker");
    assert_eq!(task.notifications()[0].task().id(), task.id());
}

#[test]
fn wire_fields_use_canonical_names() {
    let mut ids = IdGenerator::seeded(301);
    let project = sample_project(&mut ids);
    let value = serde_json::to_value(&project).expect("serialize project");

    let task = &value["objective_list"][0]["task_list"][0];
    assert_eq!(task["status"], "InProgress");
    assert_eq!(task["start_date"], "2024-04-01");
    assert_eq!(task["materials"][0]["type"], "masonry");
    assert_eq!(task["notifications"][0]["type"], "Email");
    assert!(value["manager"]["user"]["registration_date"].is_string());
    assert_eq!(value["manager"]["user"]["sex"], "Female");
}

#[test]
fn every_status_serializes_by_canonical_label() {
    for status in TaskStatus::ALL {
        let json = serde_json::to_value(status).expect("serialize status");
        assert_eq!(json, status.description());
        let back: TaskStatus = serde_json::from_value(json).expect("deserialize status");
        assert_eq!(back, status);
    }
}

#[test]
fn user_round_trip_keeps_id_and_registration_date() {
    let mut ids = IdGenerator::seeded(302);
    let original = user(&mut ids, "keeper", "member");

    let mut value = serde_json::to_value(&original).expect("serialize user");
    value["registration_date"] = serde_json::json!("2001-09-09");
    let decoded: User = serde_json::from_value(value).expect("deserialize user");

    assert_eq!(decoded.id(), original.id());
    assert_eq!(decoded.registration_date(), date(2001, 9, 9));
    assert_eq!(decoded.password(), original.password());
}

#[test]
fn deserialize_rejects_invalid_user_fields() {
    let mut ids = IdGenerator::seeded(303);
    let mut value = serde_json::to_value(user(&mut ids, "bad", "member")).expect("serialize");
    value["email"] = serde_json::json!("not-an-email");

    let err = serde_json::from_value::<User>(value).unwrap_err();
    assert!(
        err.to_string().contains("invalid email format"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_reversed_task_window() {
    let mut ids = IdGenerator::seeded(304);
    let task = Task::new(
        &mut ids,
        NewTask {
            description: "window",
            priority: 1,
            materials: &[],
            notifications: &[],
            start_date: date(2024, 1, 1),
            members: &[],
            work_orders: &[],
            end_date: date(2024, 1, 2),
            status: TaskStatus::ToDo,
        },
    )
    .expect("valid task");
    let mut value = serde_json::to_value(&task).expect("serialize task");
    value["start_date"] = serde_json::json!("2024-02-01");

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("start date 2024-02-01 cannot be after end date 2024-01-02"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_zero_priority() {
    let mut ids = IdGenerator::seeded(305);
    let task = Task::new(
        &mut ids,
        NewTask {
            description: "prio",
            priority: 5,
            materials: &[],
            notifications: &[],
            start_date: date(2024, 1, 1),
            members: &[],
            work_orders: &[],
            end_date: date(2024, 1, 2),
            status: TaskStatus::Rejected,
        },
    )
    .expect("valid task");
    let mut value = serde_json::to_value(&task).expect("serialize task");
    value["priority"] = serde_json::json!(0);

    assert!(serde_json::from_value::<Task>(value).is_err());
}
