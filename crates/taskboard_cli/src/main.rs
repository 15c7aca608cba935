//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use std::process::ExitCode;
use std::rc::Rc;
use taskboard_core::{
    IdGenerator, Manager, NewTask, NewUser, Objective, Project, Sex, Task, TaskStatus, User,
    ValidationError,
};

const DEMO_SEED: u64 = 2024;

fn main() -> ExitCode {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    match demo_project() {
        Ok(project) => {
            let objectives = project.objective_list();
            let tasks: Vec<Task> = objectives.iter().flat_map(Objective::task_list).collect();
            println!(
                "taskboard_core demo project={} objectives={} tasks={}",
                project.id(),
                objectives.len(),
                tasks.len()
            );
            for task in &tasks {
                println!(
                    "  task={} status={} ({})",
                    task.id(),
                    task.status(),
                    task.status().in_french()
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("taskboard_core demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn demo_project() -> Result<Project, ValidationError> {
    let mut ids = IdGenerator::seeded(DEMO_SEED);
    let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap_or_default();

    let lead = User::new(
        &mut ids,
        NewUser {
            username: "demo".to_string(),
            password: "Dem0+pass".to_string(),
            full_name: "Demo Manager".to_string(),
            phone_number: "+1 555 010 0000".to_string(),
            birth_day: day(1, 1) - chrono::Days::new(365 * 30),
            email: "demo@example.com".to_string(),
            role: "manager".to_string(),
            sex: Sex::Other,
            skill: None,
        },
    )?;
    let task = Task::new(
        &mut ids,
        NewTask {
            description: "Smoke check",
            priority: 1,
            materials: &[],
            notifications: &[],
            start_date: day(1, 1),
            members: &[],
            work_orders: &[],
            end_date: day(1, 2),
            status: TaskStatus::Done,
        },
    )?;
    let objective = Objective::new(&mut ids, day(1, 31), &[task], day(1, 1), "Wiring");
    Ok(Project::new(
        &mut ids,
        Rc::new(Manager::new(lead, &[], &[])),
        day(12, 31),
        &[objective],
        day(1, 1),
        "Demo",
    ))
}
