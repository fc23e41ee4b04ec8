//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_date, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_backend::task::services::CreateTaskRequest;

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut TaskLifecycleWorld, date: String) -> Result<(), eyre::Report> {
    world.clock.set(parse_date(&date)?);
    Ok(())
}

#[given(r#"a task named "{name}" exists"#)]
fn task_exists(world: &mut TaskLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_task(CreateTaskRequest::new(name)))
        .wrap_err("create task for scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}
