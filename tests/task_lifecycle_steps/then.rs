//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_date};
use rstest_bdd_macros::then;
use todo_backend::task::{
    domain::{Priority, TaskStatus},
    services::TaskErrorKind,
};

#[then(r#"the task is named "{name}""#)]
fn task_is_named(world: &TaskLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    if task.name().as_str() != name {
        return Err(eyre::eyre!(
            "expected name {name:?}, found {:?}",
            task.name().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task priority is "{priority}""#)]
fn task_priority_is(world: &TaskLifecycleWorld, priority: String) -> Result<(), eyre::Report> {
    let expected = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid expected priority in scenario: {err}"))?;
    let actual = world.task()?.priority();
    if actual != expected {
        return Err(eyre::eyre!("expected priority {expected}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the task deadline is "{date}""#)]
fn task_deadline_is(world: &TaskLifecycleWorld, date: String) -> Result<(), eyre::Report> {
    let expected = parse_date(&date)?;
    let actual = world.task()?.deadline();
    if actual != Some(expected) {
        return Err(eyre::eyre!("expected deadline {expected}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.task()?.status();
    if actual != expected {
        return Err(eyre::eyre!("expected status {expected}, found {actual}"));
    }
    Ok(())
}

fn assert_failure_kind(world: &TaskLifecycleWorld, kind: TaskErrorKind) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    match result {
        Err(err) if err.kind() == kind => Ok(()),
        other => Err(eyre::eyre!("expected {kind:?} failure, got {other:?}")),
    }
}

#[then("the operation fails with an invalid input error")]
fn fails_with_invalid_input(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    assert_failure_kind(world, TaskErrorKind::InvalidInput)
}

#[then("the operation fails with a not found error")]
fn fails_with_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    assert_failure_kind(world, TaskErrorKind::NotFound)
}
