//! Port contract tests for the `PostgreSQL` task repository.

use std::sync::Arc;

use diesel::prelude::*;

use crate::postgres::cluster::{TemporaryDatabase, shared_cluster};
use crate::test_helpers::{SettableClock, date};
use eyre::{WrapErr, ensure};
use rstest::{fixture, rstest};
use todo_backend::config::DatabaseConfig;
use todo_backend::task::{
    adapters::postgres::{PostgresTaskRepository, apply_migrations},
    domain::{Priority, SortKey, Task, TaskDraft, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, TaskLifecycleService},
};

struct PostgresContext {
    repository: PostgresTaskRepository,
    database: TemporaryDatabase,
}

#[fixture]
fn context() -> Result<PostgresContext, eyre::Report> {
    let cluster = shared_cluster().map_err(|err| eyre::eyre!("{err}"))?;
    let database = cluster
        .temporary_database()
        .map_err(|err| eyre::eyre!("create test database: {err}"))?;
    let config = DatabaseConfig {
        url: database.url(),
        pool_size: 2,
    };
    let pool = config.build_pool().wrap_err("build test pool")?;
    apply_migrations(&mut *pool.get().wrap_err("acquire test connection")?)
        .wrap_err("apply task migrations")?;
    Ok(PostgresContext {
        repository: PostgresTaskRepository::new(pool),
        database,
    })
}

fn new_task(name: &str, deadline: Option<chrono::NaiveDate>) -> Result<Task, eyre::Report> {
    let clock = SettableClock::on(date(2025, 4, 16)?);
    let draft = TaskDraft::resolve(name, Some("stored".to_owned()), deadline, None)?;
    Ok(Task::new(draft, &clock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_then_find_round_trips_every_field(
    context: Result<PostgresContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let context = context?;
    let task = new_task("Persisted task !2", Some(date(2025, 4, 1)?))?;

    context.repository.add(&task).await?;
    let found = context.repository.find_by_id(task.id()).await?;

    ensure!(found.as_ref() == Some(&task), "expected {task:?}, got {found:?}");
    ensure!(task.status() == TaskStatus::Overdue);
    ensure!(task.priority() == Priority::High);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_and_missing_tasks_are_reported(
    context: Result<PostgresContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let context = context?;
    let repository = &context.repository;
    let task = new_task("Duplicate task", None)?;
    repository.add(&task).await?;

    let duplicate = repository.add(&task).await;
    repository.remove(task.id()).await?;
    let updated = repository.update(&task).await;
    let removed = repository.remove(TaskId::new()).await;
    let found = repository.find_by_id(task.id()).await?;

    ensure!(matches!(duplicate, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()));
    ensure!(matches!(updated, Err(TaskRepositoryError::NotFound(_))));
    ensure!(matches!(removed, Err(TaskRepositoryError::NotFound(_))));
    ensure!(found.is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_clears_optional_fields(
    context: Result<PostgresContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let context = context?;
    let repository = &context.repository;
    let clock = SettableClock::on(date(2025, 4, 20)?);
    let mut task = new_task("Editable task", Some(date(2025, 5, 1)?))?;
    repository.add(&task).await?;

    task.edit(TaskDraft::resolve("Edited task", None, None, None)?, &clock);
    repository.update(&task).await?;
    let found = repository
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished after update"))?;

    ensure!(found == task, "expected {task:?}, got {found:?}");
    ensure!(found.description().is_none());
    ensure!(found.deadline().is_none());
    ensure!(found.edit_time() == date(2025, 4, 20)?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn service_lists_tasks_in_creation_order(
    context: Result<PostgresContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let context = context?;
    let clock = Arc::new(SettableClock::on(date(2025, 4, 16)?));
    let service = TaskLifecycleService::new(Arc::new(context.repository.clone()), clock);
    let mut created = Vec::new();
    for name in ["Ordered one !4", "Ordered two !1", "Ordered three"] {
        created.push(service.create_task(CreateTaskRequest::new(name)).await?.id());
    }
    let ids = |tasks: Vec<Task>| tasks.iter().map(Task::id).collect::<Vec<_>>();

    let unsorted = ids(service.list_tasks(None).await?);
    let by_priority = ids(service.list_tasks(Some(SortKey::PriorityAsc)).await?);

    let &[first, second, third] = created.as_slice() else {
        eyre::bail!("expected three created tasks");
    };
    ensure!(unsorted == created, "creation order lost: {unsorted:?}");
    ensure!(
        by_priority == [second, third, first],
        "priority order wrong: {by_priority:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_stored_status_surfaces_as_persistence_error(
    context: Result<PostgresContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let context = context?;
    let task = new_task("Corrupted task", None)?;
    context.repository.add(&task).await?;

    let mut connection =
        PgConnection::establish(&context.database.url()).wrap_err("connect to test database")?;
    diesel::sql_query("UPDATE tasks SET status = 'Paused' WHERE id = $1")
        .bind::<diesel::sql_types::Uuid, _>(task.id().into_inner())
        .execute(&mut connection)
        .wrap_err("corrupt stored status")?;
    let found = context.repository.find_by_id(task.id()).await;

    ensure!(
        matches!(found, Err(TaskRepositoryError::Persistence(_))),
        "expected persistence error, got {found:?}"
    );
    Ok(())
}

#[rstest]
fn migrations_reject_names_shorter_than_four_characters(
    context: Result<PostgresContext, eyre::Report>,
) -> Result<(), eyre::Report> {
    let context = context?;
    let mut connection =
        PgConnection::establish(&context.database.url()).wrap_err("connect to test database")?;

    let inserted = diesel::sql_query(concat!(
        "INSERT INTO tasks (id, name, status, priority, create_time, edit_time) ",
        "VALUES (gen_random_uuid(), 'abc', 'Active', 'Medium', CURRENT_DATE, CURRENT_DATE)",
    ))
    .execute(&mut connection);

    ensure!(inserted.is_err(), "short name should violate the check constraint");
    Ok(())
}
