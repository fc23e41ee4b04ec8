//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::SettableClock;
use chrono::{NaiveDate, Utc};
use mockable::Clock;
use rstest::fixture;
use todo_backend::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, SettableClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub clock: Arc<SettableClock>,
    pub service: TestTaskService,
    pub last_task: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world whose clock reads the current date.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(SettableClock::on(Utc::now().date_naive()));
        let service =
            TaskLifecycleService::new(Arc::new(InMemoryTaskRepository::new()), clock.clone());

        Self {
            clock,
            service,
            last_task: None,
            last_result: None,
        }
    }

    /// Records an operation outcome, keeping the task on success.
    pub fn record(&mut self, result: Result<Task, TaskLifecycleError>) {
        if let Ok(ref task) = result {
            self.last_task = Some(task.clone());
        }
        self.last_result = Some(result);
    }

    /// Returns the most recent task produced by a step.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns the current scenario date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Parses an ISO calendar date written in a feature file.
pub fn parse_date(raw: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid scenario date {raw:?}: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
