//! Shared world state for task approval BDD scenarios.

use std::sync::Arc;

use ember::actor::adapters::memory::InMemoryActorDirectory;
use ember::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryActorDirectory, DefaultClock>;

/// Scenario world for task approval behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub directory: InMemoryActorDirectory,
    pub current_task: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskWorld {
    /// Creates a world with an empty directory and repository.
    #[must_use]
    pub fn new() -> Self {
        let directory = InMemoryActorDirectory::new();
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(directory.clone()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            directory,
            current_task: None,
            last_result: None,
        }
    }

    /// Returns the task under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns the outcome of the most recent operation.
    ///
    /// # Errors
    ///
    /// Returns an error when no operation has run yet.
    pub fn result(&self) -> Result<&Result<Task, TaskLifecycleError>, eyre::Report> {
        self.last_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing operation result in scenario world"))
    }

    /// Records an operation outcome, tracking the updated task on success.
    pub fn record(&mut self, result: Result<Task, TaskLifecycleError>) {
        if let Ok(ref updated) = result {
            self.current_task = Some(updated.clone());
        }
        self.last_result = Some(result);
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
