//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use ember::actor::{
    adapters::memory::InMemoryActorDirectory,
    domain::{Actor, ActorId, Role},
};
use ember::task::{
    adapters::memory::InMemoryTaskRepository, ports::TaskRepository,
    services::TaskLifecycleService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type wired to in-memory adapters.
pub type TestService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryActorDirectory, DefaultClock>;

/// Roster used across scenarios: two approvers and three workers.
pub const ROSTER: [(&str, Role); 5] = [
    ("mgr1", Role::Manager),
    ("coord1", Role::Coordinator),
    ("inst1", Role::Instructor),
    ("drv1", Role::Driver),
    ("inst2", Role::Instructor),
];

/// Builds an actor identifier, panicking on invalid test input.
pub fn actor_id(id: &str) -> ActorId {
    ActorId::new(id).expect("valid actor id")
}

/// Provides a directory populated with [`ROSTER`].
#[fixture]
pub fn directory() -> InMemoryActorDirectory {
    InMemoryActorDirectory::with_actors(
        ROSTER
            .iter()
            .map(|(id, role)| Actor::new(actor_id(id), *role)),
    )
}

/// Wires a service around `repository` and the standard roster.
pub fn service_with<R: TaskRepository>(
    repository: Arc<R>,
) -> TaskLifecycleService<R, InMemoryActorDirectory, DefaultClock> {
    TaskLifecycleService::new(repository, Arc::new(directory()), Arc::new(DefaultClock))
}

/// Provides a fresh service backed by an empty in-memory repository.
#[fixture]
pub fn service() -> TestService {
    service_with(Arc::new(InMemoryTaskRepository::new()))
}
