//! In-memory actor directory and assignable pool tests.

use std::sync::Arc;

use super::helpers::{ROSTER, TestService, actor_id, directory, service};
use ember::actor::{
    adapters::memory::InMemoryActorDirectory,
    domain::{Actor, Role},
    ports::ActorDirectory,
};
use ember::config::WorkflowPolicy;
use ember::task::adapters::memory::InMemoryTaskRepository;
use ember::task::services::TaskLifecycleService;
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn directory_lists_in_registration_order(
    directory: InMemoryActorDirectory,
) -> eyre::Result<()> {
    let listed: Vec<String> = directory
        .list()
        .await?
        .iter()
        .map(|actor| actor.id().to_string())
        .collect();
    let expected: Vec<String> = ROSTER.iter().map(|(id, _)| (*id).to_owned()).collect();

    eyre::ensure!(listed == expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn re_registering_replaces_role_in_place(
    directory: InMemoryActorDirectory,
) -> eyre::Result<()> {
    directory.register(Actor::new(actor_id("inst1"), Role::Coordinator))?;

    let found = directory.find_by_id(&actor_id("inst1")).await?;
    eyre::ensure!(found.map(|actor| actor.role()) == Some(Role::Coordinator));
    eyre::ensure!(directory.list().await?.len() == ROSTER.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeding_with_repeated_ids_keeps_first_position_and_last_role() -> eyre::Result<()> {
    let directory = InMemoryActorDirectory::with_actors([
        Actor::new(actor_id("inst1"), Role::Instructor),
        Actor::new(actor_id("drv1"), Role::Driver),
        Actor::new(actor_id("inst1"), Role::Coordinator),
    ]);

    let listed = directory.list().await?;
    let ids: Vec<String> = listed.iter().map(|actor| actor.id().to_string()).collect();

    eyre::ensure!(ids == ["inst1", "drv1"]);
    eyre::ensure!(listed.first().map(Actor::role) == Some(Role::Coordinator));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignable_pool_is_instructors_and_drivers(service: TestService) -> eyre::Result<()> {
    let pool: Vec<String> = service
        .assignable_actors()
        .await?
        .iter()
        .map(|actor| actor.id().to_string())
        .collect();

    eyre::ensure!(pool == ["inst1", "drv1", "inst2"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn custom_policy_narrows_assignable_pool(
    directory: InMemoryActorDirectory,
) -> eyre::Result<()> {
    let policy = WorkflowPolicy::from_toml_str("assignable_roles = [\"driver\"]")?;
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(directory),
        Arc::new(DefaultClock),
    )
    .with_policy(policy);

    let pool = service.assignable_actors().await?;

    eyre::ensure!(pool.len() == 1);
    eyre::ensure!(pool.iter().all(|actor| actor.role() == Role::Driver));
    Ok(())
}
