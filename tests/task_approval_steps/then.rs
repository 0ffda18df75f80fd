//! Then steps for task approval BDD scenarios.

use super::world::{TaskWorld, run_async};
use ember::actor::domain::ActorId;
use ember::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    // Re-read through the service so the check reflects persisted state.
    let task = world.task()?;
    let stored = run_async(world.service.find_visible(task.id(), task.creator_id()))
        .wrap_err("reload task")?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}

#[then("the transition is rejected as unauthorized")]
fn rejected_as_unauthorized(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world.result()?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::UnauthorizedTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected UnauthorizedTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("the transition is rejected as an invalid state")]
fn rejected_as_invalid_state(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world.result()?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::InvalidState { .. }))
    ) {
        return Err(eyre::eyre!("expected InvalidState error, got {result:?}"));
    }
    Ok(())
}

#[then("the comment is rejected as empty")]
fn comment_rejected_as_empty(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world.result()?;
    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyComment))
    ) {
        return Err(eyre::eyre!("expected EmptyComment error, got {result:?}"));
    }
    Ok(())
}

#[then("the task has {count:usize} comments")]
fn task_has_comments(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let stored = run_async(world.service.find_visible(task.id(), task.creator_id()))
        .wrap_err("reload task")?;
    eyre::ensure!(
        stored.comments().len() == count,
        "expected {count} comments, found {}",
        stored.comments().len()
    );
    Ok(())
}

#[then(r#"the visible task count for "{actor_id}" is {count:usize}"#)]
fn visible_task_count(
    world: &TaskWorld,
    actor_id: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let viewer = ActorId::new(actor_id).wrap_err("actor id in scenario")?;
    let visible =
        run_async(world.service.list_visible(&viewer)).wrap_err("list visible tasks")?;
    eyre::ensure!(
        visible.len() == count,
        "expected {count} visible tasks for {viewer}, found {}",
        visible.len()
    );
    Ok(())
}
