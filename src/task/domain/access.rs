//! Visibility and authorization rules.
//!
//! Both rules depend only on the identities recorded on the task. Roles play
//! no part: a manager does not see another manager's private tasks.

use super::{Task, TaskAction, TransitionParty};
use crate::actor::domain::ActorId;

/// Returns `true` when `actor_id` may see `task`.
///
/// A private task is visible to its creator only; an assigned task is
/// visible to its creator and its assignee.
#[must_use]
pub fn is_visible(task: &Task, actor_id: &ActorId) -> bool {
    task.creator_id() == actor_id || task.assignee_id() == Some(actor_id)
}

/// Returns `true` when `actor_id` is the party allowed to perform `action`
/// on `task`, regardless of the task's current status.
#[must_use]
pub fn is_authorized(task: &Task, actor_id: &ActorId, action: TaskAction) -> bool {
    match action.performer() {
        TransitionParty::Creator => task.creator_id() == actor_id,
        TransitionParty::Assignee => task.assignee_id() == Some(actor_id),
    }
}

/// Returns the actions `actor_id` could successfully perform on `task` now.
#[must_use]
pub fn available_actions(task: &Task, actor_id: &ActorId) -> Vec<TaskAction> {
    TaskAction::ALL
        .into_iter()
        .filter(|action| task.check_transition(actor_id, *action).is_ok())
        .collect()
}
