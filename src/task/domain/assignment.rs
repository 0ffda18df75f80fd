//! Creation-time assignment eligibility.

use super::{AssignmentRejection, TaskDomainError};
use crate::actor::domain::{Actor, ActorId};
use crate::config::WorkflowPolicy;

/// Validates that `creator` may hand a new task to `assignee`.
///
/// `requested` is the assignee identifier named by the caller and `assignee`
/// is the directory entry resolved for it, if any. Unassigned tasks are open
/// to every role.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidAssignment`] when the creator may not
/// assign, the assignee is unknown or outside the assignable pool, or the
/// creator names themselves.
pub fn validate_assignment(
    policy: &WorkflowPolicy,
    creator: &Actor,
    requested: Option<&ActorId>,
    assignee: Option<&Actor>,
) -> Result<(), TaskDomainError> {
    let Some(assignee_id) = requested else {
        return Ok(());
    };

    if !policy.can_assign(creator.role()) {
        return Err(reject(AssignmentRejection::CreatorCannotAssign {
            creator_id: creator.id().clone(),
            role: creator.role(),
        }));
    }
    if assignee_id == creator.id() {
        return Err(reject(AssignmentRejection::SelfAssignment(
            assignee_id.clone(),
        )));
    }

    let Some(target) = assignee.filter(|actor| actor.id() == assignee_id) else {
        return Err(reject(AssignmentRejection::UnknownAssignee(
            assignee_id.clone(),
        )));
    };
    if !policy.is_assignable(target.role()) {
        return Err(reject(AssignmentRejection::IneligibleAssignee {
            assignee_id: assignee_id.clone(),
            role: target.role(),
        }));
    }
    Ok(())
}

const fn reject(reason: AssignmentRejection) -> TaskDomainError {
    TaskDomainError::InvalidAssignment(reason)
}
