//! Task aggregate root.

use super::{Comment, Priority, TaskAction, TaskDomainError, TaskId, TaskStatus, access};
use crate::actor::domain::ActorId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Descriptive fields supplied when a task is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: String,
    description: String,
    start_date: Option<NaiveDate>,
    deadline: Option<NaiveDate>,
    priority: Priority,
}

impl TaskDetails {
    /// Creates task details with a validated title.
    ///
    /// The title is trimmed. The description starts empty, the priority
    /// starts at [`Priority::Medium`] and the start date defaults to the
    /// creation date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title: normalized.to_owned(),
            description: String::new(),
            start_date: None,
            deadline: None,
            priority: Priority::default(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    start_date: NaiveDate,
    deadline: Option<NaiveDate>,
    creator_id: ActorId,
    assignee_id: Option<ActorId>,
    priority: Priority,
    status: TaskStatus,
    comments: Vec<Comment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted start date.
    pub start_date: NaiveDate,
    /// Persisted deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Persisted creator.
    pub creator_id: ActorId,
    /// Persisted assignee, if any.
    pub assignee_id: Option<ActorId>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted comment thread, oldest first.
    pub comments: Vec<Comment>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task.
    ///
    /// Assignment eligibility is not checked here; callers validate it with
    /// [`super::validate_assignment`] before persisting.
    #[must_use]
    pub fn create(
        creator_id: ActorId,
        assignee_id: Option<ActorId>,
        details: TaskDetails,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let TaskDetails {
            title,
            description,
            start_date,
            deadline,
            priority,
        } = details;

        Self {
            id: TaskId::new(),
            title,
            description,
            start_date: start_date.unwrap_or_else(|| timestamp.date_naive()),
            deadline,
            creator_id,
            assignee_id,
            priority,
            status: TaskStatus::Pending,
            comments: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            start_date: data.start_date,
            deadline: data.deadline,
            creator_id: data.creator_id,
            assignee_id: data.assignee_id,
            priority: data.priority,
            status: data.status,
            comments: data.comments,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the creator.
    #[must_use]
    pub const fn creator_id(&self) -> &ActorId {
        &self.creator_id
    }

    /// Returns the assignee, or `None` for a private task.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<&ActorId> {
        self.assignee_id.as_ref()
    }

    /// Returns `true` when the task has no assignee.
    #[must_use]
    pub const fn is_private(&self) -> bool {
        self.assignee_id.is_none()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the approval status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the comment thread, oldest first.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when `actor_id` may see this task.
    #[must_use]
    pub fn is_visible_to(&self, actor_id: &ActorId) -> bool {
        access::is_visible(self, actor_id)
    }

    /// Validates `action` for `actor_id` without mutating the task.
    ///
    /// Checks run in a fixed order: the action must apply to this kind of
    /// task, the actor must be the allowed party, and the current status must
    /// be a listed source status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidState`] when the action does not
    /// apply to this task kind or status, and
    /// [`TaskDomainError::UnauthorizedTransition`] when the actor is not the
    /// allowed party.
    pub fn check_transition(
        &self,
        actor_id: &ActorId,
        action: TaskAction,
    ) -> Result<TaskStatus, TaskDomainError> {
        if action.requires_assignee() == self.is_private() {
            return Err(self.invalid_state(action));
        }
        if !access::is_authorized(self, actor_id, action) {
            return Err(TaskDomainError::UnauthorizedTransition {
                task_id: self.id,
                actor_id: actor_id.clone(),
                action,
            });
        }
        if !action.allowed_from(self.status) {
            return Err(self.invalid_state(action));
        }
        Ok(action.target_status())
    }

    /// Applies `action` on behalf of `actor_id`.
    ///
    /// Returns the status the task held before the transition. The task is
    /// untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::check_transition`].
    pub fn apply(
        &mut self,
        actor_id: &ActorId,
        action: TaskAction,
        clock: &impl Clock,
    ) -> Result<TaskStatus, TaskDomainError> {
        let next = self.check_transition(actor_id, action)?;
        let previous = self.status;
        self.status = next;
        self.touch(clock);
        Ok(previous)
    }

    /// Appends a comment written by `author_id`.
    ///
    /// The text is stored as given; only its trimmed form is checked for
    /// emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotVisible`] when the author cannot see the
    /// task and [`TaskDomainError::EmptyComment`] when the text is blank.
    pub fn add_comment(
        &mut self,
        author_id: &ActorId,
        text: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.ensure_visible(author_id)?;
        let body = text.into();
        if body.trim().is_empty() {
            return Err(TaskDomainError::EmptyComment);
        }

        let timestamp = clock.utc();
        self.comments
            .push(Comment::new(author_id.clone(), body, timestamp));
        self.updated_at = timestamp;
        Ok(())
    }

    /// Changes the priority on behalf of `actor_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotVisible`] when the actor cannot see the
    /// task.
    pub fn change_priority(
        &mut self,
        actor_id: &ActorId,
        priority: Priority,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.ensure_visible(actor_id)?;
        self.priority = priority;
        self.touch(clock);
        Ok(())
    }

    /// Fails with [`TaskDomainError::NotVisible`] unless `actor_id` may see
    /// this task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotVisible`] for actors outside the task.
    pub fn ensure_visible(&self, actor_id: &ActorId) -> Result<(), TaskDomainError> {
        if self.is_visible_to(actor_id) {
            Ok(())
        } else {
            Err(TaskDomainError::NotVisible {
                task_id: self.id,
                actor_id: actor_id.clone(),
            })
        }
    }

    const fn invalid_state(&self, action: TaskAction) -> TaskDomainError {
        TaskDomainError::InvalidState {
            task_id: self.id,
            action,
            status: self.status,
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
