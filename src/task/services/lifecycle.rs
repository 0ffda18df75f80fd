//! Service layer for task creation, transitions, comments and listings.

use crate::actor::{
    domain::{Actor, ActorDomainError, ActorId},
    ports::{ActorDirectory, ActorDirectoryError},
};
use crate::config::WorkflowPolicy;
use crate::task::{
    domain::{
        ParseTaskActionError, Priority, Task, TaskAction, TaskDetails, TaskDomainError, TaskId,
        available_actions, validate_assignment,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::telemetry;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    creator_id: String,
    title: String,
    description: Option<String>,
    start_date: Option<NaiveDate>,
    deadline: Option<NaiveDate>,
    priority: Option<Priority>,
    assignee_id: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request for a private task with required fields.
    #[must_use]
    pub fn new(creator_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            creator_id: creator_id.into(),
            title: title.into(),
            description: None,
            start_date: None,
            deadline: None,
            priority: None,
            assignee_id: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the start date. Defaults to the creation date.
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

    /// Sets the priority. Defaults to [`Priority::Medium`].
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Assigns the task to another actor, making it non-private.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }
}

/// Request payload for a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    actor_id: String,
    action: String,
}

impl TransitionTaskRequest {
    /// Creates a transition request. `action` is one of `finish_private`,
    /// `request_finish`, `approve` or `reject`.
    #[must_use]
    pub fn new(task_id: TaskId, actor_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            task_id,
            actor_id: actor_id.into(),
            action: action.into(),
        }
    }
}

/// Request payload for appending a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentRequest {
    task_id: TaskId,
    actor_id: String,
    text: String,
}

impl AddCommentRequest {
    /// Creates a comment request.
    #[must_use]
    pub fn new(task_id: TaskId, actor_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            task_id,
            actor_id: actor_id.into(),
            text: text.into(),
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Task rule violated.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Actor identifier validation failed.
    #[error(transparent)]
    Actor(#[from] ActorDomainError),
    /// The action name is not a known action.
    #[error(transparent)]
    InvalidAction(#[from] ParseTaskActionError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Actor directory lookup failed.
    #[error(transparent)]
    Directory(#[from] ActorDirectoryError),
    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The acting actor is not known to the directory.
    #[error("unknown actor: {0}")]
    UnknownActor(ActorId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every mutating operation loads the task, applies the change to that
/// working copy and persists it; the stored task is unchanged when any step
/// fails.
#[derive(Clone)]
pub struct TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: ActorDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<D>,
    clock: Arc<C>,
    policy: Arc<WorkflowPolicy>,
}

impl<R, D, C> TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: ActorDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a service using the default workflow policy.
    #[must_use]
    pub fn new(repository: Arc<R>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            clock,
            policy: Arc::new(WorkflowPolicy::default()),
        }
    }

    /// Replaces the workflow policy.
    #[must_use]
    pub fn with_policy(mut self, policy: WorkflowPolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Returns the active workflow policy.
    #[must_use]
    pub fn policy(&self) -> &WorkflowPolicy {
        &self.policy
    }

    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownActor`] when the creator is not in
    /// the directory, [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::InvalidAssignment`] wrapped in
    /// [`TaskLifecycleError::Domain`] when validation fails, or a repository
    /// error when the task cannot be stored.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            creator_id,
            title,
            description,
            start_date,
            deadline,
            priority,
            assignee_id,
        } = request;

        let creator = self.resolve_actor(ActorId::new(creator_id)?).await?;
        let requested_assignee = assignee_id.map(ActorId::new).transpose()?;
        let assignee = match requested_assignee.as_ref() {
            Some(id) => self.directory.find_by_id(id).await?,
            None => None,
        };

        let mut details = TaskDetails::new(title)?;
        if let Some(text) = description {
            details = details.with_description(text);
        }
        if let Some(date) = start_date {
            details = details.with_start_date(date);
        }
        if let Some(date) = deadline {
            details = details.with_deadline(date);
        }
        if let Some(level) = priority {
            details = details.with_priority(level);
        }

        if let Err(err) = validate_assignment(
            &self.policy,
            &creator,
            requested_assignee.as_ref(),
            assignee.as_ref(),
        ) {
            tracing::warn!(creator_id = %creator.id(), error = %err, "task assignment rejected");
            return Err(err.into());
        }

        let task = Task::create(
            creator.id().clone(),
            requested_assignee,
            details,
            &*self.clock,
        );
        self.repository.store(&task).await?;
        tracing::info!(
            task_id = %task.id(),
            creator_id = %task.creator_id(),
            assignee_id = task.assignee_id().map(ActorId::as_str),
            priority = task.priority().as_str(),
            "task created"
        );
        Ok(task)
    }

    /// Applies a status transition on behalf of an actor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidAction`] for unknown action
    /// names, [`TaskLifecycleError::TaskNotFound`] for unknown tasks,
    /// [`TaskDomainError::InvalidState`] or
    /// [`TaskDomainError::UnauthorizedTransition`] wrapped in
    /// [`TaskLifecycleError::Domain`] when the state machine refuses the
    /// action, or a repository error when persistence fails.
    pub async fn transition(&self, request: TransitionTaskRequest) -> TaskLifecycleResult<Task> {
        let TransitionTaskRequest {
            task_id,
            actor_id,
            action,
        } = request;
        let actor = ActorId::new(actor_id)?;
        let parsed_action = TaskAction::try_from(action.as_str())?;
        let span = telemetry::task_span("transition", task_id, &actor);

        let mut task = self.load(task_id).await?;
        let previous = match task.apply(&actor, parsed_action, &*self.clock) {
            Ok(previous) => previous,
            Err(err) => {
                span.in_scope(|| {
                    tracing::warn!(
                        action = parsed_action.as_str(),
                        status = task.status().as_str(),
                        error = %err,
                        "task transition rejected"
                    );
                });
                return Err(err.into());
            }
        };

        self.repository.update(&task).await?;
        telemetry::record_transition(&span, parsed_action, previous, task.status());
        Ok(task)
    }

    /// Appends a comment to a task the actor can see.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for unknown tasks,
    /// [`TaskDomainError::NotVisible`] or [`TaskDomainError::EmptyComment`]
    /// wrapped in [`TaskLifecycleError::Domain`], or a repository error when
    /// persistence fails.
    pub async fn add_comment(&self, request: AddCommentRequest) -> TaskLifecycleResult<Task> {
        let AddCommentRequest {
            task_id,
            actor_id,
            text,
        } = request;
        let author = ActorId::new(actor_id)?;

        let mut task = self.load(task_id).await?;
        task.add_comment(&author, text, &*self.clock)?;
        self.repository.update(&task).await?;
        tracing::info!(
            task_id = %task_id,
            actor_id = %author,
            comments = task.comments().len(),
            "task comment added"
        );
        Ok(task)
    }

    /// Changes the priority of a task the actor can see.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for unknown tasks,
    /// [`TaskDomainError::NotVisible`] wrapped in
    /// [`TaskLifecycleError::Domain`], or a repository error when persistence
    /// fails.
    pub async fn change_priority(
        &self,
        task_id: TaskId,
        actor_id: &ActorId,
        priority: Priority,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(task_id).await?;
        let previous = task.priority();
        task.change_priority(actor_id, priority, &*self.clock)?;
        self.repository.update(&task).await?;
        tracing::info!(
            task_id = %task_id,
            actor_id = %actor_id,
            from = previous.as_str(),
            to = priority.as_str(),
            "task priority changed"
        );
        Ok(task)
    }

    /// Returns the tasks visible to `actor_id`, in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list_visible(&self, actor_id: &ActorId) -> TaskLifecycleResult<Vec<Task>> {
        let visible: Vec<Task> = self
            .repository
            .fetch_all()
            .await?
            .into_iter()
            .filter(|task| task.is_visible_to(actor_id))
            .collect();
        tracing::debug!(actor_id = %actor_id, count = visible.len(), "listed visible tasks");
        Ok(visible)
    }

    /// Returns a single task when `actor_id` can see it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for unknown tasks and
    /// [`TaskDomainError::NotVisible`] wrapped in
    /// [`TaskLifecycleError::Domain`] for tasks outside the actor's view.
    pub async fn find_visible(
        &self,
        task_id: TaskId,
        actor_id: &ActorId,
    ) -> TaskLifecycleResult<Task> {
        let task = self.load(task_id).await?;
        task.ensure_visible(actor_id)?;
        Ok(task)
    }

    /// Returns the actions `actor_id` could perform on a task right now.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::find_visible`].
    pub async fn available_actions(
        &self,
        task_id: TaskId,
        actor_id: &ActorId,
    ) -> TaskLifecycleResult<Vec<TaskAction>> {
        let task = self.find_visible(task_id, actor_id).await?;
        Ok(available_actions(&task, actor_id))
    }

    /// Returns the actors a task may be assigned to, in directory order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Directory`] when the listing fails.
    pub async fn assignable_actors(&self) -> TaskLifecycleResult<Vec<Actor>> {
        Ok(self
            .directory
            .list()
            .await?
            .into_iter()
            .filter(|actor| self.policy.is_assignable(actor.role()))
            .collect())
    }

    async fn load(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(task_id))
    }

    async fn resolve_actor(&self, actor_id: ActorId) -> TaskLifecycleResult<Actor> {
        self.directory
            .find_by_id(&actor_id)
            .await?
            .ok_or(TaskLifecycleError::UnknownActor(actor_id))
    }
}
