//! Structured logging bootstrap and task span helpers.
//!
//! Ember logs through `tracing`. Binaries embedding the engine call [`init`]
//! once at start-up; library code only emits events and spans.

use tracing::Span;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::actor::domain::ActorId;
use crate::task::domain::{TaskAction, TaskId, TaskStatus};

/// Errors returned while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed in this process.
    #[error("tracing subscriber already initialised: {0}")]
    AlreadyInitialised(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs a fmt subscriber filtered by `RUST_LOG`, or by
/// `default_directive` when `RUST_LOG` is unset or invalid.
///
/// # Errors
///
/// Returns [`TelemetryError::AlreadyInitialised`] if a global subscriber is
/// already set.
pub fn init(default_directive: &str) -> Result<(), TelemetryError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init()?;
    Ok(())
}

/// Starts a span covering one lifecycle operation on a task.
///
/// The `task.status` field is declared empty and is filled in by
/// [`record_transition`].
#[must_use]
pub fn task_span(operation: &'static str, task_id: TaskId, actor_id: &ActorId) -> Span {
    tracing::info_span!(
        "task.lifecycle",
        "task.operation" = operation,
        "task.id" = %task_id,
        "actor.id" = %actor_id,
        "task.status" = tracing::field::Empty,
    )
}

/// Records a completed status transition on `span`.
pub fn record_transition(span: &Span, action: TaskAction, from: TaskStatus, to: TaskStatus) {
    span.record("task.status", to.as_str());
    span.in_scope(|| {
        tracing::info!(
            action = action.as_str(),
            from = from.as_str(),
            to = to.as_str(),
            "task status changed"
        );
    });
}
