//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    AddCommentRequest, CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService, TransitionTaskRequest,
};
