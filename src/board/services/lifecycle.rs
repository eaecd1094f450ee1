//! Service layer for the task lifecycle engine.

use crate::board::domain::{
    Attachment, BoardDomainError, MemberId, NewTask, ProjectId, Rating, RejectionReason, Role,
    Task, TaskId, TaskPriority, TaskStatus, authorize_task_creation,
};
use crate::workspace::WorkspaceSession;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    assignee: Option<MemberId>,
    priority: TaskPriority,
    deadline: DateTime<Utc>,
    project: Option<ProjectId>,
    department: String,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, deadline: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            assignee: None,
            priority: TaskPriority::Medium,
            deadline,
            project: None,
            department: "General".to_owned(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the intended assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: MemberId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the priority band.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the project grouping.
    #[must_use]
    pub const fn with_project(mut self, project: ProjectId) -> Self {
        self.project = Some(project);
        self
    }

    /// Sets the department label.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskLifecycleError {
    /// Domain validation failed; no partial entity was created.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The authorization policy denied the operation; state is unchanged.
    #[error("rejected: {0}")]
    Rejected(#[from] RejectionReason),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    UnknownTask(TaskId),

    /// No roster member is available to take the default assignment.
    #[error("no team members available for assignment")]
    EmptyRoster,
}

/// Result type for task lifecycle operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Stateless: every operation takes the owning [`WorkspaceSession`]
/// explicitly and runs synchronously to completion, so no two mutations of
/// the task set can overlap.
#[derive(Clone)]
pub struct TaskLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> TaskLifecycleService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Creates a task in the `Todo` column.
    ///
    /// Employees may not create tasks. When the requested assignee is
    /// omitted or does not resolve against the roster, the task is assigned
    /// to the first roster member (the seeded workspace owner) — a defined
    /// default rather than a silent fallback.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Rejected`] for Employee actors,
    /// [`TaskLifecycleError::EmptyRoster`] when no default assignee exists,
    /// or a domain error when validation fails.
    pub fn create_task(
        &self,
        session: &mut WorkspaceSession,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        authorize_task_creation(session.actor().role())?;

        let assignee_id = request
            .assignee
            .and_then(|id| session.member(id))
            .or_else(|| session.roster().first())
            .map(crate::board::domain::TeamMember::id)
            .ok_or(TaskLifecycleError::EmptyRoster)?;

        let project_id = request.project.unwrap_or_else(|| session.default_project_id());

        let task = Task::new(
            NewTask {
                title: request.title,
                description: request.description,
                project_id,
                department: request.department,
                assignee_id,
                priority: request.priority,
                deadline: request.deadline,
            },
            &*self.clock,
        )?;

        session.push_task(task.clone());
        Ok(task)
    }

    /// Attempts to move a task to `target` on behalf of the session actor.
    ///
    /// The lock is recomputed from the clock before the policy is consulted;
    /// a rejected attempt leaves the task unchanged and an accepted one
    /// changes only the status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTask`] for unknown ids or
    /// [`TaskLifecycleError::Rejected`] when the policy denies the move.
    pub fn attempt_transition(
        &self,
        session: &mut WorkspaceSession,
        task_id: TaskId,
        target: TaskStatus,
    ) -> TaskLifecycleResult<()> {
        let actor = session.actor();
        let task = session
            .task_mut(task_id)
            .ok_or(TaskLifecycleError::UnknownTask(task_id))?;
        task.attempt_transition(target, actor, &*self.clock)?;
        Ok(())
    }

    /// Records an approval rating and optional manager feedback.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Rejected`] for Employee actors, an
    /// invalid-rating domain error for out-of-range values, or
    /// [`BoardDomainError::RatingBeforeApproval`] when the task is not
    /// `Done`.
    pub fn rate_task(
        &self,
        session: &mut WorkspaceSession,
        task_id: TaskId,
        value: u8,
        feedback: Option<String>,
    ) -> TaskLifecycleResult<()> {
        if matches!(session.actor().role(), Role::Employee) {
            return Err(TaskLifecycleError::Rejected(
                RejectionReason::InsufficientRole,
            ));
        }
        let rating = Rating::new(value)?;
        let task = session
            .task_mut(task_id)
            .ok_or(TaskLifecycleError::UnknownTask(task_id))?;
        task.rate(rating, feedback)?;
        Ok(())
    }

    /// Appends an attachment to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UnknownTask`] for unknown ids.
    pub fn add_attachment(
        &self,
        session: &mut WorkspaceSession,
        task_id: TaskId,
        attachment: Attachment,
    ) -> TaskLifecycleResult<()> {
        let task = session
            .task_mut(task_id)
            .ok_or(TaskLifecycleError::UnknownTask(task_id))?;
        task.push_attachment(attachment);
        Ok(())
    }

    /// Applies the result of an asynchronous upload that completed after
    /// the fact.
    ///
    /// There is no cancellation token for in-flight uploads, so completions
    /// are gated instead: the attachment is applied only when the task
    /// still exists and is silently dropped otherwise. Returns whether the
    /// attachment was applied.
    pub fn apply_completed_upload(
        &self,
        session: &mut WorkspaceSession,
        task_id: TaskId,
        attachment: Attachment,
    ) -> bool {
        session.task_mut(task_id).is_some_and(|task| {
            task.push_attachment(attachment);
            true
        })
    }

    /// Removes a task from the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Rejected`] for Employee actors or
    /// [`TaskLifecycleError::UnknownTask`] for unknown ids.
    pub fn delete_task(
        &self,
        session: &mut WorkspaceSession,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        if matches!(session.actor().role(), Role::Employee) {
            return Err(TaskLifecycleError::Rejected(
                RejectionReason::InsufficientRole,
            ));
        }
        session
            .remove_task(task_id)
            .ok_or(TaskLifecycleError::UnknownTask(task_id))
    }
}
