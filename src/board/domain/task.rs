//! Task aggregate root and related lifecycle types.

use super::policy::{Actor, RejectionReason, authorize_transition};
use super::{
    AttachmentId, BoardDomainError, MemberId, ParsePriorityError, ParseTaskStatusError, ProjectId,
    TaskId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
///
/// The board permits arbitrary drag targets; the engine's job is to accept
/// or reject each attempted move, not to enforce strict ordering. `Done` is
/// terminal for everyone except a Director override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task is awaiting review.
    Review,
    /// Task has been approved.
    Done,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns true when the status is the approval state.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task priority band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Urgent work.
    High,
    /// Default band.
    Medium,
    /// Background work.
    Low,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Validated approval rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Creates a validated rating.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidRating`] when the value is zero or
    /// greater than five.
    pub const fn new(value: u8) -> Result<Self, BoardDomainError> {
        if value == 0 || value > 5 {
            return Err(BoardDomainError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Attachment payload kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    /// An uploaded image.
    Image,
    /// Any other file.
    File,
}

/// Visibility level of an attachment within the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Visible to the whole workspace.
    Public,
    /// Visible to Managers and Directors.
    Management,
    /// Visible to Directors only.
    Director,
}

/// File attached to a task by an external upload collaborator.
///
/// Size and type validation happen in the upload collaborator; the domain
/// only records the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    id: AttachmentId,
    name: String,
    url: String,
    kind: AttachmentKind,
    uploaded_by: MemberId,
    access_level: AccessLevel,
}

impl Attachment {
    /// Creates an attachment record for a completed upload.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        kind: AttachmentKind,
        uploaded_by: MemberId,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            id: AttachmentId::new(),
            name: name.into(),
            url: url.into(),
            kind,
            uploaded_by,
            access_level,
        }
    }

    /// Returns the attachment identifier.
    #[must_use]
    pub const fn id(&self) -> AttachmentId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hosted URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the payload kind.
    #[must_use]
    pub const fn kind(&self) -> AttachmentKind {
        self.kind
    }

    /// Returns the uploading member.
    #[must_use]
    pub const fn uploaded_by(&self) -> MemberId {
        self.uploaded_by
    }

    /// Returns the visibility level.
    #[must_use]
    pub const fn access_level(&self) -> AccessLevel {
        self.access_level
    }
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title; must be non-empty after trimming.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Project the task is grouped under.
    pub project_id: ProjectId,
    /// Department label.
    pub department: String,
    /// Resolved assignee.
    pub assignee_id: MemberId,
    /// Priority band.
    pub priority: TaskPriority,
    /// Point in time after which the task locks if not yet approved.
    pub deadline: DateTime<Utc>,
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
    /// Persisted project reference.
    pub project_id: ProjectId,
    /// Persisted department label.
    pub department: String,
    /// Persisted assignee reference.
    pub assignee_id: MemberId,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted cached lock flag; refreshed before use.
    pub locked: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted attachments, in upload order.
    pub attachments: Vec<Attachment>,
    /// Persisted rating, if the task was rated after approval.
    pub rating: Option<Rating>,
    /// Persisted manager feedback, if any.
    pub manager_feedback: Option<String>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    project_id: ProjectId,
    department: String,
    assignee_id: MemberId,
    priority: TaskPriority,
    status: TaskStatus,
    deadline: DateTime<Utc>,
    locked: bool,
    created_at: DateTime<Utc>,
    attachments: Vec<Attachment>,
    rating: Option<Rating>,
    manager_feedback: Option<String>,
}

impl Task {
    /// Creates a new task in the `Todo` column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(input: NewTask, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        let title = input.title.trim().to_owned();
        if title.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }

        Ok(Self {
            id: TaskId::new(),
            title,
            description: input.description,
            project_id: input.project_id,
            department: input.department,
            assignee_id: input.assignee_id,
            priority: input.priority,
            status: TaskStatus::Todo,
            deadline: input.deadline,
            locked: false,
            created_at: clock.utc(),
            attachments: Vec::new(),
            rating: None,
            manager_feedback: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            project_id: data.project_id,
            department: data.department,
            assignee_id: data.assignee_id,
            priority: data.priority,
            status: data.status,
            deadline: data.deadline,
            locked: data.locked,
            created_at: data.created_at,
            attachments: data.attachments,
            rating: data.rating,
            manager_feedback: data.manager_feedback,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the project reference.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the department label.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the assignee reference.
    ///
    /// The reference may dangle after the member was removed from the
    /// roster; the board renders such tasks unchanged.
    #[must_use]
    pub const fn assignee_id(&self) -> MemberId {
        self.assignee_id
    }

    /// Returns the priority band.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the cached lock flag as of the last recomputation.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the attachments in upload order.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Returns the approval rating, if entered.
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Returns the manager feedback, if entered.
    #[must_use]
    pub fn manager_feedback(&self) -> Option<&str> {
        self.manager_feedback.as_deref()
    }

    /// Recomputes the lock flag from the current clock reading.
    ///
    /// A task is locked when its deadline has passed and it has not been
    /// approved. Called whenever deadline or status change and immediately
    /// before any transition is authorized; the cached value is never
    /// trusted across evaluations.
    pub fn refresh_lock(&mut self, clock: &impl Clock) {
        self.locked = clock.utc() > self.deadline && !self.status.is_done();
    }

    /// Attempts to move the task to `target` on behalf of `actor`.
    ///
    /// Recomputes the lock, consults the authorization policy, and applies
    /// the new status only if the policy permits. A rejected attempt leaves
    /// the task unchanged apart from the refreshed lock flag; an accepted
    /// one changes the status and nothing else.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] produced by the policy.
    pub fn attempt_transition(
        &mut self,
        target: TaskStatus,
        actor: Actor,
        clock: &impl Clock,
    ) -> Result<(), RejectionReason> {
        self.refresh_lock(clock);
        authorize_transition(self.status, self.locked, target, actor.role())?;
        self.status = target;
        self.refresh_lock(clock);
        Ok(())
    }

    /// Records an approval rating and optional manager feedback.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::RatingBeforeApproval`] when the task has
    /// not reached `Done`.
    pub fn rate(
        &mut self,
        rating: Rating,
        feedback: Option<String>,
    ) -> Result<(), BoardDomainError> {
        if !self.status.is_done() {
            return Err(BoardDomainError::RatingBeforeApproval(self.id));
        }
        self.rating = Some(rating);
        self.manager_feedback = feedback;
        Ok(())
    }

    /// Appends an attachment. Attachments are append-only in this scope.
    pub fn push_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }
}
