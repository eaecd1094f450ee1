//! Domain model for the task board.
//!
//! The board domain models task lifecycle state, deadline locking, the
//! role-based transition policy, the board projection read model, and the
//! team roster entities, keeping all infrastructure concerns outside of
//! the domain boundary.

mod error;
mod ids;
mod member;
mod policy;
mod project;
mod projection;
mod task;

pub use error::{
    BoardDomainError, ParsePriorityError, ParseRoleError, ParseTaskStatusError,
};
pub use ids::{AttachmentId, MemberId, ProjectId, TaskId};
pub use member::{AvatarColor, EmailAddress, NewMember, Role, TeamMember};
pub use policy::{Actor, RejectionReason, authorize_task_creation, authorize_transition};
pub use project::{CompanyProfile, Progress, Project};
pub use projection::BoardProjection;
pub use task::{
    AccessLevel, Attachment, AttachmentKind, NewTask, PersistedTaskData, Rating, Task,
    TaskPriority, TaskStatus,
};
