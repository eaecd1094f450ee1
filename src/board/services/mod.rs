//! Application services for the task board.

mod lifecycle;
mod roster;

pub use lifecycle::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService};
pub use roster::{NewMemberRequest, OwnerProfile, RosterError, RosterService};
