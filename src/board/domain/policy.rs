//! Role-based authorization policy for board operations.
//!
//! The policy is a set of pure functions: given any (status, lock, target,
//! role) combination the decision is deterministic and has no side effects,
//! so it can be tested independently of the lifecycle engine.

use super::TaskStatus;
use super::member::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The acting user, passed explicitly into every authorization check.
///
/// The role is a local simulation toggle in this scope, never inferred
/// from ambient UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    role: Role,
}

impl Actor {
    /// Creates an actor with the given role.
    #[must_use]
    pub const fn new(role: Role) -> Self {
        Self { role }
    }

    /// Returns the acting role.
    #[must_use]
    pub const fn role(self) -> Role {
        self.role
    }
}

/// Reason an attempted operation was denied.
///
/// Surfaced to the user as an inline message; the denied operation leaves
/// all state unchanged.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RejectionReason {
    /// The deadline has passed and the actor cannot override the lock.
    #[error("locked: deadline passed")]
    DeadlineLocked,

    /// Employees cannot move tasks into the approval column.
    #[error("no approval authority")]
    NoApprovalAuthority,

    /// The task was already approved and the actor cannot reverse it.
    #[error("task already approved")]
    TaskAlreadyApproved,

    /// The actor's role does not permit the operation at all.
    #[error("insufficient role")]
    InsufficientRole,
}

/// Decides whether `role` may move a task from `current` to `target`.
///
/// Rules, in priority order:
///
/// 1. A Director is unrestricted by lock or status (override authority,
///    including reversing `Done`).
/// 2. A locked task denies every other role.
/// 3. An Employee may neither move a task into `Done` nor change a task
///    that is already `Done`.
/// 4. A Manager follows the Employee restrictions except that approval is
///    permitted: a Manager may move a task into `Done`, but once approved
///    only a Director may change it.
///
/// # Errors
///
/// Returns the first matching [`RejectionReason`].
pub const fn authorize_transition(
    current: TaskStatus,
    locked: bool,
    target: TaskStatus,
    role: Role,
) -> Result<(), RejectionReason> {
    if matches!(role, Role::Director) {
        return Ok(());
    }
    if locked {
        return Err(RejectionReason::DeadlineLocked);
    }
    match role {
        Role::Director => Ok(()),
        Role::Manager => {
            if matches!(current, TaskStatus::Done) {
                return Err(RejectionReason::TaskAlreadyApproved);
            }
            Ok(())
        }
        Role::Employee => {
            if matches!(target, TaskStatus::Done) {
                return Err(RejectionReason::NoApprovalAuthority);
            }
            if matches!(current, TaskStatus::Done) {
                return Err(RejectionReason::TaskAlreadyApproved);
            }
            Ok(())
        }
    }
}

/// Decides whether `role` may create new tasks.
///
/// Only Directors and Managers may create tasks.
///
/// # Errors
///
/// Returns [`RejectionReason::InsufficientRole`] for Employees.
pub const fn authorize_task_creation(role: Role) -> Result<(), RejectionReason> {
    if matches!(role, Role::Employee) {
        return Err(RejectionReason::InsufficientRole);
    }
    Ok(())
}
