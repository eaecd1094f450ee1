//! Port contracts for workspace persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the session.

pub mod store;

pub use store::{
    COMPANY_PROFILE_KEY, KeyValueStore, SESSION_USER_KEY, StoreError, StoreResult, TASK_LIST_KEY,
    TEAM_ROSTER_KEY,
};
