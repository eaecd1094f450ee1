//! Session state and persistence for Atelier.
//!
//! The workspace owns the single logical session: the task set, the team
//! roster, the company profile, the signed-in user record, and the current
//! acting role. State is mutated only through the board services and the
//! session's own load/persist operations, never by the rendering layer.
//!
//! Durability goes through an opaque key-value store port; each persisted
//! key is read independently at startup and written on change.

pub mod adapters;
pub mod ports;
mod session;

pub use session::{SessionUser, WorkspaceSession};

#[cfg(test)]
mod tests;
