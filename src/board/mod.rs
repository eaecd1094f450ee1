//! Task board state machine for Atelier.
//!
//! This module owns the only subsystem with non-trivial rules: the task
//! lifecycle (status transitions and deadline locking), the role-based
//! authorization policy that gates each attempted transition, the read-only
//! board projection used for column rendering, and the team roster with its
//! integrity rules. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]
//!
//! All mutable state lives in the workspace session and is injected into
//! the services; nothing here reaches for ambient globals.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
