//! Mail client state for Atelier.
//!
//! A thin wrapper around a webmail provider: the provider gateway is
//! consumed through a port, never reimplemented. The module owns the fixed
//! folder-to-query mapping, the outbound envelope, and the session mailbox
//! with its two-phase optimistic send protocol.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
