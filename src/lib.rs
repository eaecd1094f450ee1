//! Atelier: the core of a web workspace suite.
//!
//! This crate provides the state machines behind a combined webmail client
//! and Kanban task board: task lifecycle and deadline locking, role-based
//! transition authorization, board projection, team roster management,
//! mailbox state over a provider gateway, and session persistence.
//!
//! # Architecture
//!
//! Atelier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (stores, gateways)
//!
//! # Modules
//!
//! - [`board`]: Task lifecycle, authorization policy, projection, roster
//! - [`mail`]: Folder mapping, mail gateway port, mailbox state
//! - [`assist`]: Generative text assistant port and prompt library
//! - [`workspace`]: Key-value persistence and the session object

pub mod assist;
pub mod board;
pub mod mail;
pub mod workspace;
