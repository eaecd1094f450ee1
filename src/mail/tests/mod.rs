//! Unit tests for the mail module.
//!
//! Tests are organised by concept: folder-to-query mapping, mailbox read
//! models and pending-send bookkeeping, and service orchestration against
//! the in-memory gateway.

mod mailbox_tests;
mod service_tests;
