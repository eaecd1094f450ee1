//! Unit tests for the workspace module.
//!
//! Covers the key-value store adapters and the session's degraded load,
//! login, and persistence behaviour.
