//! Port contracts for the mail provider boundary.
//!
//! Ports define infrastructure-agnostic interfaces used by mail services.

pub mod gateway;

pub use gateway::{MailGateway, MailGatewayError, MailGatewayResult};
