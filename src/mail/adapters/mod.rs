//! Gateway adapters for the mail boundary.

mod memory;

pub use memory::InMemoryMailGateway;
