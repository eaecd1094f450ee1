//! Assistant adapters.

mod memory;

pub use memory::CannedAssistant;
