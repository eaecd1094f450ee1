//! Application services for text assistance.

mod drafting;

pub use drafting::{DraftingError, DraftingService};
