//! Generative text assistance for drafting and summarisation.
//!
//! The assistant is a pure helper behind an async port: it produces
//! suggested text on request and no control flow in the rest of the
//! application depends on its availability.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
