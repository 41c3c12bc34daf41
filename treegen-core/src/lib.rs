//! Core functionality for treegen.
//!
//! This crate provides the recursive generator for random nested data trees,
//! together with the node model, key generation, rendering and statistics.

pub mod config;
pub mod error;
pub mod gen;
pub mod keys;
pub mod node;
pub mod stats;

// Re-export the main types
pub use config::*;
pub use error::*;
pub use gen::*;
pub use keys::*;
pub use node::*;
pub use stats::*;
