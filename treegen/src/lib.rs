//! Random nested data trees for test fixtures and fuzz inputs.
//!
//! This is the main entry point for treegen, re-exporting the generator,
//! configuration and node model from `treegen-core`.
//!
//! ```rust
//! use treegen::*;
//!
//! let options = GenerationOptions {
//!     max_height: Some(3),
//!     arrays: Some(true),
//!     ..Default::default()
//! };
//! let tree = generate(Some(&options)).unwrap();
//! assert!(tree.depth() <= 3);
//! ```

pub use treegen_core::*;
