//! Configuration for tree generation.

use crate::error::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Breadth used when the caller does not provide one.
pub const DEFAULT_MAX_BREADTH: usize = 5;

/// Height used when the caller does not provide one.
pub const DEFAULT_MAX_HEIGHT: usize = 5;

/// Resolved configuration driving a single generation run.
///
/// The value is `Copy`: every recursive step works on its own derived copy,
/// so a branch lowering its height can never affect a sibling or an ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Maximum number of direct children of any mapping or sequence.
    pub max_breadth: usize,

    /// Remaining depth budget, in edges below the current node.
    pub max_height: usize,

    /// Allow sequence values.
    pub arrays: bool,

    /// Allow callable stubs.
    pub functions: bool,

    /// Allow timestamp, pattern and error leaves.
    pub complex_types: bool,

    /// Place some mapping children in the node's shared store instead of its own keys.
    pub shared_store: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            max_breadth: DEFAULT_MAX_BREADTH,
            max_height: DEFAULT_MAX_HEIGHT,
            arrays: false,
            functions: false,
            complex_types: false,
            shared_store: false,
        }
    }
}

impl GenerationConfig {
    /// Create a new config with the given maximum breadth.
    pub fn with_breadth(mut self, breadth: usize) -> Self {
        self.max_breadth = breadth;
        self
    }

    /// Create a new config with the given maximum height.
    pub fn with_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Create a new config with sequences enabled or disabled.
    pub fn with_arrays(mut self, enabled: bool) -> Self {
        self.arrays = enabled;
        self
    }

    /// Create a new config with callable stubs enabled or disabled.
    pub fn with_functions(mut self, enabled: bool) -> Self {
        self.functions = enabled;
        self
    }

    /// Create a new config with complex leaves enabled or disabled.
    pub fn with_complex_types(mut self, enabled: bool) -> Self {
        self.complex_types = enabled;
        self
    }

    /// Create a new config with shared-store placement enabled or disabled.
    pub fn with_shared_store(mut self, enabled: bool) -> Self {
        self.shared_store = enabled;
        self
    }

    /// Derive the config used one level further down the tree.
    pub fn reduced_height(&self) -> Self {
        GenerationConfig {
            max_height: self.max_height.saturating_sub(1),
            ..*self
        }
    }

    /// Whether the height budget is spent.
    pub fn is_exhausted(&self) -> bool {
        self.max_height == 0
    }
}

impl fmt::Display for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "breadth={} height={} arrays={} functions={} complex={} shared_store={}",
            self.max_breadth,
            self.max_height,
            self.arrays,
            self.functions,
            self.complex_types,
            self.shared_store
        )
    }
}

/// Partial, caller-facing options record.
///
/// Every field is optional and falls back to the [`GenerationConfig`] default.
/// Numeric fields are signed so that negative input can be reported instead of
/// silently wrapped. Field names follow the camelCase options object
/// (`maxBreadth`, `maxHeight`, `arrays`, `functions`, `complexTypes`,
/// `onPrototype`). `maxWidth` is an older spelling of `maxBreadth` and is only
/// consulted when `maxBreadth` is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_breadth: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrays: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complex_types: Option<bool>,

    #[serde(default, alias = "sharedStore", skip_serializing_if = "Option::is_none")]
    pub on_prototype: Option<bool>,
}

impl GenerationOptions {
    /// Copy recognized fields into a fresh config, filling in defaults.
    ///
    /// The options themselves are only read.
    pub fn resolve(&self) -> Result<GenerationConfig> {
        let defaults = GenerationConfig::default();
        let (breadth_field, breadth) = match self.max_breadth {
            Some(breadth) => ("maxBreadth", Some(breadth)),
            None => ("maxWidth", self.max_width),
        };

        Ok(GenerationConfig {
            max_breadth: resolve_bound(breadth_field, breadth, defaults.max_breadth)?,
            max_height: resolve_bound("maxHeight", self.max_height, defaults.max_height)?,
            arrays: self.arrays.unwrap_or(defaults.arrays),
            functions: self.functions.unwrap_or(defaults.functions),
            complex_types: self.complex_types.unwrap_or(defaults.complex_types),
            shared_store: self.on_prototype.unwrap_or(defaults.shared_store),
        })
    }
}

fn resolve_bound(name: &str, value: Option<i64>, default: usize) -> Result<usize> {
    match value {
        None => Ok(default),
        Some(raw) => usize::try_from(raw).map_err(|_| {
            TreeGenError::invalid_config(format!(
                "{name} must be a non-negative integer (got {raw})"
            ))
        }),
    }
}
