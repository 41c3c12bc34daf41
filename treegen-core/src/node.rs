//! Node model for generated trees.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

pub mod render;

/// Source of the example pattern carried by [`ComplexValue::Pattern`].
///
/// Compiled case-insensitive and multi-line.
pub const EXAMPLE_PATTERN: &str = r"12\s*\w+abc\d{1,4}";

/// Message carried by [`ComplexValue::Error`].
pub const EXAMPLE_ERROR_MESSAGE: &str = "this is a test error";

/// A generated value at any position in the tree.
#[derive(Debug, Clone)]
pub enum Node {
    Primitive(Primitive),
    Mapping(Mapping),
    Sequence(Vec<Node>),
    Callable(Callable),
    Complex(ComplexValue),
}

/// Scalar leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    String(String),
    Number(f64),
    Boolean(bool),
    /// A deliberately absent value. This is a leaf in its own right, not a missing slot.
    Absent,
}

/// Opaque no-argument callable with no captured state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Callable;

impl Callable {
    /// Invoke the stub. It does nothing.
    pub fn call(&self) {}
}

/// Leaves that carry richer data but are never recursed into.
#[derive(Debug, Clone)]
pub enum ComplexValue {
    Timestamp(DateTime<Utc>),
    Pattern(Regex),
    Error(FixtureError),
}

impl ComplexValue {
    /// Timestamp `raw` milliseconds after the Unix epoch.
    pub fn timestamp_from_millis(raw: u32) -> Self {
        let at = DateTime::<Utc>::from_timestamp_millis(i64::from(raw)).unwrap_or_default();
        ComplexValue::Timestamp(at)
    }

    /// Compile the example pattern.
    pub fn example_pattern() -> Result<Regex, regex::Error> {
        RegexBuilder::new(EXAMPLE_PATTERN)
            .case_insensitive(true)
            .multi_line(true)
            .build()
    }
}

/// Error value stored in the tree as data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FixtureError {
    pub message: String,
}

impl FixtureError {
    pub fn example() -> Self {
        FixtureError {
            message: EXAMPLE_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Which key-space of a [`Mapping`] an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The node's own keys.
    Own,
    /// The node's shared store, seen through inherited lookup.
    Shared,
}

/// Ordered mapping with unique keys and an optional shared store.
///
/// The shared store is a second key-space belonging to this node only. It is
/// created the first time an entry is placed there and reused afterwards.
/// Lookups consult the own keys first and fall back to the shared store, the
/// way a property read falls through to an inherited one. Keys are unique
/// within each key-space; the same key may appear in both, in which case the
/// own entry shadows the shared one.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    own: IndexMap<String, Node>,
    shared: Option<IndexMap<String, Node>>,
}

impl Mapping {
    /// Create an empty mapping without a shared store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert into the given key-space, returning any value previously under `key` there.
    pub fn insert(&mut self, placement: Placement, key: String, value: Node) -> Option<Node> {
        match placement {
            Placement::Own => self.own.insert(key, value),
            Placement::Shared => self
                .shared
                .get_or_insert_with(IndexMap::new)
                .insert(key, value),
        }
    }

    /// Whether `key` is present in the given key-space.
    pub fn contains_in(&self, placement: Placement, key: &str) -> bool {
        match placement {
            Placement::Own => self.own.contains_key(key),
            Placement::Shared => self
                .shared
                .as_ref()
                .is_some_and(|store| store.contains_key(key)),
        }
    }

    /// Whether `key` is visible on this node, either own or shared.
    pub fn contains_key(&self, key: &str) -> bool {
        self.contains_in(Placement::Own, key) || self.contains_in(Placement::Shared, key)
    }

    /// Look up `key` among own entries, then in the shared store.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.own
            .get(key)
            .or_else(|| self.shared.as_ref().and_then(|store| store.get(key)))
    }

    /// Look up `key` among own entries only.
    pub fn get_own(&self, key: &str) -> Option<&Node> {
        self.own.get(key)
    }

    /// Own entries in insertion order.
    pub fn own(&self) -> &IndexMap<String, Node> {
        &self.own
    }

    /// The shared store, if one was ever created.
    pub fn shared(&self) -> Option<&IndexMap<String, Node>> {
        self.shared.as_ref()
    }

    pub fn has_shared_store(&self) -> bool {
        self.shared.is_some()
    }

    /// Number of own entries.
    pub fn own_len(&self) -> usize {
        self.own.len()
    }

    /// Number of shared-store entries.
    pub fn shared_len(&self) -> usize {
        self.shared.as_ref().map_or(0, IndexMap::len)
    }

    /// Number of children attached to this node, own and shared.
    pub fn len(&self) -> usize {
        self.own_len() + self.shared_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every attached entry with its placement: own entries first, then shared.
    pub fn entries(&self) -> impl Iterator<Item = (Placement, &str, &Node)> {
        let own = self
            .own
            .iter()
            .map(|(key, value)| (Placement::Own, key.as_str(), value));
        let shared = self
            .shared
            .iter()
            .flat_map(|store| store.iter())
            .map(|(key, value)| (Placement::Shared, key.as_str(), value));
        own.chain(shared)
    }

    /// Visible entries: own entries, then shared entries not shadowed by an own key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries()
            .filter(move |(placement, key, _)| {
                *placement == Placement::Own || !self.own.contains_key(*key)
            })
            .map(|(_, key, value)| (key, value))
    }

    /// Visible keys, in the same order as [`Mapping::iter`].
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Depth of this mapping in edges. An empty mapping has depth 0.
    pub fn depth(&self) -> usize {
        self.entries()
            .map(|(_, _, child)| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Count this node and everything below it.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .entries()
            .map(|(_, _, child)| child.count_nodes())
            .sum::<usize>()
    }
}

impl Node {
    /// Short name of this node's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Primitive(Primitive::String(_)) => "string",
            Node::Primitive(Primitive::Number(_)) => "number",
            Node::Primitive(Primitive::Boolean(_)) => "boolean",
            Node::Primitive(Primitive::Absent) => "absent",
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Callable(_) => "callable",
            Node::Complex(ComplexValue::Timestamp(_)) => "timestamp",
            Node::Complex(ComplexValue::Pattern(_)) => "pattern",
            Node::Complex(ComplexValue::Error(_)) => "error",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Mapping(_) | Node::Sequence(_))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Node::Primitive(_))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Number of direct children. Leaves have none.
    pub fn breadth(&self) -> usize {
        match self {
            Node::Mapping(mapping) => mapping.len(),
            Node::Sequence(items) => items.len(),
            _ => 0,
        }
    }

    /// Depth of the subtree rooted here, in edges.
    pub fn depth(&self) -> usize {
        match self {
            Node::Mapping(mapping) => mapping.depth(),
            Node::Sequence(items) => items
                .iter()
                .map(|item| 1 + item.depth())
                .max()
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Count this node and everything below it.
    pub fn count_nodes(&self) -> usize {
        match self {
            Node::Mapping(mapping) => mapping.count_nodes(),
            Node::Sequence(items) => 1 + items.iter().map(Node::count_nodes).sum::<usize>(),
            _ => 1,
        }
    }
}

impl From<Primitive> for Node {
    fn from(value: Primitive) -> Self {
        Node::Primitive(value)
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Node::Mapping(value)
    }
}

impl From<ComplexValue> for Node {
    fn from(value: ComplexValue) -> Self {
        Node::Complex(value)
    }
}
