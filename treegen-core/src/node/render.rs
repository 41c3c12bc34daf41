//! Tree rendering for debugging and inspection.
//!
//! This is a human-readable view, not a serialization format.

use super::{Callable, ComplexValue, Mapping, Node, Placement, Primitive};
use chrono::SecondsFormat;
use std::fmt;

/// Marker in front of keys that live in a shared store.
pub const SHARED_MARKER: char = '^';

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::String(s) => write!(f, "{s:?}"),
            Primitive::Number(n) => write!(f, "{n}"),
            Primitive::Boolean(b) => write!(f, "{b}"),
            Primitive::Absent => write!(f, "~"),
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn>")
    }
}

impl fmt::Display for ComplexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexValue::Timestamp(at) => write!(
                f,
                "Timestamp({})",
                at.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            ComplexValue::Pattern(pattern) => write!(f, "/{}/im", pattern.as_str()),
            ComplexValue::Error(err) => write!(f, "Error({err})"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_compact())
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_compact())
    }
}

impl Mapping {
    /// Render the mapping as an indented tree, one entry per line.
    pub fn render(&self) -> String {
        let mut result = String::from("{}\n");
        render_children(&child_entries_of_mapping(self), &mut result, "");
        result
    }

    /// Render the mapping on a single line.
    pub fn render_compact(&self) -> String {
        let entries: Vec<String> = self
            .entries()
            .map(|(placement, key, value)| {
                format!("{}: {}", entry_label(placement, key), value.render_compact())
            })
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

impl Node {
    /// Render the node as an indented tree, one entry per line.
    pub fn render(&self) -> String {
        let mut result = format!("{}\n", head(self));
        render_children(&child_entries(self), &mut result, "");
        result
    }

    /// Render the node on a single line.
    pub fn render_compact(&self) -> String {
        match self {
            Node::Mapping(mapping) => mapping.render_compact(),
            Node::Sequence(items) => {
                let items: Vec<String> = items.iter().map(Node::render_compact).collect();
                format!("[{}]", items.join(", "))
            }
            Node::Primitive(value) => value.to_string(),
            Node::Callable(value) => value.to_string(),
            Node::Complex(value) => value.to_string(),
        }
    }
}

fn entry_label(placement: Placement, key: &str) -> String {
    match placement {
        Placement::Own => key.to_string(),
        Placement::Shared => format!("{SHARED_MARKER}{key}"),
    }
}

fn head(node: &Node) -> String {
    match node {
        Node::Mapping(_) => "{}".to_string(),
        Node::Sequence(_) => "[]".to_string(),
        leaf => leaf.render_compact(),
    }
}

fn child_entries_of_mapping(mapping: &Mapping) -> Vec<(String, &Node)> {
    mapping
        .entries()
        .map(|(placement, key, value)| (entry_label(placement, key), value))
        .collect()
}

fn child_entries(node: &Node) -> Vec<(String, &Node)> {
    match node {
        Node::Mapping(mapping) => child_entries_of_mapping(mapping),
        Node::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (format!("[{i}]"), item))
            .collect(),
        _ => Vec::new(),
    }
}

fn render_children(children: &[(String, &Node)], result: &mut String, prefix: &str) {
    for (i, (label, child)) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        result.push_str(prefix);
        if is_last {
            result.push_str("└── ");
        } else {
            result.push_str("├── ");
        }
        result.push_str(&format!("{label}: {}\n", head(child)));

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_children(&child_entries(child), result, &child_prefix);
    }
}
