//! Shape statistics for generated trees.

use crate::node::*;
use std::collections::HashMap;
use std::fmt;

/// Statistics gathered by walking a generated tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Every node, the root included.
    pub total_nodes: usize,
    /// Longest path from the root, in edges.
    pub max_depth: usize,
    /// Largest number of direct children seen on any composite node.
    pub max_breadth: usize,
    /// Node counts keyed by [`Node::kind_name`].
    pub kinds: HashMap<String, usize>,
    /// Mappings that own a shared store.
    pub shared_stores: usize,
    /// Entries placed in shared stores.
    pub shared_entries: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `root` and collect its statistics.
    pub fn collect(root: &Mapping) -> Self {
        let mut stats = TreeStats::new();
        stats.record_mapping(root, 0);
        stats
    }

    /// Number of nodes of the given kind.
    pub fn count(&self, kind: &str) -> usize {
        self.kinds.get(kind).copied().unwrap_or(0)
    }

    fn record_kind(&mut self, name: &str) {
        *self.kinds.entry(name.to_string()).or_insert(0) += 1;
    }

    fn record_visit(&mut self, kind: &str, depth: usize, breadth: usize) {
        self.total_nodes += 1;
        self.max_depth = self.max_depth.max(depth);
        self.max_breadth = self.max_breadth.max(breadth);
        self.record_kind(kind);
    }

    fn record_mapping(&mut self, mapping: &Mapping, depth: usize) {
        self.record_visit("mapping", depth, mapping.len());
        if mapping.has_shared_store() {
            self.shared_stores += 1;
            self.shared_entries += mapping.shared_len();
        }
        for (_, _, child) in mapping.entries() {
            self.record_node(child, depth + 1);
        }
    }

    fn record_node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Mapping(mapping) => self.record_mapping(mapping, depth),
            Node::Sequence(items) => {
                self.record_visit("sequence", depth, items.len());
                for item in items {
                    self.record_node(item, depth + 1);
                }
            }
            leaf => self.record_visit(leaf.kind_name(), depth, 0),
        }
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  nodes={}, depth={}, breadth={}",
            self.total_nodes, self.max_depth, self.max_breadth
        )?;
        if self.shared_stores > 0 {
            writeln!(
                f,
                "  shared stores={} ({} entries)",
                self.shared_stores, self.shared_entries
            )?;
        }

        let mut kind_names: Vec<_> = self.kinds.keys().collect();
        kind_names.sort();
        for name in kind_names {
            let count = self.kinds[name];
            let percentage = (count as f64 / self.total_nodes.max(1) as f64) * 100.0;
            writeln!(f, "    {:>3.0}% {} ({})", percentage, name, count)?;
        }
        Ok(())
    }
}
