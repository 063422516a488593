use crate::consts::{MIN_SCORABLE_LEN, NODE_COUNT};
use crate::error::{LfResult, LockForgeError};
use crate::geometry::{is_valid_node, middle_node, NodeIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered run of unique grid nodes, grown one tap at a time.
///
/// Only the tail ever changes: nodes are appended (with the skipped middle node
/// inserted first when the rule table calls for it) or popped by `undo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    nodes: Vec<NodeIndex>,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonicalizes a raw tap list by feeding every tap through `try_append`.
    pub fn from_taps<I>(taps: I) -> Self
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        let mut pattern = Self::new();
        for tap in taps {
            pattern.try_append(Some(tap));
        }
        pattern
    }

    /// Applies the grid rules for one candidate node. Returns whether the
    /// pattern changed; rejected candidates are silently ignored.
    pub fn try_append(&mut self, candidate: Option<NodeIndex>) -> bool {
        let Some(next) = candidate.filter(|&n| is_valid_node(n)) else {
            return false;
        };

        let Some(&last) = self.nodes.last() else {
            self.nodes.push(next);
            return true;
        };

        if last == next || self.contains(next) {
            return false;
        }

        if let Some(mid) = middle_node(last, next) {
            if mid != next && !self.contains(mid) {
                self.nodes.push(mid);
            }
        }
        self.nodes.push(next);
        true
    }

    /// Pure form of `try_append`.
    pub fn appended(&self, candidate: Option<NodeIndex>) -> Self {
        let mut next = self.clone();
        next.try_append(candidate);
        next
    }

    pub fn undo(&mut self) -> Option<NodeIndex> {
        self.nodes.pop()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    #[inline(always)]
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.nodes.contains(&node)
    }

    pub fn first(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn last(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }

    /// Long enough to be scored.
    pub fn is_scorable(&self) -> bool {
        self.nodes.len() >= MIN_SCORABLE_LEN
    }

    pub fn is_complete(&self) -> bool {
        self.nodes.len() == NODE_COUNT
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return write!(f, "-");
        }
        let parts: Vec<String> = self.nodes.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(" -> "))
    }
}

/// Parses a tap list such as `"0,4,8"` or `"0 4 8"`.
///
/// Indices must be 0..=8; ordering rules are left to `Pattern::from_taps`.
pub fn parse_taps(input: &str) -> LfResult<Vec<NodeIndex>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            let idx: NodeIndex = s
                .parse()
                .map_err(|_| LockForgeError::Validation(format!("'{}' is not a node index", s)))?;
            if !is_valid_node(idx) {
                return Err(LockForgeError::Validation(format!(
                    "node {} is outside the 0-8 grid",
                    idx
                )));
            }
            Ok(idx)
        })
        .collect()
}
