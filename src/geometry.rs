//! Fixed 3x3 grid: node identities, coordinates, the middle-node rule table and
//! pointer hit-testing.

use crate::consts::{CENTER_NODE, CORNER_NODES, GRID_SIZE, NODE_COUNT};
use crate::error::{LfResult, LockForgeError};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub mod reflection;

pub use self::reflection::Reflection;

/// Grid node index, 0..=8 in row-major order.
pub type NodeIndex = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NodeClass {
    Corner,
    Edge,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridNode {
    pub index: NodeIndex,
    pub row: u8,
    pub col: u8,
    pub class: NodeClass,
}

impl GridNode {
    const fn at(index: NodeIndex) -> Self {
        let row = index / GRID_SIZE as u8;
        let col = index % GRID_SIZE as u8;
        let class = if index == CENTER_NODE {
            NodeClass::Center
        } else if row != 1 && col != 1 {
            NodeClass::Corner
        } else {
            NodeClass::Edge
        };
        Self {
            index,
            row,
            col,
            class,
        }
    }

    pub fn get(index: NodeIndex) -> Option<&'static GridNode> {
        GRID_NODES.get(index as usize)
    }
}

pub static GRID_NODES: [GridNode; NODE_COUNT] = [
    GridNode::at(0),
    GridNode::at(1),
    GridNode::at(2),
    GridNode::at(3),
    GridNode::at(4),
    GridNode::at(5),
    GridNode::at(6),
    GridNode::at(7),
    GridNode::at(8),
];

#[inline(always)]
pub fn is_valid_node(index: NodeIndex) -> bool {
    (index as usize) < NODE_COUNT
}

pub fn classify(index: NodeIndex) -> Option<NodeClass> {
    GridNode::get(index).map(|n| n.class)
}

pub fn is_corner(index: NodeIndex) -> bool {
    CORNER_NODES.contains(&index)
}

/// Analysis coordinate of a node: `(col, row)` on a unit-spaced grid.
///
/// Every geometric feature is scale invariant, so the analyzer works on unit
/// cells rather than the pad's pixel layout.
#[inline(always)]
pub fn node_center(index: NodeIndex) -> (f64, f64) {
    let col = (index as usize % GRID_SIZE) as f64;
    let row = (index as usize / GRID_SIZE) as f64;
    (col, row)
}

/// Directed (from, to, skipped) triples for every line that skips exactly one
/// node: 3 rows, 3 columns and both diagonals, each in both directions.
pub const MIDDLE_NODE_RULES: [(NodeIndex, NodeIndex, NodeIndex); 16] = [
    // Rows
    (0, 2, 1),
    (2, 0, 1),
    (3, 5, 4),
    (5, 3, 4),
    (6, 8, 7),
    (8, 6, 7),
    // Columns
    (0, 6, 3),
    (6, 0, 3),
    (1, 7, 4),
    (7, 1, 4),
    (2, 8, 5),
    (8, 2, 5),
    // Diagonals
    (0, 8, 4),
    (8, 0, 4),
    (2, 6, 4),
    (6, 2, 4),
];

/// Returns the node skipped when connecting `from` directly to `to`, if any.
pub fn middle_node(from: NodeIndex, to: NodeIndex) -> Option<NodeIndex> {
    MIDDLE_NODE_RULES
        .iter()
        .find(|&&(a, b, _)| a == from && b == to)
        .map(|&(_, _, m)| m)
}

/// Pixel layout of the drawing pad, used to resolve pointer positions to nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadLayout {
    pub size: f64,
    pub margin: f64,
    pub hit_radius: f64,
}

impl Default for PadLayout {
    fn default() -> Self {
        Self {
            size: 300.0,
            margin: 40.0,
            hit_radius: 28.0,
        }
    }
}

impl PadLayout {
    #[inline(always)]
    pub fn cell(&self) -> f64 {
        (self.size - self.margin * 2.0) / (GRID_SIZE - 1) as f64
    }

    /// Pixel centre of a node on the pad.
    pub fn center(&self, index: NodeIndex) -> (f64, f64) {
        let (col, row) = node_center(index);
        let cell = self.cell();
        (self.margin + col * cell, self.margin + row * cell)
    }

    /// Nearest node to `(x, y)` if it lies within the hit radius.
    pub fn nearest_node(&self, x: f64, y: f64) -> Option<NodeIndex> {
        let mut best: Option<(NodeIndex, f64)> = None;
        for node in GRID_NODES.iter() {
            let (cx, cy) = self.center(node.index);
            let d2 = (cx - x).powi(2) + (cy - y).powi(2);
            match best {
                Some((_, best_d2)) if best_d2 <= d2 => {}
                _ => best = Some((node.index, d2)),
            }
        }
        best.filter(|&(_, d2)| d2 <= self.hit_radius * self.hit_radius)
            .map(|(idx, _)| idx)
    }
}

/// Parses pointer positions such as `"42,38; 150,150"` (pixels, `;`-separated).
pub fn parse_points(input: &str) -> LfResult<Vec<(f64, f64)>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let bad = || LockForgeError::Validation(format!("'{}' is not an x,y point", s));
            let (x, y) = s.split_once(',').ok_or_else(bad)?;
            let x: f64 = x.trim().parse().map_err(|_| bad())?;
            let y: f64 = y.trim().parse().map_err(|_| bad())?;
            if !x.is_finite() || !y.is_finite() {
                return Err(bad());
            }
            Ok((x, y))
        })
        .collect()
}
