use super::NodeIndex;
use crate::consts::NODE_COUNT;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Reflection {
    /// Mirror across the vertical axis (left <-> right).
    Horizontal,
    /// Mirror across the horizontal axis (top <-> bottom).
    Vertical,
    /// Mirror across the 0-4-8 diagonal.
    MainDiagonal,
    /// Mirror across the 2-4-6 diagonal.
    AntiDiagonal,
}

const MAP_HORIZONTAL: [NodeIndex; NODE_COUNT] = [2, 1, 0, 5, 4, 3, 8, 7, 6];
const MAP_VERTICAL: [NodeIndex; NODE_COUNT] = [6, 7, 8, 3, 4, 5, 0, 1, 2];
const MAP_MAIN_DIAGONAL: [NodeIndex; NODE_COUNT] = [0, 3, 6, 1, 4, 7, 2, 5, 8];
const MAP_ANTI_DIAGONAL: [NodeIndex; NODE_COUNT] = [8, 5, 2, 7, 4, 1, 6, 3, 0];

impl Reflection {
    pub fn table(&self) -> &'static [NodeIndex; NODE_COUNT] {
        match self {
            Self::Horizontal => &MAP_HORIZONTAL,
            Self::Vertical => &MAP_VERTICAL,
            Self::MainDiagonal => &MAP_MAIN_DIAGONAL,
            Self::AntiDiagonal => &MAP_ANTI_DIAGONAL,
        }
    }

    /// Mirrored node, `None` for an index off the grid.
    #[inline(always)]
    pub fn apply(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.table().get(index as usize).copied()
    }

    /// True when the reflected sequence equals `seq` read forwards or backwards.
    /// A sequence holding an off-grid index never matches.
    pub fn fixes(&self, seq: &[NodeIndex]) -> bool {
        let Some(reflected) = seq
            .iter()
            .map(|&i| self.apply(i))
            .collect::<Option<Vec<NodeIndex>>>()
        else {
            return false;
        };
        reflected.as_slice() == seq || reflected.iter().rev().eq(seq.iter())
    }
}
