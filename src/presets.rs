use crate::geometry::NodeIndex;
use crate::pattern::Pattern;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Example gestures shown next to the drawing pad.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownPattern {
    LShape,
    ZShape,
    Square,
    Bowtie,
    Diamond,
    Spiral,
    KnightHop,
    KnightWeave,
}

impl KnownPattern {
    /// Raw taps as a user would enter them; skipped middles are filled in by
    /// the pattern builder.
    pub fn taps(&self) -> &'static [NodeIndex] {
        match self {
            Self::LShape => &[0, 6, 8],
            Self::ZShape => &[0, 2, 6, 8],
            Self::Square => &[0, 2, 8, 6],
            Self::Bowtie => &[0, 8, 2, 6],
            Self::Diamond => &[1, 3, 5, 7],
            Self::Spiral => &[4, 0, 2, 8, 6],
            Self::KnightHop => &[0, 5, 6, 1, 8],
            Self::KnightWeave => &[0, 5, 6, 1, 8, 3, 2, 7],
        }
    }

    pub fn pattern(&self) -> Pattern {
        Pattern::from_taps(self.taps().iter().copied())
    }
}

pub fn get_all_presets() -> Vec<(KnownPattern, Pattern)> {
    KnownPattern::iter().map(|p| (p, p.pattern())).collect()
}
