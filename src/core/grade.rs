use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete letter grade derived from a numeric score, display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Step function of the score; each threshold is inclusive on the
    /// upper band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Grade::A
        } else if score >= 70.0 {
            Grade::B
        } else if score >= 55.0 {
            Grade::C
        } else if score >= 40.0 {
            Grade::D
        } else {
            Grade::E
        }
    }

    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}
