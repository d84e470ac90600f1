//! Grade derivation from numeric ratings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal performance bucket derived from `metrics.rating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::A, Grade::B, Grade::C, Grade::D];

    /// Bands are half-open and inclusive at the lower bound:
    /// `[4.0, inf) -> A`, `[3.0, 4.0) -> B`, `[2.0, 3.0) -> C`, everything else `D`.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            Grade::A
        } else if rating >= 3.0 {
            Grade::B
        } else if rating >= 2.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    /// Human-readable rating band, e.g. `[3.0, 4.0)`.
    pub fn band(&self) -> &'static str {
        match self {
            Grade::A => "[4.0, +inf)",
            Grade::B => "[3.0, 4.0)",
            Grade::C => "[2.0, 3.0)",
            Grade::D => "(-inf, 2.0)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// Grade for a rating (see [`Grade::from_rating`]).
pub fn grade(rating: f64) -> Grade {
    Grade::from_rating(rating)
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            other => Err(format!("unknown grade '{}' (expected A, B, C or D)", other)),
        }
    }
}
