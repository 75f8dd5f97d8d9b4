use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the three constitutional categories.
///
/// Declaration order is the fixed priority order used for rounding
/// correction and for breaking ties between equal percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Dosha {
    /// Air and space.
    Vata,
    /// Fire and water.
    Pitta,
    /// Earth and water.
    Kapha,
}

impl Dosha {
    /// All doshas in priority order.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    pub fn elements(&self) -> &'static str {
        match self {
            Dosha::Vata => "Air and Space",
            Dosha::Pitta => "Fire and Water",
            Dosha::Kapha => "Earth and Water",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dosha {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dosha::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownDosha(s.to_string()))
    }
}
