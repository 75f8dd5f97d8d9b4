use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dosha::Dosha;

/// Percentage gap below which the runner-up dosha is reported as a
/// secondary influence.
pub const SECONDARY_GAP: u8 = 20;

/// Raw point accumulators, one per dosha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct ScoreBreakdown {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl ScoreBreakdown {
    /// Every accumulator starts at `base`.
    pub fn with_base(base: u32) -> Self {
        Self {
            vata: base,
            pitta: base,
            kapha: base,
        }
    }

    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn add(&mut self, dosha: Dosha, points: u32) {
        match dosha {
            Dosha::Vata => self.vata += points,
            Dosha::Pitta => self.pitta += points,
            Dosha::Kapha => self.kapha += points,
        }
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }
}

/// Integer share of each dosha. Always sums to exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct DoshaPercentages {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
}

impl DoshaPercentages {
    pub fn get(&self, dosha: Dosha) -> u8 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn set(&mut self, dosha: Dosha, value: u8) {
        match dosha {
            Dosha::Vata => self.vata = value,
            Dosha::Pitta => self.pitta = value,
            Dosha::Kapha => self.kapha = value,
        }
    }

    pub fn total(&self) -> u32 {
        u32::from(self.vata) + u32::from(self.pitta) + u32::from(self.kapha)
    }

    /// Doshas ordered by share, highest first. Equal shares keep priority
    /// order.
    pub fn ranked(&self) -> [Dosha; 3] {
        let mut ranked = Dosha::ALL;
        ranked.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        ranked
    }
}

/// Outcome of classifying one AnswerSet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    pub scores: ScoreBreakdown,
    pub percentages: DoshaPercentages,
    pub dominant: Dosha,
    /// The dominant dosha's percentage.
    pub confidence: u8,
}

impl ClassificationResult {
    /// The runner-up dosha when it trails the dominant one by less than
    /// [`SECONDARY_GAP`] points.
    pub fn secondary(&self) -> Option<Dosha> {
        let runner_up = self
            .percentages
            .ranked()
            .into_iter()
            .find(|d| *d != self.dominant)?;
        let gap = self.confidence.saturating_sub(self.percentages.get(runner_up));
        (gap < SECONDARY_GAP).then_some(runner_up)
    }

    /// "Vata" for a clear result, "Vata-Pitta" for a dual constitution.
    pub fn constitution(&self) -> String {
        match self.secondary() {
            Some(secondary) => format!("{}-{}", self.dominant, secondary),
            None => self.dominant.to_string(),
        }
    }
}
