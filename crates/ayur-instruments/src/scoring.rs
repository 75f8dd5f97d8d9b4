//! Point-scoring classification.
//!
//! Each rule maps the values of one answer field to point contributions.
//! Accumulators start at [`BASE_SCORE`], rules add to them, and the totals
//! are normalized into integer percentages that always sum to 100.

use serde::Serialize;
use tracing::debug;

use ayur_core::models::answer::AnswerSet;
use ayur_core::models::classification::{ClassificationResult, DoshaPercentages, ScoreBreakdown};
use ayur_core::models::dosha::Dosha;

/// Starting value of every accumulator. Keeps the denominator non-zero and
/// gives every dosha a non-zero share.
pub const BASE_SCORE: u32 = 2;

/// Points awarded when a field holds `value`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Outcome {
    pub value: &'static str,
    pub awards: &'static [(Dosha, u32)],
}

/// All scored values of one field. Values not listed score nothing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldRule {
    pub field: &'static str,
    pub outcomes: &'static [Outcome],
}

impl FieldRule {
    pub fn outcome(&self, value: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.value == value)
    }
}

/// Apply `rules` to `answers` on top of the base score.
pub fn score(rules: &[FieldRule], answers: &AnswerSet) -> ScoreBreakdown {
    let mut scores = ScoreBreakdown::with_base(BASE_SCORE);
    for rule in rules {
        let Some(value) = answers.single(rule.field) else {
            continue;
        };
        if let Some(outcome) = rule.outcome(value) {
            for (dosha, points) in outcome.awards {
                scores.add(*dosha, *points);
            }
        }
    }
    scores
}

/// `part / total * 100`, rounded half away from zero, in integer
/// arithmetic.
fn rounded_share(part: u32, total: u32) -> i32 {
    let part = u64::from(part);
    let total = u64::from(total);
    ((part * 200 + total) / (2 * total)) as i32
}

/// Normalize accumulators into percentages summing to exactly 100.
///
/// Independent rounding can miss 100 by one. The discrepancy goes to the
/// first dosha in priority order that stays within `0..=100` after taking
/// it, which is Vata unless that would leave the range.
pub fn normalize(scores: &ScoreBreakdown) -> DoshaPercentages {
    let total = scores.total();
    if total == 0 {
        return normalize(&ScoreBreakdown::with_base(1));
    }

    let mut shares = Dosha::ALL.map(|d| rounded_share(scores.get(d), total));
    let diff = 100 - shares.iter().sum::<i32>();
    if diff != 0
        && let Some(slot) = shares
            .iter_mut()
            .find(|s| (0..=100).contains(&(**s + diff)))
    {
        *slot += diff;
    }

    let mut percentages = DoshaPercentages::default();
    for (dosha, share) in Dosha::ALL.into_iter().zip(shares) {
        percentages.set(dosha, share.clamp(0, 100) as u8);
    }
    percentages
}

/// The dosha with the highest percentage. Ties go to the earlier dosha in
/// priority order.
pub fn dominant(percentages: &DoshaPercentages) -> Dosha {
    let mut best = Dosha::Vata;
    for dosha in Dosha::ALL {
        if percentages.get(dosha) > percentages.get(best) {
            best = dosha;
        }
    }
    best
}

/// Score, normalize, and pick the dominant dosha. Never fails; absent or
/// unrecognized answers contribute nothing.
pub fn classify(rules: &[FieldRule], answers: &AnswerSet) -> ClassificationResult {
    let scores = score(rules, answers);
    let percentages = normalize(&scores);
    let dominant = dominant(&percentages);
    let confidence = percentages.get(dominant);

    debug!(
        vata = scores.vata,
        pitta = scores.pitta,
        kapha = scores.kapha,
        %dominant,
        confidence,
        "classified answers"
    );

    ClassificationResult {
        scores,
        percentages,
        dominant,
        confidence,
    }
}
