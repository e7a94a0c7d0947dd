use serde::{Deserialize, Serialize};
use ts_rs::TS;

use dass_core::models::assessment::Severity;
use dass_core::models::response::ResponseSet;

use crate::error::InstrumentError;

/// Factor applied to raw subscale sums so DASS-21 scores line up with the
/// full 42-item DASS.
pub const SCORE_MULTIPLIER: u32 = 2;

/// An inclusive score interval mapped to a severity and its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityRange {
    pub min: u32,
    pub max: u32,
    pub severity: Severity,
    pub message: String,
}

impl SeverityRange {
    pub fn new(min: u32, max: u32, severity: Severity, message: &str) -> Self {
        Self {
            min,
            max,
            severity,
            message: message.to_string(),
        }
    }

    pub fn contains(&self, score: u32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

/// A subscale: the items that feed it and the table that interprets it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    /// Zero-based positions in the response set.
    pub items: Vec<usize>,
    /// Ordered, contiguous and non-overlapping.
    pub ranges: Vec<SeverityRange>,
    /// What the subscale measures, shown above its items in listings.
    pub description: Option<String>,
}

/// Severity plus the message shown to the respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub severity: Severity,
    pub message: String,
}

impl Classification {
    pub fn unknown() -> Self {
        Self {
            severity: Severity::Unknown,
            message: String::new(),
        }
    }
}

/// Sum the answers at `item_indices` and apply [`SCORE_MULTIPLIER`].
///
/// # Panics
///
/// If an index is outside the response set. Indices come from static
/// subscale definitions, so this is a programming error.
pub fn compute_subscale_score(responses: &ResponseSet, item_indices: &[usize]) -> u32 {
    let raw: u32 = item_indices
        .iter()
        .map(|&i| u32::from(responses.values()[i].value()))
        .sum();
    raw * SCORE_MULTIPLIER
}

/// Return the first range containing `score`.
///
/// A score no range covers yields [`Classification::unknown`]; tables are
/// checked up front with [`validate_ranges`].
pub fn classify(score: u32, ranges: &[SeverityRange]) -> Classification {
    match ranges.iter().find(|r| r.contains(score)) {
        Some(range) => Classification {
            severity: range.severity,
            message: range.message.clone(),
        },
        None => {
            tracing::warn!(score, "score matched no severity range");
            Classification::unknown()
        }
    }
}

/// Check that every score in `0..=max_score` falls into exactly one range.
pub fn validate_ranges(
    subscale_id: &str,
    ranges: &[SeverityRange],
    max_score: u32,
) -> Result<(), InstrumentError> {
    if let Some(r) = ranges.iter().find(|r| r.min > r.max) {
        return Err(InstrumentError::InvertedRange {
            subscale_id: subscale_id.to_string(),
            min: r.min,
            max: r.max,
        });
    }

    for score in 0..=max_score {
        match ranges.iter().filter(|r| r.contains(score)).count() {
            0 => {
                return Err(InstrumentError::UncoveredScore {
                    subscale_id: subscale_id.to_string(),
                    score,
                });
            }
            1 => {}
            _ => {
                return Err(InstrumentError::OverlappingRanges {
                    subscale_id: subscale_id.to_string(),
                    score,
                });
            }
        }
    }
    Ok(())
}
