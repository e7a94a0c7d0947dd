//! dass-instruments
//!
//! Questionnaire definitions. Pure data plus the scoring and severity
//! classification rules that turn a response set into subscale results.

pub mod error;
pub mod instruments;
pub mod scoring;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use dass_core::models::assessment::{AssessmentResult, SubscaleResult};
use dass_core::models::response::{LikertOption, ResponseSet};

use error::InstrumentError;
use scoring::{SCORE_MULTIPLIER, Subscale, classify, compute_subscale_score, validate_ranges};

pub use instruments::dass21::Dass21;

/// A single question as presented to the respondent.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// One-based position in the questionnaire.
    pub number: usize,
    pub text: String,
    pub subscale_id: String,
}

/// Trait implemented by each self-report instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "dass21").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "DASS-21").
    fn name(&self) -> &str;

    /// Items in presentation order.
    fn items(&self) -> &[Item];

    /// Subscales in reporting order.
    fn subscales(&self) -> &[Subscale];

    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Highest score a subscale can reach.
    fn max_subscale_score(&self, subscale: &Subscale) -> u32 {
        let top = LikertOption::ALL
            .iter()
            .map(|o| u32::from(o.value()))
            .max()
            .unwrap_or_default();
        subscale.items.len() as u32 * top * SCORE_MULTIPLIER
    }

    /// Verify every subscale table covers its full score range exactly once.
    fn validate_tables(&self) -> Result<(), InstrumentError> {
        for subscale in self.subscales() {
            validate_ranges(
                &subscale.id,
                &subscale.ranges,
                self.max_subscale_score(subscale),
            )?;
        }
        Ok(())
    }

    /// Score and classify every subscale.
    fn score(&self, responses: &ResponseSet) -> Vec<SubscaleResult> {
        self.subscales()
            .iter()
            .map(|subscale| {
                let score = compute_subscale_score(responses, &subscale.items);
                let classification = classify(score, &subscale.ranges);
                tracing::debug!(
                    subscale = %subscale.id,
                    score,
                    severity = %classification.severity,
                    "scored subscale"
                );
                SubscaleResult {
                    subscale_id: subscale.id.clone(),
                    subscale_name: subscale.name.clone(),
                    score,
                    severity: classification.severity,
                    message: classification.message,
                }
            })
            .collect()
    }

    /// Score a completed response set into a full assessment record.
    fn assess(&self, responses: &ResponseSet, display_name: Option<&str>) -> AssessmentResult {
        AssessmentResult {
            id: Uuid::new_v4(),
            instrument_id: self.id().to_string(),
            instrument_name: self.name().to_string(),
            display_name: display_name.map(str::to_string),
            administered_at: jiff::Timestamp::now(),
            results: self.score(responses),
        }
    }

    /// Format results as a short plain-text summary.
    fn to_structured_input(&self, results: &[SubscaleResult]) -> String {
        let mut output = format!("## {}\n\n", self.name());
        for subscale in self.subscales() {
            if let Some(result) = results.iter().find(|r| r.subscale_id == subscale.id) {
                output.push_str(&format!(
                    "- {}: {} ({})\n",
                    subscale.name, result.score, result.severity
                ));
            }
        }
        output
    }
}
