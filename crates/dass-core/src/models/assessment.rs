use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Qualitative severity band a subscale score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Normal,
    Mild,
    Moderate,
    Severe,
    ExtremelySevere,
    /// Returned when a score matches no band in its table.
    Unknown,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Normal => "Normal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::ExtremelySevere => "Extremely Severe",
            Severity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score and interpretation for a single subscale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleResult {
    pub subscale_id: String,
    pub subscale_name: String,
    pub score: u32,
    pub severity: Severity,
    pub message: String,
}

/// The scored outcome of one completed questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub instrument_id: String,
    pub instrument_name: String,
    pub display_name: Option<String>,
    pub administered_at: jiff::Timestamp,
    pub results: Vec<SubscaleResult>,
}

impl AssessmentResult {
    pub fn subscale(&self, subscale_id: &str) -> Option<&SubscaleResult> {
        self.results.iter().find(|r| r.subscale_id == subscale_id)
    }
}
