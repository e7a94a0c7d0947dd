use serde::{Deserialize, Serialize};

/// Layout and fixed text for exported results documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Title printed at the top of the report and in the page header.
    pub title: String,

    /// Line printed at the bottom of the report and in the page footer.
    pub footer: String,

    /// Font for body text.
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub title_size: usize,

    /// Subscale heading font size in points.
    pub heading_size: usize,

    /// Footer font size in points.
    pub footer_size: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            title: "DASS-21 Results".to_string(),
            footer: "DASS-21 self-report screening. Not a diagnosis.".to_string(),
            body_font: "DejaVu Sans".to_string(),
            heading_font: "DejaVu Sans".to_string(),
            body_size: 12,
            title_size: 16,
            heading_size: 12,
            footer_size: 8,
            margin_inches: 1.0,
        }
    }
}
