use thiserror::Error;

/// Authoring errors in an instrument's severity tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstrumentError {
    #[error("subscale '{subscale_id}': score {score} is not covered by any severity range")]
    UncoveredScore { subscale_id: String, score: u32 },

    #[error("subscale '{subscale_id}': score {score} falls into more than one severity range")]
    OverlappingRanges { subscale_id: String, score: u32 },

    #[error("subscale '{subscale_id}': range [{min}, {max}] has min above max")]
    InvertedRange {
        subscale_id: String,
        min: u32,
        max: u32,
    },
}
