use uuid::Uuid;

use super::response::{ITEM_COUNT, LikertOption, ResponseSet};
use crate::error::CoreError;

/// State of one respondent working through the questionnaire.
///
/// A session is owned by whoever presents the questions; it is created at
/// the start of a run and cleared with [`SurveySession::reset`].
#[derive(Debug, Clone)]
pub struct SurveySession {
    id: Uuid,
    started_at: jiff::Timestamp,
    responses: Vec<LikertOption>,
    display_name: Option<String>,
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveySession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: jiff::Timestamp::now(),
            responses: Vec::with_capacity(ITEM_COUNT),
            display_name: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> jiff::Timestamp {
        self.started_at
    }

    /// Index of the next unanswered item, or `None` once all are answered.
    pub fn current_item(&self) -> Option<usize> {
        (!self.is_complete()).then_some(self.responses.len())
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    pub fn remaining(&self) -> usize {
        ITEM_COUNT - self.responses.len()
    }

    pub fn is_complete(&self) -> bool {
        self.responses.len() == ITEM_COUNT
    }

    pub fn responses(&self) -> &[LikertOption] {
        &self.responses
    }

    /// Record the answer to the current item and advance to the next one.
    pub fn record(&mut self, option: LikertOption) -> Result<(), CoreError> {
        if self.is_complete() {
            return Err(CoreError::SessionComplete(ITEM_COUNT));
        }
        self.responses.push(option);
        Ok(())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Set the optional respondent name. Blank input clears it.
    pub fn set_display_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.display_name = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    /// Discard all answers and the name, starting over with a fresh id.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Hand the collected answers over for scoring.
    pub fn finish(&self) -> Result<ResponseSet, CoreError> {
        ResponseSet::new(self.responses.clone())
    }
}
