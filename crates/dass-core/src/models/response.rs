use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of items in the DASS-21 questionnaire.
pub const ITEM_COUNT: usize = 21;

/// One of the four answer options offered for every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LikertOption {
    NotAtAll,
    SomeDegree,
    ConsiderableDegree,
    VeryMuch,
}

impl LikertOption {
    /// All options in presentation order.
    pub const ALL: [LikertOption; 4] = [
        LikertOption::NotAtAll,
        LikertOption::SomeDegree,
        LikertOption::ConsiderableDegree,
        LikertOption::VeryMuch,
    ];

    pub fn value(self) -> u8 {
        match self {
            LikertOption::NotAtAll => 0,
            LikertOption::SomeDegree => 1,
            LikertOption::ConsiderableDegree => 2,
            LikertOption::VeryMuch => 3,
        }
    }

    /// The option text shown to the respondent.
    pub fn label(self) -> &'static str {
        match self {
            LikertOption::NotAtAll => "Did not apply to me at all",
            LikertOption::SomeDegree => "Applied to me to some degree, or some of the time",
            LikertOption::ConsiderableDegree => {
                "Applied to me to a considerable degree, or a good part of the time"
            }
            LikertOption::VeryMuch => "Applied to me very much, or most of the time",
        }
    }
}

impl TryFrom<u8> for LikertOption {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        LikertOption::ALL
            .into_iter()
            .find(|o| o.value() == value)
            .ok_or(CoreError::InvalidResponse { item: 0, value })
    }
}

impl From<LikertOption> for u8 {
    fn from(option: LikertOption) -> Self {
        option.value()
    }
}

impl fmt::Display for LikertOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A completed set of answers, index-aligned to the questionnaire items.
///
/// Construction is the only validation point: a `ResponseSet` always holds
/// exactly [`ITEM_COUNT`] answers, each one of the four Likert options.
/// Serialized as a plain integer array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ResponseSet {
    values: Vec<LikertOption>,
}

impl ResponseSet {
    pub fn new(values: Vec<LikertOption>) -> Result<Self, CoreError> {
        if values.len() != ITEM_COUNT {
            return Err(CoreError::IncompleteResponses {
                expected: ITEM_COUNT,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Build from raw integers, rejecting anything outside 0–3.
    pub fn from_values(raw: &[u8]) -> Result<Self, CoreError> {
        let values = raw
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                LikertOption::try_from(value).map_err(|_| CoreError::InvalidResponse {
                    item: index + 1,
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }

    pub fn get(&self, index: usize) -> Option<LikertOption> {
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[LikertOption] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all raw answers, before any subscale transform.
    pub fn raw_total(&self) -> u32 {
        self.values.iter().map(|v| u32::from(v.value())).sum()
    }
}

impl TryFrom<Vec<u8>> for ResponseSet {
    type Error = CoreError;

    fn try_from(raw: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_values(&raw)
    }
}

impl From<ResponseSet> for Vec<u8> {
    fn from(set: ResponseSet) -> Self {
        set.values.into_iter().map(u8::from).collect()
    }
}

/// Parses answers separated by commas and/or whitespace, e.g. `"0,1, 2 3"`.
impl FromStr for ResponseSet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| CoreError::Parse(token.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(&raw)
    }
}
