//! Structured results: one JSON object per calculation
//!
//! ```json
//! {"id":"a","status":"ok","sum":6}
//! {"id":"b","status":"error","categories":["negative-number"],"messages":["Negative number(s) not allowed: -2"]}
//! {"id":"3","status":"invalid","messages":["missing field `input` at line 1 column 10"]}
//! ```

use serde::{Deserialize, Serialize};
use strcalc::Outcome;

/// One batch request line
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// How to identify this job in the results (line number if absent)
    #[serde(default)]
    pub id: Option<String>,
    /// Text handed to the calculator unchanged
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The input was summed
    Ok,
    /// The calculator rejected the input
    Error,
    /// The request line itself could not be read
    Invalid,
}

/// What came out of one calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sum: Option<i64>,
    /// Failure category of each message, in the same order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl Report {
    pub fn from_outcome(id: Option<String>, outcome: &Outcome) -> Self {
        match outcome {
            Ok(sum) => Self {
                id,
                status: Status::Ok,
                sum: Some(*sum),
                categories: Vec::new(),
                messages: Vec::new(),
            },
            Err(failure) => Self {
                id,
                status: Status::Error,
                sum: None,
                categories: failure.kinds().map(|kind| kind.to_string()).collect(),
                messages: failure.messages().iter().map(|m| m.text.clone()).collect(),
            },
        }
    }

    pub fn invalid(id: Option<String>, reason: impl Into<String>) -> Self {
        Self {
            id,
            status: Status::Invalid,
            sum: None,
            categories: Vec::new(),
            messages: vec![reason.into()],
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}
