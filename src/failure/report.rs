//! Serializable snapshot of a failure and its cause chain

use super::chain;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// A failure rendered for display: its message and the messages of its
/// causes, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl Report {
    pub fn new(err: &(dyn Error + 'static)) -> Self {
        let mut messages = chain(err).map(|e| e.to_string());
        let message = messages.next().unwrap_or_default();
        Self {
            message,
            causes: messages.collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for cause in &self.causes {
            write!(f, "\ncaused by: {}", cause)?;
        }
        Ok(())
    }
}
