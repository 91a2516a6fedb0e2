pub mod client;

use crate::platform::Platform;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use client::ReviewClient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRequest {
    pub text: String,
    pub platform: Platform,
}

/// Platform constraints as reported by the service. `None` means the
/// service did not report the value, not that it is unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limitations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag_limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub tone: String,
    #[serde(default)]
    pub limitations: Limitations,
    pub suggestions: String,
    pub revised_post: String,
}

fn limit_display(limit: Option<u64>) -> String {
    match limit {
        Some(n) => n.to_string(),
        None => "not reported".to_string(),
    }
}

impl fmt::Display for Limitations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Char Limit: {}, Hashtags: {}",
            limit_display(self.char_limit),
            limit_display(self.hashtag_limit)
        )
    }
}

/// Failure of a single review request. The UI treats every variant as
/// "request failed"; the variants only sharpen the message and the logs.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("review request failed: service returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("review request failed: malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait Reviewer: Send + Sync {
    async fn review(&self, request: &ReviewRequest) -> Result<ReviewResult, ReviewError>;
}
