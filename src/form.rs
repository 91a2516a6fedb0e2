use crate::platform::Platform;
use crate::review::{ReviewError, ReviewRequest, ReviewResult, Reviewer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Loading { seq: u64 },
}

/// A submission that has been started but not completed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReview {
    pub seq: u64,
    pub request: ReviewRequest,
}

/// Editable post, platform selection and the outcome of the last review.
#[derive(Debug, Clone)]
pub struct FormController {
    text: String,
    platform: Platform,
    result: Option<ReviewResult>,
    last_error: Option<String>,
    state: RequestState,
    next_seq: u64,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Platform::default())
    }
}

impl FormController {
    pub fn new(platform: Platform) -> Self {
        Self {
            text: String::new(),
            platform,
            result: None,
            last_error: None,
            state: RequestState::Idle,
            next_seq: 1,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn result(&self) -> Option<&ReviewResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading { .. })
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn next_platform(&mut self) {
        self.platform = self.platform.next();
    }

    pub fn prev_platform(&mut self) {
        self.platform = self.platform.prev();
    }

    /// Start a submission. Returns `None` while another one is in flight.
    /// The previous result stays visible until the new outcome arrives.
    pub fn begin_submit(&mut self) -> Option<PendingReview> {
        if self.is_loading() {
            tracing::debug!("submit ignored, review already in flight");
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.state = RequestState::Loading { seq };
        self.last_error = None;

        Some(PendingReview {
            seq,
            request: ReviewRequest {
                text: self.text.clone(),
                platform: self.platform,
            },
        })
    }

    /// Apply the outcome of submission `seq`. Outcomes for anything other
    /// than the in-flight submission are dropped and `false` is returned.
    pub fn complete(&mut self, seq: u64, outcome: Result<ReviewResult, ReviewError>) -> bool {
        if self.state != (RequestState::Loading { seq }) {
            tracing::debug!(seq, "dropping stale review outcome");
            return false;
        }

        self.state = RequestState::Idle;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "review failed");
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    /// Abandon the in-flight submission, if any.
    pub fn cancel(&mut self) {
        if let RequestState::Loading { seq } = self.state {
            tracing::info!(seq, "review cancelled");
            self.state = RequestState::Idle;
        }
    }

    /// Run one full submission against `reviewer`. Returns whether a
    /// request was issued.
    pub async fn submit(&mut self, reviewer: &dyn Reviewer) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let outcome = reviewer.review(&pending.request).await;
        self.complete(pending.seq, outcome);
        true
    }
}
