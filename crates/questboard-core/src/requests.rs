//! Request tokens for stale-load detection
//!
//! Each category load carries a token; only the result whose token is still
//! current is applied. A superseded load is ignored, never cancelled. The
//! tracker is single-writer: all mutation happens on the UI thread.

/// Identifies one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Hands out tokens; the most recently issued token wins
#[derive(Debug, Default)]
pub struct RequestTracker {
    current: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier one
    pub fn begin(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    /// Whether `token` belongs to the most recent request
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin();
        assert!(tracker.is_current(token));
    }

    #[test]
    fn test_superseded_token_is_stale() {
        // Switch to A, then immediately to B: A's token must lose even if
        // A's load settles last
        let mut tracker = RequestTracker::new();
        let token_a = tracker.begin();
        let token_b = tracker.begin();
        assert!(!tracker.is_current(token_a));
        assert!(tracker.is_current(token_b));
    }

    #[test]
    fn test_no_request_yet() {
        let mut tracker = RequestTracker::new();
        let token = tracker.begin();
        let fresh = RequestTracker::new();
        assert!(!fresh.is_current(token));
    }
}
