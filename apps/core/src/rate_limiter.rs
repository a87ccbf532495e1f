use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Sliding-window throttle for chat sends.
///
/// Tracks send timestamps per session and refuses a send once the window is
/// full. Keeps the widget from flooding the responder if the visitor mashes
/// the send button.
pub struct SendThrottle {
    windows: HashMap<String, VecDeque<Instant>>,
    /// Maximum sends allowed inside one window.
    limit: usize,
    /// Length of the sliding window.
    window: Duration,
}

impl SendThrottle {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            windows: HashMap::new(),
            limit,
            window,
        }
    }

    /// Records a send for `session_id` if it is within the limit.
    ///
    /// Returns `true` when the send is allowed. Expired timestamps are
    /// pruned on every call, so an idle session costs nothing after one
    /// window has passed.
    pub fn allow(&mut self, session_id: &str) -> bool {
        let now = Instant::now();
        let window_start = now - self.window;

        let sends = self.windows.entry(session_id.to_string()).or_default();
        while sends.front().is_some_and(|t| *t <= window_start) {
            sends.pop_front();
        }

        if sends.len() < self.limit {
            sends.push_back(now);
            true
        } else {
            false
        }
    }

    /// Drops all state for a session, e.g. when the widget closes.
    pub fn forget(&mut self, session_id: &str) {
        self.windows.remove(session_id);
    }
}
