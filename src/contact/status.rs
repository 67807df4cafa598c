use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Lifecycle of one contact submission.
///
/// `Idle -> Sending -> Succeeded | Failed -> Idle`, the last step once the
/// outcome has been on screen for the display window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded {
        at: Instant,
    },
    Failed {
        at: Instant,
    },
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    /// True while an outcome is waiting for its display window to pass.
    pub fn is_settling(&self) -> bool {
        matches!(
            self,
            SubmissionStatus::Succeeded { .. } | SubmissionStatus::Failed { .. }
        )
    }

    /// Enter `Sending`. Refused while a submission is already in flight; a
    /// displayed outcome is dismissed early.
    pub fn begin(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        *self = SubmissionStatus::Sending;
        true
    }

    /// Record the delivery outcome. Ignored unless a submission is in flight.
    pub fn resolve(&mut self, delivered: bool, now: Instant) -> bool {
        if !self.is_sending() {
            warn!(status = ?self, "Ignoring delivery outcome with no submission in flight");
            return false;
        }
        *self = if delivered {
            SubmissionStatus::Succeeded { at: now }
        } else {
            SubmissionStatus::Failed { at: now }
        };
        true
    }

    /// Return to `Idle` once an outcome has been shown for `window`.
    pub fn settle(&mut self, now: Instant, window: Duration) -> bool {
        let shown_at = match *self {
            SubmissionStatus::Succeeded { at } | SubmissionStatus::Failed { at } => at,
            SubmissionStatus::Idle | SubmissionStatus::Sending => return false,
        };
        if now.saturating_duration_since(shown_at) < window {
            return false;
        }
        debug!("Submission status returned to idle");
        *self = SubmissionStatus::Idle;
        true
    }

    /// User-facing status line, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some("Sending..."),
            SubmissionStatus::Succeeded { .. } => Some("Message sent successfully! ✅"),
            SubmissionStatus::Failed { .. } => {
                Some("Failed to send message. Please try again later. ❌")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(3);

    #[test]
    fn success_settles_after_the_window() {
        let start = Instant::now();
        let mut status = SubmissionStatus::Idle;
        assert!(status.begin());
        assert!(status.resolve(true, start));
        assert!(status.is_settling());
        assert!(!status.settle(start + Duration::from_millis(2999), WINDOW));
        assert!(status.settle(start + WINDOW, WINDOW));
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[test]
    fn failure_settles_after_the_same_window() {
        let start = Instant::now();
        let mut status = SubmissionStatus::Sending;
        status.resolve(false, start);
        assert!(matches!(status, SubmissionStatus::Failed { .. }));
        assert!(status.settle(start + WINDOW, WINDOW));
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[test]
    fn no_second_submission_while_sending() {
        let mut status = SubmissionStatus::Idle;
        assert!(status.begin());
        assert!(!status.begin());
        assert!(status.is_sending());
    }

    #[test]
    fn stray_outcome_is_ignored() {
        let mut status = SubmissionStatus::Idle;
        assert!(!status.resolve(true, Instant::now()));
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[test]
    fn idle_and_sending_never_settle() {
        let later = Instant::now() + Duration::from_secs(60);
        let mut idle = SubmissionStatus::Idle;
        let mut sending = SubmissionStatus::Sending;
        assert!(!idle.settle(later, WINDOW));
        assert!(!sending.settle(later, WINDOW));
        assert!(sending.is_sending());
    }

    #[test]
    fn messages_match_state() {
        assert_eq!(SubmissionStatus::Idle.message(), None);
        assert_eq!(SubmissionStatus::Sending.message(), Some("Sending..."));
    }
}
