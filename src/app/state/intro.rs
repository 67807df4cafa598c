use std::time::{Duration, Instant};
use tracing::info;

pub(crate) const GREETINGS: [&str; 7] = [
    "Hello", "Bonjour", "Hola", "Ciao", "Namaste", "Salaam", "Welcome",
];

/// Greeting sequence shown before the site.
pub struct IntroState {
    pub(in crate::app) running: bool,
    pub(in crate::app) started_at: Option<Instant>,
    pub(in crate::app) step: Duration,
    pub(in crate::app) index: usize,
}

impl IntroState {
    pub(in crate::app) fn new(enabled: bool, step: Duration) -> Self {
        IntroState {
            running: enabled,
            started_at: None,
            step: step.max(Duration::from_millis(1)),
            index: 0,
        }
    }

    pub(in crate::app) fn is_running(&self) -> bool {
        self.running
    }

    pub(in crate::app) fn greeting(&self) -> &'static str {
        GREETINGS[self.index.min(GREETINGS.len() - 1)]
    }

    /// Advance to the greeting due at `now`; finishes after the last one.
    /// Returns true when this call ended the intro.
    pub(in crate::app) fn advance(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let started = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        let index = (elapsed.as_millis() / self.step.as_millis()) as usize;
        if index >= GREETINGS.len() {
            return self.finish();
        }
        self.index = index;
        false
    }

    pub(in crate::app) fn finish(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        info!("Intro finished; showing site");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_greetings_then_finishes() {
        let start = Instant::now();
        let step = Duration::from_millis(100);
        let mut intro = IntroState::new(true, step);
        intro.advance(start);
        assert_eq!(intro.greeting(), "Hello");
        intro.advance(start + step * 2);
        assert_eq!(intro.greeting(), GREETINGS[2]);
        assert!(intro.is_running());
        intro.advance(start + step * GREETINGS.len() as u32);
        assert!(!intro.is_running());
    }

    #[test]
    fn disabled_intro_never_runs() {
        let mut intro = IntroState::new(false, Duration::from_millis(100));
        intro.advance(Instant::now());
        assert!(!intro.is_running());
    }

    #[test]
    fn zero_step_does_not_divide_by_zero() {
        let mut intro = IntroState::new(true, Duration::ZERO);
        let now = Instant::now();
        intro.advance(now);
        intro.advance(now + Duration::from_millis(50));
        assert!(!intro.is_running());
    }
}
