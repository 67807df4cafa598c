use super::partition::Thresholds;
use tracing::debug;

/// Index of the item in focus: the first threshold not below `progress`.
///
/// Progress that overshoots every threshold selects the last item. Returns
/// `None` only when there are no items.
pub fn active_index(progress: f32, thresholds: &Thresholds) -> Option<usize> {
    if thresholds.is_empty() {
        return None;
    }
    let found = thresholds
        .as_slice()
        .iter()
        .position(|threshold| progress <= *threshold);
    Some(found.unwrap_or(thresholds.len() - 1))
}

/// Remembers the active item so discrete swaps happen only on threshold
/// crossings.
#[derive(Debug, Clone, Default)]
pub struct ActiveIndex {
    thresholds: Thresholds,
    current: usize,
}

impl ActiveIndex {
    pub fn new(item_count: usize) -> Self {
        ActiveIndex {
            thresholds: Thresholds::for_items(item_count),
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Feed a new progress value; returns the new index if it changed.
    pub fn update(&mut self, progress: f32) -> Option<usize> {
        let next = active_index(progress, &self.thresholds)?;
        if next == self.current {
            return None;
        }
        debug!(from = self.current, to = next, progress, "Active item changed");
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_monotonic_and_ends_on_last_item() {
        for n in 1..=12 {
            let thresholds = Thresholds::for_items(n);
            let mut previous = 0usize;
            for step in 0..=1000 {
                let idx = active_index(step as f32 / 1000.0, &thresholds).expect("index");
                assert!(idx >= previous, "n = {n}, step = {step}");
                assert!(idx < n);
                previous = idx;
            }
            assert_eq!(active_index(1.0, &thresholds), Some(n - 1));
        }
    }

    #[test]
    fn boundary_belongs_to_the_earlier_item() {
        let thresholds = Thresholds::for_items(2);
        assert_eq!(active_index(0.0, &thresholds), Some(0));
        assert_eq!(active_index(0.5, &thresholds), Some(0));
        assert_eq!(active_index(0.5001, &thresholds), Some(1));
    }

    #[test]
    fn overshoot_falls_back_to_last_item() {
        let thresholds = Thresholds::for_items(3);
        assert_eq!(active_index(1.000_001, &thresholds), Some(2));
        assert_eq!(active_index(f32::NAN, &thresholds), Some(2));
        assert_eq!(active_index(0.5, &Thresholds::for_items(0)), None);
    }

    #[test]
    fn tracker_reports_only_crossings() {
        let mut active = ActiveIndex::new(3);
        assert_eq!(active.update(0.1), None);
        assert_eq!(active.update(0.3), None);
        assert_eq!(active.update(0.4), Some(1));
        assert_eq!(active.update(0.5), None);
        assert_eq!(active.update(1.0), Some(2));
        assert_eq!(active.update(0.0), Some(0));
        assert_eq!(active.current(), 0);
    }
}
