//! One-shot "has this region ever been on screen" latch.
//!
//! A [`RevealOnView`] is created when a section mounts, bound to an observation
//! source once the section's element exists, and fed visible fractions as the
//! source reports them. The first observation that meets the threshold latches
//! it; from then on observations are ignored and the source is stopped.

/// Threshold used when the caller does not pick one.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Fraction of a region that must be on screen before it counts as visible.
///
/// Always within `[0, 1]`: out-of-range values are clamped and NaN falls back
/// to [`DEFAULT_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            Self(DEFAULT_THRESHOLD)
        } else {
            Self(fraction.clamp(0.0, 1.0))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// A region with nothing on screen never counts, even for a zero threshold.
    pub fn is_met_by(self, visible_fraction: f64) -> bool {
        visible_fraction > 0.0 && visible_fraction >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Handle on whatever reports visibility for a bound region.
pub trait VisibilitySource {
    /// Release the subscription. Called at most once per source.
    fn stop(&mut self);
}

/// Folds one batch of `(is_intersecting, intersection_ratio)` observations
/// into the single fraction fed to [`RevealOnView::record`].
///
/// Zero-area targets report a ratio of 0 while intersecting, so an
/// intersecting entry always counts as something on screen.
pub fn visible_fraction(entries: impl IntoIterator<Item = (bool, f64)>) -> f64 {
    entries
        .into_iter()
        .map(|(intersecting, ratio)| {
            if intersecting {
                ratio.max(f64::MIN_POSITIVE)
            } else {
                0.0
            }
        })
        .fold(0.0, f64::max)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct VisibilityLatch {
    currently_visible: bool,
    ever_visible: bool,
}

pub struct RevealOnView<S: VisibilitySource> {
    threshold: Threshold,
    latch: VisibilityLatch,
    source: Option<S>,
}

impl<S: VisibilitySource> RevealOnView<S> {
    /// Creates an unbound latch. Until [`bind`](Self::bind) is called nothing
    /// is observed and the latch stays down.
    pub fn attach(threshold: impl Into<Threshold>) -> Self {
        Self {
            threshold: threshold.into(),
            latch: VisibilityLatch::default(),
            source: None,
        }
    }

    /// Starts observing through `source`. A latch that already fired has no
    /// use for a source, so it is released straight away.
    pub fn bind(&mut self, source: S) {
        self.detach();
        self.source = Some(source);
        if self.latch.ever_visible {
            self.detach();
        }
    }

    /// Feeds one observation and returns whether the region has ever been
    /// visible.
    pub fn record(&mut self, visible_fraction: f64) -> bool {
        if self.latch.ever_visible || self.source.is_none() {
            return self.latch.ever_visible;
        }
        self.latch.currently_visible = self.threshold.is_met_by(visible_fraction);
        if self.latch.currently_visible {
            self.latch.ever_visible = true;
            log::debug!("region revealed at {visible_fraction:.2} visible");
            self.detach();
        }
        self.latch.ever_visible
    }

    /// Releases the source if one is still held.
    pub fn detach(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.stop();
        }
    }

    pub fn has_ever_been_visible(&self) -> bool {
        self.latch.ever_visible
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}

impl<S: VisibilitySource> Drop for RevealOnView<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Clone, Default)]
    struct CountingSource(Rc<Cell<usize>>);

    impl VisibilitySource for CountingSource {
        fn stop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn bound(threshold: f64) -> (RevealOnView<CountingSource>, Rc<Cell<usize>>) {
        let source = CountingSource::default();
        let stops = source.0.clone();
        let mut reveal = RevealOnView::attach(threshold);
        reveal.bind(source);
        (reveal, stops)
    }

    #[test]
    fn test_threshold_clamps() {
        assert_eq!(Threshold::new(-0.5).get(), 0.0);
        assert_eq!(Threshold::new(1.7).get(), 1.0);
        assert_eq!(Threshold::new(0.3).get(), 0.3);
        assert_eq!(Threshold::new(f64::NAN).get(), DEFAULT_THRESHOLD);
        assert_eq!(Threshold::default().get(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_zero_threshold_needs_something_on_screen() {
        let t = Threshold::new(0.0);
        assert!(!t.is_met_by(0.0));
        assert!(t.is_met_by(0.01));
    }

    #[test]
    fn test_never_reaching_threshold_stays_down() {
        for threshold in [0.0, 0.1, 0.5, 1.0] {
            let (mut reveal, stops) = bound(threshold);
            for fraction in [0.0, threshold * 0.5, threshold * 0.99] {
                assert!(!reveal.record(fraction));
            }
            assert!(!reveal.has_ever_been_visible());
            assert!(reveal.source.is_some());
            assert_eq!(stops.get(), 0);
        }
    }

    #[test]
    fn test_latch_is_monotonic() {
        let (mut reveal, _) = bound(0.2);
        assert!(!reveal.record(0.1));
        assert!(reveal.record(0.25));
        assert!(reveal.latch.currently_visible);

        // further observations are not consulted
        assert!(reveal.record(0.0));
        assert!(reveal.record(0.0));
        assert!(reveal.has_ever_been_visible());
        assert!(reveal.latch.currently_visible);
    }

    #[test]
    fn test_latching_stops_source_once() {
        let (mut reveal, stops) = bound(0.1);
        reveal.record(0.5);
        assert_eq!(stops.get(), 1);
        assert!(reveal.source.is_none());
        reveal.detach();
        drop(reveal);
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn test_drop_releases_unfired_source() {
        let (reveal, stops) = bound(0.1);
        assert!(!reveal.has_ever_been_visible());
        drop(reveal);
        assert_eq!(stops.get(), 1);
    }

    #[test]
    fn test_unbound_region_never_latches() {
        let mut reveal = RevealOnView::<CountingSource>::attach(0.1);
        assert!(!reveal.record(1.0));
        assert!(!reveal.has_ever_been_visible());
    }

    #[test]
    fn test_visible_fraction_takes_largest_entry() {
        assert_eq!(visible_fraction(Vec::new()), 0.0);
        assert_eq!(visible_fraction([(false, 0.7)]), 0.0);
        assert_eq!(visible_fraction([(true, 0.2), (false, 0.9), (true, 0.4)]), 0.4);
    }

    #[test]
    fn test_zero_area_region_latches_at_zero_threshold() {
        let (mut reveal, stops) = bound(0.0);
        assert!(!reveal.record(visible_fraction([(false, 0.0)])));
        assert!(reveal.record(visible_fraction([(true, 0.0)])));
        assert_eq!(stops.get(), 1);

        // but a positive threshold still wants real area on screen
        let (mut reveal, _) = bound(0.1);
        assert!(!reveal.record(visible_fraction([(true, 0.0)])));
        assert!(reveal.record(visible_fraction([(true, 0.05), (true, 0.1)])));
    }

    #[test]
    fn test_rebinding_releases_previous_source() {
        let (mut reveal, first) = bound(0.1);
        let second = CountingSource::default();
        let second_stops = second.0.clone();
        reveal.bind(second);
        assert_eq!(first.get(), 1);
        assert_eq!(second_stops.get(), 0);
        drop(reveal);
        assert_eq!(second_stops.get(), 1);
    }
}
