//! Viewport Visibility Tracker
//!
//! Records which sections are currently in the viewport and which one is
//! active. Observation batches arrive from the host in callback order; the
//! last intersecting entry of a batch becomes the active section.

use crate::host::ViewportHost;
use crate::section::Section;
use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use smallvec::SmallVec;
use thiserror::Error;

/// Browsers report ratios a hair under the threshold that triggered them.
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("visibility threshold must be a finite ratio in [0, 1], got {0}")]
pub struct ThresholdError(pub f64);

/// Fraction of a section's area that must be visible for it to count as
/// in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.3);

    pub fn new(ratio: f64) -> Result<Self, ThresholdError> {
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(ThresholdError(ratio));
        }
        Ok(Threshold(ratio))
    }

    pub fn ratio(&self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::DEFAULT
    }
}

/// One entry of an observation batch.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Intersection {
    pub section: Section,
    pub is_intersecting: bool,
    /// Visible fraction of the section, 0.0..=1.0.
    pub ratio: f64,
    /// Fraction of the viewport the section covers. Sections taller than
    /// the viewport divided by the threshold never reach `ratio`, but fill
    /// the screen.
    #[serde(default)]
    pub viewport_ratio: f64,
}

impl Intersection {
    pub fn new(section: Section, is_intersecting: bool, ratio: f64) -> Self {
        Self { section, is_intersecting, ratio, viewport_ratio: 0.0 }
    }

    pub fn covering(mut self, viewport_ratio: f64) -> Self {
        self.viewport_ratio = viewport_ratio;
        self
    }

    /// Fully in view.
    pub fn entering(section: Section) -> Self {
        Self::new(section, true, 1.0)
    }

    /// Out of view.
    pub fn leaving(section: Section) -> Self {
        Self::new(section, false, 0.0)
    }

    pub fn meets(&self, threshold: Threshold) -> bool {
        let share = self.ratio.max(self.viewport_ratio);
        self.is_intersecting && share + RATIO_EPSILON >= threshold.ratio()
    }
}

/// Section → "currently in viewport". Sections never reported are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityMap(FxHashMap<Section, bool>);

impl VisibilityMap {
    /// Unreported sections count as not visible.
    pub fn get(&self, section: Section) -> bool {
        self.0.get(&section).copied().unwrap_or(false)
    }

    pub fn is_recorded(&self, section: Section) -> bool {
        self.0.contains_key(&section)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recorded entries in page order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, bool)> + '_ {
        Section::ALL
            .into_iter()
            .filter_map(move |section| self.0.get(&section).map(|visible| (section, *visible)))
    }

    fn set(&mut self, section: Section, visible: bool) -> Option<bool> {
        self.0.insert(section, visible)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl Serialize for VisibilityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (section, visible) in self.iter() {
            map.serialize_entry(section.id(), &visible)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrackingStatus {
    /// Not mounted yet.
    #[default]
    Idle,
    Observing,
    /// Host has no observation capability: no fade-in, no auto-highlight.
    Unsupported,
    /// Unmounted; further batches are ignored.
    Disconnected,
}

/// What one observation batch changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationOutcome {
    pub entered: SmallVec<[Section; 6]>,
    pub left: SmallVec<[Section; 6]>,
    /// New active section, if it changed.
    pub activated: Option<Section>,
    /// `false` when the batch was dropped because the tracker is not observing.
    pub applied: bool,
}

#[derive(Debug, Clone, Default)]
pub struct VisibilityTracker {
    threshold: Threshold,
    visibility: VisibilityMap,
    active: Section,
    status: TrackingStatus,
}

impl VisibilityTracker {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn status(&self) -> TrackingStatus {
        self.status
    }

    /// Registers observation of all sections with the host. A remount starts
    /// from an empty visibility map.
    pub fn mount<H: ViewportHost + ?Sized>(&mut self, host: &mut H) -> TrackingStatus {
        if self.status == TrackingStatus::Observing {
            host.disconnect();
        }
        self.visibility.clear();
        self.status = if host.observe(&Section::ALL, self.threshold) {
            TrackingStatus::Observing
        } else {
            tracing::warn!("Viewport observation unavailable, fade-in and auto-highlight disabled");
            TrackingStatus::Unsupported
        };
        self.status
    }

    pub fn unmount<H: ViewportHost + ?Sized>(&mut self, host: &mut H) {
        if self.status == TrackingStatus::Observing {
            host.disconnect();
        }
        self.status = TrackingStatus::Disconnected;
    }

    /// Applies one observation batch in order.
    pub fn record(&mut self, batch: &[Intersection]) -> ObservationOutcome {
        let mut outcome = ObservationOutcome::default();
        if self.status != TrackingStatus::Observing {
            tracing::debug!("Dropping {} observations while {:?}", batch.len(), self.status);
            return outcome;
        }
        outcome.applied = true;

        let previous_active = self.active;
        for entry in batch {
            let visible = entry.meets(self.threshold);
            let was_visible = self.visibility.set(entry.section, visible).unwrap_or(false);
            match (was_visible, visible) {
                (false, true) => outcome.entered.push(entry.section),
                (true, false) => outcome.left.push(entry.section),
                _ => {}
            }
            if visible {
                self.active = entry.section;
            }
        }

        if self.active != previous_active {
            outcome.activated = Some(self.active);
            tracing::debug!("Active section {} -> {}", previous_active, self.active);
        }
        outcome
    }

    /// Whether a section should render in its faded-in state. Without
    /// observation (before mount, or unsupported) everything is revealed.
    pub fn is_revealed(&self, section: Section) -> bool {
        match self.status {
            TrackingStatus::Observing => self.visibility.get(section),
            TrackingStatus::Idle | TrackingStatus::Unsupported => true,
            // keep whatever was shown when the page went away
            TrackingStatus::Disconnected => {
                !self.visibility.is_recorded(section) || self.visibility.get(section)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct FakeHost {
        supported: bool,
        observed: Vec<Section>,
        threshold: Option<Threshold>,
        disconnects: usize,
    }

    impl ViewportHost for FakeHost {
        fn observe(&mut self, sections: &[Section], threshold: Threshold) -> bool {
            if !self.supported {
                return false;
            }
            self.observed = sections.to_vec();
            self.threshold = Some(threshold);
            true
        }

        fn disconnect(&mut self) {
            self.disconnects += 1;
            self.observed.clear();
        }

        fn scroll_into_view(&mut self, _section: Section) -> bool {
            true
        }
    }

    fn mounted() -> (VisibilityTracker, FakeHost) {
        let mut host = FakeHost { supported: true, ..FakeHost::default() };
        let mut tracker = VisibilityTracker::new(Threshold::DEFAULT);
        assert_eq!(tracker.mount(&mut host), TrackingStatus::Observing);
        (tracker, host)
    }

    #[test]
    fn test_threshold_bounds() {
        assert_relative_eq!(Threshold::default().ratio(), 0.3);
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert_eq!(Threshold::new(1.5), Err(ThresholdError(1.5)));
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_mount_observes_every_section() {
        let (tracker, host) = mounted();
        assert_eq!(host.observed, Section::ALL.to_vec());
        assert_eq!(host.threshold, Some(Threshold::DEFAULT));
        assert!(tracker.visibility().is_empty());
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_intersecting_section_becomes_visible_and_active() {
        let (mut tracker, _host) = mounted();
        let outcome = tracker.record(&[Intersection::new(Section::Skills, true, 0.45)]);

        assert!(outcome.applied);
        assert!(tracker.visibility().get(Section::Skills));
        assert_eq!(tracker.active(), Section::Skills);
        assert_eq!(outcome.entered.as_slice(), &[Section::Skills]);
        assert_eq!(outcome.activated, Some(Section::Skills));
    }

    #[test]
    fn test_below_threshold_is_not_visible() {
        let (mut tracker, _host) = mounted();
        tracker.record(&[Intersection::new(Section::About, true, 0.1)]);

        assert!(tracker.visibility().is_recorded(Section::About));
        assert!(!tracker.visibility().get(Section::About));
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_ratio_just_under_threshold_counts() {
        let (mut tracker, _host) = mounted();
        tracker.record(&[Intersection::new(Section::About, true, 0.2995)]);
        assert!(tracker.visibility().get(Section::About));
    }

    #[test]
    fn test_tall_section_filling_the_viewport_counts() {
        let (mut tracker, _host) = mounted();
        tracker.record(&[Intersection::new(Section::Projects, true, 0.18).covering(1.0)]);
        assert!(tracker.visibility().get(Section::Projects));
        assert_eq!(tracker.active(), Section::Projects);

        tracker.record(&[Intersection::new(Section::Projects, true, 0.02).covering(0.1)]);
        assert!(!tracker.visibility().get(Section::Projects));
    }

    #[test]
    fn test_last_intersecting_entry_wins() {
        let (mut tracker, _host) = mounted();
        tracker.record(&[
            Intersection::entering(Section::Projects),
            Intersection::entering(Section::Education),
            Intersection::leaving(Section::Skills),
        ]);
        assert_eq!(tracker.active(), Section::Education);
        assert!(tracker.visibility().get(Section::Projects));
    }

    #[test]
    fn test_active_section_kept_when_nothing_intersects() {
        let (mut tracker, _host) = mounted();
        tracker.record(&[Intersection::entering(Section::Contact)]);
        let outcome = tracker.record(&[Intersection::leaving(Section::Contact)]);

        assert_eq!(tracker.active(), Section::Contact);
        assert!(!tracker.visibility().get(Section::Contact));
        assert_eq!(outcome.left.as_slice(), &[Section::Contact]);
        assert_eq!(outcome.activated, None);
    }

    #[test]
    fn test_unmount_disconnects_and_ignores_late_batches() {
        let (mut tracker, mut host) = mounted();
        tracker.unmount(&mut host);
        assert_eq!(host.disconnects, 1);
        assert_eq!(tracker.status(), TrackingStatus::Disconnected);

        let outcome = tracker.record(&[Intersection::entering(Section::About)]);
        assert!(!outcome.applied);
        assert!(!tracker.visibility().is_recorded(Section::About));
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_unsupported_host_reveals_everything() {
        let mut host = FakeHost::default();
        let mut tracker = VisibilityTracker::new(Threshold::DEFAULT);
        assert_eq!(tracker.mount(&mut host), TrackingStatus::Unsupported);

        let outcome = tracker.record(&[Intersection::entering(Section::Projects)]);
        assert!(!outcome.applied);
        assert_eq!(tracker.active(), Section::Home);
        assert!(Section::ALL.iter().all(|s| tracker.is_revealed(*s)));

        tracker.unmount(&mut host);
        assert_eq!(host.disconnects, 0);
    }

    #[test]
    fn test_reveal_follows_visibility_while_observing() {
        let tracker = VisibilityTracker::default();
        assert!(tracker.is_revealed(Section::Skills));

        let (mut tracker, _host) = mounted();
        assert!(!tracker.is_revealed(Section::Home));
        tracker.record(&[Intersection::entering(Section::Home)]);
        assert!(tracker.is_revealed(Section::Home));
        assert!(!tracker.is_revealed(Section::About));
    }

    #[test]
    fn test_remount_starts_from_empty_map() {
        let (mut tracker, mut host) = mounted();
        tracker.record(&[Intersection::entering(Section::About)]);
        tracker.mount(&mut host);

        assert_eq!(host.disconnects, 1);
        assert!(tracker.visibility().is_empty());
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_visibility_map_serializes_in_page_order() {
        let (mut tracker, _host) = mounted();
        tracker.record(&[
            Intersection::leaving(Section::Contact),
            Intersection::entering(Section::Home),
        ]);
        let json = serde_json::to_string(tracker.visibility()).unwrap();
        assert_eq!(json, r#"{"home":true,"contact":false}"#);
    }
}
