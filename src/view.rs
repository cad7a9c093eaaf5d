//! PortfolioView
//!
//! The page's whole runtime state: visibility tracker, active section and
//! mobile menu. Every user or viewport event is one method call here.

use crate::host::ViewportHost;
use crate::navigation::{self, MobileMenu, NavigationOutcome};
use crate::section::Section;
use crate::tracker::{
    Intersection, ObservationOutcome, Threshold, TrackingStatus, VisibilityMap, VisibilityTracker,
};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct PortfolioView {
    tracker: VisibilityTracker,
    menu: MobileMenu,
}

/// Read-only snapshot of [`PortfolioView`] for rendering and JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub active: Section,
    pub menu_open: bool,
    pub tracking: TrackingStatus,
    pub visible: VisibilityMap,
}

impl ViewState {
    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

impl PortfolioView {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            tracker: VisibilityTracker::new(threshold),
            menu: MobileMenu::default(),
        }
    }

    pub fn mount<H: ViewportHost + ?Sized>(&mut self, host: &mut H) -> TrackingStatus {
        self.tracker.mount(host)
    }

    pub fn unmount<H: ViewportHost + ?Sized>(&mut self, host: &mut H) {
        self.tracker.unmount(host);
    }

    pub fn on_intersections(&mut self, batch: &[Intersection]) -> ObservationOutcome {
        self.tracker.record(batch)
    }

    pub fn navigate_to<H: ViewportHost + ?Sized>(
        &mut self,
        host: &mut H,
        target: &str,
    ) -> NavigationOutcome {
        navigation::navigate_to(host, &mut self.menu, target)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn active(&self) -> Section {
        self.tracker.active()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.tracker.is_revealed(section)
    }

    pub fn tracking(&self) -> TrackingStatus {
        self.tracker.status()
    }

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            active: self.tracker.active(),
            menu_open: self.menu.is_open(),
            tracking: self.tracker.status(),
            visible: self.tracker.visibility().clone(),
        }
    }
}
