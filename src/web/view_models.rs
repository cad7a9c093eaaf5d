//! View models for page rendering and UI responses.
//!
//! The renderer only toggles classes: fade state per section, the
//! highlighted nav item, and whether the mobile panel exists. The same class
//! strings go to the browser glue in [`ViewStateResponse`], so the page and
//! the live updates cannot drift apart.

use crate::section::Section;
use crate::view::{PortfolioView, ViewState};
use serde::Serialize;
use std::collections::BTreeMap;

pub const REVEALED: &str = "translate-y-0 opacity-100";
pub const CONCEALED: &str = "translate-y-10 opacity-0";

pub const NAV_ACTIVE: &str = "text-blue-600 font-semibold bg-blue-50";
pub const NAV_IDLE: &str = "text-gray-600 hover:text-blue-600 hover:bg-gray-50";

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        REVEALED
    } else {
        CONCEALED
    }
}

pub fn nav_class(active: bool) -> &'static str {
    if active {
        NAV_ACTIVE
    } else {
        NAV_IDLE
    }
}

/// Fade classes for each section wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealClasses {
    pub home: &'static str,
    pub about: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub education: &'static str,
    pub contact: &'static str,
}

impl RevealClasses {
    pub fn from_view(view: &PortfolioView) -> Self {
        let class = |section| reveal_class(view.is_revealed(section));
        Self {
            home: class(Section::Home),
            about: class(Section::About),
            skills: class(Section::Skills),
            projects: class(Section::Projects),
            education: class(Section::Education),
            contact: class(Section::Contact),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub class: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavModel {
    pub brand: &'static str,
    pub items: Vec<NavItem>,
    pub menu_open: bool,
}

impl NavModel {
    pub fn from_view(view: &PortfolioView, brand: &'static str) -> Self {
        let active = view.active();
        let items = Section::ALL
            .iter()
            .map(|section| NavItem {
                id: section.id(),
                label: section.label(),
                class: nav_class(*section == active),
                active: *section == active,
            })
            .collect();
        Self {
            brand,
            items,
            menu_open: view.menu_open(),
        }
    }
}

/// JSON answer to mount/observe: raw state plus the classes to apply.
#[derive(Debug, Clone, Serialize)]
pub struct ViewStateResponse {
    #[serde(flatten)]
    pub state: ViewState,
    pub reveal: BTreeMap<&'static str, &'static str>,
    pub nav: BTreeMap<&'static str, &'static str>,
    /// Last observation batch applied; the glue discards older answers.
    pub seq: u64,
}

impl ViewStateResponse {
    pub fn from_view(view: &PortfolioView, seq: u64) -> Self {
        let state = view.snapshot();
        let reveal = Section::ALL
            .iter()
            .map(|s| (s.id(), reveal_class(view.is_revealed(*s))))
            .collect();
        let nav = Section::ALL
            .iter()
            .map(|s| (s.id(), nav_class(state.is_active(*s))))
            .collect();
        Self { state, reveal, nav, seq }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ViewportHost;
    use crate::tracker::{Intersection, Threshold};

    struct ObservingHost;

    impl ViewportHost for ObservingHost {
        fn observe(&mut self, _sections: &[Section], _threshold: Threshold) -> bool {
            true
        }
        fn disconnect(&mut self) {}
        fn scroll_into_view(&mut self, _section: Section) -> bool {
            true
        }
    }

    #[test]
    fn test_unmounted_view_reveals_all_and_highlights_home() {
        let view = PortfolioView::default();
        let reveal = RevealClasses::from_view(&view);
        assert_eq!(reveal.contact, REVEALED);

        let nav = NavModel::from_view(&view, "Brand");
        let active: Vec<&str> = nav.items.iter().filter(|i| i.active).map(|i| i.id).collect();
        assert_eq!(active, vec!["home"]);
        assert_eq!(nav.items[0].class, NAV_ACTIVE);
        assert_eq!(nav.items[1].class, NAV_IDLE);
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_classes_follow_observation() {
        let mut view = PortfolioView::default();
        view.mount(&mut ObservingHost);
        view.on_intersections(&[Intersection::entering(Section::Skills)]);

        let reveal = RevealClasses::from_view(&view);
        assert_eq!(reveal.skills, REVEALED);
        assert_eq!(reveal.home, CONCEALED);

        let response = ViewStateResponse::from_view(&view, 4);
        assert_eq!(response.nav["skills"], NAV_ACTIVE);
        assert_eq!(response.nav["home"], NAV_IDLE);
        assert_eq!(response.reveal["projects"], CONCEALED);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["active"], "skills");
        assert_eq!(json["menu_open"], false);
        assert_eq!(json["visible"]["skills"], true);
        assert_eq!(json["reveal"]["skills"], REVEALED);
        assert_eq!(json["seq"], 4);
    }
}
