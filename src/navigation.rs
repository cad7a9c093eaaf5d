//! Navigation Dispatcher
//!
//! Moves the viewport to a requested section and closes the mobile menu.

use crate::host::ViewportHost;
use crate::section::Section;
use serde::Serialize;

/// Open/closed state of the collapsible mobile nav.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationOutcome {
    /// Parsed target; `None` for unknown ids.
    pub target: Option<Section>,
    /// Whether the host scrolled an element into view.
    pub scrolled: bool,
}

/// Scrolls to `target` when it names a section present on the page, then
/// closes the menu regardless. Unknown ids and missing elements are no-ops.
pub fn navigate_to<H: ViewportHost + ?Sized>(
    host: &mut H,
    menu: &mut MobileMenu,
    target: &str,
) -> NavigationOutcome {
    let section = target.parse::<Section>().ok();
    let scrolled = match section {
        Some(section) => host.scroll_into_view(section),
        None => {
            tracing::debug!("Ignoring navigation to unknown section '{}'", target);
            false
        }
    };
    menu.close();

    NavigationOutcome { target: section, scrolled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Threshold;

    /// Page with a configurable set of rendered sections.
    struct PageHost {
        present: Vec<Section>,
        scrolled_to: Vec<Section>,
    }

    impl PageHost {
        fn full() -> Self {
            Self { present: Section::ALL.to_vec(), scrolled_to: Vec::new() }
        }
    }

    impl ViewportHost for PageHost {
        fn observe(&mut self, _sections: &[Section], _threshold: Threshold) -> bool {
            true
        }

        fn disconnect(&mut self) {}

        fn scroll_into_view(&mut self, section: Section) -> bool {
            if !self.present.contains(&section) {
                return false;
            }
            self.scrolled_to.push(section);
            true
        }
    }

    #[test]
    fn test_toggle_alternates() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert!(menu.toggle());
        assert!(menu.is_open());
    }

    #[test]
    fn test_every_section_scrolls_and_closes_menu() {
        for section in Section::ALL {
            let mut host = PageHost::full();
            let mut menu = MobileMenu::default();
            menu.toggle();

            let outcome = navigate_to(&mut host, &mut menu, section.id());

            assert_eq!(outcome, NavigationOutcome { target: Some(section), scrolled: true });
            assert_eq!(host.scrolled_to, vec![section]);
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn test_closed_menu_stays_closed() {
        let mut host = PageHost::full();
        let mut menu = MobileMenu::default();
        navigate_to(&mut host, &mut menu, "about");
        assert!(!menu.is_open());
    }

    #[test]
    fn test_unknown_id_is_a_noop_but_closes_menu() {
        let mut host = PageHost::full();
        let mut menu = MobileMenu::default();
        menu.toggle();

        let outcome = navigate_to(&mut host, &mut menu, "blog");

        assert_eq!(outcome, NavigationOutcome::default());
        assert!(host.scrolled_to.is_empty());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_missing_element_is_a_noop() {
        let mut host = PageHost { present: vec![Section::Home], scrolled_to: Vec::new() };
        let mut menu = MobileMenu::default();
        menu.toggle();

        let outcome = navigate_to(&mut host, &mut menu, "contact");

        assert_eq!(outcome.target, Some(Section::Contact));
        assert!(!outcome.scrolled);
        assert!(!menu.is_open());
    }
}
