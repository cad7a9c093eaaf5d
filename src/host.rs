//! Browser boundary
//!
//! The view never touches the DOM directly. Viewport observation and
//! scrolling are capabilities of whatever hosts the page, reached through
//! [`ViewportHost`].

use crate::section::Section;
use crate::tracker::Threshold;

pub trait ViewportHost {
    /// Starts observing the given sections. Returns `false` when the host has
    /// no viewport-observation capability.
    fn observe(&mut self, sections: &[Section], threshold: Threshold) -> bool;

    /// Stops all observation started by [`ViewportHost::observe`].
    fn disconnect(&mut self);

    /// Smoothly scrolls the section's element into view. Returns `false` when
    /// the element is not on the page.
    fn scroll_into_view(&mut self, section: Section) -> bool;
}
