//! Section identifiers
//!
//! The page is split into six anchorable regions. Their ids double as DOM
//! element ids, nav labels and JSON keys, so everything that names a section
//! goes through [`Section`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One named, anchorable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl Section {
    /// All sections in page order (top to bottom).
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    /// Element id, also used in URLs and JSON.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Capitalized nav label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Zero-based position in page order.
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id '{0}'")]
pub struct SectionParseError(pub String);

impl FromStr for Section {
    type Err = SectionParseError;

    /// Element ids are case-sensitive, so only the exact lowercase id parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| SectionParseError(s.to_string()))
    }
}
