//! Content table types
//!
//! Everything is `&'static` so the tables can live in a `static` and be
//! shared by every render without cloning.

use super::icon::Icon;
use serde::Serialize;

/// Color family for skill and highlight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Blue,
    Green,
    Purple,
    Orange,
}

impl Palette {
    /// Gradient behind a skill category's icon.
    pub fn icon_gradient(&self) -> &'static str {
        match self {
            Palette::Blue => "from-blue-500 to-blue-600 group-hover:from-blue-600 group-hover:to-blue-700",
            Palette::Green => "from-green-500 to-green-600 group-hover:from-green-600 group-hover:to-green-700",
            Palette::Purple => "from-purple-500 to-purple-600 group-hover:from-purple-600 group-hover:to-purple-700",
            Palette::Orange => "from-orange-500 to-orange-600 group-hover:from-orange-600 group-hover:to-orange-700",
        }
    }

    /// Skill chip colors.
    pub fn chip(&self) -> &'static str {
        match self {
            Palette::Blue => "from-blue-50 to-blue-100 text-blue-700 hover:from-blue-100 hover:to-blue-200",
            Palette::Green => "from-green-50 to-green-100 text-green-700 hover:from-green-100 hover:to-green-200",
            Palette::Purple => "from-purple-50 to-purple-100 text-purple-700 hover:from-purple-100 hover:to-purple-200",
            Palette::Orange => "from-orange-50 to-orange-100 text-orange-700 hover:from-orange-100 hover:to-orange-200",
        }
    }

    /// Background and border of an about-section highlight card.
    pub fn highlight_card(&self) -> &'static str {
        match self {
            Palette::Blue => "from-blue-50 to-indigo-100 border-blue-100/50",
            Palette::Green => "from-green-50 to-emerald-100 border-green-100/50",
            Palette::Purple => "from-purple-50 to-fuchsia-100 border-purple-100/50",
            Palette::Orange => "from-orange-50 to-amber-100 border-orange-100/50",
        }
    }

    pub fn highlight_icon(&self) -> &'static str {
        match self {
            Palette::Blue => "bg-blue-500",
            Palette::Green => "bg-green-500",
            Palette::Purple => "bg-purple-500",
            Palette::Orange => "bg-orange-500",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    /// Shown in the nav bar.
    pub brand: &'static str,
    pub tagline: &'static str,
    pub photo_path: &'static str,
    pub photo_alt: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
    pub about: &'static [&'static str],
    pub contact_headline: &'static str,
    pub contact_blurb: &'static str,
    pub certification: &'static str,
    pub footer: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with separators stripped.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

/// About-section card (leadership, training).
#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: Icon,
    pub palette: Palette,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub palette: Palette,
    pub skills: &'static [&'static str],
    /// Render at most this many chips, then a "+N more" chip.
    pub visible_limit: Option<usize>,
}

impl SkillCategory {
    pub fn shown_skills(&self) -> &'static [&'static str] {
        match self.visible_limit {
            Some(limit) if limit < self.skills.len() => &self.skills[..limit],
            _ => self.skills,
        }
    }

    pub fn hidden_count(&self) -> usize {
        self.skills.len() - self.shown_skills().len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    /// Category badge, e.g. "Data Analytics Project".
    pub kind: &'static str,
    pub technologies: &'static [&'static str],
    pub description: &'static [&'static str],
    /// Gradient classes for the accent bar.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
}

/// All page content.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub highlights: &'static [Highlight],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub education: &'static [Education],
}
