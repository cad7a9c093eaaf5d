//! Page Content
//!
//! Static, read-only tables feeding the renderer:
//! - `types`: profile, highlight, skill, project and education records
//! - `data`: the built-in tables ([`PORTFOLIO`])
//! - `icon`: inline SVG icons referenced by the tables and templates
//!
//! The tables have no identity beyond array position. The only integrity
//! rule is that every displayed string is non-empty, checked by
//! [`Portfolio::validate`].

pub mod data;
pub mod icon;
pub mod types;

pub use data::PORTFOLIO;
pub use icon::Icon;
pub use types::{Education, Highlight, Palette, Portfolio, Profile, Project, SkillCategory};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("content field '{0}' is empty")]
    EmptyField(String),
    #[error("content table '{0}' has no entries")]
    EmptyTable(&'static str),
}

fn require(field: String, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField(field));
    }
    Ok(())
}

fn require_all(field: &str, values: &[&str]) -> Result<(), ContentError> {
    if values.is_empty() {
        return Err(ContentError::EmptyField(field.to_string()));
    }
    for (i, value) in values.iter().enumerate() {
        require(format!("{}[{}]", field, i), value)?;
    }
    Ok(())
}

impl Portfolio {
    /// Checks that every displayed string is non-empty and every table has rows.
    pub fn validate(&self) -> Result<(), ContentError> {
        let p = &self.profile;
        for (name, value) in [
            ("profile.first_name", p.first_name),
            ("profile.last_name", p.last_name),
            ("profile.brand", p.brand),
            ("profile.tagline", p.tagline),
            ("profile.photo_path", p.photo_path),
            ("profile.photo_alt", p.photo_alt),
            ("profile.email", p.email),
            ("profile.phone", p.phone),
            ("profile.linkedin_url", p.linkedin_url),
            ("profile.github_url", p.github_url),
            ("profile.contact_headline", p.contact_headline),
            ("profile.contact_blurb", p.contact_blurb),
            ("profile.certification", p.certification),
            ("profile.footer", p.footer),
        ] {
            require(name.to_string(), value)?;
        }
        require_all("profile.about", p.about)?;

        if self.highlights.is_empty() {
            return Err(ContentError::EmptyTable("highlights"));
        }
        for (i, h) in self.highlights.iter().enumerate() {
            require(format!("highlights[{}].title", i), h.title)?;
            require(format!("highlights[{}].body", i), h.body)?;
        }

        if self.skills.is_empty() {
            return Err(ContentError::EmptyTable("skills"));
        }
        for (i, category) in self.skills.iter().enumerate() {
            require(format!("skills[{}].key", i), category.key)?;
            require(format!("skills[{}].label", i), category.label)?;
            require_all(&format!("skills[{}].skills", i), category.skills)?;
        }

        if self.projects.is_empty() {
            return Err(ContentError::EmptyTable("projects"));
        }
        for (i, project) in self.projects.iter().enumerate() {
            require(format!("projects[{}].title", i), project.title)?;
            require(format!("projects[{}].period", i), project.period)?;
            require(format!("projects[{}].kind", i), project.kind)?;
            require(format!("projects[{}].accent", i), project.accent)?;
            require_all(&format!("projects[{}].technologies", i), project.technologies)?;
            require_all(&format!("projects[{}].description", i), project.description)?;
        }

        if self.education.is_empty() {
            return Err(ContentError::EmptyTable("education"));
        }
        for (i, edu) in self.education.iter().enumerate() {
            require(format!("education[{}].degree", i), edu.degree)?;
            require(format!("education[{}].institution", i), edu.institution)?;
            require(format!("education[{}].location", i), edu.location)?;
            require(format!("education[{}].period", i), edu.period)?;
        }

        Ok(())
    }
}
