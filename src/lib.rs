//! Portfolio Site
//!
//! A single-page personal portfolio: hero, about, skills, projects,
//! education and contact sections with scroll-driven nav highlighting.
//!
//! - `section`: the six section identifiers
//! - `content`: static content tables
//! - `host`: the browser boundary (`ViewportHost`)
//! - `tracker`: viewport visibility tracker (fade-in and active section)
//! - `navigation`: mobile menu and smooth-scroll navigation
//! - `view`: `PortfolioView`, the whole runtime state of one page
//! - `config`: environment-driven server configuration
//!
//! With the `server` feature (default) the page is served by axum, rendered
//! with askama and driven through htmx:
//! - `session`: page sessions in a moka cache
//! - `web`: templates and view models
//! - `api_server`: router and UI endpoints

pub mod config;
pub mod content;
pub mod host;
pub mod navigation;
pub mod section;
pub mod tracker;
pub mod view;

#[cfg(feature = "server")]
pub mod api_server;
#[cfg(feature = "server")]
pub mod session;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use content::{Portfolio, PORTFOLIO};
pub use host::ViewportHost;
pub use section::Section;
pub use tracker::{Intersection, Threshold, TrackingStatus, VisibilityTracker};
pub use view::{PortfolioView, ViewState};

#[cfg(feature = "server")]
pub use api_server::{create_router, AppError, AppState};
