// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::api_server::{AppError, AppState};
use crate::content::{Icon, Portfolio};
use crate::view::PortfolioView;
use crate::web::view_models::{NavModel, RevealClasses};

fn icon_svg(name: &str, class: &str) -> String {
    match Icon::from_name(name) {
        Some(icon) => icon.svg(class),
        None => {
            tracing::warn!("Template asked for unknown icon '{}'", name);
            String::new()
        }
    }
}

// ============================================================================
// Full Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/portfolio.html")]
pub struct PortfolioTemplate<'a> {
    pub title: String,
    pub portfolio: &'a Portfolio,
    pub nav: NavModel,
    pub reveal: RevealClasses,
    /// Passed to the browser glue's observer.
    pub threshold: f64,
}

impl<'a> PortfolioTemplate<'a> {
    pub fn new(view: &PortfolioView, portfolio: &'a Portfolio, threshold: f64) -> Self {
        Self {
            title: format!("{} | Portfolio", portfolio.profile.full_name()),
            portfolio,
            nav: NavModel::from_view(view, portfolio.profile.brand),
            reveal: RevealClasses::from_view(view),
            threshold,
        }
    }

    pub fn icon(&self, name: &str, class: &str) -> String {
        icon_svg(name, class)
    }
}

// ============================================================================
// Nav Fragment (htmx swap target)
// ============================================================================

#[derive(Template)]
#[template(path = "partials/nav.html")]
pub struct NavTemplate {
    pub nav: NavModel,
}

impl NavTemplate {
    pub fn new(view: &PortfolioView, portfolio: &Portfolio) -> Self {
        Self {
            nav: NavModel::from_view(view, portfolio.profile.brand),
        }
    }

    pub fn icon(&self, name: &str, class: &str) -> String {
        icon_svg(name, class)
    }
}

pub fn render_nav(view: &PortfolioView, portfolio: &Portfolio) -> Result<String, AppError> {
    NavTemplate::new(view, portfolio)
        .render()
        .map_err(|e| AppError::Template(e.to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

/// Every page load starts a new page session.
pub async fn portfolio_page(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let (id, session) = state.sessions.create().await;

    let body = {
        let session = session
            .lock()
            .map_err(|_| AppError::Internal("page session lock poisoned".to_string()))?;
        PortfolioTemplate::new(&session.view, state.portfolio, state.threshold.ratio())
            .render()
            .map_err(|e| AppError::Template(e.to_string()))?
    };

    Ok(([(header::SET_COOKIE, id.cookie())], Html(body)))
}
