// Axum Server Module
//
// Purpose: serve the portfolio page and the UI endpoints that drive each
// page session's view (mount / observe / unmount / menu / navigate)

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_htmx::{HxRequest, HX_RESWAP};
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::content::{ContentError, Portfolio, PORTFOLIO};
use crate::section::Section;
use crate::session::{SessionId, SessionStore, SharedSession};
use crate::tracker::{Intersection, Threshold};
use crate::web::handlers::pages::{self, render_nav};
use crate::web::view_models::ViewStateResponse;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub portfolio: &'static Portfolio,
    pub sessions: SessionStore,
    pub threshold: Threshold,
    pub static_dir: String,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ContentError> {
        Self::with_portfolio(config, &PORTFOLIO)
    }

    /// Validates the content tables before accepting any request.
    pub fn with_portfolio(
        config: &ServerConfig,
        portfolio: &'static Portfolio,
    ) -> Result<Self, ContentError> {
        tracing::info!("Validating page content...");
        portfolio.validate()?;

        tracing::info!(
            "Initializing page-session cache (capacity {}, idle ttl {:?})...",
            config.session_capacity,
            config.session_ttl
        );
        let sessions = SessionStore::new(config.session_capacity, config.session_ttl, config.threshold);

        Ok(Self {
            portfolio,
            sessions,
            threshold: config.threshold,
            static_dir: config.static_dir.clone(),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Page
        .route("/", get(pages::portfolio_page))
        .route("/health", get(health_check))

        // Content tables (JSON)
        .route("/api/content", get(get_content))

        // Page-session UI endpoints
        .route("/ui/mount", post(mount_view))
        .route("/ui/observe", post(observe_sections))
        .route("/ui/unmount", post(unmount_view))
        .route("/ui/menu/toggle", post(toggle_menu))
        .route("/ui/navigate/:section", post(navigate))

        .nest_service("/static", static_files)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_content(State(state): State<AppState>) -> Json<&'static Portfolio> {
    Json(state.portfolio)
}

async fn session_for(state: &AppState, headers: &HeaderMap) -> Result<(SessionId, SharedSession), AppError> {
    let id = SessionId::from_headers(headers)
        .ok_or_else(|| AppError::NotFound("no page session cookie".to_string()))?;
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("page session {} expired", id)))?;
    Ok((id, session))
}

/// Session for a user action. A page restored from the back/forward cache or
/// left idle past the TTL has lost its session; actions on it start a new one.
async fn session_or_new(state: &AppState, headers: &HeaderMap) -> (SessionId, SharedSession, bool) {
    state
        .sessions
        .get_or_create(SessionId::from_headers(headers))
        .await
}

fn issue_cookie(response: &mut Response, id: SessionId, fresh: bool) -> Result<(), AppError> {
    if fresh {
        let value = HeaderValue::from_str(&id.cookie()).map_err(|e| AppError::Internal(e.to_string()))?;
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    Ok(())
}

fn poisoned<T>(_: T) -> AppError {
    AppError::Internal("page session lock poisoned".to_string())
}

#[derive(Debug, Deserialize)]
struct MountRequest {
    observer_supported: bool,
    /// Section ids present on the page; all six when omitted.
    #[serde(default)]
    sections: Option<Vec<String>>,
}

async fn mount_view(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<MountRequest>,
) -> Result<Response, AppError> {
    let (id, session, fresh) = session_or_new(&state, &headers).await;

    let rendered: Vec<Section> = match request.sections {
        Some(ids) => ids.iter().filter_map(|s| s.parse().ok()).collect(),
        None => Section::ALL.to_vec(),
    };

    let body = {
        let mut session = session.lock().map_err(poisoned)?;
        let session = &mut *session;
        session.host.report(request.observer_supported, rendered);
        let status = session.view.mount(&mut session.host);
        tracing::debug!("Mounted page session {} ({:?})", id, status);
        ViewStateResponse::from_view(&session.view, session.last_seq())
    };

    let mut response = Json(body).into_response();
    issue_cookie(&mut response, id, fresh)?;
    Ok(response)
}

#[derive(Debug, Deserialize)]
struct ReportedIntersection {
    section: String,
    is_intersecting: bool,
    ratio: f64,
    #[serde(default)]
    viewport_ratio: f64,
}

#[derive(Debug, Deserialize)]
struct ObserveRequest {
    /// Position of this batch in the page's observer callback order.
    #[serde(default)]
    seq: Option<u64>,
    entries: Vec<ReportedIntersection>,
}

async fn observe_sections(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ObserveRequest>,
) -> Result<Json<ViewStateResponse>, AppError> {
    let (id, session) = session_for(&state, &headers).await?;

    // Only section elements are observed; anything else is stray markup.
    let batch: Vec<Intersection> = request
        .entries
        .iter()
        .filter_map(|entry| {
            let section = entry.section.parse().ok()?;
            Some(Intersection::new(section, entry.is_intersecting, entry.ratio).covering(entry.viewport_ratio))
        })
        .collect();

    let mut session = session.lock().map_err(poisoned)?;
    if let Some(seq) = request.seq {
        if !session.accept_batch(seq) {
            tracing::debug!(
                "Session {}: dropping stale batch {} (last applied {})",
                id,
                seq,
                session.last_seq()
            );
            return Ok(Json(ViewStateResponse::from_view(&session.view, session.last_seq())));
        }
    }

    let outcome = session.view.on_intersections(&batch);
    if outcome.activated.is_some() || !outcome.entered.is_empty() || !outcome.left.is_empty() {
        tracing::debug!(
            "Session {}: entered {:?}, left {:?}, active {}",
            id,
            outcome.entered,
            outcome.left,
            session.view.active()
        );
    }

    Ok(Json(ViewStateResponse::from_view(&session.view, session.last_seq())))
}

/// Unmounting a session that is already gone succeeds.
async fn unmount_view(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let Some(id) = SessionId::from_headers(&headers) else {
        return Ok(StatusCode::NO_CONTENT);
    };
    let Some(session) = state.sessions.get(id).await else {
        return Ok(StatusCode::NO_CONTENT);
    };
    {
        let mut session = session.lock().map_err(poisoned)?;
        let session = &mut *session;
        session.view.unmount(&mut session.host);
        tracing::debug!(
            "Unmounted page session {} after {}s",
            id,
            (chrono::Utc::now() - session.created_at).num_seconds()
        );
    }
    state.sessions.remove(id).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle_menu(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let (id, session, fresh) = session_or_new(&state, &headers).await;
    let nav = {
        let mut session = session.lock().map_err(poisoned)?;
        session.view.toggle_menu();
        render_nav(&session.view, state.portfolio)?
    };
    let mut response = Html(nav).into_response();
    issue_cookie(&mut response, id, fresh)?;
    Ok(response)
}

async fn navigate(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    headers: HeaderMap,
    Path(target): Path<String>,
) -> Result<Response, AppError> {
    let (id, session, fresh) = session_or_new(&state, &headers).await;

    let (outcome, nav, scroll) = {
        let mut session = session.lock().map_err(poisoned)?;
        let session = &mut *session;
        let outcome = session.view.navigate_to(&mut session.host, &target);
        let scroll = session.host.take_scroll();
        let nav = render_nav(&session.view, state.portfolio)?;
        (outcome, nav, scroll)
    };

    let mut response = if is_htmx {
        let mut response = Html(nav).into_response();
        if let Some(section) = scroll {
            let swap = format!("outerHTML show:#{}:top", section);
            let value = HeaderValue::from_str(&swap).map_err(|e| AppError::Internal(e.to_string()))?;
            response.headers_mut().insert(HX_RESWAP, value);
        }
        response
    } else {
        let location = match outcome.target {
            Some(section) => format!("/#{}", section),
            None => "/".to_string(),
        };
        Redirect::to(&location).into_response()
    };
    issue_cookie(&mut response, id, fresh)?;
    Ok(response)
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Template(String),
    Internal(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Template(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        if status.is_server_error() {
            tracing::warn!("Request failed: {}", message);
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
