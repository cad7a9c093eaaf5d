//! Page sessions
//!
//! One [`PortfolioView`] per page load, kept in a moka cache keyed by a
//! random id carried in a cookie. Idle expiry stands in for page unload when
//! the browser never sends its unmount beacon.

use crate::host::ViewportHost;
use crate::section::Section;
use crate::tracker::Threshold;
use crate::view::PortfolioView;
use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};
use moka::future::Cache;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const SESSION_COOKIE: &str = "portfolio_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    pub fn random() -> Self {
        SessionId(rand::random())
    }

    /// `Set-Cookie` value scoping the session to this site.
    pub fn cookie(&self) -> String {
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self)
    }

    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| value.parse().ok())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(SessionId)
    }
}

/// Server-side stand-in for the browser: records what the page glue
/// reported it can do, and turns scroll requests into a pending htmx swap
/// directive for the current response.
#[derive(Debug, Clone)]
pub struct HtmxHost {
    observer_supported: bool,
    observing: bool,
    rendered: Vec<Section>,
    pending_scroll: Option<Section>,
}

impl Default for HtmxHost {
    fn default() -> Self {
        Self {
            observer_supported: false,
            observing: false,
            rendered: Section::ALL.to_vec(),
            pending_scroll: None,
        }
    }
}

impl HtmxHost {
    /// Capabilities reported by the page glue on mount.
    pub fn report(&mut self, observer_supported: bool, rendered: Vec<Section>) {
        self.observer_supported = observer_supported;
        self.rendered = rendered;
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Scroll target for the response being built, cleared on read.
    pub fn take_scroll(&mut self) -> Option<Section> {
        self.pending_scroll.take()
    }
}

impl ViewportHost for HtmxHost {
    fn observe(&mut self, sections: &[Section], _threshold: Threshold) -> bool {
        if !self.observer_supported {
            return false;
        }
        tracing::debug!("Observing {} sections", sections.len());
        self.observing = true;
        true
    }

    fn disconnect(&mut self) {
        self.observing = false;
    }

    fn scroll_into_view(&mut self, section: Section) -> bool {
        if !self.rendered.contains(&section) {
            return false;
        }
        self.pending_scroll = Some(section);
        true
    }
}

#[derive(Debug)]
pub struct Session {
    pub view: PortfolioView,
    pub host: HtmxHost,
    pub created_at: DateTime<Utc>,
    /// Sequence number of the last observation batch applied.
    last_seq: u64,
}

impl Session {
    fn new(threshold: Threshold) -> Self {
        Self {
            view: PortfolioView::new(threshold),
            host: HtmxHost::default(),
            created_at: Utc::now(),
            last_seq: 0,
        }
    }

    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Admits a batch only if its sequence number is newer than every batch
    /// applied so far. Requests may overtake each other on the wire.
    pub fn accept_batch(&mut self, seq: u64) -> bool {
        if seq <= self.last_seq {
            return false;
        }
        self.last_seq = seq;
        true
    }
}

pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<SessionId, SharedSession>,
    threshold: Threshold,
}

impl SessionStore {
    pub fn new(capacity: u64, time_to_idle: Duration, threshold: Threshold) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(time_to_idle)
            .build();
        Self { cache, threshold }
    }

    /// Starts a fresh page session.
    pub async fn create(&self) -> (SessionId, SharedSession) {
        let mut id = SessionId::random();
        while self.cache.contains_key(&id) {
            id = SessionId::random();
        }
        let session = Arc::new(Mutex::new(Session::new(self.threshold)));
        self.cache.insert(id, session.clone()).await;
        tracing::debug!("Created page session {}", id);
        (id, session)
    }

    pub async fn get(&self, id: SessionId) -> Option<SharedSession> {
        self.cache.get(&id).await
    }

    /// Looks up the caller's session, starting a new one when the cookie is
    /// missing or its session was unmounted, expired or evicted. The flag is
    /// `true` when a new cookie must be issued.
    pub async fn get_or_create(&self, id: Option<SessionId>) -> (SessionId, SharedSession, bool) {
        if let Some(id) = id {
            if let Some(session) = self.get(id).await {
                return (id, session, false);
            }
            tracing::debug!("Page session {} is gone, starting a new one", id);
        }
        let (id, session) = self.create().await;
        (id, session, true)
    }

    pub async fn remove(&self, id: SessionId) {
        self.cache.invalidate(&id).await;
        tracing::debug!("Dropped page session {}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_id_text_round_trip() {
        let id = SessionId(0xabc);
        assert_eq!(id.to_string(), "0000000000000abc");
        assert_eq!("0000000000000abc".parse::<SessionId>(), Ok(id));
        assert!("not-hex".parse::<SessionId>().is_err());
    }

    #[test]
    fn test_cookie_lookup_among_others() {
        let id = SessionId(42);
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}; lang=en", SESSION_COOKIE, id)).unwrap(),
        );
        assert_eq!(SessionId::from_headers(&headers), Some(id));
        assert!(id.cookie().starts_with("portfolio_session=000000000000002a;"));

        assert_eq!(SessionId::from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_htmx_host_records_scroll_for_rendered_sections() {
        let mut host = HtmxHost::default();
        host.report(true, vec![Section::Home, Section::Projects]);

        assert!(host.scroll_into_view(Section::Projects));
        assert_eq!(host.take_scroll(), Some(Section::Projects));
        assert_eq!(host.take_scroll(), None);

        assert!(!host.scroll_into_view(Section::Contact));
        assert_eq!(host.take_scroll(), None);
    }

    #[test]
    fn test_htmx_host_without_observer() {
        let mut host = HtmxHost::default();
        assert!(!host.observe(&Section::ALL, Threshold::DEFAULT));
        host.report(true, Section::ALL.to_vec());
        assert!(host.observe(&Section::ALL, Threshold::DEFAULT));
        assert!(host.is_observing());
        host.disconnect();
        assert!(!host.is_observing());
    }

    #[tokio::test]
    async fn test_store_create_get_remove() {
        let store = SessionStore::new(100, Duration::from_secs(60), Threshold::DEFAULT);
        let (id, session) = store.create().await;

        let fetched = store.get(id).await.expect("session should exist");
        assert!(Arc::ptr_eq(&session, &fetched));

        store.remove(id).await;
        assert!(store.get(id).await.is_none());
    }

    #[tokio::test]
    async fn test_get_or_create_replaces_a_dropped_session() {
        let store = SessionStore::new(100, Duration::from_secs(60), Threshold::DEFAULT);
        let (id, session) = store.create().await;

        let (same, fetched, fresh) = store.get_or_create(Some(id)).await;
        assert_eq!(same, id);
        assert!(Arc::ptr_eq(&session, &fetched));
        assert!(!fresh);

        store.remove(id).await;
        let (replacement, _, fresh) = store.get_or_create(Some(id)).await;
        assert_ne!(replacement, id);
        assert!(fresh);
        assert!(store.get(replacement).await.is_some());

        let (_, _, fresh) = store.get_or_create(None).await;
        assert!(fresh);
    }

    #[test]
    fn test_batches_must_arrive_with_increasing_seq() {
        let mut session = Session::new(Threshold::DEFAULT);
        assert_eq!(session.last_seq(), 0);
        assert!(!session.accept_batch(0));
        assert!(session.accept_batch(2));
        assert!(!session.accept_batch(1));
        assert!(!session.accept_batch(2));
        assert!(session.accept_batch(3));
        assert_eq!(session.last_seq(), 3);
    }
}
