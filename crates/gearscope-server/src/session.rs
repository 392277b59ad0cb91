//! Per-browser session slots
//!
//! Each browser gets an opaque UUID cookie. The slot behind it holds the most
//! recent upload and any notices waiting to be shown. Slots live in memory
//! only; the least recently used slot is evicted once the store is full.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::http::{header, HeaderMap};
use gearscope_core::UploadedDataset;
use tracing::debug;
use uuid::Uuid;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "gearscope_session";

/// Opaque session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Extract the id from a request's `Cookie` headers
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
            .map(Self)
    }

    /// `Set-Cookie` value binding the browser to this session
    pub fn set_cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}; HttpOnly; SameSite=Lax; Path=/", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One-shot message shown on the next landing page view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// CSS class used by the landing page
    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "notice success",
            NoticeLevel::Error => "notice error",
        }
    }
}

#[derive(Debug, Default)]
struct SessionSlot {
    dataset: Option<Arc<UploadedDataset>>,
    notices: Vec<Notice>,
    last_used: u64,
}

#[derive(Debug, Default)]
struct Slots {
    by_id: HashMap<SessionId, SessionSlot>,
    clock: u64,
}

impl Slots {
    fn touch(&mut self, id: SessionId) -> Option<&mut SessionSlot> {
        self.clock += 1;
        let now = self.clock;
        self.by_id.get_mut(&id).map(|slot| {
            slot.last_used = now;
            slot
        })
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .by_id
            .iter()
            .min_by_key(|(_, slot)| slot.last_used)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            self.by_id.remove(&id);
            debug!(session = %id, "evicted least recently used session");
        }
    }
}

/// The session as seen by one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle {
    pub id: SessionId,
    /// The id was minted for this request and must be sent back as a cookie
    pub issued: bool,
}

impl SessionHandle {
    pub fn set_cookie(&self) -> Option<String> {
        self.issued.then(|| self.id.set_cookie())
    }
}

/// In-memory map of session slots bounded by `capacity`
#[derive(Debug)]
pub struct SessionStore {
    slots: Mutex<Slots>,
    capacity: usize,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Mutex::new(Slots::default()),
            capacity: capacity.max(1),
        }
    }

    // Poison-tolerant: slot writes are single assignments
    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Find the session named by the request cookies, or open a new one
    ///
    /// Unknown or evicted ids are never adopted; a fresh id is issued instead.
    pub fn resolve(&self, headers: &HeaderMap) -> SessionHandle {
        let mut slots = self.lock();
        if let Some(id) = SessionId::from_headers(headers) {
            if slots.touch(id).is_some() {
                return SessionHandle { id, issued: false };
            }
        }

        let id = SessionId::generate();
        if slots.by_id.len() >= self.capacity {
            slots.evict_oldest();
        }
        slots.clock += 1;
        let slot = SessionSlot {
            last_used: slots.clock,
            ..SessionSlot::default()
        };
        slots.by_id.insert(id, slot);
        debug!(session = %id, "opened session");
        SessionHandle { id, issued: true }
    }

    /// Current upload of a session
    pub fn dataset(&self, id: SessionId) -> Option<Arc<UploadedDataset>> {
        self.lock().touch(id).and_then(|slot| slot.dataset.clone())
    }

    /// Replace the session's upload; earlier uploads are dropped
    pub fn replace_dataset(&self, id: SessionId, dataset: UploadedDataset) {
        if let Some(slot) = self.lock().touch(id) {
            slot.dataset = Some(Arc::new(dataset));
        }
    }

    pub fn push_notice(&self, id: SessionId, notice: Notice) {
        if let Some(slot) = self.lock().touch(id) {
            slot.notices.push(notice);
        }
    }

    /// Drain pending notices, oldest first
    pub fn take_notices(&self, id: SessionId) -> Vec<Notice> {
        self.lock()
            .touch(id)
            .map(|slot| std::mem::take(&mut slot.notices))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lock().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
