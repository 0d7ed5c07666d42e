//! # Notification Controller
//!
//! Transient status notices stacked in insertion order. The center keeps no
//! timers of its own: the frontend schedules one timeout per notice and
//! dismisses it by id when it elapses. Removal is idempotent, so a manual
//! dismissal racing the timer is harmless.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::IconKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn icon(&self) -> IconKey {
        match self {
            NoticeKind::Success => IconKey::CheckCircle,
            NoticeKind::Error => IconKey::XCircle,
            NoticeKind::Warning => IconKey::AlertCircle,
            NoticeKind::Info => IconKey::Info,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeId(Uuid);

impl NoticeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notice::{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn icon(&self) -> IconKey {
        self.kind.icon()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    notices: Vec<Notice>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice to the bottom of the stack.
    pub fn notify(
        &mut self,
        kind: NoticeKind,
        message: impl Into<String>,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> NoticeId {
        let notice = Notice {
            id: NoticeId::new(),
            kind,
            message: message.into(),
            description: description.filter(|text| !text.is_empty()),
            created_at: now,
        };
        let id = notice.id;
        self.notices.push(notice);
        id
    }

    /// Manually close a notice. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn get(&self, id: NoticeId) -> Option<&Notice> {
        self.notices.iter().find(|notice| notice.id == id)
    }

    pub fn count_of(&self, kind: NoticeKind) -> usize {
        self.notices.iter().filter(|notice| notice.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
