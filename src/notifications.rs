//! In-app notices, owned by an explicit service object.
//!
//! `NotificationCenter` is built once at startup and handed by reference to
//! whatever needs to report something. Warnings are echoed to stderr as they
//! are recorded, so a failure is both logged and visible to the user later.

use crate::store::{KvStore, NOTIFICATIONS_KEY};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notices kept after pruning; oldest are dropped first
const MAX_NOTICES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    notices: Vec<Notice>,
    quiet: bool,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Center that records warnings without echoing them to stderr
    pub fn quiet() -> Self {
        Self {
            notices: Vec::new(),
            quiet: true,
        }
    }

    /// Load persisted notices. A missing or unreadable blob yields an empty center.
    pub fn load(store: &KvStore) -> Self {
        let notices = match store.get_json::<Vec<Notice>>(NOTIFICATIONS_KEY) {
            Ok(Some(notices)) => notices,
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("Ignoring stored notifications: {:#}", e);
                Vec::new()
            }
        };
        Self {
            notices,
            quiet: false,
        }
    }

    pub fn save(&self, store: &mut KvStore) -> Result<()> {
        store.set_json(NOTIFICATIONS_KEY, &self.notices)
    }

    pub fn push(&mut self, level: NoticeLevel, title: impl Into<String>, body: impl Into<String>) {
        self.notices.push(Notice {
            level,
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
            read: false,
        });
        if self.notices.len() > MAX_NOTICES {
            let excess = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..excess);
        }
    }

    pub fn info(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(NoticeLevel::Info, title, body);
    }

    pub fn success(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.push(NoticeLevel::Success, title, body);
    }

    /// Record a warning and echo it to stderr
    pub fn warn(&mut self, title: impl Into<String>, body: impl Into<String>) {
        let title = title.into();
        let body = body.into();
        if !self.quiet {
            eprintln!("Warning: {}: {}", title, body);
        }
        self.push(NoticeLevel::Warning, title, body);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn unread_count(&self) -> usize {
        self.notices.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        for notice in &mut self.notices {
            notice.read = true;
        }
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}

/// Badge text for an unread count; nothing is shown for zero
pub fn badge_text(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}
