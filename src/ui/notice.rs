//! Transient notifications shown in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::ui::theme::{STATUS_ERROR, STATUS_OK, STATUS_WARN};
use ratatui::style::Color;

/// Oldest notices are dropped beyond this many.
const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Danger,
}

impl NoticeLevel {
    pub fn color(self) -> Color {
        match self {
            NoticeLevel::Success => STATUS_OK,
            NoticeLevel::Warning => STATUS_WARN,
            NoticeLevel::Danger => STATUS_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
    ttl: Duration,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self {
            notices: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: NoticeLevel, message: impl Into<String>, now: Instant) {
        let message = message.into();
        match level {
            NoticeLevel::Danger => tracing::warn!(%message, "notice"),
            _ => tracing::debug!(%message, "notice"),
        }
        self.notices.push_back(Notice {
            level,
            message,
            expires_at: now + self.ttl,
        });
        while self.notices.len() > MAX_NOTICES {
            self.notices.pop_front();
        }
    }

    /// Drops every notice whose lifetime has run out.
    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|notice| notice.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }
}
