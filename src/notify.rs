//! Transient user-facing notifications.
//!
//! Every attempted action ends in exactly one notice: a success line, or an
//! error line naming the action and the reason (server-supplied message or a
//! generic default). Notices are kept in a short backlog for display and
//! mirrored to the log.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};

/// Backlog size. Old notices fall off; they are transient by design.
const BACKLOG: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "成功",
            Self::Error => "错误",
        }
    }
}

/// One notification: what was attempted and, for failures, why it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub action: String,
    pub reason: Option<String>,
    pub at: DateTime<Utc>,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.title(), self.action)?;
        if let Some(reason) = &self.reason {
            write!(f, "：{reason}")?;
        }
        Ok(())
    }
}

/// Collects notices and mirrors them to the log.
#[derive(Debug, Default)]
pub struct Notifier {
    backlog: VecDeque<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, action: impl Into<String>) {
        let action = action.into();
        tracing::info!("{}", action);
        self.push(Notice {
            kind: NoticeKind::Success,
            action,
            reason: None,
            at: Utc::now(),
        });
    }

    pub fn error(&mut self, action: impl Into<String>, reason: impl Into<String>) {
        let action = action.into();
        let reason = reason.into();
        tracing::warn!("{}: {}", action, reason);
        self.push(Notice {
            kind: NoticeKind::Error,
            action,
            reason: Some(reason),
            at: Utc::now(),
        });
    }

    fn push(&mut self, notice: Notice) {
        if self.backlog.len() == BACKLOG {
            self.backlog.pop_front();
        }
        self.backlog.push_back(notice);
    }

    /// The most recent notice, if any.
    pub fn last(&self) -> Option<&Notice> {
        self.backlog.back()
    }

    /// All retained notices, oldest first.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.backlog.iter()
    }
}
