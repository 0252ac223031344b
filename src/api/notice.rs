use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// User-visible message surfaced by the editor.
///
/// Transient notices carry a remaining lifetime and disappear on their own;
/// persistent ones stay until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub remaining_ms: Option<u64>,
}

impl Notice {
    #[must_use]
    pub fn transient(kind: NoticeKind, message: impl Into<String>, ttl_ms: u64) -> Self {
        Self {
            kind,
            message: message.into(),
            remaining_ms: Some(ttl_ms),
        }
    }

    #[must_use]
    pub fn persistent(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            remaining_ms: None,
        }
    }

    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.remaining_ms.is_some()
    }
}

/// Holds the single notice currently shown; a new notice replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct NoticeBoard {
    current: Option<Notice>,
}

impl NoticeBoard {
    pub(super) fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub(super) fn raise(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    /// Returns `true` when a notice was removed.
    pub(super) fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Advances transient lifetimes. Returns `true` when the notice expired.
    pub(super) fn tick(&mut self, elapsed: Duration) -> bool {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let Some(notice) = self.current.as_mut() else {
            return false;
        };
        let Some(remaining) = notice.remaining_ms else {
            return false;
        };
        if remaining <= elapsed_ms {
            self.current = None;
            return true;
        }
        notice.remaining_ms = Some(remaining - elapsed_ms);
        false
    }
}
