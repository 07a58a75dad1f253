//! User-visible notices raised by background work (failed extractions,
//! failed report generation). Bounded: the oldest notice is dropped first.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const MAX_NOTICES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
    capacity: usize,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::with_capacity(MAX_NOTICES)
    }
}

impl NoticeBoard {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notices: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        if self.notices.len() == self.capacity {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        });
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    /// Oldest first.
    pub fn list(&self) -> Vec<Notice> {
        self.notices.iter().cloned().collect()
    }

    pub fn clear(&mut self) -> usize {
        let n = self.notices.len();
        self.notices.clear();
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut board = NoticeBoard::default();
        board.error("first");
        board.warning("second");

        let list = board.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].message, "first");
        assert_eq!(list[0].level, NoticeLevel::Error);
        assert_eq!(list[1].message, "second");
        assert_eq!(list[1].level, NoticeLevel::Warning);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut board = NoticeBoard::with_capacity(2);
        board.error("a");
        board.error("b");
        board.error("c");

        let messages: Vec<_> = board.list().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_clear_returns_count() {
        let mut board = NoticeBoard::default();
        board.error("a");
        board.error("b");
        assert_eq!(board.clear(), 2);
        assert!(board.list().is_empty());
    }
}
