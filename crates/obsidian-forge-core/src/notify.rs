//! Process-wide notification log.
//!
//! Controllers append through a cloned [`NotificationSink`]; the view drains
//! new entries through a [`NotificationReader`] that keeps its own cursor.
//! Entries are never edited, reordered or deduplicated.

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Default)]
struct NotificationLog {
    entries: Vec<Notice>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationSink {
    log: Arc<Mutex<NotificationLog>>,
}

impl NotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            NoticeKind::Success => tracing::info!(%message, "notify"),
            NoticeKind::Error => tracing::warn!(%message, "notify"),
        }
        let mut log = self.lock();
        let seq = log.entries.len() as u64;
        log.entries.push(Notice { seq, kind, message });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message);
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every notice emitted so far, in insertion order.
    pub fn snapshot(&self) -> Vec<Notice> {
        self.lock().entries.clone()
    }

    pub fn reader(&self) -> NotificationReader {
        NotificationReader {
            sink: self.clone(),
            cursor: 0,
        }
    }

    fn lock(&self) -> MutexGuard<'_, NotificationLog> {
        // Append-only: a panic mid-push cannot leave a torn entry behind.
        match self.log.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[derive(Debug)]
pub struct NotificationReader {
    sink: NotificationSink,
    cursor: usize,
}

impl NotificationReader {
    /// Notices appended since the previous call.
    pub fn drain_new(&mut self) -> Vec<Notice> {
        let log = self.sink.lock();
        let fresh = log.entries[self.cursor.min(log.entries.len())..].to_vec();
        self.cursor = log.entries.len();
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::{NoticeKind, NotificationSink};

    #[test]
    fn identical_notices_are_not_deduplicated() {
        let sink = NotificationSink::new();
        sink.error("Failed to create wallet");
        sink.error("Failed to create wallet");
        let all = sink.snapshot();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].seq + 1, all[1].seq);
    }

    #[test]
    fn reader_sees_each_notice_once_in_order() {
        let sink = NotificationSink::new();
        let mut reader = sink.reader();
        sink.success("a");
        sink.error("b");
        let first = reader.drain_new();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].kind, NoticeKind::Success);
        assert_eq!(first[1].message, "b");
        assert!(reader.drain_new().is_empty());
        sink.success("c");
        assert_eq!(reader.drain_new()[0].message, "c");
    }
}
