//! Submission Tracker
//!
//! Ordered log of submitted instructions and their lifecycle status.
//!
//! Entries carry a stable id assigned at append time. Status updates and
//! deletions address entries by id, so deleting an entry while its
//! submission is still in flight cannot redirect the eventual status update
//! onto an unrelated entry.

use chrono::{DateTime, Utc};

/// Stable identity of a log entry. Never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

/// Lifecycle of one submitted instruction.
///
/// Entries are only created at dispatch time, so they start out `Running`;
/// there is no observable pending state before the request goes out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Sent to the backend, response pending.
    Running,
    /// The backend accepted the connection.
    Completed,
    /// The backend rejected the connection or was unreachable.
    Failed,
}

/// One submitted instruction.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionEntry {
    pub id: SubmissionId,
    pub text: String,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Log of submissions, oldest first.
#[derive(Clone, Debug, Default)]
pub struct SubmissionLog {
    entries: Vec<SubmissionEntry>,
    next_id: u64,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for an instruction that is being dispatched now.
    pub fn append(&mut self, text: &str) -> SubmissionId {
        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.entries.push(SubmissionEntry {
            id,
            text: text.to_string(),
            status: SubmissionStatus::Running,
            submitted_at: Utc::now(),
        });
        id
    }

    /// Transition an entry's status. Unknown ids are ignored: the entry may
    /// have been deleted while its submission was in flight.
    pub fn set_status(&mut self, id: SubmissionId, status: SubmissionStatus) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.status = status;
        }
    }

    /// Delete an entry. Unknown ids are ignored.
    pub fn remove(&mut self, id: SubmissionId) {
        self.entries.retain(|e| e.id != id);
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[SubmissionEntry] {
        &self.entries
    }

    /// Completed entries, oldest first. These are the tools the backend has
    /// built so far.
    pub fn completed(&self) -> impl Iterator<Item = &SubmissionEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == SubmissionStatus::Completed)
    }

    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_append_order() {
        let mut log = SubmissionLog::new();
        log.append("one");
        log.append("two");
        log.append("three");

        let texts: Vec<_> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn test_ids_are_unique_and_stable_across_removal() {
        let mut log = SubmissionLog::new();
        let a = log.append("a");
        let b = log.append("b");
        log.remove(a);
        let c = log.append("c");

        assert_ne!(b, c);
        let ids: Vec<_> = log.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, [b, c]);
    }

    #[test]
    fn test_remove_shifts_later_entries_down() {
        let mut log = SubmissionLog::new();
        log.append("a");
        let b = log.append("b");
        log.append("c");
        log.remove(b);

        let texts: Vec<_> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn test_set_status_for_removed_entry_is_noop() {
        let mut log = SubmissionLog::new();
        let a = log.append("a");
        let b = log.append("b");
        log.remove(b);

        // The in-flight entry was deleted; reconciling it must not touch
        // the survivor.
        log.set_status(b, SubmissionStatus::Completed);
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].id, a);
        assert_eq!(log.entries()[0].status, SubmissionStatus::Running);
    }

    #[test]
    fn test_status_transitions() {
        let mut log = SubmissionLog::new();
        let a = log.append("a");
        assert_eq!(log.entries()[0].status, SubmissionStatus::Running);

        log.set_status(a, SubmissionStatus::Completed);
        assert_eq!(log.entries()[0].status, SubmissionStatus::Completed);

        let b = log.append("b");
        log.set_status(b, SubmissionStatus::Failed);
        assert_eq!(log.entries()[1].status, SubmissionStatus::Failed);
    }

    #[test]
    fn test_completed_count() {
        let mut log = SubmissionLog::new();
        let a = log.append("a");
        let b = log.append("b");
        log.append("c");

        log.set_status(a, SubmissionStatus::Completed);
        log.set_status(b, SubmissionStatus::Failed);

        assert_eq!(log.completed_count(), 1);
        assert_eq!(log.completed().next().unwrap().id, a);
    }
}
