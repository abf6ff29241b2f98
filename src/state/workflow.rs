//! Connection Builder Workflow
//!
//! Gates, dispatches, and reconciles one submission cycle. The remote call
//! is the only suspension point, so the cycle is split into two synchronous
//! halves: [`ConnectionWorkflow::begin_submission`] runs before the call
//! (preconditions, in-flight guard, payload, log entry) and
//! [`ConnectionWorkflow::finish_submission`] after it (status, guard
//! release). The connections page owns the await in between.

use std::collections::HashMap;

use serde::Serialize;

use super::catalog::ServiceCatalog;
use super::slots::{ServiceToken, SlotAssignments};
use super::submissions::{SubmissionId, SubmissionLog, SubmissionStatus};

/// Wire format of an automation request (`POST /graph`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphRequest {
    pub prompt: String,
    pub app1: String,
    pub app2: String,
    pub app_schemas: HashMap<String, serde_json::Value>,
}

/// A submission that has been admitted and logged but not yet sent.
#[derive(Clone, Debug)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub payload: GraphRequest,
}

/// State behind the connections page: slot assignment, submission log,
/// instruction text, and the in-flight guard that serializes submissions.
#[derive(Clone)]
pub struct ConnectionWorkflow {
    catalog: ServiceCatalog,
    slots: SlotAssignments,
    log: SubmissionLog,
    instruction: String,
    in_flight: bool,
}

impl ConnectionWorkflow {
    pub fn new(catalog: ServiceCatalog) -> Self {
        Self {
            catalog,
            slots: SlotAssignments::new(),
            log: SubmissionLog::new(),
            instruction: String::new(),
            in_flight: false,
        }
    }

    pub fn services(&self) -> &[ServiceToken] {
        self.catalog.services()
    }

    pub fn slots(&self) -> &SlotAssignments {
        &self.slots
    }

    pub fn log(&self) -> &SubmissionLog {
        &self.log
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn set_instruction(&mut self, text: &str) {
        self.instruction = text.to_string();
    }

    /// Place a token on the canvas, or retrieve it if it is already there.
    pub fn toggle_token(&mut self, token: &ServiceToken) {
        if self.slots.is_placed(&token.id) {
            self.slots.remove(&token.id);
        } else {
            self.slots.place(token.clone());
        }
    }

    /// The Clear action: empties the canvas and the instruction input.
    pub fn clear_canvas(&mut self) {
        self.slots.clear();
        self.instruction.clear();
    }

    /// Delete a log entry. Allowed at any time, including while its
    /// submission is still in flight.
    pub fn delete_entry(&mut self, id: SubmissionId) {
        self.log.remove(id);
    }

    /// Whether a submission would be admitted right now.
    pub fn can_submit(&self) -> bool {
        self.slots.is_complete() && !self.instruction.trim().is_empty() && !self.in_flight
    }

    /// Admit a submission: raises the in-flight guard, logs a `Running`
    /// entry for the trimmed instruction, and builds the wire payload.
    /// Returns `None` without touching any state when a precondition fails
    /// (slots incomplete, blank instruction, or a submission already in
    /// flight).
    pub fn begin_submission(&mut self) -> Option<PendingSubmission> {
        if !self.can_submit() {
            return None;
        }
        let (first, second) = self
            .slots
            .pair()
            .map(|(a, b)| (a.id.clone(), b.id.clone()))?;

        let prompt = self.instruction.trim().to_string();
        let payload = GraphRequest {
            prompt: prompt.clone(),
            app1: first.clone(),
            app2: second.clone(),
            app_schemas: HashMap::from([
                (first.clone(), self.catalog.schema_for(&first)),
                (second.clone(), self.catalog.schema_for(&second)),
            ]),
        };

        self.in_flight = true;
        let id = self.log.append(&prompt);
        Some(PendingSubmission { id, payload })
    }

    /// Reconcile the outcome of the remote call. The entry may have been
    /// deleted mid-flight, in which case the status update is a no-op. The
    /// instruction input is cleared only on success so a failed submission
    /// can be retried as typed. The guard is released either way.
    pub fn finish_submission(&mut self, id: SubmissionId, succeeded: bool) {
        let status = if succeeded {
            SubmissionStatus::Completed
        } else {
            SubmissionStatus::Failed
        };
        self.log.set_status(id, status);
        if succeeded {
            self.instruction.clear();
        }
        self.in_flight = false;
    }
}

impl Default for ConnectionWorkflow {
    fn default() -> Self {
        Self::new(ServiceCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::slots::Slot;

    fn workflow_with_pair() -> ConnectionWorkflow {
        let mut w = ConnectionWorkflow::default();
        let services: Vec<_> = w.services().to_vec();
        for token in &services {
            w.toggle_token(token);
        }
        w
    }

    #[test]
    fn test_submit_requires_both_slots() {
        let mut w = ConnectionWorkflow::default();
        w.set_instruction("do thing");
        assert!(w.begin_submission().is_none());
        assert!(w.log().entries().is_empty());

        let token = w.services()[0].clone();
        w.toggle_token(&token);
        assert!(w.begin_submission().is_none());
        assert!(w.log().entries().is_empty());
    }

    #[test]
    fn test_submit_rejects_blank_instruction() {
        let mut w = workflow_with_pair();
        w.set_instruction("   ");
        assert!(w.begin_submission().is_none());
        assert!(w.log().entries().is_empty());
        assert!(!w.in_flight());
    }

    #[test]
    fn test_submit_is_single_flight() {
        let mut w = workflow_with_pair();
        w.set_instruction("do thing");

        let first = w.begin_submission();
        assert!(first.is_some());

        // Re-entrant submit while the first is unresolved is rejected and
        // appends nothing.
        let second = w.begin_submission();
        assert!(second.is_none());
        assert_eq!(w.log().entries().len(), 1);
    }

    #[test]
    fn test_successful_cycle_completes_entry_and_clears_input() {
        let mut w = workflow_with_pair();
        assert!(w.slots().is_complete());
        assert_eq!(w.slots().token_in(Slot::First).unwrap().id, "left-api");
        assert_eq!(w.slots().token_in(Slot::Second).unwrap().id, "right-api");

        w.set_instruction("do thing");
        let pending = w.begin_submission().expect("preconditions hold");
        assert_eq!(w.log().entries()[0].status, SubmissionStatus::Running);
        assert!(w.in_flight());

        w.finish_submission(pending.id, true);
        assert_eq!(w.log().entries()[0].status, SubmissionStatus::Completed);
        assert_eq!(w.instruction(), "");
        assert!(!w.in_flight());
    }

    #[test]
    fn test_failed_cycle_keeps_instruction_for_retry() {
        let mut w = workflow_with_pair();
        w.set_instruction("do thing");

        let pending = w.begin_submission().expect("preconditions hold");
        w.finish_submission(pending.id, false);

        assert_eq!(w.log().entries()[0].status, SubmissionStatus::Failed);
        assert_eq!(w.instruction(), "do thing");
        assert!(!w.in_flight());
        assert!(w.can_submit());
    }

    #[test]
    fn test_entry_deleted_mid_flight_is_safe() {
        let mut w = workflow_with_pair();
        w.set_instruction("do thing");

        let pending = w.begin_submission().expect("preconditions hold");
        w.delete_entry(pending.id);

        w.finish_submission(pending.id, true);
        assert!(w.log().entries().is_empty());
        assert!(!w.in_flight());
        assert_eq!(w.instruction(), "");
    }

    #[test]
    fn test_payload_wire_format() {
        let mut w = workflow_with_pair();
        w.set_instruction("  sync my calendar  ");

        let pending = w.begin_submission().expect("preconditions hold");
        let json = serde_json::to_value(&pending.payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "prompt": "sync my calendar",
                "app1": "left-api",
                "app2": "right-api",
                "app_schemas": { "left-api": {}, "right-api": {} },
            })
        );
    }

    #[test]
    fn test_clear_canvas_resets_slots_and_instruction() {
        let mut w = workflow_with_pair();
        w.set_instruction("do thing");
        w.clear_canvas();

        assert!(!w.slots().is_complete());
        assert_eq!(w.instruction(), "");
        assert!(w.begin_submission().is_none());
    }

    #[test]
    fn test_toggle_places_then_retrieves() {
        let mut w = ConnectionWorkflow::default();
        let token = w.services()[0].clone();

        w.toggle_token(&token);
        assert!(w.slots().is_placed(&token.id));

        w.toggle_token(&token);
        assert!(!w.slots().is_placed(&token.id));
    }
}
