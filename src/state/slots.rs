//! Slot Assignment Store
//!
//! Tracks which service tokens occupy the two connection slots.

use serde::{Deserialize, Serialize};

/// A connectable external service, as supplied by the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceToken {
    pub id: String,
    pub name: String,
}

impl ServiceToken {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// One of the two fixed positions a token can occupy on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

/// Authoritative mapping from slots to tokens.
///
/// Membership queries read the slot contents directly; there is no separate
/// placed-set that could drift out of sync with them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotAssignments {
    first: Option<ServiceToken>,
    second: Option<ServiceToken>,
}

impl SlotAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot the next placement goes to: the first empty slot in
    /// enumeration order, or `None` when both are occupied.
    pub fn target_slot(&self) -> Option<Slot> {
        if self.first.is_none() {
            Some(Slot::First)
        } else if self.second.is_none() {
            Some(Slot::Second)
        } else {
            None
        }
    }

    /// Place a token into the first empty slot. Placing a token that is
    /// already on the canvas, or placing while both slots are full, is a
    /// no-op.
    pub fn place(&mut self, token: ServiceToken) {
        if self.is_placed(&token.id) {
            return;
        }
        match self.target_slot() {
            Some(Slot::First) => self.first = Some(token),
            Some(Slot::Second) => self.second = Some(token),
            None => {}
        }
    }

    /// Remove the token with the given id from whichever slot holds it.
    /// Unknown ids are ignored.
    pub fn remove(&mut self, token_id: &str) {
        if self.first.as_ref().is_some_and(|t| t.id == token_id) {
            self.first = None;
        } else if self.second.as_ref().is_some_and(|t| t.id == token_id) {
            self.second = None;
        }
    }

    /// Empty both slots.
    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }

    pub fn is_placed(&self, token_id: &str) -> bool {
        self.placed().any(|(_, t)| t.id == token_id)
    }

    /// True once both slots are occupied.
    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    pub fn token_in(&self, slot: Slot) -> Option<&ServiceToken> {
        match slot {
            Slot::First => self.first.as_ref(),
            Slot::Second => self.second.as_ref(),
        }
    }

    /// Both tokens, first then second, once the assignment is complete.
    pub fn pair(&self) -> Option<(&ServiceToken, &ServiceToken)> {
        Some((self.token_in(Slot::First)?, self.token_in(Slot::Second)?))
    }

    /// Tokens currently placed, in slot order.
    pub fn placed(&self) -> impl Iterator<Item = (Slot, &ServiceToken)> {
        [(Slot::First, &self.first), (Slot::Second, &self.second)]
            .into_iter()
            .filter_map(|(slot, token)| token.as_ref().map(|t| (slot, t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: &str) -> ServiceToken {
        ServiceToken::new(id, id)
    }

    #[test]
    fn test_place_fills_slots_in_order() {
        let mut slots = SlotAssignments::new();
        slots.place(token("a"));
        slots.place(token("b"));

        assert_eq!(slots.token_in(Slot::First).unwrap().id, "a");
        assert_eq!(slots.token_in(Slot::Second).unwrap().id, "b");
        assert!(slots.is_complete());
    }

    #[test]
    fn test_target_slot_is_first_empty_in_order() {
        let mut slots = SlotAssignments::new();
        assert_eq!(slots.target_slot(), Some(Slot::First));

        slots.place(token("a"));
        assert_eq!(slots.target_slot(), Some(Slot::Second));

        slots.place(token("b"));
        assert_eq!(slots.target_slot(), None);

        // Freeing the first slot makes it the target again even though the
        // second is still occupied.
        slots.remove("a");
        assert_eq!(slots.target_slot(), Some(Slot::First));
    }

    #[test]
    fn test_place_is_idempotent() {
        let mut slots = SlotAssignments::new();
        slots.place(token("a"));
        let before = slots.clone();

        slots.place(token("a"));
        assert_eq!(slots, before);
        assert_eq!(slots.placed().count(), 1);
    }

    #[test]
    fn test_third_token_is_rejected() {
        let mut slots = SlotAssignments::new();
        slots.place(token("a"));
        slots.place(token("b"));
        slots.place(token("c"));

        assert!(!slots.is_placed("c"));
        assert_eq!(slots.placed().count(), 2);
        assert_eq!(slots.token_in(Slot::First).unwrap().id, "a");
        assert_eq!(slots.token_in(Slot::Second).unwrap().id, "b");
    }

    #[test]
    fn test_token_never_occupies_both_slots() {
        let mut slots = SlotAssignments::new();
        slots.place(token("a"));
        slots.place(token("a"));

        let ids: Vec<_> = slots.placed().map(|(_, t)| t.id.clone()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn test_remove_unplaced_is_noop() {
        let mut slots = SlotAssignments::new();
        slots.place(token("a"));
        let before = slots.clone();

        slots.remove("b");
        assert_eq!(slots, before);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut slots = SlotAssignments::new();
        slots.place(token("a"));
        slots.place(token("b"));
        slots.clear();

        assert!(!slots.is_complete());
        assert!(!slots.is_placed("a"));
        assert!(!slots.is_placed("b"));
        assert_eq!(slots.placed().count(), 0);
    }

    #[test]
    fn test_membership_matches_slot_contents() {
        let mut slots = SlotAssignments::new();
        slots.place(token("a"));
        slots.place(token("b"));
        slots.remove("a");
        slots.place(token("c"));

        // "c" takes the freed first slot; "b" stays put.
        assert_eq!(slots.token_in(Slot::First).unwrap().id, "c");
        assert_eq!(slots.token_in(Slot::Second).unwrap().id, "b");
        assert!(slots.is_placed("b"));
        assert!(slots.is_placed("c"));
        assert!(!slots.is_placed("a"));
    }
}
