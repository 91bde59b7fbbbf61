use super::models::{AvailabilitySlot, NewSlot};

/// In-memory collection of the current user's availability slots
#[derive(Debug, Clone, Default)]
pub struct AvailabilityStore {
    slots: Vec<AvailabilitySlot>,
}

impl AvailabilityStore {
    /// Create a store from whatever slots the session starts with
    pub fn new(initial: Vec<AvailabilitySlot>) -> Self {
        Self { slots: initial }
    }

    /// Append a slot with a fresh id and return the stored copy.
    ///
    /// Input is accepted as-is: times are not range-checked and overlapping
    /// slots on the same date are allowed.
    pub fn add(&mut self, slot: NewSlot) -> AvailabilitySlot {
        let stored =
            AvailabilitySlot::new(slot.date, slot.start_time, slot.end_time, slot.title);
        self.slots.push(stored.clone());
        stored
    }

    /// Remove the slot with the given id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.slots.retain(|slot| slot.id != id);
    }

    /// All slots in insertion order
    pub fn list(&self) -> &[AvailabilitySlot] {
        &self.slots
    }
}
