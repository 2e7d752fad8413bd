use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use campusboard_models::UserId;

/// Ids with an approve/reject call in flight.
///
/// Membership is tied to a [`ProcessingGuard`]: the id is added when the
/// guard is created and removed when it drops, whatever the outcome of the
/// call. Overlapping calls on the same id are counted, so the id stays marked
/// until the last of them settles.
#[derive(Debug, Default)]
pub struct ProcessingSet {
    in_flight: Mutex<HashMap<UserId, usize>>,
}

impl ProcessingSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<UserId, usize>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks `id` as processing until the returned guard drops.
    pub fn begin(&self, id: &UserId) -> ProcessingGuard<'_> {
        *self.lock().entry(id.clone()).or_insert(0) += 1;
        ProcessingGuard {
            set: self,
            id: id.clone(),
        }
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.lock().contains_key(id)
    }

    /// Processing ids in sorted order.
    pub fn snapshot(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn finish(&self, id: &UserId) {
        let mut in_flight = self.lock();
        if let Some(count) = in_flight.get_mut(id) {
            *count -= 1;
            if *count == 0 {
                in_flight.remove(id);
            }
        }
    }
}

#[must_use = "the id is released as soon as the guard drops"]
#[derive(Debug)]
pub struct ProcessingGuard<'a> {
    set: &'a ProcessingSet,
    id: UserId,
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.set.finish(&self.id);
    }
}
