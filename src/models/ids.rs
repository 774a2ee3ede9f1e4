//! Sequential employee id allocation.

use std::sync::atomic::{AtomicU32, Ordering};

use super::EmployeeId;

/// First id handed out by a fresh allocator.
const FIRST_ID: u32 = 1;

/// Monotonic id counter.
///
/// Every [`Employee::new`](super::Employee::new) draws the next id. Records
/// loaded with their own ids call [`observe`](Self::observe) so the counter
/// always stays above every id it has seen. There is no reset.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU32,
}

impl IdAllocator {
    /// Creates an allocator whose first id is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU32::new(FIRST_ID),
        }
    }

    /// Creates an allocator whose first id is `next`.
    ///
    /// Used to stage a load without touching a live roster's counter.
    #[must_use]
    pub const fn starting_at(next: EmployeeId) -> Self {
        Self {
            next: AtomicU32::new(next.value()),
        }
    }

    /// Returns a fresh id and advances the counter.
    pub fn allocate(&self) -> EmployeeId {
        EmployeeId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Advances the counter to `max(next, id + 1)`.
    pub fn observe(&self, id: EmployeeId) {
        self.next
            .fetch_max(id.value().saturating_add(1), Ordering::Relaxed);
    }

    /// Returns the id the next allocation will hand out.
    #[must_use]
    pub fn peek(&self) -> EmployeeId {
        EmployeeId::new(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
