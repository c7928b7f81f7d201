//! A fixed pool of mutexes shared by the slots of a large array.

use std::sync::{Mutex, MutexGuard};

/// A striped lock table: a fixed, power-of-two number of mutexes indexed by
/// key.
///
/// Callers that need per-slot mutual exclusion over an array with millions of
/// entries map each slot to `key & mask` instead of paying for one mutex per
/// slot. Two keys that collide on a stripe exclude each other even though
/// they are distinct; a guard returned by [`lock`] therefore covers the
/// stripe, and the caller must re-check any slot state it read before taking
/// the lock.
///
/// [`lock`]: LockTable::lock
pub struct LockTable {
    stripes: Box<[Mutex<()>]>,
    mask: usize,
}

impl LockTable {
    /// The stripe count used by [`LockTable::default`].
    pub const DEFAULT_STRIPES: usize = 1024;

    /// Create a table with at least `stripes` stripes.
    ///
    /// The count is clamped to at least one and rounded up to the next power
    /// of two so stripe selection is a mask rather than a division.
    pub fn new(stripes: usize) -> LockTable {
        let n = stripes.max(1).next_power_of_two();
        let stripes: Vec<Mutex<()>> = (0..n).map(|_| Mutex::new(())).collect();
        LockTable {
            stripes: stripes.into_boxed_slice(),
            mask: n - 1,
        }
    }

    /// The number of stripes in the table.
    pub fn stripe_count(&self) -> usize {
        self.stripes.len()
    }

    /// Lock the stripe covering `key`, blocking until it is free.
    pub fn lock(&self, key: usize) -> MutexGuard<'_, ()> {
        self.stripes[key & self.mask].lock().unwrap()
    }
}

impl Default for LockTable {
    fn default() -> LockTable {
        LockTable::new(Self::DEFAULT_STRIPES)
    }
}
