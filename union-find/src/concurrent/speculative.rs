//! The speculate-then-repair engine: no locks in the parallel phase, then a
//! serial replay.

use std::sync::atomic::{AtomicU64, Ordering};

use super::parents::AtomicParents;
use crate::{DenseId, Forest};

/// A parallel Rem merge with no promotion guard at all.
///
/// During the parallel phase, workers call [`speculate`] and keep every edge
/// it accepts in a buffer of their own. Every parent-slot write in that
/// phase is a relaxed compare-exchange against the value the walker last
/// read; a failed exchange is absorbed as forward progress, never retried in
/// place. A successful promotion bumps the shared accepted-edge counter, and
/// that counter is the forest size the engine reports.
///
/// After the workers are joined, [`repair`] replays all the buffered edges
/// through a serial merge, restoring the structure the accepted edges imply.
/// The repair pass does not count; [`accepted`] keeps the value from the
/// parallel phase.
///
/// [`speculate`]: SpeculativeForest::speculate
/// [`repair`]: SpeculativeForest::repair
/// [`accepted`]: SpeculativeForest::accepted
pub struct SpeculativeForest<Value: DenseId> {
    parents: AtomicParents<Value>,
    accepted: AtomicU64,
}

impl<Value: DenseId> SpeculativeForest<Value> {
    /// Create a forest over `len` nodes, each its own singleton component.
    pub fn new(len: usize) -> SpeculativeForest<Value> {
        SpeculativeForest {
            parents: AtomicParents::new(len),
            accepted: AtomicU64::new(0),
        }
    }

    /// The number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of merges accepted so far.
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    /// Racy merge of the components containing `x` and `y`. Returns whether
    /// this call took credit for joining two components; if it did, the
    /// caller must hold on to the edge and feed it to [`repair`] later.
    ///
    /// [`repair`]: SpeculativeForest::repair
    pub fn speculate(&self, x: Value, y: Value) -> bool {
        let mut x = x;
        let mut y = y;
        loop {
            let x_parent = self.parents.load(x);
            let y_parent = self.parents.load(y);
            if x_parent == y_parent {
                return false;
            }
            if x_parent < y_parent {
                if x == x_parent {
                    match self.parents.cas(x, x_parent, y_parent) {
                        Ok(_) => {
                            self.accepted.fetch_add(1, Ordering::Relaxed);
                            return true;
                        }
                        // Lost the promotion race; walk on from the
                        // winner's value.
                        Err(current) => x = current,
                    }
                } else {
                    // A failure means another walker already moved this
                    // slot; the chain got shorter either way.
                    let _ = self.parents.cas(x, x_parent, y_parent);
                    x = x_parent;
                }
            } else if y == y_parent {
                match self.parents.cas(y, y_parent, x_parent) {
                    Ok(_) => {
                        self.accepted.fetch_add(1, Ordering::Relaxed);
                        return true;
                    }
                    Err(current) => y = current,
                }
            } else {
                let _ = self.parents.cas(y, y_parent, x_parent);
                y = y_parent;
            }
        }
    }

    /// Replay staged edges through a serial merge.
    ///
    /// The exclusive receiver means the worker threads are gone, so slot
    /// access drops to plain reads and writes.
    pub fn repair(&mut self, staged: impl IntoIterator<Item = (Value, Value)>) {
        for (x, y) in staged {
            self.merge_serial(x, y);
        }
    }

    fn merge_serial(&mut self, x: Value, y: Value) {
        let mut x = x;
        let mut y = y;
        loop {
            let x_parent = self.parents.get(x);
            let y_parent = self.parents.get(y);
            if x_parent == y_parent {
                return;
            }
            if x_parent < y_parent {
                if x == x_parent {
                    self.parents.set(x, y_parent);
                    return;
                }
                self.parents.set(x, y_parent);
                x = x_parent;
            } else {
                if y == y_parent {
                    self.parents.set(y, x_parent);
                    return;
                }
                self.parents.set(y, x_parent);
                y = y_parent;
            }
        }
    }

    /// Freeze the forest for queries. Run [`repair`] first.
    ///
    /// [`repair`]: SpeculativeForest::repair
    pub fn into_forest(self) -> Forest<Value> {
        Forest::from_parents(self.parents.into_parents())
    }
}
