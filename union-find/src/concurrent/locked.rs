//! The lock-guarded engine: root promotions re-validate under a striped
//! lock.

use concurrency::LockTable;

use super::parents::AtomicParents;
use crate::{DenseId, Forest};

/// A parallel Rem merge whose root promotions are guarded by a lock table.
///
/// Workers share the engine by reference and call [`merge`] concurrently
/// over disjoint slices of the edge stream. Splices run unsynchronized. A
/// promotion takes the stripe lock covering the root, re-reads the slot, and
/// writes only if the node is still its own parent; a lost race is absorbed
/// as one more splice step rather than a restart. Every `true` return
/// corresponds to exactly one promotion that held the lock, so summing
/// per-worker `true` counts gives the exact number of forest edges.
///
/// [`merge`]: LockedForest::merge
pub struct LockedForest<Value: DenseId> {
    parents: AtomicParents<Value>,
    locks: LockTable,
}

impl<Value: DenseId> LockedForest<Value> {
    /// Create a forest over `len` nodes with the default stripe count.
    pub fn new(len: usize) -> LockedForest<Value> {
        Self::with_lock_stripes(len, LockTable::DEFAULT_STRIPES)
    }

    /// Create a forest over `len` nodes with at least `stripes` lock
    /// stripes.
    pub fn with_lock_stripes(len: usize, stripes: usize) -> LockedForest<Value> {
        LockedForest {
            parents: AtomicParents::new(len),
            locks: LockTable::new(stripes),
        }
    }

    /// The number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge the components containing `x` and `y`. Returns whether the edge
    /// joined two components that were previously separate.
    pub fn merge(&self, x: Value, y: Value) -> bool {
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
                    match self.promote(x, y_parent) {
                        Ok(()) => return true,
                        // Another worker re-parented `x` first; splice
                        // through its value and keep walking.
                        Err(current) => {
                            self.parents.store(x, y_parent);
                            x = current;
                        }
                    }
                } else {
                    self.parents.store(x, y_parent);
                    x = x_parent;
                }
            } else if y == y_parent {
                match self.promote(y, x_parent) {
                    Ok(()) => return true,
                    Err(current) => {
                        self.parents.store(y, x_parent);
                        y = current;
                    }
                }
            } else {
                self.parents.store(y, x_parent);
                y = y_parent;
            }
        }
    }

    /// Attach root `id` under `parent`, unless `id` stopped being a root by
    /// the time its stripe lock is held. On failure, returns the parent `id`
    /// has now.
    fn promote(&self, id: Value, parent: Value) -> Result<(), Value> {
        let _guard = self.locks.lock(id.index());
        let current = self.parents.load(id);
        if current == id {
            self.parents.store(id, parent);
            Ok(())
        } else {
            Err(current)
        }
    }

    /// Freeze the forest for queries.
    ///
    /// Callers must have joined every worker first; the conversion reads the
    /// slots non-atomically.
    pub fn into_forest(self) -> Forest<Value> {
        Forest::from_parents(self.parents.into_parents())
    }
}
