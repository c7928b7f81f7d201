//! Rem's algorithm: merging by interleaved traversal and linking.
//!
//! Where the classic structure finds both roots and then links them, Rem's
//! variant walks the two parent chains in lockstep, always advancing the
//! side whose parent *value* is smaller, and links as a side effect of
//! walking. A merge can stop the moment the walkers see the same parent,
//! without reaching either root, and there is no rank array: the ordering
//! rule (a root is only ever attached under a strictly larger value) is what
//! keeps the forest acyclic. The splicing step follows the presentation in
//! "Experiments on Union-Find Algorithms for the Disjoint-Set Data
//! Structure" by Patwary, Blair, and Manne (SEA 2010).

use crate::{DenseId, Forest};

/// A sequential spanning forest built by Rem's merge.
pub struct RemForest<Value> {
    parents: Vec<Value>,
}

impl<Value: DenseId> RemForest<Value> {
    /// Create a forest over `len` nodes, each its own singleton component.
    pub fn new(len: usize) -> RemForest<Value> {
        RemForest {
            parents: (0..len).map(Value::from_usize).collect(),
        }
    }

    /// The number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Merge the components containing `x` and `y`. Returns whether the edge
    /// joined two components that were previously separate.
    ///
    /// Each iteration advances the walker whose parent value is smaller. If
    /// that walker sits on a root, attaching the root under the other side's
    /// larger value completes the merge; otherwise the walker's parent
    /// pointer is spliced up to the other side's value before advancing,
    /// which shortens the chain for later merges without changing which
    /// component any node belongs to.
    pub fn merge(&mut self, x: Value, y: Value) -> bool {
        let mut x = x;
        let mut y = y;
        loop {
            let x_parent = self.parents[x.index()];
            let y_parent = self.parents[y.index()];
            if x_parent == y_parent {
                return false;
            }
            if x_parent < y_parent {
                if x == x_parent {
                    // Root promotion: the one structural step.
                    self.parents[x.index()] = y_parent;
                    return true;
                }
                self.parents[x.index()] = y_parent;
                x = x_parent;
            } else {
                if y == y_parent {
                    self.parents[y.index()] = x_parent;
                    return true;
                }
                self.parents[y.index()] = x_parent;
                y = y_parent;
            }
        }
    }

    /// The same walk as [`merge`] with the splice left out: interior parent
    /// pointers are never rewritten, only root promotions write.
    ///
    /// Chains never shorten this way, so repeated merges re-walk them in
    /// full; this variant exists as the comparison point that shows what the
    /// splice buys.
    ///
    /// [`merge`]: RemForest::merge
    pub fn merge_no_splice(&mut self, x: Value, y: Value) -> bool {
        let mut x = x;
        let mut y = y;
        loop {
            let x_parent = self.parents[x.index()];
            let y_parent = self.parents[y.index()];
            if x_parent == y_parent {
                return false;
            }
            if x_parent < y_parent {
                if x == x_parent {
                    self.parents[x.index()] = y_parent;
                    return true;
                }
                x = x_parent;
            } else {
                if y == y_parent {
                    self.parents[y.index()] = x_parent;
                    return true;
                }
                y = y_parent;
            }
        }
    }

    /// Freeze the forest for queries.
    pub fn into_forest(self) -> Forest<Value> {
        Forest::from_parents(self.parents)
    }
}
