//! Disjoint-set forest engines for computing spanning forests of edge
//! streams.
//!
//! This crate contains four merge engines over the same parent-array data
//! model:
//!
//! * [`UnionFind`], the textbook structure: find with full path compression,
//!   union by rank.
//! * [`RemForest`], Rem's algorithm: the merge walks both parent chains at
//!   once and links as it goes, with no rank array and no separate find pass.
//! * [`concurrent::LockedForest`], a parallel Rem merge whose root
//!   promotions re-validate under a striped lock.
//! * [`concurrent::SpeculativeForest`], a parallel Rem merge with no locks
//!   at all, followed by a serial repair pass.
//!
//! The Rem-family engines all order the forest the same way: a root is only
//! ever attached under a strictly larger parent value, so chains increase
//! strictly and can never cycle. Engines answer no queries while merging; a
//! finished engine converts into a [`Forest`] for lookups.

pub mod concurrent;
mod forest;
mod id;
mod rem;

pub use forest::Forest;
pub use id::{AtomicInt, DenseId};
pub use rem::RemForest;

#[cfg(test)]
mod tests;

/// The classic sequential baseline: full path compression on find, union by
/// rank on merge.
///
/// This is the reference the other engines are measured against; whatever
/// they do internally, they must report the same merged-edge count over the
/// same stream.
pub struct UnionFind<Value> {
    parents: Vec<Value>,
    ranks: Vec<u8>,
}

impl<Value: DenseId + std::fmt::Debug> UnionFind<Value> {
    /// Create a forest over `len` nodes, each its own singleton component.
    pub fn new(len: usize) -> UnionFind<Value> {
        UnionFind {
            parents: (0..len).map(Value::from_usize).collect(),
            ranks: vec![0; len],
        }
    }

    /// The number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Find the representative of `id`'s component, relinking every node on
    /// the walked path directly to the root.
    ///
    /// Two iterative passes (walk to the root, then rewrite the path) keep
    /// stack use independent of chain depth.
    pub fn find(&mut self, id: Value) -> Value {
        let mut root = id;
        loop {
            let parent = self.parents[root.index()];
            if parent == root {
                break;
            }
            root = parent;
        }
        let mut cur = id;
        while cur != root {
            let parent = self.parents[cur.index()];
            self.parents[cur.index()] = root;
            cur = parent;
        }
        root
    }

    /// Link the components rooted at `x_root` and `y_root`, attaching the
    /// lower-rank root under the higher. Returns the surviving root.
    ///
    /// Both arguments must be roots.
    pub fn union(&mut self, x_root: Value, y_root: Value) -> Value {
        debug_assert_eq!(self.parents[x_root.index()], x_root);
        debug_assert_eq!(self.parents[y_root.index()], y_root);
        let x_rank = self.ranks[x_root.index()];
        let y_rank = self.ranks[y_root.index()];
        if x_rank < y_rank {
            self.parents[x_root.index()] = y_root;
            y_root
        } else {
            self.parents[y_root.index()] = x_root;
            if x_rank == y_rank {
                self.ranks[x_root.index()] += 1;
            }
            x_root
        }
    }

    /// Merge the components containing `x` and `y`. Returns whether the two
    /// were previously separate, that is, whether this edge extended the
    /// forest.
    pub fn merge(&mut self, x: Value, y: Value) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        self.union(x_root, y_root);
        true
    }

    /// Freeze the forest for queries.
    pub fn into_forest(self) -> Forest<Value> {
        Forest::from_parents(self.parents)
    }
}
