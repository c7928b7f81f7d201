//! Read-side queries over a finished forest.

use crate::DenseId;

/// A frozen parent array, produced by a merge engine once its edge stream is
/// exhausted.
///
/// The engines answer no queries while merging; lookups happen here, after
/// the last merge. The stored pointers are not guaranteed flat (the Rem
/// family leaves chains behind), so the lookups walk to a root and compress
/// as they go.
pub struct Forest<Value> {
    parents: Vec<Value>,
}

impl<Value: DenseId> Forest<Value> {
    pub(crate) fn from_parents(parents: Vec<Value>) -> Forest<Value> {
        Forest { parents }
    }

    /// The number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// The stored parent of `id`, without walking the chain.
    pub fn parent(&self, id: Value) -> Value {
        self.parents[id.index()]
    }

    /// The root of `id`'s component. Compresses the path it walks.
    pub fn root_of(&mut self, id: Value) -> Value {
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

    /// Whether `x` and `y` ended up in the same component.
    pub fn same_component(&mut self, x: Value, y: Value) -> bool {
        self.root_of(x) == self.root_of(y)
    }

    /// The number of components, counted as the number of roots.
    pub fn component_count(&self) -> u64 {
        self.parents
            .iter()
            .enumerate()
            .filter(|(i, parent)| **parent == Value::from_usize(*i))
            .count() as u64
    }
}
