//! The shared parent array.

use crate::id::AtomicInt;
use crate::DenseId;

/// One atomic parent slot per node, shared by every worker of a parallel
/// merge phase.
///
/// All slot accesses run relaxed; the ordering constants live next to
/// [`AtomicInt`]. The `get`/`set` pair is for serial phases that hold the
/// array exclusively and can skip atomic instructions altogether.
pub(crate) struct AtomicParents<Value: DenseId> {
    slots: Box<[Value::Atomic]>,
}

impl<Value: DenseId> AtomicParents<Value> {
    /// Create an array of `len` slots, each node its own parent.
    pub(crate) fn new(len: usize) -> AtomicParents<Value> {
        let slots: Vec<Value::Atomic> = (0..len).map(<Value::Atomic>::from_usize).collect();
        AtomicParents {
            slots: slots.into_boxed_slice(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn load(&self, id: Value) -> Value {
        Value::new(self.slots[id.index()].load())
    }

    pub(crate) fn store(&self, id: Value, parent: Value) {
        self.slots[id.index()].store(parent.rep());
    }

    /// Replace `id`'s parent with `new` if it is still `current`; a failure
    /// hands back the value that got there first.
    pub(crate) fn cas(&self, id: Value, current: Value, new: Value) -> Result<Value, Value> {
        self.slots[id.index()]
            .cas(current.rep(), new.rep())
            .map(Value::new)
            .map_err(Value::new)
    }

    pub(crate) fn get(&mut self, id: Value) -> Value {
        Value::new(*self.slots[id.index()].get_mut())
    }

    pub(crate) fn set(&mut self, id: Value, parent: Value) {
        *self.slots[id.index()].get_mut() = parent.rep();
    }

    pub(crate) fn into_parents(self) -> Vec<Value> {
        self.slots
            .into_vec()
            .into_iter()
            .map(|slot| Value::new(slot.into_inner()))
            .collect()
    }
}
