//! Newtyped dense node ids and the atomic slots that back their parent
//! arrays.

use std::hash::Hash;
use std::sync::atomic::{AtomicU32, AtomicU64, AtomicUsize, Ordering};

/// A trait describing "newtypes" that wrap an integer and index densely into
/// a forest's parent array.
///
/// Ids double as parent *values*: the Rem-family engines compare them with
/// `Ord` to enforce the rule that a root is only ever attached under a
/// strictly larger value.
pub trait DenseId:
    Copy + Clone + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + 'static
{
    type Rep: Copy + Eq + Ord;
    type Atomic: AtomicInt<Underlying = Self::Rep>;
    fn new(rep: Self::Rep) -> Self;
    fn from_usize(index: usize) -> Self;
    fn index(self) -> usize;
    fn rep(self) -> Self::Rep;
}

impl DenseId for usize {
    type Rep = usize;
    type Atomic = AtomicUsize;
    fn new(rep: usize) -> Self {
        rep
    }
    fn from_usize(index: usize) -> Self {
        index
    }
    fn index(self) -> usize {
        self
    }
    fn rep(self) -> usize {
        self
    }
}

/// A simple trait used to abstract over atomic integer types.
///
/// This lets the concurrent engines be written once per discipline rather
/// than once per id width, and it centralizes the memory orderings of choice
/// in one place.
pub trait AtomicInt: Send + Sync + 'static {
    type Underlying: Copy + Eq + Ord;
    fn from_usize(value: usize) -> Self;
    fn load(&self) -> Self::Underlying;
    fn store(&self, value: Self::Underlying);
    fn cas(
        &self,
        current: Self::Underlying,
        new: Self::Underlying,
    ) -> Result<Self::Underlying, Self::Underlying>;
    fn get_mut(&mut self) -> &mut Self::Underlying;
    fn into_inner(self) -> Self::Underlying;
}

impl AtomicInt for AtomicU32 {
    type Underlying = u32;
    fn from_usize(value: usize) -> Self {
        AtomicU32::new(u32::try_from(value).expect("usize doesn't fit in u32"))
    }
    fn load(&self) -> u32 {
        self.load(LOAD_ORDERING)
    }
    fn store(&self, value: u32) {
        self.store(value, STORE_ORDERING);
    }
    fn cas(&self, current: u32, new: u32) -> Result<u32, u32> {
        self.compare_exchange(current, new, CAS_SUCCESS_ORDERING, CAS_FAILURE_ORDERING)
    }
    fn get_mut(&mut self) -> &mut u32 {
        self.get_mut()
    }
    fn into_inner(self) -> u32 {
        self.into_inner()
    }
}

impl AtomicInt for AtomicU64 {
    type Underlying = u64;
    fn from_usize(value: usize) -> Self {
        AtomicU64::new(value as u64)
    }
    fn load(&self) -> u64 {
        self.load(LOAD_ORDERING)
    }
    fn store(&self, value: u64) {
        self.store(value, STORE_ORDERING);
    }
    fn cas(&self, current: u64, new: u64) -> Result<u64, u64> {
        self.compare_exchange(current, new, CAS_SUCCESS_ORDERING, CAS_FAILURE_ORDERING)
    }
    fn get_mut(&mut self) -> &mut u64 {
        self.get_mut()
    }
    fn into_inner(self) -> u64 {
        self.into_inner()
    }
}

impl AtomicInt for AtomicUsize {
    type Underlying = usize;
    fn from_usize(value: usize) -> Self {
        AtomicUsize::new(value)
    }
    fn load(&self) -> usize {
        self.load(LOAD_ORDERING)
    }
    fn store(&self, value: usize) {
        self.store(value, STORE_ORDERING);
    }
    fn cas(&self, current: usize, new: usize) -> Result<usize, usize> {
        self.compare_exchange(current, new, CAS_SUCCESS_ORDERING, CAS_FAILURE_ORDERING)
    }
    fn get_mut(&mut self) -> &mut usize {
        self.get_mut()
    }
    fn into_inner(self) -> usize {
        self.into_inner()
    }
}

// Every parent-slot access runs relaxed. The merge loops tolerate stale
// parent values by construction: a splice only ever rewrites a pointer with
// a value read from further along a chain, promotions either re-validate
// under a stripe lock or compare-exchange against the value they read, and
// the serial phases touch the slots only after the worker threads have been
// joined.
const STORE_ORDERING: Ordering = Ordering::Relaxed;
const LOAD_ORDERING: Ordering = Ordering::Relaxed;
const CAS_SUCCESS_ORDERING: Ordering = Ordering::Relaxed;
const CAS_FAILURE_ORDERING: Ordering = Ordering::Relaxed;

#[macro_export]
#[doc(hidden)]
macro_rules! atomic_of {
    (usize) => {
        std::sync::atomic::AtomicUsize
    };
    (u32) => {
        std::sync::atomic::AtomicU32
    };
    (u64) => {
        std::sync::atomic::AtomicU64
    };
}

/// Define a newtyped node id over the given integer representation.
///
/// The generated type implements [`DenseId`] and can therefore index any of
/// the forest engines in this crate.
#[macro_export]
macro_rules! define_node_id {
    ($v:vis $name:ident, $repr:tt, $doc:tt) => {
        #[derive(Copy, Clone)]
        #[doc = $doc]
        $v struct $name {
            rep: $repr,
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.rep == other.rep
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.rep.cmp(&other.rep)
            }
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.rep.hash(state);
            }
        }

        impl $name {
            #[allow(unused)]
            $v const fn new_const(id: $repr) -> Self {
                $name { rep: id }
            }
        }

        impl $crate::DenseId for $name {
            type Rep = $repr;
            type Atomic = $crate::atomic_of!($repr);
            fn new(id: $repr) -> Self {
                Self::new_const(id)
            }
            fn from_usize(index: usize) -> Self {
                assert!(
                    <$repr>::MAX as usize >= index,
                    "overflowing id type {} (represented as {}) with index {}",
                    stringify!($name),
                    stringify!($repr),
                    index
                );
                $name::new(index as $repr)
            }
            fn index(self) -> usize {
                self.rep as usize
            }
            fn rep(self) -> $repr {
                self.rep
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(fmt, "{}({:?})", stringify!($name), self.rep)
            }
        }
    };
}
