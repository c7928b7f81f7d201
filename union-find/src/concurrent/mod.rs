//! Concurrent merge engines over a shared array of atomic parent slots.
//!
//! Both engines here parallelize the merge loop of [`crate::RemForest`];
//! they differ in how a root promotion, the one structural step, is allowed
//! to land:
//!
//! * [`LockedForest`] re-validates each promotion under a striped lock, so
//!   every reported merge is real and per-worker tallies sum to the exact
//!   forest size.
//! * [`SpeculativeForest`] promotes with a bare compare-exchange and asks
//!   callers to stage the edges it accepts; a serial replay pass afterwards
//!   re-establishes the structure the accepted edges imply.
//!
//! Splice steps take no locks in either engine. A splice overwrites a parent
//! pointer with a value read from further along a chain, and the walker that
//! wrote it continues from the value it replaced, so a stale splice can
//! leave chains longer than ideal but cannot disconnect them or form a
//! cycle.

mod locked;
mod parents;
mod speculative;


pub use locked::LockedForest;
pub use speculative::SpeculativeForest;
