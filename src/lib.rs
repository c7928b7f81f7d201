//! # remspan
//! remspan computes spanning forests of edge streams: feed it a list of
//! `u v` pairs and it reports which edges connected two previously separate
//! components, plus the forest that results.
//!
//! Four merge strategies share one driver: the classic find/union baseline,
//! Rem's single-pass algorithm, and two parallel renditions of Rem's
//! algorithm over atomic parent slots. One of those guards its root
//! promotions with a striped lock table; the other runs speculatively and
//! repairs the forest structure serially afterwards. All four report the
//! same merged-edge count over the same input.
//!
//! The library entry point is [`compute_forest`]; the `remspan` binary wraps
//! it behind a small CLI.

pub mod cli;
mod driver;
mod edgelist;

pub use driver::{ForestRun, Strategy, compute_forest, compute_forest_with_lock_stripes};
pub use edgelist::{Edge, EdgeList, EdgeListError, Node};
pub use union_find::{DenseId, Forest};
