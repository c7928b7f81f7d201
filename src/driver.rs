//! The spanning-forest driver: strategy selection, worker dispatch, and the
//! run summary.

use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::str::FromStr;
use std::thread;

use concurrency::LockTable;
use union_find::concurrent::{LockedForest, SpeculativeForest};
use union_find::{DenseId, Forest, RemForest, UnionFind};

use crate::edgelist::{Edge, Node};

/// How the driver runs the merge engines over the edge stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
pub enum Strategy {
    /// The sequential find/union baseline.
    Sequential,
    /// Rem's algorithm, single-threaded.
    RemSequential,
    /// Parallel Rem's algorithm with lock-guarded root promotions.
    RemLockGuarded,
    /// Parallel Rem's algorithm with speculative merges and a serial repair
    /// pass.
    RemSpeculateRepair,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::RemSequential => write!(f, "rem-sequential"),
            Strategy::RemLockGuarded => write!(f, "rem-lock-guarded"),
            Strategy::RemSpeculateRepair => write!(f, "rem-speculate-repair"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Strategy::Sequential),
            "rem-sequential" => Ok(Strategy::RemSequential),
            "rem-lock-guarded" => Ok(Strategy::RemLockGuarded),
            "rem-speculate-repair" => Ok(Strategy::RemSpeculateRepair),
            _ => Err(format!("Unknown strategy: {s}")),
        }
    }
}

/// The result of one driver run: how many edges extended the forest, which
/// edges they were, and the forest itself.
///
/// For the parallel strategies the edge list is each worker's discovery
/// order, concatenated. The count and the component structure are the same
/// on every run; the parent-pointer shape need not be.
pub struct ForestRun {
    pub merged: u64,
    pub edges: Vec<Edge>,
    pub forest: Forest<Node>,
}

impl ForestRun {
    /// Write the merged edges as `u v` lines in discovery order.
    pub fn write_edges(&self, writer: &mut impl Write) -> io::Result<()> {
        for edge in &self.edges {
            writeln!(writer, "{} {}", edge.source.rep(), edge.target.rep())?;
        }
        Ok(())
    }
}

/// Compute a spanning forest of `edges` over the nodes `0..node_count`.
///
/// `node_count` must cover every id the edges mention. `worker_count` must be
/// at least 1; the sequential strategies ignore it.
pub fn compute_forest(
    node_count: u64,
    edges: &[Edge],
    strategy: Strategy,
    worker_count: usize,
) -> ForestRun {
    compute_forest_with_lock_stripes(
        node_count,
        edges,
        strategy,
        worker_count,
        LockTable::DEFAULT_STRIPES,
    )
}

/// [`compute_forest`] with an explicit stripe count for the lock-guarded
/// strategy's lock table. The other strategies take no locks and ignore it.
pub fn compute_forest_with_lock_stripes(
    node_count: u64,
    edges: &[Edge],
    strategy: Strategy,
    worker_count: usize,
    lock_stripes: usize,
) -> ForestRun {
    assert!(worker_count > 0, "a run needs at least one worker");
    assert!(
        usize::try_from(node_count).is_ok(),
        "node count {node_count} does not fit in a dense node table"
    );
    let len = node_count as usize;
    log::debug!(
        "computing forest: {node_count} nodes, {} edges, strategy {strategy}, {worker_count} workers",
        edges.len()
    );
    match strategy {
        Strategy::Sequential => sequential_run(UnionFind::new(len), edges),
        Strategy::RemSequential => sequential_run(RemForest::new(len), edges),
        Strategy::RemLockGuarded => locked_run(len, edges, worker_count, lock_stripes),
        Strategy::RemSpeculateRepair => speculative_run(len, edges, worker_count),
    }
}

trait SerialEngine {
    fn merge(&mut self, x: Node, y: Node) -> bool;
    fn into_forest(self) -> Forest<Node>;
}

impl SerialEngine for UnionFind<Node> {
    fn merge(&mut self, x: Node, y: Node) -> bool {
        UnionFind::merge(self, x, y)
    }

    fn into_forest(self) -> Forest<Node> {
        UnionFind::into_forest(self)
    }
}

impl SerialEngine for RemForest<Node> {
    fn merge(&mut self, x: Node, y: Node) -> bool {
        RemForest::merge(self, x, y)
    }

    fn into_forest(self) -> Forest<Node> {
        RemForest::into_forest(self)
    }
}

fn sequential_run(mut engine: impl SerialEngine, edges: &[Edge]) -> ForestRun {
    let mut merged_edges = Vec::new();
    for edge in edges {
        if engine.merge(edge.source, edge.target) {
            merged_edges.push(*edge);
        }
    }
    ForestRun {
        merged: merged_edges.len() as u64,
        edges: merged_edges,
        forest: engine.into_forest(),
    }
}

fn locked_run(len: usize, edges: &[Edge], worker_count: usize, lock_stripes: usize) -> ForestRun {
    let forest = LockedForest::with_lock_stripes(len, lock_stripes);
    let chunk_size = edges.len().div_ceil(worker_count).max(1);
    let mut buffers: Vec<Vec<Edge>> = vec![Vec::new(); worker_count];
    thread::scope(|scope| {
        for (chunk, buffer) in edges.chunks(chunk_size).zip(&mut buffers) {
            let forest = &forest;
            scope.spawn(move || {
                for edge in chunk {
                    if forest.merge(edge.source, edge.target) {
                        buffer.push(*edge);
                    }
                }
                log::debug!("worker merged {} of {} edges", buffer.len(), chunk.len());
            });
        }
    });
    let merged_edges: Vec<Edge> = buffers.into_iter().flatten().collect();
    ForestRun {
        merged: merged_edges.len() as u64,
        edges: merged_edges,
        forest: forest.into_forest(),
    }
}

fn speculative_run(len: usize, edges: &[Edge], worker_count: usize) -> ForestRun {
    let mut forest = SpeculativeForest::new(len);
    let chunk_size = edges.len().div_ceil(worker_count).max(1);
    let mut buffers: Vec<Vec<Edge>> = vec![Vec::new(); worker_count];
    thread::scope(|scope| {
        for (chunk, buffer) in edges.chunks(chunk_size).zip(&mut buffers) {
            let forest = &forest;
            scope.spawn(move || {
                for edge in chunk {
                    if forest.speculate(edge.source, edge.target) {
                        buffer.push(*edge);
                    }
                }
                log::debug!("worker staged {} of {} edges", buffer.len(), chunk.len());
            });
        }
    });
    let merged = forest.accepted();
    let merged_edges: Vec<Edge> = buffers.into_iter().flatten().collect();
    debug_assert_eq!(merged, merged_edges.len() as u64);
    log::debug!("repairing forest structure from {merged} staged edges");
    forest.repair(merged_edges.iter().map(|edge| (edge.source, edge.target)));
    ForestRun {
        merged,
        edges: merged_edges,
        forest: forest.into_forest(),
    }
}
