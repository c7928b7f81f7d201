//! Reading and sizing whitespace-separated edge lists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use union_find::{DenseId, define_node_id};

define_node_id!(pub Node, u64, "a node in the input graph");

/// An edge between two nodes of the input graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub source: Node,
    pub target: Node,
}

#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("IO error: {}: {1}", .0.display())]
    Io(PathBuf, std::io::Error),
    #[error("{}:{1}: expected two node ids, got {2:?}", .0.display())]
    MalformedLine(PathBuf, usize, String),
    #[error("{}:{1}: bad node id {2:?}", .0.display())]
    BadId(PathBuf, usize, String),
    #[error("{}:{1}: node id {2} does not fit in a dense node table", .0.display())]
    IdOverflow(PathBuf, usize, u64),
}

/// An in-memory edge list plus the number of nodes it spans.
///
/// The node count is one past the largest id any edge mentions, or zero for
/// an empty list. The forest engines index nodes densely, so this count is
/// exactly the parent-array size the driver allocates.
#[derive(Clone, Debug)]
pub struct EdgeList {
    edges: Vec<Edge>,
    node_count: u64,
}

impl EdgeList {
    /// Read an edge list from the file at `path`.
    ///
    /// Every line must hold exactly two whitespace-separated decimal ids.
    /// There is no comment or blank-line syntax; anything else is an error
    /// naming the offending line.
    pub fn read_text(path: impl AsRef<Path>) -> Result<EdgeList, EdgeListError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| EdgeListError::Io(path.to_path_buf(), err))?;
        let mut edges = Vec::new();
        let mut node_count = 0u64;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|err| EdgeListError::Io(path.to_path_buf(), err))?;
            let edge = parse_line(path, index + 1, &line)?;
            node_count = node_count.max(edge.source.rep().max(edge.target.rep()) + 1);
            edges.push(edge);
        }
        Ok(EdgeList { edges, node_count })
    }

    /// Build an edge list from in-memory pairs, inferring the node count the
    /// same way [`EdgeList::read_text`] does.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, u64)>) -> EdgeList {
        let mut edges = Vec::new();
        let mut node_count = 0u64;
        for (source, target) in pairs {
            assert!(
                source < usize::MAX as u64 && target < usize::MAX as u64,
                "node id does not fit in a dense node table"
            );
            node_count = node_count.max(source.max(target) + 1);
            edges.push(Edge {
                source: Node::new(source),
                target: Node::new(target),
            });
        }
        EdgeList { edges, node_count }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// One past the largest node id mentioned by any edge.
    pub fn node_count(&self) -> u64 {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn parse_line(path: &Path, line_no: usize, line: &str) -> Result<Edge, EdgeListError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(source), Some(target), None) => Ok(Edge {
            source: parse_id(path, line_no, source)?,
            target: parse_id(path, line_no, target)?,
        }),
        _ => Err(EdgeListError::MalformedLine(
            path.to_path_buf(),
            line_no,
            line.to_string(),
        )),
    }
}

fn parse_id(path: &Path, line_no: usize, token: &str) -> Result<Node, EdgeListError> {
    let id: u64 = token
        .parse()
        .map_err(|_| EdgeListError::BadId(path.to_path_buf(), line_no, token.to_string()))?;
    // The id must index a parent array, and the count is one past the id.
    if id >= usize::MAX as u64 {
        return Err(EdgeListError::IdOverflow(path.to_path_buf(), line_no, id));
    }
    Ok(Node::new(id))
}
