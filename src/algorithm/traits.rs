use std::collections::{HashMap, HashSet};
use log::warn;
use serde::Serialize;

use crate::graph::{EdgeWeight, Graph, UNDEFINED};
use crate::Result;

/// Distance and predecessor tables for one source vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<W>
where
    W: EdgeWeight,
{
    /// Source vertex key
    pub source: String,

    /// Distance from source to each vertex, `W::infinity()` when unreached
    pub distances: HashMap<String, W>,

    /// Predecessor of each vertex on its shortest path, [`UNDEFINED`] when unreached.
    /// The source itself has no entry.
    pub predecessors: HashMap<String, String>,
}

impl<W> ShortestPathResult<W>
where
    W: EdgeWeight,
{
    /// Creates empty tables for the given source
    pub fn new(source: impl Into<String>) -> Self {
        ShortestPathResult {
            source: source.into(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Finite distance to `target`, or None if it is unreachable or unknown
    pub fn distance(&self, target: &str) -> Option<W> {
        self.distances
            .get(target)
            .copied()
            .filter(|d| !d.is_infinite())
    }

    /// Predecessor of `target`, or None if it is undefined or unknown
    pub fn predecessor(&self, target: &str) -> Option<&str> {
        self.predecessors
            .get(target)
            .map(String::as_str)
            .filter(|p| *p != UNDEFINED)
    }

    pub fn is_reachable(&self, target: &str) -> bool {
        self.distance(target).is_some()
    }
}

/// Trait for single-source shortest path algorithms over a shared graph
pub trait ShortestPathAlgorithm<W>
where
    W: EdgeWeight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from `source`, writing into caller-owned tables
    fn compute_into(
        &self,
        graph: &Graph<W>,
        source: &str,
        result: &mut ShortestPathResult<W>,
    ) -> Result<()>;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &Graph<W>, source: &str) -> Result<ShortestPathResult<W>> {
        let mut result = ShortestPathResult::new(source);
        self.compute_into(graph, source, &mut result)?;
        Ok(result)
    }

    /// Get the shortest path from source to target as a sequence of vertex keys
    fn get_path(&self, result: &ShortestPathResult<W>, target: &str) -> Option<Vec<String>> {
        if target == result.source {
            return Some(vec![result.source.clone()]);
        }
        if !result.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.to_string();
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != result.source {
            if !visited.insert(current.clone()) {
                warn!("cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            let pred = result.predecessor(&current)?.to_string();
            path.push(current);
            current = pred;
        }

        path.push(result.source.clone());
        path.reverse();

        Some(path)
    }
}
