use std::collections::HashMap;
use std::sync::Arc;
use log::warn;
use parking_lot::RwLock;

use crate::graph::traits::EdgeWeight;
use crate::graph::vertex::{Neighbors, Vertex};
use crate::{Error, Result};

/// Reserved predecessor tag meaning "no predecessor"; never accepted as a vertex key
pub const UNDEFINED: &str = "undefined";

/// A concurrent mapping from vertex key to vertex
///
/// The store lock guards only the key set. Vertex fields are guarded by the
/// vertex's own lock, and a vertex lock is never taken while the store lock is
/// held, so the store -> vertex ordering can not form a cycle.
#[derive(Debug)]
pub struct Graph<W = u64>
where
    W: EdgeWeight,
{
    vertexes: RwLock<HashMap<String, Arc<Vertex<W>>>>,
}

impl<W> Graph<W>
where
    W: EdgeWeight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        Graph {
            vertexes: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.vertexes.read().len()
    }

    /// Returns true if the graph holds no vertices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a vertex with the given outgoing edges
    ///
    /// Returns false and leaves the graph untouched if the key is already
    /// present or is the reserved [`UNDEFINED`] tag.
    pub fn add(&self, key: impl Into<String>, neighbors: Neighbors<W>) -> bool {
        let key = key.into();
        if key == UNDEFINED {
            warn!("refusing reserved vertex key {:?}", key);
            return false;
        }

        let mut vertexes = self.vertexes.write();
        if vertexes.contains_key(&key) {
            return false;
        }

        let vertex = Arc::new(Vertex::new(key.clone(), neighbors));
        vertexes.insert(key, vertex);
        true
    }

    /// Removes a vertex, returning false if it was not present
    pub fn delete(&self, key: &str) -> bool {
        self.vertexes.write().remove(key).is_some()
    }

    /// Looks up a vertex by key
    ///
    /// The handle stays usable after a later `delete`, but it no longer
    /// belongs to the graph.
    pub fn get(&self, key: &str) -> Result<Arc<Vertex<W>>> {
        self.vertexes
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| Error::InvalidKey(key.to_string()))
    }

    /// Returns all keys in arbitrary order
    ///
    /// Takes the exclusive lock so the snapshot can not race with a writer
    /// that was queued before it.
    pub fn get_keys(&self) -> Vec<String> {
        self.vertexes.write().keys().cloned().collect()
    }

    /// Returns true if the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.vertexes.read().contains_key(key)
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        let vertexes: Vec<Arc<Vertex<W>>> = self.vertexes.read().values().cloned().collect();
        vertexes.iter().map(|vertex| vertex.degree()).sum()
    }
}

impl<W> Default for Graph<W>
where
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::new()
    }
}
