use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;

use crate::graph::traits::EdgeWeight;

/// Outgoing edges of a vertex: neighbor key -> edge weight
///
/// A missing key means there is no edge. A present key with weight zero is a
/// real, zero-cost edge.
pub type Neighbors<W> = HashMap<String, W>;

#[derive(Debug)]
struct VertexData<W> {
    key: String,
    neighbors: Arc<Neighbors<W>>,
}

/// A named node holding its outgoing weighted edges
///
/// Every vertex carries its own read/write lock, independent of the lock of
/// the store that owns it.
#[derive(Debug)]
pub struct Vertex<W>
where
    W: EdgeWeight,
{
    data: RwLock<VertexData<W>>,
}

impl<W> Vertex<W>
where
    W: EdgeWeight,
{
    pub(crate) fn new(key: String, neighbors: Neighbors<W>) -> Self {
        Vertex {
            data: RwLock::new(VertexData {
                key,
                neighbors: Arc::new(neighbors),
            }),
        }
    }

    /// Returns the outgoing edges of this vertex
    ///
    /// The mapping is handed out as a shared immutable snapshot, so readers
    /// never observe a partially written neighbor set.
    pub fn neighbors(&self) -> Arc<Neighbors<W>> {
        Arc::clone(&self.data.read().neighbors)
    }

    /// Returns the key of this vertex
    pub fn key(&self) -> String {
        self.data.read().key.clone()
    }

    /// Number of outgoing edges
    pub fn degree(&self) -> usize {
        self.data.read().neighbors.len()
    }
}
