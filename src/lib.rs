//! Parallel Dijkstra - shortest paths from every vertex, computed concurrently
//!
//! A [`Graph`] store is shared read-only by many single-source [`Dijkstra`]
//! runs, one per vertex, scheduled on a rayon thread pool by [`AllPairs`].
//! Each run writes only into its own distance/predecessor tables, so the
//! only synchronization on results is the completion barrier.

pub mod algorithm;
pub mod config;
pub mod graph;
pub mod io;
pub mod runner;

pub use algorithm::{
    AllPairs, AllPairsResult, Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{EdgeWeight, Graph, Vertex, UNDEFINED};
pub use config::Config;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("graph: invalid key {0:?}")]
    InvalidKey(String),

    #[error("computation from source {0:?} was cancelled")]
    Cancelled(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
