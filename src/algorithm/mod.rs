pub mod traits;
pub mod dijkstra;
pub mod all_pairs;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use dijkstra::Dijkstra;
pub use all_pairs::{AllPairs, AllPairsResult};
