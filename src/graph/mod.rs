pub mod traits;
pub mod vertex;
pub mod store;
pub mod generators;

pub use traits::EdgeWeight;
pub use vertex::{Neighbors, Vertex};
pub use store::{Graph, UNDEFINED};
