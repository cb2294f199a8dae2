use num_traits::NumCast;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::traits::EdgeWeight;

/// Exclusive upper bound for generated edge weights
pub const WEIGHT_RANGE_END: u8 = 9;

/// Dense adjacency matrix: `matrix[i][j]` is the weight of the edge `i -> j`, 0 meaning no edge
pub type AdjacencyMatrix<W> = Vec<Vec<W>>;

/// Generates a random symmetric adjacency matrix with n vertices
///
/// Weights are drawn uniformly from `0..WEIGHT_RANGE_END`; a zero entry is
/// read back as "no edge", so roughly one pair in nine stays disconnected.
pub fn generate_symmetric_matrix<W, R>(n: usize, rng: &mut R) -> AdjacencyMatrix<W>
where
    W: EdgeWeight,
    R: Rng + ?Sized,
{
    let mut matrix = vec![vec![W::zero(); n]; n];

    for i in 0..n {
        for j in i..n {
            let weight: W = NumCast::from(rng.gen_range(0..WEIGHT_RANGE_END)).unwrap_or_else(W::zero);
            matrix[i][j] = weight;
            matrix[j][i] = weight;
        }
    }

    matrix
}

/// Generates a symmetric adjacency matrix from a fixed seed
pub fn generate_symmetric_matrix_seeded<W>(n: usize, seed: u64) -> AdjacencyMatrix<W>
where
    W: EdgeWeight,
{
    let mut rng = StdRng::seed_from_u64(seed);
    generate_symmetric_matrix(n, &mut rng)
}
