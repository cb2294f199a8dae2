use std::io::Write;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithm::{AllPairs, AllPairsResult, Dijkstra};
use crate::config::Config;
use crate::graph::generators::{generate_symmetric_matrix, AdjacencyMatrix};
use crate::graph::Graph;
use crate::io::{read_matrix, write_json, write_matrix_file, write_text};
use crate::Result;

/// Generates the input file if asked to, loads it and runs every source
///
/// Run statistics and, when enabled, the result tables go to `out`.
pub fn run<Wr: Write>(config: &Config, out: &mut Wr) -> Result<AllPairsResult<u64>> {
    if config.generate > 0 {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let matrix: AdjacencyMatrix<u64> = generate_symmetric_matrix(config.generate, &mut rng);
        write_matrix_file(&config.data_file, &matrix)?;
        info!(
            "generated {} vertex graph into {}",
            config.generate,
            config.data_file.display()
        );
    }

    let graph: Graph<u64> = read_matrix(&config.data_file)?;
    writeln!(out, "Worker threads: {}", config.cores)?;
    writeln!(out, "Vertices: {}", graph.len())?;

    let result = AllPairs::new(Dijkstra::new())
        .with_threads(config.cores)
        .run(&graph)?;

    if config.json {
        write_json(&result, out)?;
    } else if config.print {
        write_text(&result, out)?;
    }
    writeln!(out, "Execution time: {:?}", result.elapsed)?;

    Ok(result)
}
