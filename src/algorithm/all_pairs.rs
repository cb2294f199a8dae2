use std::collections::HashMap;
use std::time::{Duration, Instant};
use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{EdgeWeight, Graph};
use crate::{Error, Result};

/// Completed tables for every source vertex
#[derive(Debug)]
pub struct AllPairsResult<W>
where
    W: EdgeWeight,
{
    /// Source keys in the order they were read from the graph
    pub keys: Vec<String>,

    /// Tables of every source whose computation finished
    pub tables: HashMap<String, ShortestPathResult<W>>,

    /// Sources whose computation failed, with the reason
    pub failures: HashMap<String, Error>,

    /// Wall-clock time of the fan-out, barrier included
    pub elapsed: Duration,
}

impl<W> AllPairsResult<W>
where
    W: EdgeWeight,
{
    /// Tables for one source
    pub fn table(&self, source: &str) -> Option<&ShortestPathResult<W>> {
        self.tables.get(source)
    }

    /// Finite distance from `source` to `target`
    pub fn distance(&self, source: &str, target: &str) -> Option<W> {
        self.table(source).and_then(|table| table.distance(target))
    }
}

/// Runs one single-source computation per vertex, all concurrently
///
/// Every source gets its own pre-allocated tables which only its task
/// writes. The rayon scope is the completion barrier: nothing is returned
/// until every spawned task has finished.
#[derive(Debug)]
pub struct AllPairs<A> {
    algorithm: A,
    threads: usize,
}

impl<A> AllPairs<A> {
    /// Creates an orchestrator using as many worker threads as rayon's default
    pub fn new(algorithm: A) -> Self {
        AllPairs {
            algorithm,
            threads: rayon::current_num_threads(),
        }
    }

    /// Sets the maximum number of worker threads
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Computes shortest paths from every vertex of `graph`
    pub fn run<W>(&self, graph: &Graph<W>) -> Result<AllPairsResult<W>>
    where
        W: EdgeWeight,
        A: ShortestPathAlgorithm<W> + Sync,
    {
        if self.threads == 0 {
            return Err(Error::InvalidConfig("worker thread count must be positive".into()));
        }
        let pool = ThreadPoolBuilder::new().num_threads(self.threads).build()?;

        let keys = graph.get_keys();
        let mut slots: Vec<(ShortestPathResult<W>, Result<()>)> = keys
            .iter()
            .map(|key| (ShortestPathResult::new(key.as_str()), Ok(())))
            .collect();

        info!(
            "computing shortest paths from {} sources on {} threads with {}",
            keys.len(),
            self.threads,
            self.algorithm.name()
        );

        let start = Instant::now();
        let algorithm = &self.algorithm;
        pool.scope(|scope| {
            for (key, (table, outcome)) in keys.iter().zip(slots.iter_mut()) {
                scope.spawn(move |_| {
                    debug!("source {}: started", key);
                    *outcome = algorithm.compute_into(graph, key, table);
                    debug!("source {}: finished", key);
                });
            }
        });
        let elapsed = start.elapsed();

        let mut tables = HashMap::with_capacity(keys.len());
        let mut failures = HashMap::new();
        for (key, (table, outcome)) in keys.iter().zip(slots) {
            match outcome {
                Ok(()) => {
                    tables.insert(key.clone(), table);
                }
                Err(err) => {
                    warn!("source {}: {}", key, err);
                    failures.insert(key.clone(), err);
                }
            }
        }

        info!("all {} sources finished in {:?}", keys.len(), elapsed);

        Ok(AllPairsResult {
            keys,
            tables,
            failures,
            elapsed,
        })
    }
}
