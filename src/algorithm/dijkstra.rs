use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{EdgeWeight, Graph, UNDEFINED};
use crate::{Error, Result};

/// Greedy-frontier Dijkstra over a private snapshot of the shared graph
///
/// Each run copies the key set and neighbor maps into its own frontier
/// graph, then repeatedly extracts the closest remaining vertex by linear
/// scan and relaxes its edges. The shared graph is only read.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    cancel: Option<Arc<AtomicBool>>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { cancel: None }
    }

    /// Stop between extraction rounds once `flag` is set
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    /// Copies every vertex of `graph` into a fresh frontier
    fn snapshot<W: EdgeWeight>(graph: &Graph<W>) -> Result<Graph<W>> {
        let frontier = Graph::new();
        for key in graph.get_keys() {
            let vertex = graph.get(&key)?;
            frontier.add(key, vertex.neighbors().as_ref().clone());
        }
        Ok(frontier)
    }

    /// Key in `frontier` with the smallest tentative distance
    fn closest<W: EdgeWeight>(frontier: &[String], result: &ShortestPathResult<W>) -> Option<usize> {
        frontier
            .iter()
            .enumerate()
            .min_by_key(|(_, key)| result.distances.get(*key).copied().unwrap_or_else(W::infinity))
            .map(|(idx, _)| idx)
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: EdgeWeight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_into(
        &self,
        graph: &Graph<W>,
        source: &str,
        result: &mut ShortestPathResult<W>,
    ) -> Result<()> {
        let frontier = Self::snapshot(graph)?;
        let mut remaining = frontier.get_keys();

        result.source = source.to_string();
        result.distances.clear();
        result.predecessors.clear();
        for key in &remaining {
            if key != source {
                result.distances.insert(key.clone(), W::infinity());
                result.predecessors.insert(key.clone(), UNDEFINED.to_string());
            }
        }
        result.distances.insert(source.to_string(), W::zero());

        let rounds = remaining.len();
        for round in 0..rounds {
            if self.is_cancelled() {
                return Err(Error::Cancelled(source.to_string()));
            }

            let Some(idx) = Self::closest(&remaining, result) else {
                break;
            };
            let u = remaining.swap_remove(idx);
            let dist_u = result.distances.get(&u).copied().unwrap_or_else(W::infinity);

            // Everything left is unreachable
            if dist_u.is_infinite() {
                debug!(
                    "source {}: {} unreachable vertices left after {} rounds",
                    source,
                    rounds - round,
                    round
                );
                break;
            }

            let vertex = frontier.get(&u)?;
            frontier.delete(&u);

            for (key, &weight) in vertex.neighbors().iter() {
                let Some(current) = result.distances.get_mut(key) else {
                    continue;
                };
                let Some(alt) = dist_u.checked_add(&weight) else {
                    continue;
                };
                if alt < *current {
                    *current = alt;
                    result.predecessors.insert(key.clone(), u.clone());
                }
            }
        }

        Ok(())
    }
}
