use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::Write;
use serde::Serialize;

use crate::algorithm::AllPairsResult;
use crate::graph::EdgeWeight;
use crate::Result;

/// Orders keys numerically when both parse as integers, lexically otherwise
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn sorted(keys: &[String]) -> Vec<&str> {
    let mut keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    keys.sort_by(|a, b| natural_cmp(a, b));
    keys
}

/// Prints, per source, the distance and predecessor of every other vertex
pub fn write_text<W, Wr>(result: &AllPairsResult<W>, out: &mut Wr) -> Result<()>
where
    W: EdgeWeight,
    Wr: Write,
{
    let keys = sorted(&result.keys);

    for source in &keys {
        writeln!(out, "Shortest paths from vertex {}:", source)?;

        let Some(table) = result.table(source) else {
            match result.failures.get(*source) {
                Some(err) => writeln!(out, "  computation failed: {}", err)?,
                None => writeln!(out, "  no results")?,
            }
            continue;
        };

        let mut targets: Vec<&str> = table.distances.keys().map(String::as_str).collect();
        targets.sort_by(|a, b| natural_cmp(a, b));

        for target in targets.into_iter().filter(|t| t != source) {
            match (table.predecessor(target), table.distance(target)) {
                (Some(pred), Some(dist)) => writeln!(
                    out,
                    "  to {} via {}, distance {}",
                    target, pred, dist
                )?,
                _ => writeln!(out, "  to {}: unreachable", target)?,
            }
        }
    }

    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct TargetEntry<'a, W> {
    distance: Option<W>,
    previous: Option<&'a str>,
}

#[derive(Serialize)]
struct SourceEntry<'a, W> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    targets: BTreeMap<&'a str, TargetEntry<'a, W>>,
}

/// Writes all tables as a JSON object keyed by source, `null` marking unreachable
pub fn write_json<W, Wr>(result: &AllPairsResult<W>, out: &mut Wr) -> Result<()>
where
    W: EdgeWeight,
    Wr: Write,
{
    let mut report: BTreeMap<&str, SourceEntry<'_, W>> = BTreeMap::new();

    for source in &result.keys {
        let mut entry = SourceEntry {
            error: result.failures.get(source).map(ToString::to_string),
            targets: BTreeMap::new(),
        };
        if let Some(table) = result.table(source) {
            for target in table.distances.keys() {
                entry.targets.insert(
                    target.as_str(),
                    TargetEntry {
                        distance: table.distance(target),
                        previous: table.predecessor(target),
                    },
                );
            }
        }
        report.insert(source.as_str(), entry);
    }

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
