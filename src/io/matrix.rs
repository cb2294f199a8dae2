use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use log::{debug, warn};

use crate::graph::generators::AdjacencyMatrix;
use crate::graph::{EdgeWeight, Graph, Neighbors};
use crate::Result;

/// Column separator of the adjacency-matrix text format
pub const FIELD_SEPARATOR: char = '\t';

/// Parses a tab-delimited adjacency matrix into a graph
///
/// Row `i` becomes vertex `"i"`; entry `(i, j)` is the weight of `i -> j`.
/// Zero, empty and unparsable entries all mean "no edge".
pub fn parse_matrix<W, R>(reader: R) -> Result<Graph<W>>
where
    W: EdgeWeight,
    R: BufRead,
{
    let graph = Graph::new();

    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        let mut neighbors = Neighbors::new();
        for (col, field) in line.split(FIELD_SEPARATOR).enumerate() {
            let field = field.trim();
            let weight = match W::from_str_radix(field, 10) {
                Ok(weight) => weight,
                Err(_) => {
                    if !field.is_empty() {
                        warn!("row {}, column {}: ignoring malformed weight {:?}", row, col, field);
                    }
                    W::zero()
                }
            };
            if !weight.is_zero() {
                neighbors.insert(col.to_string(), weight);
            }
        }

        graph.add(row.to_string(), neighbors);
    }

    debug!("parsed adjacency matrix with {} vertices", graph.len());
    Ok(graph)
}

/// Reads an adjacency-matrix file into a graph
pub fn read_matrix<W, P>(path: P) -> Result<Graph<W>>
where
    W: EdgeWeight,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    parse_matrix(BufReader::new(file))
}

/// Writes a matrix in the format read by [`parse_matrix`]
pub fn write_matrix<W, Wr>(writer: &mut Wr, matrix: &AdjacencyMatrix<W>) -> Result<()>
where
    W: EdgeWeight,
    Wr: Write,
{
    for row in matrix {
        for weight in row {
            write!(writer, "{}{}", weight, FIELD_SEPARATOR)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the matrix into it
pub fn write_matrix_file<W, P>(path: P, matrix: &AdjacencyMatrix<W>) -> Result<()>
where
    W: EdgeWeight,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_matrix(&mut writer, matrix)
}
