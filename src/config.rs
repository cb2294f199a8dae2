use std::path::PathBuf;
use clap::Parser;

use crate::{Error, Result};

fn default_cores() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

/// Command line options
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Shortest paths from every vertex, computed concurrently")]
pub struct Cli {
    /// Maximum number of worker threads
    #[arg(long, default_value_t = default_cores())]
    pub cores: usize,

    /// File the adjacency matrix is read from (and written to when generating)
    #[arg(short = 'f', long = "file", default_value = "graph.txt")]
    pub data_file: PathBuf,

    /// Generate a random graph with this many vertices first; 0 reads the file as is
    #[arg(short = 'g', long = "generate", default_value_t = 0)]
    pub generate: usize,

    /// Print the result tables
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Print the result tables as JSON
    #[arg(long)]
    pub json: bool,

    /// Seed for the graph generator
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Immutable run parameters, fixed before any concurrent work starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cores: usize,
    pub data_file: PathBuf,
    pub generate: usize,
    pub print: bool,
    pub json: bool,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cores: default_cores(),
            data_file: PathBuf::from("graph.txt"),
            generate: 0,
            print: false,
            json: false,
            seed: None,
        }
    }
}

impl Config {
    /// Checks the values that can not be expressed in the option types
    pub fn validate(self) -> Result<Self> {
        if self.cores == 0 {
            return Err(Error::InvalidConfig("--cores must be at least 1".into()));
        }
        Ok(self)
    }
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Config {
            cores: cli.cores,
            data_file: cli.data_file,
            generate: cli.generate,
            print: cli.print,
            json: cli.json,
            seed: cli.seed,
        }
        .validate()
    }
}
