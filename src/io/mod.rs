pub mod matrix;
pub mod report;

pub use matrix::{parse_matrix, read_matrix, write_matrix, write_matrix_file};
pub use report::{write_json, write_text};
