//! Feature-matrix file I/O

mod text;

pub use text::{read_matrix, read_matrix_from_str, write_matrix};
