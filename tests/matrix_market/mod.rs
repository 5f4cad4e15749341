//! # Matrix Market files
//!
//! Small matrices stored on disk, read through the public import function.
use std::path::{Path, PathBuf};

use dual_sparse::{Element, Order, Sparse};
use dual_sparse::io::error::Import;
use dual_sparse::io::import;
use dual_sparse::io::matrix_market::number::Parse;

/// # Reading and computing
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the matrix files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Compute the path of a matrix file, based on its name.
///
/// # Arguments
///
/// * `name`: File name, including the extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name)
}

fn read<F: Element + Parse, O: Order>(file_name: &str) -> Result<Sparse<F, O>, Import> {
    import(&get_test_file_path(file_name))
}
