//! # Reading of matrices
//!
//! This module provides read functionality for sparse matrix file formats.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::linear_algebra::matrix::{Order, Sparse};
use crate::data::linear_algebra::traits::Element;
use crate::io::error::Import;
use crate::io::matrix_market::number::Parse;

pub mod error;
pub mod matrix_market;

/// Import a matrix from a file.
///
/// Currently only supports the Matrix Market coordinate format, with extension `.mtx` or `.txt`.
///
/// # Return value
///
/// An uncompressed matrix holding the elements listed in the file.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the matrix file, etc. an error type is returned.
pub fn import<F: Element + Parse, O: Order>(file_path: &Path) -> Result<Sparse<F, O>, Import> {
    // Open and read the file
    let mut text = String::new();
    File::open(file_path)
        .map_err(Import::IO)?
        .read_to_string(&mut text)
        .map_err(Import::IO)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("mtx" | "txt") => matrix_market::parse(&text),
            Some(extension_string) => Err(Import::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(Import::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}
