//! # Sparse matrices in two storage states
//!
//! A sparse matrix is either *uncompressed*, an ordered map from coordinates to values in which
//! elements can be inserted and removed, or *compressed*, the three-array layout known as CSR
//! (row-major) or CSC (column-major). The storage order is part of the matrix type.
//!
//! Reading, updating and extracting rows and columns works in all four configurations. Products
//! and norms are built on top of that.
#![warn(missing_docs)]

pub mod data;
pub mod io;

pub use data::linear_algebra::Execution;
pub use data::linear_algebra::matrix::{ColumnMajor, Line, NormType, Order, RowMajor, Sparse, StructureLocked};
pub use data::linear_algebra::traits::Element;

#[cfg(test)]
mod tests;
