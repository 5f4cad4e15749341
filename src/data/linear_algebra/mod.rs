//! # Linear algebra primitives
//!
//! A sparse matrix type that switches between an editable and a compressed representation, along
//! with the element trait and helpers it relies on.

pub mod matrix;
pub mod traits;
pub(crate) mod utilities;

/// A single entry of a sparse line: the index of the element in the line and its value.
pub type SparseTuple<F> = (usize, F);

/// How independent units of work (lines, output cells) of a routine are scheduled.
///
/// Both strategies produce identical results. Parallel sections only read the matrix and write
/// disjoint output slots; every reduction over the entries of a single line is done in storage
/// order.
///
/// Without the `rayon` feature, `Parallel` runs sequentially.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Execution {
    /// One unit after the other on the calling thread.
    #[default]
    Sequential,
    /// Units are distributed over the global `rayon` thread pool.
    Parallel,
}

impl Execution {
    /// Whether work should actually be distributed over threads.
    pub(crate) fn is_parallel(self) -> bool {
        cfg!(feature = "rayon") && self == Execution::Parallel
    }
}
