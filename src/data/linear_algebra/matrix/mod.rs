//! # Sparse matrix
//!
//! A `Sparse` matrix stores only its non-zero elements, in one of two states:
//!
//! * *Uncompressed*: an ordered map from coordinates to values. Elements can be inserted, changed
//! and removed.
//! * *Compressed*: three flat arrays, the CSR layout for row-major matrices and the CSC layout for
//! column-major matrices. Only the values of elements that are already stored can be changed.
//!
//! The storage order is a type parameter. Throughout this module, a *line* is a row of a row-major
//! matrix or a column of a column-major matrix. Lines are the unit of contiguous storage: the
//! *major* index of an element is the index of its line, the *minor* index its position within
//! that line.
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use std::slice::Iter;

use itertools::Either;

pub use norm::NormType;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::traits::Element;

mod access;
mod conversion;
mod display;
mod norm;
mod product;

/// Storage order of a matrix.
///
/// The order is a property of the matrix type and determines which lines are stored contiguously.
pub trait Order: Copy + Clone + Debug + Default + Eq + Send + Sync + 'static {
    /// Whether lines are rows.
    const IS_ROW_MAJOR: bool;

    /// Convert a coordinate to the key it is stored under.
    ///
    /// # Return value
    ///
    /// Tuple `(major, minor)`: index of the line the element lies in, and index of the element in
    /// that line.
    fn major_minor(row: usize, column: usize) -> (usize, usize);

    /// Convert a storage key back to a coordinate.
    ///
    /// # Return value
    ///
    /// Tuple `(row, column)`.
    fn row_column(major: usize, minor: usize) -> (usize, usize);

    /// Number of lines in a matrix of the given dimensions.
    fn nr_major(nr_rows: usize, nr_columns: usize) -> usize;

    /// Number of elements in each line of a matrix of the given dimensions.
    fn nr_minor(nr_rows: usize, nr_columns: usize) -> usize;
}

/// Rows are stored contiguously (CSR when compressed).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RowMajor;

/// Columns are stored contiguously (CSC when compressed).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ColumnMajor;

impl Order for RowMajor {
    const IS_ROW_MAJOR: bool = true;

    fn major_minor(row: usize, column: usize) -> (usize, usize) {
        (row, column)
    }

    fn row_column(major: usize, minor: usize) -> (usize, usize) {
        (major, minor)
    }

    fn nr_major(nr_rows: usize, _nr_columns: usize) -> usize {
        nr_rows
    }

    fn nr_minor(_nr_rows: usize, nr_columns: usize) -> usize {
        nr_columns
    }
}

impl Order for ColumnMajor {
    const IS_ROW_MAJOR: bool = false;

    fn major_minor(row: usize, column: usize) -> (usize, usize) {
        (column, row)
    }

    fn row_column(major: usize, minor: usize) -> (usize, usize) {
        (minor, major)
    }

    fn nr_major(_nr_rows: usize, nr_columns: usize) -> usize {
        nr_columns
    }

    fn nr_minor(nr_rows: usize, _nr_columns: usize) -> usize {
        nr_rows
    }
}

/// Backing store of a `Sparse` matrix.
///
/// No stored value is zero in either variant.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Storage<F> {
    /// Values keyed by `(major, minor)`.
    ///
    /// The lexicographic ordering of the keys is the storage order: iterating the map visits the
    /// lines one after the other, and each line by increasing minor index.
    Uncompressed(BTreeMap<(usize, usize), F>),
    /// Values in storage order, their minor indices, and per line the prefix count of values.
    ///
    /// `offsets` has one entry more than there are lines. The values of line `k` are
    /// `values[offsets[k]..offsets[k + 1]]`, and the minor indices in each such range are strictly
    /// increasing.
    Compressed {
        values: Vec<F>,
        indices: Vec<usize>,
        offsets: Vec<usize>,
    },
}

impl<F> Storage<F> {
    fn empty_compressed(nr_lines: usize) -> Self {
        Storage::Compressed {
            values: Vec::new(),
            indices: Vec::new(),
            offsets: vec![0; nr_lines + 1],
        }
    }

    fn len(&self) -> usize {
        match self {
            Storage::Uncompressed(map) => map.len(),
            Storage::Compressed { values, .. } => values.len(),
        }
    }
}

/// A sparse matrix with storage order `O`. Indices start at `0`.
///
/// A new matrix is uncompressed and empty. Elements are added and removed while it is
/// uncompressed; `compress` freezes the sparsity pattern into the CSR or CSC layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparse<F, O> {
    storage: Storage<F>,
    nr_rows: usize,
    nr_columns: usize,

    phantom_order: PhantomData<O>,
}

/// Non-zero elements of a single row or column.
///
/// Both sequences have the same length. The indices are strictly increasing: they are the column
/// indices of the elements of a row, or the row indices of the elements of a column.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Line<F> {
    /// Position of each element within the row or column.
    pub indices: Vec<usize>,
    /// Value of each element.
    pub values: Vec<F>,
}

impl<F> Line<F> {
    /// Number of non-zero elements in the line.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.indices.len(), self.values.len());

        self.indices.len()
    }

    /// Whether the line has no non-zero elements.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over `(index, value)` pairs in increasing index order.
    pub fn iter(&self) -> impl Iterator<Item = SparseTuple<&F>> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }
}

impl<F> FromIterator<SparseTuple<F>> for Line<F> {
    fn from_iter<I: IntoIterator<Item = SparseTuple<F>>>(iter: I) -> Self {
        let (indices, values): (Vec<_>, Vec<_>) = iter.into_iter().unzip();
        debug_assert!(indices.is_sorted());

        Self { indices, values }
    }
}

impl<F: Element, O: Order> Sparse<F, O> {
    /// Create an empty, uncompressed matrix.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows.
    /// * `nr_columns`: Number of columns.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            storage: Storage::Uncompressed(BTreeMap::new()),
            nr_rows,
            nr_columns,

            phantom_order: PhantomData,
        }
    }

    /// Create an uncompressed matrix from `(row, column, value)` triples.
    ///
    /// Triples are written one after the other, so a later triple overwrites an earlier one with
    /// the same coordinate and zero values remove the element.
    ///
    /// # Panics
    ///
    /// When a coordinate lies outside of the matrix dimensions.
    pub fn from_triplets<I: IntoIterator<Item = (usize, usize, F)>>(
        nr_rows: usize,
        nr_columns: usize,
        triplets: I,
    ) -> Self {
        let mut matrix = Self::new(nr_rows, nr_columns);
        for (row, column, value) in triplets {
            matrix.set(row, column, value);
        }

        matrix
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of non-zero elements stored.
    pub fn nnz(&self) -> usize {
        self.storage.len()
    }

    /// Whether the matrix is in the compressed state.
    pub fn is_compressed(&self) -> bool {
        matches!(self.storage, Storage::Compressed { .. })
    }

    /// Change the dimensions of the matrix, discarding all elements.
    ///
    /// The matrix stays in the state (compressed or not) that it was in.
    pub fn resize(&mut self, nr_rows: usize, nr_columns: usize) {
        self.nr_rows = nr_rows;
        self.nr_columns = nr_columns;
        self.clear();
    }

    /// Remove all elements, keeping the dimensions and the state.
    pub fn clear(&mut self) {
        self.storage = if self.is_compressed() {
            Storage::empty_compressed(self.nr_lines())
        } else {
            Storage::Uncompressed(BTreeMap::new())
        };

        debug_assert!(self.is_consistent());
    }

    /// Iterate over all stored elements in storage order.
    ///
    /// # Return value
    ///
    /// `(row, column, value)` triples, by increasing line and within a line by increasing minor
    /// index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &F)> + '_ {
        match &self.storage {
            Storage::Uncompressed(map) => Either::Left(map.iter().map(|(&(major, minor), value)| {
                let (row, column) = O::row_column(major, minor);
                (row, column, value)
            })),
            Storage::Compressed { values, indices, offsets } => Either::Right(
                CompressedIter::<F, O>::new(values.iter(), indices, offsets)
            ),
        }
    }

    /// Number of lines: rows when row-major, columns when column-major.
    pub(crate) fn nr_lines(&self) -> usize {
        O::nr_major(self.nr_rows, self.nr_columns)
    }

    /// Length of each line.
    pub(crate) fn line_length(&self) -> usize {
        O::nr_minor(self.nr_rows, self.nr_columns)
    }

    /// Panic when a coordinate lies outside of the matrix.
    fn assert_in_bounds(&self, row: usize, column: usize) {
        assert!(
            row < self.nr_rows,
            "row index {} out of bounds for a matrix with {} rows", row, self.nr_rows,
        );
        assert!(
            column < self.nr_columns,
            "column index {} out of bounds for a matrix with {} columns", column, self.nr_columns,
        );
    }

    /// Check the invariants of the active backing store.
    pub(crate) fn is_consistent(&self) -> bool {
        let nr_lines = self.nr_lines();
        let line_length = self.line_length();

        match &self.storage {
            Storage::Uncompressed(map) => map.iter()
                .all(|(&(major, minor), value)| {
                    major < nr_lines && minor < line_length && !value.is_zero()
                }),
            Storage::Compressed { values, indices, offsets } => {
                offsets.len() == nr_lines + 1
                    && offsets[0] == 0
                    && offsets[nr_lines] == values.len()
                    && indices.len() == values.len()
                    && offsets.is_sorted()
                    && offsets.windows(2)
                        .all(|bounds| indices[bounds[0]..bounds[1]].windows(2).all(|pair| pair[0] < pair[1]))
                    && indices.iter().all(|&index| index < line_length)
                    && values.iter().all(|value| !value.is_zero())
            },
        }
    }
}

/// Walks the compressed arrays, recovering the line of each value from the offsets.
struct CompressedIter<'a, F, O> {
    values: Iter<'a, F>,
    indices: &'a [usize],
    offsets: &'a [usize],
    position: usize,
    line: usize,

    phantom_order: PhantomData<O>,
}

impl<'a, F, O> CompressedIter<'a, F, O> {
    fn new(values: Iter<'a, F>, indices: &'a [usize], offsets: &'a [usize]) -> Self {
        Self {
            values,
            indices,
            offsets,
            position: 0,
            line: 0,

            phantom_order: PhantomData,
        }
    }
}

impl<'a, F, O: Order> Iterator for CompressedIter<'a, F, O> {
    type Item = (usize, usize, &'a F);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.next()?;
        while self.offsets[self.line + 1] <= self.position {
            self.line += 1;
        }
        let (row, column) = O::row_column(self.line, self.indices[self.position]);
        self.position += 1;

        Some((row, column, value))
    }
}

/// A structural change was requested while the matrix is compressed.
///
/// Only values of elements that are already stored can be changed in the compressed state;
/// inserting or removing an element requires uncompressing first.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StructureLocked {
    /// Row of the element that was to be written.
    pub row: usize,
    /// Column of the element that was to be written.
    pub column: usize,
}

impl Display for StructureLocked {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cannot add or remove element ({}, {}) while the matrix is compressed",
            self.row, self.column,
        )
    }
}

impl Error for StructureLocked {}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::{ColumnMajor, Order, RowMajor, Sparse};

    /// The matrix
    ///
    /// 1 2 0
    /// 0 5 6
    pub fn test_matrix<O: Order>() -> Sparse<f64, O> {
        Sparse::from_triplets(2, 3, vec![(0, 0, 1f64), (0, 1, 2f64), (1, 1, 5f64), (1, 2, 6f64)])
    }

    fn new<O: Order>() {
        let (rows, columns) = (299, 482);
        let m = Sparse::<f64, O>::new(rows, columns);

        assert_eq!(m.nr_rows(), rows);
        assert_eq!(m.nr_columns(), columns);
        assert_eq!(m.nnz(), 0);
        assert!(!m.is_compressed());
        assert!(m.is_consistent());
    }

    fn resize<O: Order>() {
        let mut m = test_matrix::<O>();
        m.resize(4, 1);
        assert_eq!((m.nr_rows(), m.nr_columns(), m.nnz()), (4, 1, 0));
        assert!(!m.is_compressed());

        let mut m = test_matrix::<O>();
        m.compress();
        m.resize(5, 7);
        assert_eq!((m.nr_rows(), m.nr_columns(), m.nnz()), (5, 7, 0));
        assert!(m.is_compressed());
        assert!(m.is_consistent());
        assert!(!m.has_row(4));
        assert_eq!(m.get(4, 6), 0f64);
    }

    fn clear<O: Order>() {
        let mut m = test_matrix::<O>();
        m.compress();
        m.clear();
        assert_eq!((m.nr_rows(), m.nr_columns(), m.nnz()), (2, 3, 0));
        assert!(m.is_compressed());
        assert!(m.is_consistent());
    }

    fn iter<O: Order>() {
        let mut m = test_matrix::<O>();
        let mut expected = vec![(0, 0, 1f64), (0, 1, 2f64), (1, 1, 5f64), (1, 2, 6f64)];
        if !O::IS_ROW_MAJOR {
            expected.sort_by_key(|&(row, column, _)| (column, row));
        }

        let collect = |m: &Sparse<f64, O>| m.iter()
            .map(|(row, column, &value)| (row, column, value))
            .collect::<Vec<_>>();
        assert_eq!(collect(&m), expected);
        m.compress();
        assert_eq!(collect(&m), expected);
    }

    #[test]
    fn test_new() {
        new::<RowMajor>();
        new::<ColumnMajor>();
    }

    #[test]
    fn test_resize() {
        resize::<RowMajor>();
        resize::<ColumnMajor>();
    }

    #[test]
    fn test_clear() {
        clear::<RowMajor>();
        clear::<ColumnMajor>();
    }

    #[test]
    fn test_iter() {
        iter::<RowMajor>();
        iter::<ColumnMajor>();
    }

    #[test]
    fn from_triplets_overwrites_and_removes() {
        let m = Sparse::<i32, RowMajor>::from_triplets(2, 2, vec![(0, 0, 1), (0, 0, 3), (1, 1, 4), (1, 1, 0)]);
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(0, 0), 3);
        assert_eq!(m.get(1, 1), 0);
    }

    #[test]
    fn empty_matrix_is_consistent() {
        let mut m = Sparse::<f64, ColumnMajor>::new(0, 0);
        m.compress();
        assert!(m.is_consistent());
        m.uncompress();
        assert!(m.is_consistent());
    }

    #[test]
    #[should_panic]
    fn from_triplets_out_of_bounds() {
        Sparse::<f64, RowMajor>::from_triplets(2, 2, vec![(2, 0, 1f64)]);
    }
}
