//! # Element access
//!
//! Presence checks, reading and writing of single elements, and extraction of rows and columns.
//!
//! Extracting a line in the storage order of the matrix is cheap: a range query on the map, or a
//! slice of the compressed arrays. Extracting a line across the storage order (a column of a
//! row-major matrix, a row of a column-major matrix) has no such structure to rely on and scans
//! all stored elements.
use log::{trace, warn};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::data::linear_algebra::Execution;
use crate::data::linear_algebra::matrix::{Line, Order, Sparse, Storage, StructureLocked};
use crate::data::linear_algebra::traits::Element;
#[cfg(feature = "rayon")]
use crate::data::linear_algebra::utilities::line_of_position;
use crate::data::linear_algebra::utilities::advance_to_position;

impl<F: Element, O: Order> Sparse<F, O> {
    /// Whether row `row` contains at least one non-zero element.
    ///
    /// # Panics
    ///
    /// When the index is out of bounds.
    pub fn has_row(&self, row: usize) -> bool {
        assert!(row < self.nr_rows, "row index {} out of bounds for a matrix with {} rows", row, self.nr_rows);

        if O::IS_ROW_MAJOR {
            self.has_major(row)
        } else {
            self.has_minor(row)
        }
    }

    /// Whether column `column` contains at least one non-zero element.
    ///
    /// # Panics
    ///
    /// When the index is out of bounds.
    pub fn has_column(&self, column: usize) -> bool {
        assert!(
            column < self.nr_columns,
            "column index {} out of bounds for a matrix with {} columns", column, self.nr_columns,
        );

        if O::IS_ROW_MAJOR {
            self.has_minor(column)
        } else {
            self.has_major(column)
        }
    }

    /// Whether the element at (`row`, `column`) is non-zero.
    ///
    /// # Panics
    ///
    /// When the coordinate is out of bounds.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.stored(row, column).is_some()
    }

    /// Get the value at coordinate (`row`, `column`).
    ///
    /// # Return value
    ///
    /// The stored value, or zero if no value is stored.
    ///
    /// # Panics
    ///
    /// When the coordinate is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> F {
        self.stored(row, column).cloned().unwrap_or_else(F::zero)
    }

    /// Set the value at coordinate (`row`, `column`).
    ///
    /// While uncompressed, writing zero removes the element and writing a non-zero value inserts
    /// or overwrites it. While compressed, only the value of an element that is already stored can
    /// be overwritten, and only with a non-zero value.
    ///
    /// # Return value
    ///
    /// The value that is now stored at the coordinate, which is zero if the element is absent.
    ///
    /// # Errors
    ///
    /// When the matrix is compressed and the write would insert or remove an element. The matrix is
    /// left unchanged.
    ///
    /// # Panics
    ///
    /// When the coordinate is out of bounds.
    pub fn try_set(&mut self, row: usize, column: usize, value: F) -> Result<F, StructureLocked> {
        self.assert_in_bounds(row, column);

        let key = O::major_minor(row, column);
        match &mut self.storage {
            Storage::Uncompressed(map) => {
                if value.is_zero() {
                    map.remove(&key);
                    Ok(F::zero())
                } else {
                    map.insert(key, value.clone());
                    Ok(value)
                }
            },
            Storage::Compressed { values, indices, offsets } => {
                match compressed_position(offsets, indices, key) {
                    Some(position) if !value.is_zero() => {
                        values[position] = value.clone();
                        Ok(value)
                    },
                    _ => Err(StructureLocked { row, column }),
                }
            },
        }
    }

    /// Set the value at coordinate (`row`, `column`), see `try_set`.
    ///
    /// A rejected structural change while compressed is logged as a warning and zero is returned.
    pub fn set(&mut self, row: usize, column: usize, value: F) -> F {
        match self.try_set(row, column, value) {
            Ok(stored) => stored,
            Err(locked) => {
                warn!("{}", locked);
                F::zero()
            },
        }
    }

    /// Get the non-zero elements of row `row`.
    ///
    /// # Panics
    ///
    /// When the index is out of bounds.
    pub fn row(&self, row: usize) -> Line<F> {
        self.row_with(row, Execution::Sequential)
    }

    /// Get the non-zero elements of row `row` using the given execution strategy.
    ///
    /// The strategy only matters for a column-major matrix in the compressed state.
    pub fn row_with(&self, row: usize, execution: Execution) -> Line<F> {
        assert!(row < self.nr_rows, "row index {} out of bounds for a matrix with {} rows", row, self.nr_rows);

        if O::IS_ROW_MAJOR {
            self.major_line(row)
        } else {
            self.minor_line(row, execution)
        }
    }

    /// Get the non-zero elements of column `column`.
    ///
    /// # Panics
    ///
    /// When the index is out of bounds.
    pub fn column(&self, column: usize) -> Line<F> {
        self.column_with(column, Execution::Sequential)
    }

    /// Get the non-zero elements of column `column` using the given execution strategy.
    ///
    /// The strategy only matters for a row-major matrix in the compressed state.
    pub fn column_with(&self, column: usize, execution: Execution) -> Line<F> {
        assert!(
            column < self.nr_columns,
            "column index {} out of bounds for a matrix with {} columns", column, self.nr_columns,
        );

        if O::IS_ROW_MAJOR {
            self.minor_line(column, execution)
        } else {
            self.major_line(column)
        }
    }

    /// Reference to the stored value at a coordinate, if any.
    fn stored(&self, row: usize, column: usize) -> Option<&F> {
        self.assert_in_bounds(row, column);

        let key = O::major_minor(row, column);
        match &self.storage {
            Storage::Uncompressed(map) => map.get(&key),
            Storage::Compressed { values, indices, offsets } => {
                compressed_position(offsets, indices, key).map(|position| &values[position])
            },
        }
    }

    fn has_major(&self, major: usize) -> bool {
        match &self.storage {
            Storage::Uncompressed(map) => map.range((major, 0)..=(major, usize::MAX)).next().is_some(),
            Storage::Compressed { offsets, .. } => offsets[major] < offsets[major + 1],
        }
    }

    fn has_minor(&self, minor: usize) -> bool {
        match &self.storage {
            Storage::Uncompressed(map) => map.keys().any(|&(_, index)| index == minor),
            Storage::Compressed { indices, .. } => indices.contains(&minor),
        }
    }

    /// Copy out a line in storage order.
    pub(super) fn major_line(&self, major: usize) -> Line<F> {
        match &self.storage {
            Storage::Uncompressed(map) => map.range((major, 0)..=(major, usize::MAX))
                .map(|(&(_, minor), value)| (minor, value.clone()))
                .collect(),
            Storage::Compressed { values, indices, offsets } => {
                let range = offsets[major]..offsets[major + 1];
                Line {
                    indices: indices[range.clone()].to_vec(),
                    values: values[range].to_vec(),
                }
            },
        }
    }

    /// Collect a line across the storage order.
    ///
    /// Every stored element is inspected. In the compressed state, the line of each hit is
    /// recovered from the offsets.
    fn minor_line(&self, minor: usize, execution: Execution) -> Line<F> {
        trace!("Scanning {} elements for line {} across the storage order", self.nnz(), minor);

        match &self.storage {
            Storage::Uncompressed(map) => map.iter()
                .filter(|&(&(_, index), _)| index == minor)
                .map(|(&(major, _), value)| (major, value.clone()))
                .collect(),
            Storage::Compressed { values, indices, offsets } => {
                #[cfg(feature = "rayon")]
                {
                    if execution.is_parallel() {
                        let hits = indices.par_iter()
                            .enumerate()
                            .filter(|&(_, &index)| index == minor)
                            .map(|(position, _)| (line_of_position(offsets, position), values[position].clone()))
                            .collect::<Vec<_>>();
                        return hits.into_iter().collect();
                    }
                }
                #[cfg(not(feature = "rayon"))]
                let _ = execution;

                let mut line = 0;
                indices.iter()
                    .enumerate()
                    .filter(|&(_, &index)| index == minor)
                    .map(|(position, _)| {
                        line = advance_to_position(offsets, line, position);
                        (line, values[position].clone())
                    })
                    .collect()
            },
        }
    }
}

/// Position in the compressed arrays of the value stored under `(major, minor)`.
///
/// Binary search within the line, relying on its minor indices being sorted.
fn compressed_position(offsets: &[usize], indices: &[usize], (major, minor): (usize, usize)) -> Option<usize> {
    let start = offsets[major];
    let end = offsets[major + 1];

    indices[start..end].binary_search(&minor).ok().map(|index| start + index)
}
