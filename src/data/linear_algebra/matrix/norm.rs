//! # Matrix norms
//!
//! All norms are real valued and computed from the magnitudes of the non-zero elements only.
use std::fmt;

use enum_map::{Enum, EnumMap};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::data::linear_algebra::Execution;
use crate::data::linear_algebra::matrix::{Order, Sparse};
#[cfg(feature = "rayon")]
use crate::data::linear_algebra::matrix::Storage;
use crate::data::linear_algebra::traits::Element;

/// The supported matrix norms.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NormType {
    /// Largest sum of magnitudes over the columns.
    One,
    /// Largest sum of magnitudes over the rows.
    Infinity,
    /// Square root of the sum of squared magnitudes of all elements.
    Frobenius,
}

impl fmt::Display for NormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NormType::One => "one",
            NormType::Infinity => "infinity",
            NormType::Frobenius => "Frobenius",
        })
    }
}

impl<F: Element, O: Order> Sparse<F, O> {
    /// Compute a norm of the matrix.
    ///
    /// A matrix without rows and columns has norm zero.
    pub fn norm(&self, norm_type: NormType) -> f64 {
        self.norm_with(norm_type, Execution::Sequential)
    }

    /// Compute a norm of the matrix using the given execution strategy.
    pub fn norm_with(&self, norm_type: NormType, execution: Execution) -> f64 {
        if self.nr_rows == 0 && self.nr_columns == 0 {
            return 0f64;
        }

        match norm_type {
            NormType::One => if O::IS_ROW_MAJOR {
                self.max_cross_line_sum()
            } else {
                self.max_line_sum(execution)
            },
            NormType::Infinity => if O::IS_ROW_MAJOR {
                self.max_line_sum(execution)
            } else {
                self.max_cross_line_sum()
            },
            NormType::Frobenius => self.frobenius(execution),
        }
    }

    /// All norms at once.
    pub fn norms(&self) -> EnumMap<NormType, f64> {
        EnumMap::from_fn(|norm_type| self.norm(norm_type))
    }

    /// Largest sum of magnitudes over the lines in storage order.
    fn max_line_sum(&self, execution: Execution) -> f64 {
        let line_sum = |line| self.major_line(line).values.iter()
            .map(Element::magnitude)
            .fold(0f64, |total, magnitude| total + magnitude);

        #[cfg(feature = "rayon")]
        {
            if execution.is_parallel() {
                return (0..self.nr_lines()).into_par_iter()
                    .map(line_sum)
                    .reduce(|| 0f64, f64::max);
            }
        }
        #[cfg(not(feature = "rayon"))]
        let _ = execution;

        (0..self.nr_lines()).map(line_sum).fold(0f64, f64::max)
    }

    /// Largest sum of magnitudes over the lines across the storage order.
    ///
    /// All sums are accumulated in a single pass over the elements in storage order, which adds
    /// the magnitudes of each sum in the same order as extracting that line would.
    fn max_cross_line_sum(&self) -> f64 {
        let mut sums = vec![0f64; self.line_length()];
        for (row, column, value) in self.iter() {
            let (_, minor) = O::major_minor(row, column);
            sums[minor] += value.magnitude();
        }

        sums.into_iter().fold(0f64, f64::max)
    }

    fn frobenius(&self, execution: Execution) -> f64 {
        #[cfg(feature = "rayon")]
        {
            if let Storage::Compressed { values, .. } = &self.storage {
                if execution.is_parallel() {
                    let squares = values.par_iter().map(Element::squared_magnitude).collect::<Vec<_>>();
                    return squares.into_iter().fold(0f64, |total, square| total + square).sqrt();
                }
            }
        }
        #[cfg(not(feature = "rayon"))]
        let _ = execution;

        self.iter()
            .map(|(_, _, value)| value.squared_magnitude())
            .fold(0f64, |total, square| total + square)
            .sqrt()
    }
}
