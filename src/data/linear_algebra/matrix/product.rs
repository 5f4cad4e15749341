//! # Products
//!
//! Matrix times dense vector and matrix times sparse matrix. Only non-zero elements take part in
//! the computation.
use std::ops::Mul;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::data::linear_algebra::Execution;
use crate::data::linear_algebra::matrix::{Line, Order, Sparse};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::utilities::intersect_sorted;

impl<F: Element, O: Order> Sparse<F, O> {
    /// Multiply with a dense vector.
    ///
    /// # Panics
    ///
    /// When the length of the vector differs from the number of columns.
    pub fn mul_vector(&self, vector: &[F]) -> Vec<F> {
        self.mul_vector_with(vector, Execution::Sequential)
    }

    /// Multiply with a dense vector using the given execution strategy.
    ///
    /// A row-major matrix computes each output value as the inner product of a row with the
    /// vector, and these are independent. A column-major matrix scatters the contribution of each
    /// column into the output, which is done sequentially regardless of the strategy.
    pub fn mul_vector_with(&self, vector: &[F], execution: Execution) -> Vec<F> {
        assert_eq!(
            vector.len(), self.nr_columns,
            "vector of length {} can't be multiplied with a matrix with {} columns", vector.len(), self.nr_columns,
        );

        if O::IS_ROW_MAJOR {
            #[cfg(feature = "rayon")]
            {
                if execution.is_parallel() {
                    return (0..self.nr_rows)
                        .into_par_iter()
                        .map(|row| inner_product(&self.row(row), vector))
                        .collect();
                }
            }
            #[cfg(not(feature = "rayon"))]
            let _ = execution;

            (0..self.nr_rows)
                .map(|row| inner_product(&self.row(row), vector))
                .collect()
        } else {
            let mut result = vec![F::zero(); self.nr_rows];
            for (row, column, value) in self.iter() {
                result[row] += value.clone() * vector[column].clone();
            }

            result
        }
    }

    /// Multiply with another sparse matrix.
    ///
    /// # Return value
    ///
    /// An uncompressed matrix in the storage order of `self`.
    ///
    /// # Panics
    ///
    /// When the number of columns of `self` differs from the number of rows of `other`.
    pub fn mul_matrix<P: Order>(&self, other: &Sparse<F, P>) -> Sparse<F, O> {
        self.mul_matrix_with(other, Execution::Sequential)
    }

    /// Multiply with another sparse matrix using the given execution strategy.
    ///
    /// Each output cell is the sum of products over the intersection of the indices of a row of
    /// `self` and a column of `other`. Cells with an empty intersection are never written. When
    /// `other` has a single column, the product is computed as a product with a dense vector.
    pub fn mul_matrix_with<P: Order>(&self, other: &Sparse<F, P>, execution: Execution) -> Sparse<F, O> {
        assert_eq!(
            self.nr_columns, other.nr_rows(),
            "a matrix with {} columns can't be multiplied with a matrix with {} rows", self.nr_columns, other.nr_rows(),
        );

        let mut result = Sparse::new(self.nr_rows, other.nr_columns());

        if other.nr_columns() == 1 {
            let mut vector = vec![F::zero(); other.nr_rows()];
            for (row, value) in other.column_with(0, execution).iter() {
                vector[row] = value.clone();
            }
            for (row, value) in self.mul_vector_with(&vector, execution).into_iter().enumerate() {
                result.set(row, 0, value);
            }

            return result;
        }

        let columns = (0..other.nr_columns())
            .map(|column| other.column_with(column, execution))
            .collect::<Vec<_>>();
        let row_products = |row| {
            let row = self.row_with(row, execution);
            columns.iter()
                .enumerate()
                .filter_map(|(column_index, column)| {
                    let pairs = intersect_sorted(&row.indices, &column.indices);
                    if pairs.is_empty() {
                        None
                    } else {
                        let mut sum = F::zero();
                        for (i, j) in pairs {
                            sum += row.values[i].clone() * column.values[j].clone();
                        }
                        Some((column_index, sum))
                    }
                })
                .collect::<Vec<_>>()
        };

        #[cfg(feature = "rayon")]
        let rows = if execution.is_parallel() {
            (0..self.nr_rows).into_par_iter().map(row_products).collect::<Vec<_>>()
        } else {
            (0..self.nr_rows).map(row_products).collect::<Vec<_>>()
        };
        #[cfg(not(feature = "rayon"))]
        let rows = (0..self.nr_rows).map(row_products).collect::<Vec<_>>();

        for (row, cells) in rows.into_iter().enumerate() {
            for (column, value) in cells {
                result.set(row, column, value);
            }
        }

        result
    }
}

/// Sum of products of the non-zero values of a line with the matching vector entries.
fn inner_product<F: Element>(line: &Line<F>, vector: &[F]) -> F {
    let mut sum = F::zero();
    for (index, value) in line.iter() {
        sum += value.clone() * vector[index].clone();
    }

    sum
}

impl<F: Element, O: Order> Mul<&[F]> for &Sparse<F, O> {
    type Output = Vec<F>;

    fn mul(self, rhs: &[F]) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl<F: Element, O: Order> Mul<&Vec<F>> for &Sparse<F, O> {
    type Output = Vec<F>;

    fn mul(self, rhs: &Vec<F>) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl<F: Element, O: Order, P: Order> Mul<&Sparse<F, P>> for &Sparse<F, O> {
    type Output = Sparse<F, O>;

    fn mul(self, rhs: &Sparse<F, P>) -> Self::Output {
        self.mul_matrix(rhs)
    }
}
