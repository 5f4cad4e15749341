//! # Switching between the two storage states
use std::collections::BTreeMap;
use std::mem;

use log::debug;

use crate::data::linear_algebra::matrix::{Order, Sparse, Storage};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::utilities::advance_to_position;

impl<F: Element, O: Order> Sparse<F, O> {
    /// Freeze the sparsity pattern into the compressed layout.
    ///
    /// The map is walked once in key order, which is exactly the order in which the values end up
    /// in the compressed arrays. Lines without elements get an empty range. Does nothing when the
    /// matrix is already compressed.
    pub fn compress(&mut self) {
        let nr_lines = self.nr_lines();
        let map = match &mut self.storage {
            Storage::Uncompressed(map) => mem::take(map),
            Storage::Compressed { .. } => return,
        };

        let mut offsets = vec![0; nr_lines + 1];
        let mut indices = Vec::with_capacity(map.len());
        let mut values = Vec::with_capacity(map.len());
        for ((major, minor), value) in map {
            offsets[major + 1] += 1;
            indices.push(minor);
            values.push(value);
        }
        for line in 0..nr_lines {
            offsets[line + 1] += offsets[line];
        }

        debug!("Compressed a {}x{} matrix with {} elements", self.nr_rows, self.nr_columns, values.len());
        self.storage = Storage::Compressed { values, indices, offsets };
        debug_assert!(self.is_consistent());
    }

    /// Move the elements back into the editable map.
    ///
    /// Every stored value, including values that were changed while compressed, ends up at the
    /// coordinate it occupied. Does nothing when the matrix is not compressed.
    pub fn uncompress(&mut self) {
        let (values, indices, offsets) = match &mut self.storage {
            Storage::Compressed { values, indices, offsets } => {
                (mem::take(values), mem::take(indices), mem::take(offsets))
            },
            Storage::Uncompressed(_) => return,
        };

        let mut line = 0;
        let map = values.into_iter()
            .zip(indices)
            .enumerate()
            .map(|(position, (value, minor))| {
                line = advance_to_position(&offsets, line, position);
                ((line, minor), value)
            })
            .collect::<BTreeMap<_, _>>();

        debug!("Uncompressed a {}x{} matrix with {} elements", self.nr_rows, self.nr_columns, map.len());
        self.storage = Storage::Uncompressed(map);
        debug_assert!(self.is_consistent());
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::{ColumnMajor, Order, RowMajor, Sparse, Storage};
    use crate::data::linear_algebra::matrix::test::test_matrix;

    fn compressed_layout<O: Order>(expected_values: Vec<f64>, expected_indices: Vec<usize>, expected_offsets: Vec<usize>) {
        let mut m = test_matrix::<O>();
        m.compress();

        assert!(m.is_compressed());
        assert_eq!(m.nnz(), 4);
        match &m.storage {
            Storage::Compressed { values, indices, offsets } => {
                assert_eq!(values, &expected_values);
                assert_eq!(indices, &expected_indices);
                assert_eq!(offsets, &expected_offsets);
            },
            Storage::Uncompressed(_) => panic!("matrix should be compressed"),
        }
    }

    #[test]
    fn compress_row_major() {
        compressed_layout::<RowMajor>(vec![1f64, 2f64, 5f64, 6f64], vec![0, 1, 1, 2], vec![0, 2, 4]);
    }

    #[test]
    fn compress_column_major() {
        compressed_layout::<ColumnMajor>(vec![1f64, 2f64, 5f64, 6f64], vec![0, 0, 1, 1], vec![0, 1, 3, 4]);
    }

    fn round_trip<O: Order>() {
        let original = test_matrix::<O>();
        let mut m = original.clone();

        m.compress();
        m.compress();
        assert!(m.is_compressed());
        m.uncompress();
        m.uncompress();
        assert!(!m.is_compressed());
        assert_eq!(m, original);
    }

    fn edits_survive_uncompress<O: Order>() {
        let mut m = test_matrix::<O>();
        m.compress();
        m.set(0, 1, 7f64);
        m.uncompress();

        assert_eq!(m.get(0, 1), 7f64);
        assert_eq!(m.nnz(), 4);

        // Structure can change again
        m.set(1, 0, 3f64);
        m.set(0, 0, 0f64);
        assert_eq!(m.nnz(), 4);
        assert!(m.contains(1, 0));
        assert!(!m.contains(0, 0));
    }

    fn empty_lines<O: Order>() {
        let mut m = Sparse::<f64, O>::from_triplets(5, 5, vec![(4, 4, 1f64), (0, 0, 2f64)]);
        m.compress();
        assert!(m.is_consistent());
        assert_eq!(m.get(4, 4), 1f64);
        assert_eq!(m.get(0, 0), 2f64);
        assert!(!m.has_row(2));
        m.uncompress();
        assert_eq!(m, Sparse::from_triplets(5, 5, vec![(0, 0, 2f64), (4, 4, 1f64)]));
    }

    #[test]
    fn test_round_trip() {
        round_trip::<RowMajor>();
        round_trip::<ColumnMajor>();
    }

    #[test]
    fn test_edits_survive_uncompress() {
        edits_survive_uncompress::<RowMajor>();
        edits_survive_uncompress::<ColumnMajor>();
    }

    #[test]
    fn test_empty_lines() {
        empty_lines::<RowMajor>();
        empty_lines::<ColumnMajor>();
    }

    #[test]
    fn empty_matrix() {
        let mut m = Sparse::<f64, RowMajor>::new(3, 0);
        m.compress();
        assert_eq!(m.nnz(), 0);
        assert!(!m.has_row(2));
        m.uncompress();
        assert_eq!(m, Sparse::new(3, 0));
    }
}
