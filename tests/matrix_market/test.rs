use approx::assert_relative_eq;
use num_complex::Complex;

use dual_sparse::{ColumnMajor, Execution, NormType, Order, RowMajor, Sparse};
use dual_sparse::io::error::Import;

use super::read;

fn laplacian<O: Order>() {
    let mut matrix = read::<f64, O>("laplacian_8.mtx").unwrap();
    assert_eq!((matrix.nr_rows(), matrix.nr_columns(), matrix.nnz()), (8, 8, 22));
    assert!(!matrix.is_compressed());

    for _ in 0..2 {
        for execution in [Execution::Sequential, Execution::Parallel] {
            let product = matrix.mul_vector_with(&[1f64; 8], execution);
            assert_eq!(product, vec![3f64, 2f64, 2f64, 2f64, 2f64, 2f64, 2f64, 3f64]);

            let square = matrix.mul_matrix_with(&matrix, execution);
            assert_eq!(square.nnz(), 34);
            assert_eq!(square.get(0, 0), 17f64);
            assert_eq!(square.get(3, 3), 18f64);
            assert_eq!(square.get(3, 4), -8f64);
            assert_eq!(square.get(3, 5), 1f64);
            assert!(!square.contains(3, 6));

            assert_relative_eq!(matrix.norm_with(NormType::One, execution), 6f64);
            assert_relative_eq!(matrix.norm_with(NormType::Infinity, execution), 6f64);
            assert_relative_eq!(matrix.norm_with(NormType::Frobenius, execution), 142f64.sqrt());
        }
        matrix.compress();
    }

    // The boundary rows have only two elements
    assert_eq!(matrix.row(0).len(), 2);
    assert_eq!(matrix.column(7).len(), 2);
    assert_eq!(matrix.row(4).indices, vec![3, 4, 5]);
}

#[test]
fn test_laplacian() {
    laplacian::<RowMajor>();
    laplacian::<ColumnMajor>();
}

#[test]
fn txt_extension() {
    let matrix = read::<f64, ColumnMajor>("anti_diagonal.txt").unwrap();
    assert_eq!(matrix, Sparse::from_triplets(2, 2, vec![(0, 1, 2f64), (1, 0, 3f64)]));
    assert_eq!(matrix.mul_vector(&[1f64, 1f64]), vec![2f64, 3f64]);
}

#[test]
fn complex() {
    let mut matrix = read::<Complex<f64>, RowMajor>("hermitian_2.mtx").unwrap();
    let i = Complex::new(0f64, 1f64);
    let one = Complex::new(1f64, 0f64);

    for _ in 0..2 {
        assert_eq!(matrix.get(0, 1), i);
        assert_eq!(matrix.get(1, 0), -i);
        assert_eq!(matrix.mul_vector(&[one, one]), vec![one + one + i, -i]);
        assert_relative_eq!(matrix.norm(NormType::One), 3f64);
        assert_relative_eq!(matrix.norm(NormType::Infinity), 3f64);
        assert_relative_eq!(matrix.norm(NormType::Frobenius), 6f64.sqrt());
        matrix.compress();
    }
}

#[test]
fn complex_file_as_real() {
    assert!(matches!(read::<f64, RowMajor>("hermitian_2.mtx"), Err(Import::Parse(_))));
}

#[test]
fn missing_entry() {
    assert!(matches!(read::<f64, RowMajor>("missing_entry.mtx"), Err(Import::Inconsistency(_))));
}

#[test]
fn symmetric() {
    assert!(matches!(read::<f64, ColumnMajor>("symmetric.mtx"), Err(Import::Parse(_))));
}

#[test]
fn unknown_extension() {
    assert!(matches!(read::<f64, RowMajor>("anti_diagonal.dat"), Err(Import::FileExtension(_))));
}

#[test]
fn missing_file() {
    assert!(matches!(read::<f64, RowMajor>("does_not_exist.mtx"), Err(Import::IO(_))));
}
