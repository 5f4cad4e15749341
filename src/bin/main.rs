use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::info;
use num_complex::Complex;

use dual_sparse::{ColumnMajor, Element, Execution, NormType, Order, RowMajor};
use dual_sparse::io::error::Import;
use dual_sparse::io::import;
use dual_sparse::io::matrix_market::number::Parse;

/// Read a sparse matrix and report its norms and products.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the matrix, in the Matrix Market coordinate format
    matrix_file: PathBuf,
    /// Storage order of the matrix
    #[arg(short, long, value_enum, default_value_t = StorageOrder::Row)]
    order: StorageOrder,
    /// Type of the matrix elements
    #[arg(short, long, value_enum, default_value_t = ElementType::Real)]
    element: ElementType,
    /// Compress the matrix before computing
    #[arg(short, long)]
    compress: bool,
    /// Distribute independent work over threads
    #[arg(short, long)]
    parallel: bool,
    /// Print the matrix and the product with the all-ones vector
    #[arg(long)]
    print: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StorageOrder {
    Row,
    Column,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ElementType {
    Real,
    Complex,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let result = match (opts.order, opts.element) {
        (StorageOrder::Row, ElementType::Real) => run::<f64, RowMajor>(&opts),
        (StorageOrder::Row, ElementType::Complex) => run::<Complex<f64>, RowMajor>(&opts),
        (StorageOrder::Column, ElementType::Real) => run::<f64, ColumnMajor>(&opts),
        (StorageOrder::Column, ElementType::Complex) => run::<Complex<f64>, ColumnMajor>(&opts),
    };

    if let Err(error) = result {
        eprintln!("Couldn't read the matrix file: {}", error);
        exit(1);
    }
}

fn run<F: Element + Parse, O: Order>(opts: &Opts) -> Result<(), Import> {
    println!("Reading matrix file: \"{}\"...", opts.matrix_file.to_string_lossy());
    let mut matrix = import::<F, O>(&opts.matrix_file)?;
    if opts.compress {
        matrix.compress();
    }
    let execution = if opts.parallel { Execution::Parallel } else { Execution::Sequential };

    println!(
        "{} rows, {} columns, {} non-zero elements, {}",
        matrix.nr_rows(), matrix.nr_columns(), matrix.nnz(),
        if matrix.is_compressed() { "compressed" } else { "uncompressed" },
    );
    if opts.print {
        println!("{}", matrix);
    }

    let ones = vec![F::one(); matrix.nr_columns()];
    let start = Instant::now();
    let product = matrix.mul_vector_with(&ones, execution);
    info!("Matrix times vector took {:?}", start.elapsed());
    if opts.print {
        let values = product.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("Product with the all-ones vector: {}", values.join(" "));
    }

    if matrix.nr_rows() == matrix.nr_columns() {
        let start = Instant::now();
        let square = matrix.mul_matrix_with(&matrix, execution);
        info!("Matrix times matrix took {:?}", start.elapsed());
        println!("The square of the matrix has {} non-zero elements", square.nnz());
    }

    for norm_type in [NormType::One, NormType::Infinity, NormType::Frobenius] {
        let start = Instant::now();
        let norm = matrix.norm_with(norm_type, execution);
        info!("The {} norm took {:?}", norm_type, start.elapsed());
        println!("{} norm: {}", norm_type, norm);
    }

    Ok(())
}
