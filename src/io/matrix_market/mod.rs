//! # Reading Matrix Market files
//!
//! Reading of `.mtx` files in the coordinate format: an optional banner and comment lines, a size
//! line `rows columns entries` and then one line `row column value` per element, with indices
//! counting from one.
//!
//! Only general (non-symmetric) coordinate matrices can be read. Complex values are given as a real
//! and an imaginary part on the same line.
use log::info;

use crate::data::linear_algebra::matrix::{Order, Sparse};
use crate::data::linear_algebra::traits::Element;
use crate::io::error::{FileLocation, Import, Inconsistency, Parse as ParseError, ParseResult};
use crate::io::matrix_market::number::Parse;
use crate::io::matrix_market::token::{BANNER, COMMENT_INDICATOR, COORDINATE, FIELDS, GENERAL, MATRIX};

pub mod number;
mod token;

/// Parse a matrix, in string form, from the Matrix Market coordinate format.
///
/// A fresh matrix is built; on failure no partially filled matrix is returned. Data lines with a
/// zero value count towards the number of entries but are not stored. A later line for the same
/// coordinate overwrites an earlier one.
///
/// # Errors
///
/// Parse errors if the file is syntactically wrong, e.g. a missing or malformed size line or a
/// value that can't be read. Inconsistency errors if an index lies outside of the declared
/// dimensions, or the number of data lines differs from the declared number of entries.
pub fn parse<F: Element + Parse, O: Order>(text: &str) -> Result<Sparse<F, O>, Import> {
    if let Some(banner) = text.lines().next().filter(|line| line.starts_with(BANNER)) {
        check_banner::<F>(banner).map_err(|error| error.wrap("Unsupported Matrix Market banner"))?;
    }

    let mut lines = into_lines(text);

    let (nr_rows, nr_columns, nr_entries) = parse_size_line(lines.next())
        .map_err(|error| error.wrap("Error while reading the matrix dimensions"))?;
    info!("Reading a {}x{} matrix with {} entries", nr_rows, nr_columns, nr_entries);

    let mut matrix = Sparse::new(nr_rows, nr_columns);
    let mut nr_read = 0;
    for (number, line) in lines {
        let (row, column, value) = parse_data_line::<F>((number, line), nr_rows, nr_columns)?;
        matrix.set(row, column, value);
        nr_read += 1;
    }

    if nr_read != nr_entries {
        return Err(Inconsistency::new(format!(
            "The size line declares {} entries, but {} data lines were read", nr_entries, nr_read,
        )).into());
    }

    info!("Read {} entries, {} of which are non-zero", nr_read, matrix.nnz());
    Ok(matrix)
}

/// Split a file into numbered lines, skipping comments and blank lines.
///
/// The banner starts with a comment indicator and is skipped as well.
fn into_lines(text: &str) -> impl Iterator<Item = FileLocation<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line)) // Count from 1
        .filter(|(_, line)| !line.trim_start().starts_with(COMMENT_INDICATOR))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Check that the banner describes a file that can be read into a matrix of this element type.
///
/// The banner looks like `%%MatrixMarket matrix coordinate real general`; the keywords are case
/// insensitive.
fn check_banner<F: Parse>(banner: &str) -> ParseResult<()> {
    let words = banner.split_whitespace().skip(1).map(str::to_lowercase).collect::<Vec<_>>();
    let [object, format, field, symmetry] = words.as_slice() else {
        return Err(ParseError::with_location("Expected four keywords after the banner", (1, banner)));
    };

    if object != MATRIX {
        return Err(ParseError::with_location(format!("Can't read object \"{}\"", object), (1, banner)));
    }
    if format != COORDINATE {
        return Err(ParseError::with_location(format!("Can't read format \"{}\"", format), (1, banner)));
    }
    if symmetry != GENERAL {
        return Err(ParseError::with_location(format!("Can't read symmetry \"{}\"", symmetry), (1, banner)));
    }
    match FIELDS.iter().find(|&&(name, _)| name == field) {
        Some(&(_, nr_tokens)) if nr_tokens == F::TOKENS => Ok(()),
        Some(_) => Err(ParseError::with_location(
            format!("Field \"{}\" has a different number of values per entry than the element type", field),
            (1, banner),
        )),
        None => Err(ParseError::with_location(format!("Can't read field \"{}\"", field), (1, banner))),
    }
}

/// Read the dimensions and the number of entries.
///
/// # Errors
///
/// If there is no such line, when it doesn't hold three integers, or when a dimension is zero.
fn parse_size_line(location: Option<FileLocation>) -> ParseResult<(usize, usize, usize)> {
    let Some((number, line)) = location else {
        return Err(ParseError::new("No line to read, is the file empty?"));
    };

    let values = line.split_whitespace()
        .map(|token| token.parse::<usize>().map_err(|error| ParseError::wrap_other(
            error,
            format!("Failed to read \"{}\" on line {} as a non-negative integer", token, number),
        )))
        .collect::<ParseResult<Vec<_>>>()?;

    match values[..] {
        [nr_rows, nr_columns, nr_entries] => {
            if nr_rows == 0 || nr_columns == 0 {
                Err(ParseError::with_location(
                    format!("Dimensions must be positive, found {}x{}", nr_rows, nr_columns),
                    (number, line),
                ))
            } else {
                Ok((nr_rows, nr_columns, nr_entries))
            }
        },
        _ => Err(ParseError::with_location(
            format!("Expected three values on the size line, found {}", values.len()),
            (number, line),
        )),
    }
}

/// Read a single element.
///
/// Tokens beyond the value are ignored.
///
/// # Return value
///
/// The coordinate of the element counting from zero, and its value.
fn parse_data_line<F: Parse>(
    (number, line): FileLocation,
    nr_rows: usize,
    nr_columns: usize,
) -> Result<(usize, usize, F), Import> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.len() < 2 + F::TOKENS {
        return Err(ParseError::with_location(
            format!("Expected {} values on a data line, found {}", 2 + F::TOKENS, tokens.len()),
            (number, line),
        ).into());
    }

    let index = |text: &str, name: &str| text.parse::<usize>().map_err(|error| ParseError::wrap_other(
        error,
        format!("Failed to read {} index \"{}\" on line {}", name, text, number),
    ));
    let row = index(tokens[0], "row")?;
    let column = index(tokens[1], "column")?;

    if row == 0 || row > nr_rows {
        return Err(Inconsistency::new(format!(
            "Row index {} on line {} is outside of 1..={}", row, number, nr_rows,
        )).into());
    }
    if column == 0 || column > nr_columns {
        return Err(Inconsistency::new(format!(
            "Column index {} on line {} is outside of 1..={}", column, number, nr_columns,
        )).into());
    }

    let value = F::parse(&tokens[2..(2 + F::TOKENS)])
        .map_err(|error| error.wrap(format!("Failed to read the value on line {}: \"{}\"", number, line)))?;

    Ok((row - 1, column - 1, value))
}

#[cfg(test)]
mod test {
    use num_complex::Complex;

    use crate::data::linear_algebra::matrix::{ColumnMajor, RowMajor, Sparse};
    use crate::io::error::Import;
    use crate::io::matrix_market::parse;

    #[test]
    fn single_element() {
        let m = parse::<f64, RowMajor>("2 2 1\n1 1 5.0\n").unwrap();
        assert_eq!((m.nr_rows(), m.nr_columns(), m.nnz()), (2, 2, 1));
        assert_eq!(m.get(0, 0), 5f64);
        assert!(!m.is_compressed());
    }

    #[test]
    fn comments_and_banner() {
        let text = "%%MatrixMarket matrix coordinate real general\n\
            % A comment\n\
            %\n\
            3 2 3\n\
            1 2 -1.5\n\
            \n\
            % Comments in between\n\
            3 1 2e1\n\
            2 2 4\n";
        let m = parse::<f64, ColumnMajor>(text).unwrap();
        assert_eq!(m, Sparse::from_triplets(3, 2, vec![(0, 1, -1.5f64), (2, 0, 20f64), (1, 1, 4f64)]));
    }

    #[test]
    fn zero_values_count_but_are_not_stored() {
        let m = parse::<i32, RowMajor>("2 2 2\n1 1 3\n2 2 0\n").unwrap();
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(1, 1), 0);
    }

    #[test]
    fn no_entries() {
        let m = parse::<f64, RowMajor>("4 5 0\n").unwrap();
        assert_eq!((m.nr_rows(), m.nr_columns(), m.nnz()), (4, 5, 0));
    }

    #[test]
    fn complex() {
        let text = "%%MatrixMarket matrix coordinate complex general\n2 2 2\n1 1 1.0 -1.0\n2 1 0 3\n";
        let m = parse::<Complex<f64>, RowMajor>(text).unwrap();
        assert_eq!(m.get(0, 0), Complex::new(1f64, -1f64));
        assert_eq!(m.get(1, 0), Complex::new(0f64, 3f64));

        assert!(matches!(parse::<f64, RowMajor>(text), Err(Import::Parse(_))));
    }

    #[test]
    fn unsupported_banner() {
        for banner in [
            "%%MatrixMarket matrix array real general",
            "%%MatrixMarket matrix coordinate real symmetric",
            "%%MatrixMarket matrix coordinate pattern general",
            "%%MatrixMarket vector coordinate real general",
            "%%MatrixMarket matrix coordinate",
        ] {
            let text = format!("{}\n1 1 1\n1 1 1.0\n", banner);
            assert!(matches!(parse::<f64, RowMajor>(&text), Err(Import::Parse(_))), "{}", banner);
        }

        let text = "%%MatrixMarket MATRIX Coordinate Real General\n1 1 1\n1 1 1.0\n";
        assert!(parse::<f64, RowMajor>(text).is_ok());
    }

    #[test]
    fn bad_size_line() {
        for text in ["", "% only a comment\n", "0 2 0\n", "2 0 0\n", "-1 2 0\n", "2 2\n", "2 2 1 1\n", "a 2 1\n"] {
            assert!(matches!(parse::<f64, RowMajor>(text), Err(Import::Parse(_))), "{:?}", text);
        }
    }

    #[test]
    fn index_out_of_range() {
        for text in ["2 2 1\n3 1 1.0\n", "2 2 1\n0 1 1.0\n", "2 2 1\n1 3 1.0\n", "1 1 1\n2 2 0\n1 1 5.0\n"] {
            assert!(matches!(parse::<f64, ColumnMajor>(text), Err(Import::Inconsistency(_))), "{:?}", text);
        }
    }

    #[test]
    fn bad_data_line() {
        for text in ["2 2 1\n1 1\n", "2 2 1\n1 x 1.0\n", "2 2 1\n1 1 y\n", "2 2 1\n-1 1 1.0\n"] {
            assert!(matches!(parse::<f64, RowMajor>(text), Err(Import::Parse(_))), "{:?}", text);
        }
    }

    #[test]
    fn count_mismatch() {
        assert!(matches!(parse::<f64, RowMajor>("2 2 2\n1 1 1.0\n"), Err(Import::Inconsistency(_))));
        assert!(matches!(parse::<f64, RowMajor>("2 2 1\n1 1 1.0\n2 2 2.0\n"), Err(Import::Inconsistency(_))));
    }
}
