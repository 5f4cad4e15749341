//! # Tokens used in Matrix Market files

/// Indicates the start of a comment.
pub const COMMENT_INDICATOR: &str = "%";

/// Starts the optional first line describing the kind of file.
pub const BANNER: &str = "%%MatrixMarket";

/// The only object type that can be read.
pub const MATRIX: &str = "matrix";

/// Storage format listing only the non-zero elements.
///
/// # Note
///
/// The alternative, `array`, lists all elements of a dense matrix.
pub const COORDINATE: &str = "coordinate";

/// Symmetry type for matrices of which all elements are listed.
pub const GENERAL: &str = "general";

/// Element field names and the number of value tokens on each data line.
pub const FIELDS: [(&str, usize); 4] = [("real", 1), ("double", 1), ("integer", 1), ("complex", 2)];
