//! # Integration tests that require a look inside the crate.
//!
//! Each problem is a small matrix given as a Matrix Market literal string, which is read and then
//! checked in all four configurations of storage order and storage state.
//!
//! Convention for function names:
//!
//! * `const MATRIX_MARKET_LITERAL_STRING`
//! * `fn matrix::<O>()`: the expected matrix, built through writes
