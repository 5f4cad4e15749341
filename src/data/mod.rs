//! # Storing of sparse matrices in memory
//!
//! This module provides the data structures used to represent matrices in memory.

pub mod linear_algebra;
