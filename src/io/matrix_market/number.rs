//! # Element parsing
//!
//! Reading element values from the tokens of a data line.
use std::str::FromStr;

use num_complex::Complex;

use crate::io::error::{Parse as ParseError, ParseResult};

/// Parsing an element value read from a Matrix Market file.
pub trait Parse: Sized {
    /// Number of whitespace separated tokens that together describe one value.
    const TOKENS: usize;

    /// Read a value from exactly `TOKENS` tokens.
    ///
    /// # Errors
    ///
    /// When a token is not a valid number of the right type.
    fn parse(tokens: &[&str]) -> ParseResult<Self>;
}

/// Parse a single token into a primitive number.
fn parse_token<T>(text: &str) -> ParseResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse().map_err(|error| ParseError::wrap_other(
        error,
        format!("Failed to parse value text \"{}\" into {}", text, std::any::type_name::<T>()),
    ))
}

macro_rules! single_token {
    ($($t:ty),*) => {
        $(
            impl Parse for $t {
                const TOKENS: usize = 1;

                fn parse(tokens: &[&str]) -> ParseResult<Self> {
                    debug_assert_eq!(tokens.len(), Self::TOKENS);

                    parse_token(tokens[0])
                }
            }
        )*
    }
}

single_token!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! real_and_imaginary {
    ($($t:ty),*) => {
        $(
            impl Parse for Complex<$t> {
                const TOKENS: usize = 2;

                fn parse(tokens: &[&str]) -> ParseResult<Self> {
                    debug_assert_eq!(tokens.len(), Self::TOKENS);

                    let re = parse_token::<$t>(tokens[0]).map_err(|error| error.wrap("Invalid real part"))?;
                    let im = parse_token::<$t>(tokens[1]).map_err(|error| error.wrap("Invalid imaginary part"))?;

                    Ok(Complex::new(re, im))
                }
            }
        )*
    }
}

real_and_imaginary!(f32, f64);
