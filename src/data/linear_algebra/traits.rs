//! # Traits for elements in sparse datastructures
//!
//! A sparse data structure only stores values that are not zero, so its element type needs a
//! notion of zero. The norms of a matrix are real numbers even when the elements are complex, so
//! elements also need a magnitude.
use std::fmt::{Debug, Display};

use num_complex::Complex;
use num_traits::NumAssign;

/// Element of a `Sparse` matrix.
///
/// The additive identity (`Zero`) is the value of every element that is not stored. Elements
/// must be sendable between threads such that lines of a matrix can be processed in parallel.
pub trait Element: NumAssign + Clone + Debug + Display + Send + Sync + 'static {
    /// Absolute value, as a real number.
    fn magnitude(&self) -> f64;

    /// Squared absolute value, as a real number.
    fn squared_magnitude(&self) -> f64 {
        let magnitude = self.magnitude();
        magnitude * magnitude
    }
}

macro_rules! signed {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn magnitude(&self) -> f64 {
                    (*self as f64).abs()
                }
            }
        )*
    }
}

macro_rules! unsigned {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn magnitude(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    }
}

signed!(f32, f64, i8, i16, i32, i64, isize);
unsigned!(u8, u16, u32, u64, usize);

impl Element for Complex<f64> {
    fn magnitude(&self) -> f64 {
        self.norm()
    }

    fn squared_magnitude(&self) -> f64 {
        self.norm_sqr()
    }
}

impl Element for Complex<f32> {
    fn magnitude(&self) -> f64 {
        f64::from(self.norm())
    }

    fn squared_magnitude(&self) -> f64 {
        f64::from(self.re).powi(2) + f64::from(self.im).powi(2)
    }
}
