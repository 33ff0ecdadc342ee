//! Epsilon-based approximate comparison for floating-point scalars and glam
//! vectors.
//!
//! ```rust
//! use glam::DVec2;
//! use tolerance::ApproximateComparer;
//!
//! let cmp = ApproximateComparer::new(1e-3).unwrap();
//!
//! assert!(cmp.zero(5e-4));
//! assert!(cmp.equals(1.0, 1.0005));
//! assert!(cmp.zero_vec(DVec2::new(5e-4, 5e-4)));
//! assert_eq!(cmp.sign(-0.5), -1);
//! assert_eq!(cmp.mul_diff(3.0, 4.0, 6.0, 2.0), 0.0);
//! ```

pub mod comparer;
pub mod scalar;
pub mod vector_traits;

#[cfg(test)]
mod testing;

pub use comparer::{ApproximateComparer, ComparerConfig, ComparerError, ComparerResult};
pub use scalar::{Scalar, DEFAULT_EPS};
pub use vector_traits::{
    dimension, is_vector, is_vector_of_dim, Dot, IfVector, ScalarOf, Vector, VectorTraits,
};
