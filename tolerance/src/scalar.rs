use std::fmt::{Debug, Display};

use num_traits::Float;

/// Default base tolerance shared by every scalar type.
pub const DEFAULT_EPS: f64 = 1e-5;

/// Floating-point scalar a comparer can be built over.
pub trait Scalar: Float + Debug + Display + Send + Sync + 'static {
    const DEFAULT_EPS: Self;
}

impl Scalar for f32 {
    const DEFAULT_EPS: Self = DEFAULT_EPS as f32;
}

impl Scalar for f64 {
    const DEFAULT_EPS: Self = DEFAULT_EPS;
}
