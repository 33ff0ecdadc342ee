//! Tolerance-based comparison of scalars and vectors.
//!
//! One base tolerance `eps` yields three scales:
//!
//! | scale     | used by                                   |
//! |-----------|-------------------------------------------|
//! | `eps`     | scalar zero/equality/ordering tests       |
//! | `eps²`    | squared-length tests, `zero_squared`      |
//! | `eps^1.5` | zero snapping in `mul_sum` / `mul_diff`   |
//!
//! Behavior for NaN or infinite arguments is unspecified: queries do not
//! guard against them.

use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;

use crate::scalar::Scalar;
use crate::vector_traits::{is_vector_of_dim, Dot, Vector};

mod config;

pub use config::ComparerConfig;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ComparerError {
    #[error("Tolerance must be a positive finite number, got {0}")]
    InvalidTolerance(f64),
}

pub type ComparerResult<T> = Result<T, ComparerError>;

static SHARED: LazyLock<ApproximateComparer<f64>> = LazyLock::new(ApproximateComparer::default);

/// Immutable comparer holding a base tolerance and its derived scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateComparer<T: Scalar = f64> {
    eps: T,
    neg_eps: T,
    eps_squared: T,
    neg_eps_squared: T,
    eps15: T,
    neg_eps15: T,
}

impl<T: Scalar> ApproximateComparer<T> {
    /// Creates a comparer. `eps` must be positive and finite.
    pub fn new(eps: T) -> ComparerResult<Self> {
        if !(eps > T::zero() && eps.is_finite()) {
            tracing::debug!(eps = %eps, "Rejected approximate comparer tolerance");
            let eps = eps.to_f64().unwrap_or(f64::NAN);
            return Err(ComparerError::InvalidTolerance(eps));
        }

        Ok(Self::from_valid_eps(eps))
    }

    fn from_valid_eps(eps: T) -> Self {
        let eps_squared = eps * eps;
        let eps15 = eps * eps.sqrt();
        tracing::trace!(eps = %eps, "Created approximate comparer");

        Self {
            eps,
            neg_eps: -eps,
            eps_squared,
            neg_eps_squared: -eps_squared,
            eps15,
            neg_eps15: -eps15,
        }
    }

    #[inline]
    pub fn eps(&self) -> T {
        self.eps
    }

    #[inline]
    pub fn eps_squared(&self) -> T {
        self.eps_squared
    }

    /// `eps^1.5`, the base of the snapping threshold in [`Self::mul_sum`].
    #[inline]
    pub fn eps15(&self) -> T {
        self.eps15
    }

    /// `-eps < d < eps`. A value exactly at `±eps` is not zero.
    #[inline]
    pub fn zero(&self, d: T) -> bool {
        d > self.neg_eps && d < self.eps
    }

    /// Zero test for quantities that are already squared: `-eps² < d < eps²`.
    #[inline]
    pub fn zero_squared(&self, d: T) -> bool {
        d > self.neg_eps_squared && d < self.eps_squared
    }

    /// `dot(v, v) < eps²`.
    ///
    /// This bounds the Euclidean length, not each component: several
    /// components that individually pass [`Self::zero`] can still fail here.
    #[inline]
    pub fn zero_vec<V: Dot<Scalar = T>>(&self, v: V) -> bool {
        v.length_squared() < self.eps_squared
    }

    #[inline]
    pub fn equals(&self, a: T, b: T) -> bool {
        self.zero(a - b)
    }

    /// Component-wise [`Self::equals`].
    pub fn equals_vec<V: Vector<Scalar = T>>(&self, a: V, b: V) -> bool {
        (0..V::DIM).all(|i| self.equals(a[i], b[i]))
    }

    /// `a > b + eps`
    #[inline]
    pub fn gt(&self, a: T, b: T) -> bool {
        a > b + self.eps
    }

    /// `a < b - eps`
    #[inline]
    pub fn lt(&self, a: T, b: T) -> bool {
        a < b + self.neg_eps
    }

    /// `a > b - eps`
    #[inline]
    pub fn ge(&self, a: T, b: T) -> bool {
        a > b + self.neg_eps
    }

    /// `b > a - eps`
    #[inline]
    pub fn le(&self, a: T, b: T) -> bool {
        b > a + self.neg_eps
    }

    /// `1` above `eps`, `-1` below `-eps`, `0` in between.
    #[inline]
    pub fn sign(&self, a: T) -> i32 {
        if a > self.eps {
            1
        } else if a < self.neg_eps {
            -1
        } else {
            0
        }
    }

    /// `a*b + c*d`, snapped to exactly zero when it falls inside the
    /// magnitude-adaptive threshold.
    ///
    /// The threshold is `eps^1.5` while every operand is below one in
    /// magnitude, and `max(|a|, |b|, |c|, |d|) * eps^1.5` otherwise, so the
    /// snapping decision follows the rounding error of the operands' scale.
    /// See Ericson, "Numerical Robustness for Geometric Calculations"
    /// (GDC 2007), slide 42.
    pub fn mul_sum(&self, a: T, b: T, c: T, d: T) -> T {
        self.snap(a * b + c * d, a, b, c, d)
    }

    /// Corrected 2×2 determinant `a*b - c*d`, snapped like [`Self::mul_sum`].
    pub fn mul_diff(&self, a: T, b: T, c: T, d: T) -> T {
        self.snap(a * b - c * d, a, b, c, d)
    }

    /// Robust dot product of two 2D vectors, built on [`Self::mul_sum`].
    pub fn dot2<V: Vector<Scalar = T>>(&self, a: V, b: V) -> T {
        const { assert!(is_vector_of_dim::<V>(2), "dot2 requires a 2D vector") };
        self.mul_sum(a[0], b[0], a[1], b[1])
    }

    #[inline]
    fn snap(&self, value: T, a: T, b: T, c: T, d: T) -> T {
        let max = a.abs().max(b.abs()).max(c.abs()).max(d.abs());
        let (lo, hi) = if max < T::one() {
            (self.neg_eps15, self.eps15)
        } else {
            (max * self.neg_eps15, max * self.eps15)
        };

        if value > lo && value < hi {
            T::zero()
        } else {
            value
        }
    }
}

impl ApproximateComparer<f64> {
    /// Process-wide comparer with the default tolerance.
    ///
    /// Prefer passing an explicit comparer where the tolerance matters.
    pub fn shared() -> &'static ApproximateComparer<f64> {
        &SHARED
    }
}

impl<T: Scalar> Default for ApproximateComparer<T> {
    fn default() -> Self {
        Self::from_valid_eps(T::DEFAULT_EPS)
    }
}

impl<T: Scalar> fmt::Display for ApproximateComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(eps={})", self.eps)
    }
}
