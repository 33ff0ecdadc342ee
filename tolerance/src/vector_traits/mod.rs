//! Compile-time recognition of vector types.
//!
//! The recognized family is glam's fixed-dimension vectors. Membership is
//! expressed by the sealed [`Vector`] trait, so a downstream type with the same
//! shape (same component count and scalar type) is never mistaken for one.
//! [`VectorTraits`] is the queryable fact: it answers "is this a vector, and of
//! which dimension" for family members and for the primitive scalars.
//!
//! The squared-length capability the comparer needs is the separate, open
//! [`Dot`] trait. Types outside the family can implement it to be usable with
//! [`ApproximateComparer::zero_vec`](crate::ApproximateComparer::zero_vec).

use std::ops::Index;

use glam::{
    DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec3A, Vec4,
};

use crate::scalar::Scalar;

mod private {
    pub trait Sealed {}
}

/// Type-level classification: whether a type is a recognized vector.
///
/// This is a queryable fact only. Generic code that must accept nothing but
/// the family bounds on [`Vector`] instead.
pub trait VectorTraits {
    const IS_VECTOR: bool;
    /// Component count for vectors, `None` otherwise.
    const DIMENSION: Option<usize>;
}

/// Dot product capability.
pub trait Dot: Copy {
    type Scalar: Copy;

    fn dot(self, rhs: Self) -> Self::Scalar;

    #[inline]
    fn length_squared(self) -> Self::Scalar {
        self.dot(self)
    }
}

/// Member of the recognized vector family.
///
/// Sealed: implemented only for glam vector types.
pub trait Vector:
    private::Sealed + VectorTraits + Dot + Index<usize, Output = <Self as Dot>::Scalar>
{
    const DIM: usize;
}

/// Scalar type of a vector.
pub type ScalarOf<V> = <V as Dot>::Scalar;

#[doc(hidden)]
pub trait EnableIfVector<Out> {
    type Output;
}

impl<V: Vector, Out> EnableIfVector<Out> for V {
    type Output = Out;
}

/// Resolves to `Out` when `V` is a recognized vector and fails to compile
/// otherwise. Use it to restrict generic signatures to the vector family.
pub type IfVector<V, Out> = <V as EnableIfVector<Out>>::Output;

pub const fn is_vector<T: VectorTraits>() -> bool {
    T::IS_VECTOR
}

pub const fn dimension<V: Vector>() -> usize {
    V::DIM
}

/// `true` iff `T` is a vector with exactly `dim` components.
pub const fn is_vector_of_dim<T: VectorTraits>(dim: usize) -> bool {
    match T::DIMENSION {
        Some(d) => T::IS_VECTOR && d == dim,
        None => false,
    }
}

macro_rules! impl_vector {
    ($($ty:ty => ($scalar:ty, $dim:expr)),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl VectorTraits for $ty {
                const IS_VECTOR: bool = true;
                const DIMENSION: Option<usize> = Some($dim);
            }

            impl Dot for $ty {
                type Scalar = $scalar;

                #[inline]
                fn dot(self, rhs: Self) -> $scalar {
                    <$ty>::dot(self, rhs)
                }
            }

            impl Vector for $ty {
                const DIM: usize = $dim;
            }
        )*
    };
}

macro_rules! impl_not_vector {
    ($($ty:ty),* $(,)?) => {
        $(
            impl VectorTraits for $ty {
                const IS_VECTOR: bool = false;
                const DIMENSION: Option<usize> = None;
            }
        )*
    };
}

impl_vector!(
    Vec2 => (f32, 2),
    Vec3 => (f32, 3),
    Vec3A => (f32, 3),
    Vec4 => (f32, 4),
    DVec2 => (f64, 2),
    DVec3 => (f64, 3),
    DVec4 => (f64, 4),
    IVec2 => (i32, 2),
    IVec3 => (i32, 3),
    IVec4 => (i32, 4),
    UVec2 => (u32, 2),
    UVec3 => (u32, 3),
    UVec4 => (u32, 4),
);

impl_not_vector!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool,
);

impl<T, const N: usize> VectorTraits for [T; N] {
    const IS_VECTOR: bool = false;
    const DIMENSION: Option<usize> = None;
}

impl<T: Scalar, const N: usize> Dot for [T; N] {
    type Scalar = T;

    #[inline]
    fn dot(self, rhs: Self) -> T {
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }
}

#[cfg(test)]
mod tests;
