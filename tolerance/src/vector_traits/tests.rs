use glam::{DVec2, DVec3, DVec4, IVec3, UVec2, Vec2, Vec3, Vec3A, Vec4};
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

use super::*;

/// Same shape as a glam vector, but not part of the family.
#[derive(Clone, Copy)]
struct TotallyNotAVector {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Index<usize> for TotallyNotAVector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => &self.w,
        }
    }
}

impl VectorTraits for TotallyNotAVector {
    const IS_VECTOR: bool = false;
    const DIMENSION: Option<usize> = None;
}

assert_impl_all!(Vec2: Vector);
assert_impl_all!(Vec3A: Vector);
assert_impl_all!(DVec4: Vector);
assert_impl_all!(UVec2: Vector);
assert_not_impl_any!(f32: Vector);
assert_not_impl_any!(i64: Vector);
assert_not_impl_any!(TotallyNotAVector: Vector);
assert_not_impl_any!([f32; 4]: Vector);
assert_not_impl_any!(glam::Mat2: Vector, VectorTraits);

assert_impl_all!([f64; 3]: Dot);

assert_type_eq_all!(ScalarOf<DVec2>, f64);
assert_type_eq_all!(ScalarOf<Vec3A>, f32);
assert_type_eq_all!(ScalarOf<IVec3>, i32);
assert_type_eq_all!(IfVector<Vec4, i64>, i64);
assert_type_eq_all!(IfVector<DVec3, ()>, ());

const _: () = assert!(is_vector::<Vec4>());
const _: () = assert!(!is_vector::<i32>());
const _: () = assert!(!is_vector::<[f32; 4]>());
const _: () = assert!(is_vector_of_dim::<Vec3A>(3));

#[test]
fn is_vector_for_scalars() {
    assert!(!is_vector::<f32>());
    assert!(!is_vector::<f64>());
    assert!(!is_vector::<i32>());
    assert!(!is_vector::<usize>());
    assert!(!is_vector::<bool>());
}

#[test]
fn is_vector_for_family() {
    assert!(is_vector::<Vec2>());
    assert!(is_vector::<Vec3>());
    assert!(is_vector::<Vec3A>());
    assert!(is_vector::<Vec4>());
    assert!(is_vector::<DVec2>());
    assert!(is_vector::<DVec3>());
    assert!(is_vector::<DVec4>());
    assert!(is_vector::<IVec3>());
    assert!(is_vector::<UVec2>());
}

#[test]
fn look_alike_is_not_a_vector() {
    assert!(!is_vector::<TotallyNotAVector>());
    assert!(!is_vector_of_dim::<TotallyNotAVector>(4));
}

#[test]
fn arrays_are_not_vectors() {
    assert!(!is_vector::<[f32; 4]>());
    assert!(!is_vector::<[f64; 2]>());
    assert!(!is_vector_of_dim::<[f32; 4]>(4));
    assert!(!is_vector_of_dim::<[i32; 3]>(3));
}

#[test]
fn dimension_of_family() {
    assert_eq!(dimension::<Vec2>(), 2);
    assert_eq!(dimension::<Vec3>(), 3);
    assert_eq!(dimension::<Vec3A>(), 3);
    assert_eq!(dimension::<DVec4>(), 4);
    assert_eq!(dimension::<UVec2>(), 2);
}

#[test]
fn is_vector_of_dim_matches_dimension() {
    assert!(is_vector_of_dim::<Vec4>(4));
    assert!(!is_vector_of_dim::<Vec4>(3));
    assert!(is_vector_of_dim::<DVec3>(3));
    assert!(!is_vector_of_dim::<DVec3>(0));
}

#[test]
fn is_vector_of_dim_is_false_for_scalars() {
    for dim in 0..8 {
        assert!(!is_vector_of_dim::<f64>(dim));
        assert!(!is_vector_of_dim::<u8>(dim));
    }
}

#[test]
fn is_vector_of_dim_agrees_with_is_vector_and_dimension() {
    fn check<T: VectorTraits>() {
        for dim in 0..6 {
            let expected = is_vector::<T>() && T::DIMENSION == Some(dim);
            assert_eq!(is_vector_of_dim::<T>(dim), expected, "dim = {dim}");
        }
    }

    check::<Vec2>();
    check::<Vec3A>();
    check::<DVec4>();
    check::<IVec3>();
    check::<f32>();
    check::<i64>();
    check::<TotallyNotAVector>();
}

#[test]
fn dot_on_family_matches_glam() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(Dot::dot(a, b), 32.0);
    assert_eq!(Dot::length_squared(DVec2::new(2.0, 3.0)), 13.0);
    assert_eq!(Dot::dot(UVec2::new(2, 3), UVec2::new(4, 5)), 23);
}

#[test]
fn dot_on_arrays() {
    assert_eq!([1.0_f64, 2.0, 3.0].dot([4.0, 5.0, 6.0]), 32.0);
    assert_eq!([3.0_f32, 4.0].length_squared(), 25.0);
    let empty: [f64; 0] = [];
    assert_eq!(empty.dot(empty), 0.0);
}

#[test]
fn family_components_are_indexable() {
    fn sum<V: Vector>(v: V) -> ScalarOf<V>
    where
        ScalarOf<V>: std::ops::Add<Output = ScalarOf<V>>,
    {
        let mut total = v[0];
        for i in 1..V::DIM {
            total = total + v[i];
        }
        total
    }

    assert_eq!(sum(Vec4::new(1.0, 2.0, 3.0, 4.0)), 10.0);
    assert_eq!(sum(IVec3::new(-1, 5, 7)), 11);
}
