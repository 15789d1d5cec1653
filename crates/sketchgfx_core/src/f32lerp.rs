use bevy_color::{Color, Mix};
use bevy_math::{Quat, Vec2, Vec3, Vec4};

/// Trait for linearly interpolating between 2 values based on a
/// [`f32`] `t` value.
///
/// The signature matches
/// [`InterpFn`](crate::action::InterpFn) so that `F::f32lerp` can be
/// used directly as the default interpolation of an
/// [`Action`](crate::action::Action).
pub trait F32Lerp: Sized {
    fn f32lerp(start: &Self, end: &Self, t: f32) -> Self;
}

macro_rules! impl_lerp_f32lerp {
    ($ty:ty) => {
        impl F32Lerp for $ty {
            #[inline]
            fn f32lerp(start: &Self, end: &Self, t: f32) -> Self {
                (*start) * (1.0 - t) + (*end) * t
            }
        }
    };
}

impl_lerp_f32lerp!(f32);
impl_lerp_f32lerp!(Vec2);
impl_lerp_f32lerp!(Vec3);
impl_lerp_f32lerp!(Vec4);

impl F32Lerp for Quat {
    #[inline]
    fn f32lerp(start: &Self, end: &Self, t: f32) -> Self {
        start.slerp(*end, t)
    }
}

impl F32Lerp for Color {
    #[inline]
    fn f32lerp(start: &Self, end: &Self, t: f32) -> Self {
        start.mix(end, t)
    }
}
