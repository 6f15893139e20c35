//! Geometry helpers on top of [`glam::Vec2`].
//!
//! Pure, stateless functions used by the fist aiming and knockback code.

use glam::Vec2;

/// Returns the vector from `from` to `to`.
#[inline]
pub fn between(from: Vec2, to: Vec2) -> Vec2 {
    to - from
}

/// Returns the length of `v`.
#[inline]
pub fn length(v: Vec2) -> f32 {
    v.length()
}

/// Returns the unit vector pointing in the direction of `v`.
///
/// # Panics
///
/// Panics if `v` has zero length. Callers must guarantee a non-degenerate
/// input; aiming code that can legitimately see coincident points goes
/// through [`direction_or`] instead.
#[inline]
pub fn direction(v: Vec2) -> Vec2 {
    assert!(
        v.length_squared() > 0.0,
        "cannot normalize a zero-length vector"
    );
    v / v.length()
}

/// Returns the unit vector of `v`, or `fallback` when `v` has zero length.
#[inline]
pub fn direction_or(v: Vec2, fallback: Vec2) -> Vec2 {
    if v.length_squared() > 0.0 {
        v / v.length()
    } else {
        fallback
    }
}

/// Squared distance between two points. Used for reach checks so nobody pays
/// for a square root per frame.
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    (a - b).length_squared()
}
