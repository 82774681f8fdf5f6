//! Rotation algebra without `sin`/`cos`.
//!
//! A heading is a unit vector; a turn is a 2×2 orthonormal matrix built
//! straight from a unit vector's components.  New unit vectors come from the
//! stereographic parametrisation of the circle:
//!
//! ```text
//!        ( 1 − t²     2t   )
//! p(t) = ( ------ , ------ )
//!        ( 1 + t²   1 + t² )
//! ```
//!
//! One value of `t` spans strictly less than a half turn, which is plenty for
//! per-frame turning and per-column ray steps.

use glam::{Mat2, Vec2, vec2};

/// Point on the unit circle for parameter `t` (no trig involved).
#[inline]
pub fn from_parameter(t: f32) -> Vec2 {
    let t2 = t * t;
    let factor = 1.0 / (1.0 + t2);
    vec2((1.0 - t2) * factor, (2.0 * t) * factor)
}

/// Orthonormal 2×2 map.
///
/// Stored column-major in a [`Mat2`]:
/// `x' = m11·x + m21·y`, `y' = m12·x + m22·y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation(Mat2);

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Rotation {
    pub const IDENTITY: Self = Self(Mat2::IDENTITY);

    /// Rotation that carries `+X` onto the unit vector `u`.
    ///
    /// `m11 = m22 = u.x`, `m12 = u.y`, `m21 = −u.y`.
    #[inline]
    pub fn from_unit(u: Vec2) -> Self {
        Self(Mat2::from_cols(u, u.perp()))
    }

    /// Rotation for one fixed increment `t` (see [`from_parameter`]).
    #[inline]
    pub fn by_amount(t: f32) -> Self {
        Self::from_unit(from_parameter(t))
    }

    /// Rotate `v` in place.
    #[inline(always)]
    pub fn rotate(&self, v: &mut Vec2) {
        *v = self.0 * *v;
    }

    #[inline(always)]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        self.0 * v
    }

    /// Undo this rotation.  Orthonormal, so the transpose is the inverse.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self(self.0.transpose())
    }

    /// `self` first, then `next`.
    #[inline]
    pub fn then(&self, next: &Rotation) -> Self {
        Self(next.0 * self.0)
    }

    /// The unit vector this rotation sends `+X` to.
    #[inline]
    pub fn heading(&self) -> Vec2 {
        self.0.x_axis
    }

    #[inline]
    pub fn m11(&self) -> f32 {
        self.0.x_axis.x
    }
    #[inline]
    pub fn m12(&self) -> f32 {
        self.0.x_axis.y
    }
    #[inline]
    pub fn m21(&self) -> f32 {
        self.0.y_axis.x
    }
    #[inline]
    pub fn m22(&self) -> f32 {
        self.0.y_axis.y
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
