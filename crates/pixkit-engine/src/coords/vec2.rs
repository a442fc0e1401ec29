use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use super::{Point, Point2F, PointI};

/// 2D vector in pixels (float).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn one() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two positions.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Angle in radians of the segment `self -> other`, measured from +X toward +Y.
    #[inline]
    pub fn angle_to(self, other: Vec2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Truncates toward zero.
    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    /// Truncates toward zero.
    #[inline]
    pub fn to_point_i(self) -> PointI {
        PointI::new(self.x as i32, self.y as i32)
    }

    #[inline]
    pub fn to_point_f(self) -> Point2F {
        Point2F::new(self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl From<glam::Vec2> for Vec2 {
    #[inline]
    fn from(v: glam::Vec2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for glam::Vec2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_point_truncates_toward_zero() {
        assert_eq!(Vec2::new(3.9, -3.9).to_point(), Point::new(3, -3));
        assert_eq!(Vec2::new(-0.5, 0.5).to_point_i(), PointI::new(0, 0));
    }

    #[test]
    fn to_point_f_keeps_fraction() {
        let p = Vec2::new(1.25, -7.5).to_point_f();
        assert_eq!((p.x, p.y), (1.25, -7.5));
    }

    #[test]
    fn distance_and_angle() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);

        let down = Vec2::zero().angle_to(Vec2::new(0.0, 10.0));
        assert!((down - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
