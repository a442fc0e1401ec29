use glam::{Mat4, Vec3};

use super::{Point, Vec2};

/// Maps a screen-space point into world space through the inverse of `transform`.
///
/// `transform` is the world-to-screen matrix (camera, viewport scale). It must be
/// invertible; a singular matrix yields non-finite coordinates.
pub fn to_world_position(point: Point, transform: &Mat4) -> Vec2 {
    transform_vec2(point.to_vec2(), &transform.inverse())
}

/// Applies an affine 4x4 transform to a 2D position (z = 0, w = 1).
#[inline]
pub fn transform_vec2(v: Vec2, m: &Mat4) -> Vec2 {
    let p = m.transform_point3(Vec3::new(v.x, v.y, 0.0));
    Vec2::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_keeps_point() {
        assert_eq!(to_world_position(Point::new(12, -3), &Mat4::IDENTITY), Vec2::new(12.0, -3.0));
    }

    #[test]
    fn inverse_of_translation_and_scale() {
        let m = Mat4::from_translation(Vec3::new(100.0, 50.0, 0.0))
            * Mat4::from_scale(Vec3::new(2.0, 4.0, 1.0));
        let w = to_world_position(Point::new(110, 90), &m);
        assert!((w.x - 5.0).abs() < 1e-5);
        assert!((w.y - 10.0).abs() < 1e-5);
    }
}
