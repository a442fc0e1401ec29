use super::{Point, Vec2};
use super::transform::to_world_position;

/// Axis-aligned integer rectangle (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn from_location_size(location: Point, size: Point) -> Self {
        Self::new(location.x, location.y, size.x, size.y)
    }

    #[inline]
    pub const fn left(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn top(self) -> i32 {
        self.y
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn location(self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Center point, rounded toward zero on odd sizes.
    #[inline]
    pub const fn center(self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Half-open containment for a float position.
    #[inline]
    pub fn contains_vec2(self, p: Vec2) -> bool {
        p.x >= self.x as f32
            && p.x < self.right() as f32
            && p.y >= self.y as f32
            && p.y < self.bottom() as f32
    }

    /// Maps the rectangle into world space through the inverse of `transform`.
    ///
    /// Only the top-left and bottom-right corners are mapped, so rotation is not
    /// representable; the result is truncated toward zero.
    pub fn transform(self, transform: &glam::Mat4) -> Rect {
        let min = to_world_position(self.location(), transform);
        let max = to_world_position(Point::new(self.right(), self.bottom()), transform);
        Rect::new(
            min.x as i32,
            min.y as i32,
            (max.x - min.x) as i32,
            (max.y - min.y) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: i32, h: i32) -> Rect { Rect::new(x, y, w, h) }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn right_and_bottom_are_exclusive_edges() {
        let rect = r(5, 10, 20, 30);
        assert_eq!(rect.right(), 25);
        assert_eq!(rect.bottom(), 40);
    }

    #[test]
    fn center_uses_integer_division() {
        assert_eq!(r(0, 0, 801, 601).center(), Point::new(400, 300));
        assert_eq!(r(10, 10, 4, 4).center(), Point::new(12, 12));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(Point::new(0, 0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(10, 10)));
        assert!(r(0, 0, 10, 10).contains(Point::new(9, 9)));
    }

    #[test]
    fn contains_vec2_fractional() {
        assert!(r(0, 0, 10, 10).contains_vec2(Vec2::new(9.99, 0.0)));
        assert!(!r(0, 0, 10, 10).contains_vec2(Vec2::new(-0.01, 5.0)));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(!r(0, 0, 1, 1).is_empty());
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn transform_by_inverse_scale() {
        let m = glam::Mat4::from_scale(glam::Vec3::new(2.0, 2.0, 1.0));
        assert_eq!(r(20, 40, 100, 60).transform(&m), r(10, 20, 50, 30));
    }

    #[test]
    fn transform_identity_is_noop() {
        let rect = r(-3, 7, 11, 13);
        assert_eq!(rect.transform(&glam::Mat4::IDENTITY), rect);
    }
}
