use super::{Rect, Vec2};
use super::transform::to_world_position;

/// Integer point in engine (screen/window) space.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    #[inline]
    pub fn to_point_i(self) -> PointI {
        PointI::new(self.x, self.y)
    }

    /// Half-open containment test, see [`Rect::contains`].
    #[inline]
    pub fn is_within(self, rect: Rect) -> bool {
        rect.contains(self)
    }

    /// Containment test in world space.
    ///
    /// Both the point and `rect` are mapped through the inverse of `transform`
    /// before testing, so a cursor position can be checked against a rectangle
    /// laid out under a camera/scale transform.
    pub fn is_within_transformed(self, rect: Rect, transform: &glam::Mat4) -> bool {
        let world = to_world_position(self, transform);
        rect.transform(transform).contains_vec2(world)
    }
}

/// Integer grid point used by game-side logic (tile maps, hex grids).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PointI {
    pub x: i32,
    pub y: i32,
}

impl PointI {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    #[inline]
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Float point used by game-side logic.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2F {
    pub x: f32,
    pub y: f32,
}

impl Point2F {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Point> for PointI {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_point_i()
    }
}

impl From<PointI> for Point {
    #[inline]
    fn from(p: PointI) -> Self {
        p.to_point()
    }
}

impl From<PointI> for Vec2 {
    #[inline]
    fn from(p: PointI) -> Self {
        p.to_vec2()
    }
}

impl From<Point> for Vec2 {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec2()
    }
}

impl From<Point2F> for Vec2 {
    #[inline]
    fn from(p: Point2F) -> Self {
        p.to_vec2()
    }
}

impl From<Vec2> for Point2F {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_point_f()
    }
}
