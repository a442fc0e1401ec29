use core::f64::consts::TAU;

use crate::coords::Vec2;

/// Builds a closed polygon approximating a circle centered on the origin.
///
/// Returns `sides + 1` points: vertex `i` sits at angle `i * 2π / sides`, and the
/// last point repeats `(radius, 0)` so consecutive pairs cover the whole loop.
///
/// `sides` below 3 is not rejected; the result is a degenerate polygon.
pub fn circle_points(radius: f32, sides: u32) -> Vec<Vec2> {
    let step = TAU / sides as f64;
    let r = radius as f64;

    let mut points = Vec::with_capacity(sides as usize + 1);
    for i in 0..sides {
        let theta = step * i as f64;
        points.push(Vec2::new((r * theta.cos()) as f32, (r * theta.sin()) as f32));
    }
    points.push(Vec2::new(radius, 0.0));
    points
}
