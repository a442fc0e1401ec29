use core::f32::consts::TAU;

use crate::coords::Vec2;

/// Derives an open arc polyline from a closed circle loop (see [`circle_points`]).
///
/// The start is quantized: the loop is rotated by the fewest whole sides whose
/// angle plus half a side reaches `starting_angle`, wrapped to one turn, so the
/// arc always begins on a generated vertex. A start exactly half a side past a
/// vertex stays on that vertex; non-finite starts begin at vertex 0. The sweep is rounded to a whole
/// number of sides and the result keeps `sides_in_arc + 1` points. A full-turn
/// sweep returns the whole loop including its closing point.
///
/// [`circle_points`]: super::circle_points
pub fn arc_points(circle: &[Vec2], sides: u32, starting_angle: f32, sweep: f32) -> Vec<Vec2> {
    // Drop the closing duplicate; it is re-added after rotation.
    let mut points = circle[..circle.len().saturating_sub(1)].to_vec();
    if points.is_empty() {
        return points;
    }

    let angle_per_side = TAU / sides as f32;

    let len = points.len();
    points.rotate_left(start_shift(starting_angle, angle_per_side, len));

    points.push(points[0]);

    let sides_in_arc = (sweep / angle_per_side + 0.5) as i64;
    let keep = (sides_in_arc + 1).clamp(0, points.len() as i64) as usize;
    points.truncate(keep);
    points
}

/// Smallest whole number of sides `k >= 0` with `k * step + step / 2 >= starting_angle`,
/// reduced modulo `len`. Non-finite angles start at vertex 0.
fn start_shift(starting_angle: f32, angle_per_side: f32, len: usize) -> usize {
    if !starting_angle.is_finite() || len == 0 {
        return 0;
    }
    let step = angle_per_side as f64;
    let sides = ((starting_angle as f64 - step / 2.0) / step).ceil().max(0.0);
    (sides % len as f64) as usize
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::shapes::circle_points;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn full_turn_from_zero_matches_circle() {
        let circle = circle_points(10.0, 12);
        let arc = arc_points(&circle, 12, 0.0, TAU);
        assert_eq!(arc, circle);
    }

    #[test]
    fn quarter_arc_of_a_square() {
        let circle = circle_points(10.0, 4);
        let arc = arc_points(&circle, 4, 0.0, FRAC_PI_2);
        assert_eq!(arc.len(), 2);
        assert!(close(arc[0], Vec2::new(10.0, 0.0)));
        assert!(close(arc[1], Vec2::new(0.0, 10.0)));
    }

    #[test]
    fn start_angle_snaps_to_nearest_vertex() {
        let circle = circle_points(10.0, 4);

        // 0.7 rad is below half a side (π/4), so the arc still starts at 0.
        let arc = arc_points(&circle, 4, 0.7, PI);
        assert!(close(arc[0], circle[0]));

        // 0.9 rad is past half a side, so the start moves to the vertex at π/2.
        let arc = arc_points(&circle, 4, 0.9, PI);
        assert!(close(arc[0], circle[1]));
        assert_eq!(arc.len(), 3);
        assert!(close(arc[2], circle[3]));
    }

    #[test]
    fn sweep_rounds_to_whole_sides() {
        let circle = circle_points(5.0, 8);
        let step = TAU / 8.0;
        assert_eq!(arc_points(&circle, 8, 0.0, step * 2.4).len(), 3);
        assert_eq!(arc_points(&circle, 8, 0.0, step * 2.6).len(), 4);
        assert_eq!(arc_points(&circle, 8, 0.0, 0.0).len(), 1);
    }

    #[test]
    fn start_exactly_on_half_side_stays_on_lower_vertex() {
        let circle = circle_points(10.0, 4);
        let half = (TAU / 4.0) / 2.0;
        assert!(close(arc_points(&circle, 4, half, PI)[0], circle[0]));

        let just_past = f32::from_bits(half.to_bits() + 1);
        assert!(close(arc_points(&circle, 4, just_past, PI)[0], circle[1]));
    }

    #[test]
    fn start_matches_stepwise_scan() {
        // Walk the loop one side at a time, the way the quantization is defined.
        fn scanned(start: f32, sides: u32) -> usize {
            let step = TAU / sides as f32;
            let mut current = 0.0f32;
            let mut shift = 0usize;
            while current + step / 2.0 < start {
                current += step;
                shift += 1;
            }
            shift % sides as usize
        }

        for sides in [3u32, 4, 8, 13, 32] {
            let circle = circle_points(20.0, sides);
            for i in -20..200 {
                let start = i as f32 * 0.0731;
                let arc = arc_points(&circle, sides, start, 1.0);
                assert!(
                    close(arc[0], circle[scanned(start, sides)]),
                    "sides={sides} start={start}"
                );
            }
        }
    }

    #[test]
    fn huge_start_angle_returns_a_vertex() {
        let circle = circle_points(10.0, 4);
        for start in [1.0e8f32, f32::MAX] {
            let arc = arc_points(&circle, 4, start, FRAC_PI_2);
            assert_eq!(arc.len(), 2);
            assert!(circle.iter().any(|&v| close(arc[0], v)), "start={start}");
        }
    }

    #[test]
    fn non_finite_start_angle_begins_at_zero() {
        let circle = circle_points(10.0, 4);
        for start in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let arc = arc_points(&circle, 4, start, FRAC_PI_2);
            assert!(close(arc[0], circle[0]), "start={start}");
        }
    }

    #[test]
    fn start_past_full_turn_wraps() {
        let circle = circle_points(10.0, 4);
        let arc = arc_points(&circle, 4, TAU + FRAC_PI_2, FRAC_PI_2);
        assert!(close(arc[0], circle[1]));
    }
}
