use crate::coords::{Rect, Vec2};
use crate::device::{GraphicsDevice, SpriteBatch, TextureError, TextureId};
use crate::paint::Color;
use crate::scene::Sprite;
use crate::shapes::{ShapeCache, ShapeCacheConfig};

/// Line thickness used when a caller has no preference.
pub const DEFAULT_THICKNESS: f32 = 1.0;

/// Layer depth used when a caller has no preference.
pub const DEFAULT_DEPTH: f32 = 0.0;

/// Immediate-mode 2D primitives built from one shared 1x1 white texture.
///
/// Every shape reduces to one or more quads of that pixel, stretched and rotated
/// per shape. Circles and arcs come from the owned [`ShapeCache`].
///
/// All drawing methods submit into an already-open [`SpriteBatch`]; they never
/// begin or end a session.
#[derive(Debug)]
pub struct Primitives {
    pixel: TextureId,
    shapes: ShapeCache,
}

impl Primitives {
    /// Creates the renderer and uploads its pixel texture.
    pub fn new(device: &mut impl GraphicsDevice) -> Result<Self, TextureError> {
        Self::with_cache_config(device, ShapeCacheConfig::default())
    }

    pub fn with_cache_config(
        device: &mut impl GraphicsDevice,
        config: ShapeCacheConfig,
    ) -> Result<Self, TextureError> {
        let pixel = device.create_texture(1, 1, &[Color::WHITE])?;
        log::debug!("primitives: pixel texture {pixel:?}, cache capacity {:?}", config.capacity);
        Ok(Self { pixel, shapes: ShapeCache::with_config(config) })
    }

    /// The shared 1x1 white texture.
    #[inline]
    pub fn pixel(&self) -> TextureId {
        self.pixel
    }

    #[inline]
    pub fn shapes(&self) -> &ShapeCache {
        &self.shapes
    }

    #[inline]
    pub fn shapes_mut(&mut self) -> &mut ShapeCache {
        &mut self.shapes
    }

    #[inline]
    fn pixel_quad(&self, position: Vec2, size: Vec2, angle: f32, color: Color, depth: f32) -> Sprite {
        Sprite::new(self.pixel, position, color)
            .with_rotation(angle)
            .with_scale(size)
            .with_depth(depth)
    }

    // ── points ────────────────────────────────────────────────────────────

    pub fn draw_point(&self, batch: &mut impl SpriteBatch, position: Vec2, color: Color, depth: f32) {
        batch.draw(self.pixel_quad(position, Vec2::one(), 0.0, color, depth));
    }

    pub fn draw_point_xy(&self, batch: &mut impl SpriteBatch, x: f32, y: f32, color: Color, depth: f32) {
        self.draw_point(batch, Vec2::new(x, y), color, depth);
    }

    // ── lines ─────────────────────────────────────────────────────────────

    /// Draws a line starting at `point`, `length` long, rotated by `angle` radians.
    ///
    /// Every other line helper reduces to this one.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line_angle(
        &self,
        batch: &mut impl SpriteBatch,
        point: Vec2,
        length: f32,
        angle: f32,
        color: Color,
        thickness: f32,
        depth: f32,
    ) {
        batch.draw(self.pixel_quad(point, Vec2::new(length, thickness), angle, color, depth));
    }

    /// Draws a line between two points.
    pub fn draw_line(
        &self,
        batch: &mut impl SpriteBatch,
        p1: Vec2,
        p2: Vec2,
        color: Color,
        thickness: f32,
        depth: f32,
    ) {
        self.draw_line_angle(batch, p1, p1.distance(p2), p1.angle_to(p2), color, thickness, depth);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_line_xy(
        &self,
        batch: &mut impl SpriteBatch,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        thickness: f32,
        depth: f32,
    ) {
        self.draw_line(batch, Vec2::new(x1, y1), Vec2::new(x2, y2), color, thickness, depth);
    }

    // ── rectangles ────────────────────────────────────────────────────────

    /// Fills `size` pixels at `location`, rotated by `angle` around the top-left corner.
    pub fn fill_rectangle(
        &self,
        batch: &mut impl SpriteBatch,
        location: Vec2,
        size: Vec2,
        color: Color,
        angle: f32,
        depth: f32,
    ) {
        batch.draw(self.pixel_quad(location, size, angle, color, depth));
    }

    pub fn fill_rect(&self, batch: &mut impl SpriteBatch, rect: Rect, color: Color, angle: f32, depth: f32) {
        self.fill_rectangle(
            batch,
            rect.location().to_vec2(),
            rect.size().to_vec2(),
            color,
            angle,
            depth,
        );
    }

    /// Outlines `rect` with four lines.
    ///
    /// The left and right edges sit one pixel right of the rectangle edge and run
    /// `thickness` past the bottom so the corners are covered. This is not a
    /// mitered border.
    pub fn draw_rectangle(
        &self,
        batch: &mut impl SpriteBatch,
        rect: Rect,
        color: Color,
        thickness: f32,
        depth: f32,
    ) {
        let (x, y) = (rect.x as f32, rect.y as f32);
        let (right, bottom) = (rect.right() as f32, rect.bottom() as f32);

        // top
        self.draw_line(batch, Vec2::new(x, y), Vec2::new(right, y), color, thickness, depth);
        // left
        self.draw_line(
            batch,
            Vec2::new(x + 1.0, y),
            Vec2::new(x + 1.0, bottom + thickness),
            color,
            thickness,
            depth,
        );
        // bottom
        self.draw_line(batch, Vec2::new(x, bottom), Vec2::new(right, bottom), color, thickness, depth);
        // right
        self.draw_line(
            batch,
            Vec2::new(right + 1.0, y),
            Vec2::new(right + 1.0, bottom + thickness),
            color,
            thickness,
            depth,
        );
    }

    /// Like [`draw_rectangle`](Self::draw_rectangle), truncating `location`/`size`
    /// to whole pixels first.
    pub fn draw_rectangle_at(
        &self,
        batch: &mut impl SpriteBatch,
        location: Vec2,
        size: Vec2,
        color: Color,
        thickness: f32,
        depth: f32,
    ) {
        let rect = Rect::new(location.x as i32, location.y as i32, size.x as i32, size.y as i32);
        self.draw_rectangle(batch, rect, color, thickness, depth);
    }

    // ── circles & arcs ────────────────────────────────────────────────────

    /// Outlines a circle approximated by `sides` segments.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_circle(
        &mut self,
        batch: &mut impl SpriteBatch,
        center: Vec2,
        radius: f32,
        sides: u32,
        color: Color,
        thickness: f32,
        depth: f32,
    ) {
        let points = self.shapes.circle(radius, sides);
        self.draw_polyline(batch, center, &points, color, thickness, depth);
    }

    /// Outlines an arc starting near `starting_angle` and spanning `sweep` radians.
    ///
    /// Start and sweep are quantized to whole sides; see [`crate::shapes::arc_points`].
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc(
        &mut self,
        batch: &mut impl SpriteBatch,
        center: Vec2,
        radius: f32,
        sides: u32,
        starting_angle: f32,
        sweep: f32,
        color: Color,
        thickness: f32,
        depth: f32,
    ) {
        let points = self.shapes.arc(radius, sides, starting_angle, sweep);
        self.draw_polyline(batch, center, &points, color, thickness, depth);
    }

    /// Connects consecutive `points` (offset by `offset`) with lines.
    fn draw_polyline(
        &self,
        batch: &mut impl SpriteBatch,
        offset: Vec2,
        points: &[Vec2],
        color: Color,
        thickness: f32,
        depth: f32,
    ) {
        for pair in points.windows(2) {
            self.draw_line(batch, pair[0] + offset, pair[1] + offset, color, thickness, depth);
        }
    }
}

// ── textures ──────────────────────────────────────────────────────────────

/// Draws `source` of `texture` stretched into `dest`, positioned around `origin`.
///
/// `origin` is in source texels and lands on `dest`'s top-left corner.
pub fn draw_texture_in(
    batch: &mut impl SpriteBatch,
    texture: TextureId,
    dest: Rect,
    source: Rect,
    color: Color,
    origin: Vec2,
) {
    let scale = Vec2::new(
        dest.width as f32 / source.width.max(1) as f32,
        dest.height as f32 / source.height.max(1) as f32,
    );
    batch.draw(
        Sprite::new(texture, dest.location().to_vec2(), color)
            .with_source(source)
            .with_origin(origin)
            .with_scale(scale),
    );
}

/// Draws the whole texture into `dest` with its center on `dest`'s top-left corner.
pub fn draw_texture_centered(
    batch: &mut impl SpriteBatch,
    texture: TextureId,
    texture_size: (u32, u32),
    dest: Rect,
    color: Color,
) {
    let source = Rect::new(0, 0, texture_size.0 as i32, texture_size.1 as i32);
    let origin = source.size().to_vec2() * 0.5;
    draw_texture_in(batch, texture, dest, source, color, origin);
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI, TAU};

    use super::*;
    use crate::coords::Viewport;
    use crate::device::HeadlessDevice;
    use crate::scene::SpriteList;

    fn setup() -> (Primitives, HeadlessDevice, SpriteList) {
        let mut device = HeadlessDevice::new(Viewport::new(800, 600));
        let prims = Primitives::new(&mut device).unwrap();
        (prims, device, SpriteList::new())
    }

    fn sprites(list: &SpriteList) -> Vec<Sprite> {
        list.items().iter().map(|item| item.sprite).collect()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn pixel_texture_is_one_opaque_white_texel() {
        let (prims, device, _) = setup();
        let tex = device.texture(prims.pixel()).unwrap();
        assert_eq!((tex.width, tex.height), (1, 1));
        assert_eq!(tex.pixels, vec![Color::WHITE]);
    }

    #[test]
    fn pixel_texture_is_created_once() {
        let (mut prims, device, mut list) = setup();
        prims.draw_point(&mut list, Vec2::zero(), Color::RED, 0.0);
        prims.draw_circle(&mut list, Vec2::zero(), 5.0, 8, Color::RED, 1.0, 0.0);
        assert_eq!(device.texture_count(), 1);
        assert!(sprites(&list).iter().all(|s| s.texture == prims.pixel()));
    }

    #[test]
    fn construction_propagates_device_errors() {
        let mut device = HeadlessDevice::new(Viewport::new(1, 1)).with_max_texture_dimension(0);
        assert!(Primitives::new(&mut device).is_err());
    }

    // ── points & lines ────────────────────────────────────────────────────

    #[test]
    fn point_is_a_unit_quad() {
        let (prims, _, mut list) = setup();
        prims.draw_point_xy(&mut list, 3.0, 4.0, Color::GREEN, 0.25);

        let s = sprites(&list)[0];
        assert_eq!(s.position, Vec2::new(3.0, 4.0));
        assert_eq!(s.scale, Vec2::one());
        assert_eq!(s.rotation, 0.0);
        assert_eq!(s.depth, 0.25);
        assert_eq!(s.color, Color::GREEN);
    }

    #[test]
    fn line_stretches_to_distance_and_angle() {
        let (prims, _, mut list) = setup();
        prims.draw_line(&mut list, Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0), Color::WHITE, 3.0, 0.0);

        let s = sprites(&list)[0];
        assert_eq!(s.position, Vec2::new(1.0, 1.0));
        assert!(approx(s.scale.x, 5.0));
        assert_eq!(s.scale.y, 3.0);
        assert!(approx(s.rotation, 4.0f32.atan2(3.0)));
        assert_eq!(s.origin, Vec2::zero());
    }

    #[test]
    fn vertical_line_points_down() {
        let (prims, _, mut list) = setup();
        prims.draw_line_xy(&mut list, 0.0, 0.0, 0.0, 10.0, Color::WHITE, DEFAULT_THICKNESS, DEFAULT_DEPTH);
        let s = sprites(&list)[0];
        assert!(approx(s.rotation, FRAC_PI_2));
        assert!(approx(s.scale.x, 10.0));
    }

    // ── rectangles ────────────────────────────────────────────────────────

    #[test]
    fn fill_rect_stretches_pixel_to_size() {
        let (prims, _, mut list) = setup();
        prims.fill_rect(&mut list, Rect::new(10, 20, 30, 40), Color::BLUE, 0.5, 0.0);

        let s = sprites(&list)[0];
        assert_eq!(s.position, Vec2::new(10.0, 20.0));
        assert_eq!(s.scale, Vec2::new(30.0, 40.0));
        assert_eq!(s.rotation, 0.5);
    }

    #[test]
    fn draw_rectangle_emits_four_edges_with_extension() {
        let (prims, _, mut list) = setup();
        prims.draw_rectangle(&mut list, Rect::new(10, 20, 100, 50), Color::WHITE, 2.0, 0.0);

        let s = sprites(&list);
        assert_eq!(s.len(), 4);

        // top
        assert_eq!(s[0].position, Vec2::new(10.0, 20.0));
        assert!(approx(s[0].scale.x, 100.0) && approx(s[0].rotation, 0.0));
        // left: shifted one pixel right, extended by thickness past the bottom
        assert_eq!(s[1].position, Vec2::new(11.0, 20.0));
        assert!(approx(s[1].scale.x, 52.0) && approx(s[1].rotation, FRAC_PI_2));
        // bottom
        assert_eq!(s[2].position, Vec2::new(10.0, 70.0));
        assert!(approx(s[2].scale.x, 100.0));
        // right
        assert_eq!(s[3].position, Vec2::new(111.0, 20.0));
        assert!(approx(s[3].scale.x, 52.0));

        assert!(s.iter().all(|q| q.scale.y == 2.0));
    }

    #[test]
    fn draw_rectangle_at_truncates() {
        let (prims, _, mut list) = setup();
        prims.draw_rectangle_at(&mut list, Vec2::new(1.9, 2.9), Vec2::new(10.7, 5.2), Color::WHITE, 1.0, 0.0);
        let s = sprites(&list);
        assert_eq!(s[0].position, Vec2::new(1.0, 2.0));
        assert!(approx(s[0].scale.x, 10.0));
    }

    // ── circles & arcs ────────────────────────────────────────────────────

    #[test]
    fn circle_draws_one_line_per_side_around_center() {
        let (mut prims, _, mut list) = setup();
        prims.draw_circle(&mut list, Vec2::new(100.0, 50.0), 10.0, 6, Color::WHITE, 1.0, 0.0);

        let s = sprites(&list);
        assert_eq!(s.len(), 6);
        assert_eq!(s[0].position, Vec2::new(110.0, 50.0));
        // Regular hexagon: every side equals the radius.
        assert!(s.iter().all(|q| approx(q.scale.x, 10.0)));
    }

    #[test]
    fn circle_points_come_from_the_cache() {
        let (mut prims, _, mut list) = setup();
        prims.draw_circle(&mut list, Vec2::zero(), 10.0, 6, Color::WHITE, 1.0, 0.0);
        prims.draw_circle(&mut list, Vec2::new(5.0, 5.0), 10.0, 6, Color::WHITE, 1.0, 0.0);
        assert_eq!(prims.shapes().stats().misses, 1);
        assert_eq!(prims.shapes().stats().hits, 1);
    }

    #[test]
    fn half_arc_draws_half_the_sides() {
        let (mut prims, _, mut list) = setup();
        prims.draw_arc(&mut list, Vec2::zero(), 10.0, 8, 0.0, PI, Color::WHITE, 1.0, 0.0);
        assert_eq!(list.len(), 4);

        list.clear();
        prims.draw_arc(&mut list, Vec2::zero(), 10.0, 8, 0.0, TAU, Color::WHITE, 1.0, 0.0);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn degenerate_side_counts_do_not_panic() {
        let (mut prims, _, mut list) = setup();
        prims.draw_circle(&mut list, Vec2::zero(), 10.0, 2, Color::WHITE, 1.0, 0.0);
        assert_eq!(list.len(), 2);

        list.clear();
        prims.draw_arc(&mut list, Vec2::zero(), 10.0, 0, 0.0, PI, Color::WHITE, 1.0, 0.0);
        assert!(list.is_empty());
    }

    #[test]
    fn huge_start_angle_arc_still_draws() {
        let (mut prims, _, mut list) = setup();
        prims.draw_arc(&mut list, Vec2::zero(), 10.0, 4, 1.0e8, FRAC_PI_2, Color::WHITE, 1.0, 0.0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn zero_sweep_arc_draws_nothing() {
        let (mut prims, _, mut list) = setup();
        prims.draw_arc(&mut list, Vec2::zero(), 10.0, 8, 1.0, 0.0, Color::WHITE, 1.0, 0.0);
        assert!(list.is_empty());
    }

    // ── textures ──────────────────────────────────────────────────────────

    #[test]
    fn centered_texture_uses_half_size_origin() {
        let mut list = SpriteList::new();
        let tex = TextureId::new(3);
        draw_texture_centered(&mut list, tex, (32, 16), Rect::new(50, 60, 64, 16), Color::WHITE);

        let s = sprites(&list)[0];
        assert_eq!(s.texture, tex);
        assert_eq!(s.position, Vec2::new(50.0, 60.0));
        assert_eq!(s.origin, Vec2::new(16.0, 8.0));
        assert_eq!(s.scale, Vec2::new(2.0, 1.0));
        assert_eq!(s.source, Some(Rect::new(0, 0, 32, 16)));
    }
}
