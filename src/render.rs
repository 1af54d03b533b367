//! Procedural rendering of the HealPray app icon.
//!
//! [`render`] paints one square RGBA canvas in five passes: a vertical
//! teal-to-blue gradient, a radial brightening around the center, a golden
//! heart glow, the white heart with the praying-hands silhouette, and four
//! sparkle stars. The result is deterministic for a given size and palette.

use image::{Rgba, RgbaImage};

/// Theme teal (#009688), the gradient start and the hands fill.
pub const HEALING_TEAL: Rgba<u8> = Rgba([0, 150, 136, 255]);

/// Theme blue (#42A5F5), the gradient end.
pub const PEACEFUL_BLUE: Rgba<u8> = Rgba([66, 165, 245, 255]);

/// Theme gold (#FFB300), the base color of the heart glow.
pub const SUNRISE_GOLD: Rgba<u8> = Rgba([255, 179, 0, 255]);

/// An integer pixel coordinate on the canvas.
///
/// Polygon outlines are lists of `Point`s; fractional curve coordinates are
/// truncated toward zero when they become points, matching the renderer's
/// fixed geometry at every size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The colors used by the renderer.
///
/// The hands silhouette always reuses `gradient_start`; `glow` and `sparkle`
/// carry their translucency in the alpha channel because polygon fills write
/// the color as-is (see [`fill_polygon`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of the top gradient row (also the hands fill).
    pub gradient_start: Rgba<u8>,
    /// Color the bottom gradient row converges to.
    pub gradient_end: Rgba<u8>,
    /// Heart glow fill, translucent.
    pub glow: Rgba<u8>,
    /// Main heart fill.
    pub heart: Rgba<u8>,
    /// Sparkle star fill, translucent.
    pub sparkle: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gradient_start: HEALING_TEAL,
            gradient_end: PEACEFUL_BLUE,
            glow: Rgba([SUNRISE_GOLD[0], SUNRISE_GOLD[1], SUNRISE_GOLD[2], 100]),
            heart: Rgba([255, 255, 255, 255]),
            sparkle: Rgba([255, 255, 255, 200]),
        }
    }
}

/// Renders the icon at `size`x`size` pixels with the default palette.
pub fn render(size: u32) -> RgbaImage {
    render_with(size, &Palette::default())
}

/// Renders the icon at `size`x`size` pixels with a custom palette.
pub fn render_with(size: u32, palette: &Palette) -> RgbaImage {
    let mut canvas = RgbaImage::new(size, size);

    paint_gradient(&mut canvas, palette.gradient_start, palette.gradient_end);
    apply_radial_overlay(&mut canvas);

    let heart_cx = (size / 2) as i32;
    let heart_cy = (size as f64 * 0.48) as i32;
    let heart_size = (size as f64 * 0.35) as i32;

    // Glow halo: the same heart at growing sizes, largest first, so each
    // layer is partly overwritten by the next smaller one.
    for i in (1..=8).rev() {
        let outline = heart_outline(heart_cx, heart_cy, heart_size + i * 8);
        fill_polygon(&mut canvas, &outline, palette.glow);
    }
    fill_polygon(
        &mut canvas,
        &heart_outline(heart_cx, heart_cy, heart_size),
        palette.heart,
    );

    let hands_size = (heart_size as f64 * 0.5) as i32;
    fill_polygon(
        &mut canvas,
        &hand_outline(heart_cx, heart_cy, hands_size, Hand::Left),
        palette.gradient_start,
    );
    fill_polygon(
        &mut canvas,
        &hand_outline(heart_cx, heart_cy, hands_size, Hand::Right),
        palette.gradient_start,
    );

    let sparkle_size = (size as f64 * 0.04) as i32;
    for &(fx, fy) in &[(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)] {
        let cx = (size as f64 * fx) as i32;
        let cy = (size as f64 * fy) as i32;
        let outline = sparkle_outline(cx, cy, sparkle_size);
        fill_polygon(&mut canvas, &outline, palette.sparkle);
    }

    canvas
}

/// Fills the canvas with a vertical gradient from `start` (row 0) to `end`.
pub fn paint_gradient(canvas: &mut RgbaImage, start: Rgba<u8>, end: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    for y in 0..height {
        let color = gradient_row_color(y, height, start, end);
        for x in 0..width {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// The solid color of gradient row `y` on a canvas of the given height.
///
/// The interpolation ratio is `y / height`, so the bottom row approaches but
/// never exactly reaches `end`. Alpha is always fully opaque.
pub fn gradient_row_color(y: u32, height: u32, start: Rgba<u8>, end: Rgba<u8>) -> Rgba<u8> {
    let ratio = y as f64 / height as f64;
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - ratio) + b as f64 * ratio) as u8;
    Rgba([
        mix(start[0], end[0]),
        mix(start[1], end[1]),
        mix(start[2], end[2]),
        255,
    ])
}

/// Brightens pixels within `0.7 * size` of the canvas center.
///
/// The boost falls linearly from +30 per channel at the center to zero at
/// the radius; pixels at or beyond the radius are left untouched. Alpha
/// stays opaque.
pub fn apply_radial_overlay(canvas: &mut RgbaImage) {
    let size = canvas.width().min(canvas.height());
    let center = (size / 2) as i32;
    let max_radius = size as f64 * 0.7;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = (x as i32 - center) as f64;
        let dy = (y as i32 - center) as f64;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance < max_radius {
            let boost = (30.0 * (1.0 - distance / max_radius)) as u8;
            pixel[0] = pixel[0].saturating_add(boost);
            pixel[1] = pixel[1].saturating_add(boost);
            pixel[2] = pixel[2].saturating_add(boost);
            pixel[3] = 255;
        }
    }
}

/// Traces the parametric heart curve around `(cx, cy)`.
///
/// Samples the classic curve `x = 16 sin^3, y = -(13 cos - 5 cos2 - 2 cos3
/// - cos4)` every 5 degrees, scaled by `size / 20`, yielding a closed
/// 72-point outline. The outline is left-right symmetric about `cx` to
/// within one pixel of truncation skew.
pub fn heart_outline(cx: i32, cy: i32, size: i32) -> Vec<Point> {
    let scale = size as f64 / 20.0;
    (0..360)
        .step_by(5)
        .map(|angle| {
            let rad = (angle as f64).to_radians();
            let x = 16.0 * rad.sin().powi(3);
            let y = -(13.0 * rad.cos()
                - 5.0 * (2.0 * rad).cos()
                - 2.0 * (3.0 * rad).cos()
                - (4.0 * rad).cos());
            Point {
                x: cx + (x * scale) as i32,
                y: cy + (y * scale) as i32,
            }
        })
        .collect()
}

/// Which praying hand to outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hand {
    Left,
    Right,
}

/// Offsets of one hand's five vertices, as fractions of the hands size.
/// The x component is negated for the left hand.
const HAND_OFFSETS: [(f64, f64); 5] = [
    (0.4, 0.8),
    (0.3, -0.2),
    (0.1, -0.5),
    (0.0, -0.6),
    (0.15, 0.1),
];

fn hand_outline(cx: i32, cy: i32, size: i32, hand: Hand) -> Vec<Point> {
    let side = match hand {
        Hand::Left => -1.0,
        Hand::Right => 1.0,
    };
    HAND_OFFSETS
        .iter()
        .map(|&(fx, fy)| Point {
            x: cx + (size as f64 * fx * side) as i32,
            y: cy + (size as f64 * fy) as i32,
        })
        .collect()
}

/// Traces an 8-point sparkle star around `(cx, cy)`.
///
/// Points sit at 45-degree increments, alternating between the full radius
/// and 0.4 of it.
pub fn sparkle_outline(cx: i32, cy: i32, size: i32) -> Vec<Point> {
    (0..8)
        .map(|i| {
            let angle = (i as f64 * 45.0).to_radians();
            let radius = if i % 2 == 0 {
                size as f64
            } else {
                size as f64 * 0.4
            };
            Point {
                x: cx + (angle.cos() * radius) as i32,
                y: cy + (angle.sin() * radius) as i32,
            }
        })
        .collect()
}

/// Fills a closed polygon with `color`, writing all four channels.
///
/// The fill never composites: covered pixels take the fill color verbatim,
/// alpha included, which is how the translucent glow and sparkle layers end
/// up in the output. Uses an even-odd scanline: each pixel row inside the
/// outline's vertical range is intersected along its midline with every
/// edge, and spans between successive intersection pairs are filled.
/// Outlines with fewer than 3 points are ignored.
pub fn fill_polygon(canvas: &mut RgbaImage, outline: &[Point], color: Rgba<u8>) {
    if outline.len() < 3 {
        return;
    }
    let (width, height) = canvas.dimensions();

    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    for p in outline {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    let y_start = min_y.max(0);
    let y_end = max_y.min(height as i32 - 1);

    let mut hits: Vec<f64> = Vec::new();
    for row in y_start..=y_end {
        let scan_y = row as f64 + 0.5;
        hits.clear();

        for i in 0..outline.len() {
            let a = outline[i];
            let b = outline[(i + 1) % outline.len()];
            let (lo, hi) = if a.y < b.y {
                (a.y as f64, b.y as f64)
            } else {
                (b.y as f64, a.y as f64)
            };
            // Half-open in y so a shared vertex is counted once; horizontal
            // edges never intersect a row midline.
            if scan_y < lo || scan_y >= hi {
                continue;
            }
            let t = (scan_y - a.y as f64) / (b.y as f64 - a.y as f64);
            hits.push(a.x as f64 + t * (b.x as f64 - a.x as f64));
        }

        hits.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for pair in hits.chunks_exact(2) {
            let left = (pair[0].ceil() as i32).max(0);
            let right = (pair[1].floor() as i32).min(width as i32 - 1);
            for x in left..=right {
                canvas.put_pixel(x as u32, row as u32, color);
            }
        }
    }
}
