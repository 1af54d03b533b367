use healpray_icon_gen::render::{self, gradient_row_color, HEALING_TEAL, PEACEFUL_BLUE};
use image::Rgba;

#[test]
fn render_is_square_rgba_at_any_size() {
    for size in [1u32, 7, 64, 256] {
        let canvas = render::render(size);
        assert_eq!(canvas.dimensions(), (size, size));
        for pixel in canvas.pixels() {
            assert!(pixel[3] > 0, "every pixel carries an alpha value");
        }
    }
}

#[test]
fn gradient_endpoints_survive_the_full_render() {
    let size = 512;
    let canvas = render::render(size);

    // The corners sit at ~0.707 * size from the center, outside the radial
    // overlay's 0.7 * size reach, and no shape extends there. Row 0 is the
    // exact start color; the bottom row only converges toward the end color.
    assert_eq!(*canvas.get_pixel(0, 0), HEALING_TEAL);
    assert_eq!(*canvas.get_pixel(size - 1, 0), HEALING_TEAL);

    let expected_bottom = gradient_row_color(size - 1, size, HEALING_TEAL, PEACEFUL_BLUE);
    assert_eq!(*canvas.get_pixel(0, size - 1), expected_bottom);
    assert_eq!(*canvas.get_pixel(size - 1, size - 1), expected_bottom);
    for c in 0..3 {
        let diff = (expected_bottom[c] as i16 - PEACEFUL_BLUE[c] as i16).abs();
        assert!(diff <= 2, "bottom row channel {} off by {}", c, diff);
    }
}

#[test]
fn radial_overlay_brightens_inside_the_radius_only() {
    let size = 512;
    let canvas = render::render(size);

    // A point on the vertical center line above the heart glow: inside the
    // radial radius, outside every shape. Its color is the gradient row
    // color plus the distance-scaled boost.
    let (x, y) = (size / 2, 40);
    let row = gradient_row_color(y, size, HEALING_TEAL, PEACEFUL_BLUE);
    let center = (size / 2) as f64;
    let distance = center - y as f64;
    let boost = (30.0 * (1.0 - distance / (size as f64 * 0.7))) as u8;
    let expected = Rgba([
        row[0].saturating_add(boost),
        row[1].saturating_add(boost),
        row[2].saturating_add(boost),
        255,
    ]);
    assert_eq!(*canvas.get_pixel(x, y), expected);

    // The corners keep the plain gradient color (see the endpoint test).
    assert_eq!(*canvas.get_pixel(0, 0), HEALING_TEAL);
}

#[test]
fn render_is_deterministic() {
    let first = render::render(1024);
    let second = render::render(1024);
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn base_size_scales_the_composition() {
    // The same relative locations show the same layers at different sizes:
    // a sparkle center at (0.25, 0.25) and the white heart center.
    for size in [256u32, 1024] {
        let canvas = render::render(size);
        assert_eq!(
            *canvas.get_pixel(size / 4, size / 4),
            Rgba([255, 255, 255, 200]),
            "sparkle at size {}",
            size
        );
        assert_eq!(
            *canvas.get_pixel(size / 2, (size as f64 * 0.48) as u32),
            Rgba([255, 255, 255, 255]),
            "heart center at size {}",
            size
        );
    }
}
