use healpray_icon_gen::render::{gradient_row_color, HEALING_TEAL, PEACEFUL_BLUE};
use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "app_icon_1024.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let top = rgba_img.get_pixel(0, 0);
    let bottom = rgba_img.get_pixel(0, height - 1);
    let center = rgba_img.get_pixel(width / 2, height / 2);

    println!("\nGradient samples:");
    println!("  top-left:     [{}, {}, {}, {}]", top[0], top[1], top[2], top[3]);
    println!("  bottom-left:  [{}, {}, {}, {}]", bottom[0], bottom[1], bottom[2], bottom[3]);
    println!("  center:       [{}, {}, {}, {}]", center[0], center[1], center[2], center[3]);

    // The top row is the exact gradient start; the bottom row only converges
    // toward the end color, so allow a little slack there.
    let top_ok = (0..3).all(|c| top[c] == HEALING_TEAL[c]);
    let expected_bottom = gradient_row_color(height - 1, height, HEALING_TEAL, PEACEFUL_BLUE);
    let bottom_ok = (0..3).all(|c| (bottom[c] as i16 - expected_bottom[c] as i16).abs() <= 2);

    // The center pixel carries the full +30 radial boost over its row color,
    // unless the heart covers it (then it is plain white).
    let row_color = gradient_row_color(height / 2, height, HEALING_TEAL, PEACEFUL_BLUE);
    let center_ok = (0..3).all(|c| center[c] >= row_color[c]);

    println!("\nAnalysis:");
    if square(width, height) && top_ok && bottom_ok && center_ok {
        println!("✓ Icon looks right");
    } else {
        if !square(width, height) {
            println!("⚠ Image is not square");
        }
        if !top_ok {
            println!("⚠ Top row does not match the gradient start color");
        }
        if !bottom_ok {
            println!("⚠ Bottom row does not match the gradient end color");
        }
        if !center_ok {
            println!("⚠ Center pixel is darker than its gradient row");
        }
    }
}

fn square(width: u32, height: u32) -> bool {
    width == height
}
