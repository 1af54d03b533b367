//! Resizes the rendered base icon into every platform size and writes the
//! PNGs to their platform-mandated paths.

use crate::contents_json::{write_contents_json, ImageEntry};
use crate::render::{self, Palette};
use anyhow::{Context, Result};
use clap::Parser;
use image::{imageops::FilterType, Rgba, RgbaImage};
use std::{
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
    str::FromStr,
};

#[derive(Debug, Parser)]
#[clap(
    name = "healpray-icon-gen",
    about = "Render the HealPray app icon and export every iOS and Android size"
)]
pub struct Args {
    /// Output directory the platform asset paths are created under.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Side length of the rendered base icon in pixels.
    #[clap(long, value_name = "PX", default_value_t = 1024)]
    pub base_size: u32,

    /// Generate icons for the iOS asset catalog only
    #[clap(long)]
    pub ios: bool,

    /// Generate icons for the Android mipmap directories only
    #[clap(long)]
    pub android: bool,

    /// Override the gradient start color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    pub start_color: Option<String>,

    /// Override the gradient end color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    pub end_color: Option<String>,

    /// Also write a Contents.json describing the iOS icon set
    #[clap(long)]
    pub contents_json: bool,
}

/// One entry of the iOS app-icon asset catalog.
#[derive(Debug, Clone, Copy)]
pub struct IosIcon {
    /// File name inside the appiconset directory.
    pub filename: &'static str,
    /// Logical size in points, e.g. "83.5x83.5".
    pub points: &'static str,
    /// Display scale, "1x", "2x" or "3x".
    pub scale: &'static str,
    /// Device idiom for the catalog entry.
    pub idiom: &'static str,
    /// Actual pixel side length (points x scale).
    pub px: u32,
}

/// Asset-catalog directory the iOS icons are written into.
pub const IOS_ICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

/// The fixed iOS icon set: iPhone, iPad and App Store marketing sizes.
#[rustfmt::skip]
pub const IOS_ICONS: [IosIcon; 15] = [
    IosIcon { filename: "Icon-App-20x20@1x.png", points: "20x20", scale: "1x", idiom: "iphone", px: 20 },
    IosIcon { filename: "Icon-App-20x20@2x.png", points: "20x20", scale: "2x", idiom: "iphone", px: 40 },
    IosIcon { filename: "Icon-App-20x20@3x.png", points: "20x20", scale: "3x", idiom: "iphone", px: 60 },
    IosIcon { filename: "Icon-App-29x29@1x.png", points: "29x29", scale: "1x", idiom: "iphone", px: 29 },
    IosIcon { filename: "Icon-App-29x29@2x.png", points: "29x29", scale: "2x", idiom: "iphone", px: 58 },
    IosIcon { filename: "Icon-App-29x29@3x.png", points: "29x29", scale: "3x", idiom: "iphone", px: 87 },
    IosIcon { filename: "Icon-App-40x40@1x.png", points: "40x40", scale: "1x", idiom: "iphone", px: 40 },
    IosIcon { filename: "Icon-App-40x40@2x.png", points: "40x40", scale: "2x", idiom: "iphone", px: 80 },
    IosIcon { filename: "Icon-App-40x40@3x.png", points: "40x40", scale: "3x", idiom: "iphone", px: 120 },
    IosIcon { filename: "Icon-App-60x60@2x.png", points: "60x60", scale: "2x", idiom: "iphone", px: 120 },
    IosIcon { filename: "Icon-App-60x60@3x.png", points: "60x60", scale: "3x", idiom: "iphone", px: 180 },
    IosIcon { filename: "Icon-App-76x76@1x.png", points: "76x76", scale: "1x", idiom: "ipad", px: 76 },
    IosIcon { filename: "Icon-App-76x76@2x.png", points: "76x76", scale: "2x", idiom: "ipad", px: 152 },
    IosIcon { filename: "Icon-App-83.5x83.5@2x.png", points: "83.5x83.5", scale: "2x", idiom: "ipad", px: 167 },
    IosIcon { filename: "Icon-App-1024x1024@1x.png", points: "1024x1024", scale: "1x", idiom: "ios-marketing", px: 1024 },
];

/// One Android launcher icon, named by its density bucket.
#[derive(Debug, Clone, Copy)]
pub struct AndroidIcon {
    /// Density bucket, e.g. "xxhdpi".
    pub density: &'static str,
    /// Pixel side length for that bucket.
    pub px: u32,
}

/// Resource directory the mipmap buckets live under.
pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";

/// The fixed Android launcher set, one icon per density bucket.
pub const ANDROID_ICONS: [AndroidIcon; 5] = [
    AndroidIcon { density: "mdpi", px: 48 },
    AndroidIcon { density: "hdpi", px: 72 },
    AndroidIcon { density: "xhdpi", px: 96 },
    AndroidIcon { density: "xxhdpi", px: 144 },
    AndroidIcon { density: "xxxhdpi", px: 192 },
];

/// Renders the base icon and exports every selected platform size.
///
/// With neither `--ios` nor `--android`, both platforms are exported. The
/// unresized base icon is always written to `app_icon_{size}.png` at the
/// output root first; a failure anywhere aborts the remaining exports and
/// leaves earlier files on disk.
pub fn run(args: Args) -> Result<()> {
    if args.base_size == 0 {
        anyhow::bail!("Base size must be a positive number of pixels");
    }

    let mut palette = Palette::default();
    if let Some(color) = &args.start_color {
        palette.gradient_start = parse_css_color(color, render::HEALING_TEAL);
    }
    if let Some(color) = &args.end_color {
        palette.gradient_end = parse_css_color(color, render::PEACEFUL_BLUE);
    }

    let base_size = args.base_size;
    println!("Rendering {base_size}x{base_size} base icon...");
    let base = render::render_with(base_size, &palette);

    create_dir_all(&args.output).context("Can't create output directory")?;
    let base_name = format!("app_icon_{base_size}.png");
    save_png(&base, &args.output.join(&base_name))?;
    println!("✓ Saved {base_name}");

    let has_platform_flags = args.ios || args.android;
    let mut generated = 1;

    if args.ios || !has_platform_flags {
        generated += export_ios_icons(&base, &args.output)?;
        if args.contents_json {
            write_ios_contents_json(&args.output)?;
        }
    }

    if args.android || !has_platform_flags {
        generated += export_android_icons(&base, &args.output)?;
    }

    println!("Generated {generated} icon files");
    Ok(())
}

fn export_ios_icons(base: &RgbaImage, out_dir: &Path) -> Result<usize> {
    println!("Generating iOS app icons...");
    let iconset_dir = out_dir.join(IOS_ICONSET_DIR);
    create_dir_all(&iconset_dir)
        .with_context(|| format!("Can't create {}", iconset_dir.display()))?;

    for icon in &IOS_ICONS {
        let resized = resize_to(base, icon.px);
        save_png(&resized, &iconset_dir.join(icon.filename))?;
        println!("  ✓ Generated {} ({}x{})", icon.filename, icon.px, icon.px);
    }
    Ok(IOS_ICONS.len())
}

fn export_android_icons(base: &RgbaImage, out_dir: &Path) -> Result<usize> {
    println!("Generating Android launcher icons...");
    for icon in &ANDROID_ICONS {
        let mipmap_dir = out_dir
            .join(ANDROID_RES_DIR)
            .join(format!("mipmap-{}", icon.density));
        create_dir_all(&mipmap_dir)
            .with_context(|| format!("Can't create {}", mipmap_dir.display()))?;

        let resized = resize_to(base, icon.px);
        save_png(&resized, &mipmap_dir.join("ic_launcher.png"))?;
        println!(
            "  ✓ Generated mipmap-{}/ic_launcher.png ({}x{})",
            icon.density, icon.px, icon.px
        );
    }
    Ok(ANDROID_ICONS.len())
}

/// Writes the asset-catalog metadata for the 15 generated iOS icons.
fn write_ios_contents_json(out_dir: &Path) -> Result<()> {
    let images = IOS_ICONS
        .iter()
        .map(|icon| ImageEntry::app_icon(icon.filename, icon.idiom, icon.points, icon.scale))
        .collect();
    write_contents_json(&out_dir.join(IOS_ICONSET_DIR), images)?;
    println!("  ✓ Generated Contents.json");
    Ok(())
}

/// Resizes the base canvas to `px` square with Lanczos resampling.
///
/// A target matching the base size is returned as an untouched copy, so the
/// full-size export stays pixel-identical to the base render.
fn resize_to(base: &RgbaImage, px: u32) -> RgbaImage {
    if base.width() == px && base.height() == px {
        base.clone()
    } else {
        image::imageops::resize(base, px, px, FilterType::Lanczos3)
    }
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Parses a CSS color string, falling back to `fallback` when it is invalid.
fn parse_css_color(color: &str, fallback: Rgba<u8>) -> Rgba<u8> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgba([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
                255,
            ])
        })
        .unwrap_or(fallback)
}
