//! Contents.json data model for Apple's Asset Catalog format
//!
//! Mirrors the slice of Apple's Contents.json schema that an app-icon set
//! uses: one entry per generated file with its idiom, point size and scale,
//! plus the versioning info block. Written next to the iOS icons when the
//! catalog metadata is requested.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file
///
/// Holds the image entries for the icon set together with versioning and
/// authorship information.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Array of image entries for different sizes, scales, and device types
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within an app-icon set
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// The filename of the PNG inside the appiconset directory
    pub filename: String,

    /// The device type for the image (e.g., "iphone", "ipad", "ios-marketing")
    pub idiom: String,

    /// The size of the image in points (e.g., "29x29", "83.5x83.5")
    pub size: String,

    /// The scale factor for the image ("1x", "2x", "3x")
    pub scale: String,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The application or tool that authored the asset catalog
    pub author: String,
}

impl ImageEntry {
    /// Creates an app-icon entry from the fields of an icon table row.
    pub fn app_icon(filename: &str, idiom: &str, size: &str, scale: &str) -> Self {
        Self {
            filename: filename.to_string(),
            idiom: idiom.to_string(),
            size: size.to_string(),
            scale: scale.to_string(),
        }
    }
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: 1,
            author: "healpray-icon-gen".to_string(),
        }
    }
}

/// Writes a Contents.json file to the specified directory
///
/// Serializes the provided image entries with standard metadata
/// (version 1, author "healpray-icon-gen") as pretty-printed JSON.
///
/// # Errors
/// Returns an error if JSON serialization or the file write fails.
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    let cf = ContentsFile {
        images,
        info: Info::default(),
    };
    let json = serde_json::to_string_pretty(&cf)?;
    std::fs::write(dir.join("Contents.json"), json).context("write Contents.json")
}
