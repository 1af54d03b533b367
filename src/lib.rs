//! Procedural generator for the HealPray app icon.
//!
//! [`render`] paints the icon once as a square RGBA bitmap; [`export`]
//! resizes that bitmap into every iOS and Android launcher size and writes
//! the PNGs to their platform-mandated paths.

pub mod contents_json;
pub mod export;
pub mod render;
