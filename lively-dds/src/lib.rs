//! lively-dds - DDS texture encoding and decoding
//!
//! Encodes RGBA8 images as DXT1 (BC1), DXT5 (BC3) or uncompressed 32-bit
//! RGBA DDS files, and decodes DXT1/DXT3/DXT5 and uncompressed 24/32-bit
//! DDS files back to RGBA8.
//!
//! # Example
//!
//! ```
//! use lively_dds::dds::{decode, DdsEncoder, DdsFormat};
//! use image::{Rgba, RgbaImage};
//!
//! let image = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
//!
//! let bytes = DdsEncoder::new(DdsFormat::Lossless).encode(&image)?;
//! assert_eq!(bytes.len(), 128 + 16);
//!
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded, image);
//! # Ok::<(), lively_dds::dds::DdsError>(())
//! ```
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod config;
pub mod dds;
pub mod texture;

/// Version of the lively-dds library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
