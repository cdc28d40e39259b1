//! Texture encoding behind a format-agnostic trait.
//!
//! Callers that only need "turn an RGBA image into texture file bytes" can
//! hold an `Arc<dyn TextureEncoder>` and stay independent of DDS details.
//!
//! # Example
//!
//! ```
//! use lively_dds::texture::{DdsTextureEncoder, TextureEncoder};
//! use lively_dds::dds::DdsFormat;
//! use image::RgbaImage;
//!
//! let encoder = DdsTextureEncoder::new(DdsFormat::BC3);
//! let image = RgbaImage::new(8, 8);
//!
//! let bytes = encoder.encode(&image).unwrap();
//! assert_eq!(bytes.len(), encoder.expected_size(8, 8));
//! ```

mod dds;
mod encoder;
mod error;

pub use dds::DdsTextureEncoder;
pub use encoder::TextureEncoder;
pub use error::TextureError;
