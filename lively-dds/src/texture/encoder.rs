//! The [`TextureEncoder`] seam between tile producers and the codec.
//!
//! # Example
//!
//! ```
//! use lively_dds::texture::{TextureEncoder, DdsTextureEncoder};
//! use lively_dds::dds::DdsFormat;
//! use std::sync::Arc;
//!
//! let encoder: Arc<dyn TextureEncoder> = Arc::new(DdsTextureEncoder::new(DdsFormat::BC1));
//!
//! assert_eq!(encoder.extension(), "dds");
//! assert_eq!(encoder.expected_size(4096, 4096), 128 + 8 * 1024 * 1024);
//! ```

use crate::texture::TextureError;
use image::RgbaImage;
use std::sync::Arc;

/// Turns an RGBA image into the bytes of a complete texture file.
///
/// Encoders are shared across worker threads, hence `Send + Sync`.
pub trait TextureEncoder: Send + Sync {
    /// Encode `image`, header included.
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, TextureError>;

    /// File size `encode` produces for an image of these dimensions.
    fn expected_size(&self, width: u32, height: u32) -> usize;

    /// File extension without the dot, e.g. `"dds"`.
    fn extension(&self) -> &str;

    /// Short display name, e.g. `"DDS BC1"`.
    fn name(&self) -> &str;
}

/// Shared encoders delegate to the value they wrap.
impl<T: TextureEncoder + ?Sized> TextureEncoder for Arc<T> {
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, TextureError> {
        (**self).encode(image)
    }

    fn expected_size(&self, width: u32, height: u32) -> usize {
        (**self).expected_size(width, height)
    }

    fn extension(&self) -> &str {
        (**self).extension()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
