//! DDS implementation of [`TextureEncoder`].

use crate::config::TextureConfig;
use crate::dds::{DdsEncoder, DdsFormat};
use crate::texture::{TextureEncoder, TextureError};
use image::RgbaImage;

/// Encodes textures as DDS files in a fixed format.
///
/// Images with an empty side, or a side longer than the configured
/// maximum, are rejected before any compression work.
///
/// # Example
///
/// ```
/// use lively_dds::config::TextureConfig;
/// use lively_dds::dds::DdsFormat;
/// use lively_dds::texture::{DdsTextureEncoder, TextureEncoder};
///
/// let encoder = DdsTextureEncoder::from_config(&TextureConfig::default());
/// assert_eq!(encoder.format(), DdsFormat::BC3);
/// assert_eq!(encoder.name(), "DDS BC3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdsTextureEncoder {
    config: TextureConfig,
    encoder: DdsEncoder,
}

impl DdsTextureEncoder {
    /// Create an encoder for `format` with the default size limit.
    pub fn new(format: DdsFormat) -> Self {
        Self::from_config(&TextureConfig::new(format))
    }

    pub fn from_config(config: &TextureConfig) -> Self {
        Self {
            config: *config,
            encoder: DdsEncoder::new(config.format()),
        }
    }

    pub fn format(&self) -> DdsFormat {
        self.encoder.format()
    }

    pub fn config(&self) -> &TextureConfig {
        &self.config
    }
}

impl TextureEncoder for DdsTextureEncoder {
    fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, TextureError> {
        let (width, height) = image.dimensions();
        if !self.config.accepts(width, height) {
            return Err(TextureError::InvalidDimensions { width, height });
        }

        Ok(self.encoder.encode(image)?)
    }

    fn expected_size(&self, width: u32, height: u32) -> usize {
        self.encoder.expected_size(width, height)
    }

    fn extension(&self) -> &str {
        "dds"
    }

    fn name(&self) -> &str {
        match self.encoder.format() {
            DdsFormat::BC1 => "DDS BC1",
            DdsFormat::BC3 => "DDS BC3",
            DdsFormat::Lossless => "DDS Lossless",
        }
    }
}
