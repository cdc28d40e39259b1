//! Texture encoding configuration.

use crate::dds::DdsFormat;

/// Format used when no other is configured.
///
/// DXT5 keeps the full alpha channel at a 4:1 ratio.
pub const DEFAULT_FORMAT: DdsFormat = DdsFormat::BC3;

/// Largest accepted width or height, in pixels.
///
/// Matches the texture size limit of Direct3D 11 class hardware.
pub const DEFAULT_MAX_DIMENSION: u32 = 16384;

/// Settings for a [`DdsTextureEncoder`](crate::texture::DdsTextureEncoder).
///
/// # Example
///
/// ```
/// use lively_dds::config::TextureConfig;
/// use lively_dds::dds::DdsFormat;
///
/// let config = TextureConfig::default();
/// assert_eq!(config.format(), DdsFormat::BC3);
/// assert_eq!(config.max_dimension(), 16384);
///
/// let config = TextureConfig::new(DdsFormat::BC1).with_max_dimension(4096);
/// assert!(config.accepts(4096, 512));
/// assert!(!config.accepts(8192, 512));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureConfig {
    /// DDS output format
    format: DdsFormat,
    /// Upper bound on either side of an input image
    max_dimension: u32,
}

impl TextureConfig {
    /// Create a configuration for `format` with the default size limit.
    pub fn new(format: DdsFormat) -> Self {
        Self {
            format,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: DdsFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the largest accepted width or height.
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    pub fn format(&self) -> DdsFormat {
        self.format
    }

    pub fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    /// Whether an image of this size may be encoded.
    ///
    /// Both sides must be non-zero and no larger than `max_dimension`.
    pub fn accepts(&self, width: u32, height: u32) -> bool {
        (1..=self.max_dimension).contains(&width) && (1..=self.max_dimension).contains(&height)
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TextureConfig::default();
        assert_eq!(config.format(), DEFAULT_FORMAT);
        assert_eq!(config.max_dimension(), DEFAULT_MAX_DIMENSION);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TextureConfig::new(DdsFormat::BC1)
            .with_format(DdsFormat::Lossless)
            .with_max_dimension(256);

        assert_eq!(config.format(), DdsFormat::Lossless);
        assert_eq!(config.max_dimension(), 256);
    }

    #[test]
    fn test_accepts_bounds() {
        let config = TextureConfig::default().with_max_dimension(64);

        assert!(config.accepts(1, 1));
        assert!(config.accepts(64, 64));
        assert!(!config.accepts(65, 1));
        assert!(!config.accepts(1, 65));
        assert!(!config.accepts(0, 8));
        assert!(!config.accepts(8, 0));
    }

    #[test]
    fn test_zero_limit_accepts_nothing() {
        let config = TextureConfig::default().with_max_dimension(0);
        assert!(!config.accepts(1, 1));
    }

    #[test]
    fn test_equality() {
        assert_eq!(TextureConfig::new(DdsFormat::BC3), TextureConfig::default());
        assert_ne!(
            TextureConfig::default(),
            TextureConfig::default().with_max_dimension(512)
        );
    }
}
