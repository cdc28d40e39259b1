//! Error types for texture encoding.

use crate::dds::DdsError;
use thiserror::Error;

/// Errors returned by [`TextureEncoder`](super::TextureEncoder) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextureError {
    /// The image cannot be encoded in the target format
    #[error("Invalid image dimensions: {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying DDS codec failed
    #[error("DDS encoding failed: {0}")]
    Dds(#[from] DdsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_are_dimension_or_codec() {
        let errors = [
            TextureError::InvalidDimensions {
                width: 0,
                height: 1,
            },
            DdsError::Format("missing magic".to_string()).into(),
        ];

        for err in errors {
            match err {
                TextureError::InvalidDimensions { .. } => {}
                TextureError::Dds(_) => {}
            }
        }
    }

    #[test]
    fn test_from_dds_error() {
        let err: TextureError = DdsError::Encode("empty image: 0×0".to_string()).into();
        assert!(matches!(err, TextureError::Dds(DdsError::Encode(_))));
    }

    #[test]
    fn test_error_display() {
        let err = TextureError::InvalidDimensions {
            width: 0,
            height: 16,
        };
        assert_eq!(err.to_string(), "Invalid image dimensions: 0×16");

        let err = TextureError::Dds(DdsError::Size {
            expected: 8,
            actual: 4,
        });
        assert_eq!(
            err.to_string(),
            "DDS encoding failed: Size mismatch: expected 8 bytes, got 4"
        );
    }
}
