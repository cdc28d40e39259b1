//! DDS decoder - reads DDS files back into RGBA images.

use std::fmt;
use std::sync::Arc;

use crate::dds::decompress::{BcnDecompressor, BlockDecompressor};
use crate::dds::fourcc::{resolve_bit_count, resolve_fourcc};
use crate::dds::types::{DdsError, DdsHeader, FourCc, DDS_FILE_HEADER_SIZE};
use crate::dds::uncompressed::{self, PixelLayout};
use image::RgbaImage;

/// How the payload after the header is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadKind {
    Blocks(FourCc),
    Uncompressed(PixelLayout),
}

impl PayloadKind {
    /// Minimum payload length for the top-level surface.
    fn required_len(&self, width: usize, height: usize) -> usize {
        match self {
            PayloadKind::Blocks(fourcc) => {
                width.div_ceil(4) * height.div_ceil(4) * fourcc.block_size().unwrap_or(0)
            }
            PayloadKind::Uncompressed(layout) => width * height * layout.bytes_per_pixel(),
        }
    }
}

/// Decodes DDS files to RGBA8 images.
///
/// Block-compressed payloads go through a [`BlockDecompressor`];
/// uncompressed 24- and 32-bit payloads are unpacked directly.
#[derive(Clone)]
pub struct DdsDecoder {
    decompressor: Arc<dyn BlockDecompressor>,
}

impl DdsDecoder {
    /// Create a decoder using the default block decompressor.
    pub fn new() -> Self {
        Self::with_decompressor(BcnDecompressor::new())
    }

    /// Create a decoder with a custom block decompressor.
    pub fn with_decompressor<D: BlockDecompressor + 'static>(decompressor: D) -> Self {
        Self {
            decompressor: Arc::new(decompressor),
        }
    }

    /// Decode a complete DDS file.
    ///
    /// # Errors
    ///
    /// - [`DdsError::Format`] for a short header, bad magic, zero or
    ///   oversized dimensions, a DX10 or unrecognized FourCC, or an
    ///   unsupported bit count
    /// - [`DdsError::Size`] if the payload is empty or too short, or the
    ///   decompressor returns the wrong number of bytes
    pub fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, DdsError> {
        let header = DdsHeader::from_bytes(bytes)?;
        let (width, height) = (header.width, header.height);

        if width == 0 || height == 0 {
            return Err(DdsError::Format(format!(
                "invalid dimensions {}×{}",
                width, height
            )));
        }
        let output_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                DdsError::Format(format!("dimensions too large: {}×{}", width, height))
            })?;

        let kind = Self::resolve_payload_kind(bytes, &header)?;

        let payload = &bytes[DDS_FILE_HEADER_SIZE..];
        if payload.is_empty() {
            return Err(DdsError::Size {
                expected: kind.required_len(width as usize, height as usize),
                actual: 0,
            });
        }

        let rgba = match kind {
            PayloadKind::Blocks(fourcc) => self
                .decompressor
                .decompress(fourcc, payload, width, height)?,
            PayloadKind::Uncompressed(layout) => {
                uncompressed::unpack(payload, width, height, layout)?
            }
        };

        if rgba.len() != output_len {
            return Err(DdsError::Size {
                expected: output_len,
                actual: rgba.len(),
            });
        }

        tracing::debug!(width, height, kind = ?kind, "Decoded DDS texture");

        RgbaImage::from_raw(width, height, rgba).ok_or(DdsError::Size {
            expected: output_len,
            actual: 0,
        })
    }

    fn resolve_payload_kind(bytes: &[u8], header: &DdsHeader) -> Result<PayloadKind, DdsError> {
        match resolve_fourcc(bytes)? {
            Some((FourCc::Dx10, _)) => Err(DdsError::Format(
                "DX10 extended header not supported".to_string(),
            )),
            Some((fourcc, _)) => Ok(PayloadKind::Blocks(fourcc)),
            None => {
                let (bit_count, _) = resolve_bit_count(header).ok_or_else(|| {
                    DdsError::Format("no FourCC and no RGB bit count in header".to_string())
                })?;
                let layout =
                    PixelLayout::from_header_fields(bit_count, header.pixel_format.r_bit_mask)?;
                Ok(PayloadKind::Uncompressed(layout))
            }
        }
    }
}

impl Default for DdsDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DdsDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DdsDecoder").finish_non_exhaustive()
    }
}

/// Decode a complete DDS file with the default decoder.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, DdsError> {
    DdsDecoder::new().decode(bytes)
}
