//! Unpacking of uncompressed 24- and 32-bit DDS payloads to RGBA8.

use crate::dds::types::{DdsError, BGRA_RED_MASK};

/// Byte order of an uncompressed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 bytes: blue, green, red. Alpha is opaque.
    Bgr24,
    /// 4 bytes: blue, green, red, alpha.
    Bgra32,
    /// 4 bytes: red, green, blue, alpha.
    Rgba32,
}

impl PixelLayout {
    /// Pick the layout for a bit count and red channel mask.
    ///
    /// Only the BGRA red mask is recognized; every other 32-bit mask is
    /// read as RGBA.
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::Format`] for bit counts other than 24 and 32.
    pub fn from_header_fields(bit_count: u32, red_mask: u32) -> Result<Self, DdsError> {
        match bit_count {
            24 => Ok(PixelLayout::Bgr24),
            32 if red_mask == BGRA_RED_MASK => Ok(PixelLayout::Bgra32),
            32 => Ok(PixelLayout::Rgba32),
            other => Err(DdsError::Format(format!(
                "unsupported uncompressed bit count {}",
                other
            ))),
        }
    }

    /// Bytes per source pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelLayout::Bgr24 => 3,
            PixelLayout::Bgra32 | PixelLayout::Rgba32 => 4,
        }
    }
}

/// Convert a tightly packed uncompressed payload to RGBA8.
///
/// Bytes past `width * height * bytes_per_pixel` are ignored.
///
/// # Errors
///
/// Returns [`DdsError::Size`] if the payload is too short.
pub fn unpack(
    data: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<Vec<u8>, DdsError> {
    let pixel_count = width as usize * height as usize;
    let bpp = layout.bytes_per_pixel();
    let expected = pixel_count * bpp;

    if data.len() < expected {
        return Err(DdsError::Size {
            expected,
            actual: data.len(),
        });
    }

    let source = &data[..expected];
    let rgba = match layout {
        PixelLayout::Rgba32 => source.to_vec(),
        PixelLayout::Bgra32 => source
            .chunks_exact(4)
            .flat_map(|p| [p[2], p[1], p[0], p[3]])
            .collect(),
        PixelLayout::Bgr24 => source
            .chunks_exact(3)
            .flat_map(|p| [p[2], p[1], p[0], 255])
            .collect(),
    };

    Ok(rgba)
}
