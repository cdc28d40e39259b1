//! DDS format types and error definitions.

use std::fmt;
use thiserror::Error;

/// Size of the full file header: 4-byte magic plus the 124-byte header.
pub const DDS_FILE_HEADER_SIZE: usize = 128;

/// Size of the header structure that follows the magic.
pub const DDS_HEADER_SIZE: u32 = 124;

/// Size of the embedded pixel format structure.
pub const DDS_PIXEL_FORMAT_SIZE: u32 = 32;

/// Magic bytes at the start of every DDS file.
pub const DDS_MAGIC: [u8; 4] = *b"DDS ";

/// Absolute file offset of the pixel format structure.
pub const PIXEL_FORMAT_OFFSET: usize = 76;

/// DDS encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DdsFormat {
    /// BC1/DXT1 compression (8 bytes per 4×4 block, color only)
    BC1,
    /// BC3/DXT5 compression (16 bytes per 4×4 block, 8-bit alpha)
    BC3,
    /// Uncompressed 32-bit RGBA
    Lossless,
}

impl DdsFormat {
    /// Bytes per 4×4 block, or `None` for uncompressed data.
    pub fn block_size(&self) -> Option<u32> {
        match self {
            DdsFormat::BC1 => Some(8),
            DdsFormat::BC3 => Some(16),
            DdsFormat::Lossless => None,
        }
    }

    /// FourCC tag written to the header, or `None` for uncompressed data.
    pub fn fourcc(&self) -> Option<FourCc> {
        match self {
            DdsFormat::BC1 => Some(FourCc::Dxt1),
            DdsFormat::BC3 => Some(FourCc::Dxt5),
            DdsFormat::Lossless => None,
        }
    }

    /// Size in bytes of the payload that follows the header.
    pub fn payload_size(&self, width: u32, height: u32) -> usize {
        match self.block_size() {
            Some(block_size) => {
                width.div_ceil(4) as usize * height.div_ceil(4) as usize * block_size as usize
            }
            None => width as usize * height as usize * 4,
        }
    }
}

impl fmt::Display for DdsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DdsFormat::BC1 => write!(f, "BC1"),
            DdsFormat::BC3 => write!(f, "BC3"),
            DdsFormat::Lossless => write!(f, "Lossless"),
        }
    }
}

/// FourCC tags recognized by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FourCc {
    Dxt1,
    Dxt3,
    Dxt5,
    /// Marks a DX10 extended header, which is not supported.
    Dx10,
}

impl FourCc {
    /// All recognized tags, in header scan order.
    pub const ALL: [FourCc; 4] = [FourCc::Dxt1, FourCc::Dxt3, FourCc::Dxt5, FourCc::Dx10];

    /// The 4-byte ASCII tag.
    pub fn tag(&self) -> [u8; 4] {
        match self {
            FourCc::Dxt1 => *b"DXT1",
            FourCc::Dxt3 => *b"DXT3",
            FourCc::Dxt5 => *b"DXT5",
            FourCc::Dx10 => *b"DX10",
        }
    }

    /// Look up a recognized tag.
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|fourcc| fourcc.tag() == tag)
    }

    /// Bytes per 4×4 block for block-compressed tags.
    pub fn block_size(&self) -> Option<usize> {
        match self {
            FourCc::Dxt1 => Some(8),
            FourCc::Dxt3 | FourCc::Dxt5 => Some(16),
            FourCc::Dx10 => None,
        }
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        write!(f, "{}", String::from_utf8_lossy(&tag))
    }
}

/// Errors that can occur while encoding or decoding DDS data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DdsError {
    /// Malformed header, bad magic, or unsupported format
    #[error("Invalid DDS format: {0}")]
    Format(String),

    /// Payload or decoded data has the wrong length
    #[error("Size mismatch: expected {expected} bytes, got {actual}")]
    Size { expected: usize, actual: usize },

    /// Input image cannot be encoded
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// DDS file header (magic + 124 bytes).
///
/// Based on Microsoft DDS specification:
/// https://docs.microsoft.com/en-us/windows/win32/direct3ddds/dds-header
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdsHeader {
    /// Magic number: "DDS " (0x20534444)
    pub magic: [u8; 4],
    /// Size of structure (124 bytes)
    pub size: u32,
    /// Flags indicating which fields are valid
    pub flags: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Surface width in pixels
    pub width: u32,
    /// Row pitch (uncompressed) or total payload size (compressed)
    pub pitch_or_linear_size: u32,
    /// Depth for volume textures
    pub depth: u32,
    /// Number of mipmap levels
    pub mipmap_count: u32,
    /// Reserved
    pub reserved1: [u32; 11],
    /// Pixel format structure (32 bytes)
    pub pixel_format: DdsPixelFormat,
    /// Surface complexity capabilities
    pub caps: u32,
    /// Additional capabilities
    pub caps2: u32,
    /// Unused
    pub caps3: u32,
    /// Unused
    pub caps4: u32,
    /// Unused
    pub reserved2: u32,
}

/// DDS pixel format structure (32 bytes).
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdsPixelFormat {
    /// Size of structure (32 bytes)
    pub size: u32,
    /// Pixel format flags
    pub flags: u32,
    /// FourCC code (e.g., "DXT1", "DXT5"), zero when uncompressed
    pub fourcc: [u8; 4],
    /// RGB bit count
    pub rgb_bit_count: u32,
    /// Red bit mask
    pub r_bit_mask: u32,
    /// Green bit mask
    pub g_bit_mask: u32,
    /// Blue bit mask
    pub b_bit_mask: u32,
    /// Alpha bit mask
    pub a_bit_mask: u32,
}

// DDS header flags (DDSD_*)
pub const DDSD_CAPS: u32 = 0x1;
pub const DDSD_HEIGHT: u32 = 0x2;
pub const DDSD_WIDTH: u32 = 0x4;
pub const DDSD_PITCH: u32 = 0x8;
pub const DDSD_PIXELFORMAT: u32 = 0x1000;
pub const DDSD_LINEARSIZE: u32 = 0x80000;

// DDS pixel format flags (DDPF_*)
pub const DDPF_ALPHAPIXELS: u32 = 0x1;
pub const DDPF_FOURCC: u32 = 0x4;
pub const DDPF_RGB: u32 = 0x40;

// DDS caps flags (DDSCAPS_*)
pub const DDSCAPS_TEXTURE: u32 = 0x1000;

// Channel masks that put R, G, B, A in file byte order 0, 1, 2, 3.
pub const RGBA_RED_MASK: u32 = 0x0000_00FF;
pub const RGBA_GREEN_MASK: u32 = 0x0000_FF00;
pub const RGBA_BLUE_MASK: u32 = 0x00FF_0000;
pub const RGBA_ALPHA_MASK: u32 = 0xFF00_0000;

/// Red mask of a BGRA-ordered 32-bit layout.
pub const BGRA_RED_MASK: u32 = 0x00FF_0000;
