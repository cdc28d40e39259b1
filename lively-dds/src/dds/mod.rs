//! DDS (DirectDraw Surface) texture encoding and decoding.
//!
//! This module encodes RGBA images into DDS files with BC1/BC3 (DXT1/DXT5)
//! compression or as uncompressed 32-bit RGBA, and decodes DXT1, DXT3,
//! DXT5 and uncompressed 24/32-bit files back to RGBA.
//!
//! # Features
//!
//! - **BC1/DXT1 Compression**: 8 bytes per 4×4 block, endpoints fitted along
//!   the principal axis of each block's colors
//! - **BC3/DXT5 Compression**: BC1 color plus an 8-bit interpolated alpha block
//! - **Lossless**: Uncompressed RGBA rows that round-trip bit-exactly
//! - **Lenient Decoding**: FourCC and bit count recovered from misplaced
//!   header fields written by some exporters
//!
//! # Example
//!
//! ```no_run
//! use lively_dds::dds::{decode, DdsEncoder, DdsFormat};
//! use image::RgbaImage;
//!
//! let image = RgbaImage::new(256, 256);
//!
//! let encoder = DdsEncoder::new(DdsFormat::BC1);
//! let dds_data = encoder.encode(&image).unwrap();
//!
//! let decoded = decode(&dds_data).unwrap();
//! assert_eq!(decoded.dimensions(), (256, 256));
//! ```
//!
//! # Format Details
//!
//! ## BC1 (DXT1)
//!
//! - Block size: 8 bytes per 4×4 pixels (0.5 bytes per pixel)
//! - Color: Two RGB565 endpoints + 2-bit indices
//! - Alpha: none (always written in four-color mode)
//!
//! ## BC3 (DXT5)
//!
//! - Block size: 16 bytes per 4×4 pixels (1 byte per pixel)
//! - Alpha: Two endpoints + 3-bit indices (8 bytes)
//! - Color: Same as BC1 (8 bytes)
//!
//! Only the top-level surface is written; files never carry mipmaps.
//! Images whose dimensions are not multiples of 4 are padded with
//! transparent black inside edge blocks.

mod bc1;
mod bc3;
mod conversion;
mod decoder;
mod decompress;
mod encoder;
mod fourcc;
mod header;
mod lossless;
mod types;
mod uncompressed;

// Public API
pub use decoder::{decode, DdsDecoder};
pub use decompress::{BcnDecompressor, BlockDecompressor};
pub use encoder::DdsEncoder;
pub use header::{decode_header, encode_header};
pub use types::{DdsError, DdsFormat, DdsHeader, DdsPixelFormat, FourCc};

// Re-export for advanced usage
pub use bc1::Bc1Encoder;
pub use bc3::Bc3Encoder;
pub use fourcc::{resolve_bit_count, resolve_fourcc, BitCountProbe, FourCcProbe};
pub use types::DDS_FILE_HEADER_SIZE;
pub use uncompressed::PixelLayout;
