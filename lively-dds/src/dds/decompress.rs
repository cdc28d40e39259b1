//! Block decompression for DXT1/DXT3/DXT5 payloads.

use crate::dds::types::{DdsError, FourCc};

/// Expands a block-compressed payload to RGBA8 pixels.
///
/// Implementations return exactly `width * height * 4` bytes in row-major
/// R, G, B, A order. The decoder checks this and rejects anything else.
pub trait BlockDecompressor: Send + Sync {
    /// Decompress `data` holding the top-level surface of a `width`×`height`
    /// image in the given block format.
    fn decompress(
        &self,
        fourcc: FourCc,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, DdsError>;
}

/// Default decompressor backed by `bcdec_rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BcnDecompressor;

impl BcnDecompressor {
    /// Create a new decompressor.
    pub fn new() -> Self {
        Self
    }
}

impl BlockDecompressor for BcnDecompressor {
    fn decompress(
        &self,
        fourcc: FourCc,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, DdsError> {
        let (block_size, decode_block): (usize, fn(&[u8], &mut [u8], usize)) = match fourcc {
            FourCc::Dxt1 => (8, bcdec_rs::bc1),
            FourCc::Dxt3 => (16, bcdec_rs::bc2),
            FourCc::Dxt5 => (16, bcdec_rs::bc3),
            FourCc::Dx10 => {
                return Err(DdsError::Format(format!(
                    "{} is not a block-compressed format",
                    fourcc
                )))
            }
        };

        let width = width as usize;
        let height = height as usize;
        let blocks_x = width.div_ceil(4);
        let blocks_y = height.div_ceil(4);

        let expected = blocks_x * blocks_y * block_size;
        if data.len() < expected {
            return Err(DdsError::Size {
                expected,
                actual: data.len(),
            });
        }
        if data.len() > expected {
            tracing::warn!(
                fourcc = %fourcc,
                extra = data.len() - expected,
                "Ignoring trailing payload bytes"
            );
        }

        let mut rgba = vec![0u8; width * height * 4];

        // One decoded 4×4 block, 16 bytes per row
        let mut block_rgba = [0u8; 64];
        let block_pitch = 16;

        for (block_index, block) in data[..expected].chunks_exact(block_size).enumerate() {
            let bx = block_index % blocks_x;
            let by = block_index / blocks_x;

            decode_block(block, &mut block_rgba, block_pitch);

            // Copy only the pixels inside the image
            for py in 0..4 {
                let fy = by * 4 + py;
                if fy >= height {
                    break;
                }
                for px in 0..4 {
                    let fx = bx * 4 + px;
                    if fx >= width {
                        break;
                    }
                    let src = (py * 4 + px) * 4;
                    let dst = (fy * width + fx) * 4;
                    rgba[dst..dst + 4].copy_from_slice(&block_rgba[src..src + 4]);
                }
            }
        }

        Ok(rgba)
    }
}
