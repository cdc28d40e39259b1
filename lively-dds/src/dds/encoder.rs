//! DDS encoder - main API for encoding images to DDS format.

use crate::dds::bc1::Bc1Encoder;
use crate::dds::bc3::Bc3Encoder;
use crate::dds::lossless;
use crate::dds::types::{DdsError, DdsFormat, DdsHeader, DDS_FILE_HEADER_SIZE};
use image::RgbaImage;
use rayon::prelude::*;

/// DDS encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsEncoder {
    format: DdsFormat,
}

impl DdsEncoder {
    /// Create a new DDS encoder with the specified format.
    pub fn new(format: DdsFormat) -> Self {
        Self { format }
    }

    /// Get the output format.
    pub fn format(&self) -> DdsFormat {
        self.format
    }

    /// Total file size for an image of the given dimensions.
    pub fn expected_size(&self, width: u32, height: u32) -> usize {
        DDS_FILE_HEADER_SIZE + self.format.payload_size(width, height)
    }

    /// Encode RGBA image to DDS format.
    ///
    /// # Returns
    ///
    /// Complete DDS file as bytes (header + payload)
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::Encode`] if the image has a zero dimension.
    pub fn encode(&self, image: &RgbaImage) -> Result<Vec<u8>, DdsError> {
        let width = image.width();
        self.encode_raw(image.as_raw(), width, image.height(), width as usize * 4)
    }

    /// Encode a caller-owned RGBA8 buffer with an explicit row stride.
    ///
    /// # Arguments
    ///
    /// * `data` - Pixel rows, 4 bytes per pixel in R, G, B, A order
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `stride` - Distance in bytes between the starts of two rows
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::Encode`] if a dimension is zero, the stride is
    /// shorter than a row, `data` does not cover every row, or the payload
    /// size does not fit the header's 32-bit size field.
    pub fn encode_raw(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> Result<Vec<u8>, DdsError> {
        let header = DdsHeader::new(width, height, self.format)?;
        Self::validate_raster(data, width, height, stride)?;

        let mut output = Vec::with_capacity(self.expected_size(width, height));
        output.extend_from_slice(&header.to_bytes());

        let raster = Raster {
            data,
            width,
            height,
            stride,
        };
        match self.format {
            DdsFormat::BC1 => raster.compress_blocks(&mut output, |block, out| {
                out.extend_from_slice(&Bc1Encoder::compress_block(block))
            }),
            DdsFormat::BC3 => raster.compress_blocks(&mut output, |block, out| {
                out.extend_from_slice(&Bc3Encoder::compress_block(block))
            }),
            DdsFormat::Lossless => lossless::write_rows(data, width, height, stride, &mut output),
        }

        tracing::debug!(
            width,
            height,
            format = %self.format,
            bytes = output.len(),
            "Encoded DDS texture"
        );

        Ok(output)
    }

    /// Encode independent images in parallel.
    ///
    /// Returns one result per input, in input order. A failure in one image
    /// does not affect the others.
    pub fn encode_batch(&self, images: &[RgbaImage]) -> Vec<Result<Vec<u8>, DdsError>> {
        images.par_iter().map(|image| self.encode(image)).collect()
    }

    fn validate_raster(
        data: &[u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> Result<(), DdsError> {
        if width == 0 || height == 0 {
            return Err(DdsError::Encode(format!(
                "empty image: {}×{}",
                width, height
            )));
        }

        let row_bytes = (width as usize)
            .checked_mul(4)
            .ok_or_else(|| DdsError::Encode(format!("width {} too large", width)))?;
        if stride < row_bytes {
            return Err(DdsError::Encode(format!(
                "stride {} shorter than row of {} bytes",
                stride, row_bytes
            )));
        }

        let required = stride
            .checked_mul(height as usize - 1)
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or_else(|| {
                DdsError::Encode(format!("image {}×{} too large", width, height))
            })?;
        if data.len() < required {
            return Err(DdsError::Encode(format!(
                "pixel buffer holds {} bytes, {}×{} with stride {} needs {}",
                data.len(),
                width,
                height,
                stride,
                required
            )));
        }

        Ok(())
    }
}

/// Borrowed view over a validated RGBA8 raster.
struct Raster<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl Raster<'_> {
    /// Run `compress` over every 4×4 block, left to right, top to bottom.
    fn compress_blocks<F>(&self, output: &mut Vec<u8>, mut compress: F)
    where
        F: FnMut(&[[u8; 4]; 16], &mut Vec<u8>),
    {
        let blocks_wide = self.width.div_ceil(4);
        let blocks_high = self.height.div_ceil(4);

        for block_y in 0..blocks_high {
            for block_x in 0..blocks_wide {
                let block = self.extract_block(block_x, block_y);
                compress(&block, output);
            }
        }
    }

    /// Extract a 4×4 pixel block.
    ///
    /// Samples beyond the image edge are transparent black.
    fn extract_block(&self, block_x: u32, block_y: u32) -> [[u8; 4]; 16] {
        let mut block = [[0u8; 4]; 16];

        for y in 0..4 {
            for x in 0..4 {
                let pixel_x = block_x * 4 + x;
                let pixel_y = block_y * 4 + y;

                if pixel_x < self.width && pixel_y < self.height {
                    let offset = pixel_y as usize * self.stride + pixel_x as usize * 4;
                    let p = &self.data[offset..offset + 4];
                    block[(y * 4 + x) as usize] = [p[0], p[1], p[2], p[3]];
                }
            }
        }

        block
    }
}
