//! DDS header construction and parsing.

use crate::dds::types::*;

impl DdsHeader {
    /// Create a new DDS header for the given dimensions and format.
    ///
    /// Compressed formats record the total payload size (`LINEARSIZE`),
    /// uncompressed data records the row pitch (`PITCH`). No mipmaps are
    /// declared.
    ///
    /// # Arguments
    ///
    /// * `width` - Texture width in pixels
    /// * `height` - Texture height in pixels
    /// * `format` - Encoding format
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::Encode`] if the pitch or linear size does not fit
    /// the 32-bit header field.
    pub fn new(width: u32, height: u32, format: DdsFormat) -> Result<Self, DdsError> {
        let base_flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;

        let (flags, size_field, pixel_format) = match format.fourcc() {
            Some(fourcc) => (
                base_flags | DDSD_LINEARSIZE,
                format.payload_size(width, height),
                DdsPixelFormat {
                    size: DDS_PIXEL_FORMAT_SIZE,
                    flags: DDPF_FOURCC,
                    fourcc: fourcc.tag(),
                    rgb_bit_count: 0,
                    r_bit_mask: 0,
                    g_bit_mask: 0,
                    b_bit_mask: 0,
                    a_bit_mask: 0,
                },
            ),
            None => (
                base_flags | DDSD_PITCH,
                width as usize * 4,
                DdsPixelFormat {
                    size: DDS_PIXEL_FORMAT_SIZE,
                    flags: DDPF_RGB | DDPF_ALPHAPIXELS,
                    fourcc: [0; 4],
                    rgb_bit_count: 32,
                    r_bit_mask: RGBA_RED_MASK,
                    g_bit_mask: RGBA_GREEN_MASK,
                    b_bit_mask: RGBA_BLUE_MASK,
                    a_bit_mask: RGBA_ALPHA_MASK,
                },
            ),
        };

        let pitch_or_linear_size = u32::try_from(size_field).map_err(|_| {
            DdsError::Encode(format!(
                "{}×{} {} texture exceeds the header size field",
                width, height, format
            ))
        })?;

        Ok(DdsHeader {
            magic: DDS_MAGIC,
            size: DDS_HEADER_SIZE,
            flags,
            height,
            width,
            pitch_or_linear_size,
            depth: 0,
            mipmap_count: 0,
            reserved1: [0; 11],
            pixel_format,
            caps: DDSCAPS_TEXTURE,
            caps2: 0,
            caps3: 0,
            caps4: 0,
            reserved2: 0,
        })
    }

    /// Convert header to byte array for writing to file.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(DDS_FILE_HEADER_SIZE);

        // Magic
        bytes.extend_from_slice(&self.magic);

        // Header fields
        bytes.extend_from_slice(&self.size.to_le_bytes());
        bytes.extend_from_slice(&self.flags.to_le_bytes());
        bytes.extend_from_slice(&self.height.to_le_bytes());
        bytes.extend_from_slice(&self.width.to_le_bytes());
        bytes.extend_from_slice(&self.pitch_or_linear_size.to_le_bytes());
        bytes.extend_from_slice(&self.depth.to_le_bytes());
        bytes.extend_from_slice(&self.mipmap_count.to_le_bytes());

        // Reserved1 (11 × u32)
        for &val in &self.reserved1 {
            bytes.extend_from_slice(&val.to_le_bytes());
        }

        // Pixel format (32 bytes)
        bytes.extend_from_slice(&self.pixel_format.size.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.flags.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.fourcc);
        bytes.extend_from_slice(&self.pixel_format.rgb_bit_count.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.r_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.g_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.b_bit_mask.to_le_bytes());
        bytes.extend_from_slice(&self.pixel_format.a_bit_mask.to_le_bytes());

        // Caps
        bytes.extend_from_slice(&self.caps.to_le_bytes());
        bytes.extend_from_slice(&self.caps2.to_le_bytes());
        bytes.extend_from_slice(&self.caps3.to_le_bytes());
        bytes.extend_from_slice(&self.caps4.to_le_bytes());
        bytes.extend_from_slice(&self.reserved2.to_le_bytes());

        bytes
    }

    /// Parse a header from the start of a DDS file.
    ///
    /// Fields are read at their fixed offsets; nothing beyond the magic is
    /// validated here, so headers from lenient writers still parse.
    ///
    /// # Errors
    ///
    /// Returns [`DdsError::Format`] if fewer than 128 bytes are available or
    /// the magic is not `"DDS "`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DdsError> {
        if bytes.len() < DDS_FILE_HEADER_SIZE {
            return Err(DdsError::Format(format!(
                "data too short for header: {} < {}",
                bytes.len(),
                DDS_FILE_HEADER_SIZE
            )));
        }
        if bytes[0..4] != DDS_MAGIC {
            return Err(DdsError::Format("missing magic 'DDS '".to_string()));
        }

        let mut reserved1 = [0u32; 11];
        for (i, val) in reserved1.iter_mut().enumerate() {
            *val = read_u32(bytes, 32 + i * 4);
        }

        let pf = PIXEL_FORMAT_OFFSET;
        Ok(DdsHeader {
            magic: DDS_MAGIC,
            size: read_u32(bytes, 4),
            flags: read_u32(bytes, 8),
            height: read_u32(bytes, 12),
            width: read_u32(bytes, 16),
            pitch_or_linear_size: read_u32(bytes, 20),
            depth: read_u32(bytes, 24),
            mipmap_count: read_u32(bytes, 28),
            reserved1,
            pixel_format: DdsPixelFormat {
                size: read_u32(bytes, pf),
                flags: read_u32(bytes, pf + 4),
                fourcc: [bytes[pf + 8], bytes[pf + 9], bytes[pf + 10], bytes[pf + 11]],
                rgb_bit_count: read_u32(bytes, pf + 12),
                r_bit_mask: read_u32(bytes, pf + 16),
                g_bit_mask: read_u32(bytes, pf + 20),
                b_bit_mask: read_u32(bytes, pf + 24),
                a_bit_mask: read_u32(bytes, pf + 28),
            },
            caps: read_u32(bytes, 108),
            caps2: read_u32(bytes, 112),
            caps3: read_u32(bytes, 116),
            caps4: read_u32(bytes, 120),
            reserved2: read_u32(bytes, 124),
        })
    }
}

/// Build the 128-byte header for an image of the given size and format.
///
/// # Errors
///
/// Returns [`DdsError::Encode`] if the image is too large for the header.
pub fn encode_header(width: u32, height: u32, format: DdsFormat) -> Result<Vec<u8>, DdsError> {
    Ok(DdsHeader::new(width, height, format)?.to_bytes())
}

/// Parse the 128-byte header at the start of `bytes`.
pub fn decode_header(bytes: &[u8]) -> Result<DdsHeader, DdsError> {
    DdsHeader::from_bytes(bytes)
}

/// Read a little-endian u32 at an absolute offset.
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
