//! BC3/DXT5 block compression.
//!
//! BC3 compresses 4×4 blocks of RGBA pixels to 16 bytes:
//! - 8 bytes: Alpha channel compression
//!   - 1 byte: alpha0 (block maximum)
//!   - 1 byte: alpha1 (block minimum)
//!   - 6 bytes: 16 3-bit indices (one per pixel)
//! - 8 bytes: RGB compression (same as BC1)
//!
//! Decoders pick the alpha ramp from the endpoint order: `alpha0 > alpha1`
//! selects six interpolated values, otherwise four interpolated values plus
//! fixed 0 and 255.

use crate::dds::bc1::Bc1Encoder;

/// BC3 block encoder.
pub struct Bc3Encoder;

impl Bc3Encoder {
    /// Compress a 4×4 RGBA block to 16 bytes.
    ///
    /// # Arguments
    ///
    /// * `pixels` - 16 RGBA pixels in row-major order
    ///
    /// # Returns
    ///
    /// 16-byte compressed block (8 bytes alpha + 8 bytes RGB)
    pub fn compress_block(pixels: &[[u8; 4]; 16]) -> [u8; 16] {
        let mut output = [0u8; 16];

        let alpha_block = Self::compress_alpha(pixels);
        output[0..8].copy_from_slice(&alpha_block);

        let rgb_block = Bc1Encoder::compress_block(pixels);
        output[8..16].copy_from_slice(&rgb_block);

        output
    }

    /// Compress the alpha channel of a block to 8 bytes.
    pub fn compress_alpha(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        let mut min_alpha = 255u8;
        let mut max_alpha = 0u8;

        for pixel in pixels {
            min_alpha = min_alpha.min(pixel[3]);
            max_alpha = max_alpha.max(pixel[3]);
        }

        let (alpha0, alpha1) = (max_alpha, min_alpha);

        let palette = Self::build_alpha_palette(alpha0, alpha1);

        let indices = Self::generate_alpha_indices(pixels, &palette);

        let mut output = [0u8; 8];
        output[0] = alpha0;
        output[1] = alpha1;
        output[2..8].copy_from_slice(&indices[0..6]);

        output
    }

    /// Build the 8-value alpha palette from two endpoints.
    ///
    /// With `alpha0 > alpha1` entries 2..=7 step evenly from alpha0 to
    /// alpha1 in sevenths. Otherwise (equal endpoints) entries 2..=5 step in
    /// fifths and entries 6 and 7 are fixed at 0 and 255.
    pub fn build_alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
        let a0 = alpha0 as u32;
        let a1 = alpha1 as u32;

        let mut palette = [0u8; 8];
        palette[0] = alpha0;
        palette[1] = alpha1;

        if alpha0 > alpha1 {
            for i in 1..=6u32 {
                let num = (7 - i) * a0 + i * a1;
                palette[1 + i as usize] = ((num + 3) / 7) as u8;
            }
        } else {
            for i in 1..=4u32 {
                let num = (5 - i) * a0 + i * a1;
                palette[1 + i as usize] = ((num + 2) / 5) as u8;
            }
            palette[6] = 0;
            palette[7] = 255;
        }

        palette
    }

    /// Generate 3-bit indices for alpha values.
    ///
    /// Index `i` occupies bits `3*i..3*i+3` of a little-endian 48-bit
    /// field; the returned array's last two bytes are always zero.
    fn generate_alpha_indices(pixels: &[[u8; 4]; 16], palette: &[u8; 8]) -> [u8; 8] {
        let mut indices = 0u64;

        for (i, pixel) in pixels.iter().enumerate() {
            let alpha = pixel[3];

            let mut best_dist = u32::MAX;
            let mut best_index = 0u64;

            for (idx, &pal_alpha) in palette.iter().enumerate() {
                let dist = (alpha as i32 - pal_alpha as i32).unsigned_abs();
                if dist < best_dist {
                    best_dist = dist;
                    best_index = idx as u64;
                }
            }

            indices |= (best_index & 0x7) << (i * 3);
        }

        indices.to_le_bytes()
    }
}

#[cfg(test)]
#[allow(clippy::needless_range_loop)]
mod tests {
    use super::*;

    fn alpha_indices(alpha_block: &[u8; 8]) -> u64 {
        let mut bytes = [0u8; 8];
        bytes[0..6].copy_from_slice(&alpha_block[2..8]);
        u64::from_le_bytes(bytes)
    }

    #[test]
    fn test_compress_solid_opaque() {
        let pixels = [[128u8, 64, 192, 255]; 16];
        let compressed = Bc3Encoder::compress_block(&pixels);

        assert_eq!(compressed[0], 255);
        assert_eq!(compressed[1], 255);
    }

    #[test]
    fn test_compress_solid_transparent() {
        let pixels = [[128u8, 64, 192, 0]; 16];
        let compressed = Bc3Encoder::compress_block(&pixels);

        assert_eq!(compressed[0], 0);
        assert_eq!(compressed[1], 0);
    }

    #[test]
    fn test_compress_alpha_gradient() {
        let mut pixels = [[0u8, 0, 0, 255]; 16];
        for i in 0..16 {
            pixels[i][3] = (i * 17) as u8;
        }

        let compressed = Bc3Encoder::compress_block(&pixels);

        assert_eq!(compressed[0], 255);
        assert_eq!(compressed[1], 0);
    }

    #[test]
    fn test_compress_two_alpha_values() {
        let mut pixels = [[0u8, 0, 0, 0]; 16];
        for i in 8..16 {
            pixels[i][3] = 255;
        }

        let alpha_block = Bc3Encoder::compress_alpha(&pixels);
        assert_eq!(alpha_block[0], 255);
        assert_eq!(alpha_block[1], 0);

        let indices = alpha_indices(&alpha_block);
        for i in 0..8 {
            assert_eq!(
                (indices >> (i * 3)) & 0x7,
                1,
                "pixel {} should be alpha1",
                i
            );
        }
        for i in 8..16 {
            assert_eq!(
                (indices >> (i * 3)) & 0x7,
                0,
                "pixel {} should be alpha0",
                i
            );
        }
    }

    #[test]
    fn test_build_alpha_palette_eight_value_mode() {
        let palette = Bc3Encoder::build_alpha_palette(255, 0);

        // round((7-i)*255/7) for i = 1..6
        assert_eq!(palette, [255, 0, 219, 182, 146, 109, 73, 36]);
    }

    #[test]
    fn test_build_alpha_palette_partial_range() {
        let palette = Bc3Encoder::build_alpha_palette(200, 100);

        assert_eq!(palette[0], 200);
        assert_eq!(palette[1], 100);
        for &val in &palette {
            assert!(
                (100..=200).contains(&val),
                "Palette value {} out of range",
                val
            );
        }
        for i in 3..8 {
            assert!(palette[i - 1] > palette[i]);
        }
    }

    #[test]
    fn test_build_alpha_palette_degenerate_mode() {
        let palette = Bc3Encoder::build_alpha_palette(200, 200);

        assert_eq!(palette, [200, 200, 200, 200, 200, 200, 0, 255]);
    }

    #[test]
    fn test_compress_alpha_flat_200_uses_fixed_extremes() {
        let pixels = [[10u8, 20, 30, 200]; 16];
        let alpha_block = Bc3Encoder::compress_alpha(&pixels);

        // Equal endpoints select the mode whose ramp reaches 0 and 255
        assert_eq!(alpha_block[0], 200);
        assert_eq!(alpha_block[1], 200);
        let palette = Bc3Encoder::build_alpha_palette(alpha_block[0], alpha_block[1]);
        assert!(palette.contains(&0));
        assert!(palette.contains(&255));

        // Every pixel matches alpha0 exactly
        assert_eq!(alpha_indices(&alpha_block), 0);
    }

    #[test]
    fn test_generate_alpha_indices_nearest() {
        let mut pixels = [[0u8, 0, 0, 0]; 16];
        pixels[0][3] = 220; // nearest to 219 (index 2)
        pixels[1][3] = 40; // nearest to 36 (index 7)
        pixels[2][3] = 128; // between 109 and 146, nearer 146 (index 4)

        let palette = Bc3Encoder::build_alpha_palette(255, 0);
        let indices = u64::from_le_bytes(Bc3Encoder::generate_alpha_indices(&pixels, &palette));

        assert_eq!(indices & 0x7, 2);
        assert_eq!((indices >> 3) & 0x7, 7);
        assert_eq!((indices >> 6) & 0x7, 4);
        assert_eq!((indices >> 9) & 0x7, 1);
    }

    #[test]
    fn test_alpha_indices_use_48_bits() {
        let mut pixels = [[0u8, 0, 0, 0]; 16];
        for i in 0..16 {
            pixels[i][3] = if i % 2 == 0 { 0 } else { 36 };
        }
        let palette = Bc3Encoder::build_alpha_palette(255, 0);

        let indices = Bc3Encoder::generate_alpha_indices(&pixels, &palette);

        // 16 × 3 bits = 48 bits; the top two bytes stay clear
        assert_eq!(indices[6], 0);
        assert_eq!(indices[7], 0);
        assert_ne!(u64::from_le_bytes(indices), 0);
    }

    #[test]
    fn test_compress_rgb_matches_bc1() {
        let mut pixels = [[100u8, 150, 200, 255]; 16];
        pixels[5] = [10, 20, 30, 40];

        let bc3_compressed = Bc3Encoder::compress_block(&pixels);
        let bc1_compressed = Bc1Encoder::compress_block(&pixels);

        assert_eq!(&bc3_compressed[8..16], &bc1_compressed[..]);
    }

    #[test]
    fn test_alpha0_not_less_than_alpha1() {
        let mut pixels = [[0u8, 0, 0, 100]; 16];
        pixels[0][3] = 200;

        let alpha_block = Bc3Encoder::compress_alpha(&pixels);

        assert_eq!(alpha_block[0], 200);
        assert_eq!(alpha_block[1], 100);
    }

    #[test]
    fn test_compress_is_deterministic() {
        let mut pixels = [[0u8; 4]; 16];
        for i in 0..16 {
            pixels[i] = [(i * 15) as u8, (i * 3) as u8, 77, (255 - i * 9) as u8];
        }
        assert_eq!(
            Bc3Encoder::compress_block(&pixels),
            Bc3Encoder::compress_block(&pixels)
        );
    }
}
