//! Color conversion utilities for BC compression.

/// Convert RGB888 (8-bit per channel) to RGB565 (16-bit packed).
///
/// RGB565 format:
/// - Bits 15-11: Red (5 bits)
/// - Bits 10-5: Green (6 bits)
/// - Bits 4-0: Blue (5 bits)
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16; // 8-bit → 5-bit
    let g6 = (g >> 2) as u16; // 8-bit → 6-bit
    let b5 = (b >> 3) as u16; // 8-bit → 5-bit
    (r5 << 11) | (g6 << 5) | b5
}

/// Convert a floating point RGB point to RGB565.
///
/// Each channel is clamped to [0, 255] and rounded before truncation to
/// 5/6/5 bits, so points on a fitted line that leave the color cube still
/// quantize to the nearest representable edge.
pub fn rgbf_to_rgb565(color: [f64; 3]) -> u16 {
    let quantize = |v: f64| v.clamp(0.0, 255.0).round() as u8;
    rgb888_to_rgb565(quantize(color[0]), quantize(color[1]), quantize(color[2]))
}

/// Convert RGB565 (16-bit packed) to RGB888 (8-bit per channel).
///
/// Replicates upper bits into the low bits to fill the 8-bit range.
pub fn rgb565_to_rgb888(color: u16) -> [u8; 3] {
    let r5 = (color >> 11) & 0x1F;
    let g6 = (color >> 5) & 0x3F;
    let b5 = color & 0x1F;

    [
        ((r5 << 3) | (r5 >> 2)) as u8,
        ((g6 << 2) | (g6 >> 4)) as u8,
        ((b5 << 3) | (b5 >> 2)) as u8,
    ]
}

/// Squared Euclidean distance between a pixel's RGB and a palette color.
pub fn color_distance_squared(a: &[u8; 4], b: &[u8; 3]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Build the 4-color BC1 palette from two expanded endpoints.
///
/// Entries 2 and 3 sit at 1/3 and 2/3 of the way from `c0` to `c1`,
/// rounded to nearest.
pub fn bc1_palette(c0: [u8; 3], c1: [u8; 3]) -> [[u8; 3]; 4] {
    let mut palette = [c0, c1, [0; 3], [0; 3]];
    for ch in 0..3 {
        let a = c0[ch] as u16;
        let b = c1[ch] as u16;
        palette[2][ch] = ((2 * a + b + 1) / 3) as u8;
        palette[3][ch] = ((a + 2 * b + 1) / 3) as u8;
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_black() {
        let rgb565 = rgb888_to_rgb565(0, 0, 0);
        assert_eq!(rgb565, 0);
        assert_eq!(rgb565_to_rgb888(rgb565), [0, 0, 0]);
    }

    #[test]
    fn test_rgb565_white() {
        let rgb565 = rgb888_to_rgb565(255, 255, 255);
        assert_eq!(rgb565, 0xFFFF);
        assert_eq!(rgb565_to_rgb888(rgb565), [255, 255, 255]);
    }

    #[test]
    fn test_rgb565_primaries() {
        assert_eq!(rgb888_to_rgb565(255, 0, 0), 0xF800);
        assert_eq!(rgb888_to_rgb565(0, 255, 0), 0x07E0);
        assert_eq!(rgb888_to_rgb565(0, 0, 255), 0x001F);
        assert_eq!(rgb565_to_rgb888(0xF800), [255, 0, 0]);
        assert_eq!(rgb565_to_rgb888(0x07E0), [0, 255, 0]);
        assert_eq!(rgb565_to_rgb888(0x001F), [0, 0, 255]);
    }

    #[test]
    fn test_rgb565_precision_loss() {
        let original = [123u8, 234, 56];
        let converted = rgb565_to_rgb888(rgb888_to_rgb565(original[0], original[1], original[2]));

        assert!((original[0] as i16 - converted[0] as i16).abs() <= 8);
        assert!((original[1] as i16 - converted[1] as i16).abs() <= 4);
        assert!((original[2] as i16 - converted[2] as i16).abs() <= 8);
    }

    #[test]
    fn test_rgbf_clamps_and_rounds() {
        assert_eq!(rgbf_to_rgb565([300.0, -20.0, 255.4]), 0xF81F);
        assert_eq!(rgbf_to_rgb565([-0.4, -0.4, -0.4]), 0);
        // 7.6 rounds to 8, which survives the 5-bit truncation
        assert_eq!(rgbf_to_rgb565([7.6, 0.0, 0.0]), 1 << 11);
    }

    #[test]
    fn test_color_distance_identical() {
        assert_eq!(
            color_distance_squared(&[128, 64, 192, 255], &[128, 64, 192]),
            0
        );
    }

    #[test]
    fn test_color_distance_is_unweighted() {
        let black = [0, 0, 0, 0];
        assert_eq!(color_distance_squared(&black, &[10, 0, 0]), 100);
        assert_eq!(color_distance_squared(&black, &[0, 10, 0]), 100);
        assert_eq!(color_distance_squared(&black, &[0, 0, 10]), 100);
        assert_eq!(color_distance_squared(&black, &[255, 255, 255]), 195_075);
    }

    #[test]
    fn test_bc1_palette_rounding() {
        let palette = bc1_palette([255, 255, 255], [0, 0, 0]);
        assert_eq!(palette[0], [255, 255, 255]);
        assert_eq!(palette[1], [0, 0, 0]);
        assert_eq!(palette[2], [170, 170, 170]);
        assert_eq!(palette[3], [85, 85, 85]);

        // (2*10 + 0 + 1) / 3 = 7, (10 + 0 + 1) / 3 = 3
        let palette = bc1_palette([10, 0, 1], [0, 0, 0]);
        assert_eq!(palette[2], [7, 0, 1]);
        assert_eq!(palette[3], [3, 0, 0]);
    }
}
