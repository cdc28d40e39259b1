//! Uncompressed 32-bit RGBA payload writer.
//!
//! Rows are copied as-is in R, G, B, A byte order with pitch `width * 4`
//! and no padding. The header masks declare that byte order, so any DDS
//! reader that honours masks sees the exact source pixels.

/// Append the rows of a strided RGBA8 buffer to `output` without padding.
///
/// `data` must hold `height` rows of at least `width * 4` bytes spaced
/// `stride` bytes apart; callers validate this before writing.
pub fn write_rows(data: &[u8], width: u32, height: u32, stride: usize, output: &mut Vec<u8>) {
    let row_bytes = width as usize * 4;
    output.reserve(row_bytes * height as usize);

    for y in 0..height as usize {
        let start = y * stride;
        output.extend_from_slice(&data[start..start + row_bytes]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_tight_rows() {
        let data: Vec<u8> = (0..16).collect();
        let mut output = Vec::new();

        write_rows(&data, 2, 2, 8, &mut output);

        assert_eq!(output, data);
    }

    #[test]
    fn test_write_drops_row_padding() {
        // 1×2 image with 4 bytes of padding per row
        let data = [1, 2, 3, 4, 0xEE, 0xEE, 0xEE, 0xEE, 5, 6, 7, 8];
        let mut output = Vec::new();

        write_rows(&data, 1, 2, 8, &mut output);

        assert_eq!(output, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_write_appends() {
        let mut output = vec![9u8; 3];

        write_rows(&[1, 2, 3, 4], 1, 1, 4, &mut output);

        assert_eq!(output, vec![9, 9, 9, 1, 2, 3, 4]);
    }
}
