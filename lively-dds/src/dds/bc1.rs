//! BC1/DXT1 block compression.
//!
//! BC1 compresses 4×4 blocks of RGB pixels to 8 bytes:
//! - 2 bytes: color0 (RGB565)
//! - 2 bytes: color1 (RGB565)
//! - 4 bytes: 16 2-bit indices (one per pixel)
//!
//! The 2-bit indices select from a 4-color palette:
//! - 00: color0
//! - 01: color1
//! - 10: (2*color0 + color1) / 3
//! - 11: (color0 + 2*color1) / 3
//!
//! Endpoints come from a principal-axis fit of the block's colors: the
//! line through the mean color along the dominant eigenvector of the color
//! covariance, clipped to the extreme projections of the 16 samples.

use crate::dds::conversion::*;

/// Power iterations used to estimate the principal axis.
const POWER_ITERATIONS: usize = 5;

type Vec3 = [f64; 3];
type Mat3 = [[f64; 3]; 3];

/// BC1 block encoder.
pub struct Bc1Encoder;

impl Bc1Encoder {
    /// Compress a 4×4 RGBA block to 8 bytes.
    ///
    /// # Arguments
    ///
    /// * `pixels` - 16 RGBA pixels in row-major order (alpha is ignored)
    ///
    /// # Returns
    ///
    /// 8-byte compressed block. The first endpoint is always numerically
    /// greater than or equal to the second, which selects the opaque
    /// 4-color decode mode.
    pub fn compress_block(pixels: &[[u8; 4]; 16]) -> [u8; 8] {
        let (c0, c1) = Self::find_endpoints(pixels);

        let indices = Self::generate_indices(pixels, c0, c1);

        let mut output = [0u8; 8];
        output[0..2].copy_from_slice(&c0.to_le_bytes());
        output[2..4].copy_from_slice(&c1.to_le_bytes());
        output[4..8].copy_from_slice(&indices.to_le_bytes());
        output
    }

    /// Find color endpoints by fitting a line through the block's colors.
    ///
    /// Returns `(c0, c1)` as RGB565 values with `c0 >= c1`.
    fn find_endpoints(pixels: &[[u8; 4]; 16]) -> (u16, u16) {
        let mean = Self::mean_color(pixels);
        let axis = Self::principal_axis(&Self::covariance(pixels, &mean));

        let mut min_proj = f64::MAX;
        let mut max_proj = f64::MIN;
        for pixel in pixels {
            let proj = dot(&to_vec3(pixel), &axis);
            min_proj = min_proj.min(proj);
            max_proj = max_proj.max(proj);
        }

        // The line is mean + t * axis; its projection onto the unit axis is
        // dot(mean, axis) + t.
        let mean_proj = dot(&mean, &axis);
        let end0 = add(&mean, &scale(&axis, max_proj - mean_proj));
        let end1 = add(&mean, &scale(&axis, min_proj - mean_proj));

        let c0 = rgbf_to_rgb565(end0);
        let c1 = rgbf_to_rgb565(end1);

        if c0 < c1 {
            (c1, c0)
        } else {
            (c0, c1)
        }
    }

    fn mean_color(pixels: &[[u8; 4]; 16]) -> Vec3 {
        let mut sum = [0.0; 3];
        for pixel in pixels {
            for ch in 0..3 {
                sum[ch] += pixel[ch] as f64;
            }
        }
        scale(&sum, 1.0 / 16.0)
    }

    /// Covariance matrix of the block's RGB samples about `mean`.
    fn covariance(pixels: &[[u8; 4]; 16], mean: &Vec3) -> Mat3 {
        let mut cov = [[0.0; 3]; 3];
        for pixel in pixels {
            let d = sub(&to_vec3(pixel), mean);
            for row in 0..3 {
                for col in row..3 {
                    cov[row][col] += d[row] * d[col];
                }
            }
        }
        for row in 1..3 {
            for col in 0..row {
                cov[row][col] = cov[col][row];
            }
        }
        cov
    }

    /// Estimate the dominant eigenvector of `cov` by power iteration.
    ///
    /// Starts from normalized (1, 1, 1). If `cov` maps that seed to zero the
    /// result is the zero vector and both endpoints collapse onto the mean.
    /// This happens for a block with no color variance, and also for any
    /// block whose variance lies entirely orthogonal to (1, 1, 1), such as
    /// an even red/green split.
    fn principal_axis(cov: &Mat3) -> Vec3 {
        let mut v = normalize(&[1.0, 1.0, 1.0]);
        for _ in 0..POWER_ITERATIONS {
            let next = [dot(&cov[0], &v), dot(&cov[1], &v), dot(&cov[2], &v)];
            v = normalize(&next);
        }
        v
    }

    /// Generate 2-bit indices for each pixel.
    ///
    /// Finds the closest color in the 4-color palette for each pixel; ties
    /// go to the lower index.
    fn generate_indices(pixels: &[[u8; 4]; 16], c0: u16, c1: u16) -> u32 {
        let palette = bc1_palette(rgb565_to_rgb888(c0), rgb565_to_rgb888(c1));

        let mut indices: u32 = 0;

        for (i, pixel) in pixels.iter().enumerate() {
            let mut best_dist = u32::MAX;
            let mut best_index = 0u32;

            for (idx, pal_color) in palette.iter().enumerate() {
                let dist = color_distance_squared(pixel, pal_color);
                if dist < best_dist {
                    best_dist = dist;
                    best_index = idx as u32;
                }
            }

            indices |= (best_index & 0x3) << (i * 2);
        }

        indices
    }
}

fn to_vec3(pixel: &[u8; 4]) -> Vec3 {
    [pixel[0] as f64, pixel[1] as f64, pixel[2] as f64]
}

fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn scale(v: &Vec3, s: f64) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

fn normalize(v: &Vec3) -> Vec3 {
    let len = dot(v, v).sqrt();
    if len == 0.0 {
        return [0.0; 3];
    }
    scale(v, 1.0 / len)
}
