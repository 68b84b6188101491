//! Grayscale rasters, smoothing and thresholding on `ndarray` buffers
//!
//! Rasters are indexed `[row, col]`. Masks mark foreground (ink) pixels with
//! `true`; every threshold here is "inverse", so dark marks on a light
//! background become foreground.

use image::DynamicImage;
use ndarray::{Array2, Axis};

/// 8-bit grayscale raster
pub type GrayRaster = Array2<u8>;

/// Foreground mask
pub type Mask = Array2<bool>;

const BINOMIAL_5: [f64; 5] = [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0];

/// Luma conversion with weights `0.299 R + 0.587 G + 0.114 B`
pub fn grayscale(image: &DynamicImage) -> GrayRaster {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        let [r, g, b] = rgb.get_pixel(col as u32, row as u32).0;
        let luma = 0.114f64.mul_add(
            f64::from(b),
            0.299f64.mul_add(f64::from(r), 0.587 * f64::from(g)),
        );
        luma.round().clamp(0.0, 255.0) as u8
    })
}

/// Normalized 1-D Gaussian kernel of odd length `size`
///
/// A non-positive `sigma` is derived from the size as
/// `0.3 * ((size - 1) / 2 - 1) + 0.8`.
pub fn gaussian_kernel(size: usize, sigma: f64) -> Vec<f64> {
    let size = size.max(1) | 1;
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3f64.mul_add((size as f64 - 1.0).mul_add(0.5, -1.0), 0.8)
    };
    let half = (size / 2) as f64;
    let weights: Vec<f64> = (0..size)
        .map(|index| {
            let offset = index as f64 - half;
            (-(offset * offset) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|weight| weight / total).collect()
}

// One separable pass along `axis` with edge pixels replicated
fn convolve_axis(source: &Array2<f64>, kernel: &[f64], axis: Axis) -> Array2<f64> {
    let (rows, cols) = source.dim();
    let half = (kernel.len() / 2) as isize;
    Array2::from_shape_fn((rows, cols), |(row, col)| {
        kernel
            .iter()
            .enumerate()
            .map(|(tap, weight)| {
                let shift = tap as isize - half;
                let index = if axis == Axis(0) {
                    [(row as isize + shift).clamp(0, rows as isize - 1) as usize, col]
                } else {
                    [row, (col as isize + shift).clamp(0, cols as isize - 1) as usize]
                };
                source.get(index).copied().unwrap_or(0.0) * weight
            })
            .sum()
    })
}

/// Separable smoothing with the same kernel along both axes
pub fn smooth(raster: &GrayRaster, kernel: &[f64]) -> Array2<f64> {
    let source = raster.mapv(f64::from);
    if source.is_empty() {
        return source;
    }
    let horizontal = convolve_axis(&source, kernel, Axis(1));
    convolve_axis(&horizontal, kernel, Axis(0))
}

/// 5×5 binomial blur
pub fn blur(raster: &GrayRaster) -> GrayRaster {
    smooth(raster, &BINOMIAL_5).mapv(|value| value.round().clamp(0.0, 255.0) as u8)
}

/// Otsu's threshold: the level maximizing between-class variance
pub fn otsu_threshold(raster: &GrayRaster) -> u8 {
    let mut histogram = [0u64; 256];
    for &value in raster {
        if let Some(bin) = histogram.get_mut(value as usize) {
            *bin += 1;
        }
    }

    let total = raster.len() as f64;
    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(value, &count)| value as f64 * count as f64)
        .sum();

    let mut sum_background = 0.0;
    let mut weight_background = 0.0;
    let mut best_variance = f64::MIN;
    let mut threshold = 0u8;

    for (value, &count) in histogram.iter().enumerate() {
        weight_background += count as f64;
        if weight_background == 0.0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0.0 {
            break;
        }
        sum_background += value as f64 * count as f64;

        let mean_background = sum_background / weight_background;
        let mean_foreground = (sum_total - sum_background) / weight_foreground;
        let variance =
            weight_background * weight_foreground * (mean_background - mean_foreground).powi(2);
        if variance > best_variance {
            best_variance = variance;
            threshold = value as u8;
        }
    }

    threshold
}

/// Pixels at or below `threshold` become foreground
pub fn threshold_inverse(raster: &GrayRaster, threshold: u8) -> Mask {
    raster.mapv(|value| value <= threshold)
}

/// Flip a mask whose foreground covers at least half the image
///
/// Dots are assumed to be the minority class whatever their shade.
pub fn ensure_foreground_minority(mask: &mut Mask) {
    let foreground = mask.iter().filter(|&&pixel| pixel).count();
    if foreground * 2 < mask.len() {
        return;
    }
    mask.mapv_inplace(|pixel| !pixel);
}

/// Gaussian-weighted local threshold
///
/// A pixel is foreground when it is no brighter than the weighted mean of its
/// `block_size`×`block_size` neighbourhood minus `offset`.
pub fn adaptive_threshold_inverse(raster: &GrayRaster, block_size: usize, offset: f64) -> Mask {
    let local_mean = smooth(raster, &gaussian_kernel(block_size, 0.0));
    Array2::from_shape_fn(raster.dim(), |(row, col)| {
        let value = raster.get([row, col]).copied().map_or(0.0, f64::from);
        let mean = local_mean.get([row, col]).copied().unwrap_or(0.0);
        value <= mean - offset
    })
}
