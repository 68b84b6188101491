//! Dot-centre detection with a three-tier fallback
//!
//! 1. Round blobs on the blurred image (Otsu mask, radius and circularity
//!    filters, greedy minimum spacing).
//! 2. Small components of a fixed binary threshold on the raw grayscale.
//! 3. Components of a Gaussian adaptive threshold on the blurred image.
//!
//! Each tier runs only when the previous one found too few dots. The result
//! is always deduplicated, and detection never fails: undecodable input or an
//! empty result yields a fixed fallback set.

use crate::io::configuration::{
    ADAPTIVE_AREA_RANGE, ADAPTIVE_BLOCK_SIZE, ADAPTIVE_OFFSET, BINARY_THRESHOLD, BLOB_MAX_RADIUS,
    BLOB_MIN_CIRCULARITY, BLOB_MIN_DISTANCE, BLOB_MIN_RADIUS, BLOB_STAGE_MIN_DOTS,
    CONTOUR_AREA_RANGE, CONTOUR_STAGE_MIN_DOTS, DEDUP_DISTANCE, FALLBACK_DOTS,
};
use crate::spatial::drawing::Point;
use crate::vision::components::{Component, connected_components};
use crate::vision::raster::{
    GrayRaster, adaptive_threshold_inverse, blur, ensure_foreground_minority, grayscale,
    otsu_threshold, threshold_inverse,
};
use image::DynamicImage;
use std::cmp::Reverse;
use tracing::{debug, warn};

/// Which tier produced the dots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionStage {
    /// Round blob search
    Blob,
    /// Fixed binary threshold
    Contour,
    /// Adaptive threshold
    Adaptive,
    /// Nothing usable was found; the fixed fallback set was returned
    Fallback,
}

/// Detected dot centres and the tier that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Deduplicated dot centres
    pub dots: Vec<Point>,
    /// Producing tier
    pub stage: DetectionStage,
}

/// Detector thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Smallest accepted blob radius
    pub blob_min_radius: f64,
    /// Largest accepted blob radius
    pub blob_max_radius: f64,
    /// Smallest accepted blob circularity
    pub blob_min_circularity: f64,
    /// Minimum spacing between accepted blob centres
    pub blob_min_distance: f64,
    /// Blob results with fewer dots fall through to the contour tier
    pub blob_min_dots: usize,
    /// Level of the fixed binary threshold
    pub binary_threshold: u8,
    /// Exclusive area bounds of the contour tier
    pub contour_area: (f64, f64),
    /// Contour results with fewer dots fall through to the adaptive tier
    pub contour_min_dots: usize,
    /// Neighbourhood size of the adaptive threshold
    pub adaptive_block_size: usize,
    /// Offset subtracted from the local mean
    pub adaptive_offset: f64,
    /// Exclusive area bounds of the adaptive tier
    pub adaptive_area: (f64, f64),
    /// Dots closer than this to an earlier dot are dropped
    pub dedup_distance: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            blob_min_radius: BLOB_MIN_RADIUS,
            blob_max_radius: BLOB_MAX_RADIUS,
            blob_min_circularity: BLOB_MIN_CIRCULARITY,
            blob_min_distance: BLOB_MIN_DISTANCE,
            blob_min_dots: BLOB_STAGE_MIN_DOTS,
            binary_threshold: BINARY_THRESHOLD,
            contour_area: CONTOUR_AREA_RANGE,
            contour_min_dots: CONTOUR_STAGE_MIN_DOTS,
            adaptive_block_size: ADAPTIVE_BLOCK_SIZE,
            adaptive_offset: ADAPTIVE_OFFSET,
            adaptive_area: ADAPTIVE_AREA_RANGE,
            dedup_distance: DEDUP_DISTANCE,
        }
    }
}

/// The fixed five-dot set returned when detection finds nothing
pub fn fallback_dots() -> Vec<Point> {
    FALLBACK_DOTS.iter().copied().map(Point::from).collect()
}

/// Keep each point unless it lies closer than `min_distance` to a point
/// already kept; earlier points win
pub fn deduplicate(points: &[Point], min_distance: f64) -> Vec<Point> {
    points.iter().fold(Vec::new(), |mut kept, &point| {
        if kept
            .iter()
            .all(|existing: &Point| existing.distance(point) >= min_distance)
        {
            kept.push(point);
        }
        kept
    })
}

fn within(area: usize, (low, high): (f64, f64)) -> bool {
    let area = area as f64;
    low < area && area < high
}

/// Three-tier dot detector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DotDetector {
    config: DetectorConfig,
}

impl DotDetector {
    /// Detector with custom thresholds
    pub const fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Round blobs on the blurred raster, largest first, greedily spaced
    pub fn blob_stage(&self, blurred: &GrayRaster) -> Vec<Point> {
        let mut mask = threshold_inverse(blurred, otsu_threshold(blurred));
        ensure_foreground_minority(&mut mask);

        let mut blobs: Vec<Component> = connected_components(&mask)
            .into_iter()
            .filter(|blob| {
                let radius = blob.equivalent_radius();
                (self.config.blob_min_radius..=self.config.blob_max_radius).contains(&radius)
                    && blob.circularity() >= self.config.blob_min_circularity
            })
            .collect();
        blobs.sort_by_key(|blob| Reverse(blob.area));

        blobs.into_iter().fold(Vec::new(), |mut accepted, blob| {
            let center = Point::new(blob.centroid.x.round(), blob.centroid.y.round());
            if accepted
                .iter()
                .all(|existing: &Point| existing.distance(center) >= self.config.blob_min_distance)
            {
                accepted.push(center);
            }
            accepted
        })
    }

    /// Centroids of mid-sized components below the fixed binary threshold
    pub fn contour_stage(&self, gray: &GrayRaster) -> Vec<Point> {
        let mask = threshold_inverse(gray, self.config.binary_threshold);
        connected_components(&mask)
            .into_iter()
            .filter(|component| within(component.area, self.config.contour_area))
            .map(|component| component.truncated_centroid())
            .collect()
    }

    /// Centroids of components of the adaptive threshold
    pub fn adaptive_stage(&self, blurred: &GrayRaster) -> Vec<Point> {
        let mask = adaptive_threshold_inverse(
            blurred,
            self.config.adaptive_block_size,
            self.config.adaptive_offset,
        );
        connected_components(&mask)
            .into_iter()
            .filter(|component| within(component.area, self.config.adaptive_area))
            .map(|component| component.truncated_centroid())
            .collect()
    }

    /// Run the tiers on a grayscale raster
    pub fn detect_gray(&self, gray: &GrayRaster) -> Detection {
        let blurred = blur(gray);

        let mut stage = DetectionStage::Blob;
        let mut dots = self.blob_stage(&blurred);
        debug!(count = dots.len(), "blob stage");

        if dots.len() < self.config.blob_min_dots {
            stage = DetectionStage::Contour;
            dots = self.contour_stage(gray);
            debug!(count = dots.len(), "contour stage");
        }
        if dots.len() < self.config.contour_min_dots {
            stage = DetectionStage::Adaptive;
            dots = self.adaptive_stage(&blurred);
            debug!(count = dots.len(), "adaptive stage");
        }

        let dots = deduplicate(&dots, self.config.dedup_distance);
        if dots.is_empty() {
            warn!("no dots detected, using fallback set");
            return Detection {
                dots: fallback_dots(),
                stage: DetectionStage::Fallback,
            };
        }
        Detection { dots, stage }
    }

    /// Run the tiers on a decoded image
    pub fn detect(&self, image: &DynamicImage) -> Detection {
        self.detect_gray(&grayscale(image))
    }

    /// Decode and detect; undecodable bytes yield the fallback set
    pub fn detect_from_bytes(&self, bytes: &[u8]) -> Detection {
        match image::load_from_memory(bytes) {
            Ok(image) => self.detect(&image),
            Err(error) => {
                warn!(%error, "image decode failed, using fallback set");
                Detection {
                    dots: fallback_dots(),
                    stage: DetectionStage::Fallback,
                }
            }
        }
    }
}
