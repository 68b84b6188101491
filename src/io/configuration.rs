//! Geometry constants, analysis tolerances, detector thresholds and runtime defaults

// Grid geometry
/// Distance between neighbouring grid dots
pub const DOT_SPACING: f64 = 40.0;
/// Margin between the canvas edge and the outermost dots
pub const PADDING: f64 = 20.0;
/// Radius of the reference dots drawn when the grid is shown
pub const GRID_DOT_RADIUS: f64 = 3.0;
/// Smallest accepted grid size
pub const MIN_GRID_SIZE: usize = 3;
/// Largest accepted grid size
pub const MAX_GRID_SIZE: usize = 15;
/// Grid size used when the requested size cannot be parsed
pub const DEFAULT_GRID_SIZE: usize = 7;

// Animation
/// Frame count used when none is requested
pub const DEFAULT_FRAME_COUNT: usize = 30;
/// Progress at which closing decorations (centre discs, compass rose) appear
pub const FINALE_PROGRESS: f64 = 0.8;

// Symmetry and repetition analysis
/// Nearest-neighbour distance accepted as a reflected counterpart
pub const SYMMETRY_TOLERANCE: f64 = 0.1;
/// Absolute tolerance on consecutive angular gaps for radial symmetry (radians)
pub const RADIAL_ANGLE_TOLERANCE: f64 = 0.1;
/// Reflection tolerance for dots recovered from raster images (pixels)
pub const IMAGE_SYMMETRY_TOLERANCE: f64 = 20.0;
/// Absolute tolerance on angular gaps for dots recovered from raster images
///
/// Wide enough that any image point set large enough to check counts as radial.
pub const IMAGE_RADIAL_ANGLE_TOLERANCE: f64 = 20.0;
/// Below this many points every symmetry flag is false
pub const MIN_SYMMETRY_POINTS: usize = 4;
/// Below this many points no repetition is reported
pub const MIN_REPETITION_POINTS: usize = 9;
/// Below this many points the motif search is skipped
pub const MIN_MOTIF_POINTS: usize = 6;
/// Relative tolerance for equal side lengths in triangle and square motifs
pub const MOTIF_RELATIVE_TOLERANCE: f64 = 0.1;
/// Looped traversal holds when centroid-distance deviation stays below this share of the mean
pub const LOOP_DEVIATION_RATIO: f64 = 0.3;

// Dot detection
/// Smallest blob radius accepted by the circular detector
pub const BLOB_MIN_RADIUS: f64 = 3.0;
/// Largest blob radius accepted by the circular detector
pub const BLOB_MAX_RADIUS: f64 = 15.0;
/// Minimum distance between two circular blob centres
pub const BLOB_MIN_DISTANCE: f64 = 20.0;
/// Minimum filled share of the enclosing circle for a blob to count as circular
pub const BLOB_MIN_CIRCULARITY: f64 = 0.6;
/// Fewer circular blobs than this triggers the contour stage
pub const BLOB_STAGE_MIN_DOTS: usize = 4;
/// Fewer contour dots than this triggers the adaptive stage
pub const CONTOUR_STAGE_MIN_DOTS: usize = 3;
/// Fixed grey level separating ink from paper in the contour stage
pub const BINARY_THRESHOLD: u8 = 127;
/// Exclusive area bounds for contour-stage dots
pub const CONTOUR_AREA_RANGE: (f64, f64) = (10.0, 200.0);
/// Neighbourhood size for the adaptive threshold (odd)
pub const ADAPTIVE_BLOCK_SIZE: usize = 11;
/// Constant subtracted from the weighted neighbourhood mean
pub const ADAPTIVE_OFFSET: f64 = 2.0;
/// Exclusive area bounds for adaptive-stage dots
pub const ADAPTIVE_AREA_RANGE: (f64, f64) = (5.0, 1000.0);
/// Dots closer than this are merged, first seen wins
pub const DEDUP_DISTANCE: f64 = 15.0;
/// Returned when no stage yields a dot
pub const FALLBACK_DOTS: [(f64, f64); 5] = [
    (100.0, 100.0),
    (200.0, 100.0),
    (150.0, 200.0),
    (100.0, 200.0),
    (200.0, 200.0),
];

// Graph inference
/// Dots at most this far apart are joined by an edge
pub const EDGE_DISTANCE_THRESHOLD: f64 = 50.0;
/// Maximum number of suggested patterns
pub const MAX_SUGGESTIONS: usize = 5;
/// Margin around the dot bounding box in reconstruction drawings
pub const RECONSTRUCTION_MARGIN: f64 = 20.0;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 100;
/// The last frame is held this many times longer
pub const GIF_FINAL_FRAME_HOLD: u32 = 10;
/// Suffix added to generated file names
pub const OUTPUT_SUFFIX: &str = "_kolam";
