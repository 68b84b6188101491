//! Rasterization of drawings and PNG export
//!
//! Strokes are stamped as discs along each segment, curves are flattened
//! into short segments, and text labels are left out of raster output.

use crate::io::error::{KolamError, Result, file_system_error};
use crate::math::curve::quadratic_point;
use crate::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;
use tracing::info;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CURVE_SEGMENTS: usize = 20;
const DASH_LENGTH: f64 = 5.0;
const STAMP_STEP: f64 = 0.5;

fn rgba(color: Color) -> Rgba<u8> {
    let [r, g, b] = color.to_rgb();
    Rgba([r, g, b, 255])
}

struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, BACKGROUND),
        }
    }

    fn disc(&mut self, center: Point, radius: f64, color: Rgba<u8>) {
        let radius = radius.max(0.5);
        let reach = radius.ceil() as i64;
        let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
        for y in (cy - reach)..=(cy + reach) {
            for x in (cx - reach)..=(cx + reach) {
                if x < 0 || y < 0 {
                    continue;
                }
                let inside = (x as f64 - center.x).hypot(y as f64 - center.y) <= radius;
                if inside && (x as u32) < self.image.width() && (y as u32) < self.image.height() {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    fn segment(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let length = from.distance(to);
        let steps = (length / STAMP_STEP).ceil().max(1.0) as usize;
        let color = rgba(stroke.color);
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let along = length * t;
            if stroke.dashed && (along / DASH_LENGTH).floor() as i64 % 2 == 1 {
                continue;
            }
            let point = Point::new(
                (to.x - from.x).mul_add(t, from.x),
                (to.y - from.y).mul_add(t, from.y),
            );
            self.disc(point, stroke.width / 2.0, color);
        }
    }

    fn path(&mut self, points: &[Point], stroke: &Stroke) {
        for pair in points.windows(2) {
            if let [from, to] = pair {
                self.segment(*from, *to, stroke);
            }
        }
    }

    fn primitive(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Polyline {
                points,
                closed,
                stroke,
            } => {
                self.path(points, stroke);
                let closing = closed.then(|| points.last().zip(points.first())).flatten();
                if let Some((last, first)) = closing {
                    self.segment(*last, *first, stroke);
                }
            }
            Primitive::QuadraticCurve {
                start,
                control,
                end,
                stroke,
            } => {
                let points: Vec<Point> = (0..=CURVE_SEGMENTS)
                    .map(|step| {
                        quadratic_point(*start, *control, *end, step as f64 / CURVE_SEGMENTS as f64)
                    })
                    .collect();
                self.path(&points, stroke);
            }
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                if let Some(fill) = fill {
                    self.disc(*center, *radius, rgba(*fill));
                }
                if let Some(stroke) = stroke {
                    let segments = ((radius * std::f64::consts::TAU) / 2.0).ceil().max(8.0) as usize;
                    let outline: Vec<Point> = (0..=segments)
                        .map(|step| {
                            let angle = std::f64::consts::TAU * step as f64 / segments as f64;
                            Point::new(
                                radius.mul_add(angle.cos(), center.x),
                                radius.mul_add(angle.sin(), center.y),
                            )
                        })
                        .collect();
                    self.path(&outline, stroke);
                }
            }
            Primitive::Line { from, to, stroke } => self.segment(*from, *to, stroke),
            Primitive::Label { .. } => {}
        }
    }
}

/// Rasterize a drawing onto a white canvas of its own size
///
/// # Errors
///
/// Returns an error if the canvas has no area
pub fn rasterize(drawing: &Drawing) -> Result<RgbaImage> {
    let width = drawing.width().ceil();
    let height = drawing.height().ceil();
    if width < 1.0 || height < 1.0 {
        return Err(KolamError::EmptyDrawing {
            operation: "rasterize",
        });
    }
    let mut canvas = Canvas::new(width as u32, height as u32);
    for primitive in drawing {
        canvas.primitive(primitive);
    }
    Ok(canvas.image)
}

/// Rasterize a drawing and save it as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The drawing has no area
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved
pub fn export_png(drawing: &Drawing, path: &Path) -> Result<()> {
    let image = rasterize(drawing)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|source| file_system_error(parent, "create directory", source))?;
    }
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| KolamError::ImageExport {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "png written");
    Ok(())
}
