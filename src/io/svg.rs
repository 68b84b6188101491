//! Self-contained SVG documents from drawings

use crate::io::error::{Result, file_system_error};
use crate::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke};
use std::fmt::Write;
use std::path::Path;
use tracing::info;

const DASH_PATTERN: &str = "5,5";
const DASH_OPACITY: f64 = 0.7;
const FONT_FAMILY: &str = "Arial";

fn escape(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&apos;".to_string(),
            other => other.to_string(),
        })
        .collect()
}

fn stroke_attributes(stroke: &Stroke) -> String {
    let mut attributes = format!(
        r#"stroke="{}" stroke-width="{}""#,
        stroke.color.css(),
        stroke.width
    );
    if stroke.dashed {
        let _ = write!(
            attributes,
            r#" stroke-dasharray="{DASH_PATTERN}" opacity="{DASH_OPACITY}""#
        );
    }
    attributes
}

fn fill_attribute(fill: Option<&Color>) -> String {
    fill.map_or_else(|| "none".to_string(), Color::css)
}

fn point_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG element for one primitive
pub fn element(primitive: &Primitive) -> String {
    match primitive {
        Primitive::Polyline {
            points,
            closed,
            stroke,
        } => {
            let tag = if *closed { "polygon" } else { "polyline" };
            format!(
                r#"<{tag} points="{}" fill="none" {}/>"#,
                point_list(points),
                stroke_attributes(stroke)
            )
        }
        Primitive::QuadraticCurve {
            start,
            control,
            end,
            stroke,
        } => format!(
            r#"<path d="M {} {} Q {} {} {} {}" fill="none" {}/>"#,
            start.x,
            start.y,
            control.x,
            control.y,
            end.x,
            end.y,
            stroke_attributes(stroke)
        ),
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let outline = stroke
                .as_ref()
                .map(|stroke| format!(" {}", stroke_attributes(stroke)))
                .unwrap_or_default();
            format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{outline}/>"#,
                center.x,
                center.y,
                radius,
                fill_attribute(fill.as_ref())
            )
        }
        Primitive::Line { from, to, stroke } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            stroke_attributes(stroke)
        ),
        Primitive::Label {
            position,
            text,
            color,
            font_size,
        } => format!(
            r#"<text x="{}" y="{}" fill="{}" font-size="{}" font-family="{FONT_FAMILY}">{}</text>"#,
            position.x,
            position.y,
            color.css(),
            font_size,
            escape(text)
        ),
    }
}

/// Complete SVG document with a white background, one element per primitive
/// in paint order
pub fn to_svg(drawing: &Drawing) -> String {
    let width = drawing.width();
    let height = drawing.height();
    let mut document = format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    document.push('\n');
    document.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    document.push('\n');
    for primitive in drawing {
        document.push_str(&element(primitive));
        document.push('\n');
    }
    document.push_str("</svg>\n");
    document
}

/// Write a drawing as an SVG file, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written
pub fn write_svg(drawing: &Drawing, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|source| file_system_error(parent, "create directory", source))?;
    }
    std::fs::write(path, to_svg(drawing))
        .map_err(|source| file_system_error(path, "write svg", source))?;
    info!(path = %path.display(), primitives = drawing.len(), "svg written");
    Ok(())
}
