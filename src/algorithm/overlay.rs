//! Highlight primitives for symmetry axes

use crate::analysis::symmetry::{SymmetryAxis, SymmetryRecord};
use crate::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke};
use crate::spatial::grid::GridSpec;

const AXIS_COLOR: Color = Color::hex(0xFF_00_00);
const AXIS_WIDTH: f64 = 2.0;
const RADIAL_MARKER_RADIUS: f64 = 20.0;

/// Dashed guides for every symmetry flag set in `symmetry`
///
/// Horizontal and vertical guides pass through the centre dot; the diagonal
/// flag draws both canvas diagonals; radial symmetry draws a small circle
/// around the centre.
pub fn symmetry_axes(grid: GridSpec, symmetry: SymmetryRecord) -> Vec<Primitive> {
    let extent = grid.canvas_extent();
    let center = grid.center();
    let stroke = Stroke::dashed(AXIS_COLOR, AXIS_WIDTH);
    let line = |from: Point, to: Point| Primitive::Line { from, to, stroke };

    symmetry
        .axes()
        .into_iter()
        .flat_map(|axis| match axis {
            SymmetryAxis::Horizontal => {
                vec![line(Point::new(0.0, center.y), Point::new(extent, center.y))]
            }
            SymmetryAxis::Vertical => {
                vec![line(Point::new(center.x, 0.0), Point::new(center.x, extent))]
            }
            SymmetryAxis::Diagonal => vec![
                line(Point::new(0.0, 0.0), Point::new(extent, extent)),
                line(Point::new(extent, 0.0), Point::new(0.0, extent)),
            ],
            SymmetryAxis::Radial => vec![Primitive::Circle {
                center,
                radius: RADIAL_MARKER_RADIUS,
                fill: None,
                stroke: Some(stroke),
            }],
        })
        .collect()
}

/// Paint the symmetry guides on top of `drawing`
pub fn highlight_symmetry(drawing: &mut Drawing, grid: GridSpec, symmetry: SymmetryRecord) {
    drawing.extend(symmetry_axes(grid, symmetry));
}
