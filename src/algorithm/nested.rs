//! Concentric ring templates: nested squares and nested diamonds

use crate::algorithm::template::PatternTemplate;
use crate::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke};
use crate::spatial::grid::GridSpec;

/// `center_index` concentric squares; ring 0 collapses onto the centre dot
#[derive(Debug, Clone, Copy)]
pub struct NestedSquares {
    grid: GridSpec,
}

impl NestedSquares {
    /// Template for `grid`
    pub const fn new(grid: GridSpec) -> Self {
        Self { grid }
    }
}

impl PatternTemplate for NestedSquares {
    fn element_count(&self) -> usize {
        self.grid.center_index()
    }

    fn emit_element(&self, index: usize, drawing: &mut Drawing) {
        let ring = index as i64;
        let near = self.grid.centered_coordinate(-ring);
        let far = self.grid.centered_coordinate(ring);
        let width = 2.0 + (self.grid.center_index() - index) as f64 / 2.0;

        drawing.push(Primitive::Polyline {
            points: vec![
                Point::new(near, near),
                Point::new(far, near),
                Point::new(far, far),
                Point::new(near, far),
            ],
            closed: true,
            stroke: Stroke::solid(Color::hsl(index as f64 * 30.0, 70, 50), width),
        });
    }
}

/// `center_index` concentric diamonds through the centre row and column;
/// element `i` reaches `i + 1` cells from the centre
#[derive(Debug, Clone, Copy)]
pub struct NestedDiamonds {
    grid: GridSpec,
}

impl NestedDiamonds {
    /// Template for `grid`
    pub const fn new(grid: GridSpec) -> Self {
        Self { grid }
    }
}

impl PatternTemplate for NestedDiamonds {
    fn element_count(&self) -> usize {
        self.grid.center_index()
    }

    fn emit_element(&self, index: usize, drawing: &mut Drawing) {
        let reach = index + 1;
        let mid = self.grid.centered_coordinate(0);
        let near = self.grid.centered_coordinate(-(reach as i64));
        let far = self.grid.centered_coordinate(reach as i64);
        let width = 2.0 + (self.grid.center_index() as f64 - reach as f64) / 3.0;

        drawing.push(Primitive::Polyline {
            points: vec![
                Point::new(mid, near),
                Point::new(far, mid),
                Point::new(mid, far),
                Point::new(near, mid),
            ],
            closed: true,
            stroke: Stroke::solid(Color::hsl(reach as f64 * 45.0, 70, 50), width),
        });
    }
}
