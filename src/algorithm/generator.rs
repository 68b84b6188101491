//! Static and progress-aware rendering of pattern templates
//!
//! Both renderers go through the same [`PatternTemplate`], so a partial
//! drawing is always a prefix of the elements of the full one.

use crate::algorithm::floral::{Flower, Lotus};
use crate::algorithm::kind::PatternKind;
use crate::algorithm::nested::{NestedDiamonds, NestedSquares};
use crate::algorithm::radial::{Compass, Mandala, Star, Sunburst};
use crate::algorithm::sweep::{Rose, Spiral};
use crate::algorithm::template::{PatternTemplate, Reveal};
use crate::spatial::drawing::{Color, Drawing, Primitive};
use crate::spatial::grid::{GridSpec, Normalized};
use tracing::debug;

const GRID_DOT_COLOR: Color = Color::hex(0x33_33_33);

/// Template implementing `kind` on `grid`
pub fn template(grid: GridSpec, kind: PatternKind) -> Box<dyn PatternTemplate> {
    match kind {
        PatternKind::Basic => Box::new(NestedSquares::new(grid)),
        PatternKind::Diamond => Box::new(NestedDiamonds::new(grid)),
        PatternKind::Spiral => Box::new(Spiral::new(grid)),
        PatternKind::Flower => Box::new(Flower::new(grid)),
        PatternKind::Lotus => Box::new(Lotus::new(grid)),
        PatternKind::Rose => Box::new(Rose::new(grid)),
        PatternKind::Star => Box::new(Star::new(grid)),
        PatternKind::Sunburst => Box::new(Sunburst::new(grid)),
        PatternKind::Mandala => Box::new(Mandala::new(grid)),
        PatternKind::Compass => Box::new(Compass::new(grid)),
    }
}

/// Number of revealable elements (rings, petals, samples, vertices or rays)
pub fn element_count(grid: GridSpec, kind: PatternKind) -> usize {
    template(grid, kind).element_count()
}

/// Reference dots of `grid` as filled circles
pub fn grid_dots(grid: GridSpec) -> Vec<Primitive> {
    grid.dots()
        .into_iter()
        .map(|center| Primitive::Circle {
            center,
            radius: grid.config().dot_radius,
            fill: Some(GRID_DOT_COLOR),
            stroke: None,
        })
        .collect()
}

/// Render the revealed part of `kind`, with the grid dots painted first when
/// `include_grid_dots` is set
pub fn render_with(
    grid: GridSpec,
    kind: PatternKind,
    reveal: Reveal,
    include_grid_dots: bool,
) -> Drawing {
    let extent = grid.canvas_extent();
    let mut drawing = Drawing::new(extent, extent);
    if include_grid_dots {
        drawing.extend(grid_dots(grid));
    }
    template(grid, kind).emit(reveal, &mut drawing);
    drawing
}

/// Complete drawing of `kind` on `grid`
pub fn render(grid: GridSpec, kind: PatternKind, include_grid_dots: bool) -> Drawing {
    let reveal = Reveal::complete(element_count(grid, kind));
    render_with(grid, kind, reveal, include_grid_dots)
}

/// Partial drawing of `kind` at `progress` in `[0, 1)`
pub fn render_at_progress(
    grid: GridSpec,
    kind: PatternKind,
    progress: f64,
    include_grid_dots: bool,
) -> Drawing {
    let reveal = Reveal::at_progress(progress, element_count(grid, kind));
    render_with(grid, kind, reveal, include_grid_dots)
}

/// Generation inputs normalized from raw request text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRequest {
    /// Normalized grid
    pub grid: Normalized<GridSpec>,
    /// Normalized pattern kind
    pub kind: Normalized<PatternKind>,
    /// Whether the reference dots are drawn
    pub include_grid_dots: bool,
}

impl GenerationRequest {
    /// Normalize a raw size and pattern name; never fails
    pub fn from_raw(size: &str, pattern: &str, include_grid_dots: bool) -> Self {
        let request = Self {
            grid: GridSpec::parse(size),
            kind: PatternKind::normalize(pattern),
            include_grid_dots,
        };
        if request.was_corrected() {
            debug!(
                size,
                pattern,
                grid = request.grid.value.size(),
                kind = %request.kind.value,
                "generation input corrected"
            );
        }
        request
    }

    /// Whether any input was clamped, defaulted or replaced
    pub const fn was_corrected(&self) -> bool {
        self.grid.was_corrected || self.kind.was_corrected
    }

    /// Complete drawing for the request
    pub fn render(&self) -> Drawing {
        render(self.grid.value, self.kind.value, self.include_grid_dots)
    }
}
