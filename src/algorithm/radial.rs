//! Radial templates: star, sunburst, mandala and compass

use crate::algorithm::template::{PatternTemplate, Reveal};
use crate::math::curve::{PolarFrame, division_angle, regular_vertices};
use crate::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke};
use crate::spatial::grid::GridSpec;

const GOLD: Color = Color::hex(0xFF_D7_00);

/// Closed zig-zag polygon over `min(size * 2, 16)` points alternating between
/// an outer and an inner radius, with a marker beyond every outer point
#[derive(Debug, Clone, Copy)]
pub struct Star {
    frame: PolarFrame,
    points: usize,
    outer_radius: f64,
    inner_radius: f64,
}

impl Star {
    const MAX_POINTS: usize = 16;
    const OUTLINE: Color = Color::hex(0x4B_00_82);
    const MARKER: Color = Color::hex(0xCD_5C_5C);

    /// Template for `grid`
    pub fn new(grid: GridSpec) -> Self {
        let outer_radius = grid.radius(0.9);
        Self {
            frame: PolarFrame::new(grid.center()),
            points: (grid.size() * 2).min(Self::MAX_POINTS),
            outer_radius,
            inner_radius: outer_radius * 0.4,
        }
    }

    fn vertex(&self, index: usize) -> Point {
        let radius = if index.is_multiple_of(2) {
            self.outer_radius
        } else {
            self.inner_radius
        };
        self.frame
            .at(radius, division_angle(index, self.points * 2))
    }
}

impl PatternTemplate for Star {
    fn element_count(&self) -> usize {
        self.points * 2
    }

    fn emit(&self, reveal: Reveal, drawing: &mut Drawing) {
        let total = self.element_count();
        let count = reveal.elements.min(total);
        if count == 0 {
            return;
        }

        drawing.push(Primitive::Polyline {
            points: (0..count).map(|index| self.vertex(index)).collect(),
            closed: count == total,
            stroke: Stroke::solid(Self::OUTLINE, 2.0),
        });

        for index in (0..count).step_by(2) {
            drawing.push(Primitive::Circle {
                center: self.frame.at(
                    self.outer_radius * 1.1,
                    division_angle(index, self.points * 2),
                ),
                radius: 3.0,
                fill: Some(Self::MARKER),
                stroke: None,
            });
        }
    }
}

/// `min(size * 2, 24)` rays from the centre, closed by a golden centre disc
#[derive(Debug, Clone, Copy)]
pub struct Sunburst {
    frame: PolarFrame,
    rays: usize,
    radius: f64,
}

impl Sunburst {
    const MAX_RAYS: usize = 24;

    /// Template for `grid`
    pub fn new(grid: GridSpec) -> Self {
        Self {
            frame: PolarFrame::new(grid.center()),
            rays: (grid.size() * 2).min(Self::MAX_RAYS),
            radius: grid.radius(0.8),
        }
    }
}

impl PatternTemplate for Sunburst {
    fn element_count(&self) -> usize {
        self.rays
    }

    fn emit_element(&self, index: usize, drawing: &mut Drawing) {
        drawing.push(Primitive::Line {
            from: self.frame.origin,
            to: self.frame.at(self.radius, division_angle(index, self.rays)),
            stroke: Stroke::solid(Color::hsl(index as f64 * 15.0, 80, 50), 2.0),
        });
    }

    fn emit_finale(&self, drawing: &mut Drawing) {
        drawing.push(Primitive::Circle {
            center: self.frame.origin,
            radius: 6.0,
            fill: Some(GOLD),
            stroke: None,
        });
    }
}

/// `center_index` concentric circles followed by polygons with `6 + i` sides
/// for odd `i` from 3 up to `center_index`
#[derive(Debug, Clone, Copy)]
pub struct Mandala {
    frame: PolarFrame,
    rings: usize,
    spacing: f64,
}

impl Mandala {
    /// Template for `grid`
    pub fn new(grid: GridSpec) -> Self {
        Self {
            frame: PolarFrame::new(grid.center()),
            rings: grid.center_index(),
            spacing: grid.spacing(),
        }
    }

    fn polygon_count(&self) -> usize {
        (3..=self.rings).step_by(2).count()
    }

    fn emit_circle(&self, ring: usize, drawing: &mut Drawing) {
        drawing.push(Primitive::Circle {
            center: self.frame.origin,
            radius: ring as f64 * self.spacing * 0.8,
            fill: None,
            stroke: Some(Stroke::solid(Color::hsl(ring as f64 * 30.0, 60, 50), 1.0)),
        });
    }

    fn emit_polygon(&self, ring: usize, drawing: &mut Drawing) {
        let sides = 6 + ring;
        let vertices = regular_vertices(&self.frame, sides, ring as f64 * self.spacing * 0.6);
        let edges = vertices.iter().zip(vertices.iter().cycle().skip(1));
        for (side, (from, to)) in edges.enumerate() {
            let hue = (ring as f64).mul_add(45.0, side as f64 * 30.0);
            drawing.push(Primitive::Line {
                from: *from,
                to: *to,
                stroke: Stroke::solid(Color::hsl(hue, 70, 60), 1.5),
            });
        }
    }
}

impl PatternTemplate for Mandala {
    fn element_count(&self) -> usize {
        self.rings + self.polygon_count()
    }

    fn emit_element(&self, index: usize, drawing: &mut Drawing) {
        if index < self.rings {
            self.emit_circle(index + 1, drawing);
        } else {
            let ring = 3 + 2 * (index - self.rings);
            self.emit_polygon(ring, drawing);
        }
    }
}

/// The four cardinal rays with end markers and labels, closed by a centre rose
#[derive(Debug, Clone, Copy)]
pub struct Compass {
    frame: PolarFrame,
    radius: f64,
}

impl Compass {
    const DIRECTIONS: [(f64, &'static str, Color); 4] = [
        (0.0, "North", Color::hex(0xFF_00_00)),
        (90.0, "East", Color::hex(0x00_FF_00)),
        (180.0, "South", Color::hex(0x00_00_FF)),
        (270.0, "West", Color::hex(0xFF_FF_00)),
    ];

    /// Template for `grid`
    pub fn new(grid: GridSpec) -> Self {
        Self {
            frame: PolarFrame::new(grid.center()),
            radius: grid.radius(0.7),
        }
    }
}

impl PatternTemplate for Compass {
    fn element_count(&self) -> usize {
        Self::DIRECTIONS.len()
    }

    fn emit_element(&self, index: usize, drawing: &mut Drawing) {
        let Some(&(angle, name, color)) = Self::DIRECTIONS.get(index) else {
            return;
        };
        let tip = self.frame.at(self.radius, angle);

        drawing.push(Primitive::Line {
            from: self.frame.origin,
            to: tip,
            stroke: Stroke::solid(color, 3.0),
        });
        drawing.push(Primitive::Circle {
            center: tip,
            radius: 4.0,
            fill: Some(color),
            stroke: None,
        });
        drawing.push(Primitive::Label {
            position: tip.offset(10.0, 5.0),
            text: name.to_string(),
            color,
            font_size: 12.0,
        });
    }

    fn emit_finale(&self, drawing: &mut Drawing) {
        let black = Color::hex(0x00_00_00);
        drawing.push(Primitive::Circle {
            center: self.frame.origin,
            radius: 8.0,
            fill: Some(Color::hex(0xFF_FF_FF)),
            stroke: Some(Stroke::solid(black, 2.0)),
        });
        drawing.push(Primitive::Label {
            position: self.frame.origin.offset(-5.0, 3.0),
            text: "N".to_string(),
            color: black,
            font_size: 10.0,
        });
    }
}
