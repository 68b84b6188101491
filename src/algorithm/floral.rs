//! Petal templates: flower and lotus

use crate::algorithm::template::PatternTemplate;
use crate::math::curve::{PolarFrame, division_angle};
use crate::spatial::drawing::{Color, Drawing, Point, Primitive, Stroke};
use crate::spatial::grid::GridSpec;

const MAX_FLOWER_PETALS: usize = 8;
const LOTUS_PETALS: usize = 8;
const LOTUS_LAYERS: usize = 3;
const LOTUS_CENTER_COLOR: Color = Color::hex(0xFF_D7_00);
const LOTUS_CENTER_RADIUS: f64 = 8.0;

/// `min(size - 2, 8)` petals, each a pair of quadratic curves sharing one
/// control point beyond the petal tips
#[derive(Debug, Clone, Copy)]
pub struct Flower {
    frame: PolarFrame,
    petals: usize,
    radius: f64,
}

impl Flower {
    /// Template for `grid`
    pub fn new(grid: GridSpec) -> Self {
        Self {
            frame: PolarFrame::new(grid.center()),
            petals: grid.size().saturating_sub(2).min(MAX_FLOWER_PETALS),
            radius: grid.radius(0.8),
        }
    }
}

impl PatternTemplate for Flower {
    fn element_count(&self) -> usize {
        self.petals
    }

    fn emit_element(&self, index: usize, drawing: &mut Drawing) {
        let first = division_angle(index, self.petals);
        let second = division_angle(index + 1, self.petals);
        let control = self.frame.at(self.radius * 1.2, f64::midpoint(first, second));
        let stroke = Stroke::solid(Color::hsl(index as f64 * 45.0, 70, 50), 2.0);

        for tip_angle in [first, second] {
            drawing.push(Primitive::QuadraticCurve {
                start: self.frame.origin,
                control,
                end: self.frame.at(self.radius * 0.8, tip_angle),
                stroke,
            });
        }
    }
}

/// Three layers of eight closed petals, outermost layer last, finished with a
/// golden centre disc
#[derive(Debug, Clone, Copy)]
pub struct Lotus {
    frame: PolarFrame,
    half_extent: f64,
}

impl Lotus {
    /// Template for `grid`
    pub fn new(grid: GridSpec) -> Self {
        Self {
            frame: PolarFrame::new(grid.center()),
            half_extent: grid.radius(1.0),
        }
    }

    fn layer_radius(&self, layer: usize) -> f64 {
        self.half_extent * (layer as f64).mul_add(0.2, 0.6)
    }
}

impl PatternTemplate for Lotus {
    fn element_count(&self) -> usize {
        LOTUS_PETALS * LOTUS_LAYERS
    }

    fn emit_element(&self, index: usize, drawing: &mut Drawing) {
        let layer = index / LOTUS_PETALS;
        let petal = index % LOTUS_PETALS;
        let radius = self.layer_radius(layer);
        let angle = division_angle(petal, LOTUS_PETALS);
        let control = self.frame.at(radius, angle);
        let tip: Point = self.frame.at(radius * 0.7, angle + 22.5);
        let hue = (petal as f64).mul_add(45.0, layer as f64 * 30.0);
        let lightness = 60 - 10 * layer as u8;
        let stroke = Stroke::solid(Color::hsl(hue, 70, lightness), 3.0 - layer as f64);

        drawing.push(Primitive::QuadraticCurve {
            start: self.frame.origin,
            control,
            end: tip,
            stroke,
        });
        drawing.push(Primitive::QuadraticCurve {
            start: tip,
            control,
            end: self.frame.origin,
            stroke,
        });
    }

    fn emit_finale(&self, drawing: &mut Drawing) {
        drawing.push(Primitive::Circle {
            center: self.frame.origin,
            radius: LOTUS_CENTER_RADIUS,
            fill: Some(LOTUS_CENTER_COLOR),
            stroke: None,
        });
    }
}
