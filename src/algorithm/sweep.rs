//! Continuous-path templates built on an angular sweep: spiral and rose

use crate::algorithm::template::{PatternTemplate, Reveal};
use crate::math::curve::{AngularSweep, PolarFrame, SweepSample};
use crate::spatial::drawing::{Color, Drawing, Primitive, Stroke};
use crate::spatial::grid::GridSpec;

const SPIRAL_COLOR: Color = Color::hex(0x8B_45_13);
const ROSE_PATH_COLOR: Color = Color::hex(0xB0_30_60);
const ROSE_PETAL_INTERVAL_DEGREES: f64 = 20.0;
const ROSE_PETAL_SCALE: f64 = 0.3;
const ROSE_PETAL_SPREAD_DEGREES: f64 = 45.0;

fn sweep_path(frame: &PolarFrame, samples: &[SweepSample], stroke: Stroke) -> Primitive {
    Primitive::Polyline {
        points: samples
            .iter()
            .map(|sample| frame.at(sample.radius, sample.degrees))
            .collect(),
        closed: false,
        stroke,
    }
}

/// Two turns sampled every 5°, radius growing to 80 % of the half-grid
#[derive(Debug, Clone, Copy)]
pub struct Spiral {
    frame: PolarFrame,
    sweep: AngularSweep,
}

impl Spiral {
    /// Template for `grid`
    pub fn new(grid: GridSpec) -> Self {
        Self {
            frame: PolarFrame::new(grid.center()),
            sweep: AngularSweep {
                total_degrees: 720,
                step_degrees: 5,
                max_radius: grid.radius(0.8),
            },
        }
    }
}

impl PatternTemplate for Spiral {
    fn element_count(&self) -> usize {
        self.sweep.sample_count()
    }

    fn emit(&self, reveal: Reveal, drawing: &mut Drawing) {
        let samples: Vec<SweepSample> = self.sweep.samples(reveal.elements).collect();
        if samples.is_empty() {
            return;
        }
        drawing.push(sweep_path(
            &self.frame,
            &samples,
            Stroke::solid(SPIRAL_COLOR, 3.0),
        ));
    }
}

/// Four turns sampled every 2°, radius growing to 70 % of the half-grid,
/// with a small two-lobed petal stroke every 20°
#[derive(Debug, Clone, Copy)]
pub struct Rose {
    frame: PolarFrame,
    sweep: AngularSweep,
}

impl Rose {
    /// Template for `grid`
    pub fn new(grid: GridSpec) -> Self {
        Self {
            frame: PolarFrame::new(grid.center()),
            sweep: AngularSweep {
                total_degrees: 1440,
                step_degrees: 2,
                max_radius: grid.radius(0.7),
            },
        }
    }

    fn emit_petal(&self, sample: SweepSample, drawing: &mut Drawing) {
        let anchor = self.frame.at(sample.radius, sample.degrees);
        let lobe = PolarFrame::new(anchor);
        let petal_radius = sample.radius * ROSE_PETAL_SCALE;
        let stroke = Stroke::solid(Color::hsl(sample.degrees * 0.5, 80, 60), 1.5);

        for spread in [ROSE_PETAL_SPREAD_DEGREES, -ROSE_PETAL_SPREAD_DEGREES] {
            drawing.push(Primitive::QuadraticCurve {
                start: anchor,
                control: lobe.at(petal_radius, sample.degrees + spread),
                end: anchor,
                stroke,
            });
        }
    }
}

impl PatternTemplate for Rose {
    fn element_count(&self) -> usize {
        self.sweep.sample_count()
    }

    fn emit(&self, reveal: Reveal, drawing: &mut Drawing) {
        let samples: Vec<SweepSample> = self.sweep.samples(reveal.elements).collect();
        if samples.is_empty() {
            return;
        }
        drawing.push(sweep_path(
            &self.frame,
            &samples,
            Stroke::solid(ROSE_PATH_COLOR, 1.0),
        ));
        for sample in samples
            .iter()
            .filter(|sample| sample.degrees % ROSE_PETAL_INTERVAL_DEGREES == 0.0)
        {
            self.emit_petal(*sample, drawing);
        }
    }
}
