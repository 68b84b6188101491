//! Parametric curve helpers shared by every pattern template
//!
//! All pattern geometry is expressed as points around a centre: a radius and an
//! angle in degrees. Angles are converted to radians only here.

use crate::spatial::drawing::Point;

/// Polar coordinate frame anchored at a canvas point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarFrame {
    /// Origin of the frame
    pub origin: Point,
}

impl PolarFrame {
    /// Frame anchored at `origin`
    pub const fn new(origin: Point) -> Self {
        Self { origin }
    }

    /// Canvas point at `radius` along the direction `degrees`
    pub fn at(&self, radius: f64, degrees: f64) -> Point {
        let radians = degrees.to_radians();
        Point::new(
            radius.mul_add(radians.cos(), self.origin.x),
            radius.mul_add(radians.sin(), self.origin.y),
        )
    }

    /// Canvas point at `radius` along a direction given in radians
    pub fn at_radians(&self, radius: f64, radians: f64) -> Point {
        Point::new(
            radius.mul_add(radians.cos(), self.origin.x),
            radius.mul_add(radians.sin(), self.origin.y),
        )
    }
}

/// One sample of an [`AngularSweep`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    /// Angle in degrees from the sweep start
    pub degrees: f64,
    /// Radius at this angle
    pub radius: f64,
}

/// Archimedean sweep: the radius grows linearly from zero to `max_radius`
/// while the angle runs over `[0, total_degrees)` in fixed steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularSweep {
    /// Total angle covered, in degrees
    pub total_degrees: u32,
    /// Angle between consecutive samples, in degrees
    pub step_degrees: u32,
    /// Radius reached at `total_degrees`
    pub max_radius: f64,
}

impl AngularSweep {
    /// Number of samples, `total_degrees / step_degrees`
    pub const fn sample_count(&self) -> usize {
        if self.step_degrees == 0 {
            return 0;
        }
        (self.total_degrees / self.step_degrees) as usize
    }

    /// Sample at `index`, `None` past the end
    pub fn sample(&self, index: usize) -> Option<SweepSample> {
        if index >= self.sample_count() {
            return None;
        }
        let degrees = f64::from(self.step_degrees) * index as f64;
        Some(SweepSample {
            degrees,
            radius: degrees / f64::from(self.total_degrees) * self.max_radius,
        })
    }

    /// The first `count` samples in order
    pub fn samples(&self, count: usize) -> impl Iterator<Item = SweepSample> + '_ {
        (0..count.min(self.sample_count())).filter_map(|index| self.sample(index))
    }
}

/// Angle in degrees of division `index` when a full turn is split into `divisions`
pub fn division_angle(index: usize, divisions: usize) -> f64 {
    if divisions == 0 {
        return 0.0;
    }
    index as f64 * 360.0 / divisions as f64
}

/// Vertices of a regular polygon starting at angle zero
pub fn regular_vertices(frame: &PolarFrame, sides: usize, radius: f64) -> Vec<Point> {
    (0..sides)
        .map(|index| frame.at(radius, division_angle(index, sides)))
        .collect()
}

/// Point on a quadratic Bézier curve at parameter `t` in `[0, 1]`
pub fn quadratic_point(start: Point, control: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u;
    let b = 2.0 * u * t;
    let c = t * t;
    Point::new(
        c.mul_add(end.x, a.mul_add(start.x, b * control.x)),
        c.mul_add(end.y, a.mul_add(start.y, b * control.y)),
    )
}
