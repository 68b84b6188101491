//! 4-connected foreground components of a mask

use crate::spatial::drawing::Point;
use crate::vision::raster::Mask;
use bitvec::prelude::*;
use std::collections::VecDeque;
use std::f64::consts::PI;

/// Summary of one connected blob
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// Pixel count
    pub area: usize,
    /// Mean pixel position (`x` = column, `y` = row)
    pub centroid: Point,
    /// Largest distance from the centroid to a member pixel
    pub max_radius: f64,
}

impl Component {
    /// Radius of the disc with the same area
    pub fn equivalent_radius(&self) -> f64 {
        (self.area as f64 / PI).sqrt()
    }

    /// Area relative to the disc through the farthest pixel; 1 for a disc
    pub fn circularity(&self) -> f64 {
        let enclosing = PI * self.max_radius.max(0.5).powi(2);
        self.area as f64 / enclosing
    }

    /// Centroid with both coordinates truncated towards zero
    pub fn truncated_centroid(&self) -> Point {
        Point::new(self.centroid.x.trunc(), self.centroid.y.trunc())
    }
}

/// Breadth-first labelling of every foreground component, in raster order of
/// each component's first pixel
pub fn connected_components(mask: &Mask) -> Vec<Component> {
    let (rows, cols) = mask.dim();
    let mut visited = bitvec![0; rows * cols];
    let mut components = Vec::new();
    let is_foreground = |row: usize, col: usize| mask.get([row, col]).copied().unwrap_or(false);

    for start_row in 0..rows {
        for start_col in 0..cols {
            let start = start_row * cols + start_col;
            if !is_foreground(start_row, start_col) || visited.get(start).as_deref() == Some(&true)
            {
                continue;
            }

            visited.set(start, true);
            let mut queue = VecDeque::from([(start_row, start_col)]);
            let mut pixels = Vec::new();

            while let Some((row, col)) = queue.pop_front() {
                pixels.push((row, col));
                let neighbours = [
                    row.checked_sub(1).map(|r| (r, col)),
                    (row + 1 < rows).then_some((row + 1, col)),
                    col.checked_sub(1).map(|c| (row, c)),
                    (col + 1 < cols).then_some((row, col + 1)),
                ];
                for (next_row, next_col) in neighbours.into_iter().flatten() {
                    let index = next_row * cols + next_col;
                    if is_foreground(next_row, next_col)
                        && visited.get(index).as_deref() == Some(&false)
                    {
                        visited.set(index, true);
                        queue.push_back((next_row, next_col));
                    }
                }
            }

            components.push(summarize(&pixels));
        }
    }

    components
}

fn summarize(pixels: &[(usize, usize)]) -> Component {
    let area = pixels.len();
    let count = area.max(1) as f64;
    let (sum_x, sum_y) = pixels
        .iter()
        .fold((0.0, 0.0), |(x, y), &(row, col)| (x + col as f64, y + row as f64));
    let centroid = Point::new(sum_x / count, sum_y / count);
    let max_radius = pixels
        .iter()
        .map(|&(row, col)| centroid.distance(Point::new(col as f64, row as f64)))
        .fold(0.0, f64::max);
    Component {
        area,
        centroid,
        max_radius,
    }
}
