//! Progressive reveal of a pattern as an ordered, restartable frame sequence
//!
//! Frame `f` of `n` shows the pattern at progress `f / n`, so the last frame
//! stops just short of the complete drawing. Callers that need the exact
//! static drawing render it with [`crate::algorithm::generator::render`].

use crate::algorithm::generator::{element_count, render_with};
use crate::algorithm::kind::PatternKind;
use crate::algorithm::template::Reveal;
use crate::spatial::drawing::Drawing;
use crate::spatial::grid::GridSpec;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use tracing::trace;

/// One snapshot of an animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    /// Position in the sequence, starting at zero
    pub index: usize,
    /// Fraction of the pattern revealed, in `[0, 1)`
    pub progress: f64,
    /// Partial drawing
    pub drawing: Drawing,
}

/// Lazy frame iterator; a fresh [`FrameSequence::new`] with the same inputs
/// always yields the same frames
#[derive(Debug, Clone)]
pub struct FrameSequence {
    grid: GridSpec,
    kind: PatternKind,
    frame_count: NonZeroUsize,
    total_elements: usize,
    include_grid_dots: bool,
    next: usize,
}

impl FrameSequence {
    /// Sequence of `frame_count` frames for `kind` on `grid`, with grid dots
    pub fn new(grid: GridSpec, kind: PatternKind, frame_count: NonZeroUsize) -> Self {
        Self {
            grid,
            kind,
            frame_count,
            total_elements: element_count(grid, kind),
            include_grid_dots: true,
            next: 0,
        }
    }

    /// Choose whether frames include the reference dots
    #[must_use]
    pub const fn with_grid_dots(mut self, include_grid_dots: bool) -> Self {
        self.include_grid_dots = include_grid_dots;
        self
    }

    /// Number of frames in the full sequence
    pub const fn frame_count(&self) -> usize {
        self.frame_count.get()
    }

    /// Elements in the complete pattern
    pub const fn total_elements(&self) -> usize {
        self.total_elements
    }

    /// Progress of frame `index`
    pub fn progress_of(&self, index: usize) -> f64 {
        index as f64 / self.frame_count.get() as f64
    }

    /// Reveal used for frame `index`
    pub fn reveal_of(&self, index: usize) -> Reveal {
        Reveal::at_progress(self.progress_of(index), self.total_elements)
    }

    /// Render frame `index` directly, `None` past the end
    pub fn frame(&self, index: usize) -> Option<AnimationFrame> {
        if index >= self.frame_count.get() {
            return None;
        }
        let progress = self.progress_of(index);
        let reveal = self.reveal_of(index);
        trace!(index, progress, elements = reveal.elements, "rendering frame");
        Some(AnimationFrame {
            index,
            progress,
            drawing: render_with(self.grid, self.kind, reveal, self.include_grid_dots),
        })
    }
}

impl Iterator for FrameSequence {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.frame(self.next)?;
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame_count.get().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSequence {}

impl FusedIterator for FrameSequence {}

/// All frames of the animation, with grid dots
pub fn frames(grid: GridSpec, kind: PatternKind, frame_count: NonZeroUsize) -> Vec<AnimationFrame> {
    FrameSequence::new(grid, kind, frame_count).collect()
}
