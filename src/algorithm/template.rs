//! Data-driven pattern description shared by the static and progressive renderers
//!
//! Every pattern kind is a template with an element count (rings, petals,
//! samples, vertices or rays) and a rule for drawing the first `n` of them.
//! A [`Reveal`] tells the template how many elements to draw and whether
//! closing decorations belong in the picture yet.

use crate::io::configuration::FINALE_PROGRESS;
use crate::spatial::drawing::Drawing;

/// How much of a template to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// Number of leading elements to draw
    pub elements: usize,
    /// Whether closing decorations are drawn
    pub finale: bool,
}

impl Reveal {
    /// Everything, decorations included
    pub const fn complete(total: usize) -> Self {
        Self {
            elements: total,
            finale: true,
        }
    }

    /// Partial reveal at `progress` in `[0, 1)`
    ///
    /// The element count is `floor(progress * total)`. Decorations appear
    /// once progress reaches [`FINALE_PROGRESS`].
    pub fn at_progress(progress: f64, total: usize) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let elements = ((progress * total as f64).floor() as usize).min(total);
        Self {
            elements,
            finale: progress >= FINALE_PROGRESS,
        }
    }
}

/// Element-count formula plus per-element drawing rule for one pattern kind
pub trait PatternTemplate {
    /// Number of elements in the complete pattern
    fn element_count(&self) -> usize;

    /// Draw element `index` (only used by the default [`PatternTemplate::emit`])
    fn emit_element(&self, _index: usize, _drawing: &mut Drawing) {}

    /// Draw closing decorations
    fn emit_finale(&self, _drawing: &mut Drawing) {}

    /// Draw the revealed part of the pattern
    ///
    /// Templates whose elements share one continuous path override this.
    fn emit(&self, reveal: Reveal, drawing: &mut Drawing) {
        let count = reveal.elements.min(self.element_count());
        for index in 0..count {
            self.emit_element(index, drawing);
        }
        if reveal.finale {
            self.emit_finale(drawing);
        }
    }
}
