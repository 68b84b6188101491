//! The closed set of pattern kinds and their input normalization

use crate::spatial::grid::Normalized;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One of the ten supported pattern kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Nested squares
    #[default]
    Basic,
    /// Nested diamonds
    Diamond,
    /// Two-turn Archimedean spiral
    Spiral,
    /// Petals drawn as paired quadratic curves
    Flower,
    /// Three layers of closed petals
    Lotus,
    /// Four-turn spiral with petal strokes
    Rose,
    /// Alternating outer/inner star polygon
    Star,
    /// Radial rays
    Sunburst,
    /// Concentric circles and polygons
    Mandala,
    /// Four labelled cardinal rays
    Compass,
}

/// Grouping of pattern kinds by construction style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PatternFamily {
    /// Rings and continuous paths laid out on the grid
    Nested,
    /// Petal arrangements
    Floral,
    /// Shapes radiating from the centre
    Radial,
}

impl PatternFamily {
    /// Display heading for the family
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Nested => "Basic Patterns",
            Self::Floral => "Flower Patterns",
            Self::Radial => "Star Patterns",
        }
    }
}

impl PatternKind {
    /// Every kind in canonical order
    pub const ALL: [Self; 10] = [
        Self::Basic,
        Self::Diamond,
        Self::Spiral,
        Self::Flower,
        Self::Lotus,
        Self::Rose,
        Self::Star,
        Self::Sunburst,
        Self::Mandala,
        Self::Compass,
    ];

    /// Lowercase identifier
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Diamond => "diamond",
            Self::Spiral => "spiral",
            Self::Flower => "flower",
            Self::Lotus => "lotus",
            Self::Rose => "rose",
            Self::Star => "star",
            Self::Sunburst => "sunburst",
            Self::Mandala => "mandala",
            Self::Compass => "compass",
        }
    }

    /// Exact identifier lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Resolve raw input; anything unknown becomes [`PatternKind::Basic`]
    pub fn normalize(raw: &str) -> Normalized<Self> {
        Self::from_name(raw).map_or_else(
            || {
                debug!(raw, "unknown pattern kind, using basic");
                Normalized::corrected(Self::Basic)
            },
            Normalized::accepted,
        )
    }

    /// Construction family
    pub const fn family(self) -> PatternFamily {
        match self {
            Self::Basic | Self::Diamond | Self::Spiral => PatternFamily::Nested,
            Self::Flower | Self::Lotus | Self::Rose => PatternFamily::Floral,
            Self::Star | Self::Sunburst | Self::Mandala | Self::Compass => PatternFamily::Radial,
        }
    }

    /// Short human description
    pub const fn description(self) -> &'static str {
        match self {
            Self::Basic => "Nested squares with geometric symmetry",
            Self::Diamond => "Diamond shapes with diagonal connections",
            Self::Spiral => "Spiral patterns with continuous curves",
            Self::Flower => "Flower patterns with petal arrangements",
            Self::Lotus => "Layered lotus patterns with multiple petals",
            Self::Rose => "Spiral rose patterns with intricate curves",
            Self::Star => "Multi-pointed star patterns",
            Self::Sunburst => "Radiating lines from center",
            Self::Mandala => "Concentric circles with geometric shapes",
            Self::Compass => "Compass patterns with cardinal directions",
        }
    }

    /// Kinds grouped under their family headings, in canonical order
    pub fn categories() -> Vec<(&'static str, Vec<Self>)> {
        [
            PatternFamily::Nested,
            PatternFamily::Floral,
            PatternFamily::Radial,
        ]
        .into_iter()
        .map(|family| {
            let kinds = Self::ALL
                .into_iter()
                .filter(|kind| kind.family() == family)
                .collect();
            (family.heading(), kinds)
        })
        .collect()
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s).value)
    }
}
