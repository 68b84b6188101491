//! Vector drawing value types: points, colours, strokes and primitives
//!
//! A [`Drawing`] is an append-only, ordered list of primitives. List order is
//! paint order, so later primitives cover earlier ones.

use serde::Serialize;

/// A position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point shifted by the given offsets
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Corners `(min, max)` of the axis-aligned box around `points`
pub fn bounding_box(points: &[Point]) -> Option<(Point, Point)> {
    let first = points.first()?;
    Some(points.iter().fold((*first, *first), |(min, max), point| {
        (
            Point::new(min.x.min(point.x), min.y.min(point.y)),
            Point::new(max.x.max(point.x), max.y.max(point.y)),
        )
    }))
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Paint colour, either a wrapped HSL hue or a fixed RGB value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Hue in degrees `[0, 360)`, saturation and lightness in percent
    Hsl {
        /// Hue in degrees, always wrapped into `[0, 360)`
        hue: f64,
        /// Saturation percentage
        saturation: u8,
        /// Lightness percentage
        lightness: u8,
    },
    /// Plain RGB triple
    Rgb([u8; 3]),
}

impl Color {
    /// HSL colour with the hue wrapped modulo 360
    pub fn hsl(hue: f64, saturation: u8, lightness: u8) -> Self {
        Self::Hsl {
            hue: hue.rem_euclid(360.0),
            saturation,
            lightness,
        }
    }

    /// RGB colour from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        Self::Rgb([
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ])
    }

    /// Hue in degrees for HSL colours
    pub const fn hue(&self) -> Option<f64> {
        match self {
            Self::Hsl { hue, .. } => Some(*hue),
            Self::Rgb(_) => None,
        }
    }

    /// CSS/SVG representation
    pub fn css(&self) -> String {
        match self {
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => format!("hsl({hue}, {saturation}%, {lightness}%)"),
            Self::Rgb([r, g, b]) => format!("#{r:02X}{g:02X}{b:02X}"),
        }
    }

    /// Convert to an RGB triple for rasterization
    pub fn to_rgb(&self) -> [u8; 3] {
        match *self {
            Self::Rgb(rgb) => rgb,
            Self::Hsl {
                hue,
                saturation,
                lightness,
            } => {
                let h = hue / 360.0;
                let s = f64::from(saturation) / 100.0;
                let l = f64::from(lightness) / 100.0;
                if s <= 0.0 {
                    let grey = (l * 255.0) as u8;
                    return [grey, grey, grey];
                }
                let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
                let p = 2.0f64.mul_add(l, -q);
                [
                    (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0) as u8,
                    (hue_to_channel(p, q, h) * 255.0) as u8,
                    (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0) as u8,
                ]
            }
        }
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Outline style of a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke colour
    pub color: Color,
    /// Stroke width in canvas units
    pub width: f64,
    /// Dashed strokes are used for annotation overlays
    pub dashed: bool,
}

impl Stroke {
    /// Continuous stroke
    pub const fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
        }
    }

    /// Dashed stroke
    pub const fn dashed(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: true,
        }
    }
}

/// A single stroked or filled drawing element
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Connected straight segments, optionally closed back to the first point
    Polyline {
        /// Vertices in drawing order
        points: Vec<Point>,
        /// Whether the last vertex joins the first
        closed: bool,
        /// Outline style
        stroke: Stroke,
    },
    /// Quadratic Bézier segment
    QuadraticCurve {
        /// Curve start
        start: Point,
        /// Control point (may lie outside the drawn shape)
        control: Point,
        /// Curve end
        end: Point,
        /// Outline style
        stroke: Stroke,
    },
    /// Circle with optional fill and outline
    Circle {
        /// Centre point
        center: Point,
        /// Radius in canvas units
        radius: f64,
        /// Interior colour
        fill: Option<Color>,
        /// Outline style
        stroke: Option<Stroke>,
    },
    /// Straight segment
    Line {
        /// First endpoint
        from: Point,
        /// Second endpoint
        to: Point,
        /// Outline style
        stroke: Stroke,
    },
    /// Text anchored at its baseline start
    Label {
        /// Baseline start position
        position: Point,
        /// Displayed text
        text: String,
        /// Text colour
        color: Color,
        /// Font size in canvas units
        font_size: f64,
    },
}

impl Primitive {
    /// Every coordinate that positions this primitive, control points included
    pub fn anchor_points(&self) -> Vec<Point> {
        match self {
            Self::Polyline { points, .. } => points.clone(),
            Self::QuadraticCurve {
                start, control, end, ..
            } => vec![*start, *control, *end],
            Self::Circle { center, .. } => vec![*center],
            Self::Line { from, to, .. } => vec![*from, *to],
            Self::Label { position, .. } => vec![*position],
        }
    }

    /// Outline of the primitive, if it has one
    pub const fn stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Polyline { stroke, .. }
            | Self::QuadraticCurve { stroke, .. }
            | Self::Line { stroke, .. } => Some(stroke),
            Self::Circle { stroke, .. } => stroke.as_ref(),
            Self::Label { .. } => None,
        }
    }
}

/// Ordered, append-only list of primitives on a fixed canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    width: f64,
    height: f64,
    primitives: Vec<Primitive>,
}

impl Drawing {
    /// Empty drawing on a canvas of the given size
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    /// Canvas width
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Append a primitive on top of everything drawn so far
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Primitives in paint order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of primitives
    pub const fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether nothing has been drawn
    pub const fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Iterate primitives in paint order
    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }
}

impl Extend<Primitive> for Drawing {
    fn extend<I: IntoIterator<Item = Primitive>>(&mut self, iter: I) {
        self.primitives.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
