//! Minimal SVG object model: circles, polylines and text with stroke and
//! fill attributes, rendered as an SVG 1.1 document.
//!
//! # Output
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8" ?>
//! <svg xmlns="http://www.w3.org/2000/svg" version="1.1">
//!   <polyline points="50,50 250,90" fill="none" stroke="green" stroke-width="14" />
//!   <circle cx="50" cy="50" r="5" fill="white" />
//! </svg>
//! ```
//!
//! One element per line, indented by two spaces.  Numbers are printed with
//! six significant digits; text content is XML-escaped.

use std::fmt;

use tc_core::Significant;

// ── Point ─────────────────────────────────────────────────────────────────────

/// Canvas coordinates in pixels.  Also used for label offsets (`dx`, `dy`).
///
/// With the `serde` feature a point also reads from a two-element array
/// `[x, y]`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ── Color ─────────────────────────────────────────────────────────────────────

/// A paint value.
///
/// ```text
/// None               → none
/// Named("red")       → red
/// Rgb(255, 160, 0)   → rgb(255,160,0)
/// Rgba(1, 2, 3, 0.5) → rgba(1,2,3,0.5)
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Color {
    #[default]
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{})", Significant(*a)),
        }
    }
}

// ── Stroke and fill ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Arcs => "arcs",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::MiterClip => "miter-clip",
            LineJoin::Round => "round",
        })
    }
}

/// Optional paint attributes shared by every element.  Unset attributes
/// are omitted from the output.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Stroke {
    pub fill:         Option<Color>,
    pub stroke:       Option<Color>,
    pub stroke_width: Option<f64>,
    pub line_cap:     Option<LineCap>,
    pub line_join:    Option<LineJoin>,
}

impl fmt::Display for Stroke {
    /// Writes ` name="value"` pairs, each with a leading space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(f, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(f, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{}\"", Significant(width))?;
        }
        if let Some(cap) = self.line_cap {
            write!(f, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(f, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

/// Chained setters for the paint attributes of an element.
pub trait Styled: Sized {
    fn stroke_mut(&mut self) -> &mut Stroke;

    fn fill(mut self, color: impl Into<Color>) -> Self {
        self.stroke_mut().fill = Some(color.into());
        self
    }

    fn stroke(mut self, color: impl Into<Color>) -> Self {
        self.stroke_mut().stroke = Some(color.into());
        self
    }

    fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_mut().stroke_width = Some(width);
        self
    }

    fn line_cap(mut self, cap: LineCap) -> Self {
        self.stroke_mut().line_cap = Some(cap);
        self
    }

    fn line_join(mut self, join: LineJoin) -> Self {
        self.stroke_mut().line_join = Some(join);
        self
    }
}

// ── Elements ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub paint:  Stroke,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius, paint: Stroke::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub paint:  Stroke,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, paint: Stroke::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Text {
    pub position:    Point,
    pub offset:      Point,
    pub font_size:   u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data:        String,
    pub paint:       Stroke,
}

impl Text {
    pub fn new(data: impl Into<String>, position: Point) -> Self {
        Self { data: data.into(), position, ..Self::default() }
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }
}

impl Styled for Circle {
    fn stroke_mut(&mut self) -> &mut Stroke {
        &mut self.paint
    }
}

impl Styled for Polyline {
    fn stroke_mut(&mut self) -> &mut Stroke {
        &mut self.paint
    }
}

impl Styled for Text {
    fn stroke_mut(&mut self) -> &mut Stroke {
        &mut self.paint
    }
}

/// Any drawable element.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Element {
    fn from(c: Circle) -> Self {
        Element::Circle(c)
    }
}

impl From<Polyline> for Element {
    fn from(p: Polyline) -> Self {
        Element::Polyline(p)
    }
}

impl From<Text> for Element {
    fn from(t: Text) -> Self {
        Element::Text(t)
    }
}

impl fmt::Display for Element {
    /// One self-contained tag, no indentation or newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Circle(c) => write!(
                f,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{} />",
                Significant(c.center.x),
                Significant(c.center.y),
                Significant(c.radius),
                c.paint
            ),
            Element::Polyline(p) => {
                f.write_str("<polyline points=\"")?;
                for (i, pt) in p.points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{},{}", Significant(pt.x), Significant(pt.y))?;
                }
                write!(f, "\"{} />", p.paint)
            }
            Element::Text(t) => {
                write!(
                    f,
                    "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
                    Significant(t.position.x),
                    Significant(t.position.y),
                    Significant(t.offset.x),
                    Significant(t.offset.y),
                    t.font_size
                )?;
                if let Some(family) = &t.font_family {
                    write!(f, " font-family=\"{family}\"")?;
                }
                if let Some(weight) = &t.font_weight {
                    write!(f, " font-weight=\"{weight}\"")?;
                }
                write!(f, "{}>{}</text>", t.paint, Escaped(&t.data))
            }
        }
    }
}

// ── Document ──────────────────────────────────────────────────────────────────

/// An ordered list of elements; later elements draw on top.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SvgDocument {
    elements: Vec<Element>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(f, "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">")?;
        for element in &self.elements {
            writeln!(f, "  {element}")?;
        }
        writeln!(f, "</svg>")
    }
}

/// XML-escapes `<`, `>`, `"`, `'` and `&`.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                '&' => f.write_str("&amp;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
