//! Minimal SVG document model.
//!
//! A [`Document`] is a flat list of drawing primitives plus the gradient
//! definitions they reference. It is built once by the diagram layout and then
//! serialized; nothing mutates it afterwards.
//!
//! Only the primitives the bracelet needs are modeled: circles, lines, text,
//! and radial gradients. Every primitive carries a `class` naming its role in
//! the drawing, which makes the output easy to style and to inspect.

use std::fmt::Write as _;

use crate::utils::format_number;

/// A point in logical canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle_rad` (0 = +x, clockwise in SVG space).
    pub fn polar(&self, radius: f64, angle_rad: f64) -> Self {
        Self {
            x: self.x + radius * angle_rad.cos(),
            y: self.y + radius * angle_rad.sin(),
        }
    }
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Baseline {
    /// Default alphabetic baseline; the attribute is omitted
    Auto,
    Central,
}

/// Paint and stroke settings shared by circles and lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
}

impl Paint {
    pub fn filled(color: &str) -> Self {
        Self {
            fill: Some(color.to_string()),
            stroke: None,
            stroke_width: None,
            opacity: None,
        }
    }

    pub fn stroked(color: &str, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color.to_string()),
            stroke_width: Some(width),
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = Some(fill.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub class: &'static str,
    pub center: Point,
    pub radius: f64,
    pub paint: Paint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub class: &'static str,
    pub start: Point,
    pub end: Point,
    pub paint: Paint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub class: &'static str,
    pub content: String,
    pub position: Point,
    pub baseline: Baseline,
    /// Rotation in degrees about `position`
    pub rotation: Option<f64>,
    pub font_size: &'static str,
    pub font_family: String,
    pub bold: bool,
    pub fill: String,
}

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle(Circle),
    Line(Line),
    Text(Text),
}

impl Element {
    pub fn class(&self) -> &'static str {
        match self {
            Element::Circle(c) => c.class,
            Element::Line(l) => l.class,
            Element::Text(t) => t.class,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Offset as a percentage, 0 to 100
    pub offset_percent: f64,
    pub color: String,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

/// A complete SVG image.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Physical width, e.g. "300mm"
    pub width: String,
    pub height: String,
    pub view_box: (f64, f64, f64, f64),
    pub gradients: Vec<RadialGradient>,
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(width: &str, height: &str, view_box: (f64, f64, f64, f64)) -> Self {
        Self {
            width: width.to_string(),
            height: height.to_string(),
            view_box,
            gradients: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn add_gradient(&mut self, gradient: RadialGradient) {
        self.gradients.push(gradient);
    }

    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Number of elements tagged with `class`.
    pub fn count_class(&self, class: &str) -> usize {
        self.elements.iter().filter(|e| e.class() == class).count()
    }

    /// Texts tagged with `class`, in document order.
    pub fn texts_with_class(&self, class: &str) -> Vec<&Text> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(t) if t.class == class => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Serialize to SVG markup.
    pub fn to_svg_string(&self) -> String {
        let (min_x, min_y, vb_width, vb_height) = self.view_box;
        let mut out = String::new();

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            escape_xml(&self.width),
            escape_xml(&self.height),
            format_number(min_x),
            format_number(min_y),
            format_number(vb_width),
            format_number(vb_height),
        );

        if !self.gradients.is_empty() {
            out.push_str("<defs>\n");
            for gradient in &self.gradients {
                write_gradient(&mut out, gradient);
            }
            out.push_str("</defs>\n");
        }

        for element in &self.elements {
            match element {
                Element::Circle(circle) => write_circle(&mut out, circle),
                Element::Line(line) => write_line(&mut out, line),
                Element::Text(text) => write_text(&mut out, text),
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn write_gradient(out: &mut String, gradient: &RadialGradient) {
    let _ = writeln!(out, r#"<radialGradient id="{}">"#, escape_xml(&gradient.id));
    for stop in &gradient.stops {
        let _ = writeln!(
            out,
            r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
            format_number(stop.offset_percent),
            escape_xml(&stop.color),
            format_number(stop.opacity),
        );
    }
    out.push_str("</radialGradient>\n");
}

fn paint_attributes(paint: &Paint) -> String {
    let mut attrs = String::new();
    if let Some(fill) = &paint.fill {
        let _ = write!(attrs, r#" fill="{}""#, escape_xml(fill));
    }
    if let Some(stroke) = &paint.stroke {
        let _ = write!(attrs, r#" stroke="{}""#, escape_xml(stroke));
    }
    if let Some(width) = paint.stroke_width {
        let _ = write!(attrs, r#" stroke-width="{}""#, format_number(width));
    }
    if let Some(opacity) = paint.opacity {
        let _ = write!(attrs, r#" opacity="{}""#, format_number(opacity));
    }
    attrs
}

fn write_circle(out: &mut String, circle: &Circle) {
    let _ = writeln!(
        out,
        r#"<circle class="{}" cx="{}" cy="{}" r="{}"{}/>"#,
        circle.class,
        format_number(circle.center.x),
        format_number(circle.center.y),
        format_number(circle.radius),
        paint_attributes(&circle.paint),
    );
}

fn write_line(out: &mut String, line: &Line) {
    let _ = writeln!(
        out,
        r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
        line.class,
        format_number(line.start.x),
        format_number(line.start.y),
        format_number(line.end.x),
        format_number(line.end.y),
        paint_attributes(&line.paint),
    );
}

fn write_text(out: &mut String, text: &Text) {
    let x = format_number(text.position.x);
    let y = format_number(text.position.y);

    let _ = write!(
        out,
        r#"<text class="{}" x="{}" y="{}" text-anchor="middle""#,
        text.class, x, y
    );
    if text.baseline == Baseline::Central {
        out.push_str(r#" dominant-baseline="central""#);
    }
    if let Some(degrees) = text.rotation {
        let _ = write!(out, r#" transform="rotate({} {} {})""#, format_number(degrees), x, y);
    }
    let _ = write!(
        out,
        r#" font-size="{}" font-family="{}""#,
        text.font_size,
        escape_xml(&text.font_family)
    );
    if text.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    let _ = writeln!(out, r#" fill="{}">{}</text>"#, escape_xml(&text.fill), escape_xml(&text.content));
}

/// Escape the five XML special characters.
pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
