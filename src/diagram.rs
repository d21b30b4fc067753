//! Bracelet diagram layout and rendering.
//!
//! The bracelet shows two concentric 24-hour scales. The inner ring is the
//! home (reference) zone and reads 0..23 clockwise from the top. The outer ring
//! is the friend's zone; every hour `h` on it is drawn at slot
//! `(h + offset) mod 24`, so the whole scale is rotated by the whole-hour
//! offset between the two zones.
//!
//! ## Offsets
//!
//! The offset is sampled once per render from the live clock and is
//! `secondary - primary` in hours. Only its integer part (truncated toward zero)
//! shifts the outer ring, so half-hour zones such as Asia/Kolkata are shown
//! rounded toward zero.
//!
//! ## Output
//!
//! [`build_document`] is the pure layout. [`render`] adds the clock and writes
//! the file, replacing whatever was at the destination. A failed write is the
//! only error a render can return.

use anyhow::{Context, Result};
use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use crate::cities::zone_short_name;
use crate::constants::*;
use crate::svg::{
    Baseline, Circle, Document, Element, GradientStop, Line, Paint, Point, RadialGradient, Text,
};

/// Presentation settings that do not affect the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramStyle {
    pub font_family: String,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// Which of the two scales a ring is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingKind {
    Inner,
    Outer,
}

/// Geometry and label shift of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub kind: RingKind,
    pub radius: f64,
    pub hour_offset: i32,
}

impl RingSpec {
    pub fn inner() -> Self {
        Self {
            kind: RingKind::Inner,
            radius: INNER_RADIUS,
            hour_offset: 0,
        }
    }

    pub fn outer(hour_offset: i32) -> Self {
        Self {
            kind: RingKind::Outer,
            radius: OUTER_RADIUS,
            hour_offset,
        }
    }

    fn tick_length(&self) -> f64 {
        match self.kind {
            RingKind::Inner => INNER_TICK_LENGTH,
            RingKind::Outer => OUTER_TICK_LENGTH,
        }
    }

    fn label_radius(&self) -> f64 {
        match self.kind {
            RingKind::Inner => self.radius - INNER_LABEL_INSET,
            RingKind::Outer => self.radius + OUTER_LABEL_OUTSET,
        }
    }

    /// Distance above the center at which the zone name sits.
    fn zone_label_offset(&self) -> f64 {
        match self.kind {
            RingKind::Inner => self.radius - INNER_ZONE_LABEL_INSET,
            RingKind::Outer => self.radius + OUTER_ZONE_LABEL_OUTSET,
        }
    }

    /// Slot (0 at the top, clockwise) at which `hour` is drawn.
    pub fn slot_of(&self, hour: i32) -> i32 {
        (hour + self.hour_offset).rem_euclid(HOURS_PER_DAY)
    }
}

/// Offset of `secondary` relative to `primary` at `now`, in hours.
///
/// Positive when the secondary zone is ahead. Fractional for zones whose
/// offsets differ by a non-whole number of hours.
pub fn offset_hours<Z1: TimeZone, Z2: TimeZone>(primary: &Z1, secondary: &Z2, now: DateTime<Utc>) -> f64 {
    let naive = now.naive_utc();
    let primary_secs = primary.offset_from_utc_datetime(&naive).fix().local_minus_utc();
    let secondary_secs = secondary.offset_from_utc_datetime(&naive).fix().local_minus_utc();
    f64::from(secondary_secs - primary_secs) / 3600.0
}

/// Whole-hour shift applied to the outer ring. Truncates toward zero.
pub fn ring_hour_offset(offset_hours: f64) -> i32 {
    offset_hours.trunc() as i32
}

/// Caption text below the rings.
pub fn caption_text(offset_hours: f64) -> String {
    if offset_hours == 0.0 {
        return "Same time zone".to_string();
    }
    let hours = ring_hour_offset(offset_hours).unsigned_abs();
    if hours == 1 {
        "Time difference: 1 hour".to_string()
    } else {
        format!("Time difference: {} hours", hours)
    }
}

/// Angle of an hour slot in radians; slot 0 points up, slots advance clockwise.
pub fn slot_angle(slot: i32) -> f64 {
    let degrees = 360.0 * f64::from(slot) / f64::from(HOURS_PER_DAY) - 90.0;
    degrees.to_radians()
}

fn is_emphasized(hour: i32) -> bool {
    hour % EMPHASIS_EVERY_HOURS == 0
}

fn center() -> Point {
    Point::new(CENTER_X, CENTER_Y)
}

/// Lay out the complete bracelet for two zones at instant `now`.
pub fn build_document(primary: &Tz, secondary: &Tz, now: DateTime<Utc>, style: &DiagramStyle) -> Document {
    let offset = offset_hours(primary, secondary, now);

    let mut doc = Document::new(
        CANVAS_PHYSICAL_SIZE,
        CANVAS_PHYSICAL_SIZE,
        (0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE),
    );

    draw_background(&mut doc);
    draw_ring(&mut doc, &RingSpec::inner(), primary, style);
    draw_ring(&mut doc, &RingSpec::outer(ring_hour_offset(offset)), secondary, style);
    draw_center(&mut doc);

    doc.add(Element::Text(Text {
        class: CLASS_CAPTION,
        content: caption_text(offset),
        position: Point::new(CENTER_X, CENTER_Y + CAPTION_OFFSET),
        baseline: Baseline::Auto,
        rotation: None,
        font_size: CAPTION_FONT_SIZE,
        font_family: style.font_family.clone(),
        bold: false,
        fill: ACCENT_COLOR.to_string(),
    }));

    doc
}

fn draw_background(doc: &mut Document) {
    doc.add_gradient(RadialGradient {
        id: GRADIENT_ID.to_string(),
        stops: vec![
            GradientStop {
                offset_percent: 0.0,
                color: GRADIENT_CENTER_COLOR.to_string(),
                opacity: GRADIENT_CENTER_OPACITY,
            },
            GradientStop {
                offset_percent: 100.0,
                color: GRADIENT_EDGE_COLOR.to_string(),
                opacity: GRADIENT_EDGE_OPACITY,
            },
        ],
    });

    doc.add(Element::Circle(Circle {
        class: CLASS_BACKDROP,
        center: center(),
        radius: OUTER_RADIUS + BACKDROP_PADDING,
        paint: Paint::filled(&format!("url(#{})", GRADIENT_ID)),
    }));

    for radius in [OUTER_RADIUS + DECOR_RING_GAP, INNER_RADIUS - DECOR_RING_GAP] {
        doc.add(Element::Circle(Circle {
            class: CLASS_DECOR_RING,
            center: center(),
            radius,
            paint: Paint::stroked(DECOR_RING_COLOR, DECOR_STROKE_WIDTH)
                .with_fill("none")
                .with_opacity(DECOR_RING_OPACITY),
        }));
    }
}

fn draw_ring(doc: &mut Document, ring: &RingSpec, zone: &Tz, style: &DiagramStyle) {
    let origin = center();

    for hour in 0..HOURS_PER_DAY {
        let angle = slot_angle(ring.slot_of(hour));
        let emphasized = is_emphasized(hour);

        let start = origin.polar(ring.radius, angle);
        let end = start.polar(ring.tick_length(), angle);
        let (tick_color, tick_width) = if emphasized {
            (EMPHASIS_TICK_COLOR, EMPHASIS_STROKE_WIDTH)
        } else {
            (REGULAR_TICK_COLOR, REGULAR_STROKE_WIDTH)
        };
        doc.add(Element::Line(Line {
            class: CLASS_TICK,
            start,
            end,
            paint: Paint::stroked(tick_color, tick_width),
        }));

        let label_color = if emphasized {
            EMPHASIS_LABEL_COLOR
        } else {
            REGULAR_LABEL_COLOR
        };
        doc.add(Element::Text(Text {
            class: CLASS_HOUR_LABEL,
            content: hour.to_string(),
            position: origin.polar(ring.label_radius(), angle),
                baseline: Baseline::Central,
            rotation: Some(angle.to_degrees() + 90.0),
            font_size: HOUR_LABEL_FONT_SIZE,
            font_family: style.font_family.clone(),
            bold: false,
            fill: label_color.to_string(),
        }));
    }

    doc.add(Element::Text(Text {
        class: CLASS_ZONE_LABEL,
        content: zone_short_name(zone).to_string(),
        position: Point::new(CENTER_X, CENTER_Y - ring.zone_label_offset()),
        baseline: Baseline::Auto,
        rotation: None,
        font_size: ZONE_LABEL_FONT_SIZE,
        font_family: style.font_family.clone(),
        bold: true,
        fill: ZONE_LABEL_COLOR.to_string(),
    }));

    for quarter in 0..4 {
        let angle = f64::from(quarter) * PI / 2.0;
        doc.add(Element::Circle(Circle {
            class: CLASS_RING_DOT,
            center: origin.polar(ring.radius + RING_DOT_OUTSET, angle),
            radius: RING_DOT_RADIUS,
            paint: Paint::filled(ACCENT_COLOR).with_opacity(RING_DOT_OPACITY),
        }));
    }
}

fn draw_center(doc: &mut Document) {
    doc.add(Element::Circle(Circle {
        class: CLASS_CENTER_DOT,
        center: center(),
        radius: CENTER_DOT_RADIUS,
        paint: Paint::filled(ACCENT_COLOR).with_opacity(CENTER_DOT_OPACITY),
    }));
    doc.add(Element::Circle(Circle {
        class: CLASS_CENTER_HIGHLIGHT,
        center: center(),
        radius: CENTER_HIGHLIGHT_RADIUS,
        paint: Paint::filled(HIGHLIGHT_COLOR),
    }));
}

/// Render the bracelet for two zones at the current instant with the default style.
pub fn render(primary: &Tz, secondary: &Tz, output: &Path) -> Result<()> {
    render_with_style(primary, secondary, output, &DiagramStyle::default())
}

/// Render the bracelet for two zones at the current instant.
pub fn render_with_style(primary: &Tz, secondary: &Tz, output: &Path, style: &DiagramStyle) -> Result<()> {
    render_at(primary, secondary, Utc::now(), output, style)
}

/// Render the bracelet for two zones at a given instant.
pub fn render_at(
    primary: &Tz,
    secondary: &Tz,
    now: DateTime<Utc>,
    output: &Path,
    style: &DiagramStyle,
) -> Result<()> {
    let document = build_document(primary, secondary, now, style);
    write_document(&document, output)
}

/// Write a document to `output`, replacing any existing file.
pub fn write_document(document: &Document, output: &Path) -> Result<()> {
    fs::write(output, document.to_svg_string())
        .with_context(|| format!("Failed to write diagram to {}", output.display()))
}
