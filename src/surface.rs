//! Paint surface seam and the four-layer draw sequence
//!
//! [`paint`] expresses the widget's rendering as explicit draw commands
//! against a [`Surface`], which keeps the sequence testable without a real
//! renderer. The production surface wraps an iced canvas frame; tests use a
//! recording fake.

use iced::{Degrees, Pixels, Point, Rectangle, Size};

use crate::geometry::RingGeometry;
use crate::style::Style;

/// Arc start angle: 12 o'clock, in a coordinate system where 0° is the
/// 3-o'clock position and angles grow clockwise.
pub const START_ANGLE: Degrees = Degrees(-90.0);

/// Centered text command issued for the percentage label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub content: String,
    /// Center of the widget's full, non-padded bounds. The surface centers
    /// the glyph run on this point both ways using its font metrics.
    pub center: Point,
    pub size: Pixels,
    pub color: iced::Color,
}

/// Receiver of the widget's draw commands.
pub trait Surface {
    fn fill_disc(&mut self, bounds: Rectangle, color: iced::Color);
    fn stroke_circle(&mut self, bounds: Rectangle, width: f32, color: iced::Color);
    fn stroke_arc(
        &mut self,
        bounds: Rectangle,
        start: Degrees,
        sweep: Degrees,
        width: f32,
        color: iced::Color,
    );
    fn fill_label(&mut self, label: Label);
}

/// Paint the widget: disc, ring track, progress arc, percentage label, in
/// that order. Layers whose color has a zero alpha byte are skipped, and a
/// zero stroke width suppresses both the track and the arc.
///
/// Mutates nothing but the surface; safe to call on every repaint tick.
pub fn paint(
    style: &Style,
    progress: i32,
    geometry: &RingGeometry,
    bounds: Size,
    surface: &mut impl Surface,
) {
    if style.circle_color.is_visible() {
        surface.fill_disc(geometry.circle_bounds, style.circle_color.to_color());
    }

    if style.background_color.is_visible() && style.stroke_width != 0.0 {
        surface.stroke_circle(
            geometry.ring_bounds,
            style.stroke_width,
            style.background_color.to_color(),
        );
    }

    // Progress is deliberately unclamped; out-of-range values sweep outside
    // 0..360 and are drawn as-is.
    let sweep = Degrees(progress as f32 / 100.0 * 360.0);
    if style.progress_color.is_visible() && style.stroke_width != 0.0 {
        surface.stroke_arc(
            geometry.ring_bounds,
            START_ANGLE,
            sweep,
            style.stroke_width,
            style.progress_color.to_color(),
        );
    }

    if style.text_color.is_visible() {
        surface.fill_label(Label {
            content: format!("{progress}%"),
            center: Point::new(bounds.width / 2.0, bounds.height / 2.0),
            size: style.text_size,
            color: style.text_color.to_color(),
        });
    }
}
