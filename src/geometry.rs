//! Derived geometry for the disc and the ring
//!
//! Recomputed only when the widget's pixel dimensions change; draws reuse the
//! cached rectangles.

use iced::{Padding, Point, Rectangle, Size};

/// Bounding squares for the filled disc and the ring/arc, both centered on
/// the padded interior's center.
///
/// The ring square is inset by half the stroke width plus one pixel so the
/// stroke is not clipped at the widget edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub circle_bounds: Rectangle,
    pub ring_bounds: Rectangle,
}

impl RingGeometry {
    pub fn compute(size: Size, padding: Padding, stroke_width: f32) -> Self {
        let usable_width = size.width - padding.x();
        let usable_height = size.height - padding.y();

        let radius = usable_width.min(usable_height) / 2.0;
        let center = Point::new(
            usable_width / 2.0 + padding.left,
            usable_height / 2.0 + padding.top,
        );

        let circle_bounds = square_around(center, radius);
        let ring_bounds = square_around(center, radius - (stroke_width / 2.0 + 1.0));

        Self {
            circle_bounds,
            ring_bounds,
        }
    }
}

fn square_around(center: Point, radius: f32) -> Rectangle {
    Rectangle {
        x: center.x - radius,
        y: center.y - radius,
        width: radius * 2.0,
        height: radius * 2.0,
    }
}
