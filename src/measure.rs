//! Measurement: per-axis constraints, density conversion, square sizing
//!
//! The widget is always square in content. Each axis resolves independently
//! against its constraint, the larger content side wins, and padding is added
//! back per axis.

use iced::{Padding, Size};

/// Default minimum side length in device-independent units, used when an axis
/// is not exactly constrained.
pub const DEFAULT_MIN_SIZE_DIP: f32 = 60.0;

/// Device-independent-unit conversion factor supplied by the host
/// environment (1.0 = one dip is one device pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(pub f32);

impl Density {
    pub const IDENTITY: Self = Self(1.0);

    /// Convert a dip length to device pixels.
    pub fn dip(self, dip: f32) -> f32 {
        dip * self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Measurement constraint for one axis, as supplied by the layout host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The axis must be exactly this many device pixels.
    Exactly(f32),
    /// The axis may be anything up to this many device pixels.
    AtMost(f32),
    /// The axis is unconstrained.
    Unbounded,
}

/// Resolve one axis: an exact constraint wins outright; otherwise the larger
/// of the default minimum and the host's suggested minimum, capped by an
/// at-most bound.
fn resolve_axis(constraint: Constraint, default_min: f32, suggested_min: f32) -> f32 {
    match constraint {
        Constraint::Exactly(size) => size,
        Constraint::AtMost(cap) => default_min.max(suggested_min).min(cap),
        Constraint::Unbounded => default_min.max(suggested_min),
    }
}

/// Resolve the widget's measured size.
///
/// Padding is subtracted from each resolved axis, the larger remaining
/// content side is used for both axes, and padding is added back per axis,
/// so the content is square even under mismatched exact constraints.
pub fn measure(
    width: Constraint,
    height: Constraint,
    suggested_min: Size,
    padding: Padding,
    density: Density,
) -> Size {
    let default_min = density.dip(DEFAULT_MIN_SIZE_DIP).round();

    let resolved_width = resolve_axis(width, default_min, suggested_min.width);
    let resolved_height = resolve_axis(height, default_min, suggested_min.height);

    let content_width = resolved_width - padding.x();
    let content_height = resolved_height - padding.y();
    let side = content_width.max(content_height);

    Size::new(side + padding.x(), side + padding.y())
}
