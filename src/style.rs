//! Visual configuration: ARGB colors, resolved style, declarative attributes
//!
//! Colors are carried as packed 32-bit ARGB values rather than `iced::Color`
//! because the alpha byte doubles as a layer switch: a color whose top byte
//! is zero causes its layer to be skipped entirely during painting.

use iced::{Color, Pixels};

use crate::measure::Density;

/// Packed 32-bit ARGB color. The top byte is the alpha mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    /// Opacity byte (0x00 = fully transparent).
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Whether the layer painted with this color should be drawn at all.
    pub const fn is_visible(self) -> bool {
        self.0 & 0xff00_0000 != 0
    }

    pub fn to_color(self) -> Color {
        Color::from_rgba8(
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
            self.alpha() as f32 / 255.0,
        )
    }
}

impl From<u32> for Argb {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

/// Ring track color applied when the attribute is unset.
pub const DEFAULT_BACKGROUND_COLOR: Argb = Argb(0xffe8_e5e5);
/// Arc and label color applied when the attribute is unset.
pub const DEFAULT_PROGRESS_COLOR: Argb = Argb(0xffff_6f48);
/// Stroke thickness in device-independent units.
pub const DEFAULT_STROKE_WIDTH_DIP: f32 = 6.0;
/// Label glyph size in device-independent units.
pub const DEFAULT_TEXT_SIZE_DIP: f32 = 36.0;

/// Resolved visual configuration of a [`CircleProgress`](crate::CircleProgress).
///
/// All lengths are device pixels. A `stroke_width` of zero suppresses both
/// the ring track and the progress arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Fill color of the inner disc.
    pub circle_color: Argb,
    /// Color of the full ring track behind the arc.
    pub background_color: Argb,
    /// Color of the progress arc.
    pub progress_color: Argb,
    /// Color of the centered percentage label.
    pub text_color: Argb,
    /// Stroke thickness for the track and the arc, in device pixels.
    pub stroke_width: f32,
    /// Label glyph size.
    pub text_size: Pixels,
}

impl Default for Style {
    fn default() -> Self {
        Attributes::default().resolve(Density::IDENTITY).1
    }
}

/// Declarative configuration source, e.g. loaded from a host-side attribute
/// set. Any subset may be specified; unset options take documented defaults
/// at resolution time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attributes {
    pub progress: Option<i32>,
    pub circle_color: Option<Argb>,
    pub background_color: Option<Argb>,
    pub progress_color: Option<Argb>,
    pub text_color: Option<Argb>,
    /// Stroke thickness in device pixels. The default is dip-valued and goes
    /// through the density service instead.
    pub stroke_width: Option<f32>,
    /// Label size in device pixels, same convention as `stroke_width`.
    pub text_size: Option<f32>,
}

impl Attributes {
    /// Apply defaults and produce the initial progress value plus a resolved
    /// [`Style`]. Dimension defaults are converted from dip through `density`.
    pub fn resolve(&self, density: Density) -> (i32, Style) {
        let style = Style {
            circle_color: self.circle_color.unwrap_or(Argb::TRANSPARENT),
            background_color: self.background_color.unwrap_or(DEFAULT_BACKGROUND_COLOR),
            progress_color: self.progress_color.unwrap_or(DEFAULT_PROGRESS_COLOR),
            text_color: self.text_color.unwrap_or(DEFAULT_PROGRESS_COLOR),
            stroke_width: self
                .stroke_width
                .unwrap_or_else(|| density.dip(DEFAULT_STROKE_WIDTH_DIP)),
            text_size: Pixels(
                self.text_size
                    .unwrap_or_else(|| density.dip(DEFAULT_TEXT_SIZE_DIP)),
            ),
        };

        (self.progress.unwrap_or(0), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_extraction() {
        assert_eq!(Argb(0xff00_0000).alpha(), 0xff);
        assert_eq!(Argb(0x80ab_cdef).alpha(), 0x80);
        assert_eq!(Argb(0x00ff_ffff).alpha(), 0x00);
    }

    #[test]
    fn test_visibility_follows_alpha_byte() {
        assert!(Argb(0x0100_0000).is_visible());
        assert!(Argb(0xffff_6f48).is_visible());
        assert!(!Argb(0x00ff_ffff).is_visible());
        assert!(!Argb::TRANSPARENT.is_visible());
    }

    #[test]
    fn test_to_color_channels() {
        let color = Argb(0xffff_6f48).to_color();
        assert_eq!(color.a, 1.0);
        assert!((color.r - 1.0).abs() < f32::EPSILON);
        assert!((color.g - 0x6f as f32 / 255.0).abs() < f32::EPSILON);
        assert!((color.b - 0x48 as f32 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_defaults_when_unset() {
        let (progress, style) = Attributes::default().resolve(Density::IDENTITY);

        assert_eq!(progress, 0);
        assert_eq!(style.circle_color, Argb::TRANSPARENT);
        assert_eq!(style.background_color, Argb(0xffe8_e5e5));
        assert_eq!(style.progress_color, Argb(0xffff_6f48));
        assert_eq!(style.text_color, Argb(0xffff_6f48));
        assert_eq!(style.stroke_width, 6.0);
        assert_eq!(style.text_size, Pixels(36.0));
    }

    #[test]
    fn test_explicit_values_win_over_defaults() {
        let attrs = Attributes {
            progress: Some(42),
            circle_color: Some(Argb(0xffff_ffff)),
            stroke_width: Some(10.0),
            ..Attributes::default()
        };
        let (progress, style) = attrs.resolve(Density::IDENTITY);

        assert_eq!(progress, 42);
        assert_eq!(style.circle_color, Argb(0xffff_ffff));
        assert_eq!(style.stroke_width, 10.0);
        // Unset options still take defaults.
        assert_eq!(style.background_color, DEFAULT_BACKGROUND_COLOR);
    }

    #[test]
    fn test_dip_defaults_scale_with_density() {
        let (_, style) = Attributes::default().resolve(Density(2.0));
        assert_eq!(style.stroke_width, 12.0);
        assert_eq!(style.text_size, Pixels(72.0));

        // Explicit pixel values are not density-scaled.
        let attrs = Attributes {
            text_size: Some(20.0),
            ..Attributes::default()
        };
        let (_, style) = attrs.resolve(Density(2.0));
        assert_eq!(style.text_size, Pixels(20.0));
    }
}
