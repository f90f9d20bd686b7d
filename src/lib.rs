//! Circular progress widget for iced
//!
//! Renders, in order, a filled disc background, a ring-shaped track, a
//! progress arc starting at 12 o'clock, and a centered percentage label.
//! Layers are skipped when their ARGB color's alpha byte is zero, and a zero
//! stroke width suppresses both the track and the arc.
//!
//! # Architecture
//!
//! - [`measure`]: per-axis constraints and the square sizing contract
//! - [`geometry`]: derived disc/ring bounds, cached per widget size
//! - [`surface`]: the paint seam and the four-layer draw sequence
//! - [`style`]: ARGB colors and the declarative attribute set
//! - [`widget`]: the `iced::advanced::Widget` implementation tying it all to
//!   a canvas frame
//!
//! # Example
//!
//! ```
//! use circle_progress::CircleProgress;
//! use iced::Element;
//!
//! let indicator: Element<'_, ()> = CircleProgress::new(42)
//!     .circle_color(0xffff_ffff)
//!     .stroke_width(8.0)
//!     .width(120)
//!     .height(120)
//!     .into();
//! ```

pub mod geometry;
pub mod measure;
pub mod style;
pub mod surface;
pub mod widget;

pub use geometry::RingGeometry;
pub use measure::{Constraint, Density};
pub use style::{Argb, Attributes, Style};
pub use surface::{Label, Surface, paint};
pub use widget::CircleProgress;
