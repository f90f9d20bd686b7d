//! The `CircleProgress` widget
//!
//! Implements iced's `Widget` trait directly: `layout` runs the square
//! measurement contract, `update` maintains the cached ring geometry when the
//! laid-out size changes, and `draw` replays the paint sequence onto a canvas
//! frame.

use iced::advanced::graphics::geometry::Renderer as _;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Renderer as _, Shell, Widget};
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{
    Degrees, Element, Event, Length, Padding, Pixels, Radians, Rectangle, Size, Theme, Vector,
    mouse, window,
};
use tracing::trace;

use crate::geometry::RingGeometry;
use crate::measure::{Constraint, Density, measure};
use crate::style::{Argb, Attributes, Style};
use crate::surface::{Label, Surface, paint};

/// Circular progress indicator: filled disc, ring track, progress arc and a
/// centered percentage label.
///
/// The widget is always square in content, using the larger of its two
/// resolved axes. Progress is an integer notionally in 0..=100 and is not
/// clamped; out-of-range values draw an arc sweeping outside 0..360°.
pub struct CircleProgress {
    progress: i32,
    style: Style,
    width: Length,
    height: Length,
    padding: Padding,
    density: Density,
}

impl CircleProgress {
    pub fn new(progress: i32) -> Self {
        Self {
            progress,
            style: Style::default(),
            width: Length::Shrink,
            height: Length::Shrink,
            padding: Padding::ZERO,
            density: Density::IDENTITY,
        }
    }

    /// Construct from a declarative attribute set, applying documented
    /// defaults for anything unspecified. Dip-valued defaults are converted
    /// through `density`.
    pub fn from_attributes(attributes: &Attributes, density: Density) -> Self {
        let (progress, style) = attributes.resolve(density);

        Self {
            progress,
            style,
            width: Length::Shrink,
            height: Length::Shrink,
            padding: Padding::ZERO,
            density,
        }
    }

    /// Replace the visual configuration wholesale.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Fill color of the inner disc.
    pub fn circle_color(mut self, color: impl Into<Argb>) -> Self {
        self.style.circle_color = color.into();
        self
    }

    /// Color of the full ring track behind the arc.
    pub fn background_color(mut self, color: impl Into<Argb>) -> Self {
        self.style.background_color = color.into();
        self
    }

    /// Color of the progress arc.
    pub fn progress_color(mut self, color: impl Into<Argb>) -> Self {
        self.style.progress_color = color.into();
        self
    }

    /// Color of the percentage label.
    pub fn text_color(mut self, color: impl Into<Argb>) -> Self {
        self.style.text_color = color.into();
        self
    }

    /// Stroke thickness for the track and the arc, in device pixels. Zero
    /// suppresses both.
    pub fn stroke_width(mut self, width: f32) -> Self {
        self.style.stroke_width = width;
        self
    }

    /// Label glyph size.
    pub fn text_size(mut self, size: impl Into<Pixels>) -> Self {
        self.style.text_size = size.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Device-independent-unit conversion factor of the host environment.
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }
}

/// Cached geometry, keyed by the size it was computed for.
#[derive(Debug, Clone, Copy, Default)]
struct State {
    cache: Option<(Size, RingGeometry)>,
}

/// Map one axis of the widget's sizing to a measurement constraint.
fn axis_constraint(length: Length, max: f32) -> Constraint {
    match length {
        Length::Fixed(size) => Constraint::Exactly(size),
        Length::Fill | Length::FillPortion(_) => {
            if max.is_finite() {
                Constraint::Exactly(max)
            } else {
                Constraint::Unbounded
            }
        }
        Length::Shrink => {
            if max.is_finite() {
                Constraint::AtMost(max)
            } else {
                Constraint::Unbounded
            }
        }
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for CircleProgress {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let max = limits.max();
        let size = measure(
            axis_constraint(self.width, max.width),
            axis_constraint(self.height, max.height),
            limits.min(),
            self.padding,
            self.density,
        );

        layout::Node::new(size)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        _shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        if let Event::Window(window::Event::RedrawRequested(_)) = event {
            let state = tree.state.downcast_mut::<State>();
            let size = layout.bounds().size();

            if state.cache.is_none_or(|(cached, _)| cached != size) {
                trace!(width = size.width, height = size.height, "recomputing ring geometry");
                let geometry = RingGeometry::compute(size, self.padding, self.style.stroke_width);
                state.cache = Some((size, geometry));
            }
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_ref::<State>();

        // The cache is filled on the redraw event preceding this draw; the
        // fallback only runs before the first one arrives.
        let geometry = match state.cache {
            Some((size, geometry)) if size == bounds.size() => geometry,
            _ => RingGeometry::compute(bounds.size(), self.padding, self.style.stroke_width),
        };

        let mut frame = Frame::new(renderer, bounds.size());
        paint(
            &self.style,
            self.progress,
            &geometry,
            bounds.size(),
            &mut FrameSurface(&mut frame),
        );

        renderer.with_translation(Vector::new(bounds.x, bounds.y), |renderer| {
            renderer.draw_geometry(frame.into_geometry());
        });
    }
}

impl<'a, Message: 'a> From<CircleProgress> for Element<'a, Message> {
    fn from(widget: CircleProgress) -> Self {
        Element::new(widget)
    }
}

/// Production paint surface backed by an iced canvas frame.
struct FrameSurface<'a>(&'a mut Frame);

impl Surface for FrameSurface<'_> {
    fn fill_disc(&mut self, bounds: Rectangle, color: iced::Color) {
        let disc = Path::circle(bounds.center(), bounds.width / 2.0);
        self.0.fill(&disc, color);
    }

    fn stroke_circle(&mut self, bounds: Rectangle, width: f32, color: iced::Color) {
        let circle = Path::circle(bounds.center(), bounds.width / 2.0);
        self.0.stroke(
            &circle,
            Stroke::default().with_width(width).with_color(color),
        );
    }

    fn stroke_arc(
        &mut self,
        bounds: Rectangle,
        start: Degrees,
        sweep: Degrees,
        width: f32,
        color: iced::Color,
    ) {
        let start = Radians::from(start);
        let arc = Path::new(|builder| {
            builder.arc(canvas::path::Arc {
                center: bounds.center(),
                radius: bounds.width / 2.0,
                start_angle: start,
                end_angle: Radians(start.0 + Radians::from(sweep).0),
            });
        });

        self.0.stroke(
            &arc,
            Stroke::default().with_width(width).with_color(color),
        );
    }

    fn fill_label(&mut self, label: Label) {
        // The shaper centers the run on the anchor using its font metrics.
        self.0.fill_text(canvas::Text {
            content: label.content,
            position: label.center,
            color: label.color,
            size: label.size,
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..canvas::Text::default()
        });
    }
}
