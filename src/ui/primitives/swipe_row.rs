//! Swipeable list row widget
//!
//! Wraps arbitrary content in a row that can be dragged horizontally to
//! reveal an accept panel (rightward) or a decline panel (leftward). The
//! gesture itself lives in [`SwipeMachine`]; this widget adapts pointer
//! events onto it, drives animation frames through redraw requests, and
//! renders the machine's layer positions.
//!
//! Horizontal intent is arbitrated against vertical scrolling: a press
//! starts an undecided drag, and only once the pointer has moved far
//! enough with |dx| > |dy| does the row capture the gesture. Vertical
//! movement hands the events back untouched.
//!
//! Widget state is keyed: changing the `key` or resizing the row tears
//! down and rebuilds the machine, dropping any in-flight gesture or
//! animation without firing callbacks.

use std::time::Instant;

use iced::advanced::graphics::geometry::Renderer as _;
use iced::advanced::layout;
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::widget::canvas;
use iced::{
    Color, Element, Event, Length, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector, mouse,
    touch, window,
};

use crate::features::swipe::{Side, SwipeMachine, indicator};
use crate::ui::theme;

/// Pointer travel before a press becomes a drag, in pixels
const RECOGNITION_THRESHOLD: f32 = 10.0;

/// Swipeable row wrapping a content element
pub struct SwipeRow<'a, Message> {
    content: Element<'a, Message, Theme, Renderer>,
    key: u64,
    width: Length,
    height: f32,
    accept_color: Color,
    decline_color: Color,
    on_accept: Option<Message>,
    on_decline: Option<Message>,
}

/// Create a swipeable row around `content`.
pub fn swipe_row<'a, Message>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> SwipeRow<'a, Message> {
    SwipeRow::new(content)
}

impl<'a, Message> SwipeRow<'a, Message> {
    pub const DEFAULT_HEIGHT: f32 = 64.0;

    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            key: 0,
            width: Length::Fill,
            height: Self::DEFAULT_HEIGHT,
            accept_color: theme::ACCEPT,
            decline_color: theme::DECLINE,
            on_accept: None,
            on_decline: None,
        }
    }

    /// Identity of the row. A changed key rebuilds all layer state, which
    /// is how the hosting list resets a reused or reloaded row.
    pub fn key(mut self, key: u64) -> Self {
        self.key = key;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0;
        self
    }

    /// Fill of the panel revealed by a rightward drag.
    pub fn accept_color(mut self, color: Color) -> Self {
        self.accept_color = color;
        self
    }

    /// Fill of the panel revealed by a leftward drag.
    pub fn decline_color(mut self, color: Color) -> Self {
        self.decline_color = color;
        self
    }

    /// Message published once when a rightward swipe commits.
    pub fn on_accept(mut self, message: Message) -> Self {
        self.on_accept = Some(message);
        self
    }

    /// Message published once when a leftward swipe commits.
    pub fn on_decline(mut self, message: Message) -> Self {
        self.on_decline = Some(message);
        self
    }
}

/// Pointer arbitration for one press
#[derive(Debug, Clone, Copy)]
enum Drag {
    /// No press in progress
    None,
    /// Pressed inside the row; intent undecided
    Pending { origin: Point },
    /// Horizontal intent won; the machine is tracking
    Recognized { origin: Point },
    /// Vertical intent won; ignore until the pointer lifts
    Failed,
}

/// Widget tree state
#[derive(Debug)]
struct State {
    machine: Option<SwipeMachine>,
    key: u64,
    size: Size,
    drag: Drag,
    last_dx: f32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            machine: None,
            key: 0,
            size: Size::ZERO,
            drag: Drag::None,
            last_dx: 0.0,
        }
    }
}

impl State {
    /// Rebuild the machine when the row's identity or bounds change.
    /// Everything in flight is discarded; a dropped commit never fires.
    fn sync(&mut self, key: u64, size: Size) {
        let stale = self.machine.is_none() || self.key != key || self.size != size;
        if stale && size.width > 0.0 {
            self.machine = Some(SwipeMachine::new(f64::from(size.width)));
            self.key = key;
            self.size = size;
            self.drag = Drag::None;
            self.last_dx = 0.0;
        }
    }
}

impl<Message> Widget<Message, Theme, Renderer> for SwipeRow<'_, Message>
where
    Message: Clone,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Fixed(self.height),
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(Length::Fixed(self.height));
        let size = limits.resolve(self.width, Length::Fixed(self.height), Size::ZERO);

        let content_limits = layout::Limits::new(Size::ZERO, size);
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &content_limits);

        layout::Node::with_children(size, vec![content])
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        {
            let state = tree.state.downcast_mut::<State>();
            state.sync(self.key, bounds.size());
        }

        // Content sees every event except while we own the drag
        let recognized = matches!(
            tree.state.downcast_ref::<State>().drag,
            Drag::Recognized { .. }
        );
        if !recognized {
            if let Some(content_layout) = layout.children().next() {
                self.content.as_widget_mut().update(
                    &mut tree.children[0],
                    event,
                    content_layout,
                    cursor,
                    renderer,
                    clipboard,
                    shell,
                    viewport,
                );
            }
        }

        let state = tree.state.downcast_mut::<State>();
        let Some(machine) = &mut state.machine else {
            return;
        };
        let now = Instant::now();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    if !machine.is_animating(now) {
                        state.drag = Drag::Pending { origin: position };
                    }
                }
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(*position) && !machine.is_animating(now) {
                    state.drag = Drag::Pending { origin: *position };
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position })
            | Event::Touch(touch::Event::FingerMoved { position, .. }) => match state.drag {
                Drag::Pending { origin } => {
                    let dx = position.x - origin.x;
                    let dy = position.y - origin.y;
                    if dx.abs() >= RECOGNITION_THRESHOLD || dy.abs() >= RECOGNITION_THRESHOLD {
                        if dx.abs() > dy.abs() {
                            state.drag = Drag::Recognized { origin };
                            state.last_dx = dx;
                            machine.begin(now);
                            machine.drag(f64::from(dx), now);
                            shell.capture_event();
                            shell.request_redraw();
                        } else {
                            state.drag = Drag::Failed;
                        }
                    }
                }
                Drag::Recognized { origin } => {
                    let dx = position.x - origin.x;
                    state.last_dx = dx;
                    machine.drag(f64::from(dx), now);
                    shell.capture_event();
                    shell.request_redraw();
                }
                _ => {}
            },
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. }) => {
                if matches!(state.drag, Drag::Recognized { .. }) {
                    machine.release(f64::from(state.last_dx), now);
                    shell.capture_event();
                    shell.request_redraw();
                }
                state.drag = Drag::None;
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                if matches!(state.drag, Drag::Recognized { .. }) {
                    machine.cancel(now);
                    shell.request_redraw();
                }
                state.drag = Drag::None;
            }
            Event::Window(window::Event::RedrawRequested(frame_time)) => {
                if let Some(side) = machine.tick(*frame_time) {
                    let message = match side {
                        Side::Accept => self.on_accept.clone(),
                        Side::Decline => self.on_decline.clone(),
                    };
                    if let Some(message) = message {
                        shell.publish(message);
                    }
                }
                if machine.has_active_animations(*frame_time) {
                    shell.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let Some(content_layout) = layout.children().next() else {
            return;
        };
        let state = tree.state.downcast_ref::<State>();

        let draw_content = |renderer: &mut Renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                content_layout,
                cursor,
                viewport,
            );
        };

        let now = Instant::now();
        let machine = match &state.machine {
            Some(machine) if !machine.is_at_rest(now) => machine,
            // Resting rows render their content directly; the panels are
            // off-screen and the indicators undrawn
            _ => {
                draw_content(renderer);
                return;
            }
        };

        let width = bounds.width;
        let content_offset = machine.content_x(now) as f32 - width / 2.0;

        renderer.with_layer(bounds, |renderer| {
            renderer.with_translation(Vector::new(content_offset, 0.0), draw_content);

            // Side panels sit above the content, like the original layer order
            if machine.colors_revealed() {
                for (side, color) in [
                    (Side::Accept, self.accept_color),
                    (Side::Decline, self.decline_color),
                ] {
                    let panel = Rectangle {
                        x: bounds.x + machine.side_x(side, now) as f32 - width / 2.0,
                        y: bounds.y,
                        width,
                        height: bounds.height,
                    };
                    if panel.intersects(&bounds) {
                        renderer.fill_quad(
                            renderer::Quad {
                                bounds: panel,
                                ..renderer::Quad::default()
                            },
                            color,
                        );
                    }
                }
            }

            self.draw_indicators(renderer, machine, bounds, now);
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if matches!(state.drag, Drag::Recognized { .. }) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if let Some(content_layout) = layout.children().next() {
            self.content.as_widget().mouse_interaction(
                &tree.children[0],
                content_layout,
                cursor,
                viewport,
                renderer,
            )
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<Message> SwipeRow<'_, Message> {
    /// Stroke the confirmation indicators for both sides at their current
    /// draw progress.
    fn draw_indicators(
        &self,
        renderer: &mut Renderer,
        machine: &SwipeMachine,
        bounds: Rectangle,
        now: Instant,
    ) {
        let mut frame: Option<canvas::Frame> = None;

        for side in [Side::Accept, Side::Decline] {
            let progress = machine.indicator_progress(side, now);
            if progress <= 0.0 {
                continue;
            }

            let geometry = indicator::indicator_geometry(
                side,
                f64::from(bounds.width),
                f64::from(bounds.height),
            );
            let trimmed = indicator::trim_polylines(&geometry.polylines, progress);
            if trimmed.is_empty() {
                continue;
            }

            let (ox, oy) = geometry.origin;
            let path = canvas::Path::new(|builder| {
                for line in &trimmed {
                    let mut points = line.iter();
                    if let Some(first) = points.next() {
                        builder.move_to(Point::new(
                            (ox + first.0) as f32,
                            (oy + first.1) as f32,
                        ));
                        for point in points {
                            builder.line_to(Point::new(
                                (ox + point.0) as f32,
                                (oy + point.1) as f32,
                            ));
                        }
                    }
                }
            });

            let frame = frame.get_or_insert_with(|| canvas::Frame::new(renderer, bounds.size()));
            frame.stroke(
                &path,
                canvas::Stroke::default()
                    .with_width(indicator::STROKE_WIDTH as f32)
                    .with_color(Color::WHITE)
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        if let Some(frame) = frame {
            let geometry = frame.into_geometry();
            renderer.with_translation(Vector::new(bounds.x, bounds.y), |renderer| {
                renderer.draw_geometry(geometry);
            });
        }
    }
}

impl<'a, Message> From<SwipeRow<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
{
    fn from(row: SwipeRow<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(row)
    }
}
