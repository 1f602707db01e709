mod events;
pub use events::*;

mod model;
pub use model::*;

mod options;
pub use options::*;

mod tween;
pub use tween::*;

use std::time::Instant;

use gpui::{
    App, Bounds, Context, Corners, CursorStyle, DispatchPhase, Edges, ElementId,
    InteractiveElement, IntoElement, MouseButton, MouseDownEvent, MouseExitEvent, MouseMoveEvent,
    MouseUpEvent, ParentElement, Pixels, Point, Render, SharedString, StatefulInteractiveElement,
    Styled, Window, canvas, div, fill, point, prelude::FluentBuilder, px, size,
};

use crate::{
    components::Tooltip,
    extensions::MouseBehavior,
    theme::{Theme, ThemeExt, resolve_theme},
    utils::{RgbaExt, disabled_transition, generate_element_id},
};

/// A horizontal slider: a rounded track with a draggable circular control.
///
/// Create it as an entity with `cx.new(|cx| Slider::new(options, cx))`.
/// Dragging the control updates the value continuously, clicking the track
/// jumps to the clicked value with an animation.
pub struct Slider {
    id: ElementId,
    model: SliderModel,
    theme: Theme,
    container: SliderContainer,
    tooltip: Option<SharedString>,
    visible: bool,
    mouse_behavior: MouseBehavior,
    on_start: Option<SliderHandler>,
    on_update: Option<SliderHandler>,
    on_complete: Option<SliderHandler>,
    drag_event: Option<SliderPointerEvent>,
    bounds: Option<Bounds<Pixels>>,
}

impl Slider {
    pub fn new(options: SliderOptions, cx: &mut App) -> Self {
        let theme = match options.theme.clone() {
            Some(source) => resolve_theme(source, None),
            None => cx.theme_or_default(),
        };

        let model = SliderModel::new(&options, &theme);
        let id = options
            .id
            .clone()
            .unwrap_or_else(|| generate_element_id("slider"));

        tracing::debug!(
            id = %id,
            theme = %theme.name,
            min = model.min(),
            max = model.max(),
            value = model.raw_value(),
            "created slider"
        );

        Self {
            id,
            model,
            theme,
            container: options.container,
            tooltip: options.tooltip,
            visible: options.visible,
            mouse_behavior: options.mouse_behavior,
            on_start: options.on_start,
            on_update: options.on_update,
            on_complete: options.on_complete,
            drag_event: None,
            bounds: None,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn model(&self) -> &SliderModel {
        &self.model
    }

    pub fn container(&self) -> SliderContainer {
        self.container
    }

    pub fn tooltip(&self) -> Option<&SharedString> {
        self.tooltip.as_ref()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The current value, rounded to the nearest integer.
    pub fn value(&self) -> f32 {
        self.model.value()
    }

    /// Clamps `value` into range and animates the control to it.
    pub fn set_value(&mut self, value: f32, cx: &mut Context<Self>) -> &mut Self {
        self.model.set_value(value, Instant::now());
        cx.notify();
        self
    }

    pub fn disabled(&self) -> bool {
        self.model.disabled()
    }

    /// Enables or disables the slider and both of its shapes together.
    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) -> &mut Self {
        if disabled && self.model.is_dragging() {
            tracing::debug!(id = %self.id, "drag dropped by disable");
        }

        self.model.set_disabled(disabled);
        self.drag_event = None;
        cx.notify();
        self
    }

    /// The pointer event that started the current drag.
    pub fn drag_event(&self) -> Option<&SliderPointerEvent> {
        self.drag_event.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.model.is_dragging()
    }

    pub fn set_position(&mut self, x: f32, y: f32, cx: &mut Context<Self>) -> &mut Self {
        self.model.set_position(x, y);
        cx.notify();
        self
    }

    pub fn layout(&mut self, cx: &mut Context<Self>) -> &mut Self {
        self.model.layout();
        cx.notify();
        self
    }

    pub fn draw(&mut self, cx: &mut Context<Self>) -> &mut Self {
        self.model.draw();
        cx.notify();
        self
    }

    pub fn show(&mut self, cx: &mut Context<Self>) -> &mut Self {
        self.model.show();
        cx.notify();
        self
    }

    pub fn hide(&mut self, cx: &mut Context<Self>) -> &mut Self {
        self.model.hide();
        cx.notify();
        self
    }

    /// Converts a window position into slider coordinates.
    fn localize(&self, position: Point<Pixels>) -> Point<Pixels> {
        let origin = self
            .bounds
            .map(|bounds| bounds.origin)
            .unwrap_or_else(|| point(px(self.model.x()), px(self.model.y())));

        point(position.x - origin.x, position.y - origin.y)
    }

    fn contains(&self, position: Point<Pixels>) -> bool {
        let local = self.localize(position);
        let node = self.model.node_size();

        local.x >= px(0.) && local.x <= node.width && local.y >= px(0.) && local.y <= node.height
    }

    fn invoke(
        &mut self,
        handler: Option<SliderHandler>,
        event: &SliderPointerEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(handler) = handler {
            (handler)(event, self, window, cx);
        }
    }

    pub(crate) fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.model.is_interactive() || !self.visible {
            return;
        }

        let now = Instant::now();
        let local = self.localize(event.position);

        match self.model.hit_test(local, now) {
            Some(SliderPart::Control) => {
                if !self.model.begin_drag(local, now) {
                    return;
                }

                let pointer_event = SliderPointerEvent::Down(event.clone());
                self.drag_event = Some(pointer_event.clone());

                tracing::debug!(id = %self.id, value = self.model.raw_value(), "drag started");

                self.invoke(self.on_start.clone(), &pointer_event, window, cx);
            }
            Some(SliderPart::Track) => {
                self.model.press_track();
            }
            None => return,
        }

        self.mouse_behavior.apply(window, cx);
        cx.notify();
    }

    pub(crate) fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let now = Instant::now();
        let inside = self.contains(event.position);
        // The control sits on the track, so it counts as track hover.
        let over_track = self
            .model
            .hit_test(self.localize(event.position), now)
            .is_some();

        if self.model.set_track_hovered(over_track, now) {
            cx.notify();
        }

        if !self.model.is_dragging() {
            return;
        }

        if self.container == SliderContainer::Slider && !inside {
            self.finish_drag(SliderPointerEvent::Leave, window, cx);
            return;
        }

        let local = self.localize(event.position);
        let Some(value) = self.model.drag_to(local.x.to_f64() as f32) else {
            return;
        };

        tracing::trace!(id = %self.id, value, "dragging");

        self.invoke(
            self.on_update.clone(),
            &SliderPointerEvent::Move(event.clone()),
            window,
            cx,
        );
        cx.notify();
    }

    pub(crate) fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.model.is_dragging() {
            if self.container == SliderContainer::Slider && !self.contains(event.position) {
                self.finish_drag(SliderPointerEvent::Leave, window, cx);
            } else {
                self.finish_drag(SliderPointerEvent::Up(event.clone()), window, cx);
            }
            return;
        }

        if !self.model.is_track_pressed() {
            return;
        }

        let local = self.localize(event.position);
        let Some(value) = self.model.release_track(local, Instant::now()) else {
            return;
        };

        tracing::debug!(id = %self.id, value, "jumped to track position");

        self.invoke(
            self.on_complete.clone(),
            &SliderPointerEvent::Up(event.clone()),
            window,
            cx,
        );
        cx.notify();
    }

    pub(crate) fn handle_mouse_exit(
        &mut self,
        event: &MouseExitEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.model.cancel_track_press();

        if self.model.set_track_hovered(false, Instant::now()) {
            cx.notify();
        }

        if self.model.is_dragging() {
            self.finish_drag(SliderPointerEvent::Exit(event.clone()), window, cx);
        }
    }

    /// Ends the current drag. Does nothing when no drag is in progress.
    fn finish_drag(
        &mut self,
        event: SliderPointerEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.model.end_drag().is_none() {
            return;
        }

        self.drag_event = None;

        tracing::debug!(id = %self.id, value = self.model.raw_value(), "drag ended");

        self.invoke(self.on_complete.clone(), &event, window, cx);
        cx.notify();
    }
}

fn paint_frame(frame: &SliderFrame, bounds: Bounds<Pixels>, window: &mut Window) {
    let track = frame.track;
    let control = frame.control;

    window.paint_quad(
        fill(
            Bounds::new(
                point(
                    bounds.origin.x + track.bounds.origin.x,
                    bounds.origin.y + track.bounds.origin.y,
                ),
                track.bounds.size,
            ),
            track.fill.fade(track.fill_alpha).to_hsla(),
        )
        .corner_radii(Corners::all(track.corner_radius))
        .border_widths(Edges::all(track.stroke_width))
        .border_color(track.stroke.fade(track.stroke_alpha).to_hsla()),
    );

    let center = point(
        bounds.origin.x + frame.control_center.x,
        bounds.origin.y + frame.control_center.y,
    );

    for (radius, color, alpha, stroke_width) in [
        (
            control.radius,
            control.fill,
            control.fill_alpha,
            control.stroke_width,
        ),
        (
            control.inner_radius,
            control.stroke,
            control.stroke_alpha,
            px(0.),
        ),
    ] {
        window.paint_quad(
            fill(
                Bounds::new(
                    point(center.x - radius, center.y - radius),
                    size(radius * 2., radius * 2.),
                ),
                color.fade(alpha * frame.control_alpha).to_hsla(),
            )
            .corner_radii(Corners::all(radius))
            .border_widths(Edges::all(stroke_width))
            .border_color(
                control
                    .stroke
                    .fade(control.stroke_alpha * frame.control_alpha)
                    .to_hsla(),
            ),
        );
    }
}

impl Render for Slider {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Instant::now();

        self.model.settle(now);
        if self.model.is_animating(now) {
            window.request_animation_frame();
        }

        let frame = self.model.frame(now);
        let node_size = self.model.node_size();
        let is_interactive = self.model.is_interactive() && self.visible;

        let disabled_transition = disabled_transition(
            self.id.clone(),
            window,
            cx,
            self.model.animation_duration(),
            self.model.disabled(),
        );
        let opacity = if self.visible {
            *disabled_transition.evaluate(window, cx)
        } else {
            0.
        };

        let entity = cx.entity();

        div()
            .id(self.id.clone())
            .absolute()
            .left(px(self.model.x()))
            .top(px(self.model.y()))
            .w(node_size.width)
            .h(node_size.height)
            .opacity(opacity)
            .cursor(if is_interactive {
                CursorStyle::PointingHand
            } else {
                CursorStyle::Arrow
            })
            .child(
                canvas(
                    |_bounds, _window, _cx| {},
                    move |bounds, _, window, cx| {
                        paint_frame(&frame, bounds, window);

                        entity.update(cx, |slider, _cx| slider.bounds = Some(bounds));

                        if !is_interactive {
                            return;
                        }

                        // Registered per frame, so listening stops with rendering.
                        let slider = entity.clone();
                        window.on_mouse_event(move |event: &MouseMoveEvent, phase, window, cx| {
                            if phase == DispatchPhase::Capture {
                                return;
                            }

                            slider.update(cx, |slider, cx| {
                                slider.handle_mouse_move(event, window, cx)
                            });
                        });

                        let slider = entity.clone();
                        window.on_mouse_event(move |event: &MouseUpEvent, phase, window, cx| {
                            if phase == DispatchPhase::Capture || event.button != MouseButton::Left
                            {
                                return;
                            }

                            slider.update(cx, |slider, cx| {
                                slider.handle_mouse_up(event, window, cx)
                            });
                        });

                        let slider = entity;
                        window.on_mouse_event(move |event: &MouseExitEvent, phase, window, cx| {
                            if phase == DispatchPhase::Capture {
                                return;
                            }

                            slider.update(cx, |slider, cx| {
                                slider.handle_mouse_exit(event, window, cx)
                            });
                        });
                    },
                )
                .size_full(),
            )
            .when(is_interactive, |this| {
                this.on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, event: &MouseDownEvent, window, cx| {
                        this.handle_mouse_down(event, window, cx)
                    }),
                )
            })
            .when_some(self.tooltip.clone(), |this, text| {
                let theme = self.theme.clone();
                this.tooltip(move |_window, cx| Tooltip::build(text.clone(), theme.clone(), cx))
            })
    }
}
