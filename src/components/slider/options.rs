use std::rc::Rc;

use gpui::{Context, ElementId, Rgba, SharedString, Window};

use crate::{
    extensions::{MouseBehavior, MouseBehaviorExt},
    theme::ThemeSource,
};

use super::{Slider, SliderPointerEvent};

pub type SliderHandler =
    Rc<dyn Fn(&SliderPointerEvent, &mut Slider, &mut Window, &mut Context<Slider>)>;

/// Where end-of-gesture signals are listened for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SliderContainer {
    /// The slider's own surface. Leaving it ends a drag.
    #[default]
    Slider,
    /// The whole window. A drag survives the pointer leaving the slider and
    /// ends on release anywhere, or when the pointer leaves the window.
    Window,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    /// Accepted for compatibility. Drawn as horizontal.
    Vertical,
}

/// Construction options for a [`Slider`].
///
/// Geometry and range fields carry their defaults directly. Style fields left
/// as `None` fall back to the resolved theme: track and control fill use
/// `colors.fill`, strokes use `colors.stroke` and `colors.stroke_width`,
/// alphas default to 1.
#[derive(Clone)]
pub struct SliderOptions {
    /// Generated as `slider-<n>` when unset.
    pub id: Option<ElementId>,
    pub x: f32,
    pub y: f32,
    /// Falls back to the global theme, then to the dark preset.
    pub theme: Option<ThemeSource>,
    /// Track length. Defaults to 250.
    pub width: f32,
    /// Track thickness. Defaults to 2 and never exceeds `width`.
    pub height: f32,
    pub container: SliderContainer,
    pub fill: Option<Rgba>,
    pub fill_alpha: Option<f32>,
    pub stroke: Option<Rgba>,
    pub stroke_width: Option<f32>,
    pub stroke_alpha: Option<f32>,
    pub control_fill: Option<Rgba>,
    pub control_fill_alpha: Option<f32>,
    pub control_stroke: Option<Rgba>,
    pub control_stroke_width: Option<f32>,
    pub control_stroke_alpha: Option<f32>,
    /// Defaults to 16.
    pub control_radius: f32,
    pub orientation: Orientation,
    /// Defaults to 0.
    pub min: f32,
    /// Defaults to 100.
    pub max: f32,
    pub value: f32,
    pub disabled: bool,
    pub on_start: Option<SliderHandler>,
    pub on_update: Option<SliderHandler>,
    pub on_complete: Option<SliderHandler>,
    pub tooltip: Option<SharedString>,
    pub visible: bool,
    pub mouse_behavior: MouseBehavior,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            id: None,
            x: 0.,
            y: 0.,
            theme: None,
            width: 250.,
            height: 2.,
            container: SliderContainer::default(),
            fill: None,
            fill_alpha: None,
            stroke: None,
            stroke_width: None,
            stroke_alpha: None,
            control_fill: None,
            control_fill_alpha: None,
            control_stroke: None,
            control_stroke_width: None,
            control_stroke_alpha: None,
            control_radius: 16.,
            orientation: Orientation::default(),
            min: 0.,
            max: 100.,
            value: 0.,
            disabled: false,
            on_start: None,
            on_update: None,
            on_complete: None,
            tooltip: None,
            visible: true,
            mouse_behavior: MouseBehavior::default(),
        }
    }
}

impl SliderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn theme(mut self, theme: impl Into<ThemeSource>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn control_radius(mut self, control_radius: f32) -> Self {
        self.control_radius = control_radius;
        self
    }

    pub fn container(mut self, container: SliderContainer) -> Self {
        self.container = container;
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Called when a drag starts on the control.
    pub fn on_start(
        mut self,
        on_start: impl Fn(&SliderPointerEvent, &mut Slider, &mut Window, &mut Context<Slider>)
        + 'static,
    ) -> Self {
        self.on_start = Some(Rc::new(on_start));
        self
    }

    /// Called for every pointer move while dragging.
    pub fn on_update(
        mut self,
        on_update: impl Fn(&SliderPointerEvent, &mut Slider, &mut Window, &mut Context<Slider>)
        + 'static,
    ) -> Self {
        self.on_update = Some(Rc::new(on_update));
        self
    }

    /// Called when a drag ends, and after a click on the track.
    pub fn on_complete(
        mut self,
        on_complete: impl Fn(&SliderPointerEvent, &mut Slider, &mut Window, &mut Context<Slider>)
        + 'static,
    ) -> Self {
        self.on_complete = Some(Rc::new(on_complete));
        self
    }
}

impl MouseBehaviorExt for SliderOptions {
    fn mouse_behavior_mut(&mut self) -> &mut MouseBehavior {
        &mut self.mouse_behavior
    }
}

