use std::time::{Duration, Instant};

use gpui::{Bounds, Pixels, Point, Rgba, Size, point, px, size};

use crate::{theme::Theme, utils::DISABLED_OPACITY};

use super::{
    Orientation, SliderOptions,
    tween::{TweenKey, Tweens},
};

/// Opacity of a disabled slider.
pub const DISABLED_ALPHA: f32 = DISABLED_OPACITY;
/// Control opacity while the pointer is not over the track.
pub const CONTROL_IDLE_ALPHA: f32 = 0.85;
/// Control opacity while the pointer is over the track.
pub const CONTROL_HOVER_ALPHA: f32 = 1.;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderPart {
    Track,
    Control,
}

/// Drag state attached to the control while it is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlDrag {
    /// Where the drag started, in slider coordinates.
    pub origin: Point<Pixels>,
    /// Horizontal offset of the pointer from the control's center at drag start.
    pub delta: f32,
}

/// The rounded-rectangle track, in slider coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackShape {
    pub bounds: Bounds<Pixels>,
    pub corner_radius: Pixels,
    pub fill: Rgba,
    pub fill_alpha: f32,
    pub stroke: Rgba,
    pub stroke_width: Pixels,
    pub stroke_alpha: f32,
    pub interactive: bool,
}

/// The thumb: a filled circle with a smaller concentric dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlShape {
    /// Resting center for the current value, in slider coordinates.
    pub center: Point<Pixels>,
    pub radius: Pixels,
    pub inner_radius: Pixels,
    pub fill: Rgba,
    pub fill_alpha: f32,
    pub stroke: Rgba,
    pub stroke_width: Pixels,
    pub stroke_alpha: f32,
    /// Resting opacity; hover tweens move towards it.
    pub alpha: f32,
    pub interactive: bool,
    pub drag: Option<ControlDrag>,
}

/// What gets painted for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderFrame {
    pub track: TrackShape,
    pub control: ControlShape,
    /// Displayed control center, which differs from `control.center` while
    /// a tween runs.
    pub control_center: Point<Pixels>,
    pub control_alpha: f32,
}

/// Slider state and geometry, independent of any window.
///
/// Coordinates are relative to the slider's top-left corner. The track starts
/// `control_radius` in from the left so the control fits at both ends.
#[derive(Debug, Clone)]
pub struct SliderModel {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    control_radius: f32,
    orientation: Orientation,
    min: f32,
    max: f32,
    value: f32,
    disabled: bool,
    alpha: f32,
    track: TrackShape,
    control: ControlShape,
    track_pressed: bool,
    track_hovered: bool,
    animation_duration: Duration,
    tweens: Tweens,
}

impl SliderModel {
    pub fn new(options: &SliderOptions, theme: &Theme) -> Self {
        let width = non_negative(options.width);
        let height = non_negative(options.height).min(width);
        let control_radius = non_negative(options.control_radius);

        let (min, max) = (finite_or(options.min, 0.), finite_or(options.max, 100.));
        let (min, max) = if min <= max { (min, max) } else { (max, min) };

        if options.orientation == Orientation::Vertical {
            tracing::warn!("vertical sliders are drawn horizontally");
        }

        let colors = &theme.colors;
        let stroke_width = colors.stroke_width.to_f64() as f32;

        let track = TrackShape {
            bounds: Bounds::default(),
            corner_radius: px(0.),
            fill: options.fill.unwrap_or(colors.fill),
            fill_alpha: options.fill_alpha.unwrap_or(1.),
            stroke: options.stroke.unwrap_or(colors.stroke),
            stroke_width: px(options.stroke_width.unwrap_or(stroke_width)),
            stroke_alpha: options.stroke_alpha.unwrap_or(1.),
            interactive: !options.disabled,
        };

        let control = ControlShape {
            center: point(px(0.), px(0.)),
            radius: px(control_radius),
            inner_radius: px(control_radius / 2.),
            fill: options.control_fill.unwrap_or(colors.fill),
            fill_alpha: options.control_fill_alpha.unwrap_or(1.),
            stroke: options.control_stroke.unwrap_or(colors.stroke),
            stroke_width: px(options.control_stroke_width.unwrap_or(stroke_width)),
            stroke_alpha: options.control_stroke_alpha.unwrap_or(1.),
            alpha: CONTROL_IDLE_ALPHA,
            interactive: !options.disabled,
            drag: None,
        };

        let mut model = Self {
            x: options.x,
            y: options.y,
            width,
            height,
            control_radius,
            orientation: options.orientation,
            min,
            max,
            value: clamp_or(options.value, min, max),
            disabled: options.disabled,
            alpha: if options.disabled { DISABLED_ALPHA } else { 1. },
            track,
            control,
            track_pressed: false,
            track_hovered: false,
            animation_duration: theme.durations.fast,
            tweens: Tweens::new(),
        };

        model.layout();
        model
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn control_radius(&self) -> f32 {
        self.control_radius
    }

    pub fn track_radius(&self) -> f32 {
        self.height / 2.
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// The slider's full extent: the track plus room for the control.
    pub fn node_size(&self) -> Size<Pixels> {
        size(
            px(self.width + self.control_radius * 2.),
            px(self.height.max(self.control_radius * 2.)),
        )
    }

    pub fn value_to_pixel(&self, value: f32) -> f32 {
        let range = self.max - self.min;

        if range <= 0. {
            return 0.;
        }

        let pixel = self.width * (clamp_or(value, self.min, self.max) - self.min) / range;
        clamp_or(pixel, 0., self.width)
    }

    pub fn pixel_to_value(&self, pixel: f32) -> f32 {
        if self.width <= 0. {
            return self.min;
        }

        let value =
            self.min + (self.max - self.min) * clamp_or(pixel, 0., self.width) / self.width;
        clamp_or(value, self.min, self.max)
    }

    /// The current value rounded to the nearest integer.
    pub fn value(&self) -> f32 {
        self.value.round()
    }

    /// The current value as stored, without rounding.
    pub fn raw_value(&self) -> f32 {
        self.value
    }

    /// Clamps and stores `value`, then animates the control to it.
    pub fn set_value(&mut self, value: f32, now: Instant) {
        let from = self.control_offset(now);

        self.value = clamp_or(value, self.min, self.max);
        self.draw();

        let to = self.value_to_pixel(self.value);
        if from != to {
            self.tweens
                .start(TweenKey::ControlX, from, to, self.animation_duration, now);
        } else {
            self.tweens.cancel(TweenKey::ControlX);
        }
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Toggles interactivity of the slider and both shapes together.
    ///
    /// Disabling drops any drag, press or hover in progress.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.alpha = if disabled { DISABLED_ALPHA } else { 1. };
        self.track.interactive = !disabled;
        self.control.interactive = !disabled;

        if disabled {
            self.control.drag = None;
            self.track_pressed = false;
            self.track_hovered = false;
            self.control.alpha = CONTROL_IDLE_ALPHA;
            self.tweens.cancel(TweenKey::ControlAlpha);
        }
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled
    }

    /// Opacity of the whole slider.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn track(&self) -> &TrackShape {
        &self.track
    }

    pub fn control(&self) -> &ControlShape {
        &self.control
    }

    pub fn set_position(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.layout()
    }

    pub fn show(&mut self) -> &mut Self {
        self.set_shape_alphas(1.);
        self.layout()
    }

    pub fn hide(&mut self) -> &mut Self {
        self.set_shape_alphas(0.);
        self.layout()
    }

    fn set_shape_alphas(&mut self, alpha: f32) {
        self.track.fill_alpha = alpha;
        self.track.stroke_alpha = alpha;
        self.control.fill_alpha = alpha;
        self.control.stroke_alpha = alpha;
    }

    /// Places the slider at `(x, y)` and redraws. The position itself is
    /// applied by whoever paints the slider.
    pub fn layout(&mut self) -> &mut Self {
        self.draw()
    }

    /// Recomputes both shapes from the current geometry and value.
    pub fn draw(&mut self) -> &mut Self {
        let node_height = self.node_size().height.to_f64() as f32;
        let radius = self.control_radius;

        self.track.bounds = Bounds::new(
            point(px(radius), px((node_height - self.height) / 2.)),
            size(px(self.width), px(self.height)),
        );
        self.track.corner_radius = px(self.track_radius());

        self.control.center = point(
            px(radius + self.value_to_pixel(self.value)),
            px(node_height / 2.),
        );
        self.control.radius = px(radius);
        self.control.inner_radius = px(radius / 2.);

        self
    }

    /// Displayed control offset along the track.
    pub fn control_offset(&self, now: Instant) -> f32 {
        self.tweens
            .sample(TweenKey::ControlX, now)
            .unwrap_or_else(|| self.value_to_pixel(self.value))
    }

    pub fn control_center(&self, now: Instant) -> Point<Pixels> {
        point(
            px(self.control_radius + self.control_offset(now)),
            self.control.center.y,
        )
    }

    pub fn control_alpha(&self, now: Instant) -> f32 {
        self.tweens
            .sample(TweenKey::ControlAlpha, now)
            .unwrap_or(self.control.alpha)
    }

    pub fn frame(&self, now: Instant) -> SliderFrame {
        SliderFrame {
            track: self.track,
            control: self.control,
            control_center: self.control_center(now),
            control_alpha: self.control_alpha(now),
        }
    }

    /// Finds the part under `position`. The control wins where they overlap;
    /// the track answers for the full height of the slider along its length.
    pub fn hit_test(&self, position: Point<Pixels>, now: Instant) -> Option<SliderPart> {
        let center = self.control_center(now);
        let dx = (position.x - center.x).to_f64() as f32;
        let dy = (position.y - center.y).to_f64() as f32;

        if dx * dx + dy * dy <= self.control_radius * self.control_radius {
            return Some(SliderPart::Control);
        }

        let track = self.track.bounds;
        let node_height = self.node_size().height;

        if position.x >= track.left()
            && position.x <= track.right()
            && position.y >= px(0.)
            && position.y <= node_height
        {
            return Some(SliderPart::Track);
        }

        None
    }

    pub fn is_dragging(&self) -> bool {
        self.control.drag.is_some()
    }

    pub fn drag(&self) -> Option<&ControlDrag> {
        self.control.drag.as_ref()
    }

    /// Starts dragging the control from `position`. Returns `false` when the
    /// slider is disabled.
    pub fn begin_drag(&mut self, position: Point<Pixels>, now: Instant) -> bool {
        if !self.control.interactive {
            return false;
        }

        let center = self.control_center(now);
        let delta = (position.x - center.x).to_f64() as f32;

        self.track_pressed = false;
        self.control.drag = Some(ControlDrag {
            origin: position,
            delta,
        });

        true
    }

    /// Moves a held control so the pointer keeps its offset from the
    /// control's center. Returns the new value, or `None` when idle.
    pub fn drag_to(&mut self, x: f32) -> Option<f32> {
        let delta = self.control.drag?.delta;

        self.value = self.pixel_to_value(x - delta - self.control_radius);
        self.tweens.cancel(TweenKey::ControlX);
        self.draw();

        Some(self.value)
    }

    /// Releases the control. Returns the finished drag, or `None` when idle.
    pub fn end_drag(&mut self) -> Option<ControlDrag> {
        self.control.drag.take()
    }

    pub fn is_track_pressed(&self) -> bool {
        self.track_pressed
    }

    pub fn press_track(&mut self) -> bool {
        if !self.track.interactive || self.is_dragging() {
            return false;
        }

        self.track_pressed = true;
        true
    }

    /// Completes a click on the track, jumping the value to `position`.
    /// Returns the new value, or `None` if the press never started here.
    pub fn release_track(&mut self, position: Point<Pixels>, now: Instant) -> Option<f32> {
        if !std::mem::take(&mut self.track_pressed) || self.is_dragging() {
            return None;
        }

        if self.hit_test(position, now).is_none() {
            return None;
        }

        let x = (position.x - self.track.bounds.left()).to_f64() as f32;
        self.set_value(self.pixel_to_value(x), now);

        Some(self.value)
    }

    pub fn cancel_track_press(&mut self) {
        self.track_pressed = false;
    }

    pub fn is_track_hovered(&self) -> bool {
        self.track_hovered
    }

    /// Fades the control between its idle and hover opacity.
    pub fn set_track_hovered(&mut self, hovered: bool, now: Instant) -> bool {
        let hovered = hovered && self.track.interactive;

        if hovered == self.track_hovered {
            return false;
        }

        let from = self.control_alpha(now);
        let to = if hovered {
            CONTROL_HOVER_ALPHA
        } else {
            CONTROL_IDLE_ALPHA
        };

        self.track_hovered = hovered;
        self.control.alpha = to;
        self.tweens
            .start(TweenKey::ControlAlpha, from, to, self.animation_duration, now);

        true
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.tweens.is_animating(now)
    }

    /// Drops finished tweens.
    pub fn settle(&mut self, now: Instant) {
        self.tweens.settle(now);
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.) } else { 0. }
}

/// Clamps into `[min, max]`, mapping NaN to `min`.
fn clamp_or(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn model(options: SliderOptions) -> SliderModel {
        SliderModel::new(&options, &Theme::dark())
    }

    fn at(x: f32, y: f32) -> Point<Pixels> {
        point(px(x), px(y))
    }

    #[test]
    fn test_defaults() {
        let slider = model(SliderOptions::default());

        assert_eq!(slider.width(), 250.);
        assert_eq!(slider.height(), 2.);
        assert_eq!(slider.control_radius(), 16.);
        assert_eq!(slider.track_radius(), 1.);
        assert_eq!((slider.min(), slider.max()), (0., 100.));
        assert_eq!(slider.value(), 0.);
        assert!(!slider.disabled());
        assert_eq!(slider.alpha(), 1.);
        assert_eq!(slider.node_size(), size(px(282.), px(32.)));
    }

    #[test]
    fn test_styles_fall_back_to_theme() {
        let theme = Theme::light();
        let slider = SliderModel::new(
            &SliderOptions {
                control_fill: Some(theme.colors.primary),
                stroke_width: Some(4.),
                ..Default::default()
            },
            &theme,
        );

        assert_eq!(slider.track().fill, theme.colors.fill);
        assert_eq!(slider.track().stroke, theme.colors.stroke);
        assert_eq!(slider.track().stroke_width, px(4.));
        assert_eq!(slider.control().fill, theme.colors.primary);
        assert_eq!(slider.control().stroke_width, theme.colors.stroke_width);
        assert_eq!(slider.animation_duration(), theme.durations.fast);
    }

    #[test]
    fn test_round_trip() {
        let slider = model(SliderOptions::new().range(-1000., 2000.));
        let mut rng = rand::rng();

        for _ in 0..500 {
            let value = rng.random_range(-1000.0..=2000.0f32);
            let back = slider.pixel_to_value(slider.value_to_pixel(value));
            assert!((back - value).abs() < 1e-2, "{value} came back as {back}");

            let pixel = rng.random_range(0.0..=250.0f32);
            let back = slider.value_to_pixel(slider.pixel_to_value(pixel));
            assert!((back - pixel).abs() < 1e-3, "{pixel} came back as {back}");
        }
    }

    #[test]
    fn test_pixels_outside_track_clamp_to_range() {
        let slider = model(SliderOptions::new().range(-5., 5.));

        assert_eq!(slider.pixel_to_value(-0.01), -5.);
        assert_eq!(slider.pixel_to_value(-1000.), -5.);
        assert_eq!(slider.pixel_to_value(250.01), 5.);
        assert_eq!(slider.pixel_to_value(f32::INFINITY), 5.);
        assert_eq!(slider.value_to_pixel(-50.), 0.);
        assert_eq!(slider.value_to_pixel(50.), 250.);
    }

    #[test]
    fn test_value_stays_in_range() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::new().range(10., 20.).value(99.));
        assert_eq!(slider.value(), 20.);

        let mut rng = rand::rng();
        for _ in 0..200 {
            slider.set_value(rng.random_range(-100.0..100.0f32), now);
            assert!((10.0..=20.0).contains(&slider.raw_value()));
        }

        slider.set_value(f32::NAN, now);
        assert_eq!(slider.value(), 10.);
    }

    #[test]
    fn test_height_never_exceeds_width() {
        let slider = model(SliderOptions::new().size(20., 50.));
        assert_eq!(slider.height(), 20.);

        let slider = model(SliderOptions::new().size(-5., 3.));
        assert_eq!(slider.width(), 0.);
        assert_eq!(slider.height(), 0.);
        assert_eq!(slider.pixel_to_value(10.), slider.min());
    }

    #[test]
    fn test_degenerate_ranges() {
        let slider = model(SliderOptions::new().range(50., 10.).value(30.));
        assert_eq!((slider.min(), slider.max()), (10., 50.));
        assert_eq!(slider.value(), 30.);

        let slider = model(SliderOptions::new().range(7., 7.).value(100.));
        assert_eq!(slider.value(), 7.);
        assert_eq!(slider.value_to_pixel(7.), 0.);
        assert_eq!(slider.pixel_to_value(125.), 7.);
    }

    #[test]
    fn test_disabled_construction() {
        let slider = model(
            SliderOptions::new()
                .range(-1000., 2000.)
                .value(300.)
                .disabled(true),
        );

        assert_eq!(slider.value(), 300.);
        assert!(slider.disabled());
        assert!(!slider.is_interactive());
        assert!(!slider.track().interactive);
        assert!(!slider.control().interactive);
        assert_eq!(slider.alpha(), DISABLED_ALPHA);
    }

    #[test]
    fn test_toggle_disabled() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::default());

        assert!(slider.begin_drag(slider.control_center(now), now));
        assert!(slider.set_track_hovered(true, now));

        slider.set_disabled(true);
        assert!(slider.disabled());
        assert!(!slider.track().interactive);
        assert!(!slider.control().interactive);
        assert!(!slider.is_dragging());
        assert!(!slider.is_track_hovered());
        assert_eq!(slider.alpha(), 0.5);
        assert!(!slider.begin_drag(slider.control_center(now), now));
        assert!(!slider.press_track());

        slider.set_disabled(false);
        assert!(!slider.disabled());
        assert!(slider.track().interactive);
        assert!(slider.control().interactive);
        assert_eq!(slider.alpha(), 1.);
    }

    #[test]
    fn test_initial_value_is_kept() {
        let slider = model(SliderOptions::new().value(85.));
        assert_eq!(slider.value(), 85.);
    }

    #[test]
    fn test_value_getter_rounds() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::default());

        slider.set_value(41.6, now);
        assert_eq!(slider.value(), 42.);
        assert_eq!(slider.raw_value(), 41.6);
    }

    #[test]
    fn test_drag_keeps_pointer_offset() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::default());

        let center = slider.control_center(now);
        assert_eq!(slider.hit_test(center, now), Some(SliderPart::Control));

        let grab = point(center.x + px(5.), center.y);
        assert!(slider.begin_drag(grab, now));
        assert_eq!(slider.drag().map(|drag| drag.delta), Some(5.));

        let expected = slider.pixel_to_value(50. - 5. - 16.).round();
        assert_eq!(slider.drag_to(50.).map(f32::round), Some(expected));
        assert_eq!(slider.value(), expected);
        assert_eq!(slider.value(), 12.);

        // The control follows immediately, without a tween.
        assert!(!slider.is_animating(now));
        let center_x = slider.control_center(now).x.to_f64() as f32;
        assert!((center_x - 45.).abs() < 1e-3, "control center was {center_x}");
    }

    #[test]
    fn test_drag_clamps_past_the_ends() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::new().value(50.));

        assert!(slider.begin_drag(slider.control_center(now), now));
        assert_eq!(slider.drag_to(-400.), Some(0.));
        assert_eq!(slider.drag_to(4000.), Some(100.));
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::default());

        assert!(slider.end_drag().is_none());
        assert_eq!(slider.drag_to(100.), None);

        slider.begin_drag(slider.control_center(now), now);
        assert!(slider.end_drag().is_some());
        assert!(slider.end_drag().is_none());
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_track_click_jumps_with_animation() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::default());

        // 16px inset plus 125px along a 250px track is the middle.
        let position = at(16. + 125., 16.);
        assert_eq!(slider.hit_test(position, now), Some(SliderPart::Track));

        assert!(slider.press_track());
        assert_eq!(slider.release_track(position, now), Some(50.));
        assert_eq!(slider.value(), 50.);

        assert!(slider.is_animating(now));
        assert_eq!(slider.control_offset(now), 0.);

        let done = now + slider.animation_duration();
        assert!(!slider.is_animating(done));
        assert_eq!(slider.control_offset(done), 125.);
        assert_eq!(slider.control().center.x, px(16. + 125.));
    }

    #[test]
    fn test_track_release_without_press_is_ignored() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::default());

        assert_eq!(slider.release_track(at(100., 16.), now), None);

        slider.press_track();
        slider.cancel_track_press();
        assert_eq!(slider.release_track(at(100., 16.), now), None);

        slider.press_track();
        assert_eq!(slider.release_track(at(100., 500.), now), None);
        assert_eq!(slider.value(), 0.);
    }

    #[test]
    fn test_set_value_animates_and_retargets() {
        let now = Instant::now();
        let fast = Theme::dark().durations.fast;
        let mut slider = model(SliderOptions::default());

        slider.set_value(100., now);
        assert_eq!(slider.value(), 100.);
        assert_eq!(slider.control_offset(now), 0.);

        let halfway = now + fast / 2;
        let current = slider.control_offset(halfway);
        assert!(current > 0. && current < 250.);

        slider.set_value(0., halfway);
        assert_eq!(slider.control_offset(halfway), current);
        assert_eq!(slider.control_offset(halfway + fast), 0.);

        slider.settle(halfway + fast);
        assert!(!slider.is_animating(halfway + fast));
    }

    #[test]
    fn test_non_finite_bounds_fall_back() {
        let now = Instant::now();

        let mut slider = model(SliderOptions::new().range(f32::NAN, 50.).value(20.));
        assert_eq!((slider.min(), slider.max()), (0., 50.));
        assert_eq!(slider.value(), 20.);
        slider.set_value(f32::NAN, now);
        assert_eq!(slider.value(), 0.);

        let slider = model(SliderOptions::new().range(10., f32::NAN));
        assert_eq!((slider.min(), slider.max()), (10., 100.));

        let slider = model(SliderOptions::new().range(f32::NAN, -20.));
        assert_eq!((slider.min(), slider.max()), (-20., 0.));

        let slider = model(SliderOptions::new().range(0., f32::INFINITY).value(40.));
        assert_eq!((slider.min(), slider.max()), (0., 100.));
        assert_eq!(slider.value(), 40.);
        assert_eq!(slider.pixel_to_value(0.), 0.);
    }

    #[test]
    fn test_extreme_range_keeps_value_in_bounds() {
        let slider = model(SliderOptions::new().range(-f32::MAX, f32::MAX));

        for pixel in [0., 125., 250.] {
            let value = slider.pixel_to_value(pixel);
            assert!(!value.is_nan(), "pixel {pixel} gave NaN");
            assert!((slider.min()..=slider.max()).contains(&value));
        }

        let pixel = slider.value_to_pixel(0.);
        assert!((0.0..=250.0).contains(&pixel));
    }

    #[test]
    fn test_set_value_back_to_displayed_position_stops_tween() {
        let now = Instant::now();
        let fast = Theme::dark().durations.fast;
        let mut slider = model(SliderOptions::default());

        slider.set_value(100., now);
        slider.set_value(0., now);

        assert_eq!(slider.value(), 0.);
        assert!(!slider.is_animating(now));
        assert_eq!(slider.control_offset(now + fast / 2), 0.);
        assert_eq!(slider.control_offset(now + fast), 0.);
    }

    #[test]
    fn test_hover_fades_control() {
        let now = Instant::now();
        let mut slider = model(SliderOptions::default());

        assert_eq!(slider.control_alpha(now), CONTROL_IDLE_ALPHA);
        assert!(slider.set_track_hovered(true, now));
        assert!(!slider.set_track_hovered(true, now));

        let done = now + slider.animation_duration();
        assert_eq!(slider.control_alpha(done), CONTROL_HOVER_ALPHA);

        assert!(slider.set_track_hovered(false, done));
        assert_eq!(slider.control_alpha(done + slider.animation_duration()), CONTROL_IDLE_ALPHA);

        // Hover does not change the value or its position.
        assert_eq!(slider.value(), 0.);
        assert_eq!(slider.control_offset(done), 0.);
    }

    #[test]
    fn test_hide_and_show_reset_alphas() {
        let mut slider = model(SliderOptions {
            fill_alpha: Some(0.3),
            control_stroke_alpha: Some(0.6),
            ..Default::default()
        });

        slider.hide();
        assert_eq!(slider.track().fill_alpha, 0.);
        assert_eq!(slider.track().stroke_alpha, 0.);
        assert_eq!(slider.control().fill_alpha, 0.);
        assert_eq!(slider.control().stroke_alpha, 0.);

        slider.show();
        assert_eq!(slider.track().fill_alpha, 1.);
        assert_eq!(slider.track().stroke_alpha, 1.);
        assert_eq!(slider.control().fill_alpha, 1.);
        assert_eq!(slider.control().stroke_alpha, 1.);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut slider = model(SliderOptions::new().value(30.).size(200., 8.));

        slider.draw();
        let first = (*slider.track(), *slider.control());
        slider.draw().draw().layout();
        assert_eq!((*slider.track(), *slider.control()), first);

        let track = slider.track();
        assert_eq!(track.corner_radius, px(4.));
        assert_eq!(track.bounds.origin, at(16., 12.));
        assert_eq!(track.bounds.size, size(px(200.), px(8.)));

        let control = slider.control();
        assert_eq!(control.center, at(16. + 60., 16.));
        assert_eq!(control.inner_radius, px(8.));
    }

    #[test]
    fn test_set_position_keeps_shapes() {
        let mut slider = model(SliderOptions::new().value(10.));
        let before = *slider.control();

        slider.set_position(40., 60.);
        assert_eq!((slider.x(), slider.y()), (40., 60.));
        assert_eq!(*slider.control(), before);
    }
}
