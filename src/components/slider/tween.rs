use std::time::{Duration, Instant};

use gpui::ease_out_quint;
use indexmap::IndexMap;

/// A tweened property of one of the slider's shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenKey {
    /// Horizontal offset of the control along the track.
    ControlX,
    /// Opacity of the control, driven by track hover.
    ControlAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Eased progress between 0 and 1.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.;
        }

        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f32();
        let linear = (elapsed / self.duration.as_secs_f32()).clamp(0., 1.);

        (ease_out_quint())(linear).clamp(0., 1.)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    pub fn sample(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }

        self.from + (self.to - self.from) * self.progress(now)
    }
}

/// Running tweens, at most one per key.
///
/// Starting a tween on a key that is already animating replaces it, and the
/// new tween begins from wherever the old one currently is.
#[derive(Debug, Default, Clone)]
pub struct Tweens {
    running: IndexMap<TweenKey, Tween>,
}

impl Tweens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating `key` towards `to`. Returns the tween that was
    /// superseded, if any.
    pub fn start(
        &mut self,
        key: TweenKey,
        from: f32,
        to: f32,
        duration: Duration,
        now: Instant,
    ) -> Option<Tween> {
        let from = self.sample(key, now).unwrap_or(from);

        self.running
            .insert(key, Tween::new(from, to, now, duration))
    }

    pub fn cancel(&mut self, key: TweenKey) -> Option<Tween> {
        self.running.shift_remove(&key)
    }

    pub fn get(&self, key: TweenKey) -> Option<&Tween> {
        self.running.get(&key)
    }

    pub fn sample(&self, key: TweenKey, now: Instant) -> Option<f32> {
        self.running.get(&key).map(|tween| tween.sample(now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.running.values().any(|tween| !tween.is_finished(now))
    }

    /// Drops every finished tween.
    pub fn settle(&mut self, now: Instant) {
        self.running.retain(|_, tween| !tween.is_finished(now));
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }
}
