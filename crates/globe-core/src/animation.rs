//! Small time-based animation primitives.
//!
//! [`Tween`] moves a 2D value to a target over a fixed duration and can be
//! retargeted mid-flight; [`Pulse`] is an endless linear yoyo used to make
//! markers breathe.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    /// No easing; tests use it for exact intermediate values.
    Linear,
    /// Quadratic ease-out (`1 - (1 - t)^2`).
    #[default]
    Power1Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(start: Vec2, duration: f32, ease: Ease) -> Self {
        Self {
            from: start,
            to: start,
            elapsed: duration,
            duration: duration.max(1e-6),
            ease,
        }
    }

    pub fn value(&self) -> Vec2 {
        let t = self.ease.apply(self.elapsed / self.duration);
        self.from.lerp(self.to, t)
    }

    /// True once the value has reached the target.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Restart towards `target` from wherever the value is right now.
    /// Retargeting to the current target leaves the tween untouched.
    pub fn retarget(&mut self, target: Vec2) {
        if target == self.to {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt_sec: f32) -> Vec2 {
        self.elapsed = (self.elapsed + dt_sec.max(0.0)).min(self.duration);
        self.value()
    }
}

/// Linear yoyo between 1.0 and `peak`, repeating forever after `delay`.
#[derive(Clone, Copy, Debug)]
pub struct Pulse {
    pub delay: f32,
    pub half_period: f32,
    pub peak: f32,
}

impl Pulse {
    pub fn value_at(&self, elapsed_sec: f32) -> f32 {
        let t = elapsed_sec - self.delay;
        if t <= 0.0 || self.half_period <= 0.0 {
            return 1.0;
        }
        let cycle = t / self.half_period;
        let phase = cycle.fract();
        let rising = (cycle as u64) % 2 == 0;
        let k = if rising { phase } else { 1.0 - phase };
        1.0 + (self.peak - 1.0) * k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power1_out_is_ahead_of_linear() {
        assert!(Ease::Power1Out.apply(0.5) > Ease::Linear.apply(0.5));
        assert_eq!(Ease::Power1Out.apply(1.0), 1.0);
        assert_eq!(Ease::Power1Out.apply(0.0), 0.0);
    }
}
