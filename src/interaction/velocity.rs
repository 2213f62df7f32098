//! Time-aware velocity smoothing
//!
//! [`SmoothedVelocity`] carries a channel's velocity across ticks. A tick
//! either blends it toward fresh input or decelerates it toward zero; both
//! use the factor `min(scale_factor * dt, 1)` so a fixed time step
//! converges at a predictable rate regardless of frame rate. The same
//! accumulator backs every interaction state that needs set-or-decay
//! semantics, not only the joystick channels.

use glam::DVec2;

/// Magnitude below which a decelerating velocity snaps to exactly zero
const STOP_EPSILON: f64 = 1e-6;

/// Smoothed 2D velocity accumulator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedVelocity {
    current: DVec2,
    scale_factor: f64,
}

impl SmoothedVelocity {
    /// Create a zeroed accumulator converging at `scale_factor` per second
    pub fn new(scale_factor: f64) -> Self {
        Self {
            current: DVec2::ZERO,
            scale_factor,
        }
    }

    /// Current velocity
    pub fn get(&self) -> DVec2 {
        self.current
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Blend the current velocity toward `target` over `dt` seconds
    ///
    /// The blend factor is capped at 1, so under steady input the velocity
    /// approaches the target without ever overshooting it.
    pub fn set(&mut self, target: DVec2, dt: f64) {
        let blend = self.blend(dt);
        self.current += (target - self.current) * blend;
    }

    /// Shrink the current velocity toward zero over `dt` seconds
    ///
    /// Once the magnitude drops below the stop threshold the velocity
    /// becomes exactly zero, so sustained zero input halts in a bounded
    /// number of ticks rather than decaying forever.
    pub fn decelerate(&mut self, dt: f64) {
        let blend = self.blend(dt);
        self.current *= 1.0 - blend;
        if self.current.length_squared() < STOP_EPSILON * STOP_EPSILON {
            self.current = DVec2::ZERO;
        }
    }

    /// Apply one tick: fresh input sets, absent input decelerates
    pub fn step(&mut self, input: Option<DVec2>, dt: f64) {
        match input {
            Some(target) => self.set(target, dt),
            None => self.decelerate(dt),
        }
    }

    fn blend(&self, dt: f64) -> f64 {
        (self.scale_factor * dt).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_converges_without_overshoot() {
        let mut velocity = SmoothedVelocity::new(4.0);
        let target = DVec2::new(1.0, -2.0);

        let mut previous_distance = f64::INFINITY;
        for _ in 0..200 {
            velocity.set(target, 0.016);
            let distance = (target - velocity.get()).length();
            assert!(distance <= previous_distance, "distance to target grew");
            assert!(velocity.get().x <= target.x + 1e-12);
            assert!(velocity.get().y >= target.y - 1e-12);
            previous_distance = distance;
        }
        assert!(previous_distance < 1e-3);
    }

    #[test]
    fn test_saturated_blend_reaches_target_in_one_tick() {
        let mut velocity = SmoothedVelocity::new(1.0);
        velocity.set(DVec2::new(0.5, 0.25), 1.0);
        assert_eq!(velocity.get(), DVec2::new(0.5, 0.25));
    }

    #[test]
    fn test_decelerate_reaches_exact_zero_in_bounded_ticks() {
        let mut velocity = SmoothedVelocity::new(0.5);
        velocity.set(DVec2::new(1.0, 1.0), 2.0);
        assert_ne!(velocity.get(), DVec2::ZERO);

        let mut previous_magnitude = velocity.get().length();
        let mut ticks_to_zero = None;
        for tick in 0..60 {
            velocity.decelerate(1.0);
            let magnitude = velocity.get().length();
            assert!(magnitude <= previous_magnitude, "magnitude grew during decay");
            previous_magnitude = magnitude;
            if velocity.get() == DVec2::ZERO {
                ticks_to_zero = Some(tick);
                break;
            }
        }
        assert!(ticks_to_zero.is_some(), "velocity never reached exact zero");
    }

    #[test]
    fn test_step_dispatches_set_or_decay() {
        let mut velocity = SmoothedVelocity::new(1.0);
        velocity.step(Some(DVec2::X), 1.0);
        assert_eq!(velocity.get(), DVec2::X);

        velocity.step(None, 1.0);
        assert_eq!(velocity.get(), DVec2::ZERO);
    }
}
