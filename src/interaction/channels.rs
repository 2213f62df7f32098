//! The five aggregate motion channels

use glam::DVec2;

use super::velocity::SmoothedVelocity;

/// Velocity state for the five camera motion channels
///
/// Each tick a channel is either set toward fresh aggregated input or
/// decelerated, never both. Velocities persist across ticks and are never
/// reset instantaneously after construction. Truck movement is logically
/// scalar but stored 2D for uniformity; both components carry the same
/// value.
#[derive(Debug, Clone)]
pub struct CameraChannels {
    pub(crate) global_rotation: SmoothedVelocity,
    pub(crate) truck: SmoothedVelocity,
    pub(crate) local_roll: SmoothedVelocity,
    pub(crate) global_roll: SmoothedVelocity,
    pub(crate) local_rotation: SmoothedVelocity,
}

impl CameraChannels {
    pub fn new(velocity_scale_factor: f64) -> Self {
        Self {
            global_rotation: SmoothedVelocity::new(velocity_scale_factor),
            truck: SmoothedVelocity::new(velocity_scale_factor),
            local_roll: SmoothedVelocity::new(velocity_scale_factor),
            global_roll: SmoothedVelocity::new(velocity_scale_factor),
            local_rotation: SmoothedVelocity::new(velocity_scale_factor),
        }
    }

    /// Retune the smoothing rate of all five channels
    pub fn set_velocity_scale_factor(&mut self, velocity_scale_factor: f64) {
        self.global_rotation.set_scale_factor(velocity_scale_factor);
        self.truck.set_scale_factor(velocity_scale_factor);
        self.local_roll.set_scale_factor(velocity_scale_factor);
        self.global_roll.set_scale_factor(velocity_scale_factor);
        self.local_rotation.set_scale_factor(velocity_scale_factor);
    }

    pub fn global_rotation_velocity(&self) -> DVec2 {
        self.global_rotation.get()
    }

    pub fn truck_velocity(&self) -> DVec2 {
        self.truck.get()
    }

    pub fn local_roll_velocity(&self) -> DVec2 {
        self.local_roll.get()
    }

    pub fn global_roll_velocity(&self) -> DVec2 {
        self.global_roll.get()
    }

    pub fn local_rotation_velocity(&self) -> DVec2 {
        self.local_rotation.get()
    }
}
