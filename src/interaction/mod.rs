//! Joystick camera interaction core
//!
//! Per-device axis and button mapping tables, the order-sensitive axis
//! transform pipeline, and the five smoothed motion channels an external
//! camera integrator consumes.

mod axis;
mod binding;
mod channels;
mod device;
mod joystick;
mod velocity;

pub use axis::{AxisBinding, AxisOptions, AxisType, PropertyTarget};
pub use binding::ButtonBinding;
pub use channels::CameraChannels;
pub use joystick::JoystickInteraction;
pub use velocity::SmoothedVelocity;
