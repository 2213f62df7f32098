//! Joycam - joystick-to-camera interaction core
//!
//! Converts raw multi-axis, multi-button controller input into smoothed,
//! decelerating camera motion state plus scripted side effects. Once per
//! tick the host hands the core a read-only input snapshot, a command sink,
//! and the elapsed time; the core applies per-device axis and button
//! mappings, aggregates contributions across devices into five motion
//! channels (global rotation, truck, local roll, global roll, local
//! rotation), and drives one velocity accumulator per channel for an
//! external camera integrator to consume.
//!
//! Device polling, rendering, and script execution stay outside; the crate
//! only depends on the [`input::InputSnapshot`] and
//! [`command::CommandSink`] contracts.

pub mod command;
pub mod config;
pub mod error;
pub mod input;
pub mod interaction;

pub use command::{CommandQueue, CommandSink, QueuedCommand};
pub use config::{AxisProfile, ButtonProfile, DeviceProfile, MappingProfile};
pub use error::MappingError;
pub use input::{
    ButtonAction, InputSnapshot, SnapshotTable, MAX_AXES, MAX_BUTTONS, MAX_NUM_JOYSTICKS,
};
pub use interaction::{
    AxisBinding, AxisOptions, AxisType, ButtonBinding, CameraChannels, JoystickInteraction,
    PropertyTarget, SmoothedVelocity,
};
