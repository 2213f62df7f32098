//! Joystick-to-camera coordination
//!
//! [`JoystickInteraction`] owns the bounded device table and the five
//! motion channels. Once per tick the host hands it an input snapshot, a
//! command sink, and the elapsed time; the update loop folds every
//! configured device's axis and button mappings into channel velocity
//! updates and queued commands.
//!
//! The per-axis pipeline is order-sensitive and must stay in this order:
//! sticky delta, deadzone filter, inversion, normalization, property
//! rescale, sensitivity. The sticky cache updates before the deadzone
//! filter so a filtered tick still advances the reference value.

use std::collections::HashMap;

use glam::DVec2;
use tracing::warn;

use crate::command::CommandSink;
use crate::error::MappingError;
use crate::input::{ButtonAction, InputSnapshot, MAX_AXES, MAX_BUTTONS, MAX_NUM_JOYSTICKS};

use super::axis::{AxisBinding, AxisOptions, AxisType, PropertyTarget};
use super::binding::ButtonBinding;
use super::channels::CameraChannels;
use super::device::DeviceState;

/// Aggregated 2D input for one channel over one tick
#[derive(Debug, Clone, Copy, Default)]
struct Contribution {
    touched: bool,
    value: DVec2,
}

impl Contribution {
    fn add_x(&mut self, value: f64) {
        self.touched = true;
        self.value.x += value;
    }

    fn add_y(&mut self, value: f64) {
        self.touched = true;
        self.value.y += value;
    }

    fn input(&self) -> Option<DVec2> {
        self.touched.then_some(self.value)
    }
}

/// Aggregated scalar input for the truck channel over one tick
#[derive(Debug, Clone, Copy, Default)]
struct ScalarContribution {
    touched: bool,
    value: f64,
}

impl ScalarContribution {
    fn add(&mut self, value: f64) {
        self.touched = true;
        self.value += value;
    }

    fn sub(&mut self, value: f64) {
        self.touched = true;
        self.value -= value;
    }

    fn input(&self) -> Option<DVec2> {
        self.touched.then_some(DVec2::splat(self.value))
    }
}

/// Coordinator for per-device mappings and the camera motion channels
#[derive(Debug)]
pub struct JoystickInteraction {
    /// Group sensitivity applied to every axis without its own
    sensitivity: f64,
    devices: Vec<DeviceState>,
    /// Name -> slot in `devices`
    slots: HashMap<String, usize>,
    channels: CameraChannels,
}

impl JoystickInteraction {
    /// Create a coordinator with no configured devices
    ///
    /// `sensitivity` scales every axis contribution; `velocity_scale_factor`
    /// tunes how fast channel velocities chase their targets and decay.
    pub fn new(sensitivity: f64, velocity_scale_factor: f64) -> Self {
        Self {
            sensitivity,
            devices: Vec::new(),
            slots: HashMap::new(),
            channels: CameraChannels::new(velocity_scale_factor),
        }
    }

    /// The five motion channels, read by the camera integrator once per tick
    pub fn channels(&self) -> &CameraChannels {
        &self.channels
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity;
    }

    pub fn set_velocity_scale_factor(&mut self, velocity_scale_factor: f64) {
        self.channels.set_velocity_scale_factor(velocity_scale_factor);
    }

    /// Names of every configured device, in registration order
    pub fn device_names(&self) -> Vec<&str> {
        self.devices.iter().map(|d| d.name.as_str()).collect()
    }

    /// Fold one tick of input into the motion channels and the command sink
    ///
    /// Devices absent from the mapping table are skipped silently. Each
    /// channel receives exactly one velocity update per tick: a set toward
    /// the summed contributions when any device touched it, a deceleration
    /// otherwise.
    pub fn update(
        &mut self,
        snapshot: &dyn InputSnapshot,
        sink: &mut dyn CommandSink,
        delta_time: f64,
    ) {
        let mut global_rotation = Contribution::default();
        let mut truck = ScalarContribution::default();
        let mut local_roll = Contribution::default();
        let mut global_roll = Contribution::default();
        let mut local_rotation = Contribution::default();

        for name in snapshot.device_names() {
            if name.is_empty() {
                continue;
            }
            let Some(&slot) = self.slots.get(name) else {
                continue;
            };
            let device = &mut self.devices[slot];

            for axis in 0..MAX_AXES {
                if device.axis_bindings[axis].ty == AxisType::None {
                    continue;
                }

                let raw = snapshot.axis(name, axis);
                let mut value = raw;

                let binding = &device.axis_bindings[axis];
                if binding.sticky {
                    value = raw - device.prev_axis_values[axis];
                    device.prev_axis_values[axis] = raw;
                }

                if value.abs() <= binding.deadzone {
                    continue;
                }

                if binding.invert {
                    value = -value;
                }

                let is_property = matches!(binding.ty, AxisType::Property(_));
                if binding.normalize || is_property {
                    value = (value + 1.0) / 2.0;
                }

                if let AxisType::Property(target) = &binding.ty {
                    value = value * (target.max - target.min) + target.min;
                }

                let scaled = if binding.sensitivity.abs() > f64::EPSILON {
                    f64::from(value) * binding.sensitivity * self.sensitivity
                } else {
                    f64::from(value) * self.sensitivity
                };

                match &binding.ty {
                    AxisType::None => {}
                    AxisType::OrbitX => global_rotation.add_x(scaled),
                    AxisType::OrbitY => global_rotation.add_y(scaled),
                    AxisType::Zoom | AxisType::ZoomIn => truck.add(scaled),
                    AxisType::ZoomOut => truck.sub(scaled),
                    AxisType::LocalRollX => local_roll.add_x(scaled),
                    AxisType::LocalRollY => local_roll.add_y(scaled),
                    AxisType::GlobalRollX => global_roll.add_x(scaled),
                    AxisType::GlobalRollY => global_roll.add_y(scaled),
                    AxisType::PanX => local_rotation.add_x(scaled),
                    AxisType::PanY => local_rotation.add_y(scaled),
                    AxisType::Property(target) => {
                        let command = format!("setPropertyValue(\"{}\", {})", target.uri, scaled);
                        sink.queue(command, target.remote);
                    }
                }
            }

            for (button, bindings) in &device.button_bindings {
                for binding in bindings {
                    if snapshot.button(name, *button, binding.action) {
                        sink.queue(binding.command.clone(), binding.remote);
                    }
                }
            }
        }

        self.channels.global_rotation.step(global_rotation.input(), delta_time);
        self.channels.truck.step(truck.input(), delta_time);
        self.channels.local_roll.step(local_roll.input(), delta_time);
        self.channels.global_roll.step(global_roll.input(), delta_time);
        self.channels.local_rotation.step(local_rotation.input(), delta_time);
    }

    /// Map one axis slot to a motion channel
    ///
    /// Creates the device record if absent and re-seeds the sticky cache
    /// from the snapshot so the next tick does not see a spurious jump.
    ///
    /// # Panics
    /// When `axis >= MAX_AXES`; an out-of-range slot is a programming
    /// error, not a runtime condition.
    pub fn set_axis_mapping(
        &mut self,
        snapshot: &dyn InputSnapshot,
        device: &str,
        axis: usize,
        ty: AxisType,
        options: AxisOptions,
    ) -> Result<(), MappingError> {
        assert!(axis < MAX_AXES, "axis {axis} out of range (max {MAX_AXES})");

        let state = self.find_or_add(device)?;
        let binding = &mut state.axis_bindings[axis];
        binding.ty = ty;
        binding.invert = options.invert;
        binding.normalize = options.normalize;
        binding.sticky = options.sticky;
        binding.sensitivity = options.sensitivity;

        state.prev_axis_values[axis] = snapshot.axis(device, axis);
        Ok(())
    }

    /// Map one axis slot to a scripted property
    ///
    /// # Panics
    /// When `axis >= MAX_AXES`.
    pub fn set_axis_property(
        &mut self,
        snapshot: &dyn InputSnapshot,
        device: &str,
        axis: usize,
        target: PropertyTarget,
        options: AxisOptions,
    ) -> Result<(), MappingError> {
        assert!(axis < MAX_AXES, "axis {axis} out of range (max {MAX_AXES})");

        let state = self.find_or_add(device)?;
        let binding = &mut state.axis_bindings[axis];
        binding.ty = AxisType::Property(target);
        binding.invert = options.invert;
        binding.sticky = options.sticky;
        binding.sensitivity = options.sensitivity;

        state.prev_axis_values[axis] = snapshot.axis(device, axis);
        Ok(())
    }

    /// Current mapping of one axis slot; default for unknown devices
    ///
    /// # Panics
    /// When `axis >= MAX_AXES`.
    pub fn axis_mapping(&self, device: &str, axis: usize) -> AxisBinding {
        assert!(axis < MAX_AXES, "axis {axis} out of range (max {MAX_AXES})");
        self.device(device)
            .map(|state| state.axis_bindings[axis].clone())
            .unwrap_or_default()
    }

    /// Set the deadzone of one axis slot, creating the device if needed
    ///
    /// # Panics
    /// When `axis >= MAX_AXES`.
    pub fn set_deadzone(
        &mut self,
        device: &str,
        axis: usize,
        deadzone: f32,
    ) -> Result<(), MappingError> {
        assert!(axis < MAX_AXES, "axis {axis} out of range (max {MAX_AXES})");

        let state = self.find_or_add(device)?;
        state.axis_bindings[axis].deadzone = deadzone;
        Ok(())
    }

    /// Deadzone of one axis slot; `0.0` for unknown devices
    ///
    /// # Panics
    /// When `axis >= MAX_AXES`.
    pub fn deadzone(&self, device: &str, axis: usize) -> f32 {
        assert!(axis < MAX_AXES, "axis {axis} out of range (max {MAX_AXES})");
        self.device(device)
            .map_or(0.0, |state| state.axis_bindings[axis].deadzone)
    }

    /// Append a command binding at a button index
    ///
    /// Existing bindings at the same index are kept; every binding whose
    /// action matches fires independently.
    ///
    /// # Panics
    /// When `button >= MAX_BUTTONS`.
    pub fn bind_button_command(
        &mut self,
        device: &str,
        button: usize,
        command: impl Into<String>,
        action: ButtonAction,
        remote: bool,
        documentation: impl Into<String>,
    ) -> Result<(), MappingError> {
        assert!(button < MAX_BUTTONS, "button {button} out of range (max {MAX_BUTTONS})");

        let state = self.find_or_add(device)?;
        state.button_bindings.entry(button).or_default().push(ButtonBinding {
            command: command.into(),
            action,
            remote,
            documentation: documentation.into(),
        });
        Ok(())
    }

    /// Remove every binding at a button index; no-op when unknown
    pub fn clear_button_command(&mut self, device: &str, button: usize) {
        if let Some(&slot) = self.slots.get(device) {
            self.devices[slot].button_bindings.remove(&button);
        }
    }

    /// Commands currently bound at a button index, in binding order
    pub fn button_commands(&self, device: &str, button: usize) -> Vec<String> {
        self.device(device)
            .and_then(|state| state.button_bindings.get(&button))
            .map(|bindings| bindings.iter().map(|b| b.command.clone()).collect())
            .unwrap_or_default()
    }

    /// Full binding records at a button index, including documentation
    pub fn button_bindings(&self, device: &str, button: usize) -> Vec<ButtonBinding> {
        self.device(device)
            .and_then(|state| state.button_bindings.get(&button))
            .cloned()
            .unwrap_or_default()
    }

    fn device(&self, name: &str) -> Option<&DeviceState> {
        let state = self.slots.get(name).map(|&slot| &self.devices[slot]);
        if state.is_none() {
            warn!("no joystick mapping state for '{}'", name);
        }
        state
    }

    fn find_or_add(&mut self, name: &str) -> Result<&mut DeviceState, MappingError> {
        if let Some(&slot) = self.slots.get(name) {
            return Ok(&mut self.devices[slot]);
        }
        if self.devices.len() >= MAX_NUM_JOYSTICKS {
            warn!(
                "cannot add joystick '{}': at most {} joysticks are supported",
                name, MAX_NUM_JOYSTICKS
            );
            return Err(MappingError::CapacityExceeded {
                name: name.to_string(),
                max: MAX_NUM_JOYSTICKS,
            });
        }
        let slot = self.devices.len();
        self.devices.push(DeviceState::new(name));
        self.slots.insert(name.to_string(), slot);
        Ok(&mut self.devices[slot])
    }
}
