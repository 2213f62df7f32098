//! Declarative mapping profiles
//!
//! A [`MappingProfile`] is the YAML description of every device's axis and
//! button mappings. Hosts deserialize one from a config file or a scripting
//! call and apply it to a [`JoystickInteraction`] in one shot; applying
//! never saves anything back.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::MappingError;
use crate::input::InputSnapshot;
use crate::interaction::{AxisOptions, AxisType, ButtonBinding, JoystickInteraction};

/// Root profile structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingProfile {
    /// Group sensitivity override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<f64>,
    /// Smoothing rate override for all five channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_scale_factor: Option<f64>,
    #[serde(default)]
    pub devices: Vec<DeviceProfile>,
}

/// Mappings for one named device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub name: String,
    #[serde(default)]
    pub axes: Vec<AxisProfile>,
    #[serde(default)]
    pub buttons: Vec<ButtonProfile>,
}

/// One axis slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisProfile {
    pub axis: usize,
    #[serde(rename = "type", default)]
    pub ty: AxisType,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub normalize: bool,
    #[serde(default)]
    pub sticky: bool,
    #[serde(default)]
    pub deadzone: f32,
    #[serde(default)]
    pub sensitivity: f64,
}

/// One button binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonProfile {
    pub button: usize,
    #[serde(flatten)]
    pub binding: ButtonBinding,
}

impl MappingProfile {
    /// Parse a profile from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, MappingError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Apply every mapping in the profile to `interaction`
    ///
    /// The snapshot seeds the sticky caches of newly mapped axes, exactly
    /// as the individual mapping calls do. Stops at the first failing call;
    /// mappings applied up to that point remain in effect.
    pub fn apply(
        &self,
        interaction: &mut JoystickInteraction,
        snapshot: &dyn InputSnapshot,
    ) -> Result<(), MappingError> {
        if let Some(sensitivity) = self.sensitivity {
            interaction.set_sensitivity(sensitivity);
        }
        if let Some(scale_factor) = self.velocity_scale_factor {
            interaction.set_velocity_scale_factor(scale_factor);
        }

        for device in &self.devices {
            for axis in &device.axes {
                let options = AxisOptions {
                    invert: axis.invert,
                    normalize: axis.normalize,
                    sticky: axis.sticky,
                    sensitivity: axis.sensitivity,
                };
                match &axis.ty {
                    AxisType::Property(target) => interaction.set_axis_property(
                        snapshot,
                        &device.name,
                        axis.axis,
                        target.clone(),
                        options,
                    )?,
                    ty => interaction.set_axis_mapping(
                        snapshot,
                        &device.name,
                        axis.axis,
                        ty.clone(),
                        options,
                    )?,
                }
                if axis.deadzone > 0.0 {
                    interaction.set_deadzone(&device.name, axis.axis, axis.deadzone)?;
                }
            }

            for button in &device.buttons {
                interaction.bind_button_command(
                    &device.name,
                    button.button,
                    button.binding.command.clone(),
                    button.binding.action,
                    button.binding.remote,
                    button.binding.documentation.clone(),
                )?;
            }
        }

        info!("applied mapping profile for {} device(s)", self.devices.len());
        Ok(())
    }
}
