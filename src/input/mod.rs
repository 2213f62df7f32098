//! Input-side collaborator contract
//!
//! The core never talks to hardware. Once per tick the host hands it a
//! read-only snapshot of every connected device's axis and button state;
//! this module defines that contract plus [`SnapshotTable`], a concrete
//! table-backed snapshot used by hosts, the simulator, and tests.

use serde::{Deserialize, Serialize};

/// Number of axis slots tracked per device
pub const MAX_AXES: usize = 8;

/// Number of button slots tracked per device
pub const MAX_BUTTONS: usize = 32;

/// Upper bound on simultaneously configured devices
pub const MAX_NUM_JOYSTICKS: usize = 8;

/// Action state of a button within the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    /// Button is at rest
    #[default]
    Idle,
    /// Button went down this tick
    Press,
    /// Button is held down
    Hold,
    /// Button went up this tick
    Release,
}

/// Read-only view of all connected devices for one tick
///
/// Axis values are reported in `[-1, 1]`. Devices are visited in the order
/// returned by [`device_names`](InputSnapshot::device_names); within one
/// tick that order determines the order of queued commands.
pub trait InputSnapshot {
    /// Names of every connected device, in a stable order
    fn device_names(&self) -> Vec<&str>;

    /// Raw value of `axis` on `device`; `0.0` when either is unknown
    fn axis(&self, device: &str, axis: usize) -> f32;

    /// Whether `action` is currently active for `button` on `device`
    fn button(&self, device: &str, button: usize, action: ButtonAction) -> bool;
}

/// Per-device slice of a [`SnapshotTable`]
#[derive(Debug, Clone)]
struct DeviceSnapshot {
    name: String,
    axes: [f32; MAX_AXES],
    buttons: [ButtonAction; MAX_BUTTONS],
}

impl DeviceSnapshot {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            axes: [0.0; MAX_AXES],
            buttons: [ButtonAction::Idle; MAX_BUTTONS],
        }
    }
}

/// Table-backed input snapshot
///
/// Hosts that poll hardware themselves fill one of these per tick and pass
/// it to the update loop. Devices appear in insertion order. Out-of-range
/// axis or button indices are ignored on write and read as inactive.
#[derive(Debug, Clone, Default)]
pub struct SnapshotTable {
    devices: Vec<DeviceSnapshot>,
}

impl SnapshotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `device` with all axes centered and all buttons idle
    ///
    /// No-op when the device is already present.
    pub fn add_device(&mut self, device: &str) {
        if self.find(device).is_none() {
            self.devices.push(DeviceSnapshot::new(device));
        }
    }

    /// Record the raw value of one axis, registering the device if needed
    pub fn set_axis(&mut self, device: &str, axis: usize, value: f32) {
        if axis >= MAX_AXES {
            return;
        }
        let slot = self.find_or_add(device);
        self.devices[slot].axes[axis] = value;
    }

    /// Record the action state of one button, registering the device if needed
    pub fn set_button(&mut self, device: &str, button: usize, action: ButtonAction) {
        if button >= MAX_BUTTONS {
            return;
        }
        let slot = self.find_or_add(device);
        self.devices[slot].buttons[button] = action;
    }

    fn find(&self, device: &str) -> Option<usize> {
        self.devices.iter().position(|d| d.name == device)
    }

    fn find_or_add(&mut self, device: &str) -> usize {
        match self.find(device) {
            Some(slot) => slot,
            None => {
                self.devices.push(DeviceSnapshot::new(device));
                self.devices.len() - 1
            }
        }
    }
}

impl InputSnapshot for SnapshotTable {
    fn device_names(&self) -> Vec<&str> {
        self.devices.iter().map(|d| d.name.as_str()).collect()
    }

    fn axis(&self, device: &str, axis: usize) -> f32 {
        if axis >= MAX_AXES {
            return 0.0;
        }
        self.find(device).map_or(0.0, |slot| self.devices[slot].axes[axis])
    }

    fn button(&self, device: &str, button: usize, action: ButtonAction) -> bool {
        if button >= MAX_BUTTONS {
            return false;
        }
        self.find(device)
            .is_some_and(|slot| self.devices[slot].buttons[button] == action)
    }
}
