//! Per-device mapping state

use std::collections::BTreeMap;

use crate::input::MAX_AXES;

use super::axis::AxisBinding;
use super::binding::ButtonBinding;

/// Mapping tables and sticky cache for one named device
///
/// Records are created lazily on first reference to a device name and live
/// for the lifetime of the owning coordinator. `prev_axis_values` backs
/// sticky axes: it holds the raw value seen on the previous tick so the
/// update loop can hand out frame-to-frame deltas.
#[derive(Debug, Clone)]
pub(crate) struct DeviceState {
    pub(crate) name: String,
    pub(crate) axis_bindings: [AxisBinding; MAX_AXES],
    pub(crate) prev_axis_values: [f32; MAX_AXES],
    /// Multi-valued: every binding registered at a button index fires
    /// independently
    pub(crate) button_bindings: BTreeMap<usize, Vec<ButtonBinding>>,
}

impl DeviceState {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            axis_bindings: Default::default(),
            prev_axis_values: [0.0; MAX_AXES],
            button_bindings: BTreeMap::new(),
        }
    }
}
