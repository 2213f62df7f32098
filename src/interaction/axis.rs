//! Per-axis mapping descriptors

use serde::{Deserialize, Serialize};

/// Scripted property driven by an axis
///
/// The axis value is normalized to `[0, 1]`, rescaled to `[min, max]`, and
/// emitted as a `setPropertyValue` command instead of feeding a motion
/// channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyTarget {
    /// URI of the property to drive
    pub uri: String,
    /// Lower bound of the rescaled output range
    #[serde(default)]
    pub min: f32,
    /// Upper bound of the rescaled output range
    #[serde(default = "default_max")]
    pub max: f32,
    /// Forward the generated command to connected peers
    #[serde(default)]
    pub remote: bool,
}

fn default_max() -> f32 {
    1.0
}

/// Semantic effect of one physical axis
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    /// Axis is unmapped and skipped entirely
    #[default]
    None,
    /// Global rotation, horizontal component
    OrbitX,
    /// Global rotation, vertical component
    OrbitY,
    /// Signed truck movement
    Zoom,
    /// Truck movement toward the focus
    ZoomIn,
    /// Truck movement away from the focus
    ZoomOut,
    LocalRollX,
    LocalRollY,
    GlobalRollX,
    GlobalRollY,
    /// Local rotation, horizontal component
    PanX,
    /// Local rotation, vertical component
    PanY,
    /// Drive a scripted property instead of a motion channel
    Property(PropertyTarget),
}

/// Behaviour switches shared by every axis mapping call
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisOptions {
    /// Negate the value after deadzone filtering
    pub invert: bool,
    /// Remap from `[-1, 1]` to `[0, 1]`
    pub normalize: bool,
    /// Use the frame-to-frame delta as the signal instead of the absolute
    /// position (relative-dial behaviour for analog inputs)
    pub sticky: bool,
    /// Per-axis sensitivity; `0.0` falls back to the group sensitivity
    pub sensitivity: f64,
}

/// Full mapping state of one axis slot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisBinding {
    pub ty: AxisType,
    pub invert: bool,
    pub normalize: bool,
    pub sticky: bool,
    /// Minimum magnitude before the axis contributes
    pub deadzone: f32,
    /// Per-axis sensitivity; `0.0` falls back to the group sensitivity
    pub sensitivity: f64,
}
