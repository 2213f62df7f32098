//! Button command bindings

use serde::{Deserialize, Serialize};

use crate::input::ButtonAction;

/// One command bound to one button/action combination
///
/// A button index can carry any number of bindings at once, e.g. one
/// command fired on press and another on release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonBinding {
    /// Script text fired when the action is active
    pub command: String,
    /// Action the binding listens for
    #[serde(default = "default_action")]
    pub action: ButtonAction,
    /// Forward the command to connected peers
    #[serde(default)]
    pub remote: bool,
    /// Human-readable description for help surfaces
    #[serde(default)]
    pub documentation: String,
}

fn default_action() -> ButtonAction {
    ButtonAction::Press
}
