//! Output-side collaborator contract
//!
//! Generated commands are fire-and-forget strings handed to a sink the host
//! owns, typically the inbox of a script engine. The core guarantees that
//! same-tick submissions arrive in device-then-axis-then-button order;
//! sinks must preserve that order.

/// A command queued for asynchronous execution by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedCommand {
    /// Script text, e.g. `setPropertyValue("scene.earth.opacity", 0.5)`
    pub command: String,
    /// Whether the command should also be forwarded to connected peers
    pub remote: bool,
}

/// Sink accepting generated commands
pub trait CommandSink {
    /// Queue one command for later execution
    fn queue(&mut self, command: String, remote: bool);
}

/// Ordered in-memory command sink
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    commands: Vec<QueuedCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands queued so far, oldest first
    pub fn commands(&self) -> &[QueuedCommand] {
        &self.commands
    }

    /// Take all queued commands, leaving the queue empty
    pub fn drain(&mut self) -> Vec<QueuedCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CommandSink for CommandQueue {
    fn queue(&mut self, command: String, remote: bool) {
        self.commands.push(QueuedCommand { command, remote });
    }
}
