//! Path to command dispatch
//!
//! Paths are matched exactly against a per-mode table, so a path that merely
//! contains a command name (`/?next=/alarm`) is not a command.

use crate::{
    config::PanelMode,
    http::{HttpMethod, RequestLine},
    state::Channel,
};

/// State transition requested by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Raise a channel by one step.
    Brighten(Channel),
    /// Lower a channel by one step.
    Dim(Channel),
    /// Advance a channel's oscillating ramp.
    Ramp(Channel),
    /// Drive the status indicator LED.
    StatusLed(bool),
    /// Sound the alarm beep sequence.
    Alarm,
    /// Arm the auto-shutoff timer.
    ArmTimer,
    /// Play the party melody.
    Melody,
    /// Set every channel to the night level.
    NightMode,
}

/// One entry of a dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    /// Button caption on the control page.
    pub label: &'static str,
    pub command: Command,
}

const fn route(path: &'static str, label: &'static str, command: Command) -> Route {
    Route {
        path,
        label,
        command,
    }
}

pub const DIRECTIONAL_ROUTES: &[Route] = &[
    route("/blue_up", "Blue +", Command::Brighten(Channel::Blue)),
    route("/blue_down", "Blue -", Command::Dim(Channel::Blue)),
    route("/green_up", "Green +", Command::Brighten(Channel::Green)),
    route("/green_down", "Green -", Command::Dim(Channel::Green)),
    route("/red_up", "Red +", Command::Brighten(Channel::Red)),
    route("/red_down", "Red -", Command::Dim(Channel::Red)),
    route("/on", "Indicator on", Command::StatusLed(true)),
    route("/off", "Indicator off", Command::StatusLed(false)),
    route("/alarm", "Sound alarm", Command::Alarm),
];

pub const OSCILLATING_ROUTES: &[Route] = &[
    route("/blue", "Blue", Command::Ramp(Channel::Blue)),
    route("/green", "Green", Command::Ramp(Channel::Green)),
    route("/red", "Red", Command::Ramp(Channel::Red)),
    route("/alarm", "Sound alarm", Command::Alarm),
    route("/timer", "Timer", Command::ArmTimer),
    route("/festa", "Party mode", Command::Melody),
    route("/noturno", "Night mode", Command::NightMode),
];

/// Dispatch table of `mode`.
pub const fn routes(mode: PanelMode) -> &'static [Route] {
    match mode {
        PanelMode::Directional => DIRECTIONAL_ROUTES,
        PanelMode::Oscillating => OSCILLATING_ROUTES,
    }
}

/// Look up the command for a request. Only `GET` requests carry commands.
pub fn resolve(mode: PanelMode, request: &RequestLine) -> Option<Command> {
    if request.method != HttpMethod::Get {
        return None;
    }
    routes(mode)
        .iter()
        .find(|route| route.path == request.path.as_str())
        .map(|route| route.command)
}
