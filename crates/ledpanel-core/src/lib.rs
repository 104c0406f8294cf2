#![cfg_attr(not(test), no_std)]

//! LED control panel core
//!
//! Board-independent part of the control panel firmware:
//! - `state` - brightness levels, ramp directions and indicator flags
//! - `timer` - one-shot auto-shutoff deadline
//! - `routes` - request path to [`Command`] dispatch tables
//! - `http` - request line tokenizer, response headers and connection handling
//! - `page` - HTML control page renderer
//! - `ports` - hardware traits implemented by the board crate
//! - `pwm` - duty-cycle adapter over `embedded-hal` PWM channels
//! - `panel` - the [`Panel`] tying state, drivers and rendering together
//!
//! Nothing here touches a peripheral directly, so the whole crate builds and
//! tests on the host.

pub mod config;
pub mod http;
pub mod page;
pub mod panel;
pub mod ports;
pub mod pwm;
pub mod routes;
pub mod sound;
pub mod state;
pub mod temperature;
pub mod timer;

pub use config::{PanelConfig, PanelMode};
pub use panel::Panel;
pub use ports::{Buzzer, LevelOutput, Thermometer};
pub use pwm::PwmLeds;
pub use routes::Command;
pub use state::{Channel, HardwareState, Levels, RampDirection};
pub use timer::ShutoffTimer;
