use embassy_time::Duration;

/// Request interpretation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// `/<color>_up` and `/<color>_down` step a channel, `/on` and `/off`
    /// drive the status LED.
    Directional,
    /// `/<color>` walks a rising/falling ramp, plus timer, melody and night
    /// mode commands.
    Oscillating,
}

impl PanelMode {
    /// Highest level a channel can be driven to in this mode.
    pub const fn ceiling(self, config: &PanelConfig) -> u8 {
        match self {
            PanelMode::Directional => u8::MAX,
            PanelMode::Oscillating => config.ramp_ceiling,
        }
    }
}

/// Panel behaviour constants.
#[derive(Debug, Clone, Copy)]
pub struct PanelConfig {
    pub mode: PanelMode,
    /// Level change per request.
    pub step: u8,
    /// Upper turning point of the oscillating ramp.
    pub ramp_ceiling: u8,
    /// Level applied to every channel by night mode.
    pub night_level: u8,
    /// Delay between arming the timer and the auto-shutoff.
    pub shutoff_delay: Duration,
}

impl PanelConfig {
    pub const DIRECTIONAL: PanelConfig = PanelConfig {
        mode: PanelMode::Directional,
        step: 10,
        ramp_ceiling: 30,
        night_level: 15,
        shutoff_delay: Duration::from_secs(5),
    };

    pub const OSCILLATING: PanelConfig = PanelConfig {
        mode: PanelMode::Oscillating,
        ..Self::DIRECTIONAL
    };

    /// Replace the auto-shutoff delay.
    #[must_use]
    pub const fn with_shutoff_delay(mut self, delay: Duration) -> Self {
        self.shutoff_delay = delay;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DIRECTIONAL
    }
}
