//! Mutable hardware state
//!
//! Plain registers without I/O. The [`Panel`](crate::Panel) pushes
//! [`Levels`] to the PWM outputs after every change.

/// LED color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Brightness of the three channels, in the 0-255 wire range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Levels {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Levels {
    pub const OFF: Levels = Levels::uniform(0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Same level on every channel.
    pub const fn uniform(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Only `channel` lit, at `level`.
    pub const fn single(channel: Channel, level: u8) -> Self {
        match channel {
            Channel::Red => Self::new(level, 0, 0),
            Channel::Green => Self::new(0, level, 0),
            Channel::Blue => Self::new(0, 0, level),
        }
    }

    pub const fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn set(&mut self, channel: Channel, level: u8) {
        match channel {
            Channel::Red => self.red = level,
            Channel::Green => self.green = level,
            Channel::Blue => self.blue = level,
        }
    }
}

/// Direction of the next oscillating-ramp step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampDirection {
    #[default]
    Rising,
    Falling,
}

/// Everything the request interpreter and the shutoff timer mutate.
#[derive(Debug, Clone, Default)]
pub struct HardwareState {
    levels: Levels,
    ramps: [RampDirection; 3],
    buzzer_active: bool,
    status_led: bool,
}

impl HardwareState {
    pub const fn new() -> Self {
        Self {
            levels: Levels::OFF,
            ramps: [RampDirection::Rising; 3],
            buzzer_active: false,
            status_led: false,
        }
    }

    pub const fn levels(&self) -> Levels {
        self.levels
    }

    pub const fn ramp(&self, channel: Channel) -> RampDirection {
        self.ramps[channel.index()]
    }

    pub const fn buzzer_active(&self) -> bool {
        self.buzzer_active
    }

    pub const fn status_led(&self) -> bool {
        self.status_led
    }

    /// Raise `channel` by `step` unless that would leave the byte range.
    pub fn step_up(&mut self, channel: Channel, step: u8) {
        let level = self.levels.get(channel);
        if level <= u8::MAX - step {
            self.levels.set(channel, level + step);
        }
    }

    /// Lower `channel` by `step` unless that would go below zero.
    pub fn step_down(&mut self, channel: Channel, step: u8) {
        let level = self.levels.get(channel);
        if level >= step {
            self.levels.set(channel, level - step);
        }
    }

    /// Walk the `[0, ceiling]` ramp of `channel` one step.
    ///
    /// The direction flips on the request that reaches either end, so a
    /// full cycle takes `2 * ceiling / step` requests.
    pub fn advance_ramp(&mut self, channel: Channel, step: u8, ceiling: u8) {
        let index = channel.index();
        let level = self.levels.get(channel);
        match self.ramps[index] {
            RampDirection::Rising => {
                let next = level.saturating_add(step).min(ceiling);
                if next >= ceiling {
                    self.ramps[index] = RampDirection::Falling;
                }
                self.levels.set(channel, next);
            }
            RampDirection::Falling => {
                let next = level.saturating_sub(step);
                if next == 0 {
                    self.ramps[index] = RampDirection::Rising;
                }
                self.levels.set(channel, next);
            }
        }
    }

    pub fn set_all(&mut self, level: u8) {
        self.levels = Levels::uniform(level);
    }

    /// Zero every channel. Ramp directions are kept.
    pub fn turn_off(&mut self) {
        self.levels = Levels::OFF;
    }

    pub fn set_status_led(&mut self, on: bool) {
        self.status_led = on;
    }

    pub fn set_buzzer_active(&mut self, active: bool) {
        self.buzzer_active = active;
    }
}
