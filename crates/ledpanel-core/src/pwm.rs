use embedded_hal::pwm::SetDutyCycle;

use crate::{ports::LevelOutput, state::Levels};

/// Brightness value mapped to a full duty cycle.
pub const LEVEL_WRAP: u16 = 255;

/// [`LevelOutput`] over three `embedded-hal` PWM channels.
///
/// A level `l` programs `l / 255` of the channel's maximum duty.
pub struct PwmLeds<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> PwmLeds<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    pub fn into_inner(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

fn write_level(channel: &mut impl SetDutyCycle, name: &str, level: u8) {
    if let Err(_e) = channel.set_duty_cycle_fraction(u16::from(level), LEVEL_WRAP) {
        log::warn!("pwm: {} duty write failed", name);
    }
}

impl<R, G, B> LevelOutput for PwmLeds<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn apply(&mut self, levels: Levels) {
        write_level(&mut self.red, "red", levels.red);
        write_level(&mut self.green, "green", levels.green);
        write_level(&mut self.blue, "blue", levels.blue);
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::pwm::ErrorType;

    use super::*;

    struct FakeChannel {
        max: u16,
        duty: u16,
        writes: usize,
    }

    impl FakeChannel {
        fn new(max: u16) -> Self {
            Self {
                max,
                duty: 0,
                writes: 0,
            }
        }
    }

    impl ErrorType for FakeChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakeChannel {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn maps_levels_onto_duty_range() {
        let mut leds = PwmLeds::new(
            FakeChannel::new(255),
            FakeChannel::new(256),
            FakeChannel::new(1023),
        );
        leds.apply(Levels::new(10, 255, 0));

        let (red, green, blue) = leds.into_inner();
        assert_eq!(red.duty, 10);
        assert_eq!(green.duty, 256);
        assert_eq!(blue.duty, 0);
    }

    #[test]
    fn repeated_apply_is_idempotent() {
        let mut leds = PwmLeds::new(
            FakeChannel::new(255),
            FakeChannel::new(255),
            FakeChannel::new(255),
        );
        leds.apply(Levels::new(30, 20, 10));
        leds.apply(Levels::new(30, 20, 10));

        let (red, green, blue) = leds.into_inner();
        assert_eq!((red.duty, green.duty, blue.duty), (30, 20, 10));
        assert_eq!(red.writes, 2);
    }
}
