use embassy_time::{Duration, Timer};
use esp_hal::{
    gpio::{AnyPin, DriveMode},
    ledc::{
        Ledc, LowSpeed,
        channel::{self as ledc_channel, ChannelIFace as _},
        timer::{self as ledc_timer, TimerIFace as _},
    },
    time::Rate,
};
use ledpanel_core::Buzzer;

/// Duty while a note sounds.
const TONE_DUTY_PCT: u8 = 50;

/// Passive buzzer on its own LEDC timer and channel.
///
/// The timer is reprogrammed to each note's frequency; the channel runs at
/// 50 % duty for the note and is left at 0 % afterwards.
pub struct LedcBuzzer {
    ledc: &'static Ledc<'static>,
    pin: AnyPin<'static>,
}

impl LedcBuzzer {
    pub fn new(ledc: &'static Ledc<'static>, pin: impl Into<AnyPin<'static>>) -> Self {
        Self {
            ledc,
            pin: pin.into(),
        }
    }
}

impl Buzzer for LedcBuzzer {
    async fn tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        let duration = Duration::from_millis(u64::from(duration_ms));
        if frequency_hz == 0 {
            Timer::after(duration).await;
            return;
        }

        let mut timer = self.ledc.timer::<LowSpeed>(ledc_timer::Number::Timer1);
        let configured = timer.configure(ledc_timer::config::Config {
            duty: ledc_timer::config::Duty::Duty10Bit,
            clock_source: ledc_timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(frequency_hz),
        });
        if let Err(e) = configured {
            log::warn!("buzzer: {} Hz not reachable: {:?}", frequency_hz, e);
            Timer::after(duration).await;
            return;
        }

        let mut channel = self
            .ledc
            .channel::<LowSpeed>(ledc_channel::Number::Channel3, self.pin.reborrow());
        let started = channel.configure(ledc_channel::config::Config {
            timer: &timer,
            duty_pct: TONE_DUTY_PCT,
            drive_mode: DriveMode::PushPull,
        });
        if let Err(e) = started {
            log::warn!("buzzer: channel setup failed: {:?}", e);
        }
        Timer::after(duration).await;
        if let Err(e) = channel.set_duty(0) {
            log::warn!("buzzer: silence failed: {:?}", e);
        }
    }
}
