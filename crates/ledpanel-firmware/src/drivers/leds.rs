use esp_hal::{
    gpio::{DriveMode, interconnect::PeripheralOutput},
    ledc::{
        LSGlobalClkSource, Ledc, LowSpeed,
        channel::{self as ledc_channel, ChannelIFace as _},
        timer::{self as ledc_timer, TimerIFace as _},
    },
    peripherals::LEDC,
    time::Rate,
};
use ledpanel_core::PwmLeds;

use super::InitError;
use crate::{config::LED_PWM_KHZ, mk_static};

pub type LedChannel = ledc_channel::Channel<'static, LowSpeed>;

/// The three colour channels, duty programmed as `level / 255`.
pub type EspLeds = PwmLeds<LedChannel, LedChannel, LedChannel>;

/// Take the LEDC peripheral, shared by the colour channels and the buzzer.
pub fn init_ledc(ledc: LEDC<'static>) -> &'static Ledc<'static> {
    let ledc = mk_static!(Ledc<'static>, Ledc::new(ledc));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    ledc
}

/// Configure one 8-bit LEDC timer and a channel per colour on it, all
/// starting dark.
pub fn init_leds(
    ledc: &'static Ledc<'static>,
    red: impl PeripheralOutput<'static>,
    green: impl PeripheralOutput<'static>,
    blue: impl PeripheralOutput<'static>,
) -> Result<EspLeds, InitError> {
    let mut timer = ledc.timer::<LowSpeed>(ledc_timer::Number::Timer0);
    timer
        .configure(ledc_timer::config::Config {
            duty: ledc_timer::config::Duty::Duty8Bit,
            clock_source: ledc_timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(LED_PWM_KHZ),
        })
        .map_err(|e| {
            log::error!("pwm: timer setup failed: {:?}", e);
            InitError::Pwm
        })?;
    let timer: &'static ledc_timer::Timer<'static, LowSpeed> =
        mk_static!(ledc_timer::Timer<'static, LowSpeed>, timer);

    let mut red = ledc.channel::<LowSpeed>(ledc_channel::Number::Channel0, red);
    let mut green = ledc.channel::<LowSpeed>(ledc_channel::Number::Channel1, green);
    let mut blue = ledc.channel::<LowSpeed>(ledc_channel::Number::Channel2, blue);
    configure_channel(&mut red, "red", timer)?;
    configure_channel(&mut green, "green", timer)?;
    configure_channel(&mut blue, "blue", timer)?;

    log::info!("pwm: leds ready at {} kHz", LED_PWM_KHZ);
    Ok(PwmLeds::new(red, green, blue))
}

fn configure_channel(
    channel: &mut LedChannel,
    name: &str,
    timer: &'static ledc_timer::Timer<'static, LowSpeed>,
) -> Result<(), InitError> {
    channel
        .configure(ledc_channel::config::Config {
            timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .map_err(|e| {
            log::error!("pwm: {} channel setup failed: {:?}", name, e);
            InitError::Pwm
        })
}
