use embassy_time::Instant;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_io_async::{Read, Write};

use crate::{
    config::PanelConfig,
    http::{Error, HttpConnection, HttpHandler, HttpResult, Response},
    page::render_page,
    ports::{Buzzer, LevelOutput, Thermometer},
    routes::{Command, resolve},
    sound::{ALARM, MELODY, MELODY_LEVEL, NOTE_GAP_MS},
    state::{HardwareState, Levels},
    timer::ShutoffTimer,
};

/// The control panel: hardware state, shutoff timer and the drivers they
/// are pushed to.
///
/// Every mutation goes through `&mut self`, so sharing a panel between tasks
/// needs a single lock around it.
pub struct Panel<L, T, B, S, D> {
    config: PanelConfig,
    state: HardwareState,
    timer: ShutoffTimer,
    leds: L,
    thermometer: T,
    buzzer: B,
    status_led: S,
    delay: D,
}

impl<L, T, B, S, D> Panel<L, T, B, S, D>
where
    L: LevelOutput,
    T: Thermometer,
    B: Buzzer,
    S: OutputPin,
    D: DelayNs,
{
    /// Create a panel with every channel off and the indicator low.
    pub fn new(
        config: PanelConfig,
        leds: L,
        thermometer: T,
        buzzer: B,
        status_led: S,
        delay: D,
    ) -> Self {
        let mut panel = Self {
            config,
            state: HardwareState::new(),
            timer: ShutoffTimer::new(),
            leds,
            thermometer,
            buzzer,
            status_led,
            delay,
        };
        panel.push_levels();
        panel.write_status_led();
        panel
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn state(&self) -> &HardwareState {
        &self.state
    }

    pub fn timer(&self) -> &ShutoffTimer {
        &self.timer
    }

    /// Apply `command` and push the resulting levels to the LEDs.
    ///
    /// The alarm and the melody run to completion before this returns.
    pub async fn execute(&mut self, command: Command, now: Instant) {
        let step = self.config.step;
        match command {
            Command::Brighten(channel) => self.state.step_up(channel, step),
            Command::Dim(channel) => self.state.step_down(channel, step),
            Command::Ramp(channel) => {
                self.state.advance_ramp(channel, step, self.config.ramp_ceiling);
            }
            Command::StatusLed(on) => {
                self.state.set_status_led(on);
                self.write_status_led();
            }
            Command::Alarm => self.sound_alarm().await,
            Command::ArmTimer => {
                self.timer.arm(now, self.config.shutoff_delay);
                log::info!(
                    "panel: shutoff armed for {} ms",
                    self.config.shutoff_delay.as_millis()
                );
            }
            Command::Melody => self.play_melody().await,
            Command::NightMode => {
                let ceiling = self.config.mode.ceiling(&self.config);
                self.state.set_all(self.config.night_level.min(ceiling));
            }
        }
        self.push_levels();
        log::debug!("panel: levels {:?}", self.state.levels());
    }

    /// Poll-loop timer check: zero the LEDs once the shutoff deadline passed.
    ///
    /// Returns `true` when the shutoff fired.
    pub fn poll_shutoff(&mut self, now: Instant) -> bool {
        if !self.timer.take_expired(now) {
            return false;
        }
        self.state.turn_off();
        self.push_levels();
        log::info!("panel: shutoff timer expired, all channels off");
        true
    }

    /// Sample the thermometer and render the page for the current state.
    pub fn render(&mut self) -> Result<Response, Error> {
        let celsius = self.thermometer.read_celsius();
        let page = render_page(self.config.mode, celsius)?;
        Response::html(&page)
    }

    fn push_levels(&mut self) {
        self.leds.apply(self.state.levels());
    }

    fn write_status_led(&mut self) {
        let result = if self.state.status_led() {
            self.status_led.set_high()
        } else {
            self.status_led.set_low()
        };
        if result.is_err() {
            log::warn!("panel: status led write failed");
        }
    }

    async fn sound_alarm(&mut self) {
        self.state.set_buzzer_active(true);
        for _ in 0..ALARM.beeps {
            self.buzzer.tone(ALARM.frequency_hz, ALARM.beep_ms).await;
            self.delay.delay_ms(ALARM.pause_ms).await;
        }
        self.state.set_buzzer_active(false);
    }

    async fn play_melody(&mut self) {
        self.state.set_buzzer_active(true);
        for note in MELODY {
            self.leds.apply(Levels::single(note.light, MELODY_LEVEL));
            self.buzzer.tone(note.frequency_hz, note.duration_ms).await;
            self.leds.apply(Levels::OFF);
            self.delay.delay_ms(NOTE_GAP_MS).await;
        }
        self.state.set_buzzer_active(false);
    }
}

impl<L, T, B, S, D> HttpHandler for Panel<L, T, B, S, D>
where
    L: LevelOutput,
    T: Thermometer,
    B: Buzzer,
    S: OutputPin,
    D: DelayNs,
{
    /// Interpret the request, push the new state, then render and send the
    /// page. Unknown or malformed requests leave the state untouched.
    async fn handle_request<C: Read + Write>(
        &mut self,
        conn: &mut HttpConnection<'_, C>,
        now: Instant,
    ) -> HttpResult {
        let command = conn
            .request()
            .and_then(|request| resolve(self.config.mode, request));

        match conn.request() {
            Some(request) => log::info!(
                "http: {} {} -> {:?}",
                request.method.as_str(),
                request.path.as_str(),
                command
            ),
            None => log::info!("http: malformed request, page only"),
        }
        if let Some(command) = command {
            self.execute(command, now).await;
        }

        let response = self.render()?;
        conn.write_response(&response).await
    }
}
