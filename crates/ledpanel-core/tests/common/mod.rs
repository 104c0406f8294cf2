//! In-memory fakes for the panel's hardware ports and socket.

#![allow(dead_code, unreachable_pub)]

use std::{cell::RefCell, collections::VecDeque, convert::Infallible, rc::Rc};

use embassy_time::Instant;
use embedded_io_async::{ErrorKind, ErrorType, Read, Write};
use ledpanel_core::{
    Buzzer, LevelOutput, Levels, Panel, PanelConfig, Thermometer,
    http::{HttpConnection, HttpHandler},
};

pub type Shared<T> = Rc<RefCell<T>>;

/// Records every level write.
#[derive(Clone, Default)]
pub struct FakeLeds {
    pub writes: Shared<Vec<Levels>>,
}

impl FakeLeds {
    pub fn last(&self) -> Option<Levels> {
        self.writes.borrow().last().copied()
    }

    pub fn count(&self) -> usize {
        self.writes.borrow().len()
    }
}

impl LevelOutput for FakeLeds {
    fn apply(&mut self, levels: Levels) {
        self.writes.borrow_mut().push(levels);
    }
}

/// Returns a fixed reading and remembers what the LEDs showed when sampled.
#[derive(Clone)]
pub struct FakeThermometer {
    pub celsius: Shared<f32>,
    pub leds: FakeLeds,
    pub seen_levels: Shared<Vec<Option<Levels>>>,
}

impl Thermometer for FakeThermometer {
    fn read_celsius(&mut self) -> f32 {
        self.seen_levels.borrow_mut().push(self.leds.last());
        *self.celsius.borrow()
    }
}

/// Records `(frequency_hz, duration_ms)` of every tone.
///
/// Each tone yields once before it is recorded, so a single poll of a
/// playing command stops inside the first tone.
#[derive(Clone, Default)]
pub struct FakeBuzzer {
    pub tones: Shared<Vec<(u32, u32)>>,
}

impl Buzzer for FakeBuzzer {
    async fn tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        embassy_futures::yield_now().await;
        self.tones.borrow_mut().push((frequency_hz, duration_ms));
    }
}

#[derive(Clone, Default)]
pub struct FakePin {
    pub high: Shared<bool>,
}

impl embedded_hal::digital::ErrorType for FakePin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        *self.high.borrow_mut() = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        *self.high.borrow_mut() = true;
        Ok(())
    }
}

/// Accumulates requested delay time without sleeping.
#[derive(Clone, Default)]
pub struct FakeDelay {
    pub total_ns: Shared<u64>,
}

impl embedded_hal_async::delay::DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        *self.total_ns.borrow_mut() += u64::from(ms) * 1_000_000;
    }
}

/// Socket fed with a queue of deliveries; an exhausted queue reads as
/// peer close.
#[derive(Default)]
pub struct FakeSocket {
    pub deliveries: VecDeque<Vec<u8>>,
    pub written: Vec<u8>,
    pub flushes: usize,
    pub fail_writes: bool,
}

impl FakeSocket {
    pub fn with_request(raw: &[u8]) -> Self {
        Self {
            deliveries: VecDeque::from([raw.to_vec()]),
            ..Self::default()
        }
    }

    pub fn written_str(&self) -> &str {
        core::str::from_utf8(&self.written).unwrap()
    }
}

impl ErrorType for FakeSocket {
    type Error = ErrorKind;
}

impl Read for FakeSocket {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let Some(delivery) = self.deliveries.pop_front() else {
            return Ok(0);
        };
        let n = delivery.len().min(buf.len());
        buf[..n].copy_from_slice(&delivery[..n]);
        Ok(n)
    }
}

impl Write for FakeSocket {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_writes {
            return Err(ErrorKind::ConnectionReset);
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

pub type TestPanel = Panel<FakeLeds, FakeThermometer, FakeBuzzer, FakePin, FakeDelay>;

/// A panel wired to fakes, with handles to inspect them.
pub struct Bench {
    pub panel: TestPanel,
    pub leds: FakeLeds,
    pub celsius: Shared<f32>,
    pub seen_levels: Shared<Vec<Option<Levels>>>,
    pub buzzer: FakeBuzzer,
    pub status_led: FakePin,
    pub delay: FakeDelay,
}

impl Bench {
    pub fn new(config: PanelConfig) -> Self {
        let leds = FakeLeds::default();
        let celsius = Rc::new(RefCell::new(21.5));
        let seen_levels = Rc::new(RefCell::new(Vec::new()));
        let thermometer = FakeThermometer {
            celsius: celsius.clone(),
            leds: leds.clone(),
            seen_levels: seen_levels.clone(),
        };
        let buzzer = FakeBuzzer::default();
        let status_led = FakePin::default();
        let delay = FakeDelay::default();
        let panel = Panel::new(
            config,
            leds.clone(),
            thermometer,
            buzzer.clone(),
            status_led.clone(),
            delay.clone(),
        );
        Self {
            panel,
            leds,
            celsius,
            seen_levels,
            buzzer,
            status_led,
            delay,
        }
    }

    /// Serve one request at `now` and return what was written back.
    pub fn request_at(&mut self, raw: &[u8], now: Instant) -> String {
        let mut socket = FakeSocket::with_request(raw);
        embassy_futures::block_on(async {
            let mut conn = HttpConnection::from_socket(&mut socket)
                .await
                .unwrap()
                .expect("delivery");
            self.panel.handle_request(&mut conn, now).await.unwrap();
        });
        socket.written_str().to_owned()
    }

    pub fn get(&mut self, path: &str) -> String {
        let raw = format!("GET {path} HTTP/1.1\r\nHost: panel\r\n\r\n");
        self.request_at(raw.as_bytes(), Instant::from_secs(0))
    }

    pub fn levels(&self) -> Levels {
        self.panel.state().levels()
    }
}
