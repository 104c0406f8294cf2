use embassy_time::Duration;
use ledpanel_core::PanelConfig;

pub struct WifiConfig {
    pub ssid: &'static str,
    pub password: &'static str,
}

pub struct DeviceConfig {
    pub name: &'static str,
    pub hostname: &'static str,
}

pub struct NetworkConfig {
    pub http_port: u16,
    /// Bound on a single association attempt.
    pub join_timeout: Duration,
    /// Idle timeout of an accepted HTTP connection.
    pub socket_timeout: Duration,
}

pub struct PollConfig {
    /// Sleep between two auto-shutoff checks.
    pub interval: Duration,
}

pub const WIFI: WifiConfig = WifiConfig {
    ssid: env!("WIFI_SSID"),
    password: env!("WIFI_PASSWORD"),
};

pub const DEVICE: DeviceConfig = DeviceConfig {
    name: "LED Control Panel",
    hostname: "ledpanel",
};

pub const NETWORK: NetworkConfig = NetworkConfig {
    http_port: 80,
    join_timeout: Duration::from_secs(20),
    socket_timeout: Duration::from_secs(30),
};

pub const POLL: PollConfig = PollConfig {
    interval: Duration::from_millis(100),
};

pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

#[cfg(not(feature = "oscillating"))]
const PANEL_BASE: PanelConfig = PanelConfig::DIRECTIONAL;
#[cfg(feature = "oscillating")]
const PANEL_BASE: PanelConfig = PanelConfig::OSCILLATING;

#[cfg(not(feature = "long-timer"))]
pub const PANEL: PanelConfig = PANEL_BASE;
#[cfg(feature = "long-timer")]
pub const PANEL: PanelConfig = PANEL_BASE.with_shutoff_delay(Duration::from_secs(5 * 60));

/// PWM frequency of the LED channels.
pub const LED_PWM_KHZ: u32 = 24;

/// Board pin assignment. `$p` is the `Peripherals` struct.
#[macro_export]
macro_rules! red_led_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}

#[macro_export]
macro_rules! green_led_gpio {
    ($p:expr) => {
        $p.GPIO26
    };
}

#[macro_export]
macro_rules! blue_led_gpio {
    ($p:expr) => {
        $p.GPIO27
    };
}

#[macro_export]
macro_rules! buzzer_gpio {
    ($p:expr) => {
        $p.GPIO14
    };
}

#[macro_export]
macro_rules! status_led_gpio {
    ($p:expr) => {
        $p.GPIO2
    };
}

/// Analog input sampled for the temperature reading (ADC1).
pub type TemperaturePin = esp_hal::peripherals::GPIO34<'static>;

#[macro_export]
macro_rules! temperature_gpio {
    ($p:expr) => {
        $p.GPIO34
    };
}
