use core::str::FromStr;

use embassy_net::{DhcpConfig, Runner, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer, with_timeout};
use esp_hal::{peripherals::WIFI, rng::Rng};
use esp_radio::wifi::{
    AuthMethod,
    ClientConfig,
    Config as WifiConfig,
    ModeConfig,
    WifiController,
    WifiDevice,
};
use heapless::String;

use super::InitError;
use crate::{config, mk_static};

const MAX_CONNECTIONS: usize = 4;

/// Everything the station needs after the radio is up.
pub struct NetworkHandles {
    pub stack: Stack<'static>,
    pub runner: Runner<'static, WifiDevice<'static>>,
    pub controller: WifiController<'static>,
}

pub fn init_network_stack(wifi_device: WIFI<'static>) -> Result<NetworkHandles, InitError> {
    let radio = esp_radio::init().map_err(|e| {
        log::error!("network: radio init failed: {:?}", e);
        InitError::Radio
    })?;
    let radio = &*mk_static!(esp_radio::Controller<'static>, radio);
    let (controller, interfaces) = esp_radio::wifi::new(radio, wifi_device, WifiConfig::default())
        .map_err(|e| {
            log::error!("network: wifi init failed: {:?}", e);
            InitError::Wifi
        })?;

    let mut dhcp_config = DhcpConfig::default();
    dhcp_config.hostname = String::from_str(config::DEVICE.hostname).ok();
    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let resources = mk_static!(StackResources<MAX_CONNECTIONS>, StackResources::new());
    let (stack, runner) = embassy_net::new(interfaces.sta, net_config, resources, get_seed());

    Ok(NetworkHandles {
        stack,
        runner,
        controller,
    })
}

fn get_seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}

/// Associate with the configured network. A single attempt, bounded by
/// the join timeout.
pub async fn join(controller: &mut WifiController<'static>) -> Result<(), InitError> {
    let ssid = config::WIFI.ssid;
    let password = config::WIFI.password;
    let client_config = if password.is_empty() {
        ClientConfig::default()
            .with_ssid(ssid.into())
            .with_auth_method(AuthMethod::None)
    } else {
        ClientConfig::default()
            .with_ssid(ssid.into())
            .with_password(password.into())
    };
    controller
        .set_config(&ModeConfig::Client(client_config))
        .map_err(|e| {
            log::error!("network: wifi config rejected: {:?}", e);
            InitError::Wifi
        })?;
    controller.start_async().await.map_err(|e| {
        log::error!("network: wifi start failed: {:?}", e);
        InitError::Wifi
    })?;

    log::info!("network: joining {}", ssid);
    match with_timeout(config::NETWORK.join_timeout, controller.connect_async()).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            log::error!("network: join failed: {:?}", e);
            Err(InitError::Wifi)
        }
        Err(_) => Err(InitError::JoinTimeout),
    }
}

/// Wait for the link and a DHCP lease, bounded by the join timeout.
pub async fn wait_for_connection(stack: Stack<'_>) -> Result<StaticConfigV4, InitError> {
    with_timeout(config::NETWORK.join_timeout, async {
        while !stack.is_link_up() {
            Timer::after(Duration::from_millis(100)).await;
        }
        loop {
            if let Some(config) = stack.config_v4() {
                return config;
            }
            Timer::after(Duration::from_millis(100)).await;
        }
    })
    .await
    .map_err(|_| InitError::DhcpTimeout)
}
