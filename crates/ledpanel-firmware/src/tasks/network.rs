use embassy_net::Runner;
use esp_radio::wifi::{WifiController, WifiDevice, WifiEvent};

/// Background task for running the network stack
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

/// Owns the controller after the join and reports link loss. There is no
/// reconnect; a dropped station needs a reset.
#[embassy_executor::task]
pub async fn wifi_link_task(mut controller: WifiController<'static>) {
    loop {
        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        log::warn!("network: station disconnected");
    }
}
