use embassy_net::Stack;

use crate::{SharedPanel, config, server::HttpServer};

const RX_BUFFER_SIZE: usize = 4096;
const TX_BUFFER_SIZE: usize = 4096;

/// Serve the control page. The buffers live in this task's future, so
/// the task pool reserves them statically.
#[embassy_executor::task]
pub async fn http_server_task(stack: Stack<'static>, panel: &'static SharedPanel) {
    let server = HttpServer::new(panel, config::NETWORK.socket_timeout);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    server
        .listen_and_serve(
            stack,
            config::NETWORK.http_port,
            &mut rx_buffer,
            &mut tx_buffer,
        )
        .await
}
