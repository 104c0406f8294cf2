use embassy_net::{Stack, tcp::TcpSocket};
use embassy_sync::{blocking_mutex::raw::RawMutex, mutex::Mutex};
use embassy_time::{Duration, Instant};
use ledpanel_core::http::{HttpConnection, HttpHandler, HttpResult};

/// Accept loop handing each request to a handler behind a mutex.
///
/// One connection at a time: read one request, answer it, close.
pub(crate) struct HttpServer<'a, M: RawMutex, T: HttpHandler> {
    handler: &'a Mutex<M, T>,
    socket_timeout: Duration,
}

impl<'a, M: RawMutex, T: HttpHandler> HttpServer<'a, M, T> {
    pub(crate) fn new(handler: &'a Mutex<M, T>, socket_timeout: Duration) -> Self {
        Self {
            handler,
            socket_timeout,
        }
    }

    pub(crate) async fn listen_and_serve(
        &self,
        stack: Stack<'static>,
        port: u16,
        rx_buffer: &mut [u8],
        tx_buffer: &mut [u8],
    ) -> ! {
        log::info!("http_server: listening on port {}", port);
        loop {
            let mut socket = TcpSocket::new(stack, rx_buffer, tx_buffer);
            socket.set_timeout(Some(self.socket_timeout));

            if let Err(e) = socket.accept(port).await {
                log::warn!("http_server: accept failed: {:?}", e);
                continue;
            }

            if let Err(e) = self.serve(&mut socket).await {
                log::warn!("http_server: connection error: {:?}", e);
            }

            socket.close();
            if let Err(e) = socket.flush().await {
                log::debug!("http_server: close flush failed: {:?}", e);
            }
        }
    }

    async fn serve(&self, socket: &mut TcpSocket<'_>) -> HttpResult {
        let Some(mut conn) = HttpConnection::from_socket(socket).await? else {
            log::debug!("http_server: peer closed before sending a request");
            return Ok(());
        };
        let mut handler = self.handler.lock().await;
        handler.handle_request(&mut conn, Instant::now()).await
    }
}
