//! Connection handler behaviour on the socket level.

mod common;

use common::{Bench, FakeSocket};
use embassy_futures::block_on;
use embassy_time::Instant;
use ledpanel_core::{
    PanelConfig, PanelMode,
    http::{
        Error, HttpConnection, HttpHandler, HttpMethod, REQUEST_BUFFER_SIZE, RESPONSE_BUFFER_SIZE,
        Response,
    },
    page::render_page,
};

#[test]
fn empty_delivery_means_peer_closed() {
    let mut socket = FakeSocket::default();
    let conn = block_on(HttpConnection::from_socket(&mut socket)).unwrap();
    assert!(conn.is_none());
    assert!(socket.written.is_empty());
}

#[test]
fn response_is_written_and_flushed_once() {
    let mut bench = Bench::new(PanelConfig::DIRECTIONAL);
    let mut socket = FakeSocket::with_request(b"GET /red_up HTTP/1.1\r\n\r\n");

    block_on(async {
        let mut conn = HttpConnection::from_socket(&mut socket).await.unwrap().unwrap();
        assert_eq!(conn.request().unwrap().method, HttpMethod::Get);
        bench
            .panel
            .handle_request(&mut conn, Instant::from_secs(0))
            .await
            .unwrap();
    });

    assert_eq!(socket.flushes, 1);
    let text = socket.written_str();
    let (head, body) = text.split_once("\r\n\r\n").unwrap();
    assert!(head.contains(&format!("Content-Length: {}", body.len())));
    assert!(head.contains("Connection: close"));
    assert!(body.ends_with("</html>\n"));
}

#[test]
fn only_one_delivery_is_read_per_request() {
    let mut bench = Bench::new(PanelConfig::DIRECTIONAL);
    let mut socket = FakeSocket::with_request(b"GET /blue_up HTTP/1.1\r\n");
    socket.deliveries.push_back(b"GET /blue_up HTTP/1.1\r\n".to_vec());

    block_on(async {
        let mut conn = HttpConnection::from_socket(&mut socket).await.unwrap().unwrap();
        bench
            .panel
            .handle_request(&mut conn, Instant::from_secs(0))
            .await
            .unwrap();
    });

    assert_eq!(bench.levels().blue, 10);
    assert_eq!(socket.deliveries.len(), 1);
}

#[test]
fn oversized_delivery_is_truncated_not_rejected() {
    let mut bench = Bench::new(PanelConfig::DIRECTIONAL);
    let mut raw = b"GET /blue_up HTTP/1.1\r\nX-Pad: ".to_vec();
    raw.resize(REQUEST_BUFFER_SIZE * 3, b'a');

    bench.request_at(&raw, Instant::from_secs(0));
    assert_eq!(bench.levels().blue, 10);
}

#[test]
fn write_failure_is_reported() {
    let mut bench = Bench::new(PanelConfig::DIRECTIONAL);
    let mut socket = FakeSocket::with_request(b"GET /red_up HTTP/1.1\r\n\r\n");
    socket.fail_writes = true;

    let result = block_on(async {
        let mut conn = HttpConnection::from_socket(&mut socket).await.unwrap().unwrap();
        bench.panel.handle_request(&mut conn, Instant::from_secs(0)).await
    });

    assert_eq!(result, Err(Error::Closed));
    // The command was still applied before the write
    assert_eq!(bench.levels().red, 10);
}

#[test]
fn largest_page_fits_the_response_buffer() {
    for mode in [PanelMode::Directional, PanelMode::Oscillating] {
        let page = render_page(mode, -1234.5678).unwrap();
        let response = Response::<RESPONSE_BUFFER_SIZE>::html(&page).unwrap();
        assert!(response.len() <= RESPONSE_BUFFER_SIZE);
    }
}
