mod http_server;
mod network;
mod shutoff;

pub use http_server::http_server_task;
pub use network::{network_runner_task, wifi_link_task};
pub use shutoff::run_shutoff_loop;
