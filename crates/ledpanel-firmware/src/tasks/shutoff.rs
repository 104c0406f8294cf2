use embassy_time::{Instant, Timer};

use crate::{SharedPanel, config};

/// The poll loop: check the auto-shutoff deadline every poll interval.
///
/// The lock is only taken between requests, so a fired timer is applied
/// after any request in flight has been answered.
pub async fn run_shutoff_loop(panel: &SharedPanel) -> ! {
    loop {
        panel.lock().await.poll_shutoff(Instant::now());
        Timer::after(config::POLL.interval).await;
    }
}
