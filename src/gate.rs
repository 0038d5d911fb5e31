use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::info;

/// Time left until `opens_at`, or `None` when the window is already open.
pub fn wait_duration(opens_at: NaiveDateTime, now: NaiveDateTime) -> Option<Duration> {
    (opens_at - now).to_std().ok().filter(|d| !d.is_zero())
}

/// Suspends until the booking window opens. Returns immediately when it is
/// already open. One sleep, no re-check afterwards: the submit that follows
/// is expected to fire right at the computed instant.
pub async fn await_window(opens_at: NaiveDateTime) {
    let Some(delta) = wait_duration(opens_at, Local::now().naive_local()) else {
        return;
    };
    info!(
        "booking opens in {}, going to sleep",
        format_remaining(delta)
    );
    tokio::time::sleep(delta).await;
}

fn format_remaining(delta: Duration) -> String {
    let secs = delta.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
