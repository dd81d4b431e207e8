//! Network reachability probe run before the browser is started.

use std::time::Duration;

use rand::seq::SliceRandom;
use tracing::{debug, warn};

/// Hosts probed for connectivity; one is picked at random per run.
pub const CONNECTIVITY_HOSTS: [&str; 2] = ["https://google.com", "https://bing.com"];

pub const CONNECTIVITY_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether one randomly chosen host in `hosts` answers within `timeout`.
///
/// Any HTTP response counts as connected; only transport failures do not.
pub async fn is_connected(hosts: &[&str], timeout: Duration) -> bool {
    let Some(host) = hosts.choose(&mut rand::thread_rng()).copied() else {
        warn!("No connectivity hosts configured");
        return false;
    };

    let client = match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to build HTTP client: {}", e);
            return false;
        }
    };

    match client.get(host).send().await {
        Ok(response) => {
            debug!("{} answered {}", host, response.status());
            true
        }
        Err(e) => {
            debug!("{} unreachable: {}", host, e);
            warn!("No internet connection?");
            false
        }
    }
}

/// [`is_connected`] against the default hosts and timeout.
pub async fn check_connection() -> bool {
    is_connected(&CONNECTIVITY_HOSTS, CONNECTIVITY_TIMEOUT).await
}
