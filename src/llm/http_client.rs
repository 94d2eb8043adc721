use reqwest::Client;
use std::time::Duration;

/// Shared client for provider calls: 120 s per request, 10 s to connect.
pub fn build_provider_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|_| Client::new())
}
