//! Test helpers for the Piano API

#[cfg(test)]
pub fn create_test_client(url: &str) -> super::Client {
    super::Client::new(super::ClientConfig::new(url, "secret")).unwrap()
}
