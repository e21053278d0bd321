use reqwest::Client;

/// Shared HTTP client configuration for the external menu catalog.
pub struct MenuApiClient {
    pub client: Client,
    pub base_url: String,
}

impl MenuApiClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the menu listing endpoint URL.
    pub fn menu_url(&self) -> String {
        format!("{}/menu", self.base_url.trim_end_matches('/'))
    }
}
