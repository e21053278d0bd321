/// Configuration for the external menu catalog API.
pub struct MenuConfig {
    pub base_url: String,
}

impl MenuConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("MENU_API_URL")
                .unwrap_or_else(|_| "https://menu.catering-orders.app/api".to_string()),
        }
    }
}
