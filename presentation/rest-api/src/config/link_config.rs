/// Public origin of the web frontend; share links are built against it.
pub struct LinkConfig {
    pub public_origin: String,
}

impl LinkConfig {
    pub fn from_env() -> Self {
        Self {
            public_origin: std::env::var("PUBLIC_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }
}
