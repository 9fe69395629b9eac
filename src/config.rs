use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Base URL of the marketplace platform API (catalog, addresses,
    /// availability, booking creation).
    pub platform_api_url: String,
    pub paystack_secret_key: String,
    pub paystack_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "tidybook.db".to_string()),
            platform_api_url: env::var("PLATFORM_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
            paystack_secret_key: env::var("PAYSTACK_SECRET_KEY").unwrap_or_default(),
            paystack_base_url: env::var("PAYSTACK_BASE_URL")
                .unwrap_or_else(|_| "https://api.paystack.co".to_string()),
        }
    }
}
