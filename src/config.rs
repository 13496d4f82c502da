use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub store_url: String,
    pub store_key: String,
    pub google_service_account_email: String,
    pub google_private_key: String,
}

impl AppConfig {
    /// Resolved once at startup. Missing values fall back to empty strings
    /// rather than failing fast; an unconfigured store surfaces as a
    /// persistence error on the first insert instead.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            store_url: env::var("STORE_URL").unwrap_or_default(),
            store_key: env::var("STORE_KEY").unwrap_or_default(),
            google_service_account_email: env::var("GOOGLE_SERVICE_ACCOUNT_EMAIL")
                .unwrap_or_default(),
            google_private_key: env::var("GOOGLE_PRIVATE_KEY").unwrap_or_default(),
        }
    }
}
