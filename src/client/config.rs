use std::env;

/// Production deployment of the prediction service, used when no override is
/// configured.
pub const DEFAULT_API_URL: &str =
    "https://prediksi-stunting-pada-balita-production-bd50.up.railway.app";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_url: env::var("PREDIKSI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}
