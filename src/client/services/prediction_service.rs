use anyhow::{anyhow, Context};

use crate::common::models::{PredictRequest, PredictResponse};

/// Thin HTTP client for the remote stunting-classification service.
#[derive(Debug, Clone)]
pub struct PredictionService {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// One request, one response. No retry, no client-side timeout; callers
    /// decide what to show the user.
    pub async fn predict(&self, request: &PredictRequest) -> anyhow::Result<PredictResponse> {
        let response = self
            .http
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .context("request to prediction service failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "prediction service returned {}: {}",
                status,
                detail.trim()
            ));
        }

        response
            .json::<PredictResponse>()
            .await
            .context("prediction service sent a malformed body")
    }
}
