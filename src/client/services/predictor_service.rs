use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::client::models::prediction::PredictionOutcome;
use crate::common::config::PadConfig;
use crate::common::error::{PadError, Result};
use crate::common::protocol::{PredictRequest, PredictResponse};

/// HTTP client for the remote digit classifier.
///
/// One `POST` per call, no retries. The configured timeout bounds the whole
/// round trip so a caller waiting on `predict` always gets an answer.
#[derive(Debug, Clone)]
pub struct PredictorService {
    client: reqwest::Client,
    endpoint: Url,
    timeout_secs: u64,
}

impl PredictorService {
    pub fn new(config: &PadConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.predict_url)
            .map_err(|e| PadError::Config(format!("predictor URL '{}': {}", config.predict_url, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(PadError::Config(format!(
                "predictor URL '{}' must use http or https",
                config.predict_url
            )));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PadError::Config(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint,
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one image (a PNG data URI) and interpret the answer.
    pub async fn predict(&self, image: String) -> Result<PredictionOutcome> {
        let body = PredictRequest { image };
        info!("Sending {} byte image to {}", body.image.len(), self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Predictor answered HTTP {}", status);
            return Err(PadError::HttpStatus(status.as_u16()));
        }

        let text = response.text().await.map_err(|e| self.transport_error(e))?;
        debug!("Predictor response: {}", text);
        let parsed: PredictResponse = serde_json::from_str(&text)
            .map_err(|e| PadError::MalformedResponse(e.to_string()))?;
        parsed.into_outcome()
    }

    fn transport_error(&self, err: reqwest::Error) -> PadError {
        if err.is_timeout() {
            PadError::Timeout(self.timeout_secs)
        } else {
            PadError::Network(err.to_string())
        }
    }
}
