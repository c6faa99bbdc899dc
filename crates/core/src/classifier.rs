//! Image classifier collaborator.
//!
//! The pretrained skin-disease model runs outside this service. It is reached
//! through [`Classifier`]; [`RemoteClassifier`] calls a model server over HTTP.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::upload::DecodedImage;
use crate::{DermError, DermResult};

/// A disease label and the model's confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub confidence: f64,
}

impl Prediction {
    /// Rejects confidences outside `0.0..=1.0` and empty labels.
    pub fn validate(self) -> DermResult<Self> {
        if self.class.trim().is_empty() {
            return Err(DermError::Classification("empty disease label".into()));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(DermError::Classification(format!(
                "confidence {} outside 0.0-1.0",
                self.confidence
            )));
        }
        Ok(self)
    }
}

#[async_trait]
pub trait Classifier: Send + Sync {
    async fn predict(&self, image: &DecodedImage) -> DermResult<Prediction>;
}

#[derive(Serialize)]
struct PredictRequest {
    image_data: String,
}

/// Classifier served by a remote model endpoint.
///
/// Posts `{"image_data": <base64>}` and expects `{"class", "confidence"}`.
#[derive(Debug, Clone)]
pub struct RemoteClassifier {
    client: Client,
    url: Option<String>,
}

impl RemoteClassifier {
    pub fn new(config: &ClassifierConfig) -> DermResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DermError::InvalidConfig(format!("classifier HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn predict(&self, image: &DecodedImage) -> DermResult<Prediction> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| DermError::Classification("classifier URL is not set".into()))?;

        let body = PredictRequest {
            image_data: base64::engine::general_purpose::STANDARD.encode(image.bytes()),
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DermError::Classification(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(DermError::Classification(format!(
                "classifier returned {status}: {text}"
            )));
        }

        response
            .json::<Prediction>()
            .await
            .map_err(|e| DermError::Classification(format!("malformed prediction: {e}")))?
            .validate()
    }
}
