//! End-to-end analysis of one uploaded skin image.

use std::sync::Arc;

use serde::Serialize;

use crate::classifier::Classifier;
use crate::disease_info::DiseaseInfoService;
use crate::upload::decode_image;
use crate::DermResult;

/// Classifier verdict enriched with disease information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub disease: String,
    pub confidence: f64,
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub medical_care: Vec<String>,
}

/// Decodes, classifies and enriches uploaded images.
#[derive(Clone)]
pub struct AnalysisService {
    classifier: Arc<dyn Classifier>,
    disease_info: DiseaseInfoService,
}

impl AnalysisService {
    pub fn new(classifier: Arc<dyn Classifier>, disease_info: DiseaseInfoService) -> Self {
        Self {
            classifier,
            disease_info,
        }
    }

    /// Runs the full analysis for a base64-encoded image.
    ///
    /// # Errors
    ///
    /// Returns `DermError::InvalidImage` if the payload does not decode to an
    /// image, or `DermError::Classification` if the classifier fails. Disease
    /// information lookups never fail.
    pub async fn analyze(&self, image_base64: &str) -> DermResult<AnalysisResult> {
        let image = decode_image(image_base64)?;
        let (width, height) = image.dimensions();
        tracing::debug!(width, height, "image decoded");

        let prediction = self.classifier.predict(&image).await?;
        tracing::info!(
            disease = %prediction.class,
            confidence = prediction.confidence,
            "disease predicted"
        );

        let info = self.disease_info.get_disease_info(&prediction.class).await;

        Ok(AnalysisResult {
            disease: prediction.class,
            confidence: prediction.confidence,
            description: info.description,
            symptoms: info.symptoms,
            treatments: info.treatments,
            medical_care: info.medical_care,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Prediction;
    use crate::completion::{CompletionClient, CompletionError, CompletionRequest};
    use crate::upload::DecodedImage;
    use crate::DermError;
    use async_trait::async_trait;
    use base64::Engine;
    use std::io::Cursor;
    use std::num::NonZeroUsize;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClassifier(Prediction);

    #[async_trait]
    impl Classifier for FixedClassifier {
        async fn predict(&self, _image: &DecodedImage) -> DermResult<Prediction> {
            Ok(self.0.clone())
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl Classifier for FailingClassifier {
        async fn predict(&self, _image: &DecodedImage) -> DermResult<Prediction> {
            Err(DermError::Classification("model offline".into()))
        }
    }

    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionClient for CountingClient {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("Description:\nA rash.\nSymptoms:\nRedness\nTreatment:\nTopical cream\nMedical care:\nIf it spreads".into())
        }
    }

    fn png_base64() -> String {
        let img = image::RgbImage::from_pixel(3, 3, image::Rgb([180, 90, 60]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageOutputFormat::Png).unwrap();
        base64::engine::general_purpose::STANDARD.encode(buf.into_inner())
    }

    fn service(classifier: Arc<dyn Classifier>, client: Arc<CountingClient>) -> AnalysisService {
        AnalysisService::new(
            classifier,
            DiseaseInfoService::new(client, NonZeroUsize::new(10).unwrap()),
        )
    }

    fn eczema() -> Arc<dyn Classifier> {
        Arc::new(FixedClassifier(Prediction {
            class: "Eczema".into(),
            confidence: 0.87,
        }))
    }

    #[tokio::test]
    async fn test_analyze_merges_prediction_and_disease_info() {
        let client = Arc::new(CountingClient::default());
        let result = service(eczema(), client).analyze(&png_base64()).await.unwrap();

        assert_eq!(result.disease, "Eczema");
        assert_eq!(result.confidence, 0.87);
        assert_eq!(result.description, "A rash.");
        assert_eq!(result.symptoms, vec!["Redness"]);
        assert_eq!(result.treatments, vec!["Topical cream"]);
        assert_eq!(result.medical_care, vec!["If it spreads"]);
    }

    #[tokio::test]
    async fn test_invalid_base64_is_client_error() {
        let client = Arc::new(CountingClient::default());
        let err = service(eczema(), client.clone())
            .analyze("this is not base64 ~~~")
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_classifier_failure_is_server_error() {
        let client = Arc::new(CountingClient::default());
        let err = service(Arc::new(FailingClassifier), client)
            .analyze(&png_base64())
            .await
            .unwrap_err();

        assert!(matches!(err, DermError::Classification(_)));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_repeated_label_uses_cached_info() {
        let client = Arc::new(CountingClient::default());
        let service = service(eczema(), client.clone());

        service.analyze(&png_base64()).await.unwrap();
        service.analyze(&png_base64()).await.unwrap();

        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }
}
