//! Request and response bodies of the HTTP API.
//!
//! Field names follow the contract existing clients already consume, which
//! includes the capitalised `Symptoms` key of [`AnalyzeRes`].

use derm_core::AnalysisResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootRes {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeReq {
    /// Base64 encoded image, optionally as a `data:` URL
    pub image_data: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRes {
    pub disease: String,
    pub confidence: f64,
    pub description: String,
    #[serde(rename = "Symptoms")]
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub medical_care: Vec<String>,
}

impl From<AnalysisResult> for AnalyzeRes {
    fn from(result: AnalysisResult) -> Self {
        Self {
            disease: result.disease,
            confidence: result.confidence,
            description: result.description,
            symptoms: result.symptoms,
            treatments: result.treatments,
            medical_care: result.medical_care,
        }
    }
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_res_uses_capitalised_symptoms_key() {
        let res = AnalyzeRes {
            disease: "Eczema".into(),
            confidence: 0.9,
            description: "A rash.".into(),
            symptoms: vec!["Redness".into()],
            treatments: vec![],
            medical_care: vec![],
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["Symptoms"][0], "Redness");
        assert!(json.get("symptoms").is_none());
    }

    #[test]
    fn test_analyze_req_user_id_is_optional() {
        let req: AnalyzeReq = serde_json::from_str(r#"{"image_data": "abc"}"#).unwrap();
        assert_eq!(req.image_data, "abc");
        assert_eq!(req.user_id, None);

        let req: AnalyzeReq =
            serde_json::from_str(r#"{"image_data": "abc", "user_id": 7}"#).unwrap();
        assert_eq!(req.user_id, Some(7));
    }
}
