//! # Derm Core
//!
//! Core business logic for the skin disease detection service.
//!
//! This crate contains the analysis pipeline and its collaborators:
//! - Decoding uploaded base64 images
//! - Classifying them through an external model
//! - Enriching the predicted label with LLM-written disease information,
//!   parsed into description, symptoms, treatments and medical-care sections
//!
//! **No API concerns**: HTTP routing, CORS and OpenAPI belong in `api-rest` or `api-shared`.

pub mod analysis;
pub mod cache;
pub mod classifier;
pub mod completion;
pub mod config;
pub mod constants;
pub mod defaults;
pub mod disease_info;
pub mod error;
pub mod sections;
pub mod text;
pub mod upload;

pub use analysis::{AnalysisResult, AnalysisService};
pub use classifier::{Classifier, Prediction, RemoteClassifier};
pub use completion::{ChatCompletionClient, CompletionClient, CompletionError, CompletionRequest};
pub use config::CoreConfig;
pub use disease_info::DiseaseInfoService;
pub use error::{DermError, DermResult};
pub use sections::SectionedInfo;
