use crate::types::{HealthRes, RootRes};

/// Identifies the LLM family backing disease information in health reports.
pub const MODEL_NAME: &str = "deepseek";

/// Liveness and health reporting shared by every API surface.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Liveness payload served at the API root.
    pub fn root() -> RootRes {
        RootRes {
            message: "Skin Disease Detection API".into(),
            status: "running".into(),
        }
    }

    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "healthy".into(),
            model: MODEL_NAME.into(),
        }
    }
}
