//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! services. Request handling never reads process-wide environment variables.

use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CLASSIFIER_TIMEOUT, DEFAULT_COMPLETION_MODEL, DEFAULT_COMPLETION_TIMEOUT,
    DEFAULT_DISEASE_INFO_CACHE_SIZE,
};
use crate::{DermError, DermResult};

pub const ENV_COMPLETION_API_KEY: &str = "DEEPSEEK_API";
pub const ENV_COMPLETION_URL: &str = "DEEPSEEK_URL";
pub const ENV_COMPLETION_MODEL: &str = "DEEPSEEK_MODEL";
pub const ENV_COMPLETION_TIMEOUT_SECS: &str = "DEEPSEEK_TIMEOUT_SECS";
pub const ENV_CLASSIFIER_URL: &str = "CLASSIFIER_URL";
pub const ENV_DISEASE_INFO_CACHE_SIZE: &str = "DISEASE_INFO_CACHE_SIZE";

/// Settings for the chat-completion collaborator.
///
/// A missing `api_url` is not a startup error: every disease-info lookup then
/// resolves to the unavailable fallback content.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Settings for the image classifier collaborator.
#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub url: Option<String>,
    pub timeout: Duration,
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    completion: CompletionConfig,
    classifier: ClassifierConfig,
    disease_info_cache_size: NonZeroUsize,
}

impl CoreConfig {
    /// Resolve configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `DermError::InvalidConfig` if a numeric variable cannot be parsed
    /// or the cache size is zero.
    pub fn from_env() -> DermResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DermResult<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let completion_timeout = get(ENV_COMPLETION_TIMEOUT_SECS)
            .map(|v| parse_secs(ENV_COMPLETION_TIMEOUT_SECS, &v))
            .transpose()?
            .unwrap_or(DEFAULT_COMPLETION_TIMEOUT);

        let cache_size = match get(ENV_DISEASE_INFO_CACHE_SIZE) {
            Some(v) => v.parse::<usize>().map_err(|e| {
                DermError::InvalidConfig(format!("{ENV_DISEASE_INFO_CACHE_SIZE}={v}: {e}"))
            })?,
            None => DEFAULT_DISEASE_INFO_CACHE_SIZE,
        };
        let disease_info_cache_size = NonZeroUsize::new(cache_size).ok_or_else(|| {
            DermError::InvalidConfig(format!("{ENV_DISEASE_INFO_CACHE_SIZE} must be at least 1"))
        })?;

        Ok(Self {
            completion: CompletionConfig {
                api_key: get(ENV_COMPLETION_API_KEY),
                api_url: get(ENV_COMPLETION_URL),
                model: get(ENV_COMPLETION_MODEL)
                    .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
                timeout: completion_timeout,
            },
            classifier: ClassifierConfig {
                url: get(ENV_CLASSIFIER_URL),
                timeout: DEFAULT_CLASSIFIER_TIMEOUT,
            },
            disease_info_cache_size,
        })
    }

    pub fn completion(&self) -> &CompletionConfig {
        &self.completion
    }

    pub fn classifier(&self) -> &ClassifierConfig {
        &self.classifier
    }

    pub fn disease_info_cache_size(&self) -> NonZeroUsize {
        self.disease_info_cache_size
    }
}

fn parse_secs(key: &str, value: &str) -> DermResult<Duration> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| DermError::InvalidConfig(format!("{key}={value}: {e}")))
}
