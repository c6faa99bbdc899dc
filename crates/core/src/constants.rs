//! Constants used throughout the derm core crate.
//!
//! Collaborator request parameters and configuration defaults live here so the
//! binaries and the services agree on them.

use std::time::Duration;

/// Sampling temperature sent with every disease-info completion request.
pub const COMPLETION_TEMPERATURE: f32 = 0.3;

/// Upper bound on tokens the LLM may generate for one disease.
pub const COMPLETION_MAX_TOKENS: u32 = 1000;

/// Default timeout for one completion request.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// Default model identifier sent to the chat-completion endpoint.
pub const DEFAULT_COMPLETION_MODEL: &str = "deepseek/deepseek-chat";

/// Default timeout for one classifier request.
pub const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of diseases whose sectioned info is kept in memory.
pub const DEFAULT_DISEASE_INFO_CACHE_SIZE: usize = 100;

/// Default bind address of the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Value of the `HTTP-Referer` header sent to the LLM provider.
pub const HTTP_REFERER: &str = "http://localhost:8000";

/// Value of the `X-Title` header sent to the LLM provider.
pub const APP_TITLE: &str = "Skin Disease Detection System";

/// Number of characters of a raw completion echoed to the debug log.
pub const RAW_COMPLETION_LOG_CHARS: usize = 200;
