//! Disease information lookup.
//!
//! Turns a classifier label into [`SectionedInfo`] by prompting the completion
//! collaborator and parsing its reply. The lookup is infallible from the
//! caller's point of view: collaborator and parsing failures resolve to the
//! unavailable fallback content, and results (fallbacks included) are memoised
//! per label.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::cache::DiseaseInfoCache;
use crate::completion::{CompletionClient, CompletionError, CompletionRequest};
use crate::constants::{COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE, RAW_COMPLETION_LOG_CHARS};
use crate::defaults::{disease_prompt, fill_missing_sections, unavailable_info, SYSTEM_INSTRUCTION};
use crate::sections::{self, SectionedInfo};

/// Cached, fallback-protected disease information lookups.
#[derive(Clone)]
pub struct DiseaseInfoService {
    client: Arc<dyn CompletionClient>,
    cache: Arc<DiseaseInfoCache>,
}

impl DiseaseInfoService {
    pub fn new(client: Arc<dyn CompletionClient>, cache_size: NonZeroUsize) -> Self {
        Self {
            client,
            cache: Arc::new(DiseaseInfoCache::new(cache_size)),
        }
    }

    /// Returns sectioned information for `disease_name`.
    ///
    /// Every field of the result is populated. A cached entry is returned
    /// without contacting the collaborator. Two concurrent misses for the same
    /// label may both query the collaborator; the later insert wins.
    pub async fn get_disease_info(&self, disease_name: &str) -> SectionedInfo {
        if let Some(info) = self.cache.get(disease_name) {
            tracing::debug!(disease = disease_name, "disease info cache hit");
            return info;
        }

        let info = match self.fetch(disease_name).await {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(disease = disease_name, error = %e, "disease info unavailable, using fallback");
                unavailable_info(disease_name)
            }
        };

        self.cache.insert(disease_name, info.clone());
        info
    }

    async fn fetch(&self, disease_name: &str) -> Result<SectionedInfo, CompletionError> {
        tracing::info!(disease = disease_name, "requesting disease info");

        let request = CompletionRequest {
            system_prompt: SYSTEM_INSTRUCTION.to_string(),
            user_prompt: disease_prompt(disease_name),
            temperature: COMPLETION_TEMPERATURE,
            max_tokens: COMPLETION_MAX_TOKENS,
        };
        let content = self.client.complete(&request).await?;

        let preview: String = content.chars().take(RAW_COMPLETION_LOG_CHARS).collect();
        tracing::debug!(disease = disease_name, raw = %preview, "raw completion");

        let parsed = sections::parse(&content);
        tracing::debug!(disease = disease_name, sections = ?parsed, "parsed sections");

        Ok(fill_missing_sections(parsed, disease_name))
    }
}
