//! Fixed text: the disease-info prompt and the two fallback content sets.
//!
//! [`fill_missing_sections`] patches the gaps in a parsed completion, while
//! [`unavailable_info`] stands in for the whole result when the completion
//! could not be obtained. The wording of the two sets differs on purpose so
//! that callers can tell which path produced a result.

use crate::sections::SectionedInfo;

/// System instruction sent ahead of every disease-info prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a knowledgeable dermatology assistant. Provide clear, accurate medical information about skin conditions. Use the exact format requested with clear section headers. Keep information concise but comprehensive.";

pub const DEFAULT_SYMPTOMS: [&str; 3] = [
    "Visible changes in skin appearance",
    "May cause discomfort or irritation",
    "Consult a healthcare provider for accurate symptom assessment",
];

pub const DEFAULT_TREATMENTS: [&str; 4] = [
    "Consult a dermatologist for proper diagnosis and treatment plan",
    "Keep the affected area clean and dry",
    "Avoid scratching or further irritating the area",
    "Follow healthcare provider's recommendations",
];

pub const DEFAULT_MEDICAL_CARE: [&str; 4] = [
    "If symptoms persist or worsen",
    "If you experience pain or severe discomfort",
    "If the condition spreads to other areas",
    "For proper diagnosis and treatment recommendations",
];

pub const UNAVAILABLE_SYMPTOMS: [&str; 3] = [
    "Visible changes in skin appearance",
    "May cause discomfort or irritation",
    "Symptoms may vary between individuals",
];

pub const UNAVAILABLE_TREATMENTS: [&str; 3] = [
    "Consult a dermatologist for proper diagnosis and treatment plan",
    "Keep the affected area clean and dry",
    "Avoid scratching or further irritating the area",
];

pub const UNAVAILABLE_MEDICAL_CARE: [&str; 3] = [
    "If symptoms persist or worsen",
    "If you experience pain or severe discomfort",
    "For proper diagnosis and treatment recommendations",
];

/// Builds the user prompt asking for the four labelled sections.
pub fn disease_prompt(disease_name: &str) -> String {
    format!(
        r#"Provide comprehensive medical information about the skin condition "{disease_name}". Format your response exactly as follows:

Description:
Provide a clear, detailed overview of the condition in 2-3 sentences. Include what causes it, what it looks like, and who it typically affects.

Symptoms:
List the main symptoms and signs of this condition. Each symptom should be on a separate line.

Treatment:
List the available treatment options, including both medical treatments and home care recommendations. Each treatment should be on a separate line.

When to Seek Medical Care:
List specific situations when someone should see a doctor for this condition. Each situation should be on a separate line.

Please provide accurate, helpful medical information while being clear that this is for educational purposes only."#
    )
}

/// Description used when a completion for `disease_name` parsed without one.
pub fn default_description(disease_name: &str) -> String {
    format!(
        "{disease_name} is a skin condition that requires medical evaluation for proper diagnosis and treatment."
    )
}

/// Replaces every empty section of a parsed completion with its default.
pub fn fill_missing_sections(mut info: SectionedInfo, disease_name: &str) -> SectionedInfo {
    if info.description.is_empty() {
        info.description = default_description(disease_name);
    }
    if info.symptoms.is_empty() {
        info.symptoms = owned(&DEFAULT_SYMPTOMS);
    }
    if info.treatments.is_empty() {
        info.treatments = owned(&DEFAULT_TREATMENTS);
    }
    if info.medical_care.is_empty() {
        info.medical_care = owned(&DEFAULT_MEDICAL_CARE);
    }
    info
}

/// Content returned when no completion could be obtained for `disease_name`.
pub fn unavailable_info(disease_name: &str) -> SectionedInfo {
    SectionedInfo {
        description: format!(
            "A skin condition identified as {disease_name}. Please consult a healthcare professional for proper diagnosis and treatment."
        ),
        symptoms: owned(&UNAVAILABLE_SYMPTOMS),
        treatments: owned(&UNAVAILABLE_TREATMENTS),
        medical_care: owned(&UNAVAILABLE_MEDICAL_CARE),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
