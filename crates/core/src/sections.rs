//! Splitting free-form disease prose into structured sections.
//!
//! The LLM is asked for four labelled sections but the reply is still free
//! text. [`parse`] makes a single forward pass over its lines, switching the
//! active [`Section`] whenever a line carries a header marker and filing every
//! other line into the active section.
//!
//! Header detection is a case-insensitive substring test, so a sentence that
//! merely mentions `treatment:` mid-line also switches section. That false
//! positive is accepted behaviour.

use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// List entries must be longer than this (in characters) to be kept at all.
const MIN_APPENDED_LEN: usize = 2;

/// List entries must be longer than this (in characters) to survive the final pass.
const MIN_ENTRY_LEN: usize = 5;

/// Structured disease information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionedInfo {
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub medical_care: Vec<String>,
}

/// The bucket a content line is filed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Description,
    Symptoms,
    Treatments,
    MedicalCare,
}

impl Section {
    /// Detects a section header in `line`, in priority order.
    ///
    /// The first matching marker wins, so a line mentioning both `symptoms:`
    /// and `treatment:` opens the symptoms section.
    pub fn detect(line: &str) -> Option<Section> {
        let lower = line.to_lowercase();
        if lower.contains("description:") {
            Some(Section::Description)
        } else if lower.contains("symptoms:") {
            Some(Section::Symptoms)
        } else if lower.contains("treatment:") {
            Some(Section::Treatments)
        } else if lower.contains("when to seek medical care:") || lower.contains("medical care:") {
            Some(Section::MedicalCare)
        } else {
            None
        }
    }
}

/// Parses a completion into sections.
///
/// Any of the four fields may come back empty; filling the gaps is left to
/// the caller.
pub fn parse(content: &str) -> SectionedInfo {
    let mut acc = SectionAccumulator::default();
    for line in content.lines() {
        acc.feed(line);
    }
    acc.finish()
}

/// Forward-pass state: the active section and one buffer per section.
#[derive(Debug, Default)]
struct SectionAccumulator {
    current: Option<Section>,
    description: String,
    symptoms: Vec<String>,
    treatments: Vec<String>,
    medical_care: Vec<String>,
}

impl SectionAccumulator {
    fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        if let Some(section) = Section::detect(line) {
            self.current = Some(section);
            if section == Section::Description {
                // Text after the colon on the header line seeds the description.
                let after_colon = line.split_once(':').map(|(_, rest)| normalize(rest));
                if let Some(seed) = after_colon.filter(|s| !s.is_empty()) {
                    self.description = seed;
                }
            }
            return;
        }

        if is_markup_only(line) {
            return;
        }

        let cleaned = normalize(line);
        if cleaned.is_empty() {
            return;
        }

        let list = match self.current {
            None => return,
            Some(Section::Description) => {
                if !self.description.is_empty() {
                    self.description.push(' ');
                }
                self.description.push_str(&cleaned);
                return;
            }
            Some(Section::Symptoms) => &mut self.symptoms,
            Some(Section::Treatments) => &mut self.treatments,
            Some(Section::MedicalCare) => &mut self.medical_care,
        };
        if cleaned.chars().count() > MIN_APPENDED_LEN {
            list.push(cleaned);
        }
    }

    fn finish(self) -> SectionedInfo {
        SectionedInfo {
            description: self.description.trim().to_string(),
            symptoms: dedup_entries(self.symptoms),
            treatments: dedup_entries(self.treatments),
            medical_care: dedup_entries(self.medical_care),
        }
    }
}

/// Lines made only of whitespace and structural punctuation carry no content.
fn is_markup_only(line: &str) -> bool {
    line.chars().all(|c| {
        c.is_whitespace()
            || matches!(
                c,
                '`' | '~' | '{' | '}' | '[' | ']' | '\\' | '*' | '-' | '•'
            )
    })
}

/// Case-insensitive dedup keeping the first-seen casing; drops short entries.
fn dedup_entries(entries: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| entry.chars().count() > MIN_ENTRY_LEN)
        .filter(|entry| seen.insert(entry.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_four_sections() {
        let content = "Description:\nA rash.\nSymptoms:\nRedness\nItching\nTreatment:\nTopical cream\nWhen to Seek Medical Care:\nIf it spreads";
        let info = parse(content);
        assert_eq!(info.description, "A rash.");
        assert_eq!(info.symptoms, vec!["Redness", "Itching"]);
        assert_eq!(info.treatments, vec!["Topical cream"]);
        assert_eq!(info.medical_care, vec!["If it spreads"]);
    }

    #[test]
    fn test_parse_markdown_formatted_reply() {
        let content = "## **Description:**\nEczema is a chronic condition.\nIt often starts in childhood.\n\n### **Symptoms:**\n- **Dry skin**\n- Intense itching\n\n### **Treatment:**\n* Moisturisers applied daily\n* Topical corticosteroids\n\n### **When to Seek Medical Care:**\n- If the skin becomes infected";
        let info = parse(content);
        assert_eq!(
            info.description,
            "Eczema is a chronic condition. It often starts in childhood."
        );
        assert_eq!(info.symptoms, vec!["Dry skin", "Intense itching"]);
        assert_eq!(
            info.treatments,
            vec!["Moisturisers applied daily", "Topical corticosteroids"]
        );
        assert_eq!(info.medical_care, vec!["If the skin becomes infected"]);
    }

    #[test]
    fn test_description_header_trailing_text_seeds_description() {
        let info = parse("Description: A common rash.\nUsually harmless.");
        assert_eq!(info.description, "A common rash. Usually harmless.");
    }

    #[test]
    fn test_dedup_is_case_insensitive_and_keeps_first_casing() {
        let info = parse("Symptoms:\nItching\nitching\nITCHING\nRedness\nitching");
        assert_eq!(info.symptoms, vec!["Itching", "Redness"]);
    }

    #[test]
    fn test_short_entries_are_dropped() {
        let info = parse("Symptoms:\nRash\nPain!\nSwelling\nab");
        assert_eq!(info.symptoms, vec!["Swelling"]);
    }

    #[test]
    fn test_lines_before_any_header_are_dropped() {
        let info = parse("Here is the information you asked for.\nSymptoms:\nBlisters");
        assert_eq!(info.description, "");
        assert_eq!(info.symptoms, vec!["Blisters"]);
    }

    #[test]
    fn test_markup_only_lines_are_skipped_without_changing_section() {
        let info = parse("Treatment:\n```\n---\n{ }\n• \nCold compresses\n```");
        assert_eq!(info.treatments, vec!["Cold compresses"]);
    }

    #[test]
    fn test_medical_care_short_header() {
        let info = parse("Medical care:\nSeek help if fever develops");
        assert_eq!(info.medical_care, vec!["Seek help if fever develops"]);
    }

    #[test]
    fn test_header_detection_matches_mid_sentence() {
        let info = parse("Symptoms:\nRedness around the area\nSee the treatment: below\nOral antibiotics");
        assert_eq!(info.symptoms, vec!["Redness around the area"]);
        assert_eq!(info.treatments, vec!["Oral antibiotics"]);
    }

    #[test]
    fn test_header_priority_order() {
        assert_eq!(
            Section::detect("Symptoms: and Treatment:"),
            Some(Section::Symptoms)
        );
        assert_eq!(
            Section::detect("description: symptoms:"),
            Some(Section::Description)
        );
        assert_eq!(Section::detect("Unknown header:"), None);
    }

    #[test]
    fn test_empty_input_yields_empty_sections() {
        assert_eq!(parse(""), SectionedInfo::default());
        assert_eq!(parse("\n   \n"), SectionedInfo::default());
    }
}
