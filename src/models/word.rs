use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vocabulary entry parsed from a single Obsidian markdown flashcard.
///
/// `kanji` is the only mandatory field: the parser refuses to build a record
/// without it, so every stored record carries one. Optional fields that were
/// absent in the source file are omitted from JSON output entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    pub kanji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traduction_fr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traduction_en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onyomi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kunyomi: Option<String>,
    /// Free-form category, e.g. "nom" or "verbe"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub word_type: Option<String>,
    /// Free-form category, e.g. "nature"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
