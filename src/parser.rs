//! Markdown flashcard field extraction.
//!
//! Obsidian-exported flashcards follow one fixed template; each field has its
//! own pattern so template tweaks stay localized. Pure functions, no I/O.

use std::fmt;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::WordRecord;

// Title line: "## 🈶 Kanji : 火 - Feu / Flamme". Half-width and full-width
// colons both occur in exported vaults.
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"##\s*🈶\s*Kanji\s*[:：]\s*([^-]+)\s*-\s*(.+)").unwrap());
static ONYOMI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Lecture\s+\*onyomi\*\s*[:：]\s*([^(\n]+)").unwrap());
static KUNYOMI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Lecture\s+\*kunyomi\*\s*[:：]\s*([^(\n]+)").unwrap());
static TRADUCTION_EN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Traduction\s+EN\s*[:：]\s*(.+)").unwrap());
static TYPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Type\s*[:：]\s*#?(\w+)").unwrap());
static THEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Thème\s*[:：]\s*#?(\w+)").unwrap());
static TAGS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Tags\s*[:：]\s*(.+)").unwrap());

/// Returned when a markdown file does not yield a storable record
/// (no kanji title line, or the kanji trimmed to nothing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub filename: String,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to parse {}", self.filename)
    }
}

impl std::error::Error for ParseFailure {}

/// Extract a word record from one flashcard.
///
/// Each pattern is matched independently against the full content,
/// first-match-only; a missing pattern leaves its field absent. The record
/// is only built when the title line yielded a non-empty kanji.
pub fn parse_word(content: &str, filename: &str) -> Result<WordRecord, ParseFailure> {
    let (kanji, traduction_fr) = match TITLE_RE.captures(content) {
        Some(caps) => (
            Some(caps[1].trim().to_string()),
            Some(caps[2].trim().to_string()),
        ),
        None => (None, None),
    };

    let kanji = match kanji.filter(|k| !k.is_empty()) {
        Some(k) => k,
        None => {
            return Err(ParseFailure {
                filename: filename.to_string(),
            });
        }
    };

    let tags = TAGS_RE.captures(content).map(|caps| {
        caps[1]
            .split('#')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    Ok(WordRecord {
        id: uuid::Uuid::new_v4().to_string(),
        filename: filename.to_string(),
        created_at: Utc::now(),
        kanji,
        traduction_fr,
        traduction_en: extract_field(&TRADUCTION_EN_RE, content),
        onyomi: extract_field(&ONYOMI_RE, content),
        kunyomi: extract_field(&KUNYOMI_RE, content),
        word_type: extract_field(&TYPE_RE, content),
        theme: extract_field(&THEME_RE, content),
        tags,
    })
}

fn extract_field(re: &Regex, content: &str) -> Option<String> {
    re.captures(content).map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRE_MD: &str = "\
## 🈶 Kanji : 火 - Feu / Flamme

Lecture *onyomi* : カ (ka)
Lecture *kunyomi* : ひ (hi)
Traduction EN : fire
Type : #nom
Thème : #nature
Tags : #feu #element
";

    #[test]
    fn test_parse_full_record() {
        let word = parse_word(FIRE_MD, "fire.md").unwrap();
        assert_eq!(word.kanji, "火");
        assert_eq!(word.traduction_fr.as_deref(), Some("Feu / Flamme"));
        assert_eq!(word.onyomi.as_deref(), Some("カ"));
        assert_eq!(word.kunyomi.as_deref(), Some("ひ"));
        assert_eq!(word.traduction_en.as_deref(), Some("fire"));
        assert_eq!(word.word_type.as_deref(), Some("nom"));
        assert_eq!(word.theme.as_deref(), Some("nature"));
        assert_eq!(
            word.tags,
            Some(vec!["feu".to_string(), "element".to_string()])
        );
        assert_eq!(word.filename, "fire.md");
    }

    #[test]
    fn test_missing_kanji_title_fails() {
        // Other fields present, but no title line: not storable
        let content = "Lecture *onyomi* : カ (ka)\nType : #nom\n";
        let err = parse_word(content, "notes.md").unwrap_err();
        assert_eq!(err.filename, "notes.md");
        assert_eq!(err.to_string(), "Failed to parse notes.md");
    }

    #[test]
    fn test_whitespace_only_kanji_fails() {
        let content = "## 🈶 Kanji :   - Feu\n";
        assert!(parse_word(content, "blank.md").is_err());
    }

    #[test]
    fn test_full_width_colon_accepted() {
        let content = "## 🈶 Kanji ： 水 - Eau\n";
        let word = parse_word(content, "water.md").unwrap();
        assert_eq!(word.kanji, "水");
        assert_eq!(word.traduction_fr.as_deref(), Some("Eau"));
    }

    #[test]
    fn test_onyomi_stops_at_parenthesis() {
        let content = "## 🈶 Kanji : 木 - Arbre\nLecture *onyomi* : モク、ボク (moku, boku)\n";
        let word = parse_word(content, "tree.md").unwrap();
        assert_eq!(word.onyomi.as_deref(), Some("モク、ボク"));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let word = parse_word("## 🈶 Kanji : 日 - Soleil\n", "sun.md").unwrap();
        assert!(word.onyomi.is_none());
        assert!(word.kunyomi.is_none());
        assert!(word.traduction_en.is_none());
        assert!(word.word_type.is_none());
        assert!(word.theme.is_none());
        assert!(word.tags.is_none());
    }

    #[test]
    fn test_tags_drop_empty_segments_keep_order() {
        let content = "## 🈶 Kanji : 山 - Montagne\nTags : #a ## b #\n";
        let word = parse_word(content, "mountain.md").unwrap();
        assert_eq!(word.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_type_hash_stripped() {
        let content = "## 🈶 Kanji : 犬 - Chien\nType : #nom\nThème : #animaux\n";
        let word = parse_word(content, "dog.md").unwrap();
        assert_eq!(word.word_type.as_deref(), Some("nom"));
        assert_eq!(word.theme.as_deref(), Some("animaux"));
    }

    #[test]
    fn test_first_match_only() {
        let content = "## 🈶 Kanji : 火 - Feu\nType : #nom\nType : #verbe\n";
        let word = parse_word(content, "dup.md").unwrap();
        assert_eq!(word.word_type.as_deref(), Some("nom"));
    }
}
