//! Word catalog database operations (words)

use chrono::{DateTime, Utc};
use rusqlite::{Result as SqliteResult, Row};

use super::super::Database;
use crate::models::WordRecord;

impl Database {
    /// Insert one parsed word record.
    pub fn insert_word(&self, word: &WordRecord) -> SqliteResult<()> {
        let conn = self.conn();
        let tags_json = word
            .tags
            .as_ref()
            .and_then(|tags| serde_json::to_string(tags).ok());

        conn.execute(
            "INSERT INTO words (id, filename, created_at, kanji, traduction_fr, traduction_en,
                                onyomi, kunyomi, word_type, theme, tags)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                &word.id,
                &word.filename,
                &word.created_at.to_rfc3339(),
                &word.kanji,
                &word.traduction_fr,
                &word.traduction_en,
                &word.onyomi,
                &word.kunyomi,
                &word.word_type,
                &word.theme,
                &tags_json,
            ],
        )?;
        Ok(())
    }

    /// Delete the entire catalog. Returns the number of deleted records.
    pub fn clear_words(&self) -> SqliteResult<usize> {
        let conn = self.conn();
        conn.execute("DELETE FROM words", [])
    }

    /// List all word records, newest first.
    pub fn list_words(&self) -> SqliteResult<Vec<WordRecord>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, filename, created_at, kanji, traduction_fr, traduction_en,
                    onyomi, kunyomi, word_type, theme, tags
             FROM words ORDER BY created_at DESC",
        )?;

        let words = stmt
            .query_map([], |row| Self::row_to_word(row))?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(words)
    }

    fn row_to_word(row: &Row) -> rusqlite::Result<WordRecord> {
        let created_at_str: String = row.get(2)?;
        let tags_json: Option<String> = row.get(10)?;

        Ok(WordRecord {
            id: row.get(0)?,
            filename: row.get(1)?,
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .unwrap()
                .with_timezone(&Utc),
            kanji: row.get(3)?,
            traduction_fr: row.get(4)?,
            traduction_en: row.get(5)?,
            onyomi: row.get(6)?,
            kunyomi: row.get(7)?,
            word_type: row.get(8)?,
            theme: row.get(9)?,
            tags: tags_json.and_then(|json| serde_json::from_str(&json).ok()),
        })
    }
}
