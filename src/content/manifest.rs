//! Manifest parsing
//!
//! The manifest is a JSON object with a `posts` list. Every field of a post
//! record is free-form string metadata exposed to the template as a
//! placeholder; `file` and `date` are required, and `date` must parse as a
//! calendar date.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::error::BuildError;
use crate::helpers::date::parse_date;

/// Raw manifest shape
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub posts: Vec<IndexMap<String, String>>,
}

/// One post record with its required fields pulled out
#[derive(Debug, Clone)]
pub struct PostEntry {
    /// Relative markdown path as written in the manifest
    pub file: String,
    /// Parsed publish date, used for index ordering
    pub date: NaiveDate,
    /// All manifest fields in insertion order, including `file` and `date`
    pub fields: IndexMap<String, String>,
}

impl Manifest {
    /// Parse manifest text into validated post entries
    ///
    /// `path` is only used for error reporting. Entries keep their manifest
    /// order, which later acts as the tiebreaker for the index sort.
    pub fn parse(path: &Path, raw: &str) -> Result<Vec<PostEntry>, BuildError> {
        let manifest: Manifest =
            serde_json::from_str(raw).map_err(|source| BuildError::Manifest {
                path: path.to_path_buf(),
                source,
            })?;

        let mut entries = Vec::with_capacity(manifest.posts.len());
        for (index, fields) in manifest.posts.into_iter().enumerate() {
            let file = fields
                .get("file")
                .cloned()
                .ok_or(BuildError::MissingField {
                    index,
                    field: "file",
                })?;
            let raw_date = fields
                .get("date")
                .cloned()
                .ok_or(BuildError::MissingField {
                    index,
                    field: "date",
                })?;
            let date = parse_date(&raw_date).ok_or_else(|| BuildError::InvalidDate {
                file: file.clone(),
                value: raw_date,
            })?;

            entries.push(PostEntry { file, date, fields });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Vec<PostEntry>, BuildError> {
        Manifest::parse(Path::new("blog.json"), raw)
    }

    #[test]
    fn test_parse_manifest() {
        let entries = parse(
            r#"{"posts": [
                {"file": "blog/a.md", "date": "2024-01-01", "title": "A", "tags": "misc"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file, "blog/a.md");
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        // all fields stay available as placeholders, in manifest order
        let keys: Vec<_> = entries[0].fields.keys().cloned().collect();
        assert_eq!(keys, vec!["file", "date", "title", "tags"]);
    }

    #[test]
    fn test_missing_file_field() {
        let err = parse(r#"{"posts": [{"date": "2024-01-01"}]}"#).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MissingField { index: 0, field: "file" }
        ));
    }

    #[test]
    fn test_missing_date_field() {
        let err = parse(r#"{"posts": [{"file": "blog/a.md"}]}"#).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MissingField { index: 0, field: "date" }
        ));
    }

    #[test]
    fn test_malformed_date() {
        let err = parse(r#"{"posts": [{"file": "blog/a.md", "date": "someday"}]}"#).unwrap_err();
        assert!(matches!(err, BuildError::InvalidDate { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse("{not json").unwrap_err();
        assert!(matches!(err, BuildError::Manifest { .. }));
    }

    #[test]
    fn test_empty_posts_list() {
        assert!(parse(r#"{"posts": []}"#).unwrap().is_empty());
    }
}
