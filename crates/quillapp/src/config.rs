//! # Configuration
//!
//! Quill configuration is managed by [`confique`]: a TOML file layered over
//! environment variables (`QUILL_PAGE_SIZE`, ...) over compiled defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `5` | Posts per page in listings |
//! | `search_delay_ms` | `1000` | Debounce window for live search |
//! | `search_fields` | `["title", "content"]` | Fields the search matcher looks at |

use crate::error::Result;
use crate::search::SearchField;
use confique::Config;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

static DEFAULT_SEARCH_FIELDS: Lazy<Vec<SearchField>> =
    Lazy::new(|| vec![SearchField::Title, SearchField::Content]);

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuillConfig {
    /// Posts per page in listings.
    #[config(default = 5, env = "QUILL_PAGE_SIZE")]
    pub page_size: usize,

    /// Debounce window for live search, in milliseconds.
    #[config(default = 1000, env = "QUILL_SEARCH_DELAY_MS")]
    pub search_delay_ms: u64,

    /// Field names the search matcher looks at. Unknown names are ignored.
    /// When absent, defaults to ["title", "content"].
    pub search_fields: Option<Vec<String>>,
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            search_delay_ms: 1000,
            search_fields: None,
        }
    }
}

impl QuillConfig {
    /// Layered load: env over `path` (if it exists) over defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config = QuillConfig::builder()
            .env()
            .file(path)
            .load()?;
        Ok(config)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Resolved search field list. Unknown names are dropped; an empty or
    /// all-unknown list falls back to the default so search never goes
    /// blind.
    pub fn search_fields(&self) -> Vec<SearchField> {
        let Some(names) = &self.search_fields else {
            return DEFAULT_SEARCH_FIELDS.clone();
        };
        let fields: Vec<SearchField> = names
            .iter()
            .filter_map(|name| SearchField::from_name(name))
            .collect();
        if fields.is_empty() {
            DEFAULT_SEARCH_FIELDS.clone()
        } else {
            fields
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuillConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.search_delay(), Duration::from_millis(1000));
        assert_eq!(
            config.search_fields(),
            vec![SearchField::Title, SearchField::Content]
        );
    }

    #[test]
    fn test_search_fields_parse_known_names() {
        let config = QuillConfig {
            search_fields: Some(vec!["author".into(), "title".into()]),
            ..Default::default()
        };
        assert_eq!(
            config.search_fields(),
            vec![SearchField::Author, SearchField::Title]
        );
    }

    #[test]
    fn test_unknown_field_names_are_dropped() {
        let config = QuillConfig {
            search_fields: Some(vec!["title".into(), "likes".into()]),
            ..Default::default()
        };
        // `likes` is not a string field and therefore not searchable.
        assert_eq!(config.search_fields(), vec![SearchField::Title]);
    }

    #[test]
    fn test_all_unknown_falls_back_to_default() {
        let config = QuillConfig {
            search_fields: Some(vec!["likes".into()]),
            ..Default::default()
        };
        assert_eq!(
            config.search_fields(),
            vec![SearchField::Title, SearchField::Content]
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let toml = "page_size = 10\nsearch_delay_ms = 800\nsearch_fields = [\"title\"]\n";
        let config: QuillConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_delay(), Duration::from_millis(800));
        assert_eq!(config.search_fields(), vec![SearchField::Title]);
    }
}
