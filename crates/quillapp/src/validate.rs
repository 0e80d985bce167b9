//! # Post Validation
//!
//! A named-rule schema for the editor form: each rule owns one field and
//! produces at most one message. [`validate_post`] runs the whole schema and
//! returns a typed error map, so a UI can render inline field messages
//! without string matching.
//!
//! Validation failure blocks commit only. It is always a value
//! ([`ValidationErrors`]), never a panic, and the store is not touched when
//! it fires.

use crate::model::PostInput;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_TITLE_LEN: usize = 5;
pub const MIN_AUTHOR_LEN: usize = 3;
pub const MIN_CONTENT_LEN: usize = 100;
/// Lowercased extensions accepted for the optional image reference.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Author,
    Content,
    Tags,
    Image,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Content => "content",
            Field::Tags => "tags",
            Field::Image => "image",
        }
    }
}

/// Field → message map produced by a failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field.name(), message)?;
            first = false;
        }
        Ok(())
    }
}

/// One rule of the schema: a field and its check. A check returns a message
/// when the rule is violated.
struct Rule {
    field: Field,
    check: fn(&PostInput) -> Option<String>,
}

const RULES: &[Rule] = &[
    Rule { field: Field::Title, check: check_title },
    Rule { field: Field::Author, check: check_author },
    Rule { field: Field::Content, check: check_content },
    Rule { field: Field::Tags, check: check_tags },
    Rule { field: Field::Image, check: check_image },
];

fn check_title(input: &PostInput) -> Option<String> {
    if input.title.trim().chars().count() < MIN_TITLE_LEN {
        Some(format!("Title must be at least {} characters", MIN_TITLE_LEN))
    } else {
        None
    }
}

fn check_author(input: &PostInput) -> Option<String> {
    if input.author.trim().chars().count() < MIN_AUTHOR_LEN {
        Some(format!("Author name must be at least {} characters", MIN_AUTHOR_LEN))
    } else {
        None
    }
}

fn check_content(input: &PostInput) -> Option<String> {
    if input.content.trim().chars().count() < MIN_CONTENT_LEN {
        Some(format!("Content must be at least {} characters", MIN_CONTENT_LEN))
    } else {
        None
    }
}

fn check_tags(input: &PostInput) -> Option<String> {
    if input.tags.is_empty() {
        Some("At least one tag is required".to_string())
    } else {
        None
    }
}

fn check_image(input: &PostInput) -> Option<String> {
    let image = input.image.as_deref()?;
    let extension = image.rsplit('.').next().unwrap_or("").to_lowercase();
    if ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        None
    } else {
        Some("Only JPEG, PNG, and GIF images are allowed".to_string())
    }
}

/// Run every rule of the schema against the form.
pub fn validate_post(input: &PostInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for rule in RULES {
        if let Some(message) = (rule.check)(input) {
            errors.insert(rule.field, message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> PostInput {
        PostInput {
            title: "A perfectly fine title".into(),
            author: "Ada".into(),
            content: "x".repeat(MIN_CONTENT_LEN),
            category: "rust".into(),
            tags: vec!["systems".into()],
            image: None,
            is_published: true,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_post(&valid_input()).is_ok());
    }

    #[test]
    fn test_short_title_blocked_with_message() {
        let input = PostInput {
            title: "Hi".into(),
            ..valid_input()
        };

        let errors = validate_post(&input).unwrap_err();
        assert_eq!(
            errors.get(Field::Title),
            Some("Title must be at least 5 characters")
        );
    }

    #[test]
    fn test_title_whitespace_does_not_count() {
        let input = PostInput {
            title: "  Hi   ".into(),
            ..valid_input()
        };
        assert!(validate_post(&input).is_err());
    }

    #[test]
    fn test_short_author() {
        let input = PostInput {
            author: "Al".into(),
            ..valid_input()
        };
        let errors = validate_post(&input).unwrap_err();
        assert!(errors.get(Field::Author).is_some());
    }

    #[test]
    fn test_short_content() {
        let input = PostInput {
            content: "too short".into(),
            ..valid_input()
        };
        let errors = validate_post(&input).unwrap_err();
        assert_eq!(
            errors.get(Field::Content),
            Some("Content must be at least 100 characters")
        );
    }

    #[test]
    fn test_no_tags() {
        let input = PostInput {
            tags: Vec::new(),
            ..valid_input()
        };
        let errors = validate_post(&input).unwrap_err();
        assert_eq!(errors.get(Field::Tags), Some("At least one tag is required"));
    }

    #[test]
    fn test_image_extension() {
        let ok = PostInput {
            image: Some("cover.PNG".into()),
            ..valid_input()
        };
        assert!(validate_post(&ok).is_ok());

        let bad = PostInput {
            image: Some("cover.bmp".into()),
            ..valid_input()
        };
        let errors = validate_post(&bad).unwrap_err();
        assert_eq!(
            errors.get(Field::Image),
            Some("Only JPEG, PNG, and GIF images are allowed")
        );
    }

    #[test]
    fn test_missing_image_is_fine() {
        let input = PostInput {
            image: None,
            ..valid_input()
        };
        assert!(validate_post(&input).is_ok());
    }

    #[test]
    fn test_collects_every_violated_field() {
        let input = PostInput::default();
        let errors = validate_post(&input).unwrap_err();

        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![Field::Title, Field::Author, Field::Content, Field::Tags]
        );
    }

    #[test]
    fn test_display_joins_messages() {
        let input = PostInput {
            title: "Hi".into(),
            tags: Vec::new(),
            ..valid_input()
        };
        let errors = validate_post(&input).unwrap_err();
        let rendered = errors.to_string();
        assert!(rendered.contains("title: Title must be at least 5 characters"));
        assert!(rendered.contains("tags: At least one tag is required"));
    }
}
