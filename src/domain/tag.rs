//! Tag value type

use serde::{Deserialize, Serialize};

/// A single prompt tag.
///
/// `id` and `text` travel together: every transformation is applied to both
/// fields independently and produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub text: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Tag {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Create a tag whose id and text are the same string
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Tag {
            id: text.clone(),
            text,
        }
    }

    /// Apply one string function to both `id` and `text`
    pub fn transform<F>(&self, f: F) -> Tag
    where
        F: Fn(&str) -> String,
    {
        Tag {
            id: f(&self.id),
            text: f(&self.text),
        }
    }
}
