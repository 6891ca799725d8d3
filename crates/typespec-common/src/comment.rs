//! Doc comments as emitted by the documentation extractor.
//!
//! Comments are copied from the reflection tree without reformatting. The
//! only operation performed on them is [`Comment::merge_over`], used when an
//! alias contributes its own comment on top of the aliased type's comment.

use serde::{Deserialize, Serialize};

/// A doc comment attached to a declaration, parameter or type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// First paragraph of the comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
    /// Remaining body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Text of an `@returns` tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    /// Any other block tags (`@example`, `@deprecated`, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<CommentTag>,
}

/// A single block tag inside a [`Comment`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentTag {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl Comment {
    /// Comment with only a short text.
    pub fn short(text: impl Into<String>) -> Self {
        Self {
            short_text: Some(text.into()),
            ..Self::default()
        }
    }

    /// True when no field carries any content.
    pub fn is_empty(&self) -> bool {
        self.short_text.is_none()
            && self.text.is_none()
            && self.returns.is_none()
            && self.tags.is_empty()
    }

    /// Overlay `overlay` on top of `base`, field by field.
    ///
    /// Fields present on the overlay win; fields the overlay lacks keep the
    /// base value. Tags are replaced as a whole when the overlay has any.
    pub fn merge_over(base: Option<Comment>, overlay: &Comment) -> Comment {
        let base = base.unwrap_or_default();
        Comment {
            short_text: overlay.short_text.clone().or(base.short_text),
            text: overlay.text.clone().or(base.text),
            returns: overlay.returns.clone().or(base.returns),
            tags: if overlay.tags.is_empty() {
                base.tags
            } else {
                overlay.tags.clone()
            },
        }
    }

    /// The text a renderer should show as a one-line summary.
    pub fn summary(&self) -> Option<&str> {
        self.short_text
            .as_deref()
            .or_else(|| self.text.as_deref().and_then(|t| t.split("\n\n").next()))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
