//! The closed type algebra.
//!
//! Every type expression the resolver understands is narrowed into one of
//! the [`TypeValue`] variants. Anything else is *unresolved*, which is
//! represented as `Option::<TypeValue>::None` by the owning record so the
//! `type` field is simply absent when serialized.
//!
//! | Variant | Serialized `type` | Produced from |
//! |---------|-------------------|---------------|
//! | `Intrinsic` | `intrinsic` | primitive type-nodes (`string`, `number`, ...) |
//! | `Object` | `customObject` | inline type literals |
//! | `Union` | `customUnion` | named aliases kept opaque |
//! | `IndexedAccess` | `indexedAccess` | `Iface['key']` placeholders |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::names::ANONYMOUS_NAME;

// =============================================================================
// TypeValue
// =============================================================================

/// A resolved, renderable type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TypeValue {
    #[serde(rename = "intrinsic")]
    Intrinsic(IntrinsicType),
    #[serde(rename = "customObject")]
    Object(ObjectType),
    #[serde(rename = "customUnion")]
    Union(UnionType),
    #[serde(rename = "indexedAccess")]
    IndexedAccess(IndexedAccessType),
}

/// A primitive type, passed through from the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrinsicType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

/// An object-shaped type with ordered properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A named alias whose members are not decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

/// Display placeholder for "the type of property `key` on `object`".
///
/// The property type itself is not looked up; `name` holds the rendered
/// `Object['key']` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedAccessType {
    pub name: String,
}

/// A property of an [`ObjectType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_optional: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeValue>,
}

impl IndexedAccessType {
    /// Render `object['key']`.
    pub fn new(object: &str, key: &str) -> Self {
        Self {
            name: format!("{object}['{key}']"),
        }
    }
}

impl TypeValue {
    pub fn intrinsic(name: impl Into<String>) -> Self {
        TypeValue::Intrinsic(IntrinsicType {
            name: name.into(),
            comment: None,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            TypeValue::Intrinsic(t) => &t.name,
            TypeValue::Object(t) => &t.name,
            TypeValue::Union(t) => &t.name,
            TypeValue::IndexedAccess(t) => &t.name,
        }
    }

    pub fn comment(&self) -> Option<&Comment> {
        match self {
            TypeValue::Intrinsic(t) => t.comment.as_ref(),
            TypeValue::Object(t) => t.comment.as_ref(),
            TypeValue::Union(t) => t.comment.as_ref(),
            TypeValue::IndexedAccess(_) => None,
        }
    }

    fn comment_slot(&mut self) -> Option<&mut Option<Comment>> {
        match self {
            TypeValue::Intrinsic(t) => Some(&mut t.comment),
            TypeValue::Object(t) => Some(&mut t.comment),
            TypeValue::Union(t) => Some(&mut t.comment),
            TypeValue::IndexedAccess(_) => None,
        }
    }

    /// Present this type under an alias.
    ///
    /// The alias name replaces the structural name and the alias comment is
    /// merged over the existing one. Indexed-access placeholders have no
    /// name or comment of their own and are returned unchanged.
    pub fn with_alias(mut self, alias: &str, comment: Option<&Comment>) -> Self {
        if let TypeValue::IndexedAccess(_) = self {
            return self;
        }
        match &mut self {
            TypeValue::Intrinsic(t) => t.name = alias.to_string(),
            TypeValue::Object(t) => t.name = alias.to_string(),
            TypeValue::Union(t) => t.name = alias.to_string(),
            TypeValue::IndexedAccess(_) => {}
        }
        if let Some(overlay) = comment {
            if let Some(slot) = self.comment_slot() {
                *slot = Some(Comment::merge_over(slot.take(), overlay));
            }
        }
        self
    }
}

impl fmt::Display for TypeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeValue::Object(object) if object.name == ANONYMOUS_NAME => {
                if object.properties.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, prop) in object.properties.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{prop}")?;
                }
                f.write_str(" }")
            }
            other => f.write_str(other.name()),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_optional { "?" } else { "" };
        match &self.ty {
            Some(ty) => write!(f, "{}{marker}: {ty}", self.name),
            None => write!(f, "{}{marker}: unknown", self.name),
        }
    }
}

// =============================================================================
// NamedType
// =============================================================================

/// A type that can be registered by name on a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NamedType {
    #[serde(rename = "customObject")]
    Object(ObjectType),
    #[serde(rename = "customUnion")]
    Union(UnionType),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Object(t) => &t.name,
            NamedType::Union(t) => &t.name,
        }
    }
}

impl From<NamedType> for TypeValue {
    fn from(named: NamedType) -> Self {
        match named {
            NamedType::Object(t) => TypeValue::Object(t),
            NamedType::Union(t) => TypeValue::Union(t),
        }
    }
}
