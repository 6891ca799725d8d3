//! Borrowed views over the extractor's reflection tree.
//!
//! The input document is kept as a `serde_json::Value`; `RawNode` and
//! `RawType` wrap a reference into it and expose only the fields the
//! resolver reads. A missing or wrongly-typed field reads as `None` (or an
//! empty iterator), never as an error.
//!
//! Declaration nodes and type-nodes share the JSON key `type` with different
//! meanings: on a declaration it holds the declared type-node, on a
//! type-node it is the shape discriminator. The two views keep that apart.

use serde::Deserialize;
use serde_json::Value;
use typespec_common::Comment;

/// Identifier of a declaration node, unique within one document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub u32);

// =============================================================================
// Declaration nodes
// =============================================================================

/// Declared kind of a node, from its `kindString`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Project,
    Module,
    Class,
    Constructor,
    Reference,
    Property,
    Interface,
    TypeLiteral,
    /// A `kindString` the resolver has no rule for.
    Other,
    /// No `kindString` at all (the tree root and wrapper nodes).
    Unclassified,
}

impl NodeKind {
    pub fn from_kind_string(kind: Option<&str>) -> Self {
        match kind {
            None => NodeKind::Unclassified,
            Some("Project") => NodeKind::Project,
            Some("Module") => NodeKind::Module,
            Some("Class") => NodeKind::Class,
            Some("Constructor") => NodeKind::Constructor,
            Some("Reference") => NodeKind::Reference,
            Some("Property") => NodeKind::Property,
            Some("Interface") => NodeKind::Interface,
            Some("Type literal") => NodeKind::TypeLiteral,
            Some(_) => NodeKind::Other,
        }
    }
}

/// A declaration node (module, class, constructor, signature, parameter, ...).
#[derive(Copy, Clone, Debug)]
pub struct RawNode<'a>(&'a Value);

impl<'a> RawNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> &'a Value {
        self.0
    }

    pub fn id(self) -> Option<DeclId> {
        read_id(self.0)
    }

    pub fn kind_string(self) -> Option<&'a str> {
        self.0.get("kindString").and_then(Value::as_str)
    }

    pub fn kind(self) -> NodeKind {
        NodeKind::from_kind_string(self.kind_string())
    }

    pub fn name(self) -> Option<&'a str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn children(self) -> impl Iterator<Item = RawNode<'a>> {
        array_field(self.0, "children").map(RawNode)
    }

    /// The first entry of `signatures`, if any.
    pub fn first_signature(self) -> Option<RawNode<'a>> {
        array_field(self.0, "signatures").next().map(RawNode)
    }

    pub fn parameters(self) -> impl Iterator<Item = RawNode<'a>> {
        array_field(self.0, "parameters").map(RawNode)
    }

    /// The type-node declared for this node (`type` holding an object).
    pub fn declared_type(self) -> Option<RawType<'a>> {
        self.0
            .get("type")
            .filter(|value| value.is_object())
            .map(RawType)
    }

    pub fn is_optional(self) -> bool {
        self.0
            .get("flags")
            .and_then(|flags| flags.get("isOptional"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn comment(self) -> Option<Comment> {
        read_comment(self.0)
    }
}

// =============================================================================
// Type-nodes
// =============================================================================

/// Shape discriminator of a type-node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeShape {
    Intrinsic,
    Reference,
    Reflection,
    IndexedAccess,
    Literal,
    Other,
}

/// A type expression node.
#[derive(Copy, Clone, Debug)]
pub struct RawType<'a>(&'a Value);

impl<'a> RawType<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// The raw discriminator string.
    pub fn discriminator(self) -> Option<&'a str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn shape(self) -> TypeShape {
        match self.discriminator() {
            Some("intrinsic") => TypeShape::Intrinsic,
            Some("reference") => TypeShape::Reference,
            Some("reflection") => TypeShape::Reflection,
            Some("indexedAccess") => TypeShape::IndexedAccess,
            Some("literal") => TypeShape::Literal,
            _ => TypeShape::Other,
        }
    }

    pub fn name(self) -> Option<&'a str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Target declaration of a reference type-node.
    pub fn target_id(self) -> Option<DeclId> {
        read_id(self.0)
    }

    pub fn comment(self) -> Option<Comment> {
        read_comment(self.0)
    }

    /// The extractor's pre-resolved expansion (`dereferenced.type`).
    pub fn dereferenced(self) -> Option<RawType<'a>> {
        self.0
            .get("dereferenced")
            .and_then(|deref| deref.get("type"))
            .filter(|value| value.is_object())
            .map(RawType)
    }

    /// Inline declaration of a reflection type-node.
    pub fn declaration(self) -> Option<RawNode<'a>> {
        self.0
            .get("declaration")
            .filter(|value| value.is_object())
            .map(RawNode)
    }

    pub fn object_type(self) -> Option<RawType<'a>> {
        self.0
            .get("objectType")
            .filter(|value| value.is_object())
            .map(RawType)
    }

    pub fn index_type(self) -> Option<RawType<'a>> {
        self.0
            .get("indexType")
            .filter(|value| value.is_object())
            .map(RawType)
    }

    /// Value of a literal type-node.
    pub fn literal_value(self) -> Option<&'a Value> {
        self.0.get("value")
    }
}

fn read_id(value: &Value) -> Option<DeclId> {
    value
        .get("id")
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
        .map(DeclId)
}

fn read_comment(value: &Value) -> Option<Comment> {
    value
        .get("comment")
        .and_then(|comment| Comment::deserialize(comment).ok())
}

fn array_field<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter())
        .unwrap_or_default()
}
