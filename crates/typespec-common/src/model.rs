//! Per-module records: signatures keyed by fully-qualified reference and
//! named types keyed by name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::types::{NamedType, TypeValue};

/// Everything resolved for one top-level module of the reflection tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    /// Callable signatures keyed by fully-qualified reference
    /// (`module.Class.constructor`).
    #[serde(default)]
    pub methods: IndexMap<String, Signature>,
    /// Named types keyed by name.
    #[serde(default)]
    pub types: IndexMap<String, NamedType>,
}

/// A callable member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Fully-qualified reference of the member.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ret: Option<TypeValue>,
}

/// A parameter of a [`Signature`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_optional: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeValue>,
}

/// Borrowed result of [`Module::lookup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryRef<'a> {
    Signature(&'a Signature),
    Type(&'a NamedType),
}

/// Owned result of a reference lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Signature(Signature),
    Type(NamedType),
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: IndexMap::new(),
            types: IndexMap::new(),
        }
    }

    /// Store a signature under its own name. A later signature with the
    /// same reference replaces the earlier one.
    pub fn insert_signature(&mut self, signature: Signature) -> Option<Signature> {
        self.methods.insert(signature.name.clone(), signature)
    }

    pub fn insert_type(&mut self, named: NamedType) -> Option<NamedType> {
        self.types.insert(named.name().to_string(), named)
    }

    /// Find a signature by fully-qualified reference, or a named type by name.
    pub fn lookup(&self, reference: &str) -> Option<EntryRef<'_>> {
        if let Some(signature) = self.methods.get(reference) {
            return Some(EntryRef::Signature(signature));
        }
        self.types.get(reference).map(EntryRef::Type)
    }
}

impl EntryRef<'_> {
    pub fn cloned(self) -> Entry {
        match self {
            EntryRef::Signature(signature) => Entry::Signature(signature.clone()),
            EntryRef::Type(named) => Entry::Type(named.clone()),
        }
    }
}
