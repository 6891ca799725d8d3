//! Type algebra resolver.
//!
//! Narrows a raw type-node into a [`TypeValue`]. Only four shapes are
//! recognized; everything else resolves to `None` and the owning record
//! drops its `type` field.
//!
//! | Shape | Rule |
//! |-------|------|
//! | `intrinsic` | passthrough of name and comment |
//! | `reference` | resolve `dereferenced.type`, then rename to the alias and merge its comment |
//! | `reflection` | `Type literal` declarations become objects of their `Property` children |
//! | `indexedAccess` | `Iface['key']` placeholder when the object is a reference to an interface |
//!
//! Plain references are expanded from the extractor's inline dereference,
//! not from the declaration index. Only indexed-access targets go through
//! the index.

use serde_json::Value;
use tracing::trace;
use typespec_common::{
    ANONYMOUS_NAME, IndexedAccessType, IntrinsicType, ObjectType, Property, TypeValue,
};

use crate::index::DeclarationIndex;
use crate::raw::{NodeKind, RawNode, RawType, TypeShape};

/// Knobs shared by the resolvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Name given to object types whose declaration has no name.
    pub anonymous_name: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            anonymous_name: ANONYMOUS_NAME.to_string(),
        }
    }
}

pub struct TypeResolver<'r, 'a> {
    index: &'r DeclarationIndex<'a>,
    options: &'r ResolveOptions,
}

impl<'r, 'a> TypeResolver<'r, 'a> {
    pub fn new(index: &'r DeclarationIndex<'a>, options: &'r ResolveOptions) -> Self {
        Self { index, options }
    }

    /// Resolve a type-node, or `None` when its shape is not supported.
    pub fn resolve(&self, ty: RawType<'a>) -> Option<TypeValue> {
        let resolved = match ty.shape() {
            TypeShape::Intrinsic => self.resolve_intrinsic(ty),
            TypeShape::Reference => self.resolve_reference(ty),
            TypeShape::Reflection => self.resolve_reflection(ty),
            TypeShape::IndexedAccess => self.resolve_indexed_access(ty),
            TypeShape::Literal | TypeShape::Other => None,
        };
        if resolved.is_none() {
            trace!(shape = ?ty.discriminator(), name = ?ty.name(), "unresolved type-node");
        }
        resolved
    }

    /// Resolve the declared type of a parameter or property, if any.
    pub fn resolve_declared(&self, node: RawNode<'a>) -> Option<TypeValue> {
        node.declared_type().and_then(|ty| self.resolve(ty))
    }

    fn resolve_intrinsic(&self, ty: RawType<'a>) -> Option<TypeValue> {
        Some(TypeValue::Intrinsic(IntrinsicType {
            name: ty.name()?.to_string(),
            comment: ty.comment(),
        }))
    }

    fn resolve_reference(&self, ty: RawType<'a>) -> Option<TypeValue> {
        let target = self.resolve(ty.dereferenced()?)?;
        let alias = ty.name().unwrap_or_default();
        Some(target.with_alias(alias, ty.comment().as_ref()))
    }

    fn resolve_reflection(&self, ty: RawType<'a>) -> Option<TypeValue> {
        let declaration = ty.declaration()?;
        match declaration.kind() {
            NodeKind::TypeLiteral => Some(self.resolve_type_literal(declaration)),
            _ => None,
        }
    }

    fn resolve_type_literal(&self, declaration: RawNode<'a>) -> TypeValue {
        let properties = declaration
            .children()
            .filter(|child| child.kind() == NodeKind::Property)
            .map(|child| self.resolve_property(child))
            .collect();

        TypeValue::Object(ObjectType {
            name: self.name_or_anonymous(declaration.name()),
            comment: None,
            properties,
        })
    }

    fn resolve_property(&self, node: RawNode<'a>) -> Property {
        Property {
            name: self.name_or_anonymous(node.name()),
            comment: node.comment(),
            is_optional: node.is_optional(),
            ty: self.resolve_declared(node),
        }
    }

    fn resolve_indexed_access(&self, ty: RawType<'a>) -> Option<TypeValue> {
        let object = ty.object_type()?;
        if object.shape() != TypeShape::Reference {
            return None;
        }

        let target = self.index.get(object.target_id()?)?;
        if target.kind() != NodeKind::Interface {
            return None;
        }

        let index = ty.index_type()?;
        if index.shape() != TypeShape::Literal {
            return None;
        }
        let key = literal_key(index.literal_value()?)?;
        let object_name = object.name().unwrap_or_default();

        Some(TypeValue::IndexedAccess(IndexedAccessType::new(
            object_name,
            &key,
        )))
    }

    fn name_or_anonymous(&self, name: Option<&str>) -> String {
        match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.options.anonymous_name.clone(),
        }
    }
}

/// Text of a literal usable as a property key.
fn literal_key(value: &Value) -> Option<String> {
    match value {
        Value::String(key) => Some(key.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
