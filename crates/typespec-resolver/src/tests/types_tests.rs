use serde_json::{Value, json};
use typespec_common::{ANONYMOUS_NAME, Comment, TypeValue};

use super::index::DeclarationIndex;
use super::raw::{RawNode, RawType};
use super::types::{ResolveOptions, TypeResolver};

fn resolve_with(tree: &Value, ty: &Value) -> Option<TypeValue> {
    let index = DeclarationIndex::build(RawNode::new(tree));
    let options = ResolveOptions::default();
    TypeResolver::new(&index, &options).resolve(RawType::new(ty))
}

fn resolve(ty: &Value) -> Option<TypeValue> {
    resolve_with(&json!({}), ty)
}

#[test]
fn intrinsic_is_passed_through() {
    let ty = json!({ "type": "intrinsic", "name": "string", "comment": { "shortText": "A string" } });

    let TypeValue::Intrinsic(intrinsic) = resolve(&ty).expect("intrinsic resolves") else {
        panic!("expected intrinsic");
    };
    assert_eq!(intrinsic.name, "string");
    assert_eq!(intrinsic.comment, Some(Comment::short("A string")));
}

#[test]
fn intrinsic_without_name_is_unresolved() {
    assert_eq!(resolve(&json!({ "type": "intrinsic" })), None);
}

#[test]
fn reference_takes_alias_name() {
    let ty = json!({
        "type": "reference",
        "name": "MyString",
        "dereferenced": { "type": { "type": "intrinsic", "name": "string" } }
    });

    let resolved = resolve(&ty).expect("reference resolves");
    assert!(matches!(resolved, TypeValue::Intrinsic(_)));
    assert_eq!(resolved.name(), "MyString");
}

#[test]
fn reference_comment_takes_precedence() {
    let ty = json!({
        "type": "reference",
        "name": "Url",
        "comment": { "shortText": "Alias docs" },
        "dereferenced": { "type": {
            "type": "intrinsic",
            "name": "string",
            "comment": { "shortText": "String docs", "text": "More" }
        }}
    });

    let resolved = resolve(&ty).expect("reference resolves");
    let comment = resolved.comment().expect("merged comment");
    assert_eq!(comment.short_text.as_deref(), Some("Alias docs"));
    assert_eq!(comment.text.as_deref(), Some("More"));
}

#[test]
fn reference_without_dereference_is_unresolved() {
    assert_eq!(resolve(&json!({ "type": "reference", "name": "Foo", "id": 3 })), None);
    assert_eq!(
        resolve(&json!({ "type": "reference", "name": "Foo", "dereferenced": {} })),
        None
    );
}

#[test]
fn reference_to_unresolvable_type_is_unresolved() {
    let ty = json!({
        "type": "reference",
        "name": "Foo",
        "comment": { "shortText": "docs" },
        "dereferenced": { "type": { "type": "union", "types": [] } }
    });
    assert_eq!(resolve(&ty), None);
}

#[test]
fn type_literal_becomes_object_with_ordered_properties() {
    let ty = json!({
        "type": "reflection",
        "declaration": {
            "id": 20,
            "name": "__type",
            "kindString": "Type literal",
            "children": [
                { "id": 21, "name": "a", "kindString": "Property",
                  "type": { "type": "intrinsic", "name": "string" } },
                { "id": 22, "name": "b", "kindString": "Property",
                  "flags": { "isOptional": true },
                  "comment": { "shortText": "Optional b" },
                  "type": { "type": "intrinsic", "name": "number" } }
            ]
        }
    });

    let TypeValue::Object(object) = resolve(&ty).expect("literal resolves") else {
        panic!("expected object");
    };
    assert_eq!(object.name, "__type");
    assert_eq!(object.properties.len(), 2);

    let a = &object.properties[0];
    assert_eq!(a.name, "a");
    assert!(!a.is_optional);
    assert_eq!(a.ty.as_ref().map(TypeValue::name), Some("string"));

    let b = &object.properties[1];
    assert_eq!(b.name, "b");
    assert!(b.is_optional);
    assert_eq!(b.comment, Some(Comment::short("Optional b")));
    assert_eq!(b.ty.as_ref().map(TypeValue::name), Some("number"));
}

#[test]
fn type_literal_skips_non_property_children_and_names_anonymous() {
    let ty = json!({
        "type": "reflection",
        "declaration": {
            "kindString": "Type literal",
            "children": [
                { "name": "call", "kindString": "Method" },
                { "kindString": "Property", "type": { "type": "conditional" } }
            ]
        }
    });

    let TypeValue::Object(object) = resolve(&ty).expect("literal resolves") else {
        panic!("expected object");
    };
    assert_eq!(object.name, ANONYMOUS_NAME);
    assert_eq!(object.properties.len(), 1);
    assert_eq!(object.properties[0].name, ANONYMOUS_NAME);
    assert_eq!(object.properties[0].ty, None);
}

#[test]
fn anonymous_name_is_configurable() {
    let ty = json!({ "type": "reflection", "declaration": { "kindString": "Type literal" } });
    let tree = json!({});
    let index = DeclarationIndex::build(RawNode::new(&tree));
    let options = ResolveOptions {
        anonymous_name: "__anon".to_string(),
    };

    let resolved = TypeResolver::new(&index, &options).resolve(RawType::new(&ty));
    assert_eq!(resolved.as_ref().map(TypeValue::name), Some("__anon"));
}

#[test]
fn reflection_of_other_declaration_kinds_is_unresolved() {
    let ty = json!({
        "type": "reflection",
        "declaration": { "kindString": "Function", "signatures": [] }
    });
    assert_eq!(resolve(&ty), None);

    let arrow = json!({
        "type": "reflection",
        "declaration": { "kindString": "Call signature" }
    });
    assert_eq!(resolve(&arrow), None);
    assert_eq!(resolve(&json!({ "type": "reflection" })), None);
}

#[test]
fn reference_to_type_literal_keeps_properties_under_alias() {
    let ty = json!({
        "type": "reference",
        "name": "ClientOptions",
        "dereferenced": { "type": {
            "type": "reflection",
            "declaration": {
                "kindString": "Type literal",
                "children": [
                    { "name": "schema", "kindString": "Property",
                      "type": { "type": "intrinsic", "name": "string" } }
                ]
            }
        }}
    });

    let TypeValue::Object(object) = resolve(&ty).expect("reference resolves") else {
        panic!("expected object");
    };
    assert_eq!(object.name, "ClientOptions");
    assert_eq!(object.properties[0].name, "schema");
}

fn interface_tree() -> Value {
    json!({
        "id": 0,
        "kindString": "Module",
        "name": "lib",
        "children": [
            { "id": 5, "name": "Bar", "kindString": "Interface" },
            { "id": 6, "name": "Baz", "kindString": "Class" }
        ]
    })
}

#[test]
fn indexed_access_on_interface_renders_placeholder() {
    let ty = json!({
        "type": "indexedAccess",
        "objectType": { "type": "reference", "id": 5, "name": "Bar" },
        "indexType": { "type": "literal", "value": "foo" }
    });

    let resolved = resolve_with(&interface_tree(), &ty).expect("indexed access resolves");
    assert!(matches!(resolved, TypeValue::IndexedAccess(_)));
    assert_eq!(resolved.name(), "Bar['foo']");
    assert_eq!(resolved.to_string(), "Bar['foo']");
}

#[test]
fn indexed_access_numeric_key_renders_decimal() {
    let ty = json!({
        "type": "indexedAccess",
        "objectType": { "type": "reference", "id": 5, "name": "Bar" },
        "indexType": { "type": "literal", "value": 0 }
    });

    let resolved = resolve_with(&interface_tree(), &ty).expect("indexed access resolves");
    assert_eq!(resolved.name(), "Bar['0']");
}

#[test]
fn indexed_access_unsupported_targets_are_unresolved() {
    let tree = interface_tree();

    let not_interface = json!({
        "type": "indexedAccess",
        "objectType": { "type": "reference", "id": 6, "name": "Baz" },
        "indexType": { "type": "literal", "value": "foo" }
    });
    assert_eq!(resolve_with(&tree, &not_interface), None);

    let missing_target = json!({
        "type": "indexedAccess",
        "objectType": { "type": "reference", "id": 99, "name": "Gone" },
        "indexType": { "type": "literal", "value": "foo" }
    });
    assert_eq!(resolve_with(&tree, &missing_target), None);

    let non_literal_key = json!({
        "type": "indexedAccess",
        "objectType": { "type": "reference", "id": 5, "name": "Bar" },
        "indexType": { "type": "intrinsic", "name": "string" }
    });
    assert_eq!(resolve_with(&tree, &non_literal_key), None);

    let non_reference_object = json!({
        "type": "indexedAccess",
        "objectType": { "type": "intrinsic", "name": "string" },
        "indexType": { "type": "literal", "value": "length" }
    });
    assert_eq!(resolve_with(&tree, &non_reference_object), None);
}

#[test]
fn unknown_shapes_are_unresolved() {
    for ty in [
        json!({ "type": "union", "types": [] }),
        json!({ "type": "literal", "value": "x" }),
        json!({ "type": "array", "elementType": { "type": "intrinsic", "name": "string" } }),
        json!({ "name": "no discriminator" }),
    ] {
        assert_eq!(resolve(&ty), None, "{ty} should be unresolved");
    }
}
