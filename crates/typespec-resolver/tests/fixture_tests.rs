//! End-to-end resolution of a representative extractor document.

use typespec_common::{Entry, Module, TypeValue};
use typespec_resolver::{ResolveOptions, parse_and_resolve};

const FIXTURE: &str = include_str!("fixtures/combined.json");

fn modules() -> Vec<Module> {
    parse_and_resolve(FIXTURE.as_bytes(), &ResolveOptions::default()).expect("fixture parses")
}

#[test]
fn resolves_one_module_per_top_level_child() {
    let modules = modules();
    let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["supabase-js", "gotrue-js"]);
    assert!(modules.iter().all(|m| m.types.is_empty()));
}

#[test]
fn supabase_client_constructor_signature() {
    let modules = modules();
    let module = &modules[0];
    assert_eq!(module.methods.len(), 1);

    let signature = &module.methods["supabase-js.SupabaseClient.constructor"];
    let comment = signature.comment.as_ref().expect("signature comment");
    assert_eq!(
        comment.short_text.as_deref(),
        Some("Create a new client for use in the browser.")
    );
    assert_eq!(comment.returns.as_deref(), Some("A client instance\n"));
    assert_eq!(signature.params.len(), 3);

    let url = &signature.params[0];
    assert_eq!(url.name, "supabaseUrl");
    assert_eq!(url.ty, Some(TypeValue::intrinsic("string")));
    assert!(url.comment.is_some());

    let key = &signature.params[1];
    let key_ty = key.ty.as_ref().expect("alias resolves");
    assert_eq!(key_ty.name(), "ApiKey");
    let key_comment = key_ty.comment().expect("merged alias comment");
    assert_eq!(
        key_comment.short_text.as_deref(),
        Some("The anon key for your project.")
    );
    assert_eq!(key_comment.text.as_deref(), Some("Any JWT."));
}

#[test]
fn options_literal_is_decomposed() {
    let modules = modules();
    let options = &modules[0].methods["supabase-js.SupabaseClient.constructor"].params[2];
    assert!(options.is_optional);

    let Some(TypeValue::Object(object)) = &options.ty else {
        panic!("options should resolve to an object");
    };
    let props: Vec<&str> = object.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(props, vec!["auth", "db", "fetch"]);

    let auth = &object.properties[0];
    assert!(auth.is_optional);
    assert_eq!(
        auth.ty.as_ref().map(ToString::to_string).as_deref(),
        Some("__type")
    );
    let Some(TypeValue::Object(auth_object)) = &auth.ty else {
        panic!("auth should resolve to an object");
    };
    assert_eq!(auth_object.properties[0].name, "persistSession");

    let db = &object.properties[1];
    assert!(!db.is_optional);
    assert_eq!(
        db.ty.as_ref().map(TypeValue::name),
        Some("SupabaseClientOptions['db']")
    );

    let fetch = &object.properties[2];
    assert!(fetch.is_optional);
    assert!(fetch.ty.is_none());
}

#[test]
fn empty_constructor_signatures_are_skipped() {
    let modules = modules();
    let module = &modules[1];
    assert!(module.lookup("gotrue-js.GoTrueClient.constructor").is_none());

    let entry = module
        .lookup("gotrue-js.GoTrueAdminApi.constructor")
        .map(|entry| entry.cloned());
    let Some(Entry::Signature(signature)) = entry else {
        panic!("admin api constructor should be present");
    };
    assert_eq!(signature.params[0].name, "__namedParameters");
    assert!(signature.comment.is_none());
}

#[test]
fn serialized_output_round_trips() {
    let modules = modules();
    let json = serde_json::to_string(&modules).expect("serialize");
    let back: Vec<Module> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, modules);
}
