//! Module/type resolver: walks one top-level module of the reflection tree
//! and collects callable signatures into a [`Module`].
//!
//! The walk is a recursive descent over `children` carrying the path of
//! enclosing names:
//!
//! | `kindString` | Action |
//! |--------------|--------|
//! | `Module`, `Class` | push name, descend |
//! | `Reference` | stop (re-exports carry nothing new) |
//! | `Constructor` | emit signature, then push name and descend |
//! | `Project`, none | push name, descend |
//! | anything else | stop |

use serde_json::Value;
use tracing::{debug, trace};
use typespec_common::{CONSTRUCTOR_SUFFIX, Module, Parameter, Signature, qualified_name};

use crate::index::DeclarationIndex;
use crate::raw::{NodeKind, RawNode};
use crate::types::{ResolveOptions, TypeResolver};

/// Resolve every top-level module (`children` of the document root).
pub fn resolve_document(root: &Value, options: &ResolveOptions) -> Vec<Module> {
    let modules: Vec<Module> = RawNode::new(root)
        .children()
        .map(|module| resolve_module(module, options))
        .collect();
    debug!(modules = modules.len(), "resolved document");
    modules
}

/// Resolve a single top-level module.
///
/// The declaration index is built from this module's subtree and dropped
/// when the walk finishes.
pub fn resolve_module(node: RawNode<'_>, options: &ResolveOptions) -> Module {
    let index = DeclarationIndex::build(node);
    let mut module = Module::new(node.name().unwrap_or_default());

    let mut walker = ModuleWalker {
        types: TypeResolver::new(&index, options),
        module: &mut module,
    };
    walker.walk(node, &[]);

    debug!(
        module = %module.name,
        declarations = index.len(),
        methods = module.methods.len(),
        "resolved module"
    );
    module
}

struct ModuleWalker<'m, 'r, 'a> {
    types: TypeResolver<'r, 'a>,
    module: &'m mut Module,
}

impl<'a> ModuleWalker<'_, '_, 'a> {
    fn walk(&mut self, node: RawNode<'a>, path: &[&'a str]) {
        match node.kind() {
            NodeKind::Module | NodeKind::Class => self.descend(node, path),
            NodeKind::Reference => {}
            NodeKind::Constructor => {
                self.emit_constructor(node, path);
                // Constructors continue like unclassified nodes. Their
                // children are normally absent, so this rarely visits anything.
                self.descend(node, path);
            }
            NodeKind::Project | NodeKind::Unclassified => self.descend(node, path),
            NodeKind::Property | NodeKind::Interface | NodeKind::TypeLiteral | NodeKind::Other => {
                trace!(kind = ?node.kind_string(), name = ?node.name(), "skipping declaration");
            }
        }
    }

    fn descend(&mut self, node: RawNode<'a>, path: &[&'a str]) {
        let mut nested = Vec::with_capacity(path.len() + 1);
        nested.extend_from_slice(path);
        nested.push(node.name().unwrap_or_default());
        for child in node.children() {
            self.walk(child, &nested);
        }
    }

    fn emit_constructor(&mut self, node: RawNode<'a>, path: &[&'a str]) {
        let Some(signature) = node.first_signature() else {
            trace!(path = ?path, "constructor without signatures");
            return;
        };

        let reference = qualified_name(path, CONSTRUCTOR_SUFFIX);
        let params = signature
            .parameters()
            .map(|param| self.resolve_parameter(param))
            .collect();

        let signature = Signature {
            name: reference,
            comment: signature.comment(),
            params,
            ret: None,
        };
        if let Some(previous) = self.module.insert_signature(signature) {
            trace!(reference = %previous.name, "replaced constructor signature");
        }
    }

    fn resolve_parameter(&self, param: RawNode<'a>) -> Parameter {
        Parameter {
            name: param.name().unwrap_or_default().to_string(),
            comment: param.comment(),
            is_optional: param.is_optional(),
            ty: self.types.resolve_declared(param),
        }
    }
}
