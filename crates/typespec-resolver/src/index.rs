//! Declaration index: id -> node lookup for one reflection tree.
//!
//! Built in a single pre-order pass over the `children` relation so that
//! cross-references (indexed-access targets) resolve in O(1). The index
//! borrows the document and lives only as long as one resolution call.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::raw::{DeclId, RawNode};

#[derive(Debug, Default)]
pub struct DeclarationIndex<'a> {
    nodes: FxHashMap<DeclId, RawNode<'a>>,
}

impl<'a> DeclarationIndex<'a> {
    /// Index `root` and every descendant that carries an id.
    ///
    /// A later node with an id already present replaces the earlier one.
    pub fn build(root: RawNode<'a>) -> Self {
        let mut index = Self::default();
        index.insert_recursive(root);
        trace!(entries = index.nodes.len(), "built declaration index");
        index
    }

    fn insert_recursive(&mut self, node: RawNode<'a>) {
        if let Some(id) = node.id() {
            self.nodes.insert(id, node);
        }
        for child in node.children() {
            self.insert_recursive(child);
        }
    }

    pub fn get(&self, id: DeclId) -> Option<RawNode<'a>> {
        self.nodes.get(&id).copied()
    }

    pub fn contains(&self, id: DeclId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = DeclId> + '_ {
        self.nodes.keys().copied()
    }
}
