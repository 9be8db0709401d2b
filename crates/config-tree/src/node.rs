//! Arena-backed configuration tree.
//!
//! All nodes of one tree live in a `Vec` arena owned by [`ConfigTree`];
//! "pointers" between nodes are [`NodeId`] indices into that arena, and
//! the parent back-reference is a plain non-owning index. Detaching a
//! subtree leaves its slots in the arena as unreachable entries — the
//! arena never shrinks, so ids stay stable for the life of the tree.

use std::collections::HashMap;

use serde_json::Value;

use crate::path::WILDCARD;

/// Index of a node in its tree's arena.
pub type NodeId = u32;

#[derive(Debug, Clone)]
struct ConfigNode {
    /// Local segment name; unique among siblings, empty for the root.
    key: String,
    /// Scalar payload. `None` means "never set", which is distinct from
    /// an explicit `Some(Value::Null)`.
    value: Option<Value>,
    children: HashMap<String, NodeId>,
    parent: Option<NodeId>,
}

impl ConfigNode {
    fn new(key: String) -> Self {
        Self {
            key,
            value: None,
            children: HashMap::new(),
            parent: None,
        }
    }
}

/// A tree of named nodes, each holding an optional scalar value plus a
/// map of named children.
///
/// Every node is simultaneously an addressable container and a
/// potential scalar holder; writes auto-create missing intermediate
/// nodes, reads never do.
#[derive(Debug, Clone)]
pub struct ConfigTree {
    arena: Vec<ConfigNode>,
}

impl ConfigTree {
    /// Create a tree holding only the root node (empty key, no value).
    pub fn new() -> Self {
        Self {
            arena: vec![ConfigNode::new(String::new())],
        }
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        0
    }

    /// Number of allocated nodes, including detached ones.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    fn alloc(&mut self, key: String) -> NodeId {
        self.arena.push(ConfigNode::new(key));
        (self.arena.len() - 1) as NodeId
    }

    fn node(&self, id: NodeId) -> &ConfigNode {
        &self.arena[id as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut ConfigNode {
        &mut self.arena[id as usize]
    }

    /// Local segment name of a node.
    pub fn key(&self, id: NodeId) -> &str {
        &self.node(id).key
    }

    /// Parent of a node, `None` for the root or a detached node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Scalar payload of a node, `None` if never set.
    pub fn value(&self, id: NodeId) -> Option<&Value> {
        self.node(id).value.as_ref()
    }

    /// Overwrite a node's scalar payload in place. Passing `None`
    /// restores the "never set" state.
    pub fn set_value(&mut self, id: NodeId, value: Option<Value>) {
        self.node_mut(id).value = value;
    }

    pub fn has_value(&self, id: NodeId) -> bool {
        self.node(id).value.is_some()
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        !self.node(id).children.is_empty()
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).children.len()
    }

    /// Look up a direct child by its local name.
    pub fn child(&self, id: NodeId, key: &str) -> Option<NodeId> {
        self.node(id).children.get(key).copied()
    }

    /// Iterate over a node's children as `(key, id)` pairs. Order is
    /// unspecified.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.node(id)
            .children
            .iter()
            .map(|(key, &child)| (key.as_str(), child))
    }

    /// Walk `segments` from `from`, creating every missing child along
    /// the way, and return the final node. An empty path returns `from`.
    pub fn resolve(&mut self, from: NodeId, segments: &[String]) -> NodeId {
        let mut cursor = from;
        for segment in segments {
            cursor = match self.node(cursor).children.get(segment) {
                Some(&child) => child,
                None => {
                    let child = self.alloc(segment.clone());
                    self.attach(cursor, child);
                    child
                }
            };
        }
        cursor
    }

    /// Walk `segments` from `from` without creating anything; `None` if
    /// any segment is missing.
    pub fn find(&self, from: NodeId, segments: &[String]) -> Option<NodeId> {
        let mut cursor = from;
        for segment in segments {
            cursor = self.child(cursor, segment)?;
        }
        Some(cursor)
    }

    /// Auto-vivifying write of `value` at the node addressed by
    /// `segments` from `from`.
    ///
    /// A [`WILDCARD`] segment applies the remaining suffix to every
    /// child existing at that position when the write happens; children
    /// added later are unaffected, and no literal `*` child is created.
    pub fn set(&mut self, from: NodeId, segments: &[String], value: Option<Value>) {
        match segments.split_first() {
            None => self.node_mut(from).value = value,
            Some((segment, rest)) if segment.as_str() == WILDCARD => {
                // Snapshot before descending: the suffix writes below may
                // themselves vivify children of `from`'s children, but
                // never siblings at this level.
                let targets: Vec<NodeId> = self.node(from).children.values().copied().collect();
                for target in targets {
                    self.set(target, rest, value.clone());
                }
            }
            Some((segment, rest)) => {
                let child = match self.node(from).children.get(segment) {
                    Some(&child) => child,
                    None => {
                        let child = self.alloc(segment.clone());
                        self.attach(from, child);
                        child
                    }
                };
                self.set(child, rest, value);
            }
        }
    }

    /// Make `child` a child of `parent`.
    ///
    /// `child` is first detached from any previous parent, and an
    /// existing child of `parent` with the same key is detached and
    /// replaced.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let key = self.node(child).key.clone();
        if let Some(existing) = self.child(parent, &key) {
            self.detach(existing);
        }
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.insert(key, child);
    }

    /// Remove a node from its parent's children map and clear its
    /// back-reference. Idempotent.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent {
            let key = self.node(id).key.clone();
            self.node_mut(parent).children.remove(&key);
            self.node_mut(id).parent = None;
        }
    }

    /// Deep-clone the subtree rooted at `src` into fresh arena slots
    /// and return the detached copy's root. No id is shared with the
    /// source subtree.
    pub fn copy_subtree(&mut self, src: NodeId) -> NodeId {
        let key = self.node(src).key.clone();
        let copy = self.alloc(key);
        self.node_mut(copy).value = self.node(src).value.clone();
        let kids: Vec<NodeId> = self.node(src).children.values().copied().collect();
        for kid in kids {
            let kid_copy = self.copy_subtree(kid);
            self.attach(copy, kid_copy);
        }
        copy
    }

    /// Deep structural equality between the subtree at `a` and the
    /// subtree at `b` in `other`: equal values at the pair, equal child
    /// counts, and an equal subtree in `other` for every child of `a`.
    pub fn subtree_eq(&self, a: NodeId, other: &ConfigTree, b: NodeId) -> bool {
        if self.node(a).value != other.node(b).value {
            return false;
        }
        if self.node(a).children.len() != other.node(b).children.len() {
            return false;
        }
        for (key, &child) in &self.node(a).children {
            match other.node(b).children.get(key) {
                Some(&other_child) if self.subtree_eq(child, other, other_child) => {}
                _ => return false,
            }
        }
        true
    }
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::new()
    }
}
