//! Recursive converter between a configuration tree and a JSON document.
//!
//! Encoding rules:
//! - a node with a non-object value and no children encodes as that
//!   value directly;
//! - a node with children and no value encodes as an object of
//!   `child key -> encoding`, where children with neither a value nor
//!   children of their own are omitted entirely;
//! - a node with both, or with an object-shaped value, encodes as an
//!   object carrying the reserved `"value"` member for the scalar plus
//!   one member per child. An object payload emitted bare would be
//!   indistinguishable from an internal node, so it always travels
//!   under the reserved key.
//!
//! Decoding inverts this: objects become internal nodes (a `"value"`
//! member becomes the node's scalar), anything else becomes the node's
//! value. `decode(encode(t))` reproduces `t` up to the omission of
//! value-less childless leaves, which are never reconstructed.

use config_tree::path::VALUE_KEY;
use config_tree::{ConfigTree, Configuration, NodeId};
use serde_json::{Map, Value};

/// Encode a configuration into a JSON document.
pub fn encode(config: &Configuration) -> Value {
    let tree = config.tree();
    encode_node(tree, tree.root())
}

fn encode_node(tree: &ConfigTree, id: NodeId) -> Value {
    if let (Some(value), false) = (tree.value(id), tree.has_children(id)) {
        // A bare object would decode as an internal node; keep object
        // payloads under the reserved key so decode can tell them apart.
        if !value.is_object() {
            return value.clone();
        }
    }
    let mut object = Map::new();
    if let Some(value) = tree.value(id) {
        object.insert(VALUE_KEY.to_string(), value.clone());
    }
    for (key, child) in tree.children(id) {
        // Empty leaves are not persisted.
        if !tree.has_value(child) && !tree.has_children(child) {
            continue;
        }
        object.insert(key.to_string(), encode_node(tree, child));
    }
    Value::Object(object)
}

/// Decode a JSON document into a configuration.
pub fn decode(document: &Value) -> Configuration {
    let mut config = Configuration::new();
    let tree = config.tree_mut();
    let root = tree.root();
    decode_node(tree, root, document);
    config
}

fn decode_node(tree: &mut ConfigTree, id: NodeId, value: &Value) {
    match value {
        Value::Object(object) => {
            for (key, member) in object {
                if key.as_str() == VALUE_KEY {
                    tree.set_value(id, Some(member.clone()));
                } else {
                    let child = tree.resolve(id, std::slice::from_ref(key));
                    decode_node(tree, child, member);
                }
            }
        }
        scalar => tree.set_value(id, Some(scalar.clone())),
    }
}
