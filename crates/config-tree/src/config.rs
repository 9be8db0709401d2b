//! Root façade: validated string-path access over one [`ConfigTree`].

use serde_json::Value;
use thiserror::Error;

use crate::coerce::json_type_name;
use crate::node::ConfigTree;
use crate::path::{self, PathError};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    MalformedPath(#[from] PathError),
    #[error("type mismatch at '{path}': expected {expected}, found {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// A configuration: one owned tree plus dotted-path validation.
///
/// Writes auto-create missing intermediate nodes and accept a `*`
/// wildcard segment; reads never create nodes and reject wildcards.
/// Typed getters are strict — a present value of the wrong type is a
/// [`ConfigError::TypeMismatch`], never a silent coercion (the opt-in
/// coercion rules live in [`crate::coerce`]).
///
/// # Example
///
/// ```
/// use config_tree::Configuration;
///
/// let mut config = Configuration::new();
/// config.set("server.port", 8080).unwrap();
/// config.set("server.host", "localhost").unwrap();
///
/// assert_eq!(config.get_i64("server.port").unwrap(), Some(8080));
/// assert_eq!(config.get_str("server.host").unwrap(), Some("localhost"));
/// assert_eq!(config.get("server.missing").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    tree: ConfigTree,
}

impl Configuration {
    pub fn new() -> Self {
        Self {
            tree: ConfigTree::new(),
        }
    }

    /// Set the value at `path`, creating missing intermediate nodes.
    ///
    /// A full `*` segment applies the write to every child existing at
    /// that position.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let segments = path::parse_write_path(path)?;
        let root = self.tree.root();
        self.tree.set(root, &segments, Some(value.into()));
        Ok(())
    }

    /// Restore the node at `path` to the "never set" state. This is not
    /// the same as setting an explicit JSON `null`.
    pub fn clear(&mut self, path: &str) -> Result<(), ConfigError> {
        let segments = path::parse_write_path(path)?;
        let root = self.tree.root();
        self.tree.set(root, &segments, None);
        Ok(())
    }

    /// Read the value at `path` without creating any nodes.
    ///
    /// An absent path or a value-less node is `Ok(None)`, not an error.
    pub fn get(&self, path: &str) -> Result<Option<&Value>, ConfigError> {
        let segments = path::parse_read_path(path)?;
        Ok(self
            .tree
            .find(self.tree.root(), &segments)
            .and_then(|id| self.tree.value(id)))
    }

    pub fn get_bool(&self, path: &str) -> Result<Option<bool>, ConfigError> {
        match self.get(path)? {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(Self::mismatch(path, "boolean", other)),
        }
    }

    pub fn get_i64(&self, path: &str) -> Result<Option<i64>, ConfigError> {
        match self.get(path)? {
            None => Ok(None),
            Some(value @ Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| Self::mismatch(path, "integer", value)),
            Some(other) => Err(Self::mismatch(path, "integer", other)),
        }
    }

    pub fn get_u64(&self, path: &str) -> Result<Option<u64>, ConfigError> {
        match self.get(path)? {
            None => Ok(None),
            Some(value @ Value::Number(n)) => n
                .as_u64()
                .map(Some)
                .ok_or_else(|| Self::mismatch(path, "unsigned integer", value)),
            Some(other) => Err(Self::mismatch(path, "unsigned integer", other)),
        }
    }

    pub fn get_f64(&self, path: &str) -> Result<Option<f64>, ConfigError> {
        match self.get(path)? {
            None => Ok(None),
            Some(value @ Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| Self::mismatch(path, "number", value)),
            Some(other) => Err(Self::mismatch(path, "number", other)),
        }
    }

    pub fn get_str(&self, path: &str) -> Result<Option<&str>, ConfigError> {
        match self.get(path)? {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(Self::mismatch(path, "string", other)),
        }
    }

    pub fn get_array(&self, path: &str) -> Result<Option<&[Value]>, ConfigError> {
        match self.get(path)? {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items.as_slice())),
            Some(other) => Err(Self::mismatch(path, "array", other)),
        }
    }

    fn mismatch(path: &str, expected: &'static str, actual: &Value) -> ConfigError {
        ConfigError::TypeMismatch {
            path: path.to_string(),
            expected,
            actual: json_type_name(actual),
        }
    }

    /// Deep copy: a new configuration with its own arena, sharing no
    /// node with this one.
    pub fn copy(&self) -> Configuration {
        Configuration {
            tree: self.tree.clone(),
        }
    }

    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ConfigTree {
        &mut self.tree
    }
}

impl PartialEq for Configuration {
    /// Deep structural equality from the roots.
    fn eq(&self, other: &Self) -> bool {
        self.tree
            .subtree_eq(self.tree.root(), &other.tree, other.tree.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn numbered() -> Configuration {
        let mut config = Configuration::new();
        config.set("number.zero", 0.0).unwrap();
        config.set("number.one", 1.0).unwrap();
        config.set("text.zero", "zero").unwrap();
        config.set("text.one", "one").unwrap();
        config
    }

    #[test]
    fn stores_and_reads_values() {
        let config = numbered();
        assert_eq!(config.get_f64("number.zero").unwrap(), Some(0.0));
        assert_eq!(config.get_f64("number.one").unwrap(), Some(1.0));
        assert_eq!(config.get_str("text.zero").unwrap(), Some("zero"));
        assert_eq!(config.get_str("text.one").unwrap(), Some("one"));
    }

    #[test]
    fn siblings_share_the_root_parent() {
        let mut config = Configuration::new();
        config.set("a", 1).unwrap();
        config.set("b", 2).unwrap();
        let tree = config.tree();
        let a = tree.child(tree.root(), "a").unwrap();
        let b = tree.child(tree.root(), "b").unwrap();
        assert_eq!(tree.parent(a), tree.parent(b));
        assert_eq!(tree.parent(a), Some(tree.root()));
    }

    #[test]
    fn absent_path_reads_as_none() {
        let config = numbered();
        assert_eq!(config.get("number.two").unwrap(), None);
        assert_eq!(config.get("missing.entirely").unwrap(), None);
        // Reads never vivify.
        assert_eq!(config.tree().find(
            config.tree().root(),
            &["missing".to_string()],
        ), None);
    }

    #[test]
    fn wrong_type_is_a_mismatch_not_a_coercion() {
        let config = numbered();
        let err = config.get_i64("text.zero").unwrap_err();
        assert_eq!(
            err,
            ConfigError::TypeMismatch {
                path: "text.zero".to_string(),
                expected: "integer",
                actual: "string",
            }
        );
        assert!(config.get_bool("number.one").is_err());
        assert!(config.get_str("number.one").is_err());
    }

    #[test]
    fn fractional_number_is_not_an_integer() {
        let mut config = Configuration::new();
        config.set("ratio", 0.5).unwrap();
        assert!(config.get_i64("ratio").is_err());
        assert_eq!(config.get_f64("ratio").unwrap(), Some(0.5));
    }

    #[test]
    fn reserved_keys_are_malformed_paths() {
        let mut config = Configuration::new();
        assert!(matches!(
            config.set("value.x", 1),
            Err(ConfigError::MalformedPath(PathError::ReservedSegment(_)))
        ));
        assert!(matches!(
            config.set("children.x", 1),
            Err(ConfigError::MalformedPath(PathError::ReservedSegment(_)))
        ));
    }

    #[test]
    fn wildcard_read_is_malformed() {
        let config = numbered();
        assert!(matches!(
            config.get("number.*"),
            Err(ConfigError::MalformedPath(PathError::WildcardInRead))
        ));
    }

    #[test]
    fn wildcard_write_covers_existing_children() {
        let mut config = Configuration::new();
        config.set("english.speakers", 1).unwrap();
        config.set("danish.speakers", 1).unwrap();
        config.set("latin.speakers", 1).unwrap();

        config.set("*.modernLanguage", true).unwrap();

        assert_eq!(config.get_bool("english.modernLanguage").unwrap(), Some(true));
        assert_eq!(config.get_bool("danish.modernLanguage").unwrap(), Some(true));
        assert_eq!(config.get_bool("latin.modernLanguage").unwrap(), Some(true));

        config.set("esperanto.speakers", 1).unwrap();
        assert_eq!(config.get_bool("esperanto.modernLanguage").unwrap(), None);
    }

    #[test]
    fn clear_restores_the_absent_state() {
        let mut config = Configuration::new();
        config.set("flag", json!(null)).unwrap();
        assert_eq!(config.get("flag").unwrap(), Some(&Value::Null));

        config.clear("flag").unwrap();
        assert_eq!(config.get("flag").unwrap(), None);
    }

    #[test]
    fn copy_is_equal_but_independent() {
        let config = numbered();
        let mut copy = config.copy();
        assert_eq!(config, copy);
        assert_ne!(config, Configuration::new());

        copy.set("number.zero", 99).unwrap();
        assert_ne!(config, copy);
        assert_eq!(config.get_f64("number.zero").unwrap(), Some(0.0));
    }
}
