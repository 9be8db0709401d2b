//! Hierarchical key/value configuration tree addressed by dotted paths.
//!
//! Every node of a [`ConfigTree`] is simultaneously an addressable
//! container and a potential scalar holder: it carries an optional
//! [`serde_json::Value`] payload plus a map of named children. The
//! [`Configuration`] façade validates dotted path strings and forwards
//! to the tree — writes auto-create missing intermediate nodes and may
//! use a `*` wildcard segment, reads never create anything.
//!
//! # Example
//!
//! ```
//! use config_tree::Configuration;
//!
//! let mut config = Configuration::new();
//! config.set("database.port", 5432).unwrap();
//! config.set("database.name", "app").unwrap();
//!
//! // Bulk write over every existing child of the root.
//! config.set("*.audited", true).unwrap();
//!
//! assert_eq!(config.get_i64("database.port").unwrap(), Some(5432));
//! assert_eq!(config.get_bool("database.audited").unwrap(), Some(true));
//! assert_eq!(config.get("database.missing").unwrap(), None);
//! ```

pub mod coerce;
pub mod config;
pub mod node;
pub mod path;

pub use coerce::CoerceError;
pub use config::{ConfigError, Configuration};
pub use node::{ConfigTree, NodeId};
pub use path::{parse_read_path, parse_write_path, PathError};
