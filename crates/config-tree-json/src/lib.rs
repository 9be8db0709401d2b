//! JSON codec and file loader for [`config_tree`] configuration trees.
//!
//! [`codec`] maps a [`Configuration`](config_tree::Configuration) to
//! and from a [`serde_json::Value`] document; [`loader`] persists that
//! document as pretty-printed UTF-8 JSON on disk.

pub mod codec;
pub mod loader;

pub use codec::{decode, encode};
pub use loader::{JsonConfigLoader, LoaderError};
