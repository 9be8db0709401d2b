//! File-backed JSON loader for configuration trees.
//!
//! The on-disk format is pretty-printed UTF-8 JSON; explicit nulls are
//! written out, never dropped, so the absent-vs-null distinction
//! survives a save/load cycle.

use std::fs;
use std::path::PathBuf;

use config_tree::Configuration;
use thiserror::Error;

use crate::codec;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("configuration i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads and saves one configuration file.
///
/// # Example
///
/// ```no_run
/// use config_tree::Configuration;
/// use config_tree_json::JsonConfigLoader;
///
/// let loader = JsonConfigLoader::builder().path("app.json").build();
/// let mut config = loader.load().unwrap_or_else(|_| Configuration::new());
/// config.set("launches", 1).unwrap();
/// loader.save(&config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct JsonConfigLoader {
    path: PathBuf,
}

impl JsonConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Read and decode the backing file.
    pub fn load(&self) -> Result<Configuration, LoaderError> {
        let text = fs::read_to_string(&self.path)?;
        let document: serde_json::Value = serde_json::from_str(&text)?;
        Ok(codec::decode(&document))
    }

    /// Encode and write the configuration, replacing the backing file.
    pub fn save(&self, config: &Configuration) -> Result<(), LoaderError> {
        let document = codec::encode(config);
        let mut text = serde_json::to_string_pretty(&document)?;
        text.push('\n');
        fs::write(&self.path, text)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    path: PathBuf,
}

impl Builder {
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn build(self) -> JsonConfigLoader {
        JsonConfigLoader { path: self.path }
    }
}
