//! Server configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a depot server process.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ServerConfig {
    /// Managed directory the server operates within.
    pub root: PathBuf,

    /// Address the HTTP listener binds to.
    #[builder(default = "default_bind()")]
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Create the managed directory at startup if it is absent.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub create_root: bool,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_true() -> bool {
    true
}

impl ServerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ServerConfig {
    /// Create a new server config builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Create a simple config for serving a directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            bind: default_bind(),
            create_root: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("managed_files")
    }
}
