//! Rendering configuration
//!
//! Controls how markup documents are serialised. Can be built in code or loaded
//! from YAML:
//!
//! ```yaml
//! xml_declaration: true
//! indent: 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adapter::Build;
use crate::errors::{BlocksError, Result};

/// Widest indentation accepted by [`RenderConfig::validate`]
pub const MAX_INDENT: usize = 16;

/// Settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Write `<?xml version="1.0" encoding="UTF-8"?>` before the root element
    pub xml_declaration: bool,
    /// Indent nested elements by this many spaces; compact output when unset
    ///
    /// Elements with both body text and children are written on one line so
    /// no whitespace is added to their text.
    pub indent: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            indent: None,
        }
    }
}

impl RenderConfig {
    /// Start a configuration builder
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: RenderConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading render configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| {
            BlocksError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Render configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(indent) = self.indent {
            if indent > MAX_INDENT {
                return Err(BlocksError::Config(format!(
                    "indent must be at most {}, got {}",
                    MAX_INDENT, indent
                )));
            }
        }
        Ok(())
    }
}

/// Configuration
#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn xml_declaration(&mut self, enabled: bool) -> &mut Self {
        self.config.xml_declaration = enabled;
        self
    }

    pub fn indent(&mut self, width: usize) -> &mut Self {
        self.config.indent = Some(width);
        self
    }

    pub fn compact(&mut self) -> &mut Self {
        self.config.indent = None;
        self
    }
}

impl Build for RenderConfigBuilder {
    type Target = RenderConfig;

    fn build(&self) -> RenderConfig {
        self.config.clone()
    }
}
