//! Configuration system for zodsmith.
//!
//! Loads config from:
//! 1. Global: ~/.config/zodsmith/config.toml
//! 2. Per-project: .zodsmith/config.toml (overrides global)
//!
//! Command-line flags override both.
//!
//! Example config.toml:
//! ```toml
//! [output]
//! type_style = "interface"
//! schema_name_suffix = "Validator"
//! semicolons = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use zodsmith_typegen::{OutputConfig, TypeStyle};

/// Emission settings. Unset keys fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub type_style: Option<TypeStyle>,
    pub include_exports: Option<bool>,
    pub schema_name_suffix: Option<String>,
    pub type_name_suffix: Option<String>,
    pub include_comments: Option<bool>,
    pub semicolons: Option<bool>,
}

impl OutputSection {
    /// Overwrite the keys set in this section.
    pub fn apply(&self, config: &mut OutputConfig) {
        if let Some(style) = self.type_style {
            config.type_style = style;
        }
        if let Some(exports) = self.include_exports {
            config.include_exports = exports;
        }
        if let Some(suffix) = &self.schema_name_suffix {
            config.schema_name_suffix = suffix.clone();
        }
        if let Some(suffix) = &self.type_name_suffix {
            config.type_name_suffix = suffix.clone();
        }
        if let Some(comments) = self.include_comments {
            config.include_comments = comments;
        }
        if let Some(semicolons) = self.semicolons {
            config.semicolons = semicolons;
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            type_style: other.type_style.or(self.type_style),
            include_exports: other.include_exports.or(self.include_exports),
            schema_name_suffix: other.schema_name_suffix.or(self.schema_name_suffix),
            type_name_suffix: other.type_name_suffix.or(self.type_name_suffix),
            include_comments: other.include_comments.or(self.include_comments),
            semicolons: other.semicolons.or(self.semicolons),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZodsmithConfig {
    pub output: OutputSection,
}

impl ZodsmithConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/zodsmith/config.toml,
    /// then merges with per-project config from .zodsmith/config.toml.
    pub fn load(root: &Path) -> Self {
        Self::load_layers(Self::global_config_path().as_deref(), root)
    }

    fn load_layers(global: Option<&Path>, root: &Path) -> Self {
        let mut config = Self::default();

        if let Some(global) = global.and_then(Self::load_file) {
            config = config.merge(global);
        }

        let project_path = root.join(".zodsmith").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("zodsmith").join("config.toml"))
    }

    /// Load config from a file path. Missing files are skipped silently;
    /// unreadable or invalid ones are skipped with a warning.
    fn load_file(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                None
            }
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            output: self.output.merge(other.output),
        }
    }

    /// Built-in defaults with every configured key applied.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::default();
        self.output.apply(&mut config);
        config
    }
}
