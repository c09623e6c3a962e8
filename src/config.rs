//! Run configuration.
//!
//! Configuration comes from an optional `mdsite.toml` next to the project
//! (path overridable with `--config`); a missing file means stock defaults.
//! Files are sparse — override just the values you want:
//!
//! ```toml
//! charset = "UTF-8"             # read/write charset for markdown and HTML
//! markdown_extension = "md"     # files with this extension are converted
//! include = []                  # glob patterns; empty = every file
//! extensions = ["tables"]       # markdown parser extensions to enable
//! # stylesheet = "my-style.css" # replaces the bundled base.css
//!
//! [archive]
//! name = "docs"                 # archive base name → docs.zip
//! nest_under_name = false       # nest zip contents under `name/`
//! ```
//!
//! Everything configurable is validated eagerly — unknown charset labels,
//! unknown parser extension names, and malformed include patterns fail the
//! run before any file is touched.

use encoding_rs::Encoding;
use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::markdown;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown markdown extension name: {0}")]
    UnknownExtension(String),
    #[error("unknown charset label: {0}")]
    UnknownCharset(String),
    #[error("invalid include pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Default config file name, looked up relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "mdsite.toml";

/// Site configuration. All fields optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Charset used to read markdown sources and write generated HTML.
    pub charset: String,
    /// Extension deciding transform-vs-copy per file.
    pub markdown_extension: String,
    /// Include glob patterns over source-relative paths. Empty = all files.
    pub include: Vec<String>,
    /// Markdown parser extension names (see `markdown::EXTENSIONS`).
    pub extensions: Vec<String>,
    /// Replacement stylesheet; the bundled `base.css` when unset.
    pub stylesheet: Option<PathBuf>,
    pub archive: ArchiveConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Archive base name: `<name>.zip`.
    pub name: String,
    /// When true, zip contents are nested one level under `<name>/`.
    pub nest_under_name: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            charset: "UTF-8".to_string(),
            markdown_extension: "md".to_string(),
            include: Vec::new(),
            extensions: Vec::new(),
            stylesheet: None,
            archive: ArchiveConfig::default(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            name: "docs".to_string(),
            nest_under_name: false,
        }
    }
}

impl SiteConfig {
    /// Validate every configurable knob eagerly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        resolve_charset(&self.charset)?;
        markdown::parser_options(&self.extensions)?;
        compile_includes(&self.include)?;
        Ok(())
    }
}

/// Load configuration from `path`, falling back to stock defaults when the
/// file does not exist.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let text = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// Resolve a charset label (e.g. `"UTF-8"`, `"windows-1252"`) to an
/// encoding. Labels are matched per the WHATWG registry, case-insensitive.
pub fn resolve_charset(label: &str) -> Result<&'static Encoding, ConfigError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ConfigError::UnknownCharset(label.to_string()))
}

/// Compile include patterns, failing on the first malformed one.
pub fn compile_includes(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| ConfigError::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Stock `mdsite.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    let known: Vec<&str> = markdown::EXTENSIONS.iter().map(|(name, _)| *name).collect();
    format!(
        r#"# mdsite configuration. Every option is optional; the values below are
# the stock defaults.

# Charset used to read markdown sources and write generated HTML.
# Any WHATWG encoding label works, e.g. "UTF-8" or "windows-1252".
charset = "UTF-8"

# Files with this extension are converted to HTML; everything else is
# copied into the site unchanged.
markdown_extension = "md"

# Include glob patterns over source-relative paths. Empty means every
# file under the sources directory is picked up.
# include = ["**/*.md", "img/**"]
include = []

# Markdown parser extensions to enable. Recognized names:
# {known}
extensions = []

# Stylesheet copied to the site root and linked from every page.
# Defaults to the bundled base.css.
# stylesheet = "my-style.css"

[archive]
# Archive base name: produces <name>.zip in the artifact directory.
name = "docs"
# Nest the zip contents one level under a "<name>/" directory.
nest_under_name = false
"#,
        known = known.join(", "),
    )
}
