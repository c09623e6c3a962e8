//! Site generation.
//!
//! The orchestrating stage: walks the sources directory, dispatches each
//! file to markdown conversion or verbatim copy, and writes the site tree
//! under the output root.
//!
//! ## Per-file dispatch
//!
//! A file whose extension matches the configured markdown extension is
//! decoded with the configured charset, converted to an HTML fragment,
//! titled, wrapped in the bundled template, and written as `.html`.
//! Every other file is copied byte-for-byte — no charset reinterpretation.
//!
//! ## Output structure
//!
//! The output tree mirrors the source tree; only markdown leaves change
//! extension:
//!
//! ```text
//! docs/                         dist/site/
//! ├── index.md                  ├── index.html
//! ├── guide/                    ├── guide/
//! │   ├── intro.md         →    │   ├── intro.html
//! │   └── diagram.png           │   └── diagram.png
//! └── logo.svg                  ├── logo.svg
//!                               └── base.css      (staged stylesheet)
//! ```
//!
//! ## Failure policy
//!
//! The first I/O failure aborts the run with the offending file named in
//! the error; output already written stays where it is. The one tolerated
//! condition is an absent sources directory, which is a successful no-op
//! so projects without documentation don't fail their build.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::assets;
use crate::config::{self, ConfigError, SiteConfig};
use crate::markdown;
use crate::paths;
use crate::template;
use crate::title;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to scan {path}: {source}")]
    Scan {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to stage stylesheet into {output_root}: {source}")]
    Stylesheet {
        output_root: PathBuf,
        source: std::io::Error,
    },
}

/// How a discovered file will be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Markdown: convert, title, template, write as `.html`.
    Render,
    /// Anything else: copy bytes verbatim.
    Copy,
}

/// One discovered source file and its destination.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    /// Path relative to the sources root.
    pub source_rel: PathBuf,
    /// Path relative to the output root.
    pub dest_rel: PathBuf,
    pub dispatch: Dispatch,
}

/// Result of a generate run, consumed by the output formatter.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// True when the sources directory did not exist (no-op success).
    pub source_missing: bool,
    /// Staged stylesheet path under the output root.
    pub stylesheet: Option<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl GenerateReport {
    pub fn rendered(&self) -> usize {
        self.files.iter().filter(|f| f.dispatch == Dispatch::Render).count()
    }

    pub fn copied(&self) -> usize {
        self.files.iter().filter(|f| f.dispatch == Dispatch::Copy).count()
    }
}

/// Discover the files a generate run would process, without writing
/// anything. Returns `None` when the sources directory does not exist.
pub fn plan(
    source_root: &Path,
    config: &SiteConfig,
) -> Result<Option<Vec<PlannedFile>>, GenerateError> {
    // Validate up front so a bad config fails a `check` run too.
    config.validate()?;
    let includes = config::compile_includes(&config.include)?;

    if !source_root.is_dir() {
        return Ok(None);
    }

    let mut files = Vec::new();
    // Sorted for deterministic summaries; correctness does not depend on
    // enumeration order since every file maps to an independent destination.
    for entry in WalkDir::new(source_root).sort_by_file_name() {
        let entry = entry.map_err(|source| GenerateError::Scan {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source_root.to_path_buf()),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(source_root)
            .unwrap_or(entry.path())
            .to_path_buf();

        if !includes.is_empty() && !includes.iter().any(|p| p.matches_path(&rel)) {
            continue;
        }

        let is_markdown = rel
            .extension()
            .is_some_and(|ext| ext == config.markdown_extension.as_str());

        let (dispatch, dest_rel) = if is_markdown {
            (Dispatch::Render, paths::map_path(&rel, "html"))
        } else {
            let own_ext = rel
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default();
            (Dispatch::Copy, paths::map_path(&rel, &own_ext))
        };

        files.push(PlannedFile {
            source_rel: rel,
            dest_rel,
            dispatch,
        });
    }

    Ok(Some(files))
}

/// Run the full generate stage: plan, stage the stylesheet, then process
/// every file. Fails fast on the first unrecoverable error.
pub fn generate(
    source_root: &Path,
    output_root: &Path,
    config: &SiteConfig,
) -> Result<GenerateReport, GenerateError> {
    let encoding = config::resolve_charset(&config.charset)?;
    let options = markdown::parser_options(&config.extensions)?;

    let Some(files) = plan(source_root, config)? else {
        return Ok(GenerateReport {
            source_missing: true,
            ..GenerateReport::default()
        });
    };

    // Template and stylesheet are fully prepared before any file work.
    let staged_css = assets::stage_css(config.stylesheet.as_deref(), output_root).map_err(
        |source| GenerateError::Stylesheet {
            output_root: output_root.to_path_buf(),
            source,
        },
    )?;

    for file in &files {
        let source_path = source_root.join(&file.source_rel);
        let dest_path = output_root.join(&file.dest_rel);
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        match file.dispatch {
            Dispatch::Render => {
                let bytes = fs::read(&source_path).map_err(|source| GenerateError::Read {
                    path: source_path.clone(),
                    source,
                })?;
                let (text, _, _) = encoding.decode(&bytes);
                let fragment = markdown::to_html(&text, options);
                let page_title = title::extract_title(&text);
                let css_rel = assets::relative_css_path(&staged_css, &dest_path);
                let html = template::render(
                    template::PAGE_TEMPLATE,
                    &page_title,
                    &css_rel,
                    &fragment,
                );
                let (encoded, _, _) = encoding.encode(&html);
                fs::write(&dest_path, &encoded).map_err(|source| GenerateError::Write {
                    path: dest_path.clone(),
                    source,
                })?;
            }
            Dispatch::Copy => {
                fs::copy(&source_path, &dest_path).map_err(|source| GenerateError::Copy {
                    from: source_path.clone(),
                    to: dest_path.clone(),
                    source,
                })?;
            }
        }
    }

    Ok(GenerateReport {
        source_missing: false,
        stylesheet: Some(staged_css),
        files,
    })
}
