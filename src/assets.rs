//! Stylesheet staging.
//!
//! One stylesheet is placed at the output root per run, either copied from
//! a user-supplied path or written out from the embedded default. Every
//! generated page links back to it via a relative path computed from the
//! page's own location, so a generated site can be served from any prefix
//! or opened straight from disk.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::paths;

/// Default stylesheet, embedded at compile time.
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/base.css");

/// Filename the default stylesheet is staged under.
pub const DEFAULT_STYLESHEET_NAME: &str = "base.css";

/// Copy the stylesheet into `output_root` and return its staged path.
///
/// A user-supplied stylesheet keeps its own filename; without one the
/// embedded default is written as `base.css`. Creates `output_root` if it
/// does not exist yet.
pub fn stage_css(user_stylesheet: Option<&Path>, output_root: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(output_root)?;
    match user_stylesheet {
        Some(source) => {
            let name = source.file_name().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("stylesheet path has no file name: {}", source.display()),
                )
            })?;
            let staged = output_root.join(name);
            fs::copy(source, &staged)?;
            Ok(staged)
        }
        None => {
            let staged = output_root.join(DEFAULT_STYLESHEET_NAME);
            fs::write(&staged, DEFAULT_STYLESHEET)?;
            Ok(staged)
        }
    }
}

/// Relative path from a destination file's directory to the staged
/// stylesheet, rendered with forward slashes.
///
/// Both paths must share a common root (the output directory); the result
/// is `../` hops up to that root plus the stylesheet's remaining
/// components.
pub fn relative_css_path(staged_css: &Path, destination_file: &Path) -> String {
    let base = destination_file.parent().unwrap_or_else(|| Path::new(""));
    let css: Vec<Component> = staged_css.components().collect();
    let from: Vec<Component> = base.components().collect();

    let shared = css.iter().zip(from.iter()).take_while(|(a, b)| a == b).count();

    let mut relative = PathBuf::new();
    for _ in shared..from.len() {
        relative.push("..");
    }
    for component in &css[shared..] {
        relative.push(component.as_os_str());
    }
    paths::forward_slashes(&relative)
}
