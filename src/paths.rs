//! Destination path derivation.
//!
//! Pure path arithmetic shared by the generate and package stages. All
//! functions work on `Path` components, never on separator characters, so
//! behavior is identical across host platforms; anything destined for
//! emitted HTML or archive entry names goes through [`forward_slashes`].

use std::path::Path;
use std::path::PathBuf;

/// Map a source-relative path to its destination-relative path.
///
/// The parent directory chain is preserved; only the leaf's extension is
/// replaced with `target_extension`. A path with no parent maps to a bare
/// filename.
///
/// - `map_path("guide/intro.md", "html")` → `guide/intro.html`
/// - `map_path("readme.md", "html")` → `readme.html`
pub fn map_path(source_relative: &Path, target_extension: &str) -> PathBuf {
    source_relative.with_extension(target_extension)
}

/// Render a path with `/` separators regardless of platform.
///
/// Used for `<link href>` values and zip entry names, both of which must
/// be portable.
pub fn forward_slashes(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
