//! # mdsite
//!
//! A build-step documentation generator: a markdown tree in, a templated
//! HTML site and a zip artifact out. It is meant to run as one step of a
//! larger build pipeline, not as a long-running service — a run either
//! completes or aborts on the first error.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Generate   docs/  →  dist/site/          (markdown → templated HTML,
//!                                              assets copied verbatim)
//! 2. Package    dist/site/  →  docs.zip       (zip + artifact registration)
//! ```
//!
//! Generation walks the sources directory once. Markdown files are decoded
//! with the configured charset, converted to HTML fragments, given a title
//! from their first meaningful line, and wrapped in the bundled template
//! (`${title}`, `${css}`, `${content}` placeholders). Everything else is
//! copied byte-for-byte. A single stylesheet is staged at the site root
//! and every page links back to it by relative path, so the site works
//! from any prefix or straight off a disk.
//!
//! Packaging moves the finished site into a scratch directory, zips it,
//! records the archive in `artifacts.json` under classifier `docs`, and
//! moves the site back so later build steps still find it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generate`] | Orchestrator — discovery, per-file dispatch (render vs copy), writing |
//! | [`package`] | Scratch-move, zip archive, artifact manifest, restore |
//! | [`config`] | `mdsite.toml` loading, eager validation, stock config generator |
//! | [`markdown`] | `pulldown-cmark` wrapper and the named parser-extension table |
//! | [`title`] | First-meaningful-line title heuristic with `"No Title"` fallback |
//! | [`template`] | Literal `${...}` placeholder substitution over the bundled template |
//! | [`assets`] | Stylesheet staging and relative `<link>` path computation |
//! | [`paths`] | Destination path mapping and forward-slash rendering |
//! | [`output`] | Pure CLI output formatting (`format_*` / `print_*`) |
//!
//! # Design Decisions
//!
//! ## Placeholder Substitution Over a Template Engine
//!
//! The page wrapper is a fixed bundled HTML file with exactly three
//! placeholders. Literal single-pass replacement keeps the contract
//! obvious and the output diffable; the values are trusted (filesystem
//! and document content), so no escaping layer is needed.
//!
//! ## Absent Sources Are a Success
//!
//! A project with no documentation directory should not fail its build.
//! Generation short-circuits to a no-op; every other I/O problem aborts
//! the run naming the offending file. Partial output is never rolled back.
//!
//! ## Explicit Extension Table
//!
//! Markdown parser extensions are enabled by name against a fixed table in
//! [`markdown::EXTENSIONS`]; an unknown name is a configuration error
//! raised before any file is touched, as are unknown charset labels and
//! malformed include patterns.

pub mod assets;
pub mod config;
pub mod generate;
pub mod markdown;
pub mod output;
pub mod package;
pub mod paths;
pub mod template;
pub mod title;
