//! CLI output formatting.
//!
//! Each stage has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! Pages
//!     index.md → index.html
//!     guide/intro.md → guide/intro.html
//! Assets
//!     guide/diagram.png → guide/diagram.png
//! Stylesheet
//!     base.css
//! Generated 2 pages, 1 asset
//! ```

use std::path::Path;

use crate::generate::{Dispatch, GenerateReport, PlannedFile};
use crate::package::PackageReport;
use crate::paths;

fn indent(line: String) -> String {
    format!("    {line}")
}

fn arrow_line(file: &PlannedFile) -> String {
    format!(
        "{} → {}",
        paths::forward_slashes(&file.source_rel),
        paths::forward_slashes(&file.dest_rel)
    )
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Pages and Assets sections for a set of planned files.
pub fn format_file_list(files: &[PlannedFile]) -> Vec<String> {
    let mut lines = Vec::new();
    let pages: Vec<&PlannedFile> =
        files.iter().filter(|f| f.dispatch == Dispatch::Render).collect();
    let assets: Vec<&PlannedFile> =
        files.iter().filter(|f| f.dispatch == Dispatch::Copy).collect();

    if !pages.is_empty() {
        lines.push("Pages".to_string());
        lines.extend(pages.iter().map(|f| indent(arrow_line(f))));
    }
    if !assets.is_empty() {
        lines.push("Assets".to_string());
        lines.extend(assets.iter().map(|f| indent(arrow_line(f))));
    }
    lines
}

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    if report.source_missing {
        return vec!["Sources directory missing — nothing to generate".to_string()];
    }
    let mut lines = format_file_list(&report.files);
    if let Some(css) = &report.stylesheet {
        lines.push("Stylesheet".to_string());
        let name = css
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| css.display().to_string());
        lines.push(indent(name));
    }
    lines.push(format!(
        "Generated {}, {}",
        plural(report.rendered(), "page"),
        plural(report.copied(), "asset")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{line}");
    }
}

pub fn format_package_output(report: &PackageReport, artifact_dir: &Path) -> Vec<String> {
    let entries = if report.entries == 1 {
        "1 file entry".to_string()
    } else {
        format!("{} file entries", report.entries)
    };
    vec![
        format!("Archive: {} ({entries})", report.archive.display()),
        format!(
            "Registered classifier 'docs' in {}",
            artifact_dir.join(crate::package::ARTIFACT_MANIFEST).display()
        ),
    ]
}

pub fn print_package_output(report: &PackageReport, artifact_dir: &Path) {
    for line in format_package_output(report, artifact_dir) {
        println!("{line}");
    }
}
