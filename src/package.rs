//! Site packaging.
//!
//! The final stage: the generated site is compressed into a single zip and
//! registered as a build artifact for downstream steps (publishing,
//! deployment) to pick up.
//!
//! ## Sequence
//!
//! 1. Create the scratch location (optionally nested one level under the
//!    archive name, per [`Staging`]).
//! 2. Move the output tree into the scratch location under its own leaf
//!    name, so the archive carries a `site/` root instead of loose files.
//! 3. Zip the scratch tree into `<artifact_dir>/<name>.zip`.
//! 4. Record the archive in `artifacts.json` under classifier `docs`.
//! 5. Move the output tree back where generate left it, so later build
//!    steps still find it, and remove the emptied scratch directories.
//!
//! There is no atomicity across the sequence: a crash mid-way can leave
//! the output tree at the scratch location. Accepted limitation.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::ArchiveConfig;
use crate::paths;

/// Classifier the site archive is registered under.
pub const DOCS_CLASSIFIER: &str = "docs";

/// Artifact manifest file name, written next to the archives.
pub const ARTIFACT_MANIFEST: &str = "artifacts.json";

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("output directory does not exist, run generate first: {0}")]
    MissingOutput(PathBuf),
    #[error("output directory has no usable leaf name: {0}")]
    BadOutputName(PathBuf),
    #[error("failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Where the output tree is parked inside the scratch root while zipping.
///
/// `Flat` archives carry `site/…` at the root; `NestedUnderName` adds one
/// level (`<name>/site/…`) so an unpacked archive lands in a directory
/// named after the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staging {
    Flat,
    NestedUnderName(String),
}

impl Staging {
    pub fn from_config(archive: &ArchiveConfig) -> Self {
        if archive.nest_under_name {
            Staging::NestedUnderName(archive.name.clone())
        } else {
            Staging::Flat
        }
    }

    /// Directory the output tree is moved under.
    pub fn dir(&self, scratch_root: &Path) -> PathBuf {
        match self {
            Staging::Flat => scratch_root.to_path_buf(),
            Staging::NestedUnderName(name) => scratch_root.join(name),
        }
    }
}

/// One registered build artifact.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub file: PathBuf,
    pub classifier: String,
}

#[derive(Debug)]
pub struct PackageReport {
    pub archive: PathBuf,
    /// File entries written into the archive.
    pub entries: usize,
}

/// Package the generated site and register it as a build artifact.
pub fn package(
    output_root: &Path,
    scratch_root: &Path,
    artifact_dir: &Path,
    archive: &ArchiveConfig,
) -> Result<PackageReport, PackageError> {
    if !output_root.is_dir() {
        return Err(PackageError::MissingOutput(output_root.to_path_buf()));
    }
    let leaf = output_root
        .file_name()
        .ok_or_else(|| PackageError::BadOutputName(output_root.to_path_buf()))?
        .to_os_string();

    let staging = Staging::from_config(archive);
    let staging_dir = staging.dir(scratch_root);
    fs::create_dir_all(&staging_dir)?;
    let staged_output = staging_dir.join(&leaf);

    move_tree(output_root, &staged_output)?;

    fs::create_dir_all(artifact_dir)?;
    let archive_path = artifact_dir.join(format!("{}.zip", archive.name));
    let entries = zip_tree(scratch_root, &archive_path)?;
    register_artifact(artifact_dir, &archive_path, DOCS_CLASSIFIER)?;

    move_tree(&staged_output, output_root)?;
    fs::remove_dir(&staging_dir)?;
    if staging_dir != scratch_root {
        fs::remove_dir(scratch_root)?;
    }

    Ok(PackageReport {
        archive: archive_path,
        entries,
    })
}

fn move_tree(from: &Path, to: &Path) -> Result<(), PackageError> {
    fs::rename(from, to).map_err(|source| PackageError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Zip `root`'s contents (not `root` itself) into `archive_path`.
/// Entry names use forward slashes. Returns the file entry count.
fn zip_tree(root: &Path, archive_path: &Path) -> Result<usize, PackageError> {
    let file = File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0;
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if rel.as_os_str().is_empty() {
            continue;
        }
        let name = paths::forward_slashes(rel);
        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else {
            writer.start_file(name, options)?;
            let mut source = File::open(entry.path())?;
            io::copy(&mut source, &mut writer)?;
            entries += 1;
        }
    }
    writer.finish()?;
    Ok(entries)
}

/// Record an artifact in the manifest, replacing any previous record with
/// the same classifier.
fn register_artifact(
    artifact_dir: &Path,
    file: &Path,
    classifier: &str,
) -> Result<(), PackageError> {
    let manifest_path = artifact_dir.join(ARTIFACT_MANIFEST);
    let mut records: Vec<ArtifactRecord> = if manifest_path.exists() {
        serde_json::from_str(&fs::read_to_string(&manifest_path)?)?
    } else {
        Vec::new()
    };
    records.retain(|r| r.classifier != classifier);
    records.push(ArtifactRecord {
        file: file.to_path_buf(),
        classifier: classifier.to_string(),
    });
    fs::write(&manifest_path, serde_json::to_string_pretty(&records)?)?;
    Ok(())
}
