//! End-to-end pipeline tests: generate against a real temp directory tree,
//! then package, asserting on the bytes that land on disk.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mdsite::config::SiteConfig;
use mdsite::{generate, package};

fn write(root: &Path, rel: &str, content: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small but representative docs tree: nested markdown, a binary-ish
/// asset, and a file at the root.
fn fixture_docs(root: &Path) -> PathBuf {
    let docs = root.join("docs");
    write(&docs, "index.md", b"# Project Handbook\n\nWelcome to the docs.\n");
    write(&docs, "guide/guide.md", b"# The Guide\n\nRead *carefully*.\n");
    write(&docs, "guide/advanced/tuning.md", b"Tuning notes\n\nNo header here.\n");
    write(&docs, "guide/diagram.png", &[0x89, 0x50, 0x4e, 0x47, 0x00, 0xff, 0x1a, 0x0a]);
    write(&docs, "logo.svg", b"<svg><title>logo</title></svg>");
    docs
}

fn checksum(path: &Path) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(fs::read(path).unwrap());
    hasher.finalize().into()
}

/// Every file under `root` as relative-path → bytes.
fn collect_tree(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut tree = BTreeMap::new();
    for entry in walkdir(root) {
        let rel = entry.strip_prefix(root).unwrap().to_path_buf();
        tree.insert(rel, fs::read(&entry).unwrap());
    }
    tree
}

fn walkdir(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

#[test]
fn generated_site_mirrors_the_source_tree() {
    let tmp = TempDir::new().unwrap();
    let docs = fixture_docs(tmp.path());
    let site = tmp.path().join("site");

    let report = generate::generate(&docs, &site, &SiteConfig::default()).unwrap();

    assert_eq!(report.rendered(), 3);
    assert_eq!(report.copied(), 2);
    assert!(site.join("index.html").is_file());
    assert!(site.join("guide/guide.html").is_file());
    assert!(site.join("guide/advanced/tuning.html").is_file());
    assert!(site.join("guide/diagram.png").is_file());
    assert!(site.join("logo.svg").is_file());
    assert!(site.join("base.css").is_file());
}

#[test]
fn pages_carry_title_stylesheet_link_and_content() {
    let tmp = TempDir::new().unwrap();
    let docs = fixture_docs(tmp.path());
    let site = tmp.path().join("site");

    generate::generate(&docs, &site, &SiteConfig::default()).unwrap();

    let index = fs::read_to_string(site.join("index.html")).unwrap();
    assert!(index.contains("<title>Project Handbook</title>"));
    assert!(index.contains(r#"href="base.css""#));
    assert!(index.contains("<h1>Project Handbook</h1>"));
    assert!(index.contains("<p>Welcome to the docs.</p>"));
    assert!(!index.contains("${"), "placeholder left in output");

    let guide = fs::read_to_string(site.join("guide/guide.html")).unwrap();
    assert!(guide.contains(r#"href="../base.css""#));
    assert!(guide.contains("<em>carefully</em>"));

    // First meaningful line becomes the title when there is no header.
    let tuning = fs::read_to_string(site.join("guide/advanced/tuning.html")).unwrap();
    assert!(tuning.contains("<title>Tuning notes</title>"));
    assert!(tuning.contains(r#"href="../../base.css""#));
}

#[test]
fn assets_are_copied_byte_for_byte() {
    let tmp = TempDir::new().unwrap();
    let docs = fixture_docs(tmp.path());
    let site = tmp.path().join("site");

    generate::generate(&docs, &site, &SiteConfig::default()).unwrap();

    assert_eq!(
        checksum(&docs.join("guide/diagram.png")),
        checksum(&site.join("guide/diagram.png"))
    );
    assert_eq!(checksum(&docs.join("logo.svg")), checksum(&site.join("logo.svg")));
    // The svg was not run through the markdown converter.
    let svg = fs::read_to_string(site.join("logo.svg")).unwrap();
    assert!(!svg.contains("<html"));
}

#[test]
fn pipeline_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let docs = fixture_docs(tmp.path());
    let first = tmp.path().join("site-a");
    let second = tmp.path().join("site-b");

    generate::generate(&docs, &first, &SiteConfig::default()).unwrap();
    generate::generate(&docs, &second, &SiteConfig::default()).unwrap();

    assert_eq!(collect_tree(&first), collect_tree(&second));
}

#[test]
fn rerun_over_existing_output_produces_the_same_tree() {
    let tmp = TempDir::new().unwrap();
    let docs = fixture_docs(tmp.path());
    let site = tmp.path().join("site");

    generate::generate(&docs, &site, &SiteConfig::default()).unwrap();
    let before = collect_tree(&site);
    generate::generate(&docs, &site, &SiteConfig::default()).unwrap();

    assert_eq!(before, collect_tree(&site));
}

#[test]
fn missing_sources_directory_is_a_no_op() {
    let tmp = TempDir::new().unwrap();
    let report = generate::generate(
        &tmp.path().join("no-docs"),
        &tmp.path().join("site"),
        &SiteConfig::default(),
    )
    .unwrap();

    assert!(report.source_missing);
    assert!(!tmp.path().join("site").exists());
}

#[test]
fn build_then_package_round_trip() {
    let tmp = TempDir::new().unwrap();
    let docs = fixture_docs(tmp.path());
    let site = tmp.path().join("dist/site");
    let work = tmp.path().join("dist/work");
    let artifacts = tmp.path().join("dist/artifacts");
    let config = SiteConfig::default();

    generate::generate(&docs, &site, &config).unwrap();
    let before = collect_tree(&site);
    let report = package::package(&site, &work, &artifacts, &config.archive).unwrap();

    // Archive exists and is registered.
    assert!(report.archive.is_file());
    assert!(artifacts.join("artifacts.json").is_file());

    // Site is back where generate left it, bit for bit.
    assert_eq!(before, collect_tree(&site));
    assert!(!work.exists());

    // The archive root carries the site under its leaf name.
    let reader = fs::File::open(&report.archive).unwrap();
    let zip = zip::ZipArchive::new(reader).unwrap();
    let names: Vec<&str> = zip.file_names().collect();
    assert!(names.contains(&"site/index.html"));
    assert!(names.contains(&"site/guide/guide.html"));
    assert!(names.contains(&"site/base.css"));
}

#[test]
fn custom_stylesheet_is_linked_by_its_own_name() {
    let tmp = TempDir::new().unwrap();
    let docs = fixture_docs(tmp.path());
    let site = tmp.path().join("site");
    let css = tmp.path().join("corporate.css");
    fs::write(&css, "body { margin: 0 }").unwrap();

    let config = SiteConfig {
        stylesheet: Some(css),
        ..SiteConfig::default()
    };
    generate::generate(&docs, &site, &config).unwrap();

    assert_eq!(
        fs::read_to_string(site.join("corporate.css")).unwrap(),
        "body { margin: 0 }"
    );
    let index = fs::read_to_string(site.join("index.html")).unwrap();
    assert!(index.contains(r#"href="corporate.css""#));
}
