//! Integration tests for a full conversion run
//!
//! These tests verify:
//! - Generated conf.py and _toc.yml.in contents
//! - Content file mirroring and rewriting
//! - Exclusion of the MkDocs build output directory
//! - Fail-fast behavior when mkdocs.yml is missing
//! - Identical output on repeated runs

use camino::{Utf8Path, Utf8PathBuf};
use mkdocs_convert::{ConvertError, ConvertOptions, Converter};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

const MKDOCS_YML: &str = r#"
site_name: Example Docs
theme:
  name: material
  palette:
    scheme: slate
nav:
  - Home: index.md
  - about.md
  - User Guide:
      - guide/index.md
      - Installation: guide/install.md
      - Advanced:
          - guide/advanced/tuning.md
  - Reference
"#;

const GUIDE_INDEX: &str = "# Guide\n\
\n\
!!! note\n    \
    Read [installation](install.md#requirements) first.\n    \
    Then tune.\n\
\n\
See [tuning](advanced/tuning.md) and [MkDocs](https://www.mkdocs.org/index.md).\n";

fn create_test_dirs() -> (TempDir, Utf8PathBuf, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let source = root.join("mkdocs-project");
    let target = root.join("rocm-project");
    fs::create_dir_all(&source).unwrap();
    (temp_dir, source, target)
}

fn write(path: &Utf8Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn create_sample_project(source: &Utf8Path) {
    write(&source.join("mkdocs.yml"), MKDOCS_YML);
    write(&source.join("index.md"), "# Welcome\n\nStart with [about](about.md).\n");
    write(&source.join("about.md"), "# About\n");
    write(&source.join("guide/index.md"), GUIDE_INDEX);
    write(&source.join("guide/install.md"), "# Install\n");
    write(
        &source.join("guide/advanced/tuning.md"),
        "!!! warning\n    Experimental.\n",
    );
    write(&source.join("site/index.md"), "built output\n");
    write(&source.join("site/assets/readme.md"), "built output\n");
    write(&source.join("guide/diagram.png"), "not markdown\n");
}

/// Every file under `dir`, keyed by relative path
fn snapshot(dir: &Utf8Path) -> BTreeMap<String, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in current.read_dir_utf8().unwrap() {
            let entry = entry.unwrap();
            let path = entry.path().to_path_buf();
            if path.is_dir() {
                pending.push(path);
            } else {
                let relative = path.strip_prefix(dir).unwrap().to_string();
                files.insert(relative, fs::read(&path).unwrap());
            }
        }
    }
    files
}

#[test]
fn test_full_conversion() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);

    let metrics = Converter::new(&source, &target).convert().unwrap();

    assert_eq!(metrics.pages_converted, 5);
    assert_eq!(metrics.pages_skipped, 2);
    assert_eq!(metrics.admonitions_converted, 2);
    assert_eq!(metrics.links_rewritten, 3);

    let files = snapshot(&target);
    let names: Vec<&str> = files.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "docs/about.md",
            "docs/conf.py",
            "docs/guide/advanced/tuning.md",
            "docs/guide/index.md",
            "docs/guide/install.md",
            "docs/index.md",
            "docs/sphinx/_toc.yml.in",
        ]
    );
}

#[test]
fn test_generated_toc() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);

    let metrics = Converter::new(&source, &target).convert().unwrap();

    let toc = fs::read_to_string(target.join("docs/sphinx/_toc.yml.in")).unwrap();
    let expected = "\
root: index
defaults:
  numbered: false
  maxdepth: 6
subtrees:
- caption: Miscellaneous
  entries:
  - file: about
- caption: User Guide
  entries:
  - file: guide
  - file: guide/install
  - caption: Advanced
    entries:
    - file: guide/advanced/tuning
";
    assert_eq!(toc, expected);
    // A bare top-level caption has no pages to list
    assert!(!toc.contains("Reference"));
    assert!(!toc.contains("entries: []"));
    assert_eq!(metrics.toc_entries, 5);
}

#[test]
fn test_generated_conf_py() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);

    Converter::new(&source, &target).convert().unwrap();

    let conf = fs::read_to_string(target.join("docs/conf.py")).unwrap();
    assert!(conf.contains("project = \"Example Docs\"\n"));
    assert!(conf.contains("external_toc_path = \"./sphinx/_toc.yml\"\n"));
    assert!(conf.contains("html_theme_options = {\n    \"flavor\": \"rocm\",\n}\n"));
}

#[test]
fn test_content_is_rewritten() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);

    Converter::new(&source, &target).convert().unwrap();

    let guide = fs::read_to_string(target.join("docs/guide/index.md")).unwrap();
    assert_eq!(
        guide,
        "# Guide\n\
         \n\
         ```{note}\n\
         Read [installation](install#requirements) first.\n\
         Then tune.\n\
         ```\n\
         \n\
         See [tuning](advanced/tuning) and [MkDocs](https://www.mkdocs.org/index.md).\n"
    );

    let tuning = fs::read_to_string(target.join("docs/guide/advanced/tuning.md")).unwrap();
    assert_eq!(tuning, "```{warning}\nExperimental.\n```\n");

    // Files without admonitions or links are copied as-is
    let install = fs::read_to_string(target.join("docs/guide/install.md")).unwrap();
    assert_eq!(install, "# Install\n");
}

#[test]
fn test_build_output_never_copied() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);

    let metrics = Converter::new(&source, &target).convert().unwrap();

    assert!(!target.join("docs/site").exists());
    assert_eq!(metrics.pages_skipped, 2);
}

#[test]
fn test_source_under_a_site_directory_is_still_converted() {
    let temp_dir = TempDir::new().unwrap();
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let source = root.join("site/project");
    let target = root.join("out");
    write(&source.join("mkdocs.yml"), "site_name: Nested\n");
    write(&source.join("index.md"), "# Home\n");

    let metrics = Converter::new(&source, &target).convert().unwrap();

    assert_eq!(metrics.pages_converted, 1);
    assert!(target.join("docs/index.md").is_file());
}

#[test]
fn test_missing_mkdocs_yml_is_fatal_before_writing() {
    let (_temp_dir, source, target) = create_test_dirs();
    write(&source.join("index.md"), "# Home\n");

    let err = Converter::new(&source, &target).convert().unwrap_err();

    assert!(matches!(err, ConvertError::ConfigNotFound { .. }));
    assert!(err.to_string().contains("mkdocs.yml"));
    assert!(!target.exists());
}

#[test]
fn test_second_run_is_identical() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);
    let converter = Converter::new(&source, &target);

    converter.convert().unwrap();
    let first = snapshot(&target);
    converter.convert().unwrap();
    let second = snapshot(&target);

    assert_eq!(first, second);
}

#[test]
fn test_existing_target_files_are_replaced() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);
    write(&target.join("docs/about.md"), "stale content that is much longer than the new one\n");

    Converter::new(&source, &target).convert().unwrap();

    let about = fs::read_to_string(target.join("docs/about.md")).unwrap();
    assert_eq!(about, "# About\n");
}

#[test]
fn test_options_file_is_honored() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);
    write(
        &source.join("mkdocs-convert.yaml"),
        "misc_caption: Other\nproject:\n  version: \"2.0.0\"\n",
    );

    Converter::new(&source, &target).convert().unwrap();

    let toc = fs::read_to_string(target.join("docs/sphinx/_toc.yml.in")).unwrap();
    assert!(toc.contains("- caption: Other\n"));
    let conf = fs::read_to_string(target.join("docs/conf.py")).unwrap();
    assert!(conf.contains("version = \"2.0.0\"  # Update this\n"));
}

#[test]
fn test_explicit_options_override_file() {
    let (_temp_dir, source, target) = create_test_dirs();
    create_sample_project(&source);
    write(&source.join("mkdocs-convert.yaml"), "toc_file: ignored.yml\n");

    let options = ConvertOptions {
        toc_file: "_toc.yml".to_string(),
        ..ConvertOptions::default()
    };
    Converter::new(&source, &target)
        .with_options(options)
        .convert()
        .unwrap();

    assert!(target.join("docs/sphinx/_toc.yml").is_file());
    assert!(!target.join("docs/sphinx/ignored.yml").exists());
}

#[test]
fn test_empty_nav_and_no_theme() {
    let (_temp_dir, source, target) = create_test_dirs();
    write(&source.join("mkdocs.yml"), "site_name: Bare\n");

    let metrics = Converter::new(&source, &target).convert().unwrap();

    let toc = fs::read_to_string(target.join("docs/sphinx/_toc.yml.in")).unwrap();
    assert!(toc.ends_with("subtrees: []\n"));
    let conf = fs::read_to_string(target.join("docs/conf.py")).unwrap();
    assert!(!conf.contains("html_theme_options"));
    assert_eq!(metrics.pages_converted, 0);
}
