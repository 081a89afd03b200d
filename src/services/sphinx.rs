//! Writers for the generated ROCm Docs Core files: `conf.py` and the TOC
//! descriptor.

use crate::error::{ConvertError, Result};
use crate::models::{ConvertOptions, SourceConfig, TocDocument};
use camino::Utf8Path;
use std::fs;

/// Render conf.py for the converted project.
///
/// Line order is fixed so identical input always yields identical text. The
/// theme options stanza is only written when mkdocs.yml configures a theme.
pub fn render_conf_py(config: &SourceConfig, options: &ConvertOptions) -> String {
    let project = &options.project;
    let extensions = project
        .extensions
        .iter()
        .map(|ext| python_string(ext))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        r#""""Configuration file for the Sphinx documentation builder.""""#.to_string(),
        String::new(),
        format!(
            "project = {}",
            python_string(config.project_name(&project.default_name))
        ),
        format!("version = {}  # Update this", python_string(&project.version)),
        "release = version".to_string(),
        format!("author = {}", python_string(&project.author)),
        format!("copyright = {}", python_string(&project.copyright)),
        String::new(),
        "# Required settings".to_string(),
        format!("html_theme = {}", python_string(&project.html_theme)),
        format!("extensions = [{extensions}]"),
        String::new(),
        "# Table of contents".to_string(),
        format!("external_toc_path = {}", python_string(&project.external_toc_path)),
    ];

    if config.has_theme() {
        lines.push(String::new());
        lines.push("# Theme options".to_string());
        lines.push("html_theme_options = {".to_string());
        for (key, value) in &project.theme_options {
            lines.push(format!("    {}: {},", python_string(key), python_string(value)));
        }
        lines.push("}".to_string());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Write conf.py into `docs_dir`.
pub fn emit_config(
    config: &SourceConfig,
    options: &ConvertOptions,
    docs_dir: &Utf8Path,
) -> Result<()> {
    let path = docs_dir.join("conf.py");
    fs::write(&path, render_conf_py(config, options)).map_err(|e| ConvertError::io(&path, e))?;
    tracing::info!("Wrote {}", path);
    Ok(())
}

/// Serialize the TOC document to YAML and write it into `sphinx_dir`.
pub fn emit_toc(toc: &TocDocument, options: &ConvertOptions, sphinx_dir: &Utf8Path) -> Result<()> {
    let path = sphinx_dir.join(&options.toc_file);
    let yaml = serde_yaml_ng::to_string(toc)?;
    fs::write(&path, yaml).map_err(|e| ConvertError::io(&path, e))?;
    tracing::info!("Wrote {} ({} subtrees)", path, toc.subtrees.len());
    Ok(())
}

/// Quote a value as a double-quoted Python string literal.
fn python_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
