use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Conversion options from mkdocs-convert.yaml
///
/// Every field is optional in the file; anything left out falls back to the
/// ROCm Docs Core defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Extension of content files, without the dot
    pub content_extension: String,

    /// MkDocs build output directory name, skipped during the content walk.
    /// Overridden by `site_dir` in mkdocs.yml when present.
    pub output_dir_name: String,

    /// Content root under the target directory
    pub docs_dir: String,

    /// Directory under `docs_dir` holding the TOC descriptor
    pub sphinx_dir: String,

    /// File name of the TOC descriptor
    pub toc_file: String,

    /// Root page of the TOC; also what an empty cleaned path collapses to
    pub root_page: String,

    /// Caption used for top-level pages that are not inside a section
    pub misc_caption: String,

    pub max_depth: u32,

    pub numbered: bool,

    pub project: ProjectOptions,
}

/// Boilerplate fields written into conf.py
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
    /// Used when mkdocs.yml has no `site_name`
    pub default_name: String,
    pub version: String,
    pub author: String,
    pub copyright: String,
    pub html_theme: String,
    pub extensions: Vec<String>,
    /// Value of `external_toc_path` in conf.py
    pub external_toc_path: String,
    /// Written as `html_theme_options` when the source declares a theme
    pub theme_options: IndexMap<String, String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            content_extension: "md".to_string(),
            output_dir_name: "site".to_string(),
            docs_dir: "docs".to_string(),
            sphinx_dir: "sphinx".to_string(),
            toc_file: "_toc.yml.in".to_string(),
            root_page: "index".to_string(),
            misc_caption: "Miscellaneous".to_string(),
            max_depth: default_max_depth(),
            numbered: false,
            project: ProjectOptions::default(),
        }
    }
}

impl Default for ProjectOptions {
    fn default() -> Self {
        let mut theme_options = IndexMap::new();
        theme_options.insert("flavor".to_string(), "rocm".to_string());

        Self {
            default_name: "Project Name".to_string(),
            version: "1.0.0".to_string(),
            author: "Advanced Micro Devices, Inc.".to_string(),
            copyright: "Copyright (c) 2024 Advanced Micro Devices, Inc. All rights reserved."
                .to_string(),
            html_theme: "rocm_docs_theme".to_string(),
            extensions: vec!["rocm_docs".to_string()],
            external_toc_path: "./sphinx/_toc.yml".to_string(),
            theme_options,
        }
    }
}

fn default_max_depth() -> u32 {
    6
}

impl ConvertOptions {
    /// Dotted suffix of content files, e.g. `.md`
    pub fn content_suffix(&self) -> String {
        format!(".{}", self.content_extension)
    }
}
