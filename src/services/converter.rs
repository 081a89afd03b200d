use crate::config::ConfigManager;
use crate::error::{ConvertError, Result};
use crate::metrics::ConversionMetrics;
use crate::models::{ConvertOptions, SourceConfig};
use crate::services::markdown::MarkdownRewriter;
use crate::services::navigation::{build_toc_document, convert_navigation};
use crate::services::sphinx::{emit_config, emit_toc};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use walkdir::WalkDir;

/// Directories of the generated ROCm Docs Core tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLayout {
    pub root: Utf8PathBuf,
    /// Content root, receives conf.py and the mirrored Markdown files
    pub docs_dir: Utf8PathBuf,
    /// Receives the TOC descriptor
    pub sphinx_dir: Utf8PathBuf,
}

impl TargetLayout {
    pub fn new(target_dir: &Utf8Path, options: &ConvertOptions) -> Self {
        let docs_dir = target_dir.join(&options.docs_dir);
        Self {
            root: target_dir.to_path_buf(),
            sphinx_dir: docs_dir.join(&options.sphinx_dir),
            docs_dir,
        }
    }
}

/// Converts an MkDocs project into a ROCm Docs Core project.
///
/// A run is a fixed pipeline, each step finishing before the next:
///
/// 1. Load `mkdocs.yml` (the only step allowed to fail before anything is written)
/// 2. Create the target directories
/// 3. Write `conf.py`
/// 4. Convert `nav` and write the TOC descriptor
/// 5. Rewrite every content file into the target tree
///
/// The loaded configuration is passed from step to step; the converter itself
/// holds only paths and options.
#[derive(Debug, Clone)]
pub struct Converter {
    source_dir: Utf8PathBuf,
    target_dir: Utf8PathBuf,
    options: Option<ConvertOptions>,
}

impl Converter {
    /// Create a converter. Options are read from `mkdocs-convert.yaml` in the
    /// source directory unless set with [`Converter::with_options`].
    pub fn new<S: AsRef<Utf8Path>, T: AsRef<Utf8Path>>(source_dir: S, target_dir: T) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            target_dir: target_dir.as_ref().to_path_buf(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Run the full conversion.
    pub fn convert(&self) -> Result<ConversionMetrics> {
        let mut metrics = ConversionMetrics::new();
        tracing::info!("Converting {} to {}", self.source_dir, self.target_dir);

        let manager = ConfigManager::new(&self.source_dir);
        let config = manager.load_source_config()?;
        let options = match &self.options {
            Some(options) => options.clone(),
            None => manager.load_options()?,
        };

        let layout = create_layout(&self.target_dir, &options)?;

        emit_config(&config, &options, &layout.docs_dir)?;

        let toc = convert_navigation(&config.navigation(&options.content_suffix()), &options);
        let document = build_toc_document(toc, &options);
        metrics.toc_entries = document.entry_count();
        emit_toc(&document, &options, &layout.sphinx_dir)?;

        convert_content_files(&self.source_dir, &layout, &config, &options, &mut metrics)?;

        metrics.log_summary();
        Ok(metrics)
    }
}

/// Create the target directory tree. Existing directories are fine.
pub fn create_layout(target_dir: &Utf8Path, options: &ConvertOptions) -> Result<TargetLayout> {
    let layout = TargetLayout::new(target_dir, options);

    for dir in [&layout.docs_dir, &layout.sphinx_dir] {
        fs::create_dir_all(dir).map_err(|e| ConvertError::io(dir, e))?;
    }

    tracing::info!("Created target layout under {}", layout.root);
    Ok(layout)
}

/// Rewrite every content file under `source_dir` into `layout.docs_dir`.
///
/// Files with a path component equal to the build output directory are
/// skipped and counted. If the target directory is inside `source_dir` the
/// walk does not descend into it. The first I/O error aborts the walk.
pub fn convert_content_files(
    source_dir: &Utf8Path,
    layout: &TargetLayout,
    config: &SourceConfig,
    options: &ConvertOptions,
    metrics: &mut ConversionMetrics,
) -> Result<()> {
    let rewriter = MarkdownRewriter::new(options);
    let output_dir_name = config.output_dir_name(&options.output_dir_name);
    let target_root = layout.root.as_std_path();

    let walker = WalkDir::new(source_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || entry.path() != target_root);

    for entry in walker {
        let entry = entry?;
        let path = Utf8Path::from_path(entry.path())
            .ok_or_else(|| ConvertError::NonUtf8Path(entry.path().to_path_buf()))?;

        if path.extension() != Some(options.content_extension.as_str()) || !path.is_file() {
            continue;
        }

        let Ok(relative) = path.strip_prefix(source_dir) else {
            continue;
        };

        if relative
            .components()
            .any(|component| component.as_str() == output_dir_name)
        {
            tracing::debug!("Skipping build output file {}", relative);
            metrics.record_page_skipped();
            continue;
        }

        let target_path = layout.docs_dir.join(relative);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
        }

        let stats = rewriter.rewrite_file(path, &target_path)?;
        metrics.record_page_converted(stats);
    }

    tracing::info!(
        "Converted {} content files ({} skipped under '{}')",
        metrics.pages_converted,
        metrics.pages_skipped,
        output_dir_name
    );
    Ok(())
}
