use crate::error::{ConvertError, Result};
use crate::models::{ConvertOptions, SourceConfig};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Name of the MkDocs configuration file looked up in the source root
pub const MKDOCS_CONFIG_FILE: &str = "mkdocs.yml";

/// Alternate spelling MkDocs also accepts
pub const MKDOCS_CONFIG_FILE_ALT: &str = "mkdocs.yaml";

/// Name of the optional conversion options file, next to mkdocs.yml
pub const OPTIONS_FILE: &str = "mkdocs-convert.yaml";

/// Loader for the two YAML files a run reads from the source directory.
///
/// - `mkdocs.yml`: required, anything else about the run depends on it
/// - `mkdocs-convert.yaml`: optional overrides for [`ConvertOptions`]
#[derive(Debug, Clone)]
pub struct ConfigManager {
    source_dir: Utf8PathBuf,
    mkdocs_config_path: Utf8PathBuf,
    options_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a manager for the given source directory. Nothing is read yet.
    pub fn new<P: AsRef<Utf8Path>>(source_dir: P) -> Self {
        let source_dir = source_dir.as_ref().to_path_buf();

        Self {
            mkdocs_config_path: source_dir.join(MKDOCS_CONFIG_FILE),
            options_path: source_dir.join(OPTIONS_FILE),
            source_dir,
        }
    }

    /// Load mkdocs.yml, falling back to mkdocs.yaml.
    ///
    /// # Errors
    /// [`ConvertError::ConfigNotFound`] if the file does not exist,
    /// [`ConvertError::ConfigParse`] if it is not valid YAML of the expected shape.
    pub fn load_source_config(&self) -> Result<SourceConfig> {
        let alt_path = self.source_dir.join(MKDOCS_CONFIG_FILE_ALT);

        let config_path = if self.mkdocs_config_path.is_file() {
            &self.mkdocs_config_path
        } else if alt_path.is_file() {
            tracing::info!("Using {}", alt_path);
            &alt_path
        } else {
            return Err(ConvertError::ConfigNotFound {
                path: self.mkdocs_config_path.clone(),
            });
        };

        let file_contents =
            fs::read_to_string(config_path).map_err(|e| ConvertError::io(config_path, e))?;

        // An empty file is a valid (empty) configuration
        if file_contents.trim().is_empty() {
            tracing::warn!("{} is empty, using defaults", config_path);
            return Ok(SourceConfig::default());
        }

        let config: SourceConfig =
            serde_yaml_ng::from_str(&file_contents).map_err(|source| ConvertError::ConfigParse {
                path: config_path.clone(),
                source,
            })?;

        tracing::info!("Loaded MkDocs config from {}", config_path);
        Ok(config)
    }

    /// Load mkdocs-convert.yaml.
    ///
    /// # Returns
    /// The loaded options, or defaults if the file doesn't exist
    pub fn load_options(&self) -> Result<ConvertOptions> {
        if !self.options_path.exists() {
            tracing::debug!(
                "Options file not found at {}, using defaults",
                self.options_path
            );
            return Ok(ConvertOptions::default());
        }

        let file_contents = fs::read_to_string(&self.options_path)
            .map_err(|e| ConvertError::io(&self.options_path, e))?;

        if file_contents.trim().is_empty() {
            return Ok(ConvertOptions::default());
        }

        let options: ConvertOptions =
            serde_yaml_ng::from_str(&file_contents).map_err(|source| ConvertError::ConfigParse {
                path: self.options_path.clone(),
                source,
            })?;

        tracing::info!("Loaded conversion options from {}", self.options_path);
        Ok(options)
    }

    pub fn source_dir(&self) -> &Utf8Path {
        &self.source_dir
    }

    pub fn mkdocs_config_path(&self) -> &Utf8Path {
        &self.mkdocs_config_path
    }
}
