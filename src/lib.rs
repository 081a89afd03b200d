// mkdocs-convert - Convert MkDocs documentation to ROCm Docs Core format
//
// This is the library crate containing the conversion logic and data structures.
// The binary crate (main.rs) provides the command line entry point.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use error::{ConvertError, Result};
pub use metrics::ConversionMetrics;
pub use models::{ConvertOptions, NavItem, SourceConfig, TocDocument, TocNode};
pub use services::Converter;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
