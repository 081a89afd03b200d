//! Data models for the converter.
//!
//! - [`SourceConfig`] / [`NavItem`]: what is read from `mkdocs.yml`
//! - [`TocDocument`] / [`TocNode`]: what is written to `_toc.yml.in`
//! - [`ConvertOptions`]: conversion settings from `mkdocs-convert.yaml`
//!
//! All of them are plain values. Nothing here is mutated after a run starts.

pub mod config;
pub mod mkdocs;
pub mod toc;

pub use config::{ConvertOptions, ProjectOptions};
pub use mkdocs::{NavItem, SourceConfig, is_external_url};
pub use toc::{Subtree, TocDefaults, TocDocument, TocNode};
