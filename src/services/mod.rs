//! Services module - the conversion steps.
//!
//! # Components
//!
//! - [`Converter`]: runs the whole pipeline for one source/target pair
//! - [`navigation`]: `nav` to table of contents, plus [`clean_path`]
//! - [`MarkdownRewriter`]: admonition and link rewriting of content files
//! - [`sphinx`]: writers for `conf.py` and `_toc.yml.in`
//!
//! Everything here is synchronous and operates on local files only. Errors
//! are returned, never retried.

pub mod converter;
pub mod markdown;
pub mod navigation;
pub mod sphinx;

pub use converter::{Converter, TargetLayout, convert_content_files, create_layout};
pub use markdown::{MarkdownRewriter, RewriteStats};
pub use navigation::{build_toc_document, clean_path, convert_navigation};
pub use sphinx::{emit_config, emit_toc, render_conf_py};
