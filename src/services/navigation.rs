//! MkDocs navigation to ROCm Docs Core table of contents.
//!
//! Conversion is structure preserving: every page becomes one `file` node and
//! every titled section becomes one captioned node whose entries are its
//! converted children, in the original order.

use crate::models::{ConvertOptions, NavItem, Subtree, TocDefaults, TocDocument, TocNode};

/// Convert a navigation sequence into TOC nodes.
pub fn convert_navigation(nav: &[NavItem], options: &ConvertOptions) -> Vec<TocNode> {
    nav.iter().map(|item| convert_item(item, options)).collect()
}

fn convert_item(item: &NavItem, options: &ConvertOptions) -> TocNode {
    match item {
        NavItem::Page { path, .. } => TocNode::File {
            file: clean_path(path, options),
        },
        NavItem::Section { title, children } => TocNode::Section {
            caption: title.clone(),
            entries: convert_navigation(children, options),
        },
        NavItem::Caption(title) => TocNode::Caption {
            caption: title.clone(),
        },
        NavItem::Link { title, url } => TocNode::Url {
            url: url.clone(),
            title: title.clone(),
        },
    }
}

/// Turn a page path into a TOC file reference.
///
/// Strips the content extension, then a trailing `index` segment. An empty
/// result becomes the root page.
///
/// ```
/// use mkdocs_convert::ConvertOptions;
/// use mkdocs_convert::services::clean_path;
///
/// let options = ConvertOptions::default();
/// assert_eq!(clean_path("guide/index.md", &options), "guide");
/// assert_eq!(clean_path("index.md", &options), "index");
/// assert_eq!(clean_path("", &options), "index");
/// ```
pub fn clean_path(path: &str, options: &ConvertOptions) -> String {
    let suffix = options.content_suffix();
    let path = path.trim();
    let path = path.strip_prefix("./").unwrap_or(path);
    let path = path.strip_suffix(suffix.as_str()).unwrap_or(path);

    let path = match path.rsplit_once('/') {
        Some((parent, "index")) => parent,
        None if path == "index" => "",
        _ => path,
    };
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        options.root_page.clone()
    } else {
        path.to_string()
    }
}

/// Arrange converted nodes under the TOC root.
///
/// Each non-empty section becomes its own subtree. Consecutive loose pages
/// and links are gathered into one subtree under the misc caption. Bare
/// captions and empty sections are dropped with a warning, as are loose pages
/// pointing at the root page.
pub fn build_toc_document(nodes: Vec<TocNode>, options: &ConvertOptions) -> TocDocument {
    let mut subtrees: Vec<Subtree> = Vec::new();
    let mut loose: Vec<TocNode> = Vec::new();

    for node in nodes {
        match node {
            TocNode::File { ref file } if *file == options.root_page => {
                tracing::debug!("Root page '{}' already is the TOC root", file);
            }
            TocNode::File { .. } | TocNode::Url { .. } => loose.push(node),
            TocNode::Section { caption, entries } if entries.is_empty() => {
                tracing::warn!("Section '{}' has no entries, leaving it out of the TOC", caption);
            }
            TocNode::Section { caption, entries } => {
                flush_loose(&mut subtrees, &mut loose, options);
                subtrees.push(Subtree {
                    caption: Some(caption),
                    entries,
                });
            }
            // A subtree needs at least one entry
            TocNode::Caption { caption } => {
                tracing::warn!("Caption '{}' has no pages, leaving it out of the TOC", caption);
            }
        }
    }
    flush_loose(&mut subtrees, &mut loose, options);

    TocDocument {
        root: options.root_page.clone(),
        defaults: TocDefaults {
            numbered: options.numbered,
            maxdepth: options.max_depth,
        },
        subtrees,
    }
}

fn flush_loose(subtrees: &mut Vec<Subtree>, loose: &mut Vec<TocNode>, options: &ConvertOptions) {
    if loose.is_empty() {
        return;
    }
    subtrees.push(Subtree {
        caption: Some(options.misc_caption.clone()),
        entries: std::mem::take(loose),
    });
}
