use serde::Serialize;

/// One node of the ROCm Docs Core table of contents
///
/// Serialized untagged, so each variant becomes the mapping that
/// sphinx-external-toc expects (`{file}`, `{caption, entries}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TocNode {
    File {
        file: String,
    },
    Section {
        caption: String,
        entries: Vec<TocNode>,
    },
    Caption {
        caption: String,
    },
    Url {
        url: String,
        title: String,
    },
}

impl TocNode {
    /// Number of `file` nodes in this subtree
    pub fn file_count(&self) -> usize {
        match self {
            TocNode::File { .. } => 1,
            TocNode::Section { entries, .. } => entries.iter().map(TocNode::file_count).sum(),
            TocNode::Caption { .. } | TocNode::Url { .. } => 0,
        }
    }

    /// Section nesting below this node
    pub fn depth(&self) -> usize {
        match self {
            TocNode::Section { entries, .. } => {
                1 + entries.iter().map(TocNode::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Total number of nodes in this subtree, itself included
    pub fn node_count(&self) -> usize {
        match self {
            TocNode::Section { entries, .. } => {
                1 + entries.iter().map(TocNode::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }
}

/// The `_toc.yml.in` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocDocument {
    pub root: String,
    pub defaults: TocDefaults,
    pub subtrees: Vec<Subtree>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocDefaults {
    pub numbered: bool,
    pub maxdepth: u32,
}

/// A top-level group of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtree {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub entries: Vec<TocNode>,
}

impl TocDocument {
    /// Every node below the root, counted through all subtrees
    pub fn entry_count(&self) -> usize {
        self.subtrees
            .iter()
            .flat_map(|subtree| subtree.entries.iter())
            .map(TocNode::node_count)
            .sum()
    }
}
