use serde::Deserialize;
use serde_yaml_ng::Value;

/// The parts of mkdocs.yml the converter reads.
///
/// Unknown keys (plugins, markdown_extensions, ...) are ignored, including any
/// custom YAML tags they carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub site_name: Option<String>,

    /// Raw navigation, kept as YAML so odd shapes degrade instead of failing the load
    #[serde(default)]
    pub nav: Option<Value>,

    #[serde(default)]
    pub theme: Option<Value>,

    #[serde(default)]
    pub site_dir: Option<String>,
}

impl SourceConfig {
    /// Site name, or `default` when mkdocs.yml has none (or an empty one).
    pub fn project_name<'a>(&'a self, default: &'a str) -> &'a str {
        match self.site_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => default,
        }
    }

    /// Whether a theme is configured at all. Empty values count as absent.
    pub fn has_theme(&self) -> bool {
        match &self.theme {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Mapping(m)) => !m.is_empty(),
            Some(Value::Sequence(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Name of the build output directory, taken from the last segment of
    /// `site_dir` when set.
    pub fn output_dir_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.site_dir
            .as_deref()
            .and_then(|dir| dir.trim_end_matches(['/', '\\']).rsplit(['/', '\\']).next())
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
            .unwrap_or(default)
    }

    /// Parse `nav` into typed navigation items.
    ///
    /// `page_suffix` decides whether a bare string is a page (`guide.md`) or a
    /// caption (`Guide`).
    pub fn navigation(&self, page_suffix: &str) -> Vec<NavItem> {
        match &self.nav {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => NavItem::parse_sequence(items, page_suffix),
            Some(other) => {
                tracing::warn!("Ignoring nav: expected a list, found {}", value_kind(other));
                Vec::new()
            }
        }
    }
}

/// One entry of the MkDocs navigation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    /// A content page, optionally titled (`- Setup: setup.md`)
    Page { title: Option<String>, path: String },

    /// A titled group of further entries
    Section { title: String, children: Vec<NavItem> },

    /// A title with no page behind it
    Caption(String),

    /// An external link (`- GitHub: https://github.com/...`)
    Link { title: String, url: String },
}

impl NavItem {
    /// Parse a YAML navigation sequence, in document order.
    pub fn parse_sequence(items: &[Value], page_suffix: &str) -> Vec<NavItem> {
        let mut result = Vec::with_capacity(items.len());

        for item in items {
            match item {
                Value::String(s) => result.push(Self::from_bare_string(s, page_suffix)),
                Value::Mapping(mapping) => {
                    for (key, value) in mapping {
                        let Some(title) = scalar_to_string(key) else {
                            tracing::warn!("Skipping nav entry with non-scalar title");
                            continue;
                        };
                        result.push(Self::from_titled(title, value, page_suffix));
                    }
                }
                Value::Tagged(tagged) => {
                    result.extend(Self::parse_sequence(
                        std::slice::from_ref(&tagged.value),
                        page_suffix,
                    ));
                }
                other => {
                    tracing::warn!("Skipping unsupported nav entry: {}", value_kind(other));
                }
            }
        }

        result
    }

    fn from_bare_string(s: &str, page_suffix: &str) -> NavItem {
        if is_external_url(s) {
            NavItem::Link {
                title: s.to_string(),
                url: s.to_string(),
            }
        } else if s.ends_with(page_suffix) {
            NavItem::Page {
                title: None,
                path: s.to_string(),
            }
        } else {
            NavItem::Caption(s.to_string())
        }
    }

    fn from_titled(title: String, value: &Value, page_suffix: &str) -> NavItem {
        match value {
            Value::Sequence(children) => NavItem::Section {
                title,
                children: Self::parse_sequence(children, page_suffix),
            },
            Value::String(target) if is_external_url(target) => NavItem::Link {
                title,
                url: target.clone(),
            },
            Value::String(path) => NavItem::Page {
                title: Some(title),
                path: path.clone(),
            },
            Value::Tagged(tagged) => Self::from_titled(title, &tagged.value, page_suffix),
            other => {
                tracing::warn!(
                    "Nav entry '{}' has {} instead of a page or list, keeping it as a caption",
                    title,
                    value_kind(other)
                );
                NavItem::Caption(title)
            }
        }
    }

    /// Number of content pages in this subtree
    pub fn page_count(&self) -> usize {
        match self {
            NavItem::Page { .. } => 1,
            NavItem::Section { children, .. } => children.iter().map(NavItem::page_count).sum(),
            NavItem::Caption(_) | NavItem::Link { .. } => 0,
        }
    }

    /// Section nesting below this item (0 for anything that is not a section)
    pub fn depth(&self) -> usize {
        match self {
            NavItem::Section { children, .. } => {
                1 + children.iter().map(NavItem::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

/// Whether a link target points off-site (has a URL scheme).
pub fn is_external_url(target: &str) -> bool {
    if target.contains("://") {
        return true;
    }
    ["mailto:", "tel:", "data:"]
        .iter()
        .any(|scheme| target.starts_with(scheme))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
