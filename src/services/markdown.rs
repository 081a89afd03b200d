use crate::error::{ConvertError, Result};
use crate::models::{ConvertOptions, is_external_url};
use camino::Utf8Path;
use regex::{Captures, Regex};
use std::fs;

/// Substitutions made while rewriting one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub admonitions: usize,
    pub links: usize,
}

/// Rewrites MkDocs Markdown into MyST Markdown
///
/// Two passes, in order, each a single global substitution over the whole text:
///
/// 1. `admonition_pattern`: `!!! note` (optionally `!!! note "Title"`) followed
///    by lines indented with 4 spaces becomes a ```` ```{note} ```` directive.
/// 2. `link_pattern`: `[text](page.md#frag)` becomes `[text](page#frag)`.
///    Links with a URL scheme are left alone.
///
/// Neither pass looks at its own output again.
pub struct MarkdownRewriter {
    admonition_pattern: Regex,
    link_pattern: Regex,
}

impl MarkdownRewriter {
    /// Compile the patterns for the configured content extension.
    pub fn new(options: &ConvertOptions) -> Self {
        let extension = regex::escape(&options.content_extension);

        Self {
            admonition_pattern: Regex::new(
                r#"(?m)^!!![ \t]+(\w+)(?:[ \t]+"([^"\n]*)")?[ \t]*(?:\r?\n|\z)((?:(?:[ \t]*\r?\n)*    [^\n]*(?:\n|\z))*)"#,
            )
            .expect("Invalid admonition regex"),
            link_pattern: Regex::new(&format!(
                r"\[((?:[^\[\]\n]|\[[^\[\]\n]*\])*)\]\(([^)\s]*?)\.{extension}(#[^)\s]*)?\)"
            ))
            .expect("Invalid link regex"),
        }
    }

    /// Apply both passes to `content`.
    pub fn rewrite(&self, content: &str) -> (String, RewriteStats) {
        let (content, admonitions) = self.convert_admonitions(content);
        let (content, links) = self.rewrite_links(&content);
        (content, RewriteStats { admonitions, links })
    }

    /// Convert admonition blocks to MyST directives.
    pub fn convert_admonitions(&self, content: &str) -> (String, usize) {
        let mut count = 0;
        let converted = self
            .admonition_pattern
            .replace_all(content, |caps: &Captures| {
                count += 1;
                let kind = &caps[1];
                let title = caps.get(2).map(|m| m.as_str().trim());
                let body = caps.get(3).map_or("", |m| m.as_str());
                // Keep the file's line endings in the generated block
                let newline = if caps[0].contains("\r\n") { "\r\n" } else { "\n" };
                render_directive(kind, title, body, newline)
            })
            .into_owned();
        (converted, count)
    }

    /// Drop the content extension from relative link targets.
    pub fn rewrite_links(&self, content: &str) -> (String, usize) {
        let mut count = 0;
        let rewritten = self
            .link_pattern
            .replace_all(content, |caps: &Captures| {
                let target = &caps[2];
                if is_external_url(target) {
                    return caps[0].to_string();
                }
                count += 1;
                let fragment = caps.get(3).map_or("", |m| m.as_str());
                format!("[{}]({}{})", &caps[1], target, fragment)
            })
            .into_owned();
        (rewritten, count)
    }

    /// Read `source`, rewrite it and write the result to `target`, replacing
    /// whatever is there.
    pub fn rewrite_file(&self, source: &Utf8Path, target: &Utf8Path) -> Result<RewriteStats> {
        let content = fs::read_to_string(source).map_err(|e| ConvertError::io(source, e))?;
        let (converted, stats) = self.rewrite(&content);
        fs::write(target, converted).map_err(|e| ConvertError::io(target, e))?;

        tracing::debug!(
            "Rewrote {} -> {} ({} admonitions, {} links)",
            source,
            target,
            stats.admonitions,
            stats.links
        );
        Ok(stats)
    }
}

fn render_directive(kind: &str, title: Option<&str>, body: &str, newline: &str) -> String {
    let lines: Vec<&str> = body
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.strip_prefix("    ").unwrap_or(line))
        .collect();

    // The fence must outrun any backtick fence inside the body
    let inner_fence = lines
        .iter()
        .map(|line| line.trim_start().chars().take_while(|c| *c == '`').count())
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(inner_fence.max(2) + 1);

    let mut out = String::new();
    match title {
        Some(title) if !title.is_empty() => {
            out.push_str(&format!(
                "{fence}{{admonition}} {title}{newline}:class: {kind}{newline}"
            ));
        }
        _ => out.push_str(&format!("{fence}{{{kind}}}{newline}")),
    }
    for line in lines {
        out.push_str(line);
        out.push_str(newline);
    }
    out.push_str(&fence);
    out.push_str(newline);
    out
}
