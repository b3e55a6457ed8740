//! Line-oriented markdown-to-HTML rendering of summaries.
//!
//! This is a deliberately small approximation of markdown: each line is
//! classified on its own, first match wins, and only the "previous line was a
//! level-2 heading" flag is carried between lines.

use regex::Regex;
use std::sync::LazyLock;

static LABEL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?):$").expect("valid label regex"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"));

/// One rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading1(String),
    Divider,
    Heading2(String),
    Heading3(String),
    ListItem(String),
    Paragraph(String),
}

impl Block {
    /// HTML markup for this block.
    pub fn to_html(&self) -> String {
        match self {
            Block::Heading1(text) => format!("<h1>{}</h1>", escape_html(text)),
            Block::Divider => "<hr>".to_string(),
            Block::Heading2(text) => format!("<h2>{}</h2>", escape_html(text)),
            Block::Heading3(text) => format!("<h3>{}</h3>", escape_html(text)),
            Block::ListItem(text) => format!("<li>{}</li>", escape_html(text)),
            Block::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
        }
    }
}

/// Classify every line of `text` into blocks.
pub fn render_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut last_was_h2 = false;

    for line in text.split('\n') {
        if let Some(rest) = line.strip_prefix("## ") {
            if last_was_h2 {
                blocks.push(Block::Divider);
            }
            blocks.push(Block::Heading2(rest.to_string()));
            last_was_h2 = true;
            continue;
        }
        last_was_h2 = false;

        let block = if let Some(rest) = line.strip_prefix("# ") {
            Block::Heading1(rest.to_string())
        } else if let Some(rest) = line.strip_prefix("### ") {
            Block::Heading3(rest.to_string())
        } else if let Some(rest) = line.strip_prefix("- ") {
            Block::ListItem(rest.to_string())
        } else if LABEL_LINE.is_match(line) {
            Block::Heading3(line.to_string())
        } else if BOLD.is_match(line) {
            Block::Heading3(BOLD.replace_all(line, "$1").into_owned())
        } else {
            Block::Paragraph(line.to_string())
        };
        blocks.push(block);
    }

    blocks
}

/// Render `text` to an HTML fragment.
pub fn render_html(text: &str) -> String {
    render_blocks(text)
        .iter()
        .map(Block::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
