use serde::{Deserialize, Serialize};

/// Top-level rich-text block as emitted by the CMS blocks editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub children: Vec<RichTextNode>,
}

/// Inline node (text leaf, link, list item).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RichTextNode>,
}

impl RichTextNode {
    fn plain_text(&self) -> String {
        match &self.text {
            Some(text) => text.trim().to_string(),
            None => join_words(self.children.iter().map(RichTextNode::plain_text)),
        }
    }
}

fn join_words(parts: impl Iterator<Item = String>) -> String {
    parts
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten blocks into display lines: one per paragraph/heading, one per list
/// item. Blank lines are dropped.
pub fn lines(blocks: &[RichTextBlock]) -> Vec<String> {
    let mut out = Vec::new();
    for block in blocks {
        if block.kind == "list" {
            out.extend(block.children.iter().map(RichTextNode::plain_text));
        } else {
            out.push(join_words(block.children.iter().map(RichTextNode::plain_text)));
        }
    }
    out.retain(|line| !line.is_empty());
    out
}

/// Lines with a leading bullet marker removed.
pub fn ingredient_lines(blocks: &[RichTextBlock]) -> Vec<String> {
    lines(blocks)
        .into_iter()
        .map(|line| {
            line.trim_start_matches(['-', '•', '*'])
                .trim_start()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Lines with a leading `N.` step number removed.
pub fn instruction_lines(blocks: &[RichTextBlock]) -> Vec<String> {
    lines(blocks)
        .into_iter()
        .map(|line| strip_step_number(&line).to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn strip_step_number(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < line.len() {
        if let Some(after_dot) = rest.strip_prefix('.') {
            return after_dot.trim_start();
        }
    }
    line
}
