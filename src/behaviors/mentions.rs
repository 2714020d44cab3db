//! @mention highlighting in notes
//!
//! Works on text nodes rather than markup, so user text is never
//! re-parsed as HTML. Text already inside a `.mention` span is left alone,
//! which makes the pass safe to run again after content changes.

use std::sync::OnceLock;

use page_bindings::query_all;
use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, Text};

use crate::error::Result;

const MENTION_CLASS: &str = "mention";

static MENTION_RE: OnceLock<Regex> = OnceLock::new();

fn mention_re() -> &'static Regex {
    // ASCII word characters, like the browser's `\w`
    MENTION_RE.get_or_init(|| Regex::new(r"@[A-Za-z0-9_]+").expect("mention pattern is valid"))
}

/// A run of note text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// Includes the leading `@`
    Mention(&'a str),
}

/// Split `text` into plain runs and mentions, in order
pub fn split_mentions(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in mention_re().find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Text(&text[last..m.start()]));
        }
        segments.push(Segment::Mention(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }
    segments
}

pub fn has_mention(text: &str) -> bool {
    mention_re().is_match(text)
}

/// Highlight every `.note-content` present at load
pub fn bind(document: &Document) {
    let mut wrapped = 0;
    for note in query_all(document, ".note-content") {
        match highlight_mentions(document, &note) {
            Ok(n) => wrapped += n,
            Err(e) => log::debug!("[MENTION] skipped a note: {}", e),
        }
    }
    if wrapped > 0 {
        log::debug!("[MENTION] wrapped {} mentions", wrapped);
    }
}

/// Wrap mentions under `root` in `<span class="mention">`.
/// Returns how many spans were created.
pub fn highlight_mentions(document: &Document, root: &Element) -> Result<usize> {
    let mut text_nodes = Vec::new();
    collect_text_nodes(root, &mut text_nodes);

    let mut wrapped = 0;
    for text_node in text_nodes {
        let content = text_node.data();
        if !has_mention(&content) {
            continue;
        }
        let Some(parent) = text_node.parent_node() else {
            continue;
        };

        let fragment = document.create_document_fragment();
        for segment in split_mentions(&content) {
            match segment {
                Segment::Text(s) => {
                    fragment.append_child(&document.create_text_node(s))?;
                }
                Segment::Mention(s) => {
                    let span = document.create_element("span")?;
                    span.set_class_name(MENTION_CLASS);
                    span.set_text_content(Some(s));
                    fragment.append_child(&span)?;
                    wrapped += 1;
                }
            }
        }
        parent.replace_child(&fragment, &text_node)?;
    }
    Ok(wrapped)
}

fn collect_text_nodes(node: &Node, out: &mut Vec<Text>) {
    let children = node.child_nodes();
    for i in 0..children.length() {
        let Some(child) = children.get(i) else {
            continue;
        };
        match child.node_type() {
            Node::TEXT_NODE => {
                if let Ok(text) = child.dyn_into::<Text>() {
                    out.push(text);
                }
            }
            Node::ELEMENT_NODE => {
                let already_wrapped = child
                    .dyn_ref::<Element>()
                    .map(|el| el.class_list().contains(MENTION_CLASS))
                    .unwrap_or(false);
                if !already_wrapped {
                    collect_text_nodes(&child, out);
                }
            }
            _ => {}
        }
    }
}
