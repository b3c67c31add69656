//! XML serialization

use crate::xml::model::{Content, Document, Element};

/// Declaration written at the top of every output document
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

const INDENT: &str = "  ";

/// Serialize a document, prefixed with [`DECLARATION`].
///
/// Elements holding only elements are laid out one child per line; an
/// element with any text is written inline so the text is not altered.
pub fn to_string(doc: &Document) -> String {
    let mut output = String::with_capacity(DECLARATION.len() + 256);
    output.push_str(DECLARATION);
    output.push('\n');
    write_element(&doc.root, 0, &mut output);
    output.push('\n');
    output
}

fn write_element(element: &Element, depth: usize, output: &mut String) {
    write_start(element, output);

    if element.children.is_empty() {
        output.push_str("/>");
        return;
    }
    output.push('>');

    let inline = element
        .children
        .iter()
        .any(|child| matches!(child, Content::Text(_)));

    if inline {
        for child in &element.children {
            match child {
                Content::Element(child) => write_inline(child, output),
                Content::Text(text) => output.push_str(&escape_text(text)),
            }
        }
    } else {
        for child in element.elements() {
            output.push('\n');
            push_indent(depth + 1, output);
            write_element(child, depth + 1, output);
        }
        output.push('\n');
        push_indent(depth, output);
    }

    write_end(element, output);
}

fn write_inline(element: &Element, output: &mut String) {
    write_start(element, output);
    if element.children.is_empty() {
        output.push_str("/>");
        return;
    }
    output.push('>');
    for child in &element.children {
        match child {
            Content::Element(child) => write_inline(child, output),
            Content::Text(text) => output.push_str(&escape_text(text)),
        }
    }
    write_end(element, output);
}

fn write_start(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);
    for (key, value) in &element.attributes {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

fn write_end(element: &Element, output: &mut String) {
    output.push_str("</");
    output.push_str(&element.name);
    output.push('>');
}

fn push_indent(depth: usize, output: &mut String) {
    for _ in 0..depth {
        output.push_str(INDENT);
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(input: &str) -> String {
    escape_text(input)
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
        .replace('\t', "&#9;")
}
