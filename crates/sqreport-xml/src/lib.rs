//! Minimal streaming XML writing primitives.
//!
//! Both XML renderers write through these helpers so escaping, indentation
//! and the declaration line are identical across formats.

#![forbid(unsafe_code)]

use std::io::{self, Write};

/// UTF-8 XML declaration emitted as the first line of every document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Whether `c` may appear in an XML 1.0 document.
#[must_use]
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape a value for use in attribute values or text content.
///
/// Markup characters become entities, whitespace control characters become
/// character references, and characters illegal in XML 1.0 are dropped.
#[must_use]
pub fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' => out.push_str("&#9;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// Write the XML declaration line.
pub fn write_declaration<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{XML_DECLARATION}")
}

/// Write `<name a="..">` on its own line.
pub fn open<W: Write>(w: &mut W, depth: usize, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
    write_tag(w, depth, name, attrs, ">")
}

/// Write `<name a=".."/>` on its own line.
pub fn empty<W: Write>(w: &mut W, depth: usize, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
    write_tag(w, depth, name, attrs, "/>")
}

/// Write `</name>` on its own line.
pub fn close<W: Write>(w: &mut W, depth: usize, name: &str) -> io::Result<()> {
    writeln!(w, "{:indent$}</{name}>", "", indent = depth * 2)
}

/// Write `<name>text</name>` on its own line.
pub fn text<W: Write>(w: &mut W, depth: usize, name: &str, text: &str) -> io::Result<()> {
    writeln!(
        w,
        "{:indent$}<{name}>{}</{name}>",
        "",
        escape_xml(text),
        indent = depth * 2
    )
}

fn write_tag<W: Write>(
    w: &mut W,
    depth: usize,
    name: &str,
    attrs: &[(&str, &str)],
    end: &str,
) -> io::Result<()> {
    write!(w, "{:indent$}<{name}", "", indent = depth * 2)?;
    for (key, value) in attrs {
        write!(w, " {key}=\"{}\"", escape_xml(value))?;
    }
    writeln!(w, "{end}")
}
