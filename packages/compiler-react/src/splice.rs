//! Style injection into opaque fragment templates.
//!
//! Templates are raw JSX text owned by the catalog. Only the first opening
//! tag is ever inspected:
//!
//! - the opening tag starts at the first `<` followed by a tag-name letter;
//!   `{/* … */}` and `<!-- … -->` comments are skipped whole, as are closing
//!   tags and fragments `<>`
//! - it ends at the first `>` that is outside a quoted string and outside a
//!   `{…}` expression, so `title="a > b"` or `onClick={() => x > 1}` do not
//!   end it early; the tag may span several lines
//! - `style` is matched as a whole attribute name, never as a substring of
//!   another attribute or value
//!
//! When a `style` attribute exists it is replaced by the merged object;
//! otherwise a new attribute is inserted right before the closing `>` (or
//! before `/>` on a self-closing tag).

use crate::style_object::StyleObject;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    /// `name="…"`, `name='…'` or an unquoted word; holds the text inside quotes
    Text(&'a str),
    /// `name={…}`; holds the text inside the outer braces
    Expression(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// Byte range of the whole attribute, name through value
    pub span: Range<usize>,
    pub value: Option<AttributeValue<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningTag<'a> {
    pub name: &'a str,
    /// Byte offset of `<`
    pub start: usize,
    /// Byte offset of the terminating `>`
    pub end: usize,
    pub self_closing: bool,
    pub attributes: Vec<Attribute<'a>>,
}

impl<'a> OpeningTag<'a> {
    pub fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes.iter().find(|attr| attr.name == name)
    }
}

/// Locate and scan the first opening tag of `source`
pub fn find_opening_tag(source: &str) -> Option<OpeningTag<'_>> {
    let bytes = source.as_bytes();
    let start = find_tag_start(bytes)?;

    let name_start = start + 1;
    let mut pos = name_start;
    while pos < bytes.len() && is_name_byte(bytes[pos]) {
        pos += 1;
    }
    let name = &source[name_start..pos];

    let mut attributes = Vec::new();
    loop {
        pos = skip_whitespace(bytes, pos);
        match bytes.get(pos)? {
            b'>' => {
                return Some(OpeningTag { name, start, end: pos, self_closing: false, attributes });
            }
            b'/' if bytes.get(pos + 1) == Some(&b'>') => {
                return Some(OpeningTag {
                    name,
                    start,
                    end: pos + 1,
                    self_closing: true,
                    attributes,
                });
            }
            b'/' => pos += 1,
            // Spread props: {...rest}
            b'{' => pos = skip_balanced(bytes, pos)?,
            _ => {
                let (attribute, next) = scan_attribute(source, pos)?;
                attributes.push(attribute);
                pos = next;
            }
        }
    }
}

/// Offset of the first `<` that opens an element. `<!-- … -->` and
/// `/* … */` spans (including the `{/* … */}` form) are skipped whole; an
/// unterminated comment hides everything after it.
fn find_tag_start(bytes: &[u8]) -> Option<usize> {
    let mut pos = 0;
    while pos < bytes.len() {
        let rest = &bytes[pos..];
        if rest.starts_with(b"<!--") {
            pos += 4 + find_bytes(&rest[4..], b"-->")? + 3;
        } else if rest.starts_with(b"/*") {
            pos += 2 + find_bytes(&rest[2..], b"*/")? + 2;
        } else if rest[0] == b'<' && rest.get(1).is_some_and(|c| c.is_ascii_alphabetic()) {
            return Some(pos);
        } else {
            pos += 1;
        }
    }
    None
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

fn scan_attribute(source: &str, start: usize) -> Option<(Attribute<'_>, usize)> {
    let bytes = source.as_bytes();
    let mut pos = start;
    while pos < bytes.len() && !matches!(bytes[pos], b'=' | b'>' | b'/' | b'{') && !bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    if pos == start {
        // A stray quote or other byte that cannot start a name
        pos += 1;
    }
    let name = &source[start..pos];

    let after_name = skip_whitespace(bytes, pos);
    if bytes.get(after_name) != Some(&b'=') {
        let attribute = Attribute { name, span: start..pos, value: None };
        return Some((attribute, pos));
    }

    let value_start = skip_whitespace(bytes, after_name + 1);
    let (value, end) = match *bytes.get(value_start)? {
        quote @ (b'"' | b'\'') => {
            let close = value_start + 1 + source[value_start + 1..].find(quote as char)?;
            (AttributeValue::Text(&source[value_start + 1..close]), close + 1)
        }
        b'{' => {
            let end = skip_balanced(bytes, value_start)?;
            (AttributeValue::Expression(&source[value_start + 1..end - 1]), end)
        }
        _ => {
            let mut end = value_start;
            while end < bytes.len() && !bytes[end].is_ascii_whitespace() && bytes[end] != b'>' {
                end += 1;
            }
            (AttributeValue::Text(&source[value_start..end]), end)
        }
    };

    let attribute = Attribute { name, span: start..end, value: Some(value) };
    Some((attribute, end))
}

/// Given the offset of a `{`, return the offset just past its matching `}`.
/// Quoted strings inside the expression are skipped whole.
fn skip_balanced(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;
    let mut pos = open;

    while pos < bytes.len() {
        let c = bytes[pos];
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
        } else {
            match c {
                b'"' | b'\'' | b'`' => quote = Some(c),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(pos + 1);
                    }
                }
                _ => {}
            }
        }
        pos += 1;
    }
    None
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn is_name_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'_' | b'.' | b':')
}

/// Merge `overrides` into the first opening tag's inline style.
///
/// Keys not named in `overrides` keep their template value. Returns the
/// template unchanged when there is nothing to override or no opening tag.
pub fn inject_style(template: &str, overrides: &[(&str, &str)]) -> String {
    if overrides.is_empty() {
        return template.to_string();
    }
    let Some(tag) = find_opening_tag(template) else {
        return template.to_string();
    };

    match tag.attribute("style") {
        Some(existing) => {
            let mut style = match &existing.value {
                Some(AttributeValue::Expression(expr)) => StyleObject::parse_expression(expr),
                Some(AttributeValue::Text(css)) => StyleObject::parse_css(css),
                None => StyleObject::new(),
            };
            for (key, value) in overrides {
                style.set(key, value);
            }

            let span = existing.span.clone();
            let mut out = String::with_capacity(template.len() + 32);
            out.push_str(&template[..span.start]);
            out.push_str(&style.to_attribute());
            out.push_str(&template[span.end..]);
            out
        }
        None => {
            let style = StyleObject::from_pairs(overrides.iter().copied());
            // Offset of `>` or of the `/` in `/>`
            let close = if tag.self_closing { tag.end - 1 } else { tag.end };
            let insert_at = template[..close].trim_end().len();

            let mut out = String::with_capacity(template.len() + 32);
            out.push_str(&template[..insert_at]);
            out.push(' ');
            out.push_str(&style.to_attribute());
            if tag.self_closing {
                out.push(' ');
            }
            out.push_str(&template[close..]);
            out
        }
    }
}
