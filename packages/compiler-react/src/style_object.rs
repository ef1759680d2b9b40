//! JSX inline style objects.
//!
//! A [`StyleObject`] is the ordered list of entries inside `style={{ ... }}`.
//! Entries parsed from a template keep their position when overridden; new
//! keys are appended, so output order only depends on the template and the
//! fixed override order.

use std::fmt::Write;

/// Value of a style entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    /// String literal, rendered single-quoted
    Literal(String),
    /// Any other JS expression (`8`, `theme.space`), rendered verbatim
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleEntry {
    Property { key: String, value: StyleValue },
    /// `...expr`
    Spread(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleObject {
    entries: Vec<StyleEntry>,
}

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from literal `(key, value)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut object = Self::new();
        for (key, value) in pairs {
            object.set(key, value);
        }
        object
    }

    /// Parse the body of a JSX style expression, i.e. the text between the
    /// outer braces of `style={...}`.
    ///
    /// `{ color: 'red' }` yields its properties. Anything that is not an
    /// object literal (`styles.card`) becomes a single spread entry so that
    /// overrides can still be layered on top of it.
    pub fn parse_expression(expression: &str) -> Self {
        let expression = expression.trim();
        let Some(body) = expression
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        else {
            let mut object = Self::new();
            if !expression.is_empty() {
                object.entries.push(StyleEntry::Spread(expression.to_string()));
            }
            return object;
        };

        let entries = split_top_level(body, ',')
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_entry)
            .collect();

        Self { entries }
    }

    /// Parse a CSS declaration string such as `background-color: red; padding: 4px`
    pub fn parse_css(css: &str) -> Self {
        let mut object = Self::new();
        for declaration in split_top_level(css, ';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() {
                continue;
            }
            object.set(&camel_case(property), value);
        }
        object
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find_map(|entry| match entry {
            StyleEntry::Property { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Set a literal value, replacing an existing entry in place
    pub fn set(&mut self, key: &str, value: &str) {
        let value = StyleValue::Literal(value.to_string());
        for entry in &mut self.entries {
            if let StyleEntry::Property { key: k, value: v } = entry {
                if k == key {
                    *v = value;
                    return;
                }
            }
        }
        self.entries.push(StyleEntry::Property {
            key: key.to_string(),
            value,
        });
    }

    /// Render as a JSX attribute: `style={{key:'value', ...}}`
    pub fn to_attribute(&self) -> String {
        let mut out = String::from("style={{");
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            match entry {
                StyleEntry::Property { key, value } => {
                    write_key(&mut out, key);
                    out.push(':');
                    match value {
                        StyleValue::Literal(v) => write_literal(&mut out, v),
                        StyleValue::Raw(v) => out.push_str(v),
                    }
                }
                StyleEntry::Spread(expr) => {
                    let _ = write!(out, "...{}", expr);
                }
            }
        }
        out.push_str("}}");
        out
    }
}

fn parse_entry(part: &str) -> StyleEntry {
    if let Some(spread) = part.strip_prefix("...") {
        return StyleEntry::Spread(spread.trim().to_string());
    }

    let Some(colon) = find_top_level(part, ':') else {
        // Shorthand property: `{ color }`
        return StyleEntry::Property {
            key: part.to_string(),
            value: StyleValue::Raw(part.to_string()),
        };
    };

    let key = unquote(part[..colon].trim()).unwrap_or_else(|| part[..colon].trim());
    let raw = part[colon + 1..].trim();
    let value = match unquote(raw) {
        Some(literal) => StyleValue::Literal(literal.to_string()),
        None => StyleValue::Raw(raw.to_string()),
    };

    StyleEntry::Property {
        key: key.to_string(),
        value,
    }
}

/// Strip matching `'…'` or `"…"` quotes
fn unquote(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'\'' || first == b'"') && bytes[bytes.len() - 1] == first {
            let inner = &text[1..text.len() - 1];
            if !inner.contains(first as char) {
                return Some(inner);
            }
        }
    }
    None
}

/// Split on `separator` wherever it is outside quotes and brackets
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(index) = find_top_level(rest, separator) {
        parts.push(&rest[..index]);
        rest = &rest[index + separator.len_utf8()..];
    }
    parts.push(rest);
    parts
}

fn find_top_level(text: &str, target: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ if c == target && depth == 0 => return Some(index),
            _ => {}
        }
    }
    None
}

/// `background-color` → `backgroundColor`, `-webkit-mask` → `WebkitMask`.
/// Custom properties (`--brand`) are kept verbatim.
fn camel_case(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for (i, c) in property.chars().enumerate() {
        if c == '-' {
            upper = i == 0 || !out.is_empty();
            continue;
        }
        if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        write_literal(out, key);
    }
}

fn write_literal(out: &mut String, value: &str) {
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
}
