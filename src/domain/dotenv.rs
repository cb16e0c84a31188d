//! `.env` file parsing and rendering
//!
//! Parsing follows the usual dotenv rules: `KEY=VALUE` per line, `#`
//! comments, an optional `export ` prefix and single, double or backtick
//! quoted values. Double-quoted values understand `\n`, `\r`, `\t`, `\"` and
//! `\\` and may continue over several lines.
//!
//! [`render`] writes pairs back so that `parse(&render(vars)) == vars`.

use super::project::KeyValue;

const QUOTES: [char; 3] = ['"', '\'', '`'];
const EXPORT_PREFIX: &str = "export ";

/// Parses env file content into ordered key/value pairs
///
/// A key that appears more than once keeps its first position and takes
/// the last value.
pub fn parse(content: &str) -> Vec<KeyValue> {
    let lines: Vec<&str> = content.lines().collect();
    let mut vars: Vec<KeyValue> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line
            .strip_prefix(EXPORT_PREFIX)
            .map(str::trim_start)
            .unwrap_or(line);

        let Some((key, rest)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let rest = rest.trim_start();
        let value = match rest.chars().next() {
            Some(quote) if QUOTES.contains(&quote) => {
                match read_quoted(quote, &rest[quote.len_utf8()..], &lines[i..]) {
                    Some((value, consumed)) => {
                        i += consumed;
                        value
                    }
                    None => unquoted(rest),
                }
            }
            _ => unquoted(rest),
        };

        insert(&mut vars, key, value);
    }

    vars
}

/// Renders key/value pairs as env file content, one line per pair
pub fn render(vars: &[KeyValue]) -> String {
    let mut out = String::new();

    for kv in vars {
        // parse strips one `export ` prefix, so keep a key that has one
        if kv.key.starts_with(EXPORT_PREFIX) {
            out.push_str(EXPORT_PREFIX);
        }
        out.push_str(&kv.key);
        out.push('=');
        if needs_quotes(&kv.value) {
            out.push('"');
            for c in kv.value.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    c => out.push(c),
                }
            }
            out.push('"');
        } else {
            out.push_str(&kv.value);
        }
        out.push('\n');
    }

    out
}

fn insert(vars: &mut Vec<KeyValue>, key: &str, value: String) {
    match vars.iter_mut().find(|kv| kv.key == key) {
        Some(existing) => existing.value = value,
        None => vars.push(KeyValue::new(key, value)),
    }
}

fn unquoted(raw: &str) -> String {
    let end = raw.find('#').unwrap_or(raw.len());
    raw[..end].trim().to_string()
}

/// Reads a quoted value starting right after the opening quote
///
/// Returns the value and how many of the following lines it consumed, or
/// `None` if the quote is never closed.
fn read_quoted(quote: char, first: &str, following: &[&str]) -> Option<(String, usize)> {
    let mut text = first.to_string();
    let mut consumed = 0;

    loop {
        if let Some(value) = scan_quoted(quote, &text) {
            return Some((value, consumed));
        }
        let next = following.get(consumed)?;
        text.push('\n');
        text.push_str(next);
        consumed += 1;
    }
}

fn scan_quoted(quote: char, text: &str) -> Option<String> {
    let mut value = String::new();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == quote {
            return Some(value);
        }
        if c == '\\' && quote == '"' {
            match chars.next() {
                Some('n') => value.push('\n'),
                Some('r') => value.push('\r'),
                Some('t') => value.push('\t'),
                Some('"') => value.push('"'),
                Some('\\') => value.push('\\'),
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => value.push('\\'),
            }
            continue;
        }
        value.push(c);
    }

    None
}

fn needs_quotes(value: &str) -> bool {
    value != value.trim()
        || value.starts_with(&QUOTES[..])
        || value.contains(&['#', '\n', '\r'][..])
}
