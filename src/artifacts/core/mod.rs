//! Line-format helpers shared by the commit and index codecs
//!
//! Both on-disk formats store one `key:value` pair per line. Keys and values
//! are escaped so that neither can contain a raw newline or `:`, which keeps
//! every record line-oriented no matter what the tracked files contain.
//!
//! | raw     | escaped |
//! |---------|---------|
//! | `\`     | `\\`    |
//! | newline | `\n`    |
//! | CR      | `\r`    |
//! | `:`     | `\c`    |

/// Escape a key or value for storage on a single line
pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            ':' => escaped.push_str("\\c"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Reverse [`escape`]; returns None on a dangling or unknown escape sequence
pub fn unescape(escaped: &str) -> Option<String> {
    let mut raw = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            raw.push(c);
            continue;
        }

        match chars.next()? {
            '\\' => raw.push('\\'),
            'n' => raw.push('\n'),
            'r' => raw.push('\r'),
            'c' => raw.push(':'),
            _ => return None,
        }
    }

    Some(raw)
}

/// Split an escaped line at `separator` and unescape both halves.
///
/// Escaped keys never contain `:`, so the first match is always the field
/// boundary even when the separator is `": "`.
pub fn split_field(line: &str, separator: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(separator)?;

    Some((unescape(key)?, unescape(value)?))
}
