//! Escaping for crawled text
//!
//! Every string that originates from crawled data (titles, authors,
//! problem messages, timestamps) passes through here before it is placed
//! in markup. No crawled string is ever inserted unescaped.

/// Escapes text for use in an HTML element body or attribute value.
///
/// Encodes `& < > " '` unconditionally.
pub fn escape(text: &str) -> String {
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

/// Escapes text for use inside a quoted attribute value, additionally
/// encoding newlines so multi-line tooltips survive.
pub fn attribute(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            _ => out.push(c),
        }
    }
    out
}
