//! Free-text sanitization.
//!
//! Length bounds for text fields are declared on the request DTOs; this
//! module only neutralizes markup before a value is stored, rendered, or
//! logged.

/// Escapes `& < > " '` as HTML entities.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Trims and escapes an optional field; blank values become `None`.
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(escape_html)
}
