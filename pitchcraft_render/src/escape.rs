// Escaping for interpolated pitch text.
//
// Pitch fields are free text a user can edit, so every value that reaches
// the generated JSX or HTML passes through one of these:
//
// - `escape_text`: element text. `&`, `<`, `>` and the JSX expression braces
//   `{` `}` become character references. The output is valid in both JSX and
//   HTML, so both emitters share it.
// - `escape_attr`: double-quoted attribute values (JSX and HTML).
// - `escape_js_string`: single-quoted JS string literals inside `style={{ }}`.

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Reduce a pitch name to a component identifier: ASCII alphanumerics only,
/// `Startup` when nothing survives or prefixed when it starts with a digit.
pub fn component_name(name: &str) -> String {
    let cleaned: String = name.chars().filter(char::is_ascii_alphanumeric).collect();
    match cleaned.chars().next() {
        None => "Startup".to_string(),
        Some(c) if c.is_ascii_digit() => format!("Startup{cleaned}"),
        Some(_) => cleaned,
    }
}
