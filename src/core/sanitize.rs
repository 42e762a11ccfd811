// src/core/sanitize.rs

/// Cleanup applied to every table cell before coercion, in source order:
/// a whole-cell `-` is the missing-data sentinel, a leading `+` on a percent
/// value and the trailing `%` are dropped, thousands commas removed.
/// Text columns pass through the same rules; the quote page uses the same
/// sentinels table-wide.
pub fn clean_cell(s: &str) -> String {
    let t = s.trim();
    if t == "-" {
        return "0".to_string();
    }
    let t = match t.strip_suffix('%') {
        Some(body) => body.strip_prefix('+').unwrap_or(body),
        None => t,
    };
    t.replace(',', "")
}

/// Collapse whitespace runs into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
