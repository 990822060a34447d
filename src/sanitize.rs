//! Anchor tag spacing fix-up for raw result HTML.
//!
//! Result fragments from the API glue the closing anchor tag directly to the
//! following word (`<a href="...">Rust</a>A language...`). Every `a>` that is
//! not already followed by a space gets one.

/// Insert a space after every `a>` not already followed by one.
///
/// Applying this twice gives the same output as applying it once.
pub fn space_anchor_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len() + 8);
    let mut rest = html;

    while let Some(pos) = rest.find("a>") {
        let end = pos + 2;
        out.push_str(&rest[..end]);
        rest = &rest[end..];
        if !rest.starts_with(' ') {
            out.push(' ');
        }
    }
    out.push_str(rest);
    out
}
