//! Read transform for display names.

/// Title-case every whitespace-separated word: `"joe doe"` → `"Joe Doe"`.
///
/// Whitespace is preserved exactly; only letter case changes.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
