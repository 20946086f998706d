//! Token-boundary search for imported production symbols.

use crate::core::ImportedSymbol;

/// JavaScript identifier characters for boundary purposes.
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// True iff some imported name appears in `body` as a whole token.
///
/// This is a text heuristic, not scope analysis: a call `fn()`, a member
/// access `ns.method()` and a bare reference passed as a callback all count,
/// while `fnHelper` or `my_fn` do not count for `fn`.
pub fn references_production(body: &str, imports: &[ImportedSymbol]) -> bool {
    imports
        .iter()
        .any(|symbol| contains_token(body, &symbol.name))
}

/// True iff `name` occurs in `haystack` with a non-identifier character (or
/// the string edge) on both sides.
pub fn contains_token(haystack: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    haystack.match_indices(name).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_identifier_char(c));
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !is_identifier_char(c));
        before_ok && after_ok
    })
}
