//! Identifier tokenization.
//!
//! Token boundaries are what make aggressive abbreviations work: to
//! match a scene like `CoincidentLine`, `coinLi` is usually
//! sufficient, while `coinli` and `COINLI` degrade because they
//! produce too few (or too many) tokens.

/// Characters which, like ASCII uppercase letters, start a new
/// token.
const SEPARATORS: &[char] = &['_', '/', '\\'];

/// Splits an identifier-like string into space-joined tokens.
///
/// A new token begins at every ASCII uppercase letter and at every
/// separator character (`_`, `/`, `\`), with the boundary character
/// kept at the start of its token. The run before the first boundary
/// is emitted first. Concatenating the tokens (ignoring the joining
/// spaces) always reconstructs the input exactly.
///
/// This is a total function: any string, including the empty one,
/// tokenizes successfully.
pub fn split_tokens(input: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in input.chars() {
        let is_boundary =
            ch.is_ascii_uppercase() || SEPARATORS.contains(&ch);

        if is_boundary && !current.is_empty() {
            tokens.push(core::mem::take(&mut current));
        }

        current.push(ch);
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens.join(" ")
}
