//! Command-line token parsing.
//!
//! The grammar is the traditional daemon one, kept deliberately narrow:
//! a token is `-name`, `-name=value`, or `--name[=value]` (the second
//! dash is collapsed away). The split is on the *first* `=`, so values
//! may themselves contain `=`. The first token that does not start with
//! a dash stops parsing and everything after it is ignored. A bare
//! `-name` and a trailing `-name=` both carry the empty value, which the
//! boolean rules read as "on".
//!
//! Tokens are collected here; recording, negation rewriting, and binding
//! dispatch happen in the store with command-line precedence.

/// Split raw tokens into `(key, value)` pairs, stopping at the first
/// token that does not start with `-`.
pub(crate) fn collect_tokens<I>(args: I) -> Vec<(String, String)>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut pairs = Vec::new();
    for token in args {
        let token = token.into();
        let (mut key, value) = match token.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (token, String::new()),
        };
        if !key.starts_with('-') {
            break;
        }
        if key.starts_with("--") {
            key.remove(0);
        }
        pairs.push((key, value));
    }
    pairs
}
