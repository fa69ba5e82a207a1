//! Config-file text parsing.
//!
//! # Grammar
//!
//! Line-oriented `key=value`, the format these daemons have always read:
//!
//! - `#` starts a comment anywhere on a line;
//! - blank lines (after comment stripping) are skipped;
//! - `[section]` prefixes every following key with `section.`;
//! - anything else must be `key=value`; keys and values are trimmed, the
//!   split is on the first `=` so values may contain `=`.
//!
//! Keys are synthesized with a leading `-` so `rpcport=9000` in the file
//! and `-rpcport=9000` on the command line name the same setting, and the
//! negation convention (`nodebug=1`) works from the file too.
//!
//! # Failure
//!
//! A missing file is fine. A malformed line is not: startup should stop
//! on a typo'd config, not half-apply it. Merging an existing file also
//! revalidates the data directory selection, since the file may have
//! redirected it (see [`Settings::read_config_file`]).
//!
//! [`Settings::read_config_file`]: crate::Settings::read_config_file

use std::path::Path;

use crate::error::SettingsError;

/// Parse config text into `-`-prefixed `(key, value)` pairs in line
/// order. `path` is only for error context.
pub(crate) fn parse_config(
    text: &str,
    path: &Path,
) -> Result<Vec<(String, String)>, SettingsError> {
    let mut pairs = Vec::new();
    let mut section = String::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((before, _comment)) => before,
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            section = header.trim().to_string();
            continue;
        }
        let parse_err = || SettingsError::ConfigParse {
            path: path.to_path_buf(),
            line: idx + 1,
        };
        let (key, value) = line.split_once('=').ok_or_else(parse_err)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(parse_err());
        }
        let name = if section.is_empty() {
            format!("-{key}")
        } else {
            format!("-{section}.{key}")
        };
        pairs.push((name, value.trim().to_string()));
    }
    Ok(pairs)
}
