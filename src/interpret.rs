//! How raw setting strings become typed values.
//!
//! Every source (command line, config file, programmatic writes) supplies
//! plain strings; these rules are the single place they are interpreted.
//! Malformed input never errors here: a bad integer is 0, a bad boolean is
//! whatever its leading integer says. Structural problems are someone
//! else's job.

/// Interpret `value` as a boolean switch.
///
/// The empty string is true (a bare `-foo` turns the switch on);
/// anything else is true exactly when its leading integer is non-zero,
/// so `"true"` and `"yes"` are *false*.
pub(crate) fn interpret_bool(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    parse_int(value) != 0
}

/// Parse the leading decimal integer of `value`: optional leading
/// whitespace, optional sign, digits up to the first non-digit.
/// Malformed input yields 0; overflow saturates.
pub(crate) fn parse_int(value: &str) -> i64 {
    let bytes = value.trim_start().as_bytes();
    let mut i = 0;
    let mut negative = false;
    if let Some(&b) = bytes.first()
        && (b == b'+' || b == b'-')
    {
        negative = b == b'-';
        i = 1;
    }
    let mut n: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        let digit = i64::from(bytes[i] - b'0');
        n = match n.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
        i += 1;
    }
    if negative { -n } else { n }
}

/// Rewrite the negation convention in place: `-nofoo[=v]` becomes `-foo`
/// with the interpreted value flipped, so `-nofoo` is `-foo=0` and
/// `-nofoo=0` is `-foo=1`.
///
/// The match is a mechanical prefix test on keys longer than `-no`,
/// so `-noise` rewrites to `-ise`. Settings whose name starts with
/// "no" cannot be expressed.
pub(crate) fn interpret_negative_setting(key: &mut String, value: &mut String) {
    if key.len() > 3 && key.starts_with("-no") {
        let flipped = if interpret_bool(value) { "0" } else { "1" };
        *key = format!("-{}", &key[3..]);
        *value = flipped.to_string();
    }
}
