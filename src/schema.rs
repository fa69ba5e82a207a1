//! The registered shape of a setting: its kind, its default, and the
//! typed destination cell its raw values resolve into.
//!
//! Subsystems describe their settings in const tables of [`SettingDef`]
//! rows and register them before parsing. The store owns one [`Binding`]
//! per registered name; nothing outside the store ever writes one.

use crate::interpret::{interpret_bool, parse_int};

/// How a setting's raw strings become a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Switch: empty or a leading non-zero integer is on.
    Bool,
    /// Leading decimal integer, 0 when malformed.
    Int,
    /// Verbatim string.
    Str,
    /// Cumulative list, one entry per supplied value.
    List,
}

/// One row of a registration table.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub name: &'static str,
    pub kind: SettingKind,
    pub default: &'static str,
}

impl SettingDef {
    pub const fn new(name: &'static str, kind: SettingKind, default: &'static str) -> Self {
        SettingDef {
            name,
            kind,
            default,
        }
    }
}

/// Typed destination cell of one registered setting.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Binding {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl Binding {
    pub(crate) fn new(kind: SettingKind) -> Self {
        match kind {
            SettingKind::Bool => Binding::Bool(false),
            SettingKind::Int => Binding::Int(0),
            SettingKind::Str => Binding::Str(String::new()),
            SettingKind::List => Binding::List(Vec::new()),
        }
    }

    pub(crate) fn kind(&self) -> SettingKind {
        match self {
            Binding::Bool(_) => SettingKind::Bool,
            Binding::Int(_) => SettingKind::Int,
            Binding::Str(_) => SettingKind::Str,
            Binding::List(_) => SettingKind::List,
        }
    }

    /// Apply one raw value. Scalars overwrite; lists append non-empty
    /// values and skip empty ones, except that a forced write into an
    /// empty list records a single empty entry so an explicit "cleared"
    /// stays observable.
    pub(crate) fn write(&mut self, value: &str, forced: bool) {
        match self {
            Binding::Bool(b) => *b = interpret_bool(value),
            Binding::Int(n) => *n = parse_int(value),
            Binding::Str(s) => *s = value.to_string(),
            Binding::List(items) => {
                if !value.is_empty() {
                    items.push(value.to_string());
                } else if forced && items.is_empty() {
                    items.push(String::new());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- scalar writes ---

    #[test]
    fn bool_binding_interprets() {
        let mut b = Binding::new(SettingKind::Bool);
        b.write("0", false);
        assert_eq!(b, Binding::Bool(false));
        b.write("", false);
        assert_eq!(b, Binding::Bool(true));
    }

    #[test]
    fn int_binding_takes_leading_digits() {
        let mut b = Binding::new(SettingKind::Int);
        b.write("8000x", false);
        assert_eq!(b, Binding::Int(8000));
        b.write("bad", false);
        assert_eq!(b, Binding::Int(0));
    }

    #[test]
    fn str_binding_overwrites() {
        let mut b = Binding::new(SettingKind::Str);
        b.write("first", false);
        b.write("second", false);
        assert_eq!(b, Binding::Str("second".into()));
    }

    // --- list writes ---

    #[test]
    fn list_binding_accumulates_non_empty() {
        let mut b = Binding::new(SettingKind::List);
        b.write("a", false);
        b.write("", false);
        b.write("b", false);
        assert_eq!(b, Binding::List(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn forced_empty_into_empty_list_records_one_entry() {
        let mut b = Binding::new(SettingKind::List);
        b.write("", true);
        assert_eq!(b, Binding::List(vec![String::new()]));
    }

    #[test]
    fn forced_empty_into_populated_list_is_a_no_op() {
        let mut b = Binding::new(SettingKind::List);
        b.write("a", false);
        b.write("", true);
        assert_eq!(b, Binding::List(vec!["a".into()]));
    }

    // --- tables ---

    #[test]
    fn defs_work_in_const_tables() {
        const DEFS: &[SettingDef] = &[
            SettingDef::new("-tag", SettingKind::List, ""),
            SettingDef::new("-port", SettingKind::Int, "8080"),
        ];
        assert_eq!(DEFS[0].kind, SettingKind::List);
        assert_eq!(DEFS[1].default, "8080");
    }
}
