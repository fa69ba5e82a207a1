//! Process-level settings: help aliases and diagnostics switches.

use crate::schema::{SettingDef, SettingKind};
use crate::settings::Settings;

pub const META_SETTINGS: &[SettingDef] = &[
    SettingDef::new("-?", SettingKind::Bool, "0"),
    SettingDef::new("-h", SettingKind::Bool, "0"),
    SettingDef::new("-help", SettingKind::Bool, "0"),
    SettingDef::new("-debug", SettingKind::Bool, "0"),
    SettingDef::new("-printtoconsole", SettingKind::Bool, "0"),
];

pub fn register_meta_settings(settings: &Settings) {
    settings.register_all(META_SETTINGS);
}

/// Whether any help alias was switched on.
pub fn help_requested(settings: &Settings) -> bool {
    settings.get_bool("-?", false)
        || settings.get_bool("-h", false)
        || settings.get_bool("-help", false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> Settings {
        let settings = Settings::new("testapp");
        register_meta_settings(&settings);
        settings.parse_args(args.iter().copied(), false).unwrap();
        settings
    }

    #[test]
    fn help_is_off_by_default() {
        assert!(!help_requested(&settings(&[])));
    }

    #[test]
    fn every_alias_requests_help() {
        assert!(help_requested(&settings(&["-?"])));
        assert!(help_requested(&settings(&["-h"])));
        assert!(help_requested(&settings(&["--help"])));
    }

    #[test]
    fn a_zero_valued_alias_does_not() {
        assert!(!help_requested(&settings(&["-help=0"])));
    }

    #[test]
    fn debug_switch_reaches_its_binding() {
        let settings = settings(&["-debug"]);
        assert_eq!(settings.bound_bool("-debug"), Some(true));
        assert!(!settings.get_bool("-printtoconsole", false));
    }
}
