use crate::schema::{SettingDef, SettingKind};
use crate::settings::Settings;

/// The canonical registered store most tests start from: one setting of
/// each kind, defaults chosen so unwritten bindings are recognizable.
pub fn test_settings() -> Settings {
    const DEFS: &[SettingDef] = &[
        SettingDef::new("-host", SettingKind::Str, "localhost"),
        SettingDef::new("-port", SettingKind::Int, "8080"),
        SettingDef::new("-debug", SettingKind::Bool, "0"),
        SettingDef::new("-tag", SettingKind::List, ""),
    ];
    let settings = Settings::new("testapp");
    settings.register_all(DEFS);
    settings
}

#[test]
fn fixture_starts_from_defaults() {
    let settings = test_settings();
    assert_eq!(settings.app_name(), "testapp");
    assert_eq!(settings.bound_str("-host"), Some("localhost".into()));
    assert_eq!(settings.bound_int("-port"), Some(8080));
    assert_eq!(settings.bound_bool("-debug"), Some(false));
    assert_eq!(settings.bound_list("-tag"), Some(vec![]));
    assert!(!settings.is_set("-host"));
}
