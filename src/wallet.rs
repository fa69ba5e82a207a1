//! Wallet location settings.

use std::path::{Path, PathBuf};

use crate::schema::{SettingDef, SettingKind};
use crate::settings::Settings;

pub const WALLET_SETTINGS: &[SettingDef] = &[
    SettingDef::new("-wallet", SettingKind::List, ""),
    SettingDef::new("-walletdir", SettingKind::Str, ""),
];

pub fn register_wallet_settings(settings: &Settings) {
    settings.register_all(WALLET_SETTINGS);
}

/// Where wallet files live.
///
/// An explicit `-walletdir` must name an existing directory, `None`
/// otherwise. Without one, wallets live in the chain's data directory,
/// preferring its `wallets/` subdirectory when present.
pub fn wallet_dir(settings: &Settings, net_datadir: &Path) -> Option<PathBuf> {
    if settings.is_set("-walletdir") {
        let dir = PathBuf::from(settings.get_string("-walletdir", ""));
        if dir.is_dir() { Some(dir) } else { None }
    } else {
        let wallets = net_datadir.join("wallets");
        if wallets.is_dir() {
            Some(wallets)
        } else {
            Some(net_datadir.to_path_buf())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings() -> Settings {
        let settings = Settings::new("testapp");
        register_wallet_settings(&settings);
        settings
    }

    #[test]
    fn defaults_to_the_network_datadir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            wallet_dir(&settings(), dir.path()),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn prefers_an_existing_wallets_subdirectory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("wallets")).unwrap();
        assert_eq!(
            wallet_dir(&settings(), dir.path()),
            Some(dir.path().join("wallets"))
        );
    }

    #[test]
    fn explicit_walletdir_is_used_when_present() {
        let data = TempDir::new().unwrap();
        let explicit = TempDir::new().unwrap();
        let settings = settings();
        settings.force_set("-walletdir", explicit.path().to_str().unwrap());
        assert_eq!(
            wallet_dir(&settings, data.path()),
            Some(explicit.path().to_path_buf())
        );
    }

    #[test]
    fn missing_explicit_walletdir_resolves_to_none() {
        let data = TempDir::new().unwrap();
        let settings = settings();
        settings.force_set("-walletdir", "/no/such/walletdir");
        assert_eq!(wallet_dir(&settings, data.path()), None);
    }

    #[test]
    fn explicit_walletdir_must_be_a_directory() {
        let data = TempDir::new().unwrap();
        let file = data.path().join("wallet.dat");
        fs::write(&file, b"").unwrap();
        let settings = settings();
        settings.force_set("-walletdir", file.to_str().unwrap());
        assert_eq!(wallet_dir(&settings, data.path()), None);
    }

    #[test]
    fn wallet_names_accumulate() {
        let settings = settings();
        settings
            .parse_args(["-wallet=w1.dat", "-wallet=w2.dat"], false)
            .unwrap();
        assert_eq!(
            settings.bound_list("-wallet"),
            Some(vec!["w1.dat".into(), "w2.dat".into()])
        );
    }
}
