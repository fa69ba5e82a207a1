//! Data-directory and config-file location resolution.
//!
//! The daemon keeps everything it writes under one data directory,
//! `~/.{app}` by default, overridable with `-datadir`. The two rules
//! differ on purpose: the derived default is created on demand, while an
//! explicitly supplied directory must already exist, because a typo'd
//! `-datadir` silently creating a fresh directory looks exactly like
//! losing all of the daemon's state.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::chain::BaseChainParams;
use crate::error::SettingsError;
use crate::schema::{SettingDef, SettingKind};
use crate::settings::Settings;

pub const DATADIR_SETTINGS: &[SettingDef] = &[
    SettingDef::new("-datadir", SettingKind::Str, ""),
    SettingDef::new("-conf", SettingKind::Str, ""),
];

pub fn register_datadir_settings(settings: &Settings) {
    settings.register_all(DATADIR_SETTINGS);
}

/// The derived default data directory, `~/.{app_name}`. Falls back to
/// the filesystem root when no home directory can be determined.
pub fn default_datadir(app_name: &str) -> PathBuf {
    let home = directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/"));
    home.join(format!(".{app_name}"))
}

/// Resolve the effective data directory.
///
/// An explicit `-datadir` must name an existing directory; it is made
/// absolute so later working-directory changes cannot move it. Without
/// one, the derived default is created on demand.
pub fn datadir(settings: &Settings) -> Result<PathBuf, SettingsError> {
    if settings.is_set("-datadir") {
        let supplied = PathBuf::from(settings.get_string("-datadir", ""));
        if !supplied.is_dir() {
            return Err(SettingsError::DatadirMissing(supplied));
        }
        let absolute = if supplied.is_absolute() {
            supplied
        } else {
            match env::current_dir() {
                Ok(cwd) => cwd.join(supplied),
                Err(_) => supplied,
            }
        };
        return Ok(absolute);
    }
    let path = default_datadir(settings.app_name());
    fs::create_dir_all(&path).map_err(|source| SettingsError::DatadirCreate {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// The chain-specific data directory: the selected chain's subdirectory
/// under [`datadir`], created on demand. The main chain lives in the
/// data directory itself.
pub fn network_datadir(
    settings: &Settings,
    chain: &BaseChainParams,
) -> Result<PathBuf, SettingsError> {
    let base = datadir(settings)?;
    let path = if chain.data_dir().is_empty() {
        base
    } else {
        base.join(chain.data_dir())
    };
    fs::create_dir_all(&path).map_err(|source| SettingsError::DatadirCreate {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Resolve the config-file path: `-conf` when supplied, else
/// `{app}.conf`. Relative paths are taken from the data directory.
pub fn config_file_path(settings: &Settings) -> Result<PathBuf, SettingsError> {
    let default_name = format!("{}.conf", settings.app_name());
    let name = PathBuf::from(settings.get_string("-conf", &default_name));
    if name.is_absolute() {
        Ok(name)
    } else {
        Ok(datadir(settings)?.join(name))
    }
}
