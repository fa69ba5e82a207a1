//! RPC server settings and cookie-file authentication.
//!
//! When no `-rpcuser`/`-rpcpassword` is configured, the daemon writes a
//! random credential to a cookie file in the data directory at startup;
//! local clients authenticate by reading it back, and the file is
//! removed on shutdown. The cookie user name is fixed and recognizable
//! in logs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::RngExt;
use tracing::{info, warn};

use crate::chain::BaseChainParams;
use crate::schema::{SettingDef, SettingKind};
use crate::settings::Settings;

pub const DEFAULT_HTTP_THREADS: i64 = 4;
pub const DEFAULT_HTTP_WORKQUEUE: i64 = 16;
pub const DEFAULT_HTTP_SERVER_TIMEOUT: i64 = 30;

/// User name paired with the cookie credential, arbitrary but
/// recognizable in logs.
pub const COOKIEAUTH_USER: &str = "__cookie__";
/// Default name for the auth cookie file.
pub const COOKIEAUTH_FILE: &str = ".cookie";

pub const RPC_SETTINGS: &[SettingDef] = &[
    SettingDef::new("-rpcauth", SettingKind::List, ""),
    SettingDef::new("-rpcuser", SettingKind::Str, ""),
    SettingDef::new("-rpcpassword", SettingKind::Str, ""),
    SettingDef::new("-rpcallowip", SettingKind::List, ""),
    SettingDef::new("-rpcport", SettingKind::Int, ""),
    SettingDef::new("-rpcbind", SettingKind::List, ""),
    SettingDef::new("-rpccookiefile", SettingKind::Str, COOKIEAUTH_FILE),
    SettingDef::new("-rpcssl", SettingKind::Bool, "0"),
    SettingDef::new("-rpcservertimeout", SettingKind::Int, "30"),
    SettingDef::new("-rpcworkqueue", SettingKind::Int, "16"),
    SettingDef::new("-rpcthreads", SettingKind::Int, "4"),
];

pub fn register_rpc_settings(settings: &Settings) {
    settings.register_all(RPC_SETTINGS);
}

/// The port the RPC server listens on: `-rpcport` when supplied and in
/// range, else the chain's default.
pub fn rpc_port(settings: &Settings, chain: &BaseChainParams) -> u16 {
    let port = settings.get_int("-rpcport", i64::from(chain.rpc_port()));
    u16::try_from(port).unwrap_or_else(|_| chain.rpc_port())
}

/// Path of the auth cookie file: `-rpccookiefile`, relative names taken
/// from the network data directory. `temp` selects the `.tmp` staging
/// name used while writing.
pub fn auth_cookie_file(settings: &Settings, net_datadir: &Path, temp: bool) -> PathBuf {
    let mut name = settings.get_string("-rpccookiefile", COOKIEAUTH_FILE);
    if temp {
        name.push_str(".tmp");
    }
    let path = PathBuf::from(name);
    if path.is_absolute() {
        path
    } else {
        net_datadir.join(path)
    }
}

/// Generate a fresh cookie credential and write it to the cookie file,
/// staging through the `.tmp` name so readers never see a partial
/// cookie. Returns the credential (`__cookie__:<64 hex digits>`).
pub fn generate_auth_cookie(settings: &Settings, net_datadir: &Path) -> io::Result<String> {
    let secret: [u8; 32] = rand::rng().random();
    let cookie = format!("{COOKIEAUTH_USER}:{}", hex::encode(secret));

    let tmp = auth_cookie_file(settings, net_datadir, true);
    fs::write(&tmp, &cookie)?;
    let path = auth_cookie_file(settings, net_datadir, false);
    fs::rename(&tmp, &path)?;
    info!(path = %path.display(), "generated RPC authentication cookie");
    Ok(cookie)
}

/// Read the current cookie credential, `None` when the file is missing
/// or unreadable.
pub fn get_auth_cookie(settings: &Settings, net_datadir: &Path) -> Option<String> {
    let path = auth_cookie_file(settings, net_datadir, false);
    let contents = fs::read_to_string(path).ok()?;
    Some(contents.lines().next().unwrap_or_default().to_string())
}

/// Remove the cookie file. A missing file is fine; anything else is
/// logged and swallowed, shutdown does not fail over a leftover cookie.
pub fn delete_auth_cookie(settings: &Settings, net_datadir: &Path) {
    let path = auth_cookie_file(settings, net_datadir, false);
    if let Err(err) = fs::remove_file(&path)
        && err.kind() != io::ErrorKind::NotFound
    {
        warn!(path = %path.display(), error = %err, "unable to remove RPC authentication cookie");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain;
    use tempfile::TempDir;

    fn settings() -> Settings {
        let settings = Settings::new("testapp");
        register_rpc_settings(&settings);
        settings
    }

    // --- rpc_port ---

    #[test]
    fn port_defaults_to_the_chain() {
        let s = settings();
        let main = chain::base_chain_params(chain::MAIN).unwrap();
        let test = chain::base_chain_params(chain::TESTNET).unwrap();
        assert_eq!(rpc_port(&s, &main), 8332);
        assert_eq!(rpc_port(&s, &test), 18332);
    }

    #[test]
    fn explicit_port_wins() {
        let s = settings();
        s.parse_args(["-rpcport=8000"], false).unwrap();
        let main = chain::base_chain_params(chain::MAIN).unwrap();
        assert_eq!(rpc_port(&s, &main), 8000);
    }

    #[test]
    fn out_of_range_port_falls_back() {
        let s = settings();
        s.parse_args(["-rpcport=70000"], false).unwrap();
        let main = chain::base_chain_params(chain::MAIN).unwrap();
        assert_eq!(rpc_port(&s, &main), 8332);
    }

    // --- cookie paths ---

    #[test]
    fn cookie_file_defaults_into_the_datadir() {
        let dir = TempDir::new().unwrap();
        let s = settings();
        assert_eq!(
            auth_cookie_file(&s, dir.path(), false),
            dir.path().join(".cookie")
        );
        assert_eq!(
            auth_cookie_file(&s, dir.path(), true),
            dir.path().join(".cookie.tmp")
        );
    }

    #[test]
    fn relative_cookie_name_joins_the_datadir() {
        let dir = TempDir::new().unwrap();
        let s = settings();
        s.force_set("-rpccookiefile", "auth/cookie");
        assert_eq!(
            auth_cookie_file(&s, dir.path(), false),
            dir.path().join("auth/cookie")
        );
    }

    #[test]
    fn absolute_cookie_path_is_taken_verbatim() {
        let dir = TempDir::new().unwrap();
        let s = settings();
        s.force_set("-rpccookiefile", "/run/daemon/.cookie");
        assert_eq!(
            auth_cookie_file(&s, dir.path(), false),
            PathBuf::from("/run/daemon/.cookie")
        );
    }

    // --- cookie lifecycle ---

    #[test]
    fn generate_read_delete_round_trip() {
        let dir = TempDir::new().unwrap();
        let s = settings();

        let cookie = generate_auth_cookie(&s, dir.path()).unwrap();
        let prefix = format!("{COOKIEAUTH_USER}:");
        assert!(cookie.starts_with(&prefix));
        assert_eq!(cookie.len(), prefix.len() + 64);
        assert!(auth_cookie_file(&s, dir.path(), false).is_file());
        assert!(!auth_cookie_file(&s, dir.path(), true).exists());

        assert_eq!(get_auth_cookie(&s, dir.path()), Some(cookie));

        delete_auth_cookie(&s, dir.path());
        assert_eq!(get_auth_cookie(&s, dir.path()), None);
    }

    #[test]
    fn regeneration_replaces_the_credential() {
        let dir = TempDir::new().unwrap();
        let s = settings();
        let first = generate_auth_cookie(&s, dir.path()).unwrap();
        let second = generate_auth_cookie(&s, dir.path()).unwrap();
        assert_ne!(first, second);
        assert_eq!(get_auth_cookie(&s, dir.path()), Some(second));
    }

    #[test]
    fn read_takes_only_the_first_line() {
        let dir = TempDir::new().unwrap();
        let s = settings();
        fs::write(dir.path().join(".cookie"), "credential\ntrailing junk\n").unwrap();
        assert_eq!(get_auth_cookie(&s, dir.path()), Some("credential".into()));
    }

    #[test]
    fn deleting_a_missing_cookie_is_quiet() {
        let dir = TempDir::new().unwrap();
        let s = settings();
        delete_auth_cookie(&s, dir.path());
    }
}
