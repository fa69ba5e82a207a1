//! Chain selection.
//!
//! The daemon runs on exactly one chain, chosen by `-testnet` or
//! `-regtest` (neither means the main chain). Only the parameters other
//! subsystems need before any network machinery exists live here: the
//! chain's data subdirectory and its default RPC port.

use crate::error::SettingsError;
use crate::schema::{SettingDef, SettingKind};
use crate::settings::Settings;

pub const MAIN: &str = "main";
pub const TESTNET: &str = "test";
pub const REGTEST: &str = "regtest";

pub const CHAIN_SETTINGS: &[SettingDef] = &[
    SettingDef::new("-testnet", SettingKind::Bool, "0"),
    SettingDef::new("-regtest", SettingKind::Bool, "0"),
];

pub fn register_chain_settings(settings: &Settings) {
    settings.register_all(CHAIN_SETTINGS);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseChainParams {
    data_dir: &'static str,
    rpc_port: u16,
}

impl BaseChainParams {
    /// Subdirectory of the data directory this chain lives in; empty for
    /// the main chain.
    pub fn data_dir(&self) -> &'static str {
        self.data_dir
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }
}

pub fn base_chain_params(chain: &str) -> Result<BaseChainParams, SettingsError> {
    match chain {
        MAIN => Ok(BaseChainParams {
            data_dir: "",
            rpc_port: 8332,
        }),
        TESTNET => Ok(BaseChainParams {
            data_dir: "testnet3",
            rpc_port: 18332,
        }),
        REGTEST => Ok(BaseChainParams {
            data_dir: "regtest",
            rpc_port: 18443,
        }),
        other => Err(SettingsError::UnknownChain(other.to_string())),
    }
}

/// Which chain the resolved settings select.
pub fn chain_name(settings: &Settings) -> Result<&'static str, SettingsError> {
    let regtest = settings.get_bool("-regtest", false);
    let testnet = settings.get_bool("-testnet", false);
    if regtest && testnet {
        return Err(SettingsError::ConflictingChains);
    }
    Ok(if regtest {
        REGTEST
    } else if testnet {
        TESTNET
    } else {
        MAIN
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let settings = Settings::new("testapp");
        register_chain_settings(&settings);
        settings
    }

    #[test]
    fn no_switches_select_main() {
        assert_eq!(chain_name(&settings()).unwrap(), MAIN);
    }

    #[test]
    fn testnet_switch_selects_test() {
        let settings = settings();
        settings.parse_args(["-testnet"], false).unwrap();
        assert_eq!(chain_name(&settings).unwrap(), TESTNET);
    }

    #[test]
    fn regtest_switch_selects_regtest() {
        let settings = settings();
        settings.parse_args(["-regtest=1"], false).unwrap();
        assert_eq!(chain_name(&settings).unwrap(), REGTEST);
    }

    #[test]
    fn both_switches_conflict() {
        let settings = settings();
        settings.parse_args(["-testnet", "-regtest"], false).unwrap();
        assert!(matches!(
            chain_name(&settings),
            Err(SettingsError::ConflictingChains)
        ));
    }

    #[test]
    fn negated_switch_does_not_select() {
        let settings = settings();
        settings.parse_args(["-testnet", "-noregtest"], false).unwrap();
        assert_eq!(chain_name(&settings).unwrap(), TESTNET);
    }

    #[test]
    fn params_table() {
        let main = base_chain_params(MAIN).unwrap();
        assert_eq!(main.data_dir(), "");
        assert_eq!(main.rpc_port(), 8332);

        let test = base_chain_params(TESTNET).unwrap();
        assert_eq!(test.data_dir(), "testnet3");
        assert_eq!(test.rpc_port(), 18332);

        let regtest = base_chain_params(REGTEST).unwrap();
        assert_eq!(regtest.data_dir(), "regtest");
        assert_eq!(regtest.rpc_port(), 18443);
    }

    #[test]
    fn unknown_chain_errors() {
        assert!(matches!(
            base_chain_params("signet"),
            Err(SettingsError::UnknownChain(name)) if name == "signet"
        ));
    }
}
