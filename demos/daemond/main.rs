//! # daemond
//!
//! A sample daemon front end that shows how to wire
//! [daemonfig](https://docs.rs/daemonfig) into a long-running service.
//! This is **not** a real daemon: it registers every subsystem's settings,
//! merges the command line with the config file, resolves the runtime
//! environment, and prints what a real daemon would start from.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example daemond
//! cargo run --example daemond -- -regtest -debug
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature               | How to exercise it                                        |
//! |-----------------------|-----------------------------------------------------------|
//! | Compiled defaults     | `cargo run --example daemond`                             |
//! | Help text             | `cargo run --example daemond -- -?`                       |
//! | Command line override | `cargo run --example daemond -- -rpcport=9000`            |
//! | Negated switch        | `cargo run --example daemond -- -debug -nodebug`          |
//! | Cumulative lists      | `cargo run --example daemond -- -wallet=hot -wallet=cold` |
//! | Chain selection       | `cargo run --example daemond -- -testnet`                 |
//! | Config file           | write keys into `daemond.conf` in the data directory      |
//! | Soft defaults         | `-regtest` logs to stdout unless `-noprinttoconsole`      |
//! | Verbose logging       | `cargo run --example daemond -- -debug`                   |

use std::env;
use std::error::Error;
use std::path::Path;
use std::process;

use tracing::{Level, info};

use daemonfig::chain::{self, BaseChainParams};
use daemonfig::{SettingDef, SettingKind, Settings, SettingsError};
use daemonfig::{datadir, meta, rpc, wallet};

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Every settings table the daemon carries, in help order.
const TABLES: &[(&str, &[SettingDef])] = &[
    ("General", meta::META_SETTINGS),
    ("Data directory", datadir::DATADIR_SETTINGS),
    ("Chain selection", chain::CHAIN_SETTINGS),
    ("Wallet", wallet::WALLET_SETTINGS),
    ("RPC server", rpc::RPC_SETTINGS),
];

fn register_all(settings: &Settings) {
    meta::register_meta_settings(settings);
    datadir::register_datadir_settings(settings);
    chain::register_chain_settings(settings);
    wallet::register_wallet_settings(settings);
    rpc::register_rpc_settings(settings);
}

// ---------------------------------------------------------------------------
// Usage text
// ---------------------------------------------------------------------------

fn placeholder(kind: SettingKind) -> &'static str {
    match kind {
        SettingKind::Bool => "",
        SettingKind::Int => "=<n>",
        SettingKind::Str => "=<value>",
        SettingKind::List => "=<value>",
    }
}

/// Print a usage block built from the registration tables.
fn print_usage() {
    println!("Usage: daemond [options]");
    for (section, defs) in TABLES {
        println!();
        println!("{section} options:");
        for def in *defs {
            let mut line = format!("  {}{}", def.name, placeholder(def.kind));
            if !def.default.is_empty() {
                line.push_str(&format!(" (default: {})", def.default));
            }
            println!("{line}");
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install the global subscriber according to `-debug` and
/// `-printtoconsole`. Console output goes to stdout, the default
/// stream is stderr.
fn init_logging(settings: &Settings) {
    let level = if settings.get_bool("-debug", false) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);
    if settings.get_bool("-printtoconsole", false) {
        builder.with_writer(std::io::stdout).init();
    } else {
        builder.init();
    }
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

fn run() -> Result<(), Box<dyn Error>> {
    let settings = Settings::new("daemond");
    register_all(&settings);

    match settings.parse_args(env::args().skip(1), true) {
        Ok(()) => {}
        Err(err @ SettingsError::UnknownSetting(_)) => {
            eprintln!("Error: {err}");
            eprintln!("Use -? to list the available options.");
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    if meta::help_requested(&settings) {
        print_usage();
        return Ok(());
    }

    let conf = datadir::config_file_path(&settings)?;
    settings.read_config_file(&conf, false)?;

    let chain = chain::chain_name(&settings)?;
    let params = chain::base_chain_params(chain)?;

    // Regtest runs are developer runs; default their logs to the console.
    if chain == chain::REGTEST {
        settings.soft_set_bool("-printtoconsole", true);
    }
    init_logging(&settings);

    info!(chain, "chain selected");
    let dir = datadir::datadir(&settings)?;
    let net_dir = datadir::network_datadir(&settings, &params)?;
    info!(path = %net_dir.display(), "network data directory ready");

    rpc::generate_auth_cookie(&settings, &net_dir)?;

    print_summary(&settings, chain, &params, &dir, &net_dir, &conf);
    Ok(())
}

/// Echo what a real daemon would start from.
fn print_summary(
    settings: &Settings,
    chain: &str,
    params: &BaseChainParams,
    dir: &Path,
    net_dir: &Path,
    conf: &Path,
) {
    let wallets = settings.get_list("-wallet");
    let wallet_list = if wallets.is_empty() {
        "(default)".to_string()
    } else {
        wallets.join(", ")
    };
    let wallet_path = match wallet::wallet_dir(settings, net_dir) {
        Some(path) => path.display().to_string(),
        None => "(not found)".to_string(),
    };

    let entries = [
        ("chain", chain.to_string()),
        ("data directory", dir.display().to_string()),
        ("network directory", net_dir.display().to_string()),
        ("config file", conf.display().to_string()),
        ("rpc port", rpc::rpc_port(settings, params).to_string()),
        (
            "rpc threads",
            settings
                .get_int("-rpcthreads", rpc::DEFAULT_HTTP_THREADS)
                .to_string(),
        ),
        (
            "rpc work queue",
            settings
                .get_int("-rpcworkqueue", rpc::DEFAULT_HTTP_WORKQUEUE)
                .to_string(),
        ),
        (
            "rpc timeout",
            settings
                .get_int("-rpcservertimeout", rpc::DEFAULT_HTTP_SERVER_TIMEOUT)
                .to_string(),
        ),
        (
            "cookie file",
            rpc::auth_cookie_file(settings, net_dir, false)
                .display()
                .to_string(),
        ),
        ("wallet directory", wallet_path),
        ("wallets", wallet_list),
    ];

    println!("Resolved settings:");
    let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in &entries {
        println!("  {key:<width$}  {value}");
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
