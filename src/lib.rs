//! Layered runtime settings for long-running daemons: the command line
//! and a config file resolved into one typed, lock-protected store that
//! every subsystem reads for the life of the process.
//!
//! ```ignore
//! let settings = Settings::new("mydaemon");
//! meta::register_meta_settings(&settings);
//! datadir::register_datadir_settings(&settings);
//! chain::register_chain_settings(&settings);
//! rpc::register_rpc_settings(&settings);
//!
//! settings.parse_args(std::env::args().skip(1), false)?;
//! settings.read_config_file(&datadir::config_file_path(&settings)?, false)?;
//!
//! let chain = chain::base_chain_params(chain::chain_name(&settings)?)?;
//! let port = rpc::rpc_port(&settings, &chain);
//! ```
//!
//! # Why this shape
//!
//! A daemon's configuration is written once at startup and read
//! everywhere, forever: the RPC server asks for its port when it binds,
//! the wallet asks for its directory when it opens a file, logging asks
//! for `-debug` on every line — from whatever thread happens to be
//! running. So the store is a context value guarded by a single
//! read-write lock: `main` builds one [`Settings`], fills it, and hands
//! out `&Settings` (or an `Arc`). There is no process-global and nothing
//! to initialize lazily.
//!
//! Input is untyped text (`-rpcport=8332`, a `key=value` file), but
//! consumers want types. Each subsystem registers the settings it owns
//! in a const table — name, kind, default — and the store keeps one
//! typed binding per registered name, written only by the resolver as
//! raw values arrive. Reads go through accessors; nothing holds a
//! pointer into the store.
//!
//! # Layer precedence
//!
//! ```text
//! Registered defaults    SettingDef tables, applied at registration
//!        ↑ overridden by
//! Config file            first line wins among its own lines
//!        ↑ overridden by
//! Command line           last token wins among its own tokens
//!        ↑ overridden by
//! force_set / soft_set   programmatic writes after parsing
//! ```
//!
//! Both sources are sparse: a config file only needs the keys it wants
//! to change. The two in-source rules differ on purpose — repeating a
//! flag on the command line is a correction, so the last one wins, while
//! a config file reads top-down, so the first line wins and later
//! duplicates are inert.
//!
//! # Scalar and list settings
//!
//! A scalar setting resolves to one value under the precedence above. A
//! list setting (`SettingKind::List`) is cumulative instead: every
//! supplied value from both sources lands in its binding in supply
//! order, so `-rpcauth` can grant one credential per line. The raw side
//! of this is visible for every name through
//! [`get_list`](Settings::get_list), which records all supplied values
//! whatever the kind.
//!
//! # The negation convention
//!
//! Any setting can be switched off by name: `-nofoo` is `-foo=0`, and
//! `-nofoo=0` is `-foo=1`. The rewrite happens before recording, so the
//! store only ever sees `-foo`. It applies to config lines too
//! (`nolisten=1`).
//!
//! # Provenance
//!
//! "Did anyone actually set this?" is its own fact, tracked as its own
//! flag — never inferred from the value, so `-datadir=` (explicitly
//! empty) still counts as set. [`is_set`](Settings::is_set) answers it;
//! accessors fall back to the caller's default only when nothing was
//! supplied; [`soft_set`](Settings::soft_set) writes only when it is
//! false. [`force_set`](Settings::force_set) overrides regardless, for
//! the parameter interactions a daemon applies after parsing ("-regtest
//! implies -listen=0").
//!
//! # The config file
//!
//! Plain `key=value` lines, `#` comments, optional `[section]` headers
//! that prefix the keys that follow (`[wallet]` + `name=w` is
//! `-wallet.name=w`). A missing file is fine — defaults are a complete
//! configuration. A malformed line is a hard error: a daemon that
//! half-applies a typo'd config and then runs for six months is worse
//! than one that refuses to start. Merging an existing file also
//! revalidates `-datadir`, since the file itself may have moved it.
//!
//! # Unknown names
//!
//! Both entry points take a `strict` flag. Lenient (the default call
//! style) records unrecognized names in the raw store, logs at debug
//! level, and moves on — config files are routinely shared between
//! binaries that each know a subset of the keys. Strict fails on the
//! first unknown, for tools that own their whole command line.
//!
//! # Collaborator modules
//!
//! The settings engine carries the subsystem tables that every deployment
//! of the daemon needs:
//!
//! - [`datadir`] — `-datadir`/`-conf`, default `~/.{app}`, config-path
//!   resolution, per-chain data directories.
//! - [`chain`] — `-testnet`/`-regtest` selection and per-chain
//!   parameters (data subdirectory, default RPC port).
//! - [`rpc`] — RPC server settings and cookie-file authentication.
//! - [`wallet`] — `-wallet`/`-walletdir` and wallet-directory
//!   resolution.
//! - [`protocol`] — JSON-RPC envelope framing for the server and for
//!   batch-capable clients.
//! - [`meta`] — help aliases and diagnostics switches.
//!
//! # Error handling
//!
//! Malformed *values* never error: `-rpcport=x` is port 0, `-debug=yes`
//! is off. That rule is old and load-bearing; scripts depend on it.
//! Structural problems — an unreadable or malformed config file, a
//! `-datadir` that does not exist, `-testnet` with `-regtest` — fail
//! fast with [`SettingsError`]. Batch framing violations have their own
//! error in [`protocol`], fatal to the batch rather than the process.

pub mod chain;
pub mod datadir;
pub mod error;
pub mod meta;
pub mod protocol;
pub mod rpc;
pub mod wallet;

mod cli;
mod file;
mod interpret;
mod schema;
mod settings;

#[cfg(test)]
mod fixtures;

pub use error::SettingsError;
pub use schema::{SettingDef, SettingKind};
pub use settings::Settings;
