//! The settings store.
//!
//! One [`Settings`] value holds everything the process knows about its
//! configuration: the registered schema with its typed bindings, and the
//! raw value store filled in from the command line and the config file.
//! A single read-write lock guards all of it; subsystems on any thread
//! read through the accessor API for the life of the process.
//!
//! Two facts are tracked per supplied name, independently of each other:
//!
//! - `scalar` + `explicit`: the single resolved string under precedence
//!   rules (command line beats config file; later command-line tokens beat
//!   earlier ones; earlier config lines beat later ones), plus whether any
//!   source supplied the name at all. `explicit` is authoritative: an
//!   explicit empty assignment is still "set".
//! - `multi`: every raw value ever supplied, both sources, in supply
//!   order. List-kind settings resolve from this cumulative view.
//!
//! Unrecognized names still land in the value store so they can be
//! reported or tolerated; only typed bindings require registration.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use parking_lot::RwLock;
use tracing::debug;

use crate::cli;
use crate::datadir;
use crate::error::SettingsError;
use crate::file;
use crate::interpret::{interpret_bool, interpret_negative_setting, parse_int};
use crate::schema::{Binding, SettingDef, SettingKind};

/// Which source supplied a raw value; decides the precedence gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    CommandLine,
    ConfigFile,
}

/// Raw resolved state of one setting name.
#[derive(Debug, Default)]
struct ValueSlot {
    scalar: String,
    explicit: bool,
    multi: Vec<String>,
}

#[derive(Default)]
struct State {
    schema: HashMap<String, Binding>,
    values: HashMap<String, ValueSlot>,
}

/// Process-wide settings context.
///
/// Create one at startup, register every subsystem's tables, parse the
/// command line, merge the config file, then hand out `&Settings` (or an
/// `Arc`) to anything that needs configuration.
pub struct Settings {
    app_name: String,
    state: RwLock<State>,
}

impl State {
    fn register(&mut self, def: &SettingDef) {
        let mut binding = Binding::new(def.kind);
        binding.write(def.default, false);
        self.schema.insert(def.name.to_string(), binding);
    }

    /// Record one raw value and dispatch it to its binding. The negation
    /// convention is applied here so both sources share it.
    fn absorb(
        &mut self,
        mut key: String,
        mut value: String,
        source: Source,
        strict: bool,
    ) -> Result<(), SettingsError> {
        interpret_negative_setting(&mut key, &mut value);

        let slot = self.values.entry(key.clone()).or_default();
        let already_set = slot.explicit;
        if source == Source::CommandLine || !already_set {
            slot.scalar = value.clone();
        }
        slot.explicit = true;
        slot.multi.push(value.clone());

        match self.schema.get_mut(&key) {
            Some(binding) => {
                // A config line loses to anything already explicit,
                // unless the setting is cumulative.
                let skip = source == Source::ConfigFile
                    && already_set
                    && binding.kind() != SettingKind::List;
                if !skip {
                    binding.write(&value, false);
                }
            }
            None if strict => return Err(SettingsError::UnknownSetting(key)),
            None => debug!(setting = %key, "ignoring unrecognized setting"),
        }
        Ok(())
    }

    fn force(&mut self, name: &str, value: &str) {
        let slot = self.values.entry(name.to_string()).or_default();
        slot.scalar = value.to_string();
        slot.explicit = true;
        slot.multi = vec![value.to_string()];
        if let Some(binding) = self.schema.get_mut(name) {
            binding.write(value, true);
        }
    }
}

impl Settings {
    /// Create an empty store. `app_name` seeds the derived defaults: the
    /// `~/.{app_name}` data directory and the `{app_name}.conf` file name.
    pub fn new(app_name: impl Into<String>) -> Self {
        Settings {
            app_name: app_name.into(),
            state: RwLock::new(State::default()),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    // --- registration ---

    /// Register one setting: its binding is created and seeded from the
    /// default immediately. Registering a name again replaces the binding
    /// (last registrant wins); the value store is never touched.
    ///
    /// Registration belongs to single-threaded startup, before parsing;
    /// re-registering after values have been absorbed leaves the fresh
    /// binding holding only the default.
    pub fn register(&self, def: &SettingDef) {
        self.state.write().register(def);
    }

    pub fn register_all(&self, defs: &[SettingDef]) {
        let mut state = self.state.write();
        for def in defs {
            state.register(def);
        }
    }

    // --- resolution entry points ---

    /// Parse command-line tokens (without the program name) into the
    /// store, clearing any previously absorbed values first. Registered
    /// bindings keep their current contents until a token overwrites
    /// them.
    ///
    /// With `strict` set, the first unrecognized name fails the parse;
    /// otherwise it is recorded, logged at debug level, and ignored.
    pub fn parse_args<I>(&self, args: I, strict: bool) -> Result<(), SettingsError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let pairs = cli::collect_tokens(args);
        let mut state = self.state.write();
        state.values.clear();
        for (key, value) in pairs {
            state.absorb(key, value, Source::CommandLine, strict)?;
        }
        Ok(())
    }

    /// Merge a config file into the store. A missing file contributes
    /// nothing and succeeds; any other read failure, and any malformed
    /// line, is an error. Values already supplied on the command line
    /// keep their scalar resolution; list settings accumulate across
    /// both sources.
    pub fn read_config_file(&self, path: &Path, strict: bool) -> Result<(), SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, skipping");
                return Ok(());
            }
            Err(source) => {
                return Err(SettingsError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let pairs = file::parse_config(&text, path)?;
        {
            let mut state = self.state.write();
            for (key, value) in pairs {
                state.absorb(key, value, Source::ConfigFile, strict)?;
            }
        }
        // The file may have redirected -datadir; resolve it now so a
        // missing directory fails startup instead of first use.
        datadir::datadir(self)?;
        Ok(())
    }

    // --- programmatic writes ---

    /// Overwrite a setting unconditionally: the scalar and the whole
    /// cumulative list are replaced with this one value and the name is
    /// marked explicit. The binding takes a forced write, so forcing an
    /// empty value onto an empty list binding records one empty entry.
    pub fn force_set(&self, name: &str, value: &str) {
        self.state.write().force(name, value);
    }

    /// [`force_set`](Settings::force_set), unless the name is already
    /// explicit. Returns whether the write took effect.
    pub fn soft_set(&self, name: &str, value: &str) -> bool {
        let mut state = self.state.write();
        if state.values.get(name).is_some_and(|slot| slot.explicit) {
            return false;
        }
        state.force(name, value);
        true
    }

    pub fn soft_set_bool(&self, name: &str, on: bool) -> bool {
        self.soft_set(name, if on { "1" } else { "0" })
    }

    // --- accessors ---

    /// Whether any source explicitly supplied this name. An explicit
    /// empty assignment counts; a registered default does not.
    pub fn is_set(&self, name: &str) -> bool {
        self.state
            .read()
            .values
            .get(name)
            .is_some_and(|slot| slot.explicit)
    }

    pub fn get_string(&self, name: &str, default: &str) -> String {
        let state = self.state.read();
        match state.values.get(name) {
            Some(slot) if slot.explicit => slot.scalar.clone(),
            _ => default.to_string(),
        }
    }

    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        let state = self.state.read();
        match state.values.get(name) {
            Some(slot) if slot.explicit => parse_int(&slot.scalar),
            _ => default,
        }
    }

    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        let state = self.state.read();
        match state.values.get(name) {
            Some(slot) if slot.explicit => interpret_bool(&slot.scalar),
            _ => default,
        }
    }

    /// Every raw value supplied for this name, both sources, in supply
    /// order. Empty when the name was never supplied.
    pub fn get_list(&self, name: &str) -> Vec<String> {
        self.state
            .read()
            .values
            .get(name)
            .map(|slot| slot.multi.clone())
            .unwrap_or_default()
    }

    // --- bound reads ---

    /// Current contents of a registered Bool binding, `None` when the
    /// name is unregistered or registered with another kind.
    pub fn bound_bool(&self, name: &str) -> Option<bool> {
        match self.state.read().schema.get(name) {
            Some(Binding::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn bound_int(&self, name: &str) -> Option<i64> {
        match self.state.read().schema.get(name) {
            Some(Binding::Int(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn bound_str(&self, name: &str) -> Option<String> {
        match self.state.read().schema.get(name) {
            Some(Binding::Str(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn bound_list(&self, name: &str) -> Option<Vec<String>> {
        match self.state.read().schema.get(name) {
            Some(Binding::List(items)) => Some(items.clone()),
            _ => None,
        }
    }
}
