//! Configuration file support for emojipick.
//!
//! Configuration is loaded from `~/.config/emojipick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/emojipick/config.toml
//! catalog = "~/emoji/custom.json"
//! columns = 10
//! toolbar_bottom = false
//! copy_to_clipboard = true
//! strict_invocations = false
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::picker::InvocationPolicy;

pub const DEFAULT_COLUMNS: usize = 8;
pub const MAX_COLUMNS: usize = 32;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to load instead of the bundled one
    pub catalog: Option<PathBuf>,

    /// Width of the item grid in cells
    pub columns: Option<usize>,

    /// The toolbar sits at the bottom of the screen
    pub toolbar_bottom: bool,

    /// Also copy chosen items to the system clipboard
    pub copy_to_clipboard: bool,

    /// Panic on host contract violations instead of ignoring them
    pub strict_invocations: Option<bool>,
}

/// Flags parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    pub catalog: Option<PathBuf>,
    pub columns: Option<usize>,
    pub toolbar_bottom: bool,
    pub copy_to_clipboard: bool,
}

impl CliArgs {
    /// Parse flags, skipping the program name. Unknown flags are ignored.
    pub fn parse(args: &[String]) -> Self {
        let mut cli = Self::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--catalog" | "-c" => {
                    if i + 1 < args.len() {
                        cli.catalog = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                        continue;
                    } else {
                        eprintln!("Warning: --catalog requires a path argument");
                    }
                }
                "--columns" => {
                    if let Some(n) = args.get(i + 1).and_then(|v| v.parse().ok()) {
                        cli.columns = Some(n);
                        i += 2;
                        continue;
                    } else {
                        eprintln!("Warning: --columns requires a number");
                    }
                }
                "--toolbar-bottom" => cli.toolbar_bottom = true,
                "--copy" => cli.copy_to_clipboard = true,
                _ => {
                    // Unknown flag, ignore
                }
            }
            i += 1;
        }

        cli
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("emojipick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values; switches can
    /// only turn options on.
    pub fn with_overrides(mut self, cli: CliArgs) -> Self {
        if cli.catalog.is_some() {
            self.catalog = cli.catalog;
        }
        if cli.columns.is_some() {
            self.columns = cli.columns;
        }
        self.toolbar_bottom |= cli.toolbar_bottom;
        self.copy_to_clipboard |= cli.copy_to_clipboard;
        self
    }

    /// Catalog path, falling back to `EMOJIPICK_CATALOG`. `None` means the bundled catalog.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| std::env::var("EMOJIPICK_CATALOG").ok().map(PathBuf::from))
            .map(expand_home)
    }

    /// Grid width, clamped to `1..=MAX_COLUMNS`.
    pub fn columns(&self) -> usize {
        self.columns.unwrap_or(DEFAULT_COLUMNS).clamp(1, MAX_COLUMNS)
    }

    pub fn invocation_policy(&self) -> InvocationPolicy {
        match self.strict_invocations {
            Some(true) => InvocationPolicy::Strict,
            Some(false) => InvocationPolicy::Lenient,
            None => InvocationPolicy::default(),
        }
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    if let (Ok(rest), Some(home)) = (path.strip_prefix("~"), dirs::home_dir()) {
        return home.join(rest);
    }
    path
}
