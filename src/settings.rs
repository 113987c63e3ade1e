use crate::notes::{UserRecord, DEFAULT_STORE_PATH};
use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, File, FileFormat};
use serde::Deserialize;

#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub http: Http,
    pub log: Log,
    pub store: Store,
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct Store {
    pub backend: StoreBackend,
    #[serde(default = "default_store_path")]
    pub path: String,
    // seed records, only read by the memory backend
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

fn default_store_path() -> String {
    String::from(DEFAULT_STORE_PATH)
}

#[cfg(debug_assertions)]
const DEFAULT_SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const DEFAULT_SETTINGS_PATH: &str = "settings/release.toml";

/// Loads the TOML settings file named on the command line, or the build
/// profile's default.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(DEFAULT_SETTINGS_PATH);

    Config::builder()
        .add_source(File::with_name(path).format(FileFormat::Toml))
        .build()
        .and_then(|config| config.try_deserialize())
        .with_context(|| format!("loading settings from {path}"))
}
