//! Settings for the grimoire binary, read from an optional `grimoire` config
//! file (any format the `config` crate understands) overlaid with
//! `GRIMOIRE_`-prefixed environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{GrimoireError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Path to the persisted spell collection.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Address the query endpoint listens on.
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_data_file() -> String {
    String::from("spells.json")
}

fn default_listen() -> String {
    String::from("127.0.0.1:8080")
}

impl Settings {
    pub fn load() -> Result<Self> {
        Config::builder()
            .add_source(File::with_name("grimoire").required(false))
            .add_source(Environment::with_prefix("GRIMOIRE"))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| GrimoireError::Config(e.to_string()))
    }
}
