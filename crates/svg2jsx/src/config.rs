//! Types for the configuration file usable by svg2jsx
use std::{
    env::current_dir,
    fs::read_to_string,
    io::{Error, ErrorKind},
    path::PathBuf,
};

use etcetera::{choose_base_strategy, BaseStrategy};
use serde::{Deserialize, Serialize};
use svg2jsx_transform::Options;

/// The address the API is served from when none is configured
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";
/// The number of threads handling requests when none is configured
pub const DEFAULT_THREADS: usize = 4;

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
/// The configuration for serving the API
pub struct Serve {
    /// The socket address to listen on, such as `127.0.0.1:3000`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// The number of threads handling requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The config for the CLI usage of svg2jsx
pub struct Config {
    /// The options used for each conversion, unless overridden by a flag or request.
    pub options: Option<Options>,
    /// The options for serving the API.
    pub serve: Option<Serve>,
}

impl Config {
    fn load_local() -> std::io::Result<(String, PathBuf)> {
        let mut path = current_dir()?;
        path.push("svg2jsxrc.json");
        Ok((read_to_string(&path)?, path))
    }

    fn load_base() -> std::io::Result<(String, PathBuf)> {
        let mut path = choose_base_strategy()
            .map_err(|err| Error::new(ErrorKind::NotFound, err.to_string()))?
            .config_dir();
        path.push("svg2jsx");
        path.push("config.json");
        Ok((read_to_string(&path)?, path))
    }

    /// Tries loading the configuration from well-known paths
    ///
    /// # Errors
    /// When the config is missing, or when the config exists but cannot be parsed
    pub fn load() -> std::io::Result<Self> {
        let (file, path) = Self::load_local().or_else(|_| Self::load_base())?;
        log::debug!("loading config from {}", path.to_string_lossy());
        Self::parse(&file).map_err(|err| {
            Error::new(
                ErrorKind::InvalidData,
                format!(
                    "Configuration at {} cannot be parsed: {err}",
                    path.to_string_lossy()
                ),
            )
        })
    }

    /// Parses a configuration from json
    ///
    /// # Errors
    /// When the json doesn't describe a configuration
    pub fn parse(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Returns the configured options, or the library defaults
    pub fn options(&self) -> Options {
        self.options.unwrap_or_default()
    }

    /// Returns a copy of the configuration with every section filled in
    pub fn resolved(&self) -> Self {
        let serve = self.serve.clone().unwrap_or_default();
        Self {
            options: Some(self.options()),
            serve: Some(Serve {
                address: Some(serve.address.unwrap_or_else(|| DEFAULT_ADDRESS.to_string())),
                threads: Some(serve.threads.unwrap_or(DEFAULT_THREADS)),
            }),
        }
    }
}

#[test]
fn serde() -> anyhow::Result<()> {
    let config = Config::parse(
        r#"{
        "options": { "typescript": true },
        "serve": { "threads": 8 }
    }"#,
    )?;

    assert_eq!(
        config.options(),
        Options {
            typescript: true,
            ..Options::default()
        }
    );
    assert_eq!(
        serde_json::to_string(&config)?,
        String::from(
            r#"{"options":{"typescript":true,"cleanupIds":false,"memo":false,"jsxSingleQuote":false},"serve":{"threads":8}}"#
        ),
    );
    Ok(())
}

#[test]
fn resolved() {
    let config = Config::default().resolved();
    assert_eq!(config.options, Some(Options::default()));
    assert_eq!(
        config.serve,
        Some(Serve {
            address: Some(DEFAULT_ADDRESS.to_string()),
            threads: Some(DEFAULT_THREADS),
        })
    );
}

#[test]
fn parse_error() {
    assert!(Config::parse(r#"{ "options": { "typescript": "yes" } }"#).is_err());
}
