//! Environment based server configuration.

use std::path::PathBuf;

use encoding_rs::Encoding;

use crate::server::error::config::ConfigError;

pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub static DEFAULT_DOWNLOADS_FOLDER: &str = "tmp/downloads";
pub static DEFAULT_CSV_ENCODING: &str = "UTF-8";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: String,
    /// Folder async download files are written to and served from
    pub downloads_folder: PathBuf,
    /// Character encoding CSV downloads are delivered in
    pub csv_encoding: &'static Encoding,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            downloads_folder: PathBuf::from(optional(
                "DOWNLOADS_FOLDER",
                DEFAULT_DOWNLOADS_FOLDER,
            )),
            csv_encoding: parse_csv_encoding(&optional("CSV_ENCODING", DEFAULT_CSV_ENCODING))?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Resolves an encoding label such as `ISO-8859-1` or `UTF-8`.
///
/// Labels follow the WHATWG Encoding Standard, so `ISO-8859-1` resolves to `windows-1252`
/// which is a superset of it for all printable characters.
pub fn parse_csv_encoding(label: &str) -> Result<&'static Encoding, ConfigError> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| ConfigError::InvalidEnvValue {
        var: "CSV_ENCODING".to_string(),
        reason: format!("unknown character encoding {:?}", label),
    })
}
