use std::path::PathBuf;

use encoding_rs::{Encoding, UTF_8};
use sea_orm::DatabaseConnection;

use crate::server::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub downloads: DownloadSettings,
}

/// Where async downloads live and how CSV downloads are encoded on delivery
#[derive(Clone, Debug)]
pub struct DownloadSettings {
    pub folder: PathBuf,
    pub csv_encoding: &'static Encoding,
}

impl DownloadSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            folder: config.downloads_folder.clone(),
            csv_encoding: config.csv_encoding,
        }
    }
}

/// Builds state from a database connection & downloads folder, delivering CSV as UTF-8
impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, folder): (DatabaseConnection, PathBuf)) -> Self {
        Self {
            db,
            downloads: DownloadSettings {
                folder,
                csv_encoding: UTF_8,
            },
        }
    }
}
