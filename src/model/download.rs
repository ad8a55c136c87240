use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Availability of a prepared download for the signed in person
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
pub struct DownloadStatusDto {
    /// 200 when the file exists and belongs to the person, 404 otherwise
    pub status: u16,
}

#[derive(Serialize, Deserialize, IntoParams, Debug)]
pub struct DownloadQuery {
    /// File extension of the download, e.g. `csv`
    pub file_type: String,
}
