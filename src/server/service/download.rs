//! Delivery of prepared async downloads.
//!
//! Files are only ever handed to the person encoded in their name. A missing file and a file
//! owned by somebody else both surface as [`DownloadError::NotFound`].

use encoding_rs::{Encoding, UTF_8};

use crate::server::{
    error::{download::DownloadError, Error},
    model::{app::DownloadSettings, download::file::AsyncDownloadFile},
};

/// File content ready to be sent to the client
#[derive(Debug)]
pub struct AsyncDownloadContent {
    pub data: Vec<u8>,
    pub content_type: String,
}

pub struct AsyncDownloadService<'a> {
    settings: &'a DownloadSettings,
}

impl<'a> AsyncDownloadService<'a> {
    /// Creates a new instance of [`AsyncDownloadService`]
    pub fn new(settings: &'a DownloadSettings) -> Self {
        Self { settings }
    }

    /// Resolves the download `id`.`file_type` for `person_id`.
    ///
    /// # Returns
    /// - `Ok(AsyncDownloadFile)`: the file exists and belongs to `person_id`
    /// - `Err(Error::DownloadError(DownloadError::NotFound))`: invalid name, missing file or
    ///   file of another person
    /// - `Err(Error::IoError)`: checking the file's existence failed
    pub async fn find_downloadable(
        &self,
        person_id: i32,
        id: &str,
        file_type: &str,
    ) -> Result<AsyncDownloadFile, Error> {
        let not_found = || {
            Error::DownloadError(DownloadError::NotFound {
                id: id.to_string(),
                file_type: file_type.to_string(),
            })
        };

        let file =
            AsyncDownloadFile::new(&self.settings.folder, id, file_type).ok_or_else(not_found)?;

        if !file.is_downloadable_by(person_id).await? {
            return Err(not_found());
        }

        Ok(file)
    }

    /// Returns true if `id`.`file_type` can be downloaded by `person_id`
    pub async fn exists(&self, person_id: i32, id: &str, file_type: &str) -> Result<bool, Error> {
        match self.find_downloadable(person_id, id, file_type).await {
            Ok(_) => Ok(true),
            Err(Error::DownloadError(DownloadError::NotFound { .. })) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Reads a file for delivery, transcoding CSV files into the configured encoding.
    pub async fn read(&self, file: &AsyncDownloadFile) -> Result<AsyncDownloadContent, Error> {
        let data = file.read().await?;

        if file.file_type() != "csv" {
            return Ok(AsyncDownloadContent {
                data,
                content_type: file.content_type().to_string(),
            });
        }

        let encoding = self.settings.csv_encoding.output_encoding();

        Ok(AsyncDownloadContent {
            data: transcode(data, encoding, file),
            content_type: format!("{}; charset={}", file.content_type(), encoding.name()),
        })
    }
}

/// Re-encodes UTF-8 `data` as `encoding`
///
/// Characters `encoding` cannot represent are written as HTML numeric character references.
fn transcode(data: Vec<u8>, encoding: &'static Encoding, file: &AsyncDownloadFile) -> Vec<u8> {
    if encoding == UTF_8 {
        return data;
    }

    let text = String::from_utf8_lossy(&data);
    let (encoded, _, had_errors) = encoding.encode(&text);

    if had_errors {
        tracing::warn!(
            "Download {} contains characters not representable in {}",
            file.filename(),
            encoding.name()
        );
    }

    encoded.into_owned()
}
