use std::path::{Path, PathBuf};

use chrono::Utc;

/// Longest file name, extension included, most filesystems accept
const MAX_FILE_NAME_LEN: usize = 255;

/// A prepared download in the downloads folder.
///
/// Files are named `<name>_<unix timestamp>-<person id>.<file type>`, the trailing person ID
/// is the owner of the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsyncDownloadFile {
    folder: PathBuf,
    filename: String,
    file_type: String,
}

impl AsyncDownloadFile {
    /// Builds the name of a new download for `person_id`.
    pub fn create_name(name: &str, person_id: i32) -> String {
        format!(
            "{}_{}-{}",
            parameterize(name),
            Utc::now().timestamp(),
            person_id
        )
    }

    /// Resolves a download by filename & file type.
    ///
    /// Returns `None` if either contains characters that could address a path outside of
    /// `folder` or the resulting file name is too long to exist.
    pub fn new(folder: &Path, filename: &str, file_type: &str) -> Option<Self> {
        if !is_valid_filename(filename) || !is_valid_file_type(file_type) {
            return None;
        }

        if filename.len() + 1 + file_type.len() > MAX_FILE_NAME_LEN {
            return None;
        }

        Some(Self {
            folder: folder.to_path_buf(),
            filename: filename.to_string(),
            file_type: file_type.to_string(),
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn full_path(&self) -> PathBuf {
        self.folder
            .join(format!("{}.{}", self.filename, self.file_type))
    }

    /// Person ID encoded at the end of the filename, if any.
    pub fn person_id(&self) -> Option<i32> {
        let (_, id) = self.filename.rsplit_once('-')?;

        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        id.parse().ok()
    }

    pub fn is_owned_by(&self, person_id: i32) -> bool {
        self.person_id() == Some(person_id)
    }

    pub async fn exists(&self) -> Result<bool, std::io::Error> {
        tokio::fs::try_exists(self.full_path()).await
    }

    /// Returns true if the file exists and belongs to `person_id`.
    pub async fn is_downloadable_by(&self, person_id: i32) -> Result<bool, std::io::Error> {
        if !self.is_owned_by(person_id) {
            return Ok(false);
        }

        self.exists().await
    }

    /// Writes the file, creating the downloads folder if needed.
    pub async fn write(&self, data: impl AsRef<[u8]>) -> Result<(), std::io::Error> {
        tokio::fs::create_dir_all(&self.folder).await?;
        tokio::fs::write(self.full_path(), data).await
    }

    pub async fn read(&self) -> Result<Vec<u8>, std::io::Error> {
        tokio::fs::read(self.full_path()).await
    }

    /// MIME type served for the file type.
    pub fn content_type(&self) -> &'static str {
        match self.file_type.as_str() {
            "csv" => "text/csv",
            "txt" => "text/plain",
            "json" => "application/json",
            "pdf" => "application/pdf",
            "vcf" => "text/vcard",
            "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            _ => "application/octet-stream",
        }
    }
}

fn is_valid_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains("..")
        && filename
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}

fn is_valid_file_type(file_type: &str) -> bool {
    !file_type.is_empty()
        && file_type.len() <= 10
        && file_type
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Lowercases `name` and joins its alphanumeric runs with `-`.
fn parameterize(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
