use cookie::Cookie;
use serde_json::json;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn download<'a>(&'a self) -> DownloadFixtures<'a> {
        DownloadFixtures { setup: self }
    }
}

pub struct DownloadFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> DownloadFixtures<'a> {
    /// Writes `<name>.<file_type>` into the downloads folder
    pub async fn write_file(
        &self,
        name: &str,
        file_type: &str,
        data: impl AsRef<[u8]>,
    ) -> Result<(), TestError> {
        let path = self
            .setup
            .downloads_folder()
            .join(format!("{}.{}", name, file_type));

        tokio::fs::write(path, data).await?;

        Ok(())
    }

    /// `Cookie` request header value carrying the given `async_downloads` entries
    pub fn cookie_header(&self, entries: &[(&str, &str)]) -> Result<String, TestError> {
        let entries: Vec<_> = entries
            .iter()
            .map(|(name, file_type)| json!({ "name": name, "type": file_type }))
            .collect();
        let value = serde_json::to_string(&entries)?;

        Ok(Cookie::new("async_downloads", value)
            .encoded()
            .stripped()
            .to_string())
    }
}
