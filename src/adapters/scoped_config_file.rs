use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use url::Url;

use crate::domain::AppError;

/// Temporary atlas project file, removed from disk when dropped.
#[derive(Debug)]
pub struct ScopedConfigFile {
    file: NamedTempFile,
    url: String,
}

impl ScopedConfigFile {
    /// Write `content` to a fresh file ending in `.{extension}`.
    pub fn create(content: &str, extension: &str) -> Result<Self, AppError> {
        let suffix = format!(".{}", extension);
        let mut file = tempfile::Builder::new().prefix("atlas-").suffix(&suffix).tempfile()?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        let url = Url::from_file_path(file.path())
            .map_err(|()| {
                AppError::InternalError(format!(
                    "Temporary config path is not absolute: {}",
                    file.path().display()
                ))
            })?
            .to_string();

        Ok(Self { file, url })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// `file://` URL accepted by `atlas --config`.
    pub fn url(&self) -> &str {
        &self.url
    }
}
