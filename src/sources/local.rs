use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};

use crate::errors::EpgError;

use super::DocumentSource;

/// Reads a guide from the local filesystem
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for LocalFileSource {
    async fn fetch(&self) -> Result<Vec<u8>, EpgError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| EpgError::Fetch(format!("{}: {}", self.path.display(), e)))?;
        debug!("Read {} bytes from {:?}", bytes.len(), self.path);
        Ok(bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
