/*!
 * Where guide documents come from.
 *
 * A source is either a local file or an http(s) URL. Both are read with a
 * single request: no retry, no backoff. Any failure aborts the run.
 */

use async_trait::async_trait;
use std::fmt::{self, Debug};
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::errors::EpgError;

pub mod http;
pub mod local;

pub use http::HttpSource;
pub use local::LocalFileSource;

/// Common trait for anything that can hand over compressed guide bytes
#[async_trait]
pub trait DocumentSource: Send + Sync + Debug {
    /// Read the whole compressed document
    async fn fetch(&self) -> Result<Vec<u8>, EpgError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Parsed source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Local(PathBuf),
    Remote(Url),
}

impl SourceLocation {
    /// Build the source that reads this location
    pub fn open(&self) -> Box<dyn DocumentSource> {
        match self {
            Self::Local(path) => Box::new(LocalFileSource::new(path.clone())),
            Self::Remote(url) => Box::new(HttpSource::new(url.clone())),
        }
    }
}

impl FromStr for SourceLocation {
    type Err = EpgError;

    fn from_str(location: &str) -> Result<Self, Self::Err> {
        let location = location.trim();
        if location.is_empty() {
            return Err(EpgError::Fetch("empty source location".to_string()));
        }

        if !location.contains("://") {
            return Ok(Self::Local(PathBuf::from(location)));
        }

        let url = Url::parse(location)
            .map_err(|e| EpgError::Fetch(format!("invalid source URL '{}': {}", location, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(Self::Remote(url)),
            "file" => url
                .to_file_path()
                .map(Self::Local)
                .map_err(|_| EpgError::Fetch(format!("invalid file URL '{}'", location))),
            scheme => Err(EpgError::Fetch(format!(
                "unsupported source scheme '{}'",
                scheme
            ))),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{}", url),
        }
    }
}
