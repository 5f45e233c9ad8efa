use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

use crate::errors::EpgError;

// @module: Gzip transport encoding for guide documents

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Whether the buffer starts with a gzip header
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Decompress a gzip payload into UTF-8 text.
///
/// Concatenated gzip members are decoded back to back into one text.
pub fn decompress(bytes: &[u8]) -> Result<String, EpgError> {
    if !is_gzip(bytes) {
        return Err(EpgError::Format("payload is not gzip-compressed".to_string()));
    }

    let mut decoder = MultiGzDecoder::new(bytes);
    let mut raw = Vec::new();
    decoder
        .read_to_end(&mut raw)
        .map_err(|e| EpgError::Format(format!("corrupt gzip stream: {}", e)))?;

    String::from_utf8(raw)
        .map_err(|e| EpgError::Format(format!("decompressed guide is not UTF-8: {}", e)))
}

/// Gzip-compress guide text
pub fn compress(text: &str) -> Result<Vec<u8>, EpgError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .map_err(|e| EpgError::Format(format!("gzip encoding failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| EpgError::Format(format!("gzip encoding failed: {}", e)))
}
