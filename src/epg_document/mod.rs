/*!
 * XMLTV guide documents.
 *
 * - `model`: channels, programmes and the generic element tree
 * - `codec`: markup parsing and serialization
 * - `compression`: gzip transport encoding
 */

pub mod codec;
pub mod compression;
pub mod model;

pub use codec::{parse_document, write_document};
pub use compression::{compress, decompress};
pub use model::{Attribute, Channel, Document, Element, Node, Programme, TextField};

use crate::errors::EpgError;

/// Decompress and parse a gzip-encoded guide
pub fn decode(bytes: &[u8]) -> Result<Document, EpgError> {
    let text = decompress(bytes)?;
    parse_document(&text)
}

/// Serialize and gzip-encode a guide
pub fn encode(document: &Document) -> Result<Vec<u8>, EpgError> {
    let text = write_document(document)?;
    compress(&text)
}
