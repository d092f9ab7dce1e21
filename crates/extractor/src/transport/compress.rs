//! Compress — best-effort text compression for transport efficiency.
//!
//! Unrelated to parsing: the host may ask the worker to shrink arbitrary
//! text before it leaves the component. When the capability is compiled out
//! the original text is returned verbatim, tagged as uncompressed.

use super::message::CompressionFormat;

/// Compress `content` if the capability is available.
#[cfg(feature = "lz")]
pub fn compress(content: &str) -> (String, CompressionFormat) {
    (lz_str::compress_to_utf16(content), CompressionFormat::LzUtf16)
}

#[cfg(not(feature = "lz"))]
pub fn compress(content: &str) -> (String, CompressionFormat) {
    (content.to_owned(), CompressionFormat::Json)
}
