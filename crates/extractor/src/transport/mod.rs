/// Transport boundary module
///
/// The worker speaks line-delimited JSON: one request object per line in,
/// one response object per line out. Every request carries an opaque `id`
/// that is echoed unchanged so the host can correlate responses under
/// out-of-order delivery.
///
/// # Safety Guarantees
///
/// - No fault crosses this boundary unhandled: every code path resolves to
///   an `ok` or `error` response (panics inside parsing included)
/// - Oversized request content is rejected, not processed
pub mod compress;
pub mod handle;
pub mod message;

pub use handle::{handle, handle_raw};
pub use message::{Request, Response};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("content too large: {0} bytes (max: {1} bytes)")]
    ContentTooLarge(usize, usize),

    #[error("malformed request: {0}")]
    BadRequest(String),

    #[error("parser panic: {0}")]
    ParserPanic(String),
}
