//! # cryptdatum — header codec for the Cryptdatum (CDT) container format
//!
//! Format guarantees:
//! - The header is a fixed 80-byte prefix; every multi-byte integer field
//!   is little-endian, never negotiated.
//! - A byte sequence is a header only if it carries the frozen `MAGIC`
//!   prefix and `DELIMITER` suffix — see [`has_header`].
//! - A header is valid only if it additionally satisfies the flag-gated
//!   cross-field invariants of [`has_valid_header`]; `DRAFT` and
//!   `COMPROMISED` relax every check after the version check.
//! - Decoding never validates, and validating never decodes into a usable
//!   record — [`decode_header`] and [`has_valid_header`] are independent,
//!   so tooling can inspect ill-formed headers for diagnostics.
//! - Flags are a 64-bit bitmask; future revisions may add bits but must
//!   never repurpose an existing one.

pub mod constants;
pub mod error;
pub mod flags;
pub mod header;
pub mod reader;

// Flat re-exports for the most common types.
pub use constants::{DELIMITER, EMPTY_8, HEADER_SIZE, MAGIC, MAGIC_DATE, MIN_VERSION, VERSION};
pub use error::HeaderError;
pub use flags::DatumFlags;
pub use header::{decode_header, encode_header, has_header, has_valid_header, Header};
pub use reader::{read_full, Reader};
