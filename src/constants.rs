//! Frozen wire constants for the Cryptdatum (CDT) header.
//!
//! Every value here is part of the on-disk contract described in
//! `header.rs`. None of them may change meaning across a minor version —
//! see the backward-compatibility promise on [`crate::flags::DatumFlags`].

/// Magic byte tag at offset 0, identifying the container format.
pub const MAGIC: [u8; 8] = [0xA7, 0xF6, 0xE5, 0xD4, 0xC3, 0xB2, 0xA1, 0xE1];

/// Delimiter byte tag at offset 72, terminating the header.
pub const DELIMITER: [u8; 8] = [0xC8, 0xB7, 0xA6, 0xE5, 0xD4, 0xC3, 0xB2, 0xF1];

/// Fixed byte size of a Cryptdatum header.
///
/// An older generation of the format used a 64-byte header with a
/// different magic; that layout is not supported here.
pub const HEADER_SIZE: usize = 80;

/// Current format version written by this implementation.
pub const VERSION: u16 = 1;

/// Minimum version this implementation will accept.
pub const MIN_VERSION: u16 = 1;

/// Earliest permissible timestamp (ns since Unix epoch) for a non-draft,
/// non-compromised header: 2022-05-10T04:03:02.000000001Z.
pub const MAGIC_DATE: u64 = 1_652_155_382_000_000_001;

/// Sentinel "unset" value for 8-byte fields.
pub const EMPTY_8: [u8; 8] = [0u8; 8];
