//! Header codec — recognizer, validator, and decoder for the 80-byte
//! Cryptdatum header.
//!
//! # On-disk layout (80 bytes, all multi-byte integers little-endian)
//!
//! ```text
//! Offset  Size  Field
//!    0      8   magic            = MAGIC
//!    8      2   version          (LE u16)
//!   10      8   flags            (LE u64, see `flags` module)
//!   18      8   timestamp        Unix ns (LE u64)
//!   26      4   opc              operation counter (LE u32)
//!   30      8   checksum         opaque; CRC64 per format, LE u64 here
//!   38      8   size             total artifact bytes incl. header (LE u64)
//!   46      2   compression_alg  (LE u16)
//!   48      2   encryption_alg   (LE u16)
//!   50      2   signature_type   (LE u16)
//!   52      4   signature_size   (LE u32)
//!   56      8   file_ext         printable ASCII, 0x00-padded
//!   64      8   custom           opaque
//!   72      8   delimiter        = DELIMITER
//! ```
//!
//! # Endianness
//! Every numeric field is little-endian. MAGIC, DELIMITER, `file_ext`, and
//! `custom` are raw byte arrays, not subject to endian transformation.
//!
//! # Three operations, one byte window
//! [`has_header`] is a cheap structural probe. [`has_valid_header`] runs
//! every cross-field invariant on top of it. [`decode_header`] parses the
//! window into a [`Header`] without validating it — validation is a
//! separate, optional step so tooling can inspect ill-formed headers for
//! diagnostics.

use crate::constants::{DELIMITER, EMPTY_8, HEADER_SIZE, MAGIC, MIN_VERSION};
use crate::error::HeaderError;
use crate::flags::DatumFlags;
use crate::reader::{read_full, Reader};

/// A decoded Cryptdatum header. Immutable once returned by [`decode_header`];
/// carries no reference to the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 8],
    pub version: u16,
    pub flags: DatumFlags,
    pub timestamp: u64,
    pub opc: u32,
    pub checksum: u64,
    pub size: u64,
    pub compression_alg: u16,
    pub encryption_alg: u16,
    pub signature_type: u16,
    pub signature_size: u32,
    pub file_ext: [u8; 8],
    pub custom: [u8; 8],
    pub delimiter: [u8; 8],
}

impl Header {
    /// True if the `CHECKSUM` flag is set and the checksum field is not the
    /// all-zero sentinel. Exposed as a predicate rather than an `Option`
    /// since the wire bytes are always present.
    #[inline]
    pub fn has_checksum(&self) -> bool {
        self.flags.contains(DatumFlags::CHECKSUM) && self.checksum != 0
    }

    /// True if the `CUSTOM` flag is set and the custom field is not the
    /// all-zero sentinel.
    #[inline]
    pub fn has_custom(&self) -> bool {
        self.flags.contains(DatumFlags::CUSTOM) && self.custom != EMPTY_8
    }

    /// True when INVALID, DRAFT, or COMPROMISED is set — see
    /// [`DatumFlags::is_flagged_unreliable`]. Distinct from
    /// `has_valid_header`'s boolean contract, which treats a
    /// DRAFT/COMPROMISED header as simply "valid".
    #[inline]
    pub fn is_flagged_unreliable(&self) -> bool {
        self.flags.is_flagged_unreliable()
    }
}

// ── Recognizer ───────────────────────────────────────────────────────────────

/// Cheap structural test: does `bytes` begin with a plausible Cryptdatum
/// header?
///
/// True iff `bytes` is at least [`HEADER_SIZE`] long, `bytes[0..8] == MAGIC`,
/// and `bytes[72..80] == DELIMITER`. Never allocates, never fails — a
/// too-small buffer is reported as `false`, not an error.
pub fn has_header(bytes: &[u8]) -> bool {
    if bytes.len() < HEADER_SIZE {
        return false;
    }
    bytes[0..8] == MAGIC && bytes[72..80] == DELIMITER
}

// ── Validator ────────────────────────────────────────────────────────────────

/// Full semantic test: does `bytes` satisfy every cross-field invariant,
/// on top of the recognizer?
///
/// Check order: magic/delimiter → version → DRAFT/COMPROMISED
/// short-circuit → timestamp → OPC → CHECKSUM → EMPTY-gated cluster (size,
/// compression, encryption, extractable) → SIGNED. All orderings that reach
/// the same boolean conclusion are equivalent; this order only matters for
/// which check is "first to fail" in diagnostics.
pub fn has_valid_header(bytes: &[u8]) -> bool {
    if !has_header(bytes) {
        return false;
    }
    // has_header guaranteed bytes.len() >= HEADER_SIZE.
    let buf: [u8; HEADER_SIZE] = bytes[..HEADER_SIZE].try_into().unwrap();
    let header = parse_fields(&buf);
    validate(&header)
}

fn validate(header: &Header) -> bool {
    if header.version < MIN_VERSION {
        return false;
    }

    // DRAFT/COMPROMISED relax every remaining check: the producer is
    // declaring the artifact incomplete or untrustworthy, and asking the
    // validator not to second-guess the rest of the fields.
    if header.flags.relaxes_validation() {
        return true;
    }

    if header.timestamp < crate::constants::MAGIC_DATE {
        return false;
    }

    if header.flags.contains(DatumFlags::OPC) && header.opc < 1 {
        return false;
    }

    if header.flags.contains(DatumFlags::CHECKSUM) && header.checksum == 0 {
        return false;
    }

    // Preserved bit-for-bit: the EMPTY gate on these checks reads backwards
    // (compression/encryption/extractable would make more sense
    // unconditionally, or gated on their own flags only), but it's kept
    // for wire compatibility.
    if header.flags.contains(DatumFlags::EMPTY) {
        if header.size < 1 {
            return false;
        }
        if header.flags.contains(DatumFlags::COMPRESSED) && header.compression_alg < 1 {
            return false;
        }
        if header.flags.contains(DatumFlags::ENCRYPTED) && header.encryption_alg < 1 {
            return false;
        }
        if header.flags.contains(DatumFlags::EXTRACTABLE) && header.file_ext == EMPTY_8 {
            return false;
        }
    }

    if header.flags.contains(DatumFlags::SIGNED) && header.signature_type < 1 {
        return false;
    }

    true
}

// ── Decoder ──────────────────────────────────────────────────────────────────

/// Parse a Cryptdatum header from `reader`.
///
/// Reads exactly [`HEADER_SIZE`] bytes (possibly across multiple
/// `Reader::read` calls). Fails with [`HeaderError::UnexpectedEof`] if
/// fewer are available, or [`HeaderError::NoHeader`] if the recognizer
/// rejects the bytes. Does **not** run the validator — callers that want
/// both should call [`has_valid_header`] separately (or construct a
/// [`Header`] and check its fields directly).
///
/// The 80-byte window is read once into a stack buffer and every field is
/// sliced from it; no field is re-read from `reader`.
pub fn decode_header<R: Reader + ?Sized>(reader: &mut R) -> Result<Header, HeaderError> {
    let mut buf = [0u8; HEADER_SIZE];
    read_full(reader, &mut buf)?;

    if !has_header(&buf) {
        return Err(HeaderError::NoHeader);
    }

    Ok(parse_fields(&buf))
}

/// Encode a [`Header`] back to its 80-byte wire form.
///
/// Exists so `decode_header(&encode_header(h)) == h` and so tests and the
/// CLI can build fixtures; it is not a streaming writer and carries no
/// reader-abstraction counterpart.
pub fn encode_header(header: &Header) -> [u8; HEADER_SIZE] {
    let mut buf = [0u8; HEADER_SIZE];
    buf[0..8].copy_from_slice(&MAGIC);
    buf[8..10].copy_from_slice(&header.version.to_le_bytes());
    buf[10..18].copy_from_slice(&header.flags.bits().to_le_bytes());
    buf[18..26].copy_from_slice(&header.timestamp.to_le_bytes());
    buf[26..30].copy_from_slice(&header.opc.to_le_bytes());
    buf[30..38].copy_from_slice(&header.checksum.to_le_bytes());
    buf[38..46].copy_from_slice(&header.size.to_le_bytes());
    buf[46..48].copy_from_slice(&header.compression_alg.to_le_bytes());
    buf[48..50].copy_from_slice(&header.encryption_alg.to_le_bytes());
    buf[50..52].copy_from_slice(&header.signature_type.to_le_bytes());
    buf[52..56].copy_from_slice(&header.signature_size.to_le_bytes());
    buf[56..64].copy_from_slice(&header.file_ext);
    buf[64..72].copy_from_slice(&header.custom);
    buf[72..80].copy_from_slice(&DELIMITER);
    buf
}

/// Slice every field out of an 80-byte window. Does not check magic,
/// delimiter, or version — callers (`decode_header`, `has_valid_header`)
/// are responsible for recognizer/validator checks before or after calling
/// this.
fn parse_fields(buf: &[u8; HEADER_SIZE]) -> Header {
    Header {
        magic: buf[0..8].try_into().unwrap(),
        version: u16::from_le_bytes(buf[8..10].try_into().unwrap()),
        flags: DatumFlags::from_bits_retain(u64::from_le_bytes(buf[10..18].try_into().unwrap())),
        timestamp: u64::from_le_bytes(buf[18..26].try_into().unwrap()),
        opc: u32::from_le_bytes(buf[26..30].try_into().unwrap()),
        checksum: u64::from_le_bytes(buf[30..38].try_into().unwrap()),
        size: u64::from_le_bytes(buf[38..46].try_into().unwrap()),
        compression_alg: u16::from_le_bytes(buf[46..48].try_into().unwrap()),
        encryption_alg: u16::from_le_bytes(buf[48..50].try_into().unwrap()),
        signature_type: u16::from_le_bytes(buf[50..52].try_into().unwrap()),
        signature_size: u32::from_le_bytes(buf[52..56].try_into().unwrap()),
        file_ext: buf[56..64].try_into().unwrap(),
        custom: buf[64..72].try_into().unwrap(),
        delimiter: buf[72..80].try_into().unwrap(),
    }
}
