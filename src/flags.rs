//! Typed flag set for the header's `flags` field.
//!
//! `flags` is a 64-bit bitmask on the wire. `DatumFlags` wraps it in a
//! `bitflags!`-generated type so callers get constant-time membership
//! tests (`contains`) instead of hand-rolled `& mask != 0` checks, while
//! still round-tripping losslessly to the raw `u64` via [`DatumFlags::bits`]
//! and [`DatumFlags::from_bits_retain`].
//!
//! Bit assignments are frozen: future revisions may add new bits but must
//! never repurpose an existing one. `from_bits_retain` (rather than
//! `from_bits`) is used when decoding so an unrecognized high bit set by a
//! newer producer survives a decode/encode round trip unchanged instead of
//! being silently dropped.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DatumFlags: u64 {
        /// Artifact is marked as invalid by its producer.
        const INVALID     = 1 << 0;
        /// In-progress; relaxes validation.
        const DRAFT       = 1 << 1;
        /// No payload present.
        const EMPTY       = 1 << 2;
        /// Checksum field carries a value.
        const CHECKSUM    = 1 << 3;
        /// Operation counter in use.
        const OPC         = 1 << 4;
        /// Payload is compressed; `compression_alg` is set.
        const COMPRESSED  = 1 << 5;
        /// Payload is encrypted; `encryption_alg` is set.
        const ENCRYPTED   = 1 << 6;
        /// Payload can be written out under `file_ext`.
        const EXTRACTABLE = 1 << 7;
        /// Artifact is signed; `signature_type` is set.
        const SIGNED      = 1 << 8;
        /// Payload permits streaming decode.
        const STREAMABLE  = 1 << 9;
        /// `custom` field carries meaning.
        const CUSTOM      = 1 << 10;
        /// Producer flags integrity as suspect.
        const COMPROMISED = 1 << 11;
    }
}

impl DatumFlags {
    /// True when either `DRAFT` or `COMPROMISED` is set — the validator
    /// short-circuits its cross-field checks in this case.
    #[inline]
    pub fn relaxes_validation(self) -> bool {
        self.intersects(DatumFlags::DRAFT | DatumFlags::COMPROMISED)
    }

    /// True when the producer has asserted, in any way, that this artifact
    /// should not be trusted at face value: `INVALID`, `DRAFT`, or
    /// `COMPROMISED`. The validator's boolean contract conflates these with
    /// a fully-valid header; this predicate lets a caller tell them apart
    /// without re-deriving the bit logic.
    #[inline]
    pub fn is_flagged_unreliable(self) -> bool {
        self.intersects(DatumFlags::INVALID | DatumFlags::DRAFT | DatumFlags::COMPROMISED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_raw_bits() {
        let f = DatumFlags::DRAFT | DatumFlags::SIGNED;
        assert_eq!(DatumFlags::from_bits_retain(f.bits()), f);
    }

    #[test]
    fn unknown_high_bits_survive_round_trip() {
        let raw = (1u64 << 40) | DatumFlags::CUSTOM.bits();
        let f = DatumFlags::from_bits_retain(raw);
        assert!(f.contains(DatumFlags::CUSTOM));
        assert_eq!(f.bits(), raw);
    }

    #[test]
    fn relaxes_validation_covers_draft_and_compromised() {
        assert!(DatumFlags::DRAFT.relaxes_validation());
        assert!(DatumFlags::COMPROMISED.relaxes_validation());
        assert!(!DatumFlags::SIGNED.relaxes_validation());
    }

    #[test]
    fn is_flagged_unreliable_includes_invalid() {
        assert!(DatumFlags::INVALID.is_flagged_unreliable());
        assert!(!DatumFlags::SIGNED.is_flagged_unreliable());
    }
}
