use cryptdatum::{decode_header, encode_header, has_header, has_valid_header, DatumFlags, Header};
use std::fs::File;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_header() -> Header {
    Header {
        magic: cryptdatum::MAGIC,
        version: cryptdatum::VERSION,
        flags: DatumFlags::CHECKSUM | DatumFlags::SIGNED,
        timestamp: cryptdatum::MAGIC_DATE + 42,
        opc: 0,
        checksum: 0xDEAD_BEEF_CAFE_F00D,
        size: 128,
        compression_alg: 0,
        encryption_alg: 0,
        signature_type: 3,
        signature_size: 64,
        file_ext: *b"bin\0\0\0\0\0",
        custom: cryptdatum::EMPTY_8,
        delimiter: cryptdatum::DELIMITER,
    }
}

#[test]
fn decode_from_a_real_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_path_buf();

    let header = sample_header();
    let encoded = encode_header(&header);
    {
        let mut f = File::create(&path).unwrap();
        f.write_all(&encoded).unwrap();
        f.write_all(b"payload bytes follow the header").unwrap();
    }

    let bytes = std::fs::read(&path).unwrap();
    assert!(has_header(&bytes));
    assert!(has_valid_header(&bytes));

    let mut f = File::open(&path).unwrap();
    let decoded = decode_header(&mut f).unwrap();
    assert_eq!(decoded, header);
}

#[test]
fn decode_from_file_rejects_short_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_path_buf();
    {
        let mut f = File::create(&path).unwrap();
        f.write_all(&cryptdatum::MAGIC).unwrap();
    }

    let mut f = File::open(&path).unwrap();
    let err = decode_header(&mut f).unwrap_err();
    assert!(matches!(err, cryptdatum::HeaderError::UnexpectedEof { .. }));
}

#[test]
fn draft_header_round_trips_and_validates_regardless_of_other_fields() {
    let mut header = sample_header();
    header.flags = DatumFlags::DRAFT;
    header.timestamp = 0; // would fail MAGIC_DATE check if not short-circuited
    header.checksum = 0;
    let encoded = encode_header(&header);

    assert!(has_valid_header(&encoded));
    let mut r: &[u8] = &encoded;
    assert_eq!(decode_header(&mut r).unwrap(), header);
}

#[test]
fn compromised_header_also_short_circuits() {
    let mut header = sample_header();
    header.flags = DatumFlags::COMPROMISED | DatumFlags::OPC;
    header.opc = 0; // would fail the OPC >= 1 rule if not short-circuited
    let encoded = encode_header(&header);
    assert!(has_valid_header(&encoded));
}

#[test]
fn trailing_payload_bytes_do_not_affect_recognition_or_validation() {
    let header = sample_header();
    let mut bytes = encode_header(&header).to_vec();
    bytes.extend_from_slice(&vec![0xAB; 4096]);
    assert!(has_header(&bytes));
    assert!(has_valid_header(&bytes));
}
