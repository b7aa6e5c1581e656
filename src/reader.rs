//! Minimal reader capability.
//!
//! The decoder needs exactly one thing from its input: "fill a
//! caller-provided buffer, or tell me fewer bytes were available." That's
//! [`Reader::read`] — deliberately narrower than `std::io::Read` so the
//! contract the decoder depends on is visible at a glance, but implemented
//! for every `std::io::Read` via a blanket impl so byte slices,
//! `std::fs::File`, and any socket type (`TcpStream`, ...) all plug in for
//! free. No seek is required; the reader owns no state the decoder depends
//! on beyond its own next-byte cursor.
//!
//! The upstream source's file-reader implementation poked at raw file
//! handles with unsafe, platform-specific checks to detect short reads.
//! That is not part of the contract here: `read_full` below relies purely
//! on `Read::read`'s own end-of-input signalling (a `0`-byte read with a
//! non-empty buffer means EOF), which is portable and safe.

use std::io;

use crate::error::HeaderError;

/// A capability to fill a caller-provided buffer from a byte source.
///
/// Mirrors `std::io::Read::read`: a single call may return fewer bytes
/// than `buf.len()`, and `Ok(0)` on a non-empty buffer signals
/// end-of-input. Callers that need exactly N bytes should use
/// [`read_full`] rather than assuming one call suffices.
pub trait Reader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<T: io::Read> Reader for T {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(self, buf)
    }
}

/// Fill `buf` completely, issuing as many `Reader::read` calls as needed.
///
/// Returns [`HeaderError::UnexpectedEof`] if the source signals
/// end-of-input (`read` returns `Ok(0)`) before `buf` is full.
pub fn read_full<R: Reader + ?Sized>(r: &mut R, buf: &mut [u8]) -> Result<(), HeaderError> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = r.read(&mut buf[filled..])?;
        if n == 0 {
            return Err(HeaderError::UnexpectedEof {
                needed: buf.len(),
                got: filled,
            });
        }
        filled += n;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ChunkedReader {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
    }

    impl Reader for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let remaining = self.data.len() - self.pos;
            let n = remaining.min(buf.len()).min(self.chunk);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn read_full_assembles_across_short_reads() {
        let mut r = ChunkedReader {
            data: (0u8..40).collect(),
            pos: 0,
            chunk: 3,
        };
        let mut buf = [0u8; 40];
        read_full(&mut r, &mut buf).unwrap();
        assert_eq!(&buf[..], &(0u8..40).collect::<Vec<u8>>()[..]);
    }

    #[test]
    fn read_full_reports_eof_with_progress() {
        let mut r = ChunkedReader {
            data: vec![1, 2, 3],
            pos: 0,
            chunk: 2,
        };
        let mut buf = [0u8; 10];
        let err = read_full(&mut r, &mut buf).unwrap_err();
        match err {
            HeaderError::UnexpectedEof { needed, got } => {
                assert_eq!(needed, 10);
                assert_eq!(got, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn byte_slice_implements_reader() {
        let data = [1u8, 2, 3, 4];
        let mut slice: &[u8] = &data;
        let mut buf = [0u8; 4];
        read_full(&mut slice, &mut buf).unwrap();
        assert_eq!(buf, data);
    }
}
