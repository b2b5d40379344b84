//! Content digests for plugin archives.
//!
//! Every plugin record carries both a SHA-1 and an MD5 of the archive. The
//! updater client reads the MD5; both are kept for compatibility with
//! existing manifests.

use md5::Md5;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read size for streaming digests.
const CHUNK_SIZE: usize = 1024;

/// Both digests of one byte stream, as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digests {
    pub sha1: String,
    pub md5: String,
}

/// Compute both digests over a stream in one pass.
///
/// The stream is read to the end in fixed-size chunks.
pub fn compute_digests<R: Read>(mut reader: R) -> io::Result<Digests> {
    let mut sha1 = Sha1::new();
    let mut md5 = Md5::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sha1.update(&buf[..n]);
        md5.update(&buf[..n]);
    }

    Ok(Digests {
        sha1: hex::encode(sha1.finalize()),
        md5: hex::encode(md5.finalize()),
    })
}

/// Compute both digests of a file's contents.
pub fn digest_file<P: AsRef<Path>>(path: P) -> io::Result<Digests> {
    let file = File::open(path)?;
    compute_digests(file)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";
    const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";

    #[test]
    fn compute_digests___empty_input___matches_known_constants() {
        let digests = compute_digests(Cursor::new(Vec::new())).unwrap();

        assert_eq!(digests.sha1, EMPTY_SHA1);
        assert_eq!(digests.md5, EMPTY_MD5);
    }

    #[test]
    fn compute_digests___known_input___matches_reference() {
        let digests = compute_digests(Cursor::new(b"hello world".to_vec())).unwrap();

        assert_eq!(digests.sha1, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
        assert_eq!(digests.md5, "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn compute_digests___full_length_lowercase_hex() {
        let digests = compute_digests(Cursor::new(vec![0xABu8; 3000])).unwrap();

        assert_eq!(digests.sha1.len(), 40);
        assert_eq!(digests.md5.len(), 32);
        assert!(
            digests
                .sha1
                .chars()
                .chain(digests.md5.chars())
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn digest_file___matches_stream_digest() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("data.bin");
        let contents: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &contents).unwrap();

        let from_file = digest_file(&path).unwrap();
        let from_stream = compute_digests(Cursor::new(contents)).unwrap();

        assert_eq!(from_file, from_stream);
    }

    #[test]
    fn digest_file___missing_file___returns_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let err = digest_file(temp_dir.path().join("missing.jar")).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    proptest! {
        /// Property: digesting the same bytes twice gives the same result,
        /// regardless of chunk boundaries
        #[test]
        fn proptest_digests_are_idempotent(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let first = compute_digests(Cursor::new(data.clone())).unwrap();
            let second = compute_digests(Cursor::new(data)).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
