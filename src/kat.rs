//! NIST Lightweight Cryptography known-answer-test (KAT) files.
//!
//! The LWC project distributes per-candidate vector files
//! (`LWC_AEAD_KAT_128_96.txt`) of blank-line-separated records:
//!
//! ```text
//! Count = 1
//! Key = 000102030405060708090A0B0C0D0E0F
//! Nonce = 000102030405060708090A0B
//! PT =
//! AD =
//! CT = ...
//! ```
//!
//! All values are ASCII hex; `PT` and `AD` may be empty; `CT` is the
//! ciphertext with the authentication tag appended. This module only
//! parses the format - running the vectors against the cipher is the job
//! of the integration tests.

use std::io::{BufRead, BufReader, Read};

use crate::{Error, Result};

/// One record of an LWC AEAD KAT file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KatRecord {
    /// 1-based record number from the `Count` field.
    pub count: u32,
    /// Secret key.
    pub key: Vec<u8>,
    /// Public nonce.
    pub nonce: Vec<u8>,
    /// Plaintext.
    pub pt: Vec<u8>,
    /// Associated data.
    pub ad: Vec<u8>,
    /// Ciphertext followed by the authentication tag.
    pub ct: Vec<u8>,
}

#[derive(Default)]
struct Builder {
    count: Option<u32>,
    key: Option<Vec<u8>>,
    nonce: Option<Vec<u8>>,
    pt: Option<Vec<u8>>,
    ad: Option<Vec<u8>>,
    ct: Option<Vec<u8>>,
}

impl Builder {
    fn is_empty(&self) -> bool {
        self.count.is_none()
            && self.key.is_none()
            && self.nonce.is_none()
            && self.pt.is_none()
            && self.ad.is_none()
            && self.ct.is_none()
    }

    fn finish(self) -> Result<KatRecord> {
        Ok(KatRecord {
            count: self.count.ok_or(Error::Parse("record missing Count"))?,
            key: self.key.ok_or(Error::Parse("record missing Key"))?,
            nonce: self.nonce.ok_or(Error::Parse("record missing Nonce"))?,
            pt: self.pt.ok_or(Error::Parse("record missing PT"))?,
            ad: self.ad.ok_or(Error::Parse("record missing AD"))?,
            ct: self.ct.ok_or(Error::Parse("record missing CT"))?,
        })
    }
}

/// Parse every record of a KAT stream.
///
/// Unknown field names are rejected rather than skipped: a typo in a
/// vector file should fail loudly, not silently weaken the test.
pub fn parse<R: Read>(reader: R) -> Result<Vec<KatRecord>> {
    let buf = BufReader::new(reader);
    let mut records = Vec::new();
    let mut current = Builder::default();

    for line in buf.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                records.push(std::mem::take(&mut current).finish()?);
            }
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            return Err(Error::Parse("line is not `Name = value`"));
        };
        let name = name.trim();
        let value = value.trim();

        match name {
            "Count" => {
                current.count = Some(
                    value
                        .parse()
                        .map_err(|_| Error::Parse("Count is not a number"))?,
                );
            }
            "Key" => current.key = Some(decode_hex(value)?),
            "Nonce" => current.nonce = Some(decode_hex(value)?),
            "PT" => current.pt = Some(decode_hex(value)?),
            "AD" => current.ad = Some(decode_hex(value)?),
            "CT" => current.ct = Some(decode_hex(value)?),
            _ => return Err(Error::Parse("unknown field name")),
        }
    }
    if !current.is_empty() {
        records.push(current.finish()?);
    }
    Ok(records)
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(Error::Parse("odd-length hex value"));
    }
    s.as_bytes()
        .chunks(2)
        .map(|pair| Ok((hex_nibble(pair[0])? << 4) | hex_nibble(pair[1])?))
        .collect()
}

fn hex_nibble(b: u8) -> Result<u8> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(Error::Parse("invalid hex digit")),
    }
}
