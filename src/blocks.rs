//! Padded block extraction for the two MAC input streams.
//!
//! The MAC walks two virtual byte streams, each terminated by a single
//! `0x01` byte and zero-filled to a whole number of blocks:
//!
//! ```text
//! AD stream:         nonce (12) ∥ associated data (N) ∥ 0x01 ∥ 0…
//! ciphertext stream: ciphertext (M)                   ∥ 0x01 ∥ 0…
//! ```
//!
//! Neither stream is materialised; [`ad_block`] and [`ct_block`] produce the
//! requested block into a fresh stack buffer. Staging through a local buffer
//! also keeps the AEAD layer free of aliasing concerns between its inputs.
//!
//! The terminator can land anywhere, including in a block of its own: for a
//! 20-byte block, 8 bytes of associated data put `0x01` at the start of
//! block 1 with everything after it zero.

/// Nonce length shared by the whole family (96 bits).
pub(crate) const NONCE_LEN: usize = 12;

/// Number of blocks in the AD stream for `ad_len` bytes of associated data.
pub(crate) fn ad_block_count(ad_len: usize, block: usize) -> usize {
    (NONCE_LEN + ad_len + 1).div_ceil(block)
}

/// Number of blocks in the ciphertext stream for `ct_len` bytes of text.
pub(crate) fn ct_block_count(ct_len: usize, block: usize) -> usize {
    (ct_len + 1).div_ceil(block)
}

/// Extract block `index` of the AD stream.
pub(crate) fn ad_block<const B: usize>(
    nonce: &[u8; NONCE_LEN],
    ad: &[u8],
    index: usize,
) -> [u8; B] {
    let mut out = [0u8; B];
    let base = index * B;
    for (j, slot) in out.iter_mut().enumerate() {
        let pos = base + j;
        *slot = if pos < NONCE_LEN {
            nonce[pos]
        } else if pos < NONCE_LEN + ad.len() {
            ad[pos - NONCE_LEN]
        } else if pos == NONCE_LEN + ad.len() {
            0x01
        } else {
            0x00
        };
    }
    out
}

/// Extract block `index` of the ciphertext stream.
pub(crate) fn ct_block<const B: usize>(ct: &[u8], index: usize) -> [u8; B] {
    let mut out = [0u8; B];
    let base = index * B;
    for (j, slot) in out.iter_mut().enumerate() {
        let pos = base + j;
        *slot = if pos < ct.len() {
            ct[pos]
        } else if pos == ct.len() {
            0x01
        } else {
            0x00
        };
    }
    out
}
