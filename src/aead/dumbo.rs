//! Dumbo: Elephant over Spongent-π[160].
//!
//! The smallest member of the family, aimed at constrained hardware. The
//! 160-bit state gives 20-byte blocks and a 64-bit tag.

use crate::Result;
use crate::aead::Cipher;
use crate::mask;
use crate::permutation::spongent;

/// Secret key length in bytes (128 bits).
pub const KEY_LEN: usize = 16;
/// Nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;
/// Authentication tag length in bytes (64 bits).
pub const TAG_LEN: usize = 8;

/// Rounds of Spongent-π[160] per permutation call.
const ROUNDS: usize = 80;

const CIPHER: Cipher<20> = Cipher {
    permute,
    step: mask::step_160,
};

fn permute(state: &mut [u8; 20]) {
    spongent::permute_160(state, ROUNDS);
}

/// Encrypt `plaintext`, authenticating it together with `ad`.
///
/// Returns the ciphertext (same length as the plaintext) and the tag.
/// The nonce must never repeat under the same key.
pub fn encrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ad: &[u8],
    plaintext: &[u8],
) -> (Vec<u8>, [u8; TAG_LEN]) {
    let mut text = plaintext.to_vec();
    let tag = encrypt_in_place(key, nonce, ad, &mut text);
    (text, tag)
}

/// Encrypt `text` in place and return the tag.
pub fn encrypt_in_place(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    ad: &[u8],
    text: &mut [u8],
) -> [u8; TAG_LEN] {
    CIPHER.encrypt_in_place(key, nonce, ad, text)
}

/// Verify `tag` over (`nonce`, `ad`, `ciphertext`) and return the plaintext.
///
/// Fails with [`crate::Error::Authentication`] if anything was tampered
/// with; no plaintext is released in that case.
pub fn decrypt(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    tag: &[u8; TAG_LEN],
    ad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let mut text = ciphertext.to_vec();
    decrypt_in_place(key, nonce, tag, ad, &mut text)?;
    Ok(text)
}

/// Verify `tag` and decrypt `text` in place.
///
/// On failure the buffer is zeroised before the error is returned.
pub fn decrypt_in_place(
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    tag: &[u8; TAG_LEN],
    ad: &[u8],
    text: &mut [u8],
) -> Result<()> {
    CIPHER.decrypt_in_place(key, nonce, tag, ad, text)
}
