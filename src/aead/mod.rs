//! The Elephant authenticated-encryption construction.
//!
//! All three parameter sets share one encrypt-then-MAC skeleton over a
//! `B`-byte permutation state; a submodule per parameter set pins down the
//! permutation, the LFSR step and the tag length:
//!
//! | Module | Permutation | State | Tag | Security target |
//! |--------|-------------|-------|-----|-----------------|
//! | [`dumbo`]    | Spongent-π[160] | 20 bytes | 8 bytes  | 112 bit |
//! | [`jumbo`]    | Spongent-π[176] | 22 bytes | 8 bytes  | 127 bit |
//! | [`delirium`] | Keccak-f[200]   | 25 bytes | 16 bytes | 127 bit |
//!
//! One call evaluates, serially:
//!
//! 1. the **keystream**: block `i` of `P(nonce ∥ 0… ⊕ f) ⊕ f` with the
//!    `b = 1` mask chain, XORed over the text;
//! 2. the **MAC**: an accumulator seeded with the first padded
//!    `nonce ∥ AD` block absorbs every remaining AD block (`b = 0` chain)
//!    and every padded ciphertext block (`b = 2` chain) through the masked
//!    permutation, then is finalised between two XORs of the permuted key;
//! 3. the **tag**: a prefix of the finalised accumulator.
//!
//! See algorithms 1 and 2 of the Elephant specification:
//! <https://csrc.nist.gov/CSRC/media/Projects/lightweight-cryptography/documents/finalist-round/updated-spec-doc/elephant-spec-final.pdf>
//!
//! Control flow depends only on public buffer lengths, and decryption
//! compares tags without early exit; a failed decryption zeroises the
//! output buffer before returning.

use zeroize::Zeroize;

use crate::blocks;
use crate::mask::{MaskChain, MaskVariant};
use crate::{Error, Result};

pub mod delirium;
pub mod dumbo;
pub mod jumbo;

/// Secret key length in bytes, shared by the whole family (128 bits).
pub(crate) const KEY_LEN: usize = 16;

/// Nonce length in bytes, shared by the whole family (96 bits).
pub(crate) const NONCE_LEN: usize = blocks::NONCE_LEN;

/// A parameter set: the permutation and the mask LFSR step over a `B`-byte
/// state. Monomorphised once per variant module.
pub(crate) struct Cipher<const B: usize> {
    pub(crate) permute: fn(&mut [u8; B]),
    pub(crate) step: fn(&[u8; B]) -> [u8; B],
}

impl<const B: usize> Cipher<B> {
    /// The permuted zero-extended key; seed of every mask chain and the
    /// whitening value of tag finalisation.
    fn expand_key(&self, key: &[u8; KEY_LEN]) -> [u8; B] {
        let mut seed = [0u8; B];
        seed[..KEY_LEN].copy_from_slice(key);
        (self.permute)(&mut seed);
        seed
    }

    /// `block = P(block ⊕ f) ⊕ f`
    fn masked_permute(&self, block: &mut [u8; B], f: &[u8; B]) {
        xor_into(block, f);
        (self.permute)(block);
        xor_into(block, f);
    }

    /// XOR the keystream for (`seed`, `nonce`) over `text`. Encryption and
    /// decryption are the same pass.
    fn apply_keystream(&self, seed: &[u8; B], nonce: &[u8; NONCE_LEN], text: &mut [u8]) {
        let mut chain = MaskChain::new(*seed, self.step);
        for chunk in text.chunks_mut(B) {
            let f = chain.next(MaskVariant::Stream);
            let mut block = [0u8; B];
            block[..NONCE_LEN].copy_from_slice(nonce);
            self.masked_permute(&mut block, &f);
            for (t, k) in chunk.iter_mut().zip(block.iter()) {
                *t ^= k;
            }
        }
    }

    /// The full MAC accumulator over (`nonce`, `ad`, `ct`), finalised but
    /// not yet truncated to the tag length.
    fn authenticate(
        &self,
        seed: &[u8; B],
        nonce: &[u8; NONCE_LEN],
        ad: &[u8],
        ct: &[u8],
    ) -> [u8; B] {
        // The first padded nonce ∥ AD block enters the accumulator bare;
        // only the blocks after it go through the masked permutation.
        let mut acc = blocks::ad_block::<B>(nonce, ad, 0);

        let mut chain = MaskChain::new(*seed, self.step);
        for i in 1..blocks::ad_block_count(ad.len(), B) {
            let f = chain.next(MaskVariant::AssociatedData);
            let mut block = blocks::ad_block::<B>(nonce, ad, i);
            self.masked_permute(&mut block, &f);
            xor_into(&mut acc, &block);
        }

        let mut chain = MaskChain::new(*seed, self.step);
        for i in 0..blocks::ct_block_count(ct.len(), B) {
            let f = chain.next(MaskVariant::Ciphertext);
            let mut block = blocks::ct_block::<B>(ct, i);
            self.masked_permute(&mut block, &f);
            xor_into(&mut acc, &block);
        }

        xor_into(&mut acc, seed);
        (self.permute)(&mut acc);
        xor_into(&mut acc, seed);
        acc
    }

    /// Encrypt `text` in place and return the `T`-byte tag.
    pub(crate) fn encrypt_in_place<const T: usize>(
        &self,
        key: &[u8; KEY_LEN],
        nonce: &[u8; NONCE_LEN],
        ad: &[u8],
        text: &mut [u8],
    ) -> [u8; T] {
        let seed = self.expand_key(key);
        self.apply_keystream(&seed, nonce, text);
        let acc = self.authenticate(&seed, nonce, ad, text);
        let mut tag = [0u8; T];
        tag.copy_from_slice(&acc[..T]);
        tag
    }

    /// Verify `tag` and decrypt `text` in place. On failure the buffer is
    /// zeroised and [`Error::Authentication`] returned.
    pub(crate) fn decrypt_in_place<const T: usize>(
        &self,
        key: &[u8; KEY_LEN],
        nonce: &[u8; NONCE_LEN],
        tag: &[u8; T],
        ad: &[u8],
        text: &mut [u8],
    ) -> Result<()> {
        let seed = self.expand_key(key);
        // The MAC covers the ciphertext, so it must run before the
        // keystream pass overwrites the buffer with plaintext.
        let acc = self.authenticate(&seed, nonce, ad, text);
        self.apply_keystream(&seed, nonce, text);
        if !ct_eq(tag, &acc[..T]) {
            text.zeroize();
            return Err(Error::Authentication);
        }
        Ok(())
    }
}

#[inline]
fn xor_into<const B: usize>(dst: &mut [u8; B], src: &[u8; B]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

/// Constant-time equality: OR-fold of byte XORs, no early exit.
fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::ct_eq;

    #[test]
    fn ct_eq_basics() {
        assert!(ct_eq(&[], &[]));
        assert!(ct_eq(&[0xAA, 0x55], &[0xAA, 0x55]));
        assert!(!ct_eq(&[0xAA, 0x55], &[0xAA, 0x54]));
        assert!(!ct_eq(&[0x00, 0x00], &[0x80, 0x00]));
    }

    /// Per-variant behavioural suite; the bodies only differ in which
    /// parameter set they import.
    macro_rules! aead_suite {
        ($variant:ident) => {
            mod $variant {
                use rand::Rng;

                use crate::aead::$variant::{
                    TAG_LEN, decrypt, decrypt_in_place, encrypt, encrypt_in_place,
                };

                const KEY: [u8; 16] = [
                    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C,
                    0x0D, 0x0E, 0x0F,
                ];
                const NONCE: [u8; 12] = [
                    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1A, 0x1B,
                ];

                fn pattern(len: usize, salt: u8) -> Vec<u8> {
                    (0..len)
                        .map(|i| (i as u8).wrapping_mul(113).wrapping_add(salt))
                        .collect()
                }

                #[test]
                fn round_trips_across_block_boundaries() {
                    // Lengths straddle every block boundary of the three
                    // state widths (20, 22, 25 bytes).
                    for &ad_len in &[0usize, 1, 7, 8, 12, 13, 19, 20, 21, 32, 50] {
                        for &pt_len in &[0usize, 1, 19, 20, 21, 22, 24, 25, 26, 44, 64] {
                            let ad = pattern(ad_len, 0x51);
                            let pt = pattern(pt_len, 0xC3);
                            let (ct, tag) = encrypt(&KEY, &NONCE, &ad, &pt);
                            assert_eq!(ct.len(), pt.len());
                            let back = decrypt(&KEY, &NONCE, &tag, &ad, &ct)
                                .expect("round trip must verify");
                            assert_eq!(back, pt, "ad={ad_len} pt={pt_len}");
                        }
                    }
                }

                #[test]
                fn in_place_apis_agree_with_the_buffer_apis() {
                    let ad = pattern(21, 0x09);
                    let pt = pattern(43, 0x77);

                    let (ct, tag) = encrypt(&KEY, &NONCE, &ad, &pt);
                    let mut buf = pt.clone();
                    let tag2 = encrypt_in_place(&KEY, &NONCE, &ad, &mut buf);
                    assert_eq!(buf, ct);
                    assert_eq!(tag2, tag);

                    decrypt_in_place(&KEY, &NONCE, &tag, &ad, &mut buf).unwrap();
                    assert_eq!(buf, pt);
                }

                #[test]
                fn keystream_is_deterministic_per_key_and_nonce() {
                    let pt = pattern(37, 0x00);
                    let (a, tag_a) = encrypt(&KEY, &NONCE, &[], &pt);
                    let (b, tag_b) = encrypt(&KEY, &NONCE, &[], &pt);
                    assert_eq!(a, b);
                    assert_eq!(tag_a, tag_b);
                }

                #[test]
                fn empty_message_still_authenticates() {
                    let (ct, tag) = encrypt(&KEY, &NONCE, &[], &[]);
                    assert!(ct.is_empty());
                    assert!(decrypt(&KEY, &NONCE, &tag, &[], &[]).is_ok());

                    let mut bad = tag;
                    bad[TAG_LEN - 1] ^= 0x01;
                    assert!(decrypt(&KEY, &NONCE, &bad, &[], &[]).is_err());
                }

                #[test]
                fn any_bit_flip_is_rejected() {
                    let ad = pattern(17, 0x2F);
                    let pt = pattern(33, 0xE1);
                    let (ct, tag) = encrypt(&KEY, &NONCE, &ad, &pt);

                    let mut rng = rand::thread_rng();
                    for _ in 0..256 {
                        let mut key = KEY;
                        let mut nonce = NONCE;
                        let mut ad = ad.clone();
                        let mut ct = ct.clone();
                        let mut tag = tag;
                        // Flip exactly one bit somewhere in the inputs.
                        match rng.gen_range(0..5) {
                            0 => {
                                let i = rng.gen_range(0..tag.len());
                                tag[i] ^= 1 << rng.gen_range(0..8);
                            }
                            1 => {
                                let i = rng.gen_range(0..ct.len());
                                ct[i] ^= 1 << rng.gen_range(0..8);
                            }
                            2 => {
                                let i = rng.gen_range(0..ad.len());
                                ad[i] ^= 1 << rng.gen_range(0..8);
                            }
                            3 => {
                                let i = rng.gen_range(0..nonce.len());
                                nonce[i] ^= 1 << rng.gen_range(0..8);
                            }
                            _ => {
                                let i = rng.gen_range(0..key.len());
                                key[i] ^= 1 << rng.gen_range(0..8);
                            }
                        }
                        assert!(decrypt(&key, &nonce, &tag, &ad, &ct).is_err());
                    }
                }

                #[test]
                fn failed_decryption_zeroises_the_buffer() {
                    let ad = pattern(5, 0x99);
                    let pt = pattern(48, 0x42);
                    let (ct, tag) = encrypt(&KEY, &NONCE, &ad, &pt);

                    let mut bad_tag = tag;
                    bad_tag[0] ^= 0x80;
                    let mut buf = ct.clone();
                    assert!(decrypt_in_place(&KEY, &NONCE, &bad_tag, &ad, &mut buf).is_err());
                    assert!(buf.iter().all(|&b| b == 0));
                }
            }
        };
    }

    aead_suite!(dumbo);
    aead_suite!(jumbo);
    aead_suite!(delirium);

    #[test]
    fn parameter_sets_are_mutually_independent() {
        let key = [0x5Au8; 16];
        let nonce = [0xC6u8; 12];
        let ad = [0x13u8; 20];
        let pt = [0x00u8; 32];

        let (ct_d, tag_d) = crate::dumbo::encrypt(&key, &nonce, &ad, &pt);
        let (ct_j, tag_j) = crate::jumbo::encrypt(&key, &nonce, &ad, &pt);
        assert_ne!(ct_d, ct_j);
        assert_ne!(tag_d, tag_j);

        let (ct_e, _) = crate::delirium::encrypt(&key, &nonce, &ad, &pt);
        assert_ne!(ct_d, ct_e);
        assert_ne!(ct_j, ct_e);
    }

    #[test]
    fn keystreams_differ_between_nonces() {
        let key = [0x77u8; 16];
        let pt = [0u8; 40];
        let (a, _) = crate::dumbo::encrypt(&key, &[0u8; 12], &[], &pt);
        let (b, _) = crate::dumbo::encrypt(&key, &[1u8; 12], &[], &pt);
        assert_ne!(a, b);
    }

    #[test]
    fn random_inputs_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let mut key = [0u8; 16];
            let mut nonce = [0u8; 12];
            rng.fill(&mut key[..]);
            rng.fill(&mut nonce[..]);
            let ad: Vec<u8> = (0..rng.gen_range(0..64)).map(|_| rng.r#gen()).collect();
            let pt: Vec<u8> = (0..rng.gen_range(0..96)).map(|_| rng.r#gen()).collect();

            let (ct, tag) = crate::delirium::encrypt(&key, &nonce, &ad, &pt);
            let back = crate::delirium::decrypt(&key, &nonce, &tag, &ad, &ct).unwrap();
            assert_eq!(back, pt);
        }
    }
}
