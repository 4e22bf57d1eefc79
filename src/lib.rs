//! **elephant-aead** - a pure-Rust implementation of the Elephant family of
//! lightweight authenticated ciphers, a finalist of the NIST Lightweight
//! Cryptography project.
//!
//! # Parameter sets
//! | Module | Permutation | Rounds | Tag |
//! |--------|-------------|--------|-----|
//! | [`dumbo`]    | Spongent-π[160] | 80 | 64 bit |
//! | [`jumbo`]    | Spongent-π[176] | 90 | 64 bit |
//! | [`delirium`] | Keccak-f[200]   | 18 | 128 bit |
//!
//! All three take a 128-bit key and a 96-bit nonce, encrypt a message of any
//! length (including zero) and authenticate it together with optional
//! associated data. A nonce must never be reused under the same key.
//!
//! ```
//! let key = [0x42; 16];
//! let nonce = [0x07; 12];
//!
//! let (ciphertext, tag) = elephant_aead::dumbo::encrypt(&key, &nonce, b"header", b"payload");
//! let plaintext = elephant_aead::dumbo::decrypt(&key, &nonce, &tag, b"header", &ciphertext)
//!     .expect("authentic message");
//! assert_eq!(plaintext, b"payload");
//! ```
//!
//! The per-block masking, padding and tag computation live in [`aead`]; the
//! underlying permutations are exposed in [`permutation`] for testing and
//! analysis. [`kat`] parses the NIST vector-file format used to validate
//! the implementation.

pub mod aead;
pub mod error;
pub mod kat;
pub mod permutation;

mod blocks;
mod mask;

pub use aead::{delirium, dumbo, jumbo};
pub use error::{Error, Result};
