//! Hill cipher over the 26-letter Latin alphabet.
//!
//! A square key matrix `K` (entries mod 26) encrypts text block by block: letters are
//! mapped to residues `A = 0 … Z = 25`, grouped into row vectors of length `n` and
//! multiplied by `K`. Decryption multiplies by `K⁻¹ mod 26`, which exists only when
//! `det(K)` is coprime to 26.
//!
//! ```text
//! text ─ codec::encode ─▶ residues ─ cipher::transform(K) ─▶ residues ─ codec::decode ─▶ text
//! ```
//!
//! # Example
//!
//! ```
//! use hill_cipher::key::HillCipher;
//!
//! let cipher = HillCipher::try_with(vec![vec![3, 2], vec![5, 7]]).unwrap();
//! assert_eq!(cipher.encrypt("help").unwrap(), "PQEX");
//! assert_eq!(cipher.decrypt("PQEX").unwrap(), "HELP");
//! ```
//!
//! The Hill cipher is a classroom cipher. It offers no security against known-plaintext
//! attacks.

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod key;
pub mod preset;
pub mod ring;

pub use cipher::{decrypt, encrypt};
pub use errors::HillCipherError;
pub use key::{HillCipher, KeyMatrix};
