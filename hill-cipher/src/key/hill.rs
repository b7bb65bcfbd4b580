use crate::cipher::{decrypt, encrypt};
use crate::errors::HillCipherError;
use crate::key::KeyMatrix;
use crate::ring::Matrix;

/// A Hill cipher over the 26-letter alphabet, configured with one key matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: KeyMatrix,
}

impl HillCipher {
    pub fn new(key: KeyMatrix) -> Self {
        Self { key }
    }

    /// Validates `rows` as a key (see [`KeyMatrix::try_with`]) and builds the cipher.
    pub fn try_with(rows: Matrix) -> Result<Self, HillCipherError> {
        Ok(Self::new(KeyMatrix::try_with(rows)?))
    }

    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    /// Number of letters per block.
    pub fn block_size(&self) -> usize {
        self.key.size()
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String, HillCipherError> {
        encrypt(plaintext, self.key.rows())
    }

    /// Decrypts with the inverse key, which is derived on every call.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, HillCipherError> {
        decrypt(ciphertext, self.key.rows())
    }
}
