//! Block-wise Hill transform over residue sequences.

use crate::codec::{decode, encode};
use crate::errors::HillCipherError;
use crate::preset::alphabet::PADDING_RESIDUE;
use crate::ring::matrix_ops::{ensure_square, matrix_inverse, vector_matrix_mul};
use crate::ring::{Matrix, Ring, Vector};

/// Right-pads `residues` with `X` until its length is a multiple of `block_size`.
///
/// Returns the number of padding residues added.
pub fn pad_to_block(residues: &mut Vector, block_size: usize) -> usize {
    let rem = residues.len() % block_size;
    if rem == 0 {
        return 0;
    }
    let missing = block_size - rem;
    residues.resize(residues.len() + missing, PADDING_RESIDUE);
    missing
}

/// Multiplies every consecutive block of `residues` (as a row vector) by `matrix`.
///
/// The block size is the dimension of `matrix`. A trailing partial block is padded
/// with `X` first, so the output length is always a multiple of the block size.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidDimension` if `matrix` is empty or not square.
pub fn transform(residues: &[i64], matrix: &Matrix, ring: &Ring) -> Result<Vector, HillCipherError> {
    let block_size = ensure_square(matrix)?;

    let mut padded = residues.to_vec();
    let padding = pad_to_block(&mut padded, block_size);
    log::debug!(
        "transforming {} blocks of size {} ({} padding)",
        padded.len() / block_size,
        block_size,
        padding
    );

    let mut out = Vec::with_capacity(padded.len());
    for block in padded.chunks_exact(block_size) {
        out.extend(vector_matrix_mul(block, matrix, ring)?);
    }
    Ok(out)
}

/// Encrypts the letters of `plaintext` with `key`.
///
/// Non-letters are dropped, case is folded and the last block is padded with `X`.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidDimension` if `key` is empty or not square.
///
/// # Example
///
/// ```
/// # use hill_cipher::cipher::encrypt;
/// let key = vec![vec![3, 2], vec![5, 7]];
/// assert_eq!(encrypt("help", &key).unwrap(), "PQEX");
/// ```
pub fn encrypt(plaintext: &str, key: &Matrix) -> Result<String, HillCipherError> {
    let ring = Ring::alphabet();
    let residues = encode(plaintext);
    let encrypted = transform(&residues, key, &ring)?;
    Ok(decode(&encrypted))
}

/// Decrypts `ciphertext` with the modular inverse of `key`.
///
/// # Errors
///
/// * `HillCipherError::InvalidDimension` if `key` is empty or not square.
/// * `HillCipherError::InvalidLength` if the letter count is not a multiple of the block size.
/// * `HillCipherError::NotInvertible` if `key` has no inverse mod 26.
///
/// # Example
///
/// ```
/// # use hill_cipher::cipher::decrypt;
/// let key = vec![vec![3, 2], vec![5, 7]];
/// assert_eq!(decrypt("PQEX", &key).unwrap(), "HELP");
/// ```
pub fn decrypt(ciphertext: &str, key: &Matrix) -> Result<String, HillCipherError> {
    let ring = Ring::alphabet();
    let block_size = ensure_square(key)?;

    let residues = encode(ciphertext);
    if residues.len() % block_size != 0 {
        return Err(HillCipherError::InvalidLength(format!(
            "Ciphertext length must be divisible by {} for this matrix size, got {} letters",
            block_size,
            residues.len()
        )));
    }

    let inverse = matrix_inverse(key, &ring)?;
    let decrypted = transform(&residues, &inverse, &ring)?;
    Ok(decode(&decrypted))
}
