#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// The determinant (or an elimination pivot) has no inverse modulo the ring modulus.
    #[error("NotInvertible: {0}")]
    NotInvertible(String),
    /// Ciphertext letter count is not a multiple of the block size.
    #[error("InvalidLength: {0}")]
    InvalidLength(String),
    /// Matrix is empty, ragged or not square.
    #[error("InvalidDimension: {0}")]
    InvalidDimension(String),
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("Matrix value at position ({row},{col}) must be between 0-25, got {value}")]
    ValueOutOfRange { row: usize, col: usize, value: i64 },

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
