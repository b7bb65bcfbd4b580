use crate::errors::HillCipherError;
use crate::ring::matrix_ops::{cofactor_expansion, ensure_square, identity_matrix, matrix_inverse};
use crate::ring::{MODULUS, Matrix, Ring};

use itertools::Itertools;
use rand::Rng;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A square key matrix whose entries are all in `[0, 25]`.
///
/// Serialized as a JSON array of rows; deserialization runs the same validation as
/// [`KeyMatrix::try_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Matrix", into = "Matrix")]
pub struct KeyMatrix {
    rows: Matrix,
}

impl KeyMatrix {
    /// Validates `rows` as a key.
    ///
    /// # Errors
    ///
    /// * `HillCipherError::InvalidDimension` if `rows` is empty or not square.
    /// * `HillCipherError::ValueOutOfRange` for the first entry (row-major) outside
    ///   `[0, 25]`. Positions in the error are 1-based.
    pub fn try_with(rows: Matrix) -> Result<Self, HillCipherError> {
        ensure_square(&rows)?;

        let max = MODULUS as i64 - 1;
        for (i, row) in rows.iter().enumerate() {
            if let Some((j, &value)) = row.iter().enumerate().find(|(_, v)| !(0..=max).contains(*v)) {
                return Err(HillCipherError::ValueOutOfRange {
                    row: i + 1,
                    col: j + 1,
                    value,
                });
            }
        }

        Ok(Self { rows })
    }

    /// Parses a JSON array of rows such as `[[3,2],[5,7]]` and validates it.
    pub fn from_json(json: &str) -> Result<Self, HillCipherError> {
        let rows: Matrix = serde_json::from_str(json)?;
        Self::try_with(rows)
    }

    pub fn to_json(&self) -> Result<String, HillCipherError> {
        Ok(serde_json::to_string(&self.rows)?)
    }

    /// The n×n identity key. Encrypting with it leaves the letters unchanged.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidDimension` if `n` is 0.
    pub fn identity(n: usize) -> Result<Self, HillCipherError> {
        Self::try_with(identity_matrix(n))
    }

    /// Starting key offered for a block size: `[[3,2],[5,7]]` for 2, the identity otherwise.
    pub fn default_for_size(n: usize) -> Result<Self, HillCipherError> {
        if n == 2 {
            return Self::try_with(vec![vec![3, 2], vec![5, 7]]);
        }
        Self::identity(n)
    }

    /// Draws uniformly random keys of size `n` until one can be used for decryption.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::InvalidDimension` if `n` is 0.
    pub fn random_invertible<R: Rng>(n: usize, rng: &mut R) -> Result<Self, HillCipherError> {
        if n == 0 {
            return Err(HillCipherError::InvalidDimension(
                "key size must be at least 1".into(),
            ));
        }

        let max = MODULUS as i64;
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let rows: Matrix = (0..n)
                .map(|_| (0..n).map(|_| rng.random_range(0..max)).collect())
                .collect();
            let key = Self { rows };
            if key.is_invertible() {
                log::debug!("found invertible {}x{} key after {} attempts", n, n, attempts);
                return Ok(key);
            }
        }
    }

    /// Block size of the cipher, i.e. the matrix dimension.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &Matrix {
        &self.rows
    }

    /// Determinant mod 26.
    pub fn determinant(&self) -> i64 {
        cofactor_expansion(&self.rows, &Ring::alphabet())
    }

    /// Whether decryption with this key succeeds.
    ///
    /// Requires a determinant coprime to 26 and an elimination that never hits a
    /// zero-divisor pivot.
    pub fn is_invertible(&self) -> bool {
        self.inverse().is_ok()
    }

    /// The decryption key.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotInvertible` if the key cannot be inverted mod 26.
    pub fn inverse(&self) -> Result<KeyMatrix, HillCipherError> {
        let rows = matrix_inverse(&self.rows, &Ring::alphabet())?;
        Ok(Self { rows })
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 2;
        let text = self
            .rows
            .iter()
            .map(|row| row.iter().map(|v| format!("{:>width$}", v)).join(" "))
            .join("\n");
        f.write_str(&text)
    }
}

impl TryFrom<Matrix> for KeyMatrix {
    type Error = HillCipherError;

    fn try_from(rows: Matrix) -> Result<Self, Self::Error> {
        Self::try_with(rows)
    }
}

impl From<KeyMatrix> for Matrix {
    fn from(key: KeyMatrix) -> Self {
        key.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::matrix_ops::matrix_mul;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_try_with_validates_shape() {
        assert!(KeyMatrix::try_with(vec![vec![3, 2], vec![5, 7]]).is_ok());
        assert!(matches!(
            KeyMatrix::try_with(Matrix::new()),
            Err(HillCipherError::InvalidDimension(_))
        ));
        assert!(matches!(
            KeyMatrix::try_with(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Err(HillCipherError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_try_with_validates_range() {
        match KeyMatrix::try_with(vec![vec![3, 2], vec![26, -1]]) {
            Err(HillCipherError::ValueOutOfRange { row, col, value }) => {
                assert_eq!((row, col, value), (2, 1, 26));
            }
            other => panic!("expected ValueOutOfRange, got {:?}", other),
        }
        assert!(KeyMatrix::try_with(vec![vec![0, 25], vec![25, 0]]).is_ok());
    }

    #[test]
    fn test_json_round_trip() -> Result<(), HillCipherError> {
        let key = KeyMatrix::from_json("[[3, 2], [5, 7]]")?;
        assert_eq!(key.rows(), &vec![vec![3, 2], vec![5, 7]]);
        assert_eq!(key.to_json()?, "[[3,2],[5,7]]");

        let via_serde: KeyMatrix = serde_json::from_str("[[1]]")?;
        assert_eq!(via_serde.size(), 1);
        Ok(())
    }

    #[test]
    fn test_json_errors_are_classified() {
        assert!(matches!(
            KeyMatrix::from_json("[[3, 2], [5"),
            Err(HillCipherError::SerializationError(_))
        ));
        assert!(matches!(
            KeyMatrix::from_json("[[3, 2], [5, 70]]"),
            Err(HillCipherError::ValueOutOfRange { .. })
        ));
        assert!(serde_json::from_str::<KeyMatrix>("[[3, 2]]").is_err());
    }

    #[test]
    fn test_display() -> Result<(), HillCipherError> {
        let key = KeyMatrix::try_with(vec![vec![3, 2], vec![15, 7]])?;
        assert_eq!(key.to_string(), " 3  2\n15  7");
        Ok(())
    }

    #[test]
    fn test_defaults() -> Result<(), HillCipherError> {
        assert_eq!(KeyMatrix::default_for_size(2)?.rows(), &vec![vec![3, 2], vec![5, 7]]);
        assert_eq!(KeyMatrix::default_for_size(3)?.rows(), &identity_matrix(3));
        assert!(KeyMatrix::default_for_size(0).is_err());
        assert_eq!(KeyMatrix::identity(4)?.determinant(), 1);
        Ok(())
    }

    #[test]
    fn test_inverse() -> Result<(), HillCipherError> {
        let key = KeyMatrix::default_for_size(2)?;
        assert_eq!(key.determinant(), 11);
        assert!(key.is_invertible());
        assert_eq!(key.inverse()?.rows(), &vec![vec![3, 14], vec![9, 5]]);

        let singular = KeyMatrix::try_with(vec![vec![2, 4], vec![1, 2]])?;
        assert_eq!(singular.determinant(), 0);
        assert!(!singular.is_invertible());
        assert!(matches!(singular.inverse(), Err(HillCipherError::NotInvertible(_))));
        Ok(())
    }

    #[test]
    fn test_random_invertible() -> Result<(), HillCipherError> {
        let ring = Ring::alphabet();
        let mut rng = StdRng::seed_from_u64(12345);
        for n in 1..=4 {
            let key = KeyMatrix::random_invertible(n, &mut rng)?;
            assert_eq!(key.size(), n);
            assert!(ring.is_unit(key.determinant()));
            let product = matrix_mul(key.rows(), key.inverse()?.rows(), &ring)?;
            assert_eq!(product, identity_matrix(n));
        }
        assert!(KeyMatrix::random_invertible(0, &mut rng).is_err());
        Ok(())
    }
}
