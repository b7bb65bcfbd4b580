//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCipherError;

use super::MODULUS;

use num_integer::Integer;
use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_k using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Self::alphabet()
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and fit in an `i64`.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > i64::MAX as u64 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must not exceed {}, got {}",
                i64::MAX,
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring Z_26 of the Latin alphabet.
    pub fn alphabet() -> Self {
        Ring { modulus: MODULUS }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(27), 1);
    /// assert_eq!(ring.normalize(-3), 23);
    /// assert_eq!(ring.normalize(26), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a + b) mod modulus`.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_add(b_norm))
    }

    /// Computes `(a - b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.sub(3, 5), 24);
    /// assert_eq!(ring.sub(-2, 3), 21);
    /// ```
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        self.normalize(a_norm.wrapping_sub(b_norm))
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Returns `true` if `a` has a multiplicative inverse, i.e. `gcd(a, modulus) == 1`.
    pub fn is_unit(&self, a: i64) -> bool {
        self.normalize(a).gcd(&(self.modulus as i64)) == 1
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// Searches `i` in `[1, modulus)` for the smallest `i` with `a * i ≡ 1`.
    /// `a` is reduced into the ring first.
    ///
    /// Returns `None` when no inverse exists (`gcd(a, modulus) != 1`).
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_cipher::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(11), Some(19)); // 11 * 19 = 209 = 8 * 26 + 1
    /// assert_eq!(ring.inv(13), None);
    /// assert_eq!(ring.inv(0), None);
    /// ```
    pub fn inv(&self, a: i64) -> Option<i64> {
        let a_norm = self.normalize(a);
        let m = self.modulus as i64;

        (1..m).find(|&i| self.mul(a_norm, i) == 1)
    }
}
