use crate::errors::HillCipherError;
use crate::ring::{Matrix, Ring, Vector};

/// Checks that `matrix` is a non-empty n×n matrix and returns n.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidDimension` for an empty matrix or any row whose
/// length differs from the row count.
pub fn ensure_square(matrix: &Matrix) -> Result<usize, HillCipherError> {
    let n = matrix.len();
    if n == 0 {
        return Err(HillCipherError::InvalidDimension(
            "matrix must have at least one row".into(),
        ));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(HillCipherError::InvalidDimension(format!(
                "matrix must be square: row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// x·A where x is a length–m row‐vector and A is m×n.
/// Returns a length–n row‐vector.
pub fn vector_matrix_mul(x: &[i64], a: &Matrix, ring: &Ring) -> Result<Vector, HillCipherError> {
    let m = x.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    if a.len() != m {
        return Err(HillCipherError::InvalidDimension(format!(
            "Vector length ({}) must match matrix rows ({})",
            m,
            a.len()
        )));
    }
    let n = a[0].len();
    // sanity‐check ragged rows
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(HillCipherError::InvalidDimension(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut y = vec![0i64; n];
    for (j, out) in y.iter_mut().enumerate() {
        let mut sum = 0i64;
        for (i, &xi) in x.iter().enumerate() {
            sum = ring.add(sum, ring.mul(xi, a[i][j]));
        }
        *out = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo the ring modulus.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidDimension` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A
    if b.len() != m_common {
        return Err(HillCipherError::InvalidDimension(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }

    let mut c = Vec::with_capacity(n);
    for (i, row) in a.iter().enumerate() {
        if row.len() != m_common {
            return Err(HillCipherError::InvalidDimension(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        c.push(vector_matrix_mul(row, b, ring)?);
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Determinant of a square matrix, reduced into `[0, modulus)`.
///
/// Laplace expansion along the first row with alternating signs starting at `+`.
/// Cost grows as n!.
///
/// # Errors
///
/// Returns `HillCipherError::InvalidDimension` if the matrix is empty or not square.
///
/// # Example
///
/// ```
/// # use hill_cipher::ring::{Ring, matrix_ops::determinant};
/// let det = determinant(&vec![vec![3, 2], vec![5, 7]], &Ring::alphabet()).unwrap();
/// assert_eq!(det, 11);
/// ```
pub fn determinant(matrix: &Matrix, ring: &Ring) -> Result<i64, HillCipherError> {
    ensure_square(matrix)?;
    Ok(cofactor_expansion(matrix, ring))
}

/// Laplace expansion of an already validated square matrix.
pub(crate) fn cofactor_expansion(matrix: &Matrix, ring: &Ring) -> i64 {
    let n = matrix.len();
    match n {
        1 => ring.normalize(matrix[0][0]),
        2 => ring.sub(
            ring.mul(matrix[0][0], matrix[1][1]),
            ring.mul(matrix[0][1], matrix[1][0]),
        ),
        _ => {
            let mut det = 0i64;
            for col in 0..n {
                let minor = minor_without(matrix, 0, col);
                let term = ring.mul(matrix[0][col], cofactor_expansion(&minor, ring));
                det = if col % 2 == 0 {
                    ring.add(det, term)
                } else {
                    ring.sub(det, term)
                };
            }
            det
        }
    }
}

/// Copy of `matrix` with row `skip_row` and column `skip_col` removed.
fn minor_without(matrix: &Matrix, skip_row: usize, skip_col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|(r, _)| *r != skip_row)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|(c, _)| *c != skip_col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Inverse of a square matrix modulo the ring modulus.
///
/// Gauss-Jordan elimination on the augmented matrix `[A | I]`. At every step the row
/// with the largest entry in the pivot column (first one on ties) is swapped in,
/// the pivot row is scaled by the pivot's inverse and the column is cleared in all
/// other rows. Entries are normalized into the ring before elimination starts.
///
/// Z_26 is not a field: a pivot can be a zero divisor even when the determinant is a
/// unit. That case fails with `NotInvertible` rather than searching for another pivot.
///
/// # Errors
///
/// * `HillCipherError::InvalidDimension` if the matrix is empty or not square.
/// * `HillCipherError::NotInvertible` if the determinant or a chosen pivot has no inverse.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCipherError> {
    let n = ensure_square(matrix)?;

    let det = cofactor_expansion(matrix, ring);
    let det_inv = ring.inv(det).ok_or_else(|| {
        HillCipherError::NotInvertible(format!(
            "determinant {} has no inverse mod {}",
            det,
            ring.modulus()
        ))
    })?;
    log::debug!("determinant {} has inverse {} mod {}", det, det_inv, ring.modulus());

    // [A | I]
    let mut augmented: Matrix = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut aug_row: Vector = row.iter().map(|&v| ring.normalize(v)).collect();
            aug_row.extend((0..n).map(|j| i64::from(i == j)));
            aug_row
        })
        .collect();

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if augmented[k][i].abs() > augmented[max_row][i].abs() {
                max_row = k;
            }
        }
        if max_row != i {
            augmented.swap(i, max_row);
        }

        let pivot = augmented[i][i];
        log::trace!("column {}: pivot {} taken from row {}", i, pivot, max_row);
        let pivot_inv = ring.inv(pivot).ok_or_else(|| {
            HillCipherError::NotInvertible(format!(
                "pivot {} in column {} has no inverse mod {}",
                pivot,
                i,
                ring.modulus()
            ))
        })?;

        for v in augmented[i].iter_mut() {
            *v = ring.mul(*v, pivot_inv);
        }

        let pivot_row = augmented[i].clone();
        for (k, row) in augmented.iter_mut().enumerate() {
            if k == i {
                continue;
            }
            let factor = row[i];
            for (v, &p) in row.iter_mut().zip(pivot_row.iter()) {
                *v = ring.sub(*v, factor * p);
            }
        }
    }

    Ok(augmented.into_iter().map(|row| row[n..].to_vec()).collect())
}
