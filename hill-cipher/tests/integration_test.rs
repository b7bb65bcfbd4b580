use hill_cipher::errors::HillCipherError;
use hill_cipher::ring::Ring;
use hill_cipher::ring::matrix_ops::{determinant, matrix_inverse};
use hill_cipher::{decrypt, encrypt};

#[test]
fn happy_flow() -> Result<(), HillCipherError> {
    let key = vec![vec![3, 2], vec![5, 7]];
    let ring = Ring::alphabet();

    assert_eq!(determinant(&key, &ring)?, 11);
    assert_eq!(ring.inv(11), Some(19));

    let cipher = encrypt("HELP", &key)?;
    assert_eq!(cipher, "PQEX");

    let decoded = decrypt(&cipher, &key)?;
    assert_eq!(decoded, "HELP");

    Ok(())
}

#[test]
fn non_square_key_is_rejected_everywhere() {
    let key = vec![vec![3, 2, 1], vec![5, 7, 1]];
    let ring = Ring::alphabet();

    assert!(matches!(encrypt("HELP", &key), Err(HillCipherError::InvalidDimension(_))));
    assert!(matches!(decrypt("HELP", &key), Err(HillCipherError::InvalidDimension(_))));
    assert!(matches!(matrix_inverse(&key, &ring), Err(HillCipherError::InvalidDimension(_))));
    assert!(matches!(encrypt("HELP", &vec![]), Err(HillCipherError::InvalidDimension(_))));
}

#[test]
fn ciphertext_of_partial_block_is_rejected() {
    let key = vec![vec![17, 17, 5], vec![21, 18, 21], vec![2, 2, 19]];
    let err = decrypt("RRLM", &key).unwrap_err();
    assert!(matches!(err, HillCipherError::InvalidLength(_)));
    assert!(err.to_string().contains("divisible by 3"));
}

#[test]
fn key_with_even_determinant_only_encrypts() -> Result<(), HillCipherError> {
    // det = 7*2 - 4*3 = 2
    let key = vec![vec![7, 4], vec![3, 2]];
    assert_eq!(determinant(&key, &Ring::alphabet())?, 2);

    let cipher = encrypt("HELP", &key)?;
    assert_eq!(cipher.len(), 4);
    assert!(matches!(decrypt(&cipher, &key), Err(HillCipherError::NotInvertible(_))));
    Ok(())
}

#[test]
fn key_entries_outside_alphabet_are_reduced() -> Result<(), HillCipherError> {
    let key = vec![vec![29, -24], vec![31, 7]];
    assert_eq!(encrypt("HELP", &key)?, "PQEX");
    assert_eq!(decrypt("PQEX", &key)?, "HELP");
    Ok(())
}
