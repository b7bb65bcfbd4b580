//! # Key Module
//!
//! Validated key matrices and the [`HillCipher`] built on top of them.

pub mod hill;
pub mod matrix;

pub use hill::HillCipher;
pub use matrix::KeyMatrix;
