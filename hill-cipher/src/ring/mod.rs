//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing Z_k and the matrix operations
//! the cipher needs on top of it.

pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

/// Size of the alphabet, and therefore the modulus of every cipher computation.
pub const MODULUS: u64 = 26;

pub use math::Ring;
