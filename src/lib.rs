//! Vigenère encryption over the 27-letter uppercase Spanish alphabet
//! (A–Z plus Ñ), together with a ciphertext-only attack that recovers the
//! key from letter statistics alone.

pub mod alphabet;
pub mod analysis;
pub mod ioc;
pub mod vigenere;

pub use analysis::{crack, Cryptanalysis};
pub use vigenere::{decrypt, encrypt, Vigenere};

use thiserror::Error;

/// Errors raised when building a cipher or mapping symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The symbol is outside the 27-letter uppercase alphabet.
    #[error("symbol {0:?} is not in the 27-letter Spanish alphabet")]
    InvalidSymbol(char),
    /// A cipher key must contain at least one symbol.
    #[error("the encryption key is empty")]
    EmptyKey,
}
