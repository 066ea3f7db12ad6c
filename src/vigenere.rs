//! The Vigenère polyalphabetic substitution cipher over the Spanish
//! alphabet.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::CipherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// A Vigenère cipher bound to one encryption key.
///
/// Encryption and decryption are pure: the instance holds no mutable
/// state, so sharing one across threads needs no coordination.
///
/// ```
/// use cifra::Vigenere;
/// let cipher = Vigenere::new("LIMON").unwrap();
/// let ct = cipher.encrypt("ATTACK AT DAWN");
/// assert_eq!(cipher.decrypt(&ct), "ATTACK AT DAWN");
/// ```
#[derive(Debug, Clone)]
pub struct Vigenere {
    key: String,
    shifts: Vec<usize>,
}

impl Vigenere {
    /// Build a cipher from a key of alphabet symbols.
    ///
    /// Rejects an empty key and any key symbol outside the 27-letter
    /// uppercase alphabet.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let shifts = key
            .chars()
            .map(alphabet::index_of)
            .collect::<Result<Vec<_>, _>>()?;
        if shifts.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        Ok(Self {
            key: key.to_owned(),
            shifts,
        })
    }

    /// The key this cipher was built with.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Encrypt `text`, shifting each alphabet symbol by the next key
    /// symbol. Anything outside the alphabet passes through unchanged
    /// without advancing the key.
    pub fn encrypt(&self, text: &str) -> String {
        self.apply(text, Direction::Encrypt)
    }

    /// Invert [`encrypt`](Self::encrypt) under the same key.
    pub fn decrypt(&self, text: &str) -> String {
        self.apply(text, Direction::Decrypt)
    }

    fn apply(&self, text: &str, direction: Direction) -> String {
        let mut out = String::with_capacity(text.len());
        let mut j = 0;

        for c in text.chars() {
            match alphabet::index_of(c) {
                Ok(d) => {
                    let k = self.shifts[j];
                    let o = match direction {
                        Direction::Encrypt => (d + k) % ALPHABET_LEN,
                        Direction::Decrypt => (d + ALPHABET_LEN - k) % ALPHABET_LEN,
                    };
                    out.push(alphabet::symbol_of(o));
                    j = (j + 1) % self.shifts.len();
                }
                // pass-through branch: the key pointer does not move
                Err(_) => out.push(c),
            }
        }

        out
    }
}

/// Encrypt `plaintext` with `key` in a single call.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    Ok(Vigenere::new(key)?.encrypt(plaintext))
}

/// Decrypt `ciphertext` with `key` in a single call.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    Ok(Vigenere::new(key)?.decrypt(ciphertext))
}
