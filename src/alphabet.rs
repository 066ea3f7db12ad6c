//! The 27-letter uppercase Spanish alphabet: A..N, Ñ, O..Z.

use crate::CipherError;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 27;

/// Position of 'Ñ' within the alphabet ordering.
const ENYE_INDEX: usize = 14;

/// Map an alphabet symbol to its index in `0..27`.
///
/// 'Ñ' sits at position 14, between 'N' and 'O'; every other letter keeps
/// its Latin ordering around that single discontinuity. Only uppercase
/// symbols are accepted.
///
/// ```
/// use cifra::alphabet::index_of;
/// assert_eq!(index_of('A').unwrap(), 0);
/// assert_eq!(index_of('Ñ').unwrap(), 14);
/// assert_eq!(index_of('Z').unwrap(), 26);
/// assert!(index_of('ñ').is_err());
/// ```
pub fn index_of(symbol: char) -> Result<usize, CipherError> {
    match symbol {
        'Ñ' => Ok(ENYE_INDEX),
        'A'..='N' => Ok(symbol as usize - 'A' as usize),
        'O'..='Z' => Ok(symbol as usize - 'A' as usize + 1),
        _ => Err(CipherError::InvalidSymbol(symbol)),
    }
}

/// Map an index in `0..27` back to its alphabet symbol.
///
/// Inverse of [`index_of`].
///
/// # Panics
///
/// Panics when `index` is outside `0..27`; feeding one is a programmer
/// error, not a runtime condition.
pub fn symbol_of(index: usize) -> char {
    assert!(index < ALPHABET_LEN, "alphabet index out of range: {index}");
    match index {
        ENYE_INDEX => 'Ñ',
        0..=13 => (b'A' + index as u8) as char,
        _ => (b'A' + index as u8 - 1) as char,
    }
}

/// Whether `symbol` belongs to the 27-letter alphabet.
pub fn is_alphabet(symbol: char) -> bool {
    symbol == 'Ñ' || symbol.is_ascii_uppercase()
}
