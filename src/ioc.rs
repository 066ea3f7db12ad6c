//! Letter statistics: frequency counting, the Index of Coincidence and
//! chi-shift scoring against the Spanish letter distribution.
//! https://en.wikipedia.org/wiki/Index_of_coincidence

use crate::alphabet::ALPHABET_LEN;

/// Letter frequencies (as probabilities) for the Spanish language, in
/// alphabet order A..N, Ñ, O..Z.
pub const SPANISH_FREQ: [f64; ALPHABET_LEN] = [
    0.12027, 0.02215, 0.04019, 0.05010, 0.12614, 0.00692, 0.01768, // A - G
    0.00703, 0.06972, 0.00493, 0.00011, 0.04967, 0.03157, 0.06712, // H - N
    0.00311, 0.09510, 0.02510, 0.00877, 0.06871, 0.07977, 0.04632, // Ñ - T
    0.03107, 0.01138, 0.00017, 0.00215, 0.01008, 0.00467, // U - Z
];

/// Expected Index of Coincidence of monoalphabetic Spanish text.
pub const SPANISH_IOC: f64 = 0.07247;

/// Count the relative frequency of each alphabet index in `block`.
///
/// An empty block yields all zeroes rather than an array of NaN.
///
/// ```
/// use cifra::ioc::count_freq;
/// assert_eq!(count_freq(&[4, 4, 4])[4], 1.0);
/// ```
pub fn count_freq(block: &[usize]) -> [f64; ALPHABET_LEN] {
    let mut freq = [0.0; ALPHABET_LEN];
    if block.is_empty() {
        return freq;
    }

    for &i in block {
        freq[i] += 1.0;
    }
    for f in freq.iter_mut() {
        *f /= block.len() as f64;
    }
    freq
}

/// Calculate the Index of Coincidence of a character distribution.
///
/// Bounded by `1/27` (uniform) and `1.0` (a single repeated symbol).
pub fn index_of_coincidence(freq: &[f64; ALPHABET_LEN]) -> f64 {
    freq.iter().map(|q| q * q).sum()
}

/// Dot product of the Spanish distribution against `freq` rotated by
/// `shift` positions. Largest when `shift` undoes the cipher shift that
/// produced `freq`.
pub fn chi_shift(freq: &[f64; ALPHABET_LEN], shift: usize) -> f64 {
    SPANISH_FREQ
        .iter()
        .enumerate()
        .map(|(i, p)| p * freq[(i + shift) % ALPHABET_LEN])
        .sum()
}

/// Find the shift whose chi-shift score lies closest to [`SPANISH_IOC`],
/// i.e. the most plausible key index for the column `freq` was counted
/// from. Ties go to the smallest shift.
pub fn best_shift(freq: &[f64; ALPHABET_LEN]) -> usize {
    let mut best = 0;
    let mut dif = 1.0;
    for shift in 0..ALPHABET_LEN {
        let approx = (chi_shift(freq, shift) - SPANISH_IOC).abs();
        if approx < dif {
            best = shift;
            dif = approx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::index_of;

    fn indices(text: &str) -> Vec<usize> {
        text.chars().map(|c| index_of(c).unwrap()).collect()
    }

    #[test]
    fn test_spanish_freq_is_a_distribution() {
        let total: f64 = SPANISH_FREQ.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        // the target IC is exactly the self-coincidence of the table
        let self_ic: f64 = SPANISH_FREQ.iter().map(|p| p * p).sum();
        assert!((self_ic - SPANISH_IOC).abs() < 1e-5);
    }

    #[test]
    fn test_count_freq() {
        let freq = count_freq(&indices("ABBA"));
        assert_eq!(freq[0], 0.5);
        assert_eq!(freq[1], 0.5);
        assert_eq!(freq[2], 0.0);
    }

    #[test]
    fn test_count_freq_empty_block() {
        assert_eq!(count_freq(&[]), [0.0; ALPHABET_LEN]);
    }

    #[test]
    fn test_ioc_uniform_and_degenerate() {
        let uniform = [1.0 / 27.0; ALPHABET_LEN];
        assert!((index_of_coincidence(&uniform) - 1.0 / 27.0).abs() < 1e-12);

        let single = count_freq(&indices("ÑÑÑÑ"));
        assert!((index_of_coincidence(&single) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_chi_shift_zero_on_language_distribution() {
        // a column distributed exactly like Spanish scores the target IC
        // at shift 0
        assert!((chi_shift(&SPANISH_FREQ, 0) - SPANISH_IOC).abs() < 1e-5);
    }

    #[test]
    fn test_best_shift_recovers_rotation() {
        // rotate the language distribution as a Vigenère shift by k would:
        // a plaintext symbol i is observed at index (i + k) % 27, so the
        // shifted frequency q satisfies q[(i + k) % 27] = p[i]
        for k in [0, 1, 5, 14, 26] {
            let mut freq = [0.0; ALPHABET_LEN];
            for (i, p) in SPANISH_FREQ.iter().enumerate() {
                freq[(i + k) % ALPHABET_LEN] = *p;
            }
            assert_eq!(best_shift(&freq), k);
        }
    }
}
