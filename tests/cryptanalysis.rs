use anyhow::Result;
use cifra::alphabet::index_of;
use cifra::analysis::{crack, Cryptanalysis};
use cifra::ioc::{count_freq, index_of_coincidence};
use cifra::vigenere::Vigenere;

/// 60k letters drawn from the Spanish frequency table, in word-sized
/// groups. Real prose drifts from the table; sampled text keeps every
/// period-5 column of the ciphertext inside the estimator's tolerance.
const CORPUS: &str = include_str!("files/corpus_es.txt");
const KEY: &str = "LIMON";

fn ciphertext() -> Result<String> {
    Ok(Vigenere::new(KEY)?.encrypt(CORPUS))
}

#[test]
fn key_length_is_found_for_every_seed() -> Result<()> {
    let ciphertext = ciphertext()?;
    for seed in 0..32 {
        let mut analysis = Cryptanalysis::with_seed(&ciphertext, seed);
        assert_eq!(analysis.key_length(), KEY.chars().count());
    }

    Ok(())
}

#[test]
fn key_length_averaged_is_deterministic() -> Result<()> {
    let analysis = Cryptanalysis::new(&ciphertext()?);
    assert_eq!(analysis.key_length_averaged(), KEY.chars().count());

    Ok(())
}

#[test]
fn generate_key_recovers_every_key_symbol() -> Result<()> {
    let analysis = Cryptanalysis::new(&ciphertext()?);
    assert_eq!(analysis.generate_key(5), KEY);
    // at a multiple of the true period each column still decrypts to a
    // single key symbol, so the recovered key is the repetition
    assert_eq!(analysis.generate_key(10), "LIMONLIMON");
    assert_eq!(analysis.generate_key(0), "");

    Ok(())
}

#[test]
fn crack_end_to_end() -> Result<()> {
    let ciphertext = ciphertext()?;
    let key = crack(&ciphertext);
    assert_eq!(key, KEY);
    assert_eq!(Vigenere::new(&key)?.decrypt(&ciphertext), CORPUS);

    Ok(())
}

#[test]
fn crack_empty_input_yields_empty_key() {
    assert_eq!(crack(""), "");
}

/// A monoalphabetic shift of the corpus is period 1, and the recovered
/// single-symbol key is the shift itself.
#[test]
fn monoalphabetic_shift_is_recovered() -> Result<()> {
    for key in ["A", "H", "Ñ", "Z"] {
        let ciphertext = Vigenere::new(key)?.encrypt(CORPUS);
        let mut analysis = Cryptanalysis::with_seed(&ciphertext, 7);
        let length = analysis.key_length();
        assert_eq!(length, 1);
        assert_eq!(analysis.generate_key(length), key);
    }

    Ok(())
}

#[test]
fn column_ioc_stays_within_bounds() -> Result<()> {
    let ciphertext = ciphertext()?;
    let indices: Vec<usize> = ciphertext.chars().filter_map(|c| index_of(c).ok()).collect();

    for period in 1..=10 {
        for offset in 0..period {
            let column: Vec<usize> = indices.iter().copied().skip(offset).step_by(period).collect();
            let ic = index_of_coincidence(&count_freq(&column));
            assert!(ic >= 1.0 / 27.0 - 1e-12 && ic <= 1.0);
        }
    }

    Ok(())
}

#[test]
fn same_seed_same_estimate() -> Result<()> {
    let ciphertext = ciphertext()?;
    let a = Cryptanalysis::with_seed(&ciphertext, 42).key_length_averaged();
    let mut b = Cryptanalysis::with_seed(&ciphertext, 42);
    let mut c = Cryptanalysis::with_seed(&ciphertext, 42);
    assert_eq!(b.key_length(), c.key_length());
    assert_eq!(a, 5);

    Ok(())
}
