//! Password generation.

use log::{debug, trace};
use zeroize::Zeroizing;

use super::charset::{self, Alphabet, Selection};
use super::length::PasswordLength;
use crate::error::GenerationError;
use crate::random::{self, RandomSource};

/// A freshly generated password. Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(Zeroizing<String>);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl std::fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.len())
    }
}

/// Generate a password of `length` characters from the selected classes.
pub fn generate_password<R>(
    selection: &Selection,
    length: PasswordLength,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let alphabet = charset::build(selection);
    generate_from_alphabet(&alphabet, length.get(), rng)
}

/// Generate from a pre-built alphabet.
pub fn generate_from_alphabet<R>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerationError>
where
    R: RandomSource + ?Sized,
{
    if alphabet.is_empty() {
        debug!("refusing to generate from an empty alphabet");
        return Err(GenerationError::EmptyAlphabet);
    }

    trace!("alphabet size {}, length {}", alphabet.len(), length);

    let chars = alphabet.as_slice();
    let mut out = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        out.push(chars[random::index(rng.next_unit(), chars.len())]);
    }

    debug!("generated {length}-character password");
    Ok(GeneratedPassword(out))
}

/// Generate `count` passwords, building the alphabet once.
pub fn generate_batch<R>(
    selection: &Selection,
    length: PasswordLength,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedPassword>, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let alphabet = charset::build(selection);
    (0..count)
        .map(|_| generate_from_alphabet(&alphabet, length.get(), rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{CharClass, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
    use crate::random::{FixedSequence, RngSource, ThreadRandom};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn len(n: usize) -> PasswordLength {
        PasswordLength::try_from(n).unwrap()
    }

    fn every_selection() -> impl Iterator<Item = Selection> {
        (1u8..16).map(|bits| {
            CharClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect()
        })
    }

    #[test]
    fn exact_length_for_every_selection_and_length() {
        let mut rng = RngSource(StdRng::seed_from_u64(42));
        for selection in every_selection() {
            for n in 4..=16 {
                let pass = generate_password(&selection, len(n), &mut rng).unwrap();
                assert_eq!(pass.len(), n);
            }
        }
    }

    #[test]
    fn characters_come_from_the_alphabet() {
        let mut rng = ThreadRandom::new();
        for selection in every_selection() {
            let alphabet = charset::build(&selection);
            let pass = generate_password(&selection, len(16), &mut rng).unwrap();
            assert!(pass.chars().all(|c| alphabet.contains(c)), "{:?}", selection);
        }
    }

    #[test]
    fn lowercase_only_eight() {
        let selection = Selection::default();
        let pass = generate_password(&selection, len(8), &mut ThreadRandom::new()).unwrap();
        assert_eq!(pass.len(), 8);
        assert!(pass.chars().all(|c| LOWERCASE.contains(c)));
    }

    #[test]
    fn uppercase_and_digits_four() {
        let selection = Selection {
            uppercase: true,
            digits: true,
            ..Selection::none()
        };
        let pass = generate_password(&selection, len(4), &mut ThreadRandom::new()).unwrap();
        assert_eq!(pass.len(), 4);
        assert!(
            pass.chars()
                .all(|c| UPPERCASE.contains(c) || DIGITS.contains(c))
        );
    }

    #[test]
    fn empty_selection_fails() {
        let mut rng = FixedSequence::new(vec![0.0]);
        assert_eq!(
            generate_password(&Selection::none(), len(8), &mut rng),
            Err(GenerationError::EmptyAlphabet)
        );
    }

    #[test]
    fn fixed_sequence_picks_expected_characters() {
        // uppercase + lowercase + digits + symbols = 74 chars
        let selection = Selection {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        };
        let mut rng = FixedSequence::new(vec![0.5 / 74.0, 26.5 / 74.0, 52.5 / 74.0, 62.5 / 74.0]);
        let pass = generate_password(&selection, len(4), &mut rng).unwrap();
        assert_eq!(pass.as_str(), "Aa0!");
    }

    #[test]
    fn top_of_range_maps_to_last_character() {
        let selection = Selection {
            symbols: true,
            ..Selection::none()
        };
        let mut rng = FixedSequence::new(vec![1.0 - f64::EPSILON, 1.0]);
        let pass = generate_password(&selection, len(6), &mut rng).unwrap();
        let last = SYMBOLS.chars().last().unwrap();
        assert!(pass.chars().all(|c| c == last));
    }

    #[test]
    fn same_sequence_same_password() {
        let selection = Selection {
            lowercase: true,
            digits: true,
            ..Selection::none()
        };
        let a = generate_password(&selection, len(12), &mut RngSource(StdRng::seed_from_u64(9)));
        let b = generate_password(&selection, len(12), &mut RngSource(StdRng::seed_from_u64(9)));
        assert_eq!(a, b);
    }

    #[test]
    fn batch_yields_independent_passwords() {
        let mut rng = FixedSequence::new(vec![0.0, 0.5]);
        let batch = generate_batch(&Selection::default(), len(5), 3, &mut rng).unwrap();
        assert_eq!(batch.len(), 3);
        // odd length, so the two-value sequence shifts phase between passwords
        assert_eq!(batch[0].as_str(), "anana");
        assert_eq!(batch[1].as_str(), "nanan");
        assert_eq!(batch[2].as_str(), "anana");
    }

    #[test]
    fn batch_from_empty_selection_fails() {
        let mut rng = FixedSequence::new(vec![0.0]);
        let err = generate_batch(&Selection::none(), len(5), 2, &mut rng).unwrap_err();
        assert_eq!(err, GenerationError::EmptyAlphabet);
    }

    #[test]
    fn debug_hides_contents() {
        let mut rng = FixedSequence::new(vec![0.0]);
        let pass = generate_password(&Selection::default(), len(5), &mut rng).unwrap();
        assert_eq!(pass.as_str(), "aaaaa");
        assert_eq!(format!("{:?}", pass), "GeneratedPassword(<5 chars>)");
    }
}
