//! Entropy estimate for a generated password.

use super::charset::{self, Selection};

/// Password entropy in bits.
pub fn bits(password_length: usize, alphabet_len: usize) -> f64 {
    if alphabet_len == 0 {
        return 0.0;
    }
    password_length as f64 * (alphabet_len as f64).log2()
}

/// Entropy for a selection at a given length.
pub fn for_selection(selection: &Selection, password_length: usize) -> f64 {
    bits(password_length, charset::size(selection))
}

/// Strength label for an entropy value.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_alphabet_has_no_entropy() {
        assert_eq!(bits(16, 0), 0.0);
        assert_eq!(for_selection(&Selection::none(), 16), 0.0);
    }

    #[test]
    fn bits_scale_with_length() {
        // 2^4 = 16 symbols -> 4 bits each
        assert_eq!(bits(8, 16), 32.0);
        let lower = for_selection(&Selection::default(), 8);
        assert!((lower - 8.0 * 26f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn strength_thresholds() {
        assert_eq!(strength(0.0), "Weak");
        assert_eq!(strength(35.9), "Weak");
        assert_eq!(strength(36.0), "Fair");
        assert_eq!(strength(59.0), "Fair");
        assert_eq!(strength(60.0), "Strong");
        assert_eq!(strength(127.0), "Strong");
        assert_eq!(strength(128.0), "Very Strong");
    }
}
