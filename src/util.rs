use rand::Rng;

const DIGITS: &[u8] = b"0123456789";
const NON_ZERO_DIGITS: &[u8] = b"123456789";
const UPPER_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPER_ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn random_from<R: Rng + ?Sized>(rng: &mut R, charset: &[u8], len: usize, out: &mut String) {
    for _ in 0..len {
        let idx = rng.gen_range(0..charset.len());
        out.push(char::from(charset[idx]));
    }
}

pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    random_from(rng, DIGITS, len, &mut out);
    out
}

/// Digit string whose first character is `0` when `leading_zero` is set and
/// never `0` otherwise.
pub fn random_number_string<R: Rng + ?Sized>(rng: &mut R, len: usize, leading_zero: bool) -> String {
    let mut out = String::with_capacity(len);
    if len == 0 {
        return out;
    }
    if leading_zero {
        out.push('0');
    } else {
        random_from(rng, NON_ZERO_DIGITS, 1, &mut out);
    }
    random_from(rng, DIGITS, len - 1, &mut out);
    out
}

pub fn random_upper_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    random_from(rng, UPPER_LETTERS, len, &mut out);
    out
}

pub fn random_alphanum_upper<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    random_from(rng, UPPER_ALPHANUM, len, &mut out);
    out
}

/// SWIFT BIC in the 8 or 11 character form.
pub fn random_bic<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = random_upper_letters(rng, 6);
    random_from(rng, UPPER_ALPHANUM, len.saturating_sub(6), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_valid_bic;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn number_string_honours_leading_digit() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let with_zero = random_number_string(&mut rng, 9, true);
            assert!(with_zero.starts_with('0'));
            assert_eq!(with_zero.len(), 9);

            let without_zero = random_number_string(&mut rng, 9, false);
            assert!(!without_zero.starts_with('0'));
            assert!(without_zero.chars().all(|ch| ch.is_ascii_digit()));
        }
        assert!(random_number_string(&mut rng, 0, false).is_empty());
    }

    #[test]
    fn bics_match_the_swift_pattern() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for len in [8, 11] {
            for _ in 0..20 {
                let bic = random_bic(&mut rng, len);
                assert_eq!(bic.len(), len);
                assert!(is_valid_bic(&bic), "{bic}");
            }
        }
    }
}
