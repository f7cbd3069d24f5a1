//! Consonant/vowel classification and the predicates built on it.
//!
//! Every function here works on the active word as a byte slice, so a
//! "prefix up to index j" is simply `&word[..=j]` (or `&word[..len]`).
//! A letter is a vowel if it is one of `a e i o u`; `y` is a consonant at the
//! start of a word and otherwise the opposite of the letter before it.
//!
//! # Measure
//!
//! With `C` a run of consonants and `V` a run of vowels, every word has the
//! form `[C](VC){m}[V]`, and `m` is its measure:
//!
//! ```text
//! tr, ee, tree, y, by              m = 0
//! trouble, oats, trees, ivy        m = 1
//! troubles, private, oaten         m = 2
//! ```

/// True if the byte at `i` is classified as a consonant.
///
/// The `y` rule refers back to the previous position, so a run of `y`s is
/// resolved by walking back to the first non-`y` byte and alternating from
/// there. Cost is bounded by the length of the run.
pub fn is_consonant(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => {
            let mut start = i;
            while start > 0 && word[start - 1] == b'y' {
                start -= 1;
            }
            // Class of the first `y` in the run.
            let first = start == 0 || !is_plain_consonant(word[start - 1]);
            // Each further `y` flips the class.
            first ^ ((i - start) % 2 == 1)
        }
        _ => true,
    }
}

/// Classification for any byte other than `y`.
fn is_plain_consonant(byte: u8) -> bool {
    !matches!(byte, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Count the VC sequences in `word`.
///
/// The empty word has measure 0.
pub fn measure(word: &[u8]) -> usize {
    let len = word.len();
    let mut i = 0;

    // Skip the optional leading consonant run
    while i < len && is_consonant(word, i) {
        i += 1;
    }

    let mut m = 0;
    while i < len {
        while i < len && !is_consonant(word, i) {
            i += 1;
        }
        if i >= len {
            break;
        }
        m += 1;
        while i < len && is_consonant(word, i) {
            i += 1;
        }
    }

    m
}

/// True if any position of `word` is a vowel.
pub fn has_vowel(word: &[u8]) -> bool {
    (0..word.len()).any(|i| !is_consonant(word, i))
}

/// True if positions `i - 1` and `i` hold the same consonant.
pub fn is_double_consonant(word: &[u8], i: usize) -> bool {
    i >= 1 && i < word.len() && word[i] == word[i - 1] && is_consonant(word, i)
}

/// True if positions `i - 2, i - 1, i` are consonant-vowel-consonant and the
/// last consonant is not `w`, `x` or `y`.
///
/// This decides whether a short stem gets its silent `e` back:
/// `cav(e)`, `lov(e)`, `hop(e)`, `crim(e)`, but `snow`, `box`, `tray`.
pub fn is_cvc(word: &[u8], i: usize) -> bool {
    if i < 2 || i >= word.len() {
        return false;
    }
    if !is_consonant(word, i) || is_consonant(word, i - 1) || !is_consonant(word, i - 2) {
        return false;
    }
    !matches!(word[i], b'w' | b'x' | b'y')
}

/// Render the consonant/vowel pattern of `word`, e.g. `"CCVVCCV"` for `trouble`.
pub fn pattern(word: &[u8]) -> String {
    (0..word.len())
        .map(|i| if is_consonant(word, i) { 'C' } else { 'V' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_classification() {
        let word = b"trouble";

        assert!(is_consonant(word, 0)); // t
        assert!(is_consonant(word, 1)); // r
        assert!(!is_consonant(word, 2)); // o
        assert!(!is_consonant(word, 3)); // u
        assert!(is_consonant(word, 4)); // b
        assert!(is_consonant(word, 5)); // l
        assert!(!is_consonant(word, 6)); // e
    }

    #[test]
    fn test_y_classification() {
        // Leading y is a consonant
        assert!(is_consonant(b"yes", 0));
        // y after a consonant is a vowel
        assert!(!is_consonant(b"by", 1));
        // y after a vowel is a consonant
        assert!(is_consonant(b"toy", 2));
        // Runs alternate: s-y-y-y
        assert_eq!(pattern(b"syyy"), "CVCV");
        assert_eq!(pattern(b"yyy"), "CVC");
        assert_eq!(pattern(b"ayy"), "VCV");
    }

    #[test]
    fn test_measure() {
        for word in ["tr", "ee", "tree", "y", "by"] {
            assert_eq!(measure(word.as_bytes()), 0, "{word}");
        }
        for word in ["trouble", "oats", "trees", "ivy"] {
            assert_eq!(measure(word.as_bytes()), 1, "{word}");
        }
        for word in ["troubles", "private", "oaten", "orrery"] {
            assert_eq!(measure(word.as_bytes()), 2, "{word}");
        }
        assert_eq!(measure(b""), 0);
    }

    #[test]
    fn test_has_vowel() {
        assert!(has_vowel(b"hop"));
        assert!(has_vowel(b"sky"));
        assert!(!has_vowel(b"str"));
        assert!(!has_vowel(b""));
    }

    #[test]
    fn test_double_consonant() {
        assert!(is_double_consonant(b"hopp", 3));
        assert!(is_double_consonant(b"fall", 3));
        assert!(!is_double_consonant(b"feed", 2)); // ee is a vowel pair
        assert!(!is_double_consonant(b"hop", 0));
        assert!(!is_double_consonant(b"hop", 2));
    }

    #[test]
    fn test_cvc() {
        assert!(is_cvc(b"hop", 2));
        assert!(is_cvc(b"cav", 2));
        assert!(!is_cvc(b"snow", 3));
        assert!(!is_cvc(b"box", 2));
        assert!(!is_cvc(b"tray", 3));
        assert!(!is_cvc(b"meet", 3));
        assert!(!is_cvc(b"ho", 1));
    }
}
