//! ASCII case normalization.
//!
//! All comparisons in this crate are done on uppercase bytes. Only `a`-`z`
//! are touched; digits, punctuation, uppercase letters and non-ASCII bytes
//! are left alone.

/// Uppercase a single byte if it is an ASCII lowercase letter.
#[inline]
pub fn upper_byte(b: u8) -> u8 {
    if b.is_ascii_lowercase() {
        b - b'a' + b'A'
    } else {
        b
    }
}

/// Uppercase `bytes` in place and hand the same slice back for chaining.
pub fn to_upper_in_place(bytes: &mut [u8]) -> &mut [u8] {
    for b in bytes.iter_mut() {
        *b = upper_byte(*b);
    }
    bytes
}

/// Uppercased copy of `word`. The input is left untouched.
pub fn to_upper(word: &str) -> String {
    // Only ASCII bytes change, so the result stays valid UTF-8.
    word.chars()
        .map(|c| if c.is_ascii() { upper_byte(c as u8) as char } else { c })
        .collect()
}
