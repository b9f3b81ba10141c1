use unicode_normalization::UnicodeNormalization;

/// Fold `s` for accent- and case-insensitive comparison.
///
/// Decomposes to NFD, drops combining diacritical marks (U+0300..=U+036F)
/// and lowercases. `"Áo"` and `"ao"` fold to the same string. Idempotent.
pub fn normalize(s: &str) -> String {
    let stripped: String = s.nfd().filter(|c| !is_mark(*c)).collect();
    stripped.to_lowercase()
}

fn is_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
