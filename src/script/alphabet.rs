//! Karakalpak alphabet character classes
//!
//! Shared ground for script detection and the transliteration tables:
//! which code points belong to each orthography, and the case fold both
//! sides use for matching.

/// Checks whether a character is a Karakalpak Cyrillic letter.
///
/// Russian base range а-я / А-Я plus ё and the eight Karakalpak letters
/// ә, ғ, қ, ң, ө, ү, ў, ҳ in both cases.
pub fn is_cyrillic_letter(c: char) -> bool {
    matches!(
        c,
        'а'..='я'
            | 'А'..='Я'
            | 'ё'
            | 'Ё'
            | 'ә'
            | 'Ә'
            | 'ғ'
            | 'Ғ'
            | 'қ'
            | 'Қ'
            | 'ң'
            | 'Ң'
            | 'ө'
            | 'Ө'
            | 'ү'
            | 'Ү'
            | 'ў'
            | 'Ў'
            | 'ҳ'
            | 'Ҳ'
    )
}

/// Checks whether a character is a Karakalpak Latin letter.
///
/// ASCII letters plus the 2016-orthography letters á, ǵ, ı/Í, ń, ó, ú and
/// the older-orthography alternates ä, ö, ü, ş, ğ, ñ, in both cases.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'á' | 'Á'
                | 'ǵ'
                | 'Ǵ'
                | 'ı'
                | 'Í'
                | 'ń'
                | 'Ń'
                | 'ó'
                | 'Ó'
                | 'ú'
                | 'Ú'
                | 'ä'
                | 'Ä'
                | 'ö'
                | 'Ö'
                | 'ü'
                | 'Ü'
                | 'ş'
                | 'Ş'
                | 'ğ'
                | 'Ğ'
                | 'ñ'
                | 'Ñ'
        )
}

/// Lowercases a single letter for table matching.
///
/// The std mapping sends Í to í and leaves ı without an uppercase partner;
/// Karakalpak pairs Í with dotless ı, so that case is pinned before
/// falling back to the Unicode mapping.
pub fn fold_char(c: char) -> char {
    match c {
        'Í' => 'ı',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Uppercases a single letter when restoring case.
///
/// Counterpart of [`fold_char`]: ı uppercases to Í, not to ASCII I.
pub fn upper_char(c: char) -> char {
    match c {
        'ı' => 'Í',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Case-folds a whole string with [`fold_char`].
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}
