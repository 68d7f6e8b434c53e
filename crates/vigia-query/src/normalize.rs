//! Case- and diacritic-insensitive canonical text.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase `text` and fold accented characters to their base letter.
///
/// Decomposes to NFD and drops combining marks, so `"Ñuñoa"` becomes
/// `"nunoa"` and `"COLISIÓN"` becomes `"colision"`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_lowercase()
}
