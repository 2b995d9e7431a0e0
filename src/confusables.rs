//! Static look-alike tables used by the homoglyph stage.
//!
//! Every target is a plain ASCII letter and never appears as a key, which
//! keeps replacement idempotent.

use phf::{Map, phf_map};

/// Letters from other scripts that render like a Latin letter.
pub static HOMOGLYPHS: Map<char, char> = phf_map! {
    // Cyrillic, lowercase
    '\u{0430}' => 'a', // а
    '\u{0435}' => 'e', // е
    '\u{043E}' => 'o', // о
    '\u{0440}' => 'p', // р
    '\u{0441}' => 'c', // с
    '\u{0443}' => 'y', // у
    '\u{0445}' => 'x', // х
    '\u{0455}' => 's', // ѕ
    '\u{0456}' => 'i', // і
    '\u{0458}' => 'j', // ј
    '\u{04BB}' => 'h', // һ
    '\u{04CF}' => 'l', // ӏ
    '\u{0501}' => 'd', // ԁ
    '\u{051B}' => 'q', // ԛ
    '\u{051D}' => 'w', // ԝ
    // Cyrillic, uppercase
    '\u{0405}' => 'S', // Ѕ
    '\u{0406}' => 'I', // І
    '\u{0408}' => 'J', // Ј
    '\u{0410}' => 'A', // А
    '\u{0412}' => 'B', // В
    '\u{0415}' => 'E', // Е
    '\u{041A}' => 'K', // К
    '\u{041C}' => 'M', // М
    '\u{041D}' => 'H', // Н
    '\u{041E}' => 'O', // О
    '\u{0420}' => 'P', // Р
    '\u{0421}' => 'C', // С
    '\u{0422}' => 'T', // Т
    '\u{0423}' => 'Y', // У
    '\u{0425}' => 'X', // Х
    // Greek, lowercase
    '\u{03B1}' => 'a', // α
    '\u{03B5}' => 'e', // ε
    '\u{03B9}' => 'i', // ι
    '\u{03BA}' => 'k', // κ
    '\u{03BD}' => 'v', // ν
    '\u{03BF}' => 'o', // ο
    '\u{03C1}' => 'p', // ρ
    '\u{03C4}' => 't', // τ
    '\u{03C5}' => 'u', // υ
    '\u{03C7}' => 'x', // χ
    // Greek, uppercase
    '\u{0391}' => 'A', // Α
    '\u{0392}' => 'B', // Β
    '\u{0395}' => 'E', // Ε
    '\u{0396}' => 'Z', // Ζ
    '\u{0397}' => 'H', // Η
    '\u{0399}' => 'I', // Ι
    '\u{039A}' => 'K', // Κ
    '\u{039C}' => 'M', // Μ
    '\u{039D}' => 'N', // Ν
    '\u{039F}' => 'O', // Ο
    '\u{03A1}' => 'P', // Ρ
    '\u{03A4}' => 'T', // Τ
    '\u{03A5}' => 'Y', // Υ
    '\u{03A7}' => 'X', // Χ
    // Latin look-alikes
    '\u{0131}' => 'i', // ı dotless i
    '\u{01C0}' => 'l', // ǀ dental click
    '\u{0251}' => 'a', // ɑ latin alpha
    '\u{0261}' => 'g', // ɡ script g
};

/// Digit and symbol substitutions ("sh1t", "b@d", "a$$").
///
/// Only applied inside tokens that already contain a letter, so plain
/// numbers and prices are left alone.
pub static LEET: Map<char, char> = phf_map! {
    '0' => 'o',
    '1' => 'i',
    '3' => 'e',
    '4' => 'a',
    '5' => 's',
    '7' => 't',
    '8' => 'b',
    '@' => 'a',
    '$' => 's',
};
