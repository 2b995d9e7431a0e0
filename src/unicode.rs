// Character classes shared by the normalization stages.
// Everything here is a plain range check; no tables, no allocation.

/// Format controls (Cf) and zero-width characters that are invisible when
/// rendered and therefore popular for splitting words without a visible gap.
#[inline(always)]
pub const fn is_format_control(c: char) -> bool {
    let cp = c as u32;

    // Early exit: almost every character is outside this range
    if cp < 0x00AD || cp > 0xFEFF {
        return false;
    }

    matches!(cp,
        0x00AD |          // soft hyphen
        0x034F |          // combining grapheme joiner
        0x061C |          // arabic letter mark
        0x180E |          // mongolian vowel separator
        0x200B..=0x200F |
        0x202A..=0x202E |
        0x2060..=0x2064 |
        0x2066..=0x2069 |
        0x206A..=0x206F |
        0xFEFF
    )
}

#[inline]
pub fn contains_format_controls(text: &str) -> bool {
    text.chars().any(is_format_control)
}

/// Nonspacing combining marks that carry accents, vowel points and similar
/// diacritics. Only meaningful on decomposed (NFD) text.
#[inline(always)]
pub const fn is_combining_mark(c: char) -> bool {
    matches!(c as u32,
        0x0300..=0x036F | // combining diacritical marks
        0x0483..=0x0489 | // cyrillic titlo and friends
        0x0591..=0x05BD | // hebrew cantillation and points
        0x05BF | 0x05C1 | 0x05C2 | 0x05C4 | 0x05C5 | 0x05C7 |
        0x0610..=0x061A | // arabic honorifics
        0x064B..=0x065F | // arabic harakat
        0x0670 |          // superscript alef
        0x06D6..=0x06DC |
        0x06DF..=0x06E4 |
        0x06E7 | 0x06E8 |
        0x06EA..=0x06ED |
        0x1AB0..=0x1AFF | // combining diacritical marks extended
        0x1DC0..=0x1DFF | // combining diacritical marks supplement
        0x20D0..=0x20FF | // combining marks for symbols
        0xFE20..=0xFE2F   // combining half marks
    )
}

/// Map a fullwidth form (FF01–FF5E, ideographic space) onto its ASCII
/// counterpart; other characters pass through unchanged.
#[inline(always)]
pub fn fullwidth_to_halfwidth(c: char) -> char {
    let cp = c as u32;
    if (0xFF01..=0xFF5E).contains(&cp) {
        // FF01..=FF5E minus FEE0 lands on 21..=7E
        char::from_u32(cp - 0xFEE0).unwrap_or(c)
    } else if cp == 0x3000 {
        ' '
    } else {
        c
    }
}

/// A single Unicode scalar that counts as a letter for word-level heuristics.
#[inline(always)]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}
