//! Persian Joining Table
//!
//! Maps each supported base letter to its positional presentation forms.
//! Entries hold either `[isolated, final]` (right-joining letters) or
//! `[isolated, final, initial, medial]` (dual-joining letters); the joining
//! class of a letter follows from the length of its entry.

/// Tatweel (kashida). Has no entry of its own but joins forward.
pub const ELONGATOR: char = '\u{0640}';

/// Every letter with a table entry, including the two legacy Arabic aliases
/// (U+064A Yeh and U+0643 Kaf).
pub const ALPHABET: [char; 36] = [
    '\u{0622}', // Alef with madda
    '\u{0627}', // Alef
    '\u{0628}', // Beh
    '\u{067E}', // Peh
    '\u{062A}', // Teh
    '\u{062B}', // Theh
    '\u{062C}', // Jeem
    '\u{0686}', // Tcheh
    '\u{062D}', // Hah
    '\u{062E}', // Khah
    '\u{062F}', // Dal
    '\u{0630}', // Thal
    '\u{0631}', // Reh
    '\u{0632}', // Zain
    '\u{0698}', // Jeh
    '\u{0633}', // Seen
    '\u{0634}', // Sheen
    '\u{0635}', // Sad
    '\u{0636}', // Dad
    '\u{0637}', // Tah
    '\u{0638}', // Zah
    '\u{0639}', // Ain
    '\u{063A}', // Ghain
    '\u{0641}', // Feh
    '\u{0642}', // Qaf
    '\u{06A9}', // Keheh
    '\u{0643}', // Kaf
    '\u{06AF}', // Gaf
    '\u{0644}', // Lam
    '\u{0645}', // Meem
    '\u{0646}', // Noon
    '\u{0648}', // Waw
    '\u{0647}', // Heh
    '\u{06CC}', // Farsi yeh
    '\u{064A}', // Yeh
    '\u{0626}', // Yeh with hamza
];

/// Get the presentation forms for a base letter
///
/// Returns `None` for anything outside the alphabet, including the
/// elongator and presentation forms themselves.
pub fn presentation_forms(c: char) -> Option<&'static [char]> {
    let forms: &'static [char] = match c {
        // Right-joining letters
        '\u{0622}' => &['\u{FE81}', '\u{FE82}'],
        '\u{0627}' => &['\u{FE8D}', '\u{FE8E}'],
        '\u{062F}' => &['\u{FEA9}', '\u{FEAA}'],
        '\u{0630}' => &['\u{FEAB}', '\u{FEAC}'],
        '\u{0631}' => &['\u{FEAD}', '\u{FEAE}'],
        '\u{0632}' => &['\u{FEAF}', '\u{FEB0}'],
        '\u{0698}' => &['\u{FB8A}', '\u{FB8B}'],
        '\u{0648}' => &['\u{FEEE}', '\u{FEEF}'],

        // Dual-joining letters
        '\u{0628}' => &['\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'],
        '\u{067E}' => &['\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'],
        '\u{062A}' => &['\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'],
        '\u{062B}' => &['\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'],
        '\u{062C}' => &['\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'],
        '\u{0686}' => &['\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'],
        '\u{062D}' => &['\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'],
        '\u{062E}' => &['\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'],
        '\u{0633}' => &['\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'],
        '\u{0634}' => &['\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'],
        '\u{0635}' => &['\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'],
        '\u{0636}' => &['\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'],
        '\u{0637}' => &['\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'],
        '\u{0638}' => &['\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'],
        '\u{0639}' => &['\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'],
        '\u{063A}' => &['\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'],
        '\u{0641}' => &['\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'],
        '\u{0642}' => &['\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'],
        // Keheh, plus legacy Arabic Kaf sharing its glyphs
        '\u{06A9}' | '\u{0643}' => &['\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'],
        '\u{06AF}' => &['\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'],
        '\u{0644}' => &['\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'],
        '\u{0645}' => &['\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'],
        '\u{0646}' => &['\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'],
        '\u{0647}' => &['\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'],
        // Farsi yeh, plus legacy Arabic Yeh sharing its glyphs
        '\u{06CC}' | '\u{064A}' => &['\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'],
        '\u{0626}' => &['\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'],

        _ => return None,
    };

    Some(forms)
}

/// Check whether a character lies in the Arabic presentation-form blocks
///
/// Covers Presentation Forms-A (U+FB50..U+FDFF) and Forms-B
/// (U+FE70..U+FEFC). U+FEFF (BOM) is excluded.
pub fn is_presentation_form(c: char) -> bool {
    matches!(c as u32, 0xFB50..=0xFDFF | 0xFE70..=0xFEFC)
}
