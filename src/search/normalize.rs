//! Canonical-key pipeline.
//!
//! Collapses the spelling variants of a name (native Devanagari, Romanized,
//! accented Romanization) onto one ASCII canonical key so that edit-distance
//! similarity produces meaningful scores across scripts. Stages, in order:
//! Devanagari transliteration (best-effort, pass-through when not
//! applicable), diacritic folding to ASCII, lowercasing, trimming.

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

const VIRAMA: char = '\u{094D}';
const NUKTA: char = '\u{093C}';

/// Map arbitrary input text to its canonical comparable form.
///
/// Total and deterministic: same input always yields the same output, and no
/// input produces an error. The result is trimmed lowercase ASCII, which
/// makes the function idempotent.
pub fn normalize(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    // Transliteration is internally fallible; failure means pass-through,
    // never an observable error.
    let romanized = match transliterate_devanagari(text) {
        Some(t) => t,
        None => text.to_string(),
    };

    fold_ascii(&romanized).to_lowercase().trim().to_string()
}

fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}

/// Roman phonetic transliteration of Devanagari text.
///
/// Returns `None` when the input contains no Devanagari at all, which the
/// caller treats as the pass-through fallback. Consonants carry an inherent
/// `a`; a following vowel sign replaces it and a virama suppresses it. The
/// scheme folds vowel length (आ and अ both become `a`), which is what lets
/// common Romanizations like "ram" land close to the transliterated "rama".
fn transliterate_devanagari(input: &str) -> Option<String> {
    if !input.chars().any(is_devanagari) {
        return None;
    }

    fn flush(out: &mut String, pending: &mut bool) {
        if *pending {
            out.push('a');
            *pending = false;
        }
    }

    let mut out = String::with_capacity(input.len());
    // Inherent 'a' pending after the previous consonant
    let mut pending = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if let Some(c) = consonant(ch) {
            // NFC keeps consonant + nukta pairs decomposed (composition
            // exclusions), so a following nukta modifies this consonant
            let c = if chars.next_if_eq(&NUKTA).is_some() {
                nukta_consonant(ch).unwrap_or(c)
            } else {
                c
            };
            flush(&mut out, &mut pending);
            out.push_str(c);
            pending = true;
        } else if ch == VIRAMA {
            pending = false;
        } else if let Some(v) = vowel_sign(ch) {
            out.push_str(v);
            pending = false;
        } else if let Some(v) = independent_vowel(ch) {
            flush(&mut out, &mut pending);
            out.push_str(v);
        } else if let Some(s) = sign(ch) {
            flush(&mut out, &mut pending);
            out.push_str(s);
        } else {
            flush(&mut out, &mut pending);
            out.push(ch);
        }
    }
    if pending {
        out.push('a');
    }

    Some(out)
}

fn consonant(ch: char) -> Option<&'static str> {
    Some(match ch {
        'क' => "k",
        'ख' => "kh",
        'ग' => "g",
        'घ' => "gh",
        'ङ' => "n",
        'च' => "ch",
        'छ' => "chh",
        'ज' => "j",
        'झ' => "jh",
        'ञ' => "n",
        'ट' => "t",
        'ठ' => "th",
        'ड' => "d",
        'ढ' => "dh",
        'ण' => "n",
        'त' => "t",
        'थ' => "th",
        'द' => "d",
        'ध' => "dh",
        'न' => "n",
        'प' => "p",
        'फ' => "ph",
        'ब' => "b",
        'भ' => "bh",
        'म' => "m",
        'य' => "y",
        'र' => "r",
        'ल' => "l",
        'ळ' => "l",
        'व' => "v",
        'श' => "sh",
        'ष' => "sh",
        'स' => "s",
        'ह' => "h",
        // Precomposed nukta forms, U+0958..U+095F
        '\u{0958}' => "q",  // क़
        '\u{0959}' => "kh", // ख़
        '\u{095A}' => "g",  // ग़
        '\u{095B}' => "z",  // ज़
        '\u{095C}' => "r",  // ड़
        '\u{095D}' => "rh", // ढ़
        '\u{095E}' => "f",  // फ़
        '\u{095F}' => "y",  // य़
        _ => return None,
    })
}

/// Nukta variant of a base consonant, for decomposed consonant + U+093C
/// sequences.
fn nukta_consonant(ch: char) -> Option<&'static str> {
    Some(match ch {
        'क' => "q",
        'ख' => "kh",
        'ग' => "g",
        'ज' => "z",
        'ड' => "r",
        'ढ' => "rh",
        'फ' => "f",
        'य' => "y",
        _ => return None,
    })
}

fn independent_vowel(ch: char) -> Option<&'static str> {
    Some(match ch {
        'अ' | 'आ' | 'ऑ' | 'ऄ' => "a",
        'इ' | 'ई' => "i",
        'उ' | 'ऊ' => "u",
        'ऋ' | 'ॠ' => "ri",
        'ऌ' | 'ॡ' => "li",
        'ए' | 'ऍ' | 'ऎ' => "e",
        'ऐ' => "ai",
        'ओ' | 'ऒ' => "o",
        'औ' => "au",
        _ => return None,
    })
}

fn vowel_sign(ch: char) -> Option<&'static str> {
    Some(match ch {
        'ा' | 'ॉ' => "a",
        'ि' | 'ी' => "i",
        'ु' | 'ू' => "u",
        'ृ' | 'ॄ' => "ri",
        'े' | 'ॅ' | 'ॆ' => "e",
        'ै' => "ai",
        'ो' | 'ॊ' => "o",
        'ौ' => "au",
        _ => return None,
    })
}

fn sign(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\u{0902}' => "m",  // anusvara
        '\u{0901}' => "n",  // candrabindu
        '\u{0903}' => "h",  // visarga
        '\u{093C}' => "",   // stray nukta
        'ऽ' => "",          // avagraha
        'ॐ' => "om",
        '।' | '॥' => " ",
        '०' => "0",
        '१' => "1",
        '२' => "2",
        '३' => "3",
        '४' => "4",
        '५' => "5",
        '६' => "6",
        '७' => "7",
        '८' => "8",
        '९' => "9",
        _ => return None,
    })
}

/// Fold non-ASCII letter forms to their closest ASCII representation.
///
/// NFD decomposition separates base letters from their combining marks; the
/// marks are dropped, a fixed table covers letters that do not decompose, and
/// anything still non-ASCII after that is dropped.
fn fold_ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.nfd() {
        if ch.is_ascii() {
            out.push(ch);
        } else if ch.is_mark_nonspacing() {
            // Combining accent, already represented by its base letter
        } else if let Some(rep) = latin_fold(ch) {
            out.push_str(rep);
        }
        // Everything else has no ASCII representation and is dropped
    }
    out
}

fn latin_fold(ch: char) -> Option<&'static str> {
    Some(match ch {
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'đ' => "d",
        'Đ' => "D",
        'ð' => "d",
        'Ð' => "D",
        'þ' => "th",
        'Þ' => "Th",
        'ł' => "l",
        'Ł' => "L",
        _ => return None,
    })
}
