// src/core/script.rs
//! Unicode helpers for Hebrew script: the nikud range, the letter range,
//! token extraction and the simplified syllable chunker shared by the
//! morphological and phonetic analyzers.

/// First and last code points treated as vowel points (nikud, dagesh,
/// shin/sin dots and cantillation).
pub const NIKUD_START: char = '\u{0591}';
pub const NIKUD_END: char = '\u{05C7}';

/// Letters that often carry a vowel rather than a consonant (matres lectionis).
pub const VOWEL_LETTERS: [char; 4] = ['א', 'ו', 'י', 'ה'];

pub fn is_nikud(c: char) -> bool {
    (NIKUD_START..=NIKUD_END).contains(&c)
}

/// Base letters alef..tav, final forms included.
pub fn is_hebrew_letter(c: char) -> bool {
    ('\u{05D0}'..='\u{05EA}').contains(&c)
}

/// Anything in the Hebrew Unicode block.
pub fn is_hebrew_block(c: char) -> bool {
    ('\u{0590}'..='\u{05FF}').contains(&c)
}

fn is_ligature(c: char) -> bool {
    ('\u{05F0}'..='\u{05F4}').contains(&c)
}

pub fn is_vowel_letter(c: char) -> bool {
    VOWEL_LETTERS.contains(&c)
}

pub fn has_nikud(text: &str) -> bool {
    text.chars().any(is_nikud)
}

/// Strips every vowel-point code point, leaving everything else untouched.
pub fn remove_nikud(text: &str) -> String {
    text.chars().filter(|&c| !is_nikud(c)).collect()
}

/// Consonantal skeleton of a word: no nikud, no ligatures, no surrounding
/// whitespace.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|&c| !is_nikud(c) && !is_ligature(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Simplified CV chunker. Letters accumulate into the current syllable,
/// which closes on a vowel-carrying letter or once it holds three letters.
/// Never returns an empty list.
pub fn syllabify(clean: &str) -> Vec<String> {
    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for c in clean.chars() {
        current.push(c);
        current_len += 1;
        if is_vowel_letter(c) || current_len >= 3 {
            syllables.push(std::mem::take(&mut current));
            current_len = 0;
        }
    }
    if !current.is_empty() {
        syllables.push(current);
    }

    if syllables.is_empty() {
        syllables.push(clean.to_string());
    }
    syllables
}

/// Maximal runs of Hebrew-block characters in `text`, in order of
/// appearance, duplicates included.
pub fn hebrew_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (is_hebrew_block(c), start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                tokens.push(&text[s..idx]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    tokens
}

/// True when `text` is non-empty and made only of Hebrew-block characters,
/// whitespace and light punctuation.
pub fn is_hebrew_text(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| is_hebrew_block(c) || c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | '׳' | '״'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_points_and_keeps_letters() {
        assert_eq!(remove_nikud("שֶׁמֶשׁ"), "שמש");
        assert_eq!(remove_nikud("abc"), "abc");
        assert!(has_nikud("כֶּלֶב"));
        assert!(!has_nikud("כלב"));
    }

    #[test]
    fn syllables_close_on_vowel_letters_or_three_letters() {
        assert_eq!(syllabify("משחק"), vec!["משח", "ק"]);
        assert_eq!(syllabify("שלום"), vec!["שלו", "ם"]);
        assert_eq!(syllabify("אבא"), vec!["א", "בא"]);
        assert_eq!(syllabify("גן"), vec!["גן"]);
        assert_eq!(syllabify(""), vec![""]);
    }

    #[test]
    fn tokens_split_on_non_hebrew() {
        assert_eq!(hebrew_tokens("כלב, חתול and דג!"), vec!["כלב", "חתול", "דג"]);
        assert_eq!(hebrew_tokens("{\"word\":\"כֶּלֶב\"}"), vec!["כֶּלֶב"]);
        assert!(hebrew_tokens("no hebrew here").is_empty());
    }

    #[test]
    fn hebrew_text_detection() {
        assert!(is_hebrew_text("כלב חתול."));
        assert!(!is_hebrew_text("dog"));
        assert!(!is_hebrew_text(""));
    }
}
