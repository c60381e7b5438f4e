// File: src/core/transcription.rs
use crate::core::script::{is_hebrew_letter, is_nikud};

const DAGESH: char = '\u{05BC}';
const SHIN_DOT: char = '\u{05C1}';
const SIN_DOT: char = '\u{05C2}';
const HOLAM: char = '\u{05B9}';
const PATACH: char = '\u{05B7}';

/// A stateless pointed-Hebrew to Latin transcriber.
///
/// Unpointed input still transcribes, but only consonants come out and
/// begadkefat letters take their soft reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transcriber;

impl Transcriber {
    pub fn new() -> Self {
        Self
    }

    /// Transcribes a full string. Non-Hebrew characters pass through.
    pub fn transcribe(&self, text: &str) -> String {
        let mut result = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if !is_hebrew_letter(c) {
                if !is_nikud(c) {
                    result.push(c);
                }
                continue;
            }

            let mut marks = Vec::new();
            while let Some(&m) = chars.peek() {
                if !is_nikud(m) {
                    break;
                }
                marks.push(m);
                chars.next();
            }
            let word_final = chars.peek().map_or(true, |&next| !is_hebrew_letter(next));

            match c {
                // holam male and shuruk are vowels, not consonants
                'ו' if marks.contains(&HOLAM) => result.push('o'),
                'ו' if marks == [DAGESH] => result.push('u'),
                // furtive patach is read before its guttural
                'ח' | 'ע' | 'ה' if word_final && marks.contains(&PATACH) => {
                    result.push('a');
                    result.push_str(self.get_consonant(c, &marks));
                }
                // silent final he
                'ה' if word_final && marks.is_empty() => {}
                _ => {
                    result.push_str(self.get_consonant(c, &marks));
                    for mark in &marks {
                        result.push_str(self.get_vowel(*mark));
                    }
                }
            }
        }

        result
    }

    fn get_consonant(&self, c: char, marks: &[char]) -> &'static str {
        let hard = marks.contains(&DAGESH);
        match c {
            'א' | 'ע' => "",
            'ב' => if hard { "b" } else { "v" },
            'ג' => "g",
            'ד' => "d",
            'ה' => "h",
            'ו' => "v",
            'ז' => "z",
            'ח' => "kh",
            'ט' => "t",
            'י' => "y",
            'כ' | 'ך' => if hard { "k" } else { "kh" },
            'ל' => "l",
            'מ' | 'ם' => "m",
            'נ' | 'ן' => "n",
            'ס' => "s",
            'פ' | 'ף' => if hard { "p" } else { "f" },
            'צ' | 'ץ' => "ts",
            'ק' => "k",
            'ר' => "r",
            'ש' => if marks.contains(&SIN_DOT) && !marks.contains(&SHIN_DOT) { "s" } else { "sh" },
            'ת' => "t",
            _ => "",
        }
    }

    fn get_vowel(&self, mark: char) -> &'static str {
        match mark {
            '\u{05B7}' | '\u{05B8}' | '\u{05B2}' => "a",
            '\u{05B6}' | '\u{05B5}' | '\u{05B1}' => "e",
            '\u{05B4}' => "i",
            '\u{05B9}' | '\u{05BA}' | '\u{05B3}' => "o",
            '\u{05BB}' => "u",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcribes_pointed_words() {
        let t = Transcriber::new();
        assert_eq!(t.transcribe("כֶּלֶב"), "kelev");
        assert_eq!(t.transcribe("שָׁלוֹם"), "shalom");
        assert_eq!(t.transcribe("חָתוּל"), "khatul");
        assert_eq!(t.transcribe("שָׂמֵחַ"), "sameakh");
        assert_eq!(t.transcribe("פָּרָה"), "para");
    }

    #[test]
    fn unpointed_input_keeps_consonants_only() {
        let t = Transcriber::new();
        assert_eq!(t.transcribe("כלב"), "khlv");
        assert_eq!(t.transcribe("דג!"), "dg!");
    }
}
