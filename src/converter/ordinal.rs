//! Ordinal derivation ("first", "twenty-third", "one hundred and twelfth").

use super::cardinal::spell;
use crate::lexicon::Lexicon;
use crate::options::ConversionOptions;

/// Spell the ordinal form of a non-negative whole number.
pub fn ordinal_phrase(n: u64, lexicon: &Lexicon, opts: &ConversionOptions) -> String {
    if let Some(word) = lexicon.ordinal(n) {
        return word.to_string();
    }

    // Teens and round tens are irregular as a whole; otherwise only the last digit matters.
    let last_two = n % 100;
    let key = match last_two {
        10..=19 => last_two,
        _ if last_two % 10 == 0 => last_two,
        _ => n % 10,
    };

    let irregular = if key == 0 {
        lexicon.ordinal(trailing_power(n))
    } else {
        lexicon.ordinal(key)
    };

    let cardinal = spell(n, lexicon, opts);
    match irregular {
        Some(word) => replace_last_word(&cardinal, word, &opts.hyphen),
        None => format!("{}{}", cardinal, lexicon.ordinal_suffix),
    }
}

/// The power word a round number's cardinal phrase ends in.
///
/// Expects `n` to be a multiple of 100.
fn trailing_power(n: u64) -> u64 {
    let mut power = 1_000_000_000_000_000_000u64;
    while power >= 1000 {
        if n % power == 0 {
            return power;
        }
        power /= 1000;
    }
    100
}

/// Replace the final space- or hyphen-delimited segment of `phrase`.
fn replace_last_word(phrase: &str, word: &str, hyphen: &str) -> String {
    let after_space = phrase.rfind(' ').map_or(0, |i| i + 1);
    let after_hyphen = if hyphen.is_empty() {
        0
    } else {
        phrase.rfind(hyphen).map_or(0, |i| i + hyphen.len())
    };
    let cut = after_space.max(after_hyphen);
    format!("{}{}", &phrase[..cut], word)
}
