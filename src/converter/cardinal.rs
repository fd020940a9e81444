//! Whole-number spelling by magnitude band.

use crate::lexicon::Lexicon;
use crate::options::ConversionOptions;

/// Spell a non-negative whole number, e.g. `1233` as
/// "one thousand, two hundred and thirty-three".
pub fn spell(n: u64, lexicon: &Lexicon, opts: &ConversionOptions) -> String {
    let mut out = String::new();
    spell_into(&mut out, n, lexicon, opts);
    out
}

fn spell_into(out: &mut String, n: u64, lexicon: &Lexicon, opts: &ConversionOptions) {
    if let Some(word) = lexicon.cardinal(n) {
        out.push_str(word);
        return;
    }
    match n {
        // Round tens are covered by the lookup above.
        0..=99 => {
            out.push_str(lexicon.tens[(n / 10) as usize]);
            out.push_str(&opts.hyphen);
            out.push_str(lexicon.small[(n % 10) as usize]);
        }
        100..=999 => {
            out.push_str(lexicon.small[(n / 100) as usize]);
            out.push(' ');
            out.push_str(lexicon.hundred);
            let remainder = n % 100;
            if remainder != 0 {
                push_conjunction(out, opts);
                spell_into(out, remainder, lexicon, opts);
            }
        }
        _ => {
            let (base, exponent) = power_of_thousand(n);
            spell_into(out, n / base, lexicon, opts);
            if let Some(word) = lexicon.power(exponent) {
                out.push(' ');
                out.push_str(word);
            }
            let remainder = n % base;
            if remainder != 0 {
                if remainder < 100 {
                    push_conjunction(out, opts);
                } else {
                    out.push_str(&opts.separator);
                    out.push(' ');
                }
                spell_into(out, remainder, lexicon, opts);
            }
        }
    }
}

fn push_conjunction(out: &mut String, opts: &ConversionOptions) {
    out.push(' ');
    out.push_str(&opts.conjunction);
    out.push(' ');
}

/// Largest power of 1000 not exceeding `n`, with its exponent.
///
/// Expects `n >= 1000`. Uses integer division only, so exact powers such as
/// 1,000,000 land in their own band.
pub fn power_of_thousand(n: u64) -> (u64, usize) {
    let mut base = 1000u64;
    let mut exponent = 1;
    while n / base >= 1000 {
        base *= 1000;
        exponent += 1;
    }
    (base, exponent)
}
