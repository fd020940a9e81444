//! Number and calendar word tables.

mod builtin;

pub use builtin::Lexicon;

impl Lexicon {
    /// Cardinal word for 0..=20 or a multiple of ten up to 90.
    pub fn cardinal(&self, n: u64) -> Option<&'static str> {
        match n {
            0..=20 => Some(self.small[n as usize]),
            30 | 40 | 50 | 60 | 70 | 80 | 90 => Some(self.tens[(n / 10) as usize]),
            _ => None,
        }
    }

    /// Word for the power of 1000 with the given exponent (1 = thousand).
    pub fn power(&self, exponent: usize) -> Option<&'static str> {
        match exponent {
            1..=6 => Some(self.powers[exponent]),
            _ => None,
        }
    }

    /// Irregular ordinal word for `n`, if it has one.
    pub fn ordinal(&self, n: u64) -> Option<&'static str> {
        self.ordinals
            .binary_search_by_key(&n, |(key, _)| *key)
            .ok()
            .map(|idx| self.ordinals[idx].1)
    }
}
