//! Built-in English word tables.

/// Word tables used to spell numbers, ordinals and calendar names.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Cardinal words for 0 through 20.
    pub small: [&'static str; 21],
    /// Cardinal words for the multiples of ten, indexed by tens digit (0 and 1 unused).
    pub tens: [&'static str; 10],
    pub hundred: &'static str,
    /// Words for 1000^1 through 1000^6, indexed by exponent (index 0 unused).
    pub powers: [&'static str; 7],
    /// Irregular ordinals, sorted by key.
    pub ordinals: &'static [(u64, &'static str)],
    /// Suffix appended to a cardinal word to make a regular ordinal.
    pub ordinal_suffix: &'static str,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

const ENGLISH_ORDINALS: &[(u64, &str)] = &[
    (0, "zeroth"),
    (1, "first"),
    (2, "second"),
    (3, "third"),
    (5, "fifth"),
    (8, "eighth"),
    (9, "ninth"),
    (12, "twelfth"),
    (20, "twentieth"),
    (30, "thirtieth"),
    (40, "fortieth"),
    (50, "fiftieth"),
    (60, "sixtieth"),
    (70, "seventieth"),
    (80, "eightieth"),
    (90, "ninetieth"),
    (100, "hundredth"),
    (1_000, "thousandth"),
    (1_000_000, "millionth"),
    (1_000_000_000, "billionth"),
    (1_000_000_000_000, "trillionth"),
    (1_000_000_000_000_000, "quadrillionth"),
    (1_000_000_000_000_000_000, "quintillionth"),
];

impl Lexicon {
    /// English word tables.
    pub fn english() -> Self {
        Lexicon {
            small: [
                "zero",
                "one",
                "two",
                "three",
                "four",
                "five",
                "six",
                "seven",
                "eight",
                "nine",
                "ten",
                "eleven",
                "twelve",
                "thirteen",
                "fourteen",
                "fifteen",
                "sixteen",
                "seventeen",
                "eighteen",
                "nineteen",
                "twenty",
            ],
            tens: [
                "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty",
                "ninety",
            ],
            hundred: "hundred",
            powers: [
                "",
                "thousand",
                "million",
                "billion",
                "trillion",
                "quadrillion",
                "quintillion",
            ],
            ordinals: ENGLISH_ORDINALS,
            ordinal_suffix: "th",
            am_string: "am",
            pm_string: "pm",
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
        }
    }
}
