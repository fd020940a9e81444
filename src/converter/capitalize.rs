//! Word capitalization with a lowercase exception.

/// Capitalize each run of ASCII letters and hyphens, except runs equal
/// (ignoring case) to `keep_lower`.
pub fn capitalize_words(text: &str, keep_lower: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() || ch == '-' {
            word.push(ch);
        } else {
            flush_word(&mut out, &mut word, keep_lower);
            out.push(ch);
        }
    }
    flush_word(&mut out, &mut word, keep_lower);

    out
}

fn flush_word(out: &mut String, word: &mut String, keep_lower: &str) {
    if word.is_empty() {
        return;
    }
    if word.eq_ignore_ascii_case(keep_lower) {
        out.push_str(word);
    } else {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    word.clear();
}
