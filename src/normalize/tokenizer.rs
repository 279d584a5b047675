use unicode_segmentation::UnicodeSegmentation;

/// English clitics split off the end of a word, after `n't`.
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Split text into word-level tokens along Unicode word boundaries.
///
/// Whitespace segments are dropped; punctuation segments are kept so the
/// caller decides what to discard. Case is preserved.
pub fn split_words(text: &str) -> Vec<String> {
    let text = text.replace('\u{2019}', "'");
    let mut words = Vec::new();

    for segment in text.split_word_bounds() {
        if segment.trim().is_empty() {
            continue;
        }
        split_clitics(segment, &mut words);
    }

    words
}

fn split_clitics(word: &str, out: &mut Vec<String>) {
    if let Some(cut) = suffix_cut(word, "n't") {
        out.push(word[..cut].to_string());
        out.push(word[cut..].to_string());
        return;
    }

    for clitic in CLITICS {
        if let Some(cut) = suffix_cut(word, clitic) {
            out.push(word[..cut].to_string());
            out.push(word[cut..].to_string());
            return;
        }
    }

    out.push(word.to_string());
}

/// Byte offset where `suffix` starts, if `word` ends with it (ASCII
/// case-insensitive) and something precedes it.
fn suffix_cut(word: &str, suffix: &str) -> Option<usize> {
    if word.len() <= suffix.len() {
        return None;
    }
    let cut = word.len() - suffix.len();
    if !word.is_char_boundary(cut) {
        return None;
    }
    word[cut..].eq_ignore_ascii_case(suffix).then_some(cut)
}
