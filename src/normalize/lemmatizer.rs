//! Rule-based morphological lemmatizer.
//!
//! Irregular forms come from the profile's exception table. Regular forms
//! go through noun plural rules first, then verb inflection rules. The
//! result is a matching key rather than a dictionary word: a trailing silent
//! `e` is always dropped and doubled final consonants are undone, so
//! `describe`, `describes`, `described` and `describing` all reduce to
//! `describ`. Corpus and query go through the same function.

use super::profile::LanguageProfile;

/// Reduce a lowercase token to its base form.
pub fn lemmatize(word: &str, profile: &LanguageProfile) -> String {
    match profile.lemma_exception(word) {
        // Self-mapped entries protect words that only look inflected.
        Some(lemma) if lemma == word || profile.lemma_exception(lemma) == Some(lemma) => {
            lemma.to_string()
        }
        Some(lemma) => reduce(lemma),
        None => reduce(word),
    }
}

fn reduce(word: &str) -> String {
    if word.len() < 4 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }

    let base = singularize(word)
        .or_else(|| strip_verb_suffix(word))
        .unwrap_or_else(|| word.to_string());

    undouble(drop_silent_e(&base)).to_string()
}

fn singularize(word: &str) -> Option<String> {
    if !word.ends_with('s') || ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }

    for suffix in ["sses", "xes", "ches", "shes", "zzes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }

    Some(word[..word.len() - 1].to_string())
}

fn strip_verb_suffix(word: &str) -> Option<String> {
    if let Some(stem) = word.strip_suffix("ied") {
        return (stem.len() >= 2).then(|| format!("{stem}y"));
    }

    if let Some(stem) = word.strip_suffix("ing") {
        return (stem.len() >= 3 && has_vowel(stem)).then(|| stem.to_string());
    }

    if let Some(stem) = word.strip_suffix("ed") {
        // `-eed` words (bleed, agreed) are not past tenses of a shorter stem.
        return (stem.len() >= 3 && !stem.ends_with('e') && has_vowel(stem))
            .then(|| stem.to_string());
    }

    None
}

/// `make` -> `mak`, `sinuse` -> `sinus`. Keeps `-ee` (`agree`, `knee`).
fn drop_silent_e(stem: &str) -> &str {
    match stem.strip_suffix('e') {
        Some(rest) if rest.len() >= 3 && !rest.ends_with('e') => rest,
        _ => stem,
    }
}

/// `runn` -> `run`, `stopp` -> `stop`. Final `ll`, `ss` and `zz` stay.
fn undouble(stem: &str) -> &str {
    let b = stem.as_bytes();
    let n = b.len();

    if n >= 4
        && b[n - 1] == b[n - 2]
        && !is_vowel(b[n - 1])
        && !matches!(b[n - 1], b'l' | b's' | b'z')
        && is_vowel(b[n - 3])
        && !is_vowel(b[n - 4])
    {
        return &stem[..n - 1];
    }

    stem
}

fn has_vowel(s: &str) -> bool {
    s.bytes().any(|c| is_vowel(c) || c == b'y')
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}
