use unicode_segmentation::UnicodeSegmentation;

use crate::normalize::LanguageProfile;

/// Abbreviations (lowercase, without the final period) that do not end a
/// sentence even when followed by a capitalized word.
const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "st", "mt", "vs", "al", "cf", "e.g", "i.e",
    "fig", "figs", "approx", "vol", "ch", "sec", "dept", "inc", "ltd", "lt", "col", "gen", "rev",
    "resp",
];

/// Collapse every line break into a single space.
pub fn collapse_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(|c: char| c == '\r' || c == '\n', " ")
}

/// Split text into trimmed, non-empty sentences.
///
/// Boundaries follow Unicode sentence segmentation. A boundary directly after
/// a known abbreviation is undone, and so is one after a single capital
/// initial when the next word looks like a name rather than a sentence start.
pub fn split_sentences(text: &str, profile: &LanguageProfile) -> Vec<String> {
    let segments: Vec<&str> = text.split_sentence_bounds().collect();
    let mut sentences = Vec::new();
    let mut pending = String::new();

    for (i, segment) in segments.iter().enumerate() {
        pending.push_str(segment);
        let next = segments.get(i + 1).copied();
        if continues_after(pending.trim_end(), next, profile) {
            tracing::debug!(segment = %pending.trim(), "boundary after abbreviation merged");
            continue;
        }
        push_trimmed(&mut sentences, &pending);
        pending.clear();
    }
    push_trimmed(&mut sentences, &pending);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn continues_after(segment: &str, next: Option<&str>, profile: &LanguageProfile) -> bool {
    let Some(stem) = segment.strip_suffix('.') else {
        return false;
    };
    let last = stem.rsplit(char::is_whitespace).next().unwrap_or(stem);
    let last = last.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = last.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(initial), None) => {
            initial.is_uppercase() && next.is_some_and(|next| opens_with_name(next, profile))
        }
        _ => ABBREVIATIONS.contains(&last.to_lowercase().as_str()),
    }
}

/// `J. Hunter` continues; `vitamin K. The` does not.
fn opens_with_name(segment: &str, profile: &LanguageProfile) -> bool {
    let word = segment
        .trim_start()
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("");
    word.chars().next().is_some_and(char::is_uppercase) && !profile.is_stopword(&word.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        split_sentences(text, &LanguageProfile::english().unwrap())
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        let sentences = split("One organ. Two organs! Three organs?");
        assert_eq!(sentences, vec!["One organ.", "Two organs!", "Three organs?"]);
    }

    #[test]
    fn abbreviations_do_not_end_sentences() {
        let sentences = split("Dr. Smith removed the appendix. The patient recovered.");
        assert_eq!(
            sentences,
            vec!["Dr. Smith removed the appendix.", "The patient recovered."]
        );
    }

    #[test]
    fn initials_do_not_end_sentences() {
        let sentences = split("The method of J. Hunter is classic. It is still taught.");
        assert_eq!(
            sentences,
            vec!["The method of J. Hunter is classic.", "It is still taught."]
        );
    }

    #[test]
    fn decimals_do_not_end_sentences() {
        let sentences = split("The duct is 2.5 cm long. It drains bile.");
        assert_eq!(sentences, vec!["The duct is 2.5 cm long.", "It drains bile."]);
    }

    #[test]
    fn collapses_hard_wrapped_lines() {
        let text = collapse_line_breaks("The liver is\nan organ.\r\nThe heart\rpumps blood.");
        assert_eq!(text, "The liver is an organ. The heart pumps blood.");
        assert_eq!(split(&text).len(), 2);
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(split("   \t ").is_empty());
    }

    #[test]
    fn single_letter_before_sentence_start_ends_sentence() {
        let sentences = split("The patient received vitamin K. The bleeding stopped.");
        assert_eq!(sentences, vec!["The patient received vitamin K.", "The bleeding stopped."]);

        let sentences = split("This is a type I. It heals well.");
        assert_eq!(sentences, vec!["This is a type I.", "It heals well."]);
    }

    #[test]
    fn chained_initials_stay_together() {
        let sentences = split("The method of J. R. Hunter is classic. It is still taught.");
        assert_eq!(
            sentences,
            vec!["The method of J. R. Hunter is classic.", "It is still taught."]
        );
    }

    #[test]
    fn trailing_initial_ends_text() {
        assert_eq!(split("The factor is vitamin K."), vec!["The factor is vitamin K."]);
    }
}
