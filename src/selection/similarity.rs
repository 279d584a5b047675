use std::collections::BTreeSet;

use serde::Serialize;

/// Overlap between two token sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlap {
    pub intersection: usize,
    pub union: usize,
    pub score: f64,
}

pub trait Similarity {
    /// `None` when there is nothing to compare: both sets are empty.
    fn score(&self, a: &BTreeSet<String>, b: &BTreeSet<String>) -> Option<Overlap>;
}

/// |A ∩ B| / |A ∪ B|
#[derive(Debug, Default, Clone, Copy)]
pub struct Jaccard;

impl Similarity for Jaccard {
    fn score(&self, a: &BTreeSet<String>, b: &BTreeSet<String>) -> Option<Overlap> {
        let intersection = a.intersection(b).count();
        // |A ∪ B| = |A| + |B| - |A ∩ B|
        let union = a.len() + b.len() - intersection;
        if union == 0 {
            return None;
        }

        let score = intersection as f64 / union as f64;
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");

        Some(Overlap {
            intersection,
            union,
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_union_has_no_score() {
        assert_eq!(Jaccard.score(&set(&[]), &set(&[])), None);
    }

    #[test]
    fn one_empty_side_scores_zero() {
        let overlap = Jaccard.score(&set(&["liver"]), &set(&[])).unwrap();
        assert_eq!(overlap.intersection, 0);
        assert_eq!(overlap.union, 1);
        assert_eq!(overlap.score, 0.0);
    }

    #[test]
    fn partial_overlap() {
        let overlap = Jaccard
            .score(&set(&["what", "organ", "liver"]), &set(&["liver", "organ"]))
            .unwrap();
        assert_eq!(overlap.intersection, 2);
        assert_eq!(overlap.union, 3);
        assert!((overlap.score - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn symmetric() {
        let a = set(&["heart", "pump", "blood"]);
        let b = set(&["blood", "vessel"]);
        assert_eq!(Jaccard.score(&a, &b), Jaccard.score(&b, &a));
    }
}
