//! Candidate pool pruning
//!
//! Filters the word pool down to the words still consistent with the
//! accumulated constraints. The input pool is left untouched; the caller
//! reassigns the returned pool.

use super::ConstraintSet;
use crate::core::Word;

/// Filter `pool` against `constraints`, producing a new pool
///
/// The surviving pool is never larger than the input, and pruning an
/// already-pruned pool with the same constraints returns it unchanged. An
/// empty result is a valid output and signals that no candidates remain.
#[must_use]
pub fn prune(pool: &[Word], constraints: &ConstraintSet) -> Vec<Word> {
    pool.iter()
        .filter(|word| constraints.allows(word))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|s| word(s)).collect()
    }

    fn constraints_from(secret: &Word, guesses: &[&str]) -> ConstraintSet {
        let mut constraints = ConstraintSet::new();
        for guess in guesses {
            let guess = word(guess);
            let feedback = Feedback::evaluate(secret, &guess);
            constraints.update(&guess, &feedback);
        }
        constraints
    }

    #[test]
    fn empty_constraints_keep_everything() {
        let pool = pool(&["crane", "slate", "irate"]);
        let pruned = prune(&pool, &ConstraintSet::new());
        assert_eq!(pruned, pool);
    }

    #[test]
    fn green_mismatch_is_pruned() {
        let secret = word("crane");
        // SLATE pins A green at position 2 and E green at position 4
        let constraints = constraints_from(&secret, &["slate"]);

        let pruned = prune(&pool(&["crane", "brave", "slime", "pride"]), &constraints);
        let texts: Vec<&str> = pruned.iter().map(Word::text).collect();

        assert!(texts.contains(&"crane"));
        assert!(texts.contains(&"brave"));
        assert!(!texts.contains(&"slime")); // S and L are gray
        assert!(!texts.contains(&"pride")); // no A at position 2
    }

    #[test]
    fn yellow_letter_must_be_present_but_elsewhere() {
        let secret = word("crane");
        // CANDY yields A yellow at position 1 and N yellow at position 2
        let constraints = constraints_from(&secret, &["candy"]);

        let pruned = prune(
            &pool(&["crane", "crank", "capon", "cabin", "cocoa"]),
            &constraints,
        );
        let texts: Vec<&str> = pruned.iter().map(Word::text).collect();

        assert!(texts.contains(&"crane")); // A at 2, N at 3
        assert!(texts.contains(&"crank")); // A and N present, both elsewhere
        assert!(!texts.contains(&"capon")); // A at position 1 is forbidden
        assert!(!texts.contains(&"cabin")); // so is this A
        assert!(!texts.contains(&"cocoa")); // missing N
    }

    #[test]
    fn gray_letter_anywhere_is_pruned() {
        let secret = word("crane");
        let constraints = constraints_from(&secret, &["slate"]);

        // S, L, T are gray after SLATE
        let pruned = prune(&pool(&["grace", "trace", "place", "brace"]), &constraints);
        let texts: Vec<&str> = pruned.iter().map(Word::text).collect();

        assert!(texts.contains(&"grace"));
        assert!(texts.contains(&"brace"));
        assert!(!texts.contains(&"trace"));
        assert!(!texts.contains(&"place"));
    }

    #[test]
    fn pruning_is_non_expansive() {
        let secret = word("crane");
        let pool = pool(&["crane", "slate", "irate", "crate", "grate", "brake"]);
        let constraints = constraints_from(&secret, &["slate"]);

        let pruned = prune(&pool, &constraints);
        assert!(pruned.len() <= pool.len());
    }

    #[test]
    fn pruning_is_idempotent() {
        let secret = word("crane");
        let pool = pool(&["crane", "slate", "irate", "crate", "grate", "brake"]);
        let constraints = constraints_from(&secret, &["slate", "candy"]);

        let once = prune(&pool, &constraints);
        let twice = prune(&once, &constraints);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_pool_is_untouched() {
        let original = pool(&["crane", "slate"]);
        let constraints = constraints_from(&word("crane"), &["slate"]);

        let _ = prune(&original, &constraints);
        assert_eq!(original.len(), 2);
    }

    #[test]
    fn impossible_constraints_empty_the_pool() {
        // ABCDE vs FGHIJ grays out all five guessed letters
        let constraints = constraints_from(&word("fghij"), &["abcde"]);

        let pruned = prune(&pool(&["adieu", "abode", "cable"]), &constraints);
        assert!(pruned.is_empty());
    }

    #[test]
    fn survivors_reproduce_observed_feedback() {
        // Every word that survives pruning must, if treated as the secret,
        // reproduce the feedback that produced the constraints.
        let secret = word("crane");
        let guess = word("slate");
        let observed = Feedback::evaluate(&secret, &guess);

        let constraints = constraints_from(&secret, &["slate"]);
        let pruned = prune(
            &pool(&["crane", "brave", "grade", "frame", "slime", "theme"]),
            &constraints,
        );

        assert!(pruned.len() > 1);
        for candidate in &pruned {
            assert_eq!(
                Feedback::evaluate(candidate, &guess),
                observed,
                "{} is inconsistent with the observed feedback",
                candidate.text()
            );
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prune_shrinks_keeps_secret_and_is_idempotent(
                s in "[a-z]{5}",
                g in "[a-z]{5}",
                raw_pool in proptest::collection::vec("[a-z]{5}", 0..30),
            ) {
                let secret = word(&s);
                let guess = word(&g);

                let mut pool: Vec<Word> =
                    raw_pool.iter().map(|w| word(w)).collect();
                pool.push(secret.clone());

                let mut constraints = ConstraintSet::new();
                let feedback = Feedback::evaluate(&secret, &guess);
                constraints.update(&guess, &feedback);

                let pruned = prune(&pool, &constraints);

                prop_assert!(pruned.len() <= pool.len());
                prop_assert!(pruned.contains(&secret));

                let again = prune(&pruned, &constraints);
                prop_assert_eq!(again, pruned);
            }
        }
    }
}
