// ============================================================
// Layer 4 — Text Augmentation
// ============================================================
// Word-level perturbations for text samples. All four work on
// whitespace-split words and re-join with single spaces:
//
//   synonym_replacement → tag n random words with "_syn"
//   random_insertion    → insert n "NEW" sentinel tokens
//   random_deletion     → drop each word with probability p
//   random_swap         → swap n random pairs of words
//
// Example on "the quick brown fox":
//   synonym_replacement → "the quick_syn brown fox"
//   random_insertion    → "the NEW quick brown fox"
//   random_deletion     → "the brown fox"
//   random_swap         → "fox quick brown the"
//
// None of these are idempotent. They draw from the RNG they are
// given, so a seeded StdRng reproduces the same output.
//
// Reference: Wei & Zou (2019) EDA: Easy Data Augmentation
//            rand crate documentation

use rand::{seq::index, Rng};

/// Suffix appended by `synonym_replacement`
pub const SYNONYM_SUFFIX: &str = "_syn";

/// Token inserted by `random_insertion`
pub const INSERTED_TOKEN: &str = "NEW";

/// Per-word deletion probability used by `augment_text`
pub const DELETION_PROBABILITY: f64 = 0.1;

/// The four text augmentations, chosen uniformly by `augment_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAugmentation {
    SynonymReplacement,
    RandomInsertion,
    RandomDeletion,
    RandomSwap,
}

impl TextAugmentation {
    pub const ALL: [TextAugmentation; 4] = [
        TextAugmentation::SynonymReplacement,
        TextAugmentation::RandomInsertion,
        TextAugmentation::RandomDeletion,
        TextAugmentation::RandomSwap,
    ];

    pub fn apply<R: Rng + ?Sized>(self, text: &str, rng: &mut R) -> String {
        match self {
            TextAugmentation::SynonymReplacement => synonym_replacement(text, 1, rng),
            TextAugmentation::RandomInsertion    => random_insertion(text, 1, rng),
            TextAugmentation::RandomDeletion     => random_deletion(text, DELETION_PROBABILITY, rng),
            TextAugmentation::RandomSwap         => random_swap(text, 1, rng),
        }
    }
}

/// Pick one augmentation uniformly at random and apply it
pub fn augment_text<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let choice = TextAugmentation::ALL[rng.gen_range(0..TextAugmentation::ALL.len())];
    choice.apply(text, rng)
}

/// Tag `n` randomly chosen words with a synonym marker.
/// Placeholder for a thesaurus lookup; the same word may be tagged twice.
pub fn synonym_replacement<R: Rng + ?Sized>(text: &str, n: usize, rng: &mut R) -> String {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    for _ in 0..n {
        if words.is_empty() {
            break;
        }
        let i = rng.gen_range(0..words.len());
        words[i].push_str(SYNONYM_SUFFIX);
    }
    words.join(" ")
}

/// Insert `n` sentinel tokens at random positions (including either end)
pub fn random_insertion<R: Rng + ?Sized>(text: &str, n: usize, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    for _ in 0..n {
        // Empty text stays empty
        if words.is_empty() {
            break;
        }
        let i = rng.gen_range(0..=words.len());
        words.insert(i, INSERTED_TOKEN);
    }
    words.join(" ")
}

/// Keep each word only if a uniform draw exceeds `p`
pub fn random_deletion<R: Rng + ?Sized>(text: &str, p: f64, rng: &mut R) -> String {
    text.split_whitespace()
        .filter(|_| rng.gen::<f64>() > p)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Swap `n` pairs of distinct positions
pub fn random_swap<R: Rng + ?Sized>(text: &str, n: usize, rng: &mut R) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    for _ in 0..n {
        if words.len() < 2 {
            break;
        }
        let picked = index::sample(rng, words.len(), 2);
        words.swap(picked.index(0), picked.index(1));
    }
    words.join(" ")
}
