//! Random two-word directory names.

use depot_core::NameGenerator;
use rand::Rng;

const ADJECTIVES: [&str; 20] = [
    "happy", "silly", "bumpy", "grumpy", "fluffy", "scary", "tiny", "giant", "red", "blue",
    "green", "yellow", "purple", "orange", "black", "white", "brown", "pink", "gray", "silver",
];

const NOUNS: [&str; 20] = [
    "cat", "dog", "house", "car", "tree", "flower", "book", "computer", "phone", "table", "chair",
    "sun", "moon", "star", "cloud", "water", "fire", "earth", "air", "love",
];

/// Generates `"<adjective>-<noun>"` candidates from fixed word lists.
///
/// Each word is drawn uniformly and independently, giving 400 possible
/// combinations. Uniqueness against existing entries is the caller's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListNameGenerator;

impl WordListNameGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self
    }
}

impl NameGenerator for WordListNameGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
        let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
        format!("{adjective}-{noun}")
    }
}
