use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Unique review identifier, generated at submission time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub String);

/// A customer review. Append-only: never mutated or deleted once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub user_name: String,
    /// 1-5 inclusive.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ID_LEN: usize = 9;

/// Generate a fresh 9-character alphanumeric review id.
pub fn generate_review_id() -> ReviewId {
    let mut rng = rand::thread_rng();
    let id: String = (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    ReviewId(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_expected_shape() {
        let ReviewId(id) = generate_review_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn generated_ids_are_distinct() {
        // 36^9 keyspace; a handful of draws colliding would mean a broken rng.
        let a = generate_review_id();
        let b = generate_review_id();
        assert_ne!(a, b);
    }
}
