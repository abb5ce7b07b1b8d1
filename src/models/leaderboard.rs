//! Leaderboard models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A player's total score across all topics.
///
/// Derived from score records on every leaderboard read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAggregate {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub score: i64,
}

/// A player aggregate with its competition rank (1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub score: i64,
    pub rank: usize,
}

impl RankedPlayer {
    pub fn new(player: PlayerAggregate, rank: usize) -> Self {
        Self {
            id: player.id,
            name: player.name,
            phone: player.phone,
            score: player.score,
            rank,
        }
    }

    /// Copy of this entry suitable for public listings
    pub fn with_masked_phone(mut self) -> Self {
        self.phone = mask_phone(&self.phone);
        self
    }
}

/// Hide the middle of a phone number, keeping the first and last two digits.
///
/// `0812345678` becomes `08xxxxxx78`. Numbers with four or fewer characters
/// are fully masked.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "x".repeat(chars.len());
    }

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if i < 2 || i >= chars.len() - 2 { *c } else { 'x' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("0812345678"), "08xxxxxx78");
        assert_eq!(mask_phone("12345"), "12x45");
        assert_eq!(mask_phone("123"), "xxx");
        assert_eq!(mask_phone(""), "");
    }

    #[test]
    fn test_with_masked_phone_keeps_rank_and_score() {
        let player = PlayerAggregate {
            id: Uuid::nil(),
            name: "Somchai".to_string(),
            phone: "0891112222".to_string(),
            score: 40,
        };
        let ranked = RankedPlayer::new(player, 3).with_masked_phone();
        assert_eq!(ranked.phone, "08xxxxxx22");
        assert_eq!(ranked.score, 40);
        assert_eq!(ranked.rank, 3);
    }
}
