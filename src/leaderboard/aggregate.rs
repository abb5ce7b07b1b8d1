//! Score validation and per-player aggregation

use std::collections::HashMap;

use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use super::LeaderboardError;
use crate::{constants::MAX_ABS_SCORE, models::PlayerAggregate};

/// One score record joined with its owner's display fields
#[derive(Debug, Clone, FromRow)]
pub struct PlayerScoreRow {
    pub user_id: Uuid,
    pub name: String,
    pub phone: String,
    pub score: i64,
}

/// Validate a raw score value taken from a request body.
///
/// Only JSON numbers with an integral value within `±MAX_ABS_SCORE` are
/// accepted (`10` and `10.0` both give 10). Strings, booleans, nulls and
/// fractional numbers are rejected instead of being coerced.
pub fn parse_score(value: &Value) -> Result<i64, LeaderboardError> {
    let Value::Number(number) = value else {
        return Err(LeaderboardError::InvalidScore(format!(
            "expected an integer, got {}",
            value
        )));
    };

    let score = match (number.as_i64(), number.as_f64()) {
        (Some(score), _) => score,
        (None, Some(f))
            if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_ABS_SCORE as f64 =>
        {
            f as i64
        }
        (None, Some(f)) if f.is_finite() && f.fract() == 0.0 => {
            return Err(out_of_range(number));
        }
        _ => {
            return Err(LeaderboardError::InvalidScore(format!(
                "expected an integer, got {}",
                number
            )));
        }
    };

    if score.unsigned_abs() > MAX_ABS_SCORE.unsigned_abs() {
        return Err(out_of_range(number));
    }

    Ok(score)
}

fn out_of_range(number: &serde_json::Number) -> LeaderboardError {
    LeaderboardError::InvalidScore(format!(
        "{} is outside the allowed range of ±{}",
        number, MAX_ABS_SCORE
    ))
}

/// Sum per-topic score rows into one aggregate per player.
///
/// Players appear in the order their first row was seen. Players without any
/// rows are simply absent.
pub fn aggregate_players<I>(rows: I) -> Result<Vec<PlayerAggregate>, LeaderboardError>
where
    I: IntoIterator<Item = PlayerScoreRow>,
{
    let mut players: Vec<PlayerAggregate> = Vec::new();
    let mut positions: HashMap<Uuid, usize> = HashMap::new();

    for row in rows {
        match positions.get(&row.user_id) {
            Some(&pos) => {
                let player = &mut players[pos];
                player.score = player
                    .score
                    .checked_add(row.score)
                    .ok_or(LeaderboardError::ScoreOverflow(row.user_id))?;
            }
            None => {
                positions.insert(row.user_id, players.len());
                players.push(PlayerAggregate {
                    id: row.user_id,
                    name: row.name,
                    phone: row.phone,
                    score: row.score,
                });
            }
        }
    }

    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(user_id: Uuid, name: &str, score: i64) -> PlayerScoreRow {
        PlayerScoreRow {
            user_id,
            name: name.to_string(),
            phone: "0800000000".to_string(),
            score,
        }
    }

    #[test]
    fn test_parse_score_accepts_integers() {
        assert_eq!(parse_score(&json!(42)), Ok(42));
        assert_eq!(parse_score(&json!(0)), Ok(0));
        assert_eq!(parse_score(&json!(-15)), Ok(-15));
        assert_eq!(parse_score(&json!(30.0)), Ok(30));
    }

    #[test]
    fn test_parse_score_rejects_non_numbers() {
        assert!(matches!(
            parse_score(&json!("42")),
            Err(LeaderboardError::InvalidScore(_))
        ));
        assert!(parse_score(&json!(null)).is_err());
        assert!(parse_score(&json!(true)).is_err());
        assert!(parse_score(&json!([1])).is_err());
        assert!(parse_score(&json!({"score": 1})).is_err());
    }

    #[test]
    fn test_parse_score_rejects_fractions_and_out_of_range() {
        assert!(parse_score(&json!(12.5)).is_err());
        assert!(parse_score(&json!(u64::MAX)).is_err());
        assert!(parse_score(&json!(1e300)).is_err());
    }

    #[test]
    fn test_parse_score_bounds() {
        assert_eq!(parse_score(&json!(MAX_ABS_SCORE)), Ok(MAX_ABS_SCORE));
        assert_eq!(parse_score(&json!(-MAX_ABS_SCORE)), Ok(-MAX_ABS_SCORE));

        for value in [
            json!(MAX_ABS_SCORE + 1),
            json!(-MAX_ABS_SCORE - 1),
            json!(i64::MAX),
            json!(i64::MIN),
            json!(1e15),
        ] {
            assert!(
                matches!(parse_score(&value), Err(LeaderboardError::InvalidScore(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepted_scores_cannot_overflow_a_total() {
        let id = Uuid::new_v4();
        let huge = parse_score(&json!(i64::MAX));
        assert!(huge.is_err());

        let top = parse_score(&json!(MAX_ABS_SCORE)).unwrap();
        let rows = (0..1000).map(|_| row(id, "Max", top));
        let players = aggregate_players(rows).unwrap();
        assert_eq!(players[0].score, 1000 * MAX_ABS_SCORE);
    }

    #[test]
    fn test_aggregate_sums_per_player() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let rows = vec![
            row(alice, "Alice", 30),
            row(bob, "Bob", 50),
            row(alice, "Alice", 20),
            row(alice, "Alice", -5),
        ];

        let players = aggregate_players(rows).unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].id, alice);
        assert_eq!(players[0].score, 45);
        assert_eq!(players[1].id, bob);
        assert_eq!(players[1].score, 50);
    }

    #[test]
    fn test_aggregate_keeps_same_name_players_apart() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let rows = vec![row(first, "Niran", 10), row(second, "Niran", 10)];

        let players = aggregate_players(rows).unwrap();

        assert_eq!(players.len(), 2);
    }

    #[test]
    fn test_aggregate_empty() {
        let players = aggregate_players(Vec::new()).unwrap();
        assert!(players.is_empty());
    }

    #[test]
    fn test_aggregate_overflow_is_an_error() {
        let id = Uuid::new_v4();
        let rows = vec![row(id, "Max", i64::MAX), row(id, "Max", 1)];

        assert_eq!(
            aggregate_players(rows),
            Err(LeaderboardError::ScoreOverflow(id))
        );
    }
}
