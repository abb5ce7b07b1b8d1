//! Standard competition ranking

use crate::models::{PlayerAggregate, RankedPlayer};

/// Rank players by total score.
///
/// Output is ordered by score descending, then name ascending (byte-wise,
/// case-sensitive), then input order. Equal scores share a rank; the next
/// distinct score gets its 1-based position, so `[100, 100, 90]` ranks as
/// `[1, 1, 3]`. The name only affects listing order, never the rank.
pub fn rank_players(mut players: Vec<PlayerAggregate>) -> Vec<RankedPlayer> {
    // sort_by is stable: identical (score, name) keys keep their input order
    players.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));

    let mut ranked = Vec::with_capacity(players.len());
    let mut current_rank = 1;
    let mut previous_score = None;

    for (i, player) in players.into_iter().enumerate() {
        if previous_score != Some(player.score) {
            current_rank = i + 1;
            previous_score = Some(player.score);
        }
        ranked.push(RankedPlayer::new(player, current_rank));
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn player(name: &str, score: i64) -> PlayerAggregate {
        PlayerAggregate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: "0812345678".to_string(),
            score,
        }
    }

    fn ranks(ranked: &[RankedPlayer]) -> Vec<usize> {
        ranked.iter().map(|p| p.rank).collect()
    }

    #[test]
    fn test_ties_leave_gaps() {
        let scores = [100, 100, 90, 80, 80, 80, 50];
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let players = names
            .iter()
            .zip(scores)
            .map(|(name, score)| player(name, score))
            .collect();

        let ranked = rank_players(players);

        assert_eq!(ranks(&ranked), vec![1, 1, 3, 4, 4, 4, 7]);
        let listed: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_single_player() {
        let ranked = rank_players(vec![player("Solo", 50)]);
        assert_eq!(ranks(&ranked), vec![1]);
    }

    #[test]
    fn test_all_tied() {
        let ranked = rank_players(vec![player("a", 30), player("b", 30), player("c", 30)]);
        assert_eq!(ranks(&ranked), vec![1, 1, 1]);
    }

    #[test]
    fn test_empty() {
        assert!(rank_players(Vec::new()).is_empty());
    }

    #[test]
    fn test_name_breaks_ties_for_display_only() {
        let ranked = rank_players(vec![player("Zara", 10), player("Amy", 10)]);

        assert_eq!(ranked[0].name, "Amy");
        assert_eq!(ranked[1].name, "Zara");
        assert_eq!(ranks(&ranked), vec![1, 1]);
    }

    #[test]
    fn test_name_order_is_case_sensitive() {
        let ranked = rank_players(vec![player("amy", 10), player("Zara", 10)]);
        // Uppercase sorts before lowercase
        assert_eq!(ranked[0].name, "Zara");
    }

    #[test]
    fn test_negative_and_zero_scores() {
        let ranked = rank_players(vec![
            player("neg", -5),
            player("zero-a", 0),
            player("pos", 3),
            player("zero-b", 0),
        ]);

        let listed: Vec<(&str, usize)> = ranked.iter().map(|p| (p.name.as_str(), p.rank)).collect();
        assert_eq!(
            listed,
            vec![("pos", 1), ("zero-a", 2), ("zero-b", 2), ("neg", 4)]
        );
    }

    #[test]
    fn test_identical_entries_keep_input_order() {
        let first = player("Dup", 20);
        let second = player("Dup", 20);
        let (first_id, second_id) = (first.id, second.id);

        let ranked = rank_players(vec![first, second]);

        assert_eq!(ranked[0].id, first_id);
        assert_eq!(ranked[1].id, second_id);
        assert_eq!(ranks(&ranked), vec![1, 1]);
    }

    fn arb_players() -> impl Strategy<Value = Vec<PlayerAggregate>> {
        // Narrow ranges so ties and duplicate names actually happen
        prop::collection::vec(("[A-Ca-c]{1,2}", -3i64..6), 0..40).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(name, score)| player(&name, score))
                .collect()
        })
    }

    fn tuples(ranked: &[RankedPlayer]) -> Vec<(String, i64, usize)> {
        let mut out: Vec<_> = ranked
            .iter()
            .map(|p| (p.name.clone(), p.score, p.rank))
            .collect();
        out.sort();
        out
    }

    proptest! {
        #[test]
        fn prop_length_preserved(players in arb_players()) {
            let len = players.len();
            prop_assert_eq!(rank_players(players).len(), len);
        }

        #[test]
        fn prop_higher_score_never_ranks_worse(players in arb_players()) {
            let ranked = rank_players(players);
            for a in &ranked {
                for b in &ranked {
                    if a.score > b.score {
                        prop_assert!(a.rank < b.rank);
                    }
                    if a.score == b.score {
                        prop_assert_eq!(a.rank, b.rank);
                    }
                }
            }
        }

        #[test]
        fn prop_runs_start_at_their_position(players in arb_players()) {
            let ranked = rank_players(players);
            let mut start = 0;
            while start < ranked.len() {
                let mut end = start;
                while end < ranked.len() && ranked[end].score == ranked[start].score {
                    end += 1;
                }
                for entry in &ranked[start..end] {
                    prop_assert_eq!(entry.rank, start + 1);
                }
                if end < ranked.len() {
                    prop_assert_eq!(ranked[end].rank, end + 1);
                }
                start = end;
            }
        }

        #[test]
        fn prop_input_order_does_not_matter(
            shuffled in arb_players().prop_flat_map(|players| {
                let original = players.clone();
                (Just(original), Just(players).prop_shuffle())
            })
        ) {
            let (original, permuted) = shuffled;
            prop_assert_eq!(
                tuples(&rank_players(original)),
                tuples(&rank_players(permuted))
            );
        }
    }
}
