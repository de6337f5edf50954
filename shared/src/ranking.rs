//! Player ranking.
//!
//! A rank starts at the number of stored players and drops by one for every
//! other player with a strictly lower score. Ties therefore keep a rank high:
//! a player level with everybody else sits at rank N, and only a player ahead
//! of all others reaches rank 1.

use crate::{Player, QuizError};

/// Computes the rank of the player `id` among `players`.
pub fn rank_of(players: &[Player], id: &str) -> Result<usize, QuizError> {
    let target = players
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| QuizError::NotFound(id.to_string()))?;

    let behind = players
        .iter()
        .filter(|p| p.id != target.id && p.score < target.score)
        .count();

    Ok(players.len() - behind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<Player> {
        vec![
            Player::new("A", "Clayton", 28).with_score(30),
            Player::new("B", "Giancarl", 27).with_score(10),
            Player::new("C", "Emma", 33).with_score(90),
            Player::new("D", "Paulinha", 30).with_score(50),
        ]
    }

    #[test]
    fn test_seed_scenario() {
        let players = seed();
        assert_eq!(rank_of(&players, "C").unwrap(), 1);
        assert_eq!(rank_of(&players, "D").unwrap(), 2);
        assert_eq!(rank_of(&players, "A").unwrap(), 3);
        assert_eq!(rank_of(&players, "B").unwrap(), 4);
    }

    #[test]
    fn test_ties_keep_rank_high() {
        let players = vec![
            Player::new("A", "a", 1).with_score(50),
            Player::new("B", "b", 1).with_score(50),
            Player::new("C", "c", 1).with_score(50),
        ];
        for id in ["A", "B", "C"] {
            assert_eq!(rank_of(&players, id).unwrap(), 3);
        }
    }

    #[test]
    fn test_tie_at_the_top() {
        let players = vec![
            Player::new("A", "a", 1).with_score(90),
            Player::new("B", "b", 1).with_score(90),
            Player::new("C", "c", 1).with_score(10),
        ];
        assert_eq!(rank_of(&players, "A").unwrap(), 2);
        assert_eq!(rank_of(&players, "B").unwrap(), 2);
        assert_eq!(rank_of(&players, "C").unwrap(), 3);
    }

    #[test]
    fn test_single_player_is_first() {
        let players = vec![Player::new("A", "a", 1).with_score(0)];
        assert_eq!(rank_of(&players, "A").unwrap(), 1);
    }

    #[test]
    fn test_rank_stays_within_bounds() {
        let scores = [0, 100, 33, 33, 99, 0, 20, 60];
        let players: Vec<Player> = scores
            .iter()
            .enumerate()
            .map(|(i, s)| Player::new(i.to_string(), "p", 1).with_score(*s))
            .collect();

        let ranks: Vec<usize> = players
            .iter()
            .map(|p| rank_of(&players, &p.id).unwrap())
            .collect();

        assert!(ranks.iter().all(|r| (1..=players.len()).contains(r)));
        // The unique maximum holds the lowest rank number.
        let best = ranks[1];
        assert_eq!(best, 1);
        assert!(ranks.iter().enumerate().all(|(i, r)| i == 1 || *r > best));
    }

    #[test]
    fn test_unknown_player() {
        assert_eq!(
            rank_of(&seed(), "Z"),
            Err(QuizError::NotFound("Z".to_string()))
        );
        assert!(matches!(rank_of(&[], "A"), Err(QuizError::NotFound(_))));
    }
}
