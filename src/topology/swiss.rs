use crate::Match;

use super::{group_rounds, Round};

/// Builds the rounds of a swiss tournament. Swiss has no fixed elimination depth, every round
/// is titled `Round {n}`.
pub fn build(matches: &[Match]) -> Vec<Round> {
    group_rounds(matches)
        .into_iter()
        .map(|(round, matches)| Round {
            round,
            bracket: None,
            title: format!("Round {}", round),
            matches,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchId;

    #[test]
    fn test_swiss() {
        let matches = vec![
            Match::new(3, 2, 1).sources([1, 2]),
            Match::new(4, 2, 2).sources([1, 2]),
            Match::new(2, 1, 2),
            Match::new(1, 1, 1),
        ];

        let rounds = build(&matches);

        let titles: Vec<&str> = rounds.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Round 1", "Round 2"]);

        assert_eq!(
            rounds[0].matches.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![MatchId(1), MatchId(2)]
        );
        assert_eq!(
            rounds[1].matches.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![MatchId(3), MatchId(4)]
        );
    }

    #[test]
    fn test_swiss_never_names_finals() {
        let matches: Vec<Match> = (1..=3).map(|r| Match::new(r as u64, r, 1)).collect();

        let rounds = build(&matches);

        assert!(rounds
            .iter()
            .zip(1..)
            .all(|(round, n)| round.title == format!("Round {}", n)));
    }
}
