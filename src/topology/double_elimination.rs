use crate::{BracketTag, Match};

use super::{group_rounds, Round};

/// Builds the rounds of a double elimination tournament.
///
/// Matches are partitioned by their bracket. Winners rounds come first, followed by a single
/// `Final` round if any final match exists, followed by the losers rounds. Matches without a
/// bracket are treated as winners matches.
pub fn build(matches: &[Match]) -> Vec<Round> {
    let mut winners = Vec::new();
    let mut losers = Vec::new();
    let mut finals = Vec::new();

    for m in matches {
        match m.bracket {
            Some(BracketTag::Winners) | None => winners.push(m),
            Some(BracketTag::Losers) => losers.push(m),
            Some(BracketTag::Final) => finals.push(m),
        }
    }

    log::debug!(
        "Partitioned matches into {} winners, {} losers and {} final matches",
        winners.len(),
        losers.len(),
        finals.len()
    );

    let mut rounds = build_bracket(winners, BracketTag::Winners, "Winners");

    if !finals.is_empty() {
        if finals.len() > 1 {
            log::warn!(
                "Found {} final matches, expected at most one",
                finals.len()
            );
        }

        let round = rounds
            .last()
            .map(|r| r.round.saturating_add(1))
            .unwrap_or(1);

        let mut matches: Vec<Match> = finals.into_iter().cloned().collect();
        matches.sort_by_key(|m| m.match_number);

        rounds.push(Round {
            round,
            bracket: Some(BracketTag::Final),
            title: String::from("Final"),
            matches,
        });
    }

    rounds.extend(build_bracket(losers, BracketTag::Losers, "Losers"));

    rounds
}

fn build_bracket(matches: Vec<&Match>, bracket: BracketTag, prefix: &str) -> Vec<Round> {
    group_rounds(matches)
        .into_iter()
        .map(|(round, matches)| Round {
            round,
            bracket: Some(bracket),
            title: format!("{} R{}", prefix, round),
            matches,
        })
        .collect()
}
