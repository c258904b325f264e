use crate::utils::NumExt;
use crate::Match;

use super::{group_rounds, Round};

/// Builds the rounds of a single elimination tournament.
///
/// `team_count` is only used to title the rounds; see [`round_title`]. A `team_count` of `0`
/// falls back to the highest round number in `matches`.
pub fn build(matches: &[Match], team_count: u32) -> Vec<Round> {
    let rounds = group_rounds(matches);

    let total_rounds = match team_count {
        0 => rounds.keys().next_back().copied().unwrap_or(0),
        n => n.ilog2_ceil(),
    };

    log::debug!(
        "Using {} total rounds for {} teams",
        total_rounds,
        team_count
    );

    rounds
        .into_iter()
        .map(|(round, matches)| Round {
            round,
            bracket: None,
            title: round_title(round, total_rounds),
            matches,
        })
        .collect()
}

/// Returns the title of `round` in a bracket with `total_rounds` rounds.
///
/// # Examples
///
/// ```
/// # use eto_bracket::topology::single_elimination::round_title;
/// assert_eq!(round_title(3, 3), "Final");
/// assert_eq!(round_title(2, 3), "Semifinals");
/// assert_eq!(round_title(1, 3), "Quarterfinals");
/// assert_eq!(round_title(1, 4), "Round 1");
/// ```
pub fn round_title(round: u32, total_rounds: u32) -> String {
    if total_rounds == 0 {
        return format!("Round {}", round);
    }

    if round == total_rounds {
        String::from("Final")
    } else if Some(round) == total_rounds.checked_sub(1) {
        String::from("Semifinals")
    } else if Some(round) == total_rounds.checked_sub(2) {
        String::from("Quarterfinals")
    } else {
        format!("Round {}", round)
    }
}

/// Returns `true` if the match numbered `source` in the previous round feeds into the match
/// numbered `target`.
///
/// Consecutive pairs collapse into one slot: matches `2n - 1` and `2n` feed into match `n`.
#[inline]
pub fn is_source(source: u32, target: u32) -> bool {
    source != 0 && target != 0 && (source - 1) / 2 == target - 1
}
