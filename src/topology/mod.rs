//! # Tournament Topology
//!
//! Groups an unordered list of [`Match`]es into ordered [`Round`]s. How rounds are formed and
//! titled depends on the [`Format`] of the tournament:
//! - [`single_elimination`]: One round per round number, titled by the distance to the final.
//! - [`double_elimination`]: Separate winners and losers rounds with an optional trailing final.
//! - [`swiss`]: One round per round number, titled `Round {n}`.
//!
//! Round numbers are always ordered numerically. Round numbers missing from the input are not
//! filled in.
pub mod double_elimination;
pub mod single_elimination;
pub mod swiss;

use std::collections::BTreeMap;

use crate::{BracketTag, Format, Match, TournamentView};

/// A set of matches played at the same stage of a tournament.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// The round number shared by all matches in this round.
    pub round: u32,
    /// The bracket of a double elimination tournament. Always `None` for other formats.
    pub bracket: Option<BracketTag>,
    pub title: String,
    /// The matches ordered by their `match_number`.
    pub matches: Vec<Match>,
}

impl Round {
    /// Returns the match with the given `match_number`.
    pub fn get(&self, match_number: u32) -> Option<&Match> {
        self.matches
            .iter()
            .find(|m| m.match_number == match_number)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Builds the rounds of the tournament using the topology of its format.
pub fn build(view: &TournamentView) -> Vec<Round> {
    log::debug!(
        "Building {} topology for {} matches",
        view.format,
        view.matches.len()
    );

    let rounds = match view.format {
        Format::SingleElimination => single_elimination::build(&view.matches, view.team_count),
        Format::DoubleElimination => double_elimination::build(&view.matches),
        Format::Swiss => swiss::build(&view.matches),
    };

    log::debug!("Built {} rounds", rounds.len());

    rounds
}

/// Groups `matches` by their round number. The groups are ordered by round number and the
/// matches within a group by their match number.
///
/// Duplicate match numbers within a round are kept in input order.
pub(crate) fn group_rounds<'a, I>(matches: I) -> BTreeMap<u32, Vec<Match>>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut rounds: BTreeMap<u32, Vec<Match>> = BTreeMap::new();

    for m in matches {
        rounds.entry(m.round).or_default().push(m.clone());
    }

    for (round, matches) in rounds.iter_mut() {
        // Stable sort: duplicates stay in input order.
        matches.sort_by_key(|m| m.match_number);

        for pair in matches.windows(2) {
            if pair[0].match_number == pair[1].match_number {
                log::warn!(
                    "Duplicate match number {} in round {} (matches {} and {})",
                    pair[0].match_number,
                    round,
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }

    rounds
}
