//! # eto-bracket
//!
//! This crate turns a flat list of tournament matches into a renderable bracket. The work is
//! split into pure stages which can be used on their own:
//!
//! - [`topology`]: Groups the matches of a [`TournamentView`] into ordered [`Round`]s for
//! single elimination, double elimination and swiss tournaments.
//! - [`layout`]: Assigns a [`Rect`] to every match box.
//! - [`connector`]: Resolves which matches feed into which and computes the connecting paths.
//! - [`scene`]: Builds a drawing-agnostic [`Scene`] out of the previous stages.
//! - [`render`]: The [`Renderer`] trait and an SVG implementation.
//!
//! [`BracketRenderer`] drives all stages and keeps track of the render state.
//!
//! Important types:
//! - [`TournamentView`]: The input of the pipeline.
//! - [`Match`]: A single *match* or *heat* of two teams.
//! - [`Format`]: The tournament format selecting the topology.
//!
//! ## Feature Flags
//!
//! `serde`: Adds `Serialize` and `Deserialize` impls to the input types and [`RenderOptions`].
//! Numeric fields accept both numbers and numeric strings.
//!
//! [`Round`]: topology::Round
//! [`Rect`]: layout::Rect
//! [`Scene`]: scene::Scene
//! [`Renderer`]: render::Renderer
pub mod bracket;
pub mod connector;
pub mod layout;
pub mod options;
pub mod render;
pub mod scene;
pub mod topology;

#[cfg(feature = "serde")]
mod serde_impl;
mod utils;

pub use bracket::{BracketRenderer, RenderState};
pub use options::RenderOptions;

use std::fmt::{self, Display, Formatter};
use std::result;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An `Result<T>` using [`enum@Error`] as an error type.
pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("unknown tournament format: {0:?}")]
    UnknownFormat(String),
    #[error("no render target attached")]
    MissingTarget,
}

/// The unique identifier of a [`Match`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MatchId(pub u64);

impl Display for MatchId {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for MatchId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The unique identifier of a [`Team`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TeamId(pub u64);

impl Display for TeamId {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for TeamId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// The format of a tournament. Selects how matches are grouped into rounds and how
/// predecessors of a match are found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    SingleElimination,
    DoubleElimination,
    Swiss,
}

impl Format {
    /// Returns the name of the format as used in serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleElimination => "single",
            Self::DoubleElimination => "double",
            Self::Swiss => "swiss",
        }
    }
}

impl Display for Format {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Parses a format name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eto_bracket::{Error, Format};
    /// assert_eq!("double".parse(), Ok(Format::DoubleElimination));
    /// assert_eq!("round_robin".parse::<Format>(), Err(Error::UnknownFormat("round_robin".into())));
    /// ```
    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::SingleElimination),
            "double" => Ok(Self::DoubleElimination),
            "swiss" => Ok(Self::Swiss),
            _ => Err(Error::UnknownFormat(s.to_owned())),
        }
    }
}

/// The sub-bracket of a double elimination tournament a match belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BracketTag {
    Winners,
    Losers,
    Final,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// A match between two teams.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    pub id: MatchId,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_impl::number"))]
    pub round: u32,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "serde_impl::number"))]
    pub match_number: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "serde_impl::optional_bracket")
    )]
    pub bracket: Option<BracketTag>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "serde_impl::optional_number")
    )]
    pub team1_id: Option<TeamId>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "serde_impl::optional_number")
    )]
    pub team2_id: Option<TeamId>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "serde_impl::optional_number")
    )]
    pub team1_score: Option<u64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "serde_impl::optional_number")
    )]
    pub team2_score: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: MatchStatus,
    /// The matches feeding into this match, in order. Only used by double elimination and
    /// swiss tournaments, single elimination predecessors are derived from the match number.
    #[cfg_attr(feature = "serde", serde(default))]
    pub source_matches: Vec<MatchId>,
}

impl Match {
    /// Creates a new pending `Match` without teams.
    pub fn new(id: u64, round: u32, match_number: u32) -> Self {
        Self {
            id: MatchId(id),
            round,
            match_number,
            bracket: None,
            team1_id: None,
            team2_id: None,
            team1_score: None,
            team2_score: None,
            status: MatchStatus::Pending,
            source_matches: Vec::new(),
        }
    }

    pub fn bracket(mut self, bracket: BracketTag) -> Self {
        self.bracket = Some(bracket);
        self
    }

    pub fn teams(mut self, team1: Option<u64>, team2: Option<u64>) -> Self {
        self.team1_id = team1.map(TeamId);
        self.team2_id = team2.map(TeamId);
        self
    }

    /// Sets the scores of both teams and marks the match as [`Completed`].
    ///
    /// [`Completed`]: MatchStatus::Completed
    pub fn result(mut self, team1: u64, team2: u64) -> Self {
        self.team1_score = Some(team1);
        self.team2_score = Some(team2);
        self.status = MatchStatus::Completed;
        self
    }

    pub fn status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    pub fn sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.source_matches = sources.into_iter().map(MatchId).collect();
        self
    }

    /// Returns the team ids of both spots.
    #[inline]
    pub fn team_ids(&self) -> [Option<TeamId>; 2] {
        [self.team1_id, self.team2_id]
    }

    /// Returns the scores of both spots.
    #[inline]
    pub fn scores(&self) -> [Option<u64>; 2] {
        [self.team1_score, self.team2_score]
    }

    /// Returns the spot (0 or 1) of the winning team. A match only has a winner once it is
    /// completed with both scores present and not tied.
    pub fn winner(&self) -> Option<usize> {
        if self.status != MatchStatus::Completed {
            return None;
        }

        match (self.team1_score?, self.team2_score?) {
            (a, b) if a > b => Some(0),
            (a, b) if a < b => Some(1),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// The input of the bracket pipeline. Contains everything known about a tournament at the
/// time of rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TournamentView {
    pub format: Format,
    /// The total number of teams. Only used for the round titles of single elimination
    /// tournaments.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "serde_impl::number")
    )]
    pub team_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub matches: Vec<Match>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub teams: Vec<Team>,
}

impl TournamentView {
    /// Creates a new `TournamentView` without any matches or teams.
    pub fn new(format: Format, team_count: u32) -> Self {
        Self {
            format,
            team_count,
            matches: Vec::new(),
            teams: Vec::new(),
        }
    }

    /// Returns the name of the team with the given `id`.
    pub fn team_name(&self, id: TeamId) -> Option<&str> {
        self.teams
            .iter()
            .find(|team| team.id == id)
            .map(|team| team.name.as_str())
    }
}
