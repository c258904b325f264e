mod config;
mod logger;
mod options;
mod pick;
mod render;
mod rounds;

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use eto_bracket::TournamentView;
use log::LevelFilter;
use thiserror::Error;
use tokio::task::JoinError;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Args {
    /// Path to a TOML config file.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Overrides the log level of the config.
    #[clap(short, long)]
    loglevel: Option<LevelFilter>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Renders tournaments into SVG files.
    Render(render::Args),
    /// Lists the rounds of a tournament.
    Rounds(rounds::Args),
    /// Prints the match at a point of the rendered bracket.
    Pick(pick::Args),
}

impl Command {
    pub async fn run(self, config: &Config) -> Result<()> {
        match self {
            Self::Render(args) => args.run(config).await,
            Self::Rounds(args) => args.run().await,
            Self::Pick(args) => args.run(config).await,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()).await {
        Ok(config) => config.with_environment(),
        Err(err) => {
            logger::init(LevelFilter::Info);
            log::error!("Failed to load config: {}", err);
            process::exit(1);
        }
    };

    logger::init(args.loglevel.unwrap_or(config.loglevel));
    log::debug!("Using config: {:?}", config);

    if let Err(err) = args.command.run(&config).await {
        log::error!("{}", err);
        process::exit(1);
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("invalid tournament: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Bracket(#[from] eto_bracket::Error),
    #[error("{0}")]
    Join(#[from] JoinError),
    #[error("failed to render {0} of {1} files")]
    Failed(usize, usize),
}

/// Reads a [`TournamentView`] from the JSON file at `path`.
pub async fn read_view(path: &Path) -> Result<TournamentView> {
    let buf = tokio::fs::read(path).await?;
    parse_view(&buf)
}

pub fn parse_view(buf: &[u8]) -> Result<TournamentView> {
    let view: TournamentView = serde_json::from_slice(buf)?;

    log::debug!(
        "Read {} tournament with {} matches and {} teams",
        view.format,
        view.matches.len(),
        view.teams.len()
    );

    Ok(view)
}

#[cfg(test)]
mod tests {
    use eto_bracket::{BracketTag, Error, Format, MatchId, MatchStatus, TeamId};

    use super::parse_view;

    #[test]
    fn test_parse_view() {
        let input = br#"{
            "format": "double",
            "team_count": "4",
            "teams": [{ "id": "1", "name": "Alpha" }],
            "matches": [
                {
                    "id": "12",
                    "round": "2",
                    "match_number": 1,
                    "bracket": "losers",
                    "team1_id": "1",
                    "team2_id": "",
                    "team1_score": null,
                    "status": "in_progress",
                    "source_matches": ["3", 4]
                }
            ]
        }"#;

        let view = parse_view(input).unwrap();
        assert_eq!(view.format, Format::DoubleElimination);
        assert_eq!(view.team_count, 4);
        assert_eq!(view.team_name(TeamId(1)), Some("Alpha"));

        let m = &view.matches[0];
        assert_eq!(m.id, MatchId(12));
        assert_eq!(m.round, 2);
        assert_eq!(m.bracket, Some(BracketTag::Losers));
        assert_eq!(m.team_ids(), [Some(TeamId(1)), None]);
        assert_eq!(m.scores(), [None, None]);
        assert_eq!(m.status, MatchStatus::InProgress);
        assert_eq!(m.source_matches, vec![MatchId(3), MatchId(4)]);
    }

    #[test]
    fn test_parse_view_unknown_format() {
        let err = parse_view(br#"{ "format": "ladder" }"#).unwrap_err();

        assert!(err
            .to_string()
            .contains(&Error::UnknownFormat(String::from("ladder")).to_string()));
    }
}
