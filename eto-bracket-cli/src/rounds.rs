use std::fmt::Write;
use std::path::PathBuf;

use eto_bracket::topology::{self, Round};

use crate::{read_view, Result};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// JSON file containing the tournament.
    input: PathBuf,
}

impl Args {
    pub async fn run(self) -> Result<()> {
        let view = read_view(&self.input).await?;
        let rounds = topology::build(&view);

        print!("{}", table(&rounds));
        Ok(())
    }
}

fn table(rounds: &[Round]) -> String {
    let mut buf = String::from("Round | Title | Matches\n");

    for round in rounds {
        let matches: Vec<String> = round.matches.iter().map(|m| m.id.to_string()).collect();

        let _ = writeln!(
            buf,
            "{} | {} | {}",
            round.round,
            round.title,
            matches.join(", ")
        );
    }

    buf
}

#[cfg(test)]
mod tests {
    use eto_bracket::topology;
    use eto_bracket::{Format, Match, TournamentView};

    use super::table;

    #[test]
    fn test_table() {
        let mut view = TournamentView::new(Format::SingleElimination, 4);
        view.matches = vec![
            Match::new(3, 2, 1),
            Match::new(2, 1, 2),
            Match::new(1, 1, 1),
        ];

        assert_eq!(
            table(&topology::build(&view)),
            "Round | Title | Matches\n1 | Semifinals | 1, 2\n2 | Final | 3\n"
        );
    }
}
