//! # Connectors
//!
//! A [`Connector`] expresses "the winner of match A advances into match B". For every match
//! beyond the first round the predecessors are looked up in the previous round:
//! - Single elimination derives predecessors from the match number, see
//! [`single_elimination::is_source`].
//! - Double elimination and swiss use the explicit `source_matches` of a match. Sources that
//! are not part of the previous round are skipped. In double elimination the `Final` round
//! directly follows the last winners round, so only its winners side source is connected. The
//! losers bracket comes after the final and never gets an edge into it.
//!
//! Connectors are drawn as orthogonal paths from the right edge of the source box to the left
//! edge of the target box, bending at the horizontal midpoint between both boxes.
use std::fmt::{self, Display, Formatter};

use crate::layout::{Layout, Point, Rect};
use crate::topology::{single_elimination, Round};
use crate::{Format, Match, MatchId};

#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    pub source: MatchId,
    pub target: MatchId,
    pub path: ConnectorPath,
}

/// An orthogonal path between two boxes.
///
/// The `Display` impl writes the path in SVG path syntax:
///
/// ```
/// # use eto_bracket::connector::ConnectorPath;
/// # use eto_bracket::layout::Rect;
/// let source = Rect::new(0.0, 0.0, 100.0, 40.0);
/// let target = Rect::new(150.0, 40.0, 100.0, 40.0);
///
/// let path = ConnectorPath::between(&source, &target);
/// assert_eq!(path.to_string(), "M 100,20 H 125 V 60 H 150");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConnectorPath {
    pub start: Point,
    /// The x coordinate of the vertical segment.
    pub mid_x: f64,
    pub end: Point,
}

impl ConnectorPath {
    /// Creates a new `ConnectorPath` from the right-center of `source` to the left-center of
    /// `target`.
    pub fn between(source: &Rect, target: &Rect) -> Self {
        let start = source.right_center();
        let end = target.left_center();

        Self {
            start,
            mid_x: (start.x + end.x) / 2.0,
            end,
        }
    }

    /// Returns the corner points of the path, including start and end.
    pub fn points(&self) -> [Point; 4] {
        [
            self.start,
            Point::new(self.mid_x, self.start.y),
            Point::new(self.mid_x, self.end.y),
            self.end,
        ]
    }
}

impl Display for ConnectorPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {},{} H {} V {} H {}",
            self.start.x, self.start.y, self.mid_x, self.end.y, self.end.x
        )
    }
}

/// Resolves the connectors between all `rounds`. Only edges where both matches have a box in
/// `layout` produce a connector.
pub fn resolve(format: Format, rounds: &[Round], layout: &Layout) -> Vec<Connector> {
    let mut connectors = Vec::new();

    for pair in rounds.windows(2) {
        let (previous, round) = (&pair[0], &pair[1]);

        for target in &round.matches {
            let target_rect = match layout.get(target.id) {
                Some(rect) => rect,
                None => {
                    log::debug!("Match {} has no box, skipping connectors", target.id);
                    continue;
                }
            };

            for source in sources(format, target, previous) {
                match layout.get(source.id) {
                    Some(source_rect) => connectors.push(Connector {
                        source: source.id,
                        target: target.id,
                        path: ConnectorPath::between(&source_rect, &target_rect),
                    }),
                    None => {
                        log::debug!("Match {} has no box, skipping connector", source.id);
                    }
                }
            }
        }
    }

    log::debug!("Resolved {} connectors", connectors.len());

    connectors
}

/// Returns the matches in `previous` which feed into `target`.
fn sources<'a>(format: Format, target: &Match, previous: &'a Round) -> Vec<&'a Match> {
    match format {
        Format::SingleElimination => previous
            .matches
            .iter()
            .filter(|m| single_elimination::is_source(m.match_number, target.match_number))
            .collect(),
        Format::DoubleElimination | Format::Swiss => target
            .source_matches
            .iter()
            .filter_map(|id| {
                let source = previous.matches.iter().find(|m| m.id == *id);

                if source.is_none() {
                    log::debug!(
                        "Source {} of match {} is not in the previous round",
                        id,
                        target.id
                    );
                }

                source
            })
            .collect(),
    }
}
