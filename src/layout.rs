//! # Bracket Layout
//!
//! Assigns a [`Rect`] to every match of an ordered list of [`Round`]s. Rounds flow from left
//! to right, one column per round. Every column is vertically centered on its own, so a box is
//! not necessarily aligned with the boxes feeding into it. The orthogonal connectors bridge the
//! difference.
//!
//! ```text
//! |   Round 1  |     |   Round 2  |     |    Final   |
//! | ---------- |     |            |     |            |
//! | | Match1 | |     | ---------- |     |            |
//! | ---------- |     | | Match5 | |     | ---------- |
//! | | Match2 | |     | ---------- |     | | Match7 | |
//! | ---------- |     | | Match6 | |     | ---------- |
//! | | Match3 | |     | ---------- |     |            |
//! | ---------- |     |            |     |            |
//! | | Match4 | |     |            |     |            |
//! | ---------- |     |            |     |            |
//! ```
use std::collections::HashMap;

use crate::topology::Round;
use crate::MatchId;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Returns the center of the left edge.
    #[inline]
    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.center_y())
    }

    /// Returns the center of the right edge.
    #[inline]
    pub fn right_center(&self) -> Point {
        Point::new(self.right(), self.center_y())
    }

    /// Returns `true` if the point lies within the rectangle, including its edges.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// The geometry used by [`compute`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    pub box_width: f64,
    pub box_height: f64,
    pub h_gap: f64,
    pub v_gap: f64,
    /// Additional height reserved on the canvas for round titles.
    pub title_margin: f64,
}

/// The result of a layout pass. Only valid for the rounds it was computed from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    width: f64,
    height: f64,
    columns: Vec<f64>,
    boxes: HashMap<MatchId, Rect>,
}

impl Layout {
    /// Creates an empty `Layout` with a size of zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the box of the match with the given `id`.
    #[inline]
    pub fn get(&self, id: MatchId) -> Option<Rect> {
        self.boxes.get(&id).copied()
    }

    /// Returns the x coordinate of the column of the round at `index`.
    #[inline]
    pub fn column(&self, index: usize) -> Option<f64> {
        self.columns.get(index).copied()
    }

    /// Returns the number of boxes in the layout.
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Computes the layout of `rounds`.
///
/// An empty list of rounds results in an empty layout with a size of zero.
pub fn compute(rounds: &[Round], options: &LayoutOptions) -> Layout {
    if rounds.is_empty() {
        return Layout::new();
    }

    let max_matches = rounds.iter().map(|round| round.len()).max().unwrap_or(0);

    let width = column_extent(rounds.len(), options.box_width, options.h_gap);
    let height =
        column_extent(max_matches, options.box_height, options.v_gap) + options.title_margin;

    log::debug!(
        "Laying out {} rounds (max {} matches) on a {}x{} canvas",
        rounds.len(),
        max_matches,
        width,
        height
    );

    let mut columns = Vec::with_capacity(rounds.len());
    let mut boxes = HashMap::new();

    for (i, round) in rounds.iter().enumerate() {
        let x = i as f64 * (options.box_width + options.h_gap);
        columns.push(x);

        let start_y =
            (height - column_extent(round.len(), options.box_height, options.v_gap)) / 2.0;

        for (j, m) in round.matches.iter().enumerate() {
            let y = start_y + j as f64 * (options.box_height + options.v_gap);
            let rect = Rect::new(x, y, options.box_width, options.box_height);

            if boxes.insert(m.id, rect).is_some() {
                log::warn!("Match {} appears more than once, keeping last box", m.id);
            }
        }
    }

    Layout {
        width,
        height,
        columns,
        boxes,
    }
}

/// Returns the length of `n` items of size `size` separated by `gap`.
#[inline]
fn column_extent(n: usize, size: f64, gap: f64) -> f64 {
    if n == 0 {
        0.0
    } else {
        n as f64 * size + (n - 1) as f64 * gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::single_elimination;
    use crate::Match;

    fn options() -> LayoutOptions {
        LayoutOptions {
            box_width: 200.0,
            box_height: 60.0,
            h_gap: 50.0,
            v_gap: 20.0,
            title_margin: 30.0,
        }
    }

    fn bracket(teams: u32) -> Vec<Round> {
        let mut matches = Vec::new();
        let mut id = 1;
        let mut round = 1;
        let mut n = teams / 2;

        while n > 0 {
            for match_number in 1..=n {
                matches.push(Match::new(id, round, match_number));
                id += 1;
            }

            round += 1;
            n /= 2;
        }

        single_elimination::build(&matches, teams)
    }

    #[test]
    fn test_layout_size() {
        let rounds = bracket(8);
        let layout = compute(&rounds, &options());

        // 3 rounds, 4 matches in the first round.
        assert_eq!(layout.width(), 3.0 * 200.0 + 2.0 * 50.0);
        assert_eq!(layout.height(), 4.0 * 60.0 + 3.0 * 20.0 + 30.0);
        assert_eq!(layout.len(), 7);
    }

    #[test]
    fn test_layout_positions() {
        let rounds = bracket(8);
        let layout = compute(&rounds, &options());

        assert_eq!(layout.column(0), Some(0.0));
        assert_eq!(layout.column(1), Some(250.0));
        assert_eq!(layout.column(2), Some(500.0));
        assert_eq!(layout.column(3), None);

        // First round fills the canvas minus the title margin.
        assert_eq!(layout.get(MatchId(1)), Some(Rect::new(0.0, 15.0, 200.0, 60.0)));
        assert_eq!(layout.get(MatchId(2)), Some(Rect::new(0.0, 95.0, 200.0, 60.0)));
        assert_eq!(layout.get(MatchId(4)), Some(Rect::new(0.0, 255.0, 200.0, 60.0)));

        // Height 330, two boxes take 140.
        assert_eq!(layout.get(MatchId(5)), Some(Rect::new(250.0, 95.0, 200.0, 60.0)));
        assert_eq!(layout.get(MatchId(6)), Some(Rect::new(250.0, 175.0, 200.0, 60.0)));

        assert_eq!(layout.get(MatchId(7)), Some(Rect::new(500.0, 135.0, 200.0, 60.0)));
        assert_eq!(layout.get(MatchId(8)), None);
    }

    #[test]
    fn test_layout_centering() {
        let options = options();

        for teams in [2, 4, 8, 16, 32] {
            let rounds = bracket(teams);
            let layout = compute(&rounds, &options);
            let center = layout.height() / 2.0;

            for round in &rounds {
                let n = round.len() as f64;
                let first = layout.get(round.matches[0].id).unwrap();

                let column_center =
                    first.y + (n - 1.0) * (options.box_height + options.v_gap) / 2.0
                        + options.box_height / 2.0;
                assert_eq!(column_center, center);
            }
        }
    }

    #[test]
    fn test_layout_empty() {
        let layout = compute(&[], &options());

        assert_eq!(layout.width(), 0.0);
        assert_eq!(layout.height(), 0.0);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_layout_deterministic() {
        let rounds = bracket(16);

        assert_eq!(compute(&rounds, &options()), compute(&rounds, &options()));
    }

    #[test]
    fn test_rect() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);

        assert_eq!(rect.left_center(), Point::new(10.0, 40.0));
        assert_eq!(rect.right_center(), Point::new(110.0, 40.0));
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(110.0, 60.0));
        assert!(!rect.contains(111.0, 30.0));
        assert!(!rect.contains(50.0, 19.0));
    }
}
