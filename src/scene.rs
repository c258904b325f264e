//! # Scene Graph
//!
//! A [`Scene`] is the drawing-agnostic description of a rendered bracket. It only contains
//! primitives (groups, rectangles, paths and text) with absolute coordinates, so any backend
//! can draw it. See [`render`] for the backends shipped with this crate.
//!
//! [`render`]: crate::render
use std::borrow::Cow;

use crate::connector::Connector;
use crate::layout::{Layout, Rect};
use crate::topology::Round;
use crate::{Match, MatchId, MatchStatus, RenderOptions, TournamentView};

/// The label used for a spot without a team.
pub const TBD: &str = "TBD";

/// The size constraint of the host environment. The scene is scaled to fit into it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    width: f64,
    height: f64,
    viewport: Option<Viewport>,
    nodes: Vec<Node>,
    hits: Vec<(Rect, MatchId)>,
}

impl Scene {
    /// Creates an empty `Scene` with a size of zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the width of the canvas.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height of the canvas.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[inline]
    pub fn set_viewport(&mut self, viewport: Option<Viewport>) {
        self.viewport = viewport;
    }

    /// Returns the top-level nodes in drawing order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns `true` if the scene has nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the match whose box contains the point `(x, y)`. The point is given in canvas
    /// coordinates.
    pub fn match_at(&self, x: f64, y: f64) -> Option<MatchId> {
        self.hits
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, id)| *id)
    }

    /// Returns an iterator over the ids of all matches in the scene, in drawing order.
    pub fn match_ids(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.hits.iter().map(|(_, id)| *id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Rect(RectNode),
    Path(PathNode),
    Text(TextNode),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub class: &'static str,
    /// The match drawn by this group, if any.
    pub match_id: Option<MatchId>,
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub rect: Rect,
    pub fill: String,
    pub stroke: Option<String>,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    /// The path in SVG path syntax.
    pub d: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Whether the path should be drawn with an animation.
    pub animate: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: TextAnchor,
    pub fill: String,
    pub font_family: String,
    pub font_size: f64,
    pub bold: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Padding between the box border and its text.
const PADDING: f64 = 8.0;

/// Builds the [`Scene`] of a tournament from the outputs of the previous stages.
pub fn build(
    view: &TournamentView,
    rounds: &[Round],
    layout: &Layout,
    connectors: &[Connector],
    options: &RenderOptions,
) -> Scene {
    if rounds.is_empty() {
        return Scene::new();
    }

    let mut builder = SceneBuilder {
        view,
        options,
        nodes: Vec::new(),
        hits: Vec::new(),
    };

    if options.show_round_titles {
        builder.titles(rounds, layout);
    }

    builder.connectors(connectors);

    for round in rounds {
        for m in &round.matches {
            if let Some(rect) = layout.get(m.id) {
                builder.r#match(m, rect);
            }
        }
    }

    Scene {
        width: layout.width(),
        height: layout.height(),
        viewport: None,
        nodes: builder.nodes,
        hits: builder.hits,
    }
}

struct SceneBuilder<'a> {
    view: &'a TournamentView,
    options: &'a RenderOptions,
    nodes: Vec<Node>,
    hits: Vec<(Rect, MatchId)>,
}

impl<'a> SceneBuilder<'a> {
    fn titles(&mut self, rounds: &[Round], layout: &Layout) {
        let children = rounds
            .iter()
            .enumerate()
            .filter_map(|(index, round)| {
                let x = layout.column(index)?;

                Some(Node::Text(self.text(
                    x + self.options.box_width / 2.0,
                    self.options.font_size + 2.0,
                    round.title.clone(),
                    TextAnchor::Middle,
                    true,
                )))
            })
            .collect();

        self.nodes.push(Node::Group(Group {
            class: "round-titles",
            match_id: None,
            children,
        }));
    }

    fn connectors(&mut self, connectors: &[Connector]) {
        let children = connectors
            .iter()
            .map(|connector| {
                Node::Path(PathNode {
                    d: connector.path.to_string(),
                    stroke: self.options.line_color.clone(),
                    stroke_width: 2.0,
                    animate: self.options.animate_connectors,
                })
            })
            .collect();

        self.nodes.push(Node::Group(Group {
            class: "connectors",
            match_id: None,
            children,
        }));
    }

    fn r#match(&mut self, m: &Match, rect: Rect) {
        let mut children = vec![Node::Rect(RectNode {
            rect,
            fill: self.options.box_color.clone(),
            stroke: Some(self.options.line_color.clone()),
            radius: 4.0,
        })];

        let row_height = rect.height / 2.0;
        let winner = m.winner();

        if let Some(spot) = winner {
            children.push(Node::Rect(RectNode {
                rect: Rect::new(
                    rect.x,
                    rect.y + spot as f64 * row_height,
                    rect.width,
                    row_height,
                ),
                fill: self.options.winner_color.clone(),
                stroke: None,
                radius: 0.0,
            }));
        }

        for (spot, (team, score)) in m.team_ids().into_iter().zip(m.scores()).enumerate() {
            // Baseline roughly centers the text within the row.
            let baseline =
                rect.y + spot as f64 * row_height + row_height / 2.0 + self.options.font_size / 3.0;
            let is_winner = winner == Some(spot);

            let name = match team {
                Some(id) => match self.view.team_name(id) {
                    Some(name) => Cow::Borrowed(name),
                    None => Cow::Owned(format!("Team {}", id)),
                },
                None => Cow::Borrowed(TBD),
            };

            children.push(Node::Text(self.text(
                rect.x + PADDING,
                baseline,
                name.into_owned(),
                TextAnchor::Start,
                is_winner,
            )));

            let score = match score {
                Some(score) => score.to_string(),
                None => String::from("-"),
            };

            children.push(Node::Text(self.text(
                rect.right() - PADDING,
                baseline,
                score,
                TextAnchor::End,
                is_winner,
            )));
        }

        let status = match m.status {
            MatchStatus::InProgress => Some("LIVE"),
            MatchStatus::Cancelled => Some("Cancelled"),
            MatchStatus::Pending | MatchStatus::Completed => None,
        };

        if let Some(status) = status {
            // Top center inside the box, clear of the name and score columns.
            let font_size = self.options.font_size * 0.8;
            let mut text = self.text(
                rect.x + rect.width / 2.0,
                rect.y + font_size + 2.0,
                String::from(status),
                TextAnchor::Middle,
                false,
            );
            text.font_size = font_size;
            children.push(Node::Text(text));
        }

        self.nodes.push(Node::Group(Group {
            class: "match",
            match_id: Some(m.id),
            children,
        }));
        self.hits.push((rect, m.id));
    }

    fn text(&self, x: f64, y: f64, content: String, anchor: TextAnchor, bold: bool) -> TextNode {
        TextNode {
            x,
            y,
            content,
            anchor,
            fill: self.options.text_color.clone(),
            font_family: self.options.font_family.clone(),
            font_size: self.options.font_size,
            bold,
        }
    }
}
