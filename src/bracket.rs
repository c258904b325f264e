//! # Render Orchestrator
//!
//! [`BracketRenderer`] owns the working set of a bracket and runs it through all pipeline
//! stages on every render:
//!
//! ```text
//! Uninitialized -> TopologyBuilt -> Sized -> Rendered
//! ```
//!
//! Every stage is a pure function of the data and the options, so rendering the same data twice
//! produces the same [`Scene`]. A render that fails stays in [`RenderState::Uninitialized`] and
//! draws nothing.
//!
//! ```
//! # use eto_bracket::render::svg::SvgRenderer;
//! # use eto_bracket::{BracketRenderer, Format, Match, RenderOptions, RenderState, TournamentView};
//! let mut view = TournamentView::new(Format::SingleElimination, 4);
//! view.matches = vec![Match::new(1, 1, 1), Match::new(2, 1, 2), Match::new(3, 2, 1)];
//!
//! let mut bracket = BracketRenderer::new(RenderOptions::default());
//! bracket.attach(SvgRenderer::new());
//! bracket.update_data(view).unwrap();
//!
//! assert_eq!(bracket.state(), RenderState::Rendered);
//! assert!(bracket.target().unwrap().output().starts_with("<svg"));
//! ```
use crate::layout::{self, Layout};
use crate::render::Renderer;
use crate::scene::{self, Scene, Viewport};
use crate::topology::{self, Round};
use crate::{connector, Error, Match, MatchId, RenderOptions, Result, TournamentView};

/// The stage reached by the last render.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderState {
    #[default]
    Uninitialized,
    TopologyBuilt,
    Sized,
    Rendered,
}

pub struct BracketRenderer<R>
where
    R: Renderer,
{
    options: RenderOptions,
    target: Option<R>,
    view: Option<TournamentView>,
    viewport: Option<Viewport>,
    state: RenderState,
    rounds: Vec<Round>,
    layout: Layout,
    scene: Scene,
    on_click: Option<Box<dyn FnMut(&Match)>>,
}

impl<R> BracketRenderer<R>
where
    R: Renderer,
{
    /// Creates a new `BracketRenderer` without data and without a render target.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            target: None,
            view: None,
            viewport: None,
            state: RenderState::Uninitialized,
            rounds: Vec::new(),
            layout: Layout::new(),
            scene: Scene::new(),
            on_click: None,
        }
    }

    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Attaches the render target, replacing the previous one.
    pub fn attach(&mut self, target: R) {
        self.target = Some(target);
    }

    /// Removes and returns the render target.
    pub fn detach(&mut self) -> Option<R> {
        self.target.take()
    }

    /// Registers the callback invoked by [`click`] with the clicked [`Match`].
    ///
    /// [`click`]: Self::click
    pub fn on_click<F>(&mut self, f: F)
    where
        F: FnMut(&Match) + 'static,
    {
        self.on_click = Some(Box::new(f));
    }

    /// Replaces the entire working set with `view` and renders it.
    ///
    /// The data is kept even if the render fails, so a later [`render`] after attaching a
    /// target draws it.
    ///
    /// [`render`]: Self::render
    pub fn update_data(&mut self, view: TournamentView) -> Result<()> {
        log::debug!(
            "Updating bracket data: {} tournament with {} matches",
            view.format,
            view.matches.len()
        );

        self.view = Some(view);
        self.state = RenderState::Uninitialized;

        self.render()
    }

    /// Notifies the renderer about a changed size constraint of the host and renders again.
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        log::debug!("Resizing to {}x{}", viewport.width, viewport.height);

        self.viewport = Some(viewport);
        self.render()
    }

    /// Runs the full pipeline and draws the result onto the attached target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTarget`] if no target is attached. Nothing is drawn in that case
    /// and the output of the previous render stays untouched.
    pub fn render(&mut self) -> Result<()> {
        self.state = RenderState::Uninitialized;

        let target = match self.target.as_mut() {
            Some(target) => target,
            None => {
                log::error!("Cannot render bracket: {}", Error::MissingTarget);
                return Err(Error::MissingTarget);
            }
        };

        let (rounds, layout, mut scene) = match &self.view {
            Some(view) => {
                let rounds = topology::build(view);
                self.state = RenderState::TopologyBuilt;

                let layout = layout::compute(&rounds, &self.options.layout());
                self.state = RenderState::Sized;

                let connectors = connector::resolve(view.format, &rounds, &layout);
                let scene = scene::build(view, &rounds, &layout, &connectors, &self.options);

                (rounds, layout, scene)
            }
            None => {
                log::debug!("Rendering bracket without data");
                self.state = RenderState::Sized;
                (Vec::new(), Layout::new(), Scene::new())
            }
        };

        scene.set_viewport(self.viewport);
        target.render(&scene);

        self.rounds = rounds;
        self.layout = layout;
        self.scene = scene;
        self.state = RenderState::Rendered;

        log::debug!(
            "Rendered {} rounds on a {}x{} canvas",
            self.rounds.len(),
            self.scene.width(),
            self.scene.height()
        );

        Ok(())
    }

    /// Dispatches a click at `(x, y)` in canvas coordinates. If the point hits a match box of
    /// the last render, the click callback is invoked with the match and its id is returned.
    pub fn click(&mut self, x: f64, y: f64) -> Option<MatchId> {
        let id = self.scene.match_at(x, y)?;
        log::debug!("Clicked match {}", id);

        if let Some(callback) = &mut self.on_click {
            let m = self
                .rounds
                .iter()
                .flat_map(|round| round.matches.iter())
                .find(|m| m.id == id);

            if let Some(m) = m {
                callback(m);
            }
        }

        Some(id)
    }

    #[inline]
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Returns the data of the last [`update_data`] call.
    ///
    /// [`update_data`]: Self::update_data
    #[inline]
    pub fn data(&self) -> Option<&TournamentView> {
        self.view.as_ref()
    }

    /// Returns the scene of the last successful render.
    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn target(&self) -> Option<&R> {
        self.target.as_ref()
    }

    /// Consumes the `BracketRenderer`, returning the render target.
    #[inline]
    pub fn into_target(self) -> Option<R> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::render::svg::SvgRenderer;
    use crate::{BracketTag, Format, MatchStatus, Team, TeamId};

    #[derive(Debug, Default)]
    struct Recorder {
        scenes: Vec<Scene>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, scene: &Scene) {
            self.scenes.push(scene.clone());
        }
    }

    fn view() -> TournamentView {
        let mut view = TournamentView::new(Format::SingleElimination, 4);
        view.teams = vec![Team {
            id: TeamId(1),
            name: String::from("Alpha"),
        }];
        view.matches = vec![
            Match::new(3, 2, 1),
            Match::new(2, 1, 2).teams(Some(3), Some(4)),
            Match::new(1, 1, 1).teams(Some(1), Some(2)).result(1, 0),
        ];
        view
    }

    #[test]
    fn test_render_deterministic() {
        let mut bracket = BracketRenderer::new(RenderOptions::default());
        bracket.attach(SvgRenderer::new());

        bracket.update_data(view()).unwrap();
        let first = bracket.target().unwrap().output().to_owned();
        let scene = bracket.scene().clone();

        bracket.render().unwrap();
        assert_eq!(bracket.target().unwrap().output(), first);
        assert_eq!(*bracket.scene(), scene);

        bracket.update_data(view()).unwrap();
        assert_eq!(bracket.into_target().unwrap().into_output(), first);
    }

    #[test]
    fn test_render_states() {
        let mut bracket = BracketRenderer::new(RenderOptions::default());
        assert_eq!(bracket.state(), RenderState::Uninitialized);

        bracket.attach(Recorder::default());
        bracket.update_data(view()).unwrap();

        assert_eq!(bracket.state(), RenderState::Rendered);
        assert_eq!(bracket.rounds().len(), 2);
        assert_eq!(bracket.layout().len(), 3);
        assert_eq!(bracket.target().unwrap().scenes.len(), 1);
    }

    #[test]
    fn test_update_data_replaces() {
        let mut bracket = BracketRenderer::new(RenderOptions::default());
        bracket.attach(Recorder::default());
        bracket.update_data(view()).unwrap();

        let mut view = TournamentView::new(Format::DoubleElimination, 2);
        view.matches = vec![
            Match::new(10, 1, 1).bracket(BracketTag::Winners),
            Match::new(11, 1, 1).bracket(BracketTag::Final).sources([10]),
        ];
        bracket.update_data(view).unwrap();

        assert_eq!(
            bracket.scene().match_ids().collect::<Vec<_>>(),
            vec![MatchId(10), MatchId(11)]
        );
        assert_eq!(bracket.layout().get(MatchId(1)), None);
        assert_eq!(bracket.rounds()[1].title, "Final");
        assert_eq!(bracket.data().unwrap().format, Format::DoubleElimination);
    }

    #[test]
    fn test_missing_target() {
        let mut bracket: BracketRenderer<Recorder> =
            BracketRenderer::new(RenderOptions::default());

        assert_eq!(bracket.update_data(view()), Err(Error::MissingTarget));
        assert_eq!(bracket.state(), RenderState::Uninitialized);
        assert!(bracket.scene().is_empty());

        // The data is kept for the next render.
        bracket.attach(Recorder::default());
        bracket.render().unwrap();
        assert_eq!(bracket.state(), RenderState::Rendered);
        assert_eq!(bracket.scene().match_ids().count(), 3);
    }

    #[test]
    fn test_missing_target_keeps_previous_render() {
        let mut bracket = BracketRenderer::new(RenderOptions::default());
        bracket.attach(Recorder::default());
        bracket.update_data(view()).unwrap();
        let scene = bracket.scene().clone();

        let target = bracket.detach().unwrap();
        assert_eq!(bracket.render(), Err(Error::MissingTarget));
        assert_eq!(bracket.state(), RenderState::Uninitialized);
        assert_eq!(*bracket.scene(), scene);
        assert_eq!(target.scenes.len(), 1);
    }

    #[test]
    fn test_render_empty() {
        let mut bracket = BracketRenderer::new(RenderOptions::default());
        bracket.attach(SvgRenderer::new());

        bracket.render().unwrap();
        assert_eq!(bracket.state(), RenderState::Rendered);
        assert!(bracket.scene().is_empty());

        bracket
            .update_data(TournamentView::new(Format::Swiss, 0))
            .unwrap();
        assert_eq!(bracket.state(), RenderState::Rendered);
        assert!(bracket.rounds().is_empty());
        assert_eq!(bracket.target().unwrap().output(), "");
    }

    #[test]
    fn test_click() {
        let clicked = Rc::new(RefCell::new(Vec::new()));

        let mut bracket = BracketRenderer::new(RenderOptions::default());
        bracket.attach(Recorder::default());
        bracket.update_data(view()).unwrap();

        // No callback registered yet.
        let rect = bracket.layout().get(MatchId(1)).unwrap();
        assert_eq!(bracket.click(rect.x + 1.0, rect.y + 1.0), Some(MatchId(1)));

        let inner = clicked.clone();
        bracket.on_click(move |m: &Match| {
            inner.borrow_mut().push((m.id, m.status));
        });

        assert_eq!(bracket.click(rect.x + 1.0, rect.y + 1.0), Some(MatchId(1)));
        assert_eq!(bracket.click(-10.0, -10.0), None);

        let rect = bracket.layout().get(MatchId(3)).unwrap();
        assert_eq!(bracket.click(rect.x, rect.bottom()), Some(MatchId(3)));

        assert_eq!(
            *clicked.borrow(),
            vec![
                (MatchId(1), MatchStatus::Completed),
                (MatchId(3), MatchStatus::Pending)
            ]
        );
    }

    #[test]
    fn test_resize() {
        let mut bracket = BracketRenderer::new(RenderOptions::default());
        bracket.attach(Recorder::default());
        bracket.update_data(view()).unwrap();

        let layout = bracket.layout().clone();
        bracket.resize(Viewport::new(320.0, 240.0)).unwrap();

        // The layout only depends on the data, the viewport only scales the output.
        assert_eq!(*bracket.layout(), layout);
        assert_eq!(
            bracket.scene().viewport(),
            Some(Viewport::new(320.0, 240.0))
        );

        let target = bracket.into_target().unwrap();
        assert_eq!(target.scenes.len(), 2);
        assert_eq!(target.scenes[0].viewport(), None);
        assert_eq!(target.scenes[0].nodes(), target.scenes[1].nodes());
    }
}
