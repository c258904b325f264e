//! # Scene Rendering
//!
//! A [`Renderer`] draws a [`Scene`] onto some backend. Renderers are swappable, the pipeline
//! only ever hands them a finished [`Scene`]:
//! - [`SvgRenderer`]: Writes a standalone SVG document.
//!
//! [`SvgRenderer`]: svg::SvgRenderer
pub mod svg;

use crate::scene::Scene;

/// A renderer used to draw a [`Scene`].
pub trait Renderer {
    /// Draws `scene`, replacing everything drawn previously.
    fn render(&mut self, scene: &Scene);
}

impl<R> Renderer for &mut R
where
    R: Renderer + ?Sized,
{
    #[inline]
    fn render(&mut self, scene: &Scene) {
        (**self).render(scene)
    }
}
