//! # Render Options
//!
//! [`RenderOptions`] controls the geometry and the look of a rendered bracket. All fields have
//! defaults, so only the values that differ need to be given:
//!
//! ```
//! # use eto_bracket::RenderOptions;
//! let options = RenderOptions::builder()
//!     .box_width(180.0)
//!     .show_round_titles(false)
//!     .build();
//!
//! assert_eq!(options.box_width, 180.0);
//! assert_eq!(options.box_height, RenderOptions::default().box_height);
//! ```
use crate::layout::LayoutOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    pub box_width: f64,
    pub box_height: f64,
    /// Horizontal gap between two rounds.
    pub h_gap: f64,
    /// Vertical gap between two matches of the same round.
    pub v_gap: f64,
    /// Space reserved for the round titles. Ignored if `show_round_titles` is `false`.
    pub title_margin: f64,
    pub line_color: String,
    pub box_color: String,
    pub winner_color: String,
    pub text_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub show_round_titles: bool,
    pub animate_connectors: bool,
}

impl RenderOptions {
    /// Creates a new [`Builder`] starting from the default options.
    #[inline]
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the [`LayoutOptions`] described by these options.
    pub fn layout(&self) -> LayoutOptions {
        LayoutOptions {
            box_width: self.box_width,
            box_height: self.box_height,
            h_gap: self.h_gap,
            v_gap: self.v_gap,
            title_margin: if self.show_round_titles {
                self.title_margin
            } else {
                0.0
            },
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            box_width: 200.0,
            box_height: 60.0,
            h_gap: 60.0,
            v_gap: 20.0,
            title_margin: 40.0,
            line_color: String::from("#9e9e9e"),
            box_color: String::from("#ffffff"),
            winner_color: String::from("#d4f5d4"),
            text_color: String::from("#222222"),
            font_family: String::from("sans-serif"),
            font_size: 13.0,
            show_round_titles: true,
            animate_connectors: false,
        }
    }
}

/// A builder for [`RenderOptions`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    inner: RenderOptions,
}

impl Builder {
    pub fn box_width(mut self, width: f64) -> Self {
        self.inner.box_width = width;
        self
    }

    pub fn box_height(mut self, height: f64) -> Self {
        self.inner.box_height = height;
        self
    }

    pub fn h_gap(mut self, gap: f64) -> Self {
        self.inner.h_gap = gap;
        self
    }

    pub fn v_gap(mut self, gap: f64) -> Self {
        self.inner.v_gap = gap;
        self
    }

    pub fn title_margin(mut self, margin: f64) -> Self {
        self.inner.title_margin = margin;
        self
    }

    pub fn line_color<T>(mut self, color: T) -> Self
    where
        T: ToString,
    {
        self.inner.line_color = color.to_string();
        self
    }

    pub fn box_color<T>(mut self, color: T) -> Self
    where
        T: ToString,
    {
        self.inner.box_color = color.to_string();
        self
    }

    pub fn winner_color<T>(mut self, color: T) -> Self
    where
        T: ToString,
    {
        self.inner.winner_color = color.to_string();
        self
    }

    pub fn text_color<T>(mut self, color: T) -> Self
    where
        T: ToString,
    {
        self.inner.text_color = color.to_string();
        self
    }

    pub fn font_family<T>(mut self, family: T) -> Self
    where
        T: ToString,
    {
        self.inner.font_family = family.to_string();
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.inner.font_size = size;
        self
    }

    pub fn show_round_titles(mut self, show: bool) -> Self {
        self.inner.show_round_titles = show;
        self
    }

    pub fn animate_connectors(mut self, animate: bool) -> Self {
        self.inner.animate_connectors = animate;
        self
    }

    #[inline]
    pub fn build(self) -> RenderOptions {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::RenderOptions;

    #[test]
    fn test_layout_options() {
        let options = RenderOptions::default();
        assert_eq!(options.layout().title_margin, 40.0);

        let options = RenderOptions::builder()
            .title_margin(25.0)
            .show_round_titles(false)
            .build();
        assert_eq!(options.layout().title_margin, 0.0);

        let options = RenderOptions::builder()
            .box_width(120.0)
            .box_height(40.0)
            .h_gap(10.0)
            .v_gap(5.0)
            .build();
        let layout = options.layout();
        assert_eq!(layout.box_width, 120.0);
        assert_eq!(layout.box_height, 40.0);
        assert_eq!(layout.h_gap, 10.0);
        assert_eq!(layout.v_gap, 5.0);
    }
}
