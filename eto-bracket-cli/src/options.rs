use eto_bracket::RenderOptions;

/// Command line overrides for the [`RenderOptions`] of the config.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct RenderArgs {
    #[clap(long)]
    box_width: Option<f64>,
    #[clap(long)]
    box_height: Option<f64>,
    /// Horizontal gap between two rounds.
    #[clap(long)]
    h_gap: Option<f64>,
    /// Vertical gap between two matches.
    #[clap(long)]
    v_gap: Option<f64>,
    #[clap(long)]
    line_color: Option<String>,
    #[clap(long)]
    font_family: Option<String>,
    /// Don't draw the round titles.
    #[clap(long)]
    no_titles: bool,
    /// Animate the connectors.
    #[clap(long)]
    animate: bool,
}

impl RenderArgs {
    /// Applies all given overrides to `options`.
    pub fn apply(&self, options: &RenderOptions) -> RenderOptions {
        RenderOptions::builder()
            .box_width(self.box_width.unwrap_or(options.box_width))
            .box_height(self.box_height.unwrap_or(options.box_height))
            .h_gap(self.h_gap.unwrap_or(options.h_gap))
            .v_gap(self.v_gap.unwrap_or(options.v_gap))
            .title_margin(options.title_margin)
            .line_color(self.line_color.as_ref().unwrap_or(&options.line_color))
            .box_color(&options.box_color)
            .winner_color(&options.winner_color)
            .text_color(&options.text_color)
            .font_family(self.font_family.as_ref().unwrap_or(&options.font_family))
            .font_size(options.font_size)
            .show_round_titles(options.show_round_titles && !self.no_titles)
            .animate_connectors(options.animate_connectors || self.animate)
            .build()
    }
}
