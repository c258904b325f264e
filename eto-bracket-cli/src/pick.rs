use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use eto_bracket::render::svg::SvgRenderer;
use eto_bracket::{BracketRenderer, Match, RenderOptions, TournamentView};

use crate::config::Config;
use crate::options::RenderArgs;
use crate::{read_view, Result};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// JSON file containing the tournament.
    input: PathBuf,
    /// X coordinate on the canvas.
    x: f64,
    /// Y coordinate on the canvas.
    y: f64,
    #[clap(flatten)]
    options: RenderArgs,
}

impl Args {
    pub async fn run(self, config: &Config) -> Result<()> {
        let view = read_view(&self.input).await?;
        let options = self.options.apply(&config.render);

        match pick(view, options, self.x, self.y)? {
            Some(m) => println!("{}", serde_json::to_string_pretty(&m)?),
            None => log::info!("No match at {},{}", self.x, self.y),
        }

        Ok(())
    }
}

/// Renders `view` and returns the match clicked at `(x, y)`.
fn pick(view: TournamentView, options: RenderOptions, x: f64, y: f64) -> Result<Option<Match>> {
    let clicked = Rc::new(RefCell::new(None::<Match>));

    let mut bracket = BracketRenderer::new(options);
    bracket.attach(SvgRenderer::new());

    let inner = clicked.clone();
    bracket.on_click(move |m: &Match| {
        *inner.borrow_mut() = Some(m.clone());
    });

    bracket.update_data(view)?;
    bracket.click(x, y);

    let m = clicked.borrow_mut().take();
    Ok(m)
}
