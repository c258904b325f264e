use std::fs;
use std::path::{Path, PathBuf};

use eto_bracket::render::svg::SvgRenderer;
use eto_bracket::scene::Viewport;
use eto_bracket::{BracketRenderer, RenderOptions};

use crate::config::Config;
use crate::options::RenderArgs;
use crate::{parse_view, Error, Result};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// JSON files containing the tournaments.
    #[clap(required = true)]
    inputs: Vec<PathBuf>,
    /// Directory to write the SVG files to. Defaults to the directory of each input file.
    #[clap(short, long)]
    out_dir: Option<PathBuf>,
    /// Width of the viewport to fit the bracket into.
    #[clap(long, requires = "height")]
    width: Option<f64>,
    /// Height of the viewport to fit the bracket into.
    #[clap(long, requires = "width")]
    height: Option<f64>,
    #[clap(flatten)]
    options: RenderArgs,
}

impl Args {
    pub async fn run(self, config: &Config) -> Result<()> {
        let options = self.options.apply(&config.render);
        let viewport = self
            .width
            .zip(self.height)
            .map(|(width, height)| Viewport::new(width, height));

        let total = self.inputs.len();

        // Every file is rendered on its own blocking task.
        let mut handles = Vec::with_capacity(total);
        for input in self.inputs {
            let output = output_path(&input, self.out_dir.as_deref());
            let options = options.clone();

            handles.push(tokio::task::spawn_blocking(move || {
                let res = render_file(&input, &output, options, viewport);
                (input, output, res)
            }));
        }

        let mut failed = 0;
        for handle in handles {
            let (input, output, res) = handle.await?;

            match res {
                Ok(()) => log::info!("Rendered {} to {}", input.display(), output.display()),
                Err(err) => {
                    log::error!("Failed to render {}: {}", input.display(), err);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(Error::Failed(failed, total));
        }

        Ok(())
    }
}

fn render_file(
    input: &Path,
    output: &Path,
    options: RenderOptions,
    viewport: Option<Viewport>,
) -> Result<()> {
    let view = parse_view(&fs::read(input)?)?;

    let mut bracket = BracketRenderer::new(options);
    bracket.attach(SvgRenderer::new());
    bracket.update_data(view)?;

    if let Some(viewport) = viewport {
        bracket.resize(viewport)?;
    }

    let svg = bracket
        .into_target()
        .map(SvgRenderer::into_output)
        .unwrap_or_default();

    if svg.is_empty() {
        log::warn!("{} contains no matches", input.display());
    }

    fs::write(output, svg)?;
    Ok(())
}

/// Returns the path of the SVG file for `input`.
fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let path = match (out_dir, input.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => input.to_owned(),
    };

    path.with_extension("svg")
}
