use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tinyraster::prelude::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Wavefront OBJ model to render (the built-in cube when omitted)
    model: Option<PathBuf>,

    /// Where to write the rendered image; the format follows the extension
    #[arg(short = 'o', long = "output", default_value = "out/output.tga")]
    output: PathBuf,

    /// RON file with render settings
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RON file describing explicit triangles and y-buffer segments
    #[arg(short = 's', long = "scene", conflicts_with = "demo")]
    scene: Option<PathBuf>,

    /// Render the built-in demo scene
    #[arg(long = "demo")]
    demo: bool,

    /// Also write the y-buffer visibility strip to this path
    #[arg(long = "strip")]
    strip: Option<PathBuf>,

    #[arg(long = "width")]
    width: Option<u32>,

    #[arg(long = "height")]
    height: Option<u32>,

    /// World-to-screen scale ratio
    #[arg(long = "scale")]
    scale: Option<f32>,

    /// Do not fill triangles
    #[arg(long = "no-fill")]
    no_fill: bool,

    /// Outline every drawn triangle
    #[arg(long = "edges")]
    edges: bool,

    /// Paint each visible face in a random color
    #[arg(long = "random-colors")]
    random_colors: bool,

    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Log every triangle as it is drawn
    #[arg(long = "trace")]
    trace: bool,
}

const STRIP_HEIGHT: u32 = 16;

impl Arguments {
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(scale) = self.scale {
            config.scale_ratio = scale;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.no_fill {
            config.fill = false;
        }
        if self.edges {
            config.edges = true;
        }
        if self.random_colors {
            config.fill_style = FillStyle::Random;
        }
        if self.trace {
            config.trace = true;
        }

        config.validate().context("invalid render settings")?;
        Ok(config)
    }

    fn scene(&self) -> Result<Option<Scene>> {
        if self.demo {
            return Ok(Some(Scene::demo()));
        }
        self.scene
            .as_ref()
            .map(|path| {
                Scene::load(path).with_context(|| format!("loading scene {}", path.display()))
            })
            .transpose()
    }
}

fn run(arguments: &Arguments) -> Result<()> {
    let config = arguments.render_config()?;
    let mut engine = Engine::new(config);

    match arguments.scene()? {
        Some(scene) => engine.render_scene(&scene),
        None => {
            let mesh = match &arguments.model {
                Some(path) => Mesh::from_obj(path)
                    .with_context(|| format!("loading model {}", path.display()))?,
                None => Mesh::cube(),
            };
            engine.render_model(&mesh)
        }
    };

    if let Some(path) = &arguments.strip {
        let background = engine.config().background;
        engine
            .ybuffer()
            .to_strip(STRIP_HEIGHT, background)
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote y-buffer strip to {}", path.display());
    }

    let mut canvas = engine.into_canvas();
    canvas.flip_vertically();
    canvas
        .save(&arguments.output)
        .with_context(|| format!("writing {}", arguments.output.display()))?;
    log::info!("wrote {}", arguments.output.display());

    Ok(())
}

fn main() -> ExitCode {
    let arguments = Arguments::parse();

    let default_filter = if arguments.trace { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
