//! Frame-loop host for the terrain-steps wallpaper.
//!
//! Drives the probe simulation, contour extraction, and frame rendering,
//! writing numbered PNG frames to an output directory.

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use step_contour::ContourExtractor;
use steps_common::SceneConfig;
use steps_renderer::{png, FrameRenderer};
use terrain_sim::{PointerDrag, ProbeField};

#[derive(Parser, Debug)]
#[command(name = "steps-host")]
#[command(about = "Animated terrain-steps frame renderer")]
struct Args {
    /// Scene configuration JSON; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value = "1920")]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value = "1080")]
    height: u32,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value = "60")]
    frames: usize,

    /// Output directory for PNG frames
    #[arg(short, long, default_value = "frames")]
    output: PathBuf,

    /// Seed for the probe field (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Orbit a synthetic pointer around the canvas to exercise drags
    #[arg(long)]
    orbit_pointer: bool,

    /// Draw the probe/vertex diagnostic overlays
    #[arg(long)]
    debug_overlay: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => SceneConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SceneConfig::default(),
    };

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating output directory {}", args.output.display()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut field = ProbeField::from_config(args.width, args.height, &config, &mut rng);
    let extractor = ContourExtractor::from_config(&config);
    let renderer = FrameRenderer::new(args.width, args.height, &config);

    info!(
        columns = field.grid().columns(),
        rows = field.grid().rows(),
        levels = extractor.levels().len(),
        frames = args.frames,
        "starting render loop"
    );

    let mut pointer = Orbit::new(args.width, args.height);

    for frame in 0..args.frames {
        field.step();

        if args.orbit_pointer {
            field.apply_drag(&pointer.advance());
        }

        let graphs = extractor.extract(field.grid())?;

        let pixels = if args.debug_overlay {
            renderer.render_debug(&graphs, field.grid())?
        } else {
            renderer.render(&graphs)?
        };
        let encoded = png::encode_rgba(&pixels, args.width as usize, args.height as usize)?;

        let path = args.output.join(format!("frame_{:04}.png", frame));
        std::fs::write(&path, &encoded)
            .with_context(|| format!("writing {}", path.display()))?;

        debug!(
            frame,
            vertices = graphs.iter().map(|g| g.vertex_count()).sum::<usize>(),
            edges = graphs.iter().map(|g| g.edge_count()).sum::<usize>(),
            "rendered frame"
        );
    }

    info!(frames = args.frames, output = %args.output.display(), "render complete");
    Ok(())
}

/// Synthetic pointer circling the canvas centre.
struct Orbit {
    centre_x: f64,
    centre_y: f64,
    radius: f64,
    angle: f64,
    last: Option<(f64, f64)>,
}

impl Orbit {
    /// One revolution every `ORBIT_FRAMES` frames.
    const ORBIT_FRAMES: f64 = 120.0;

    fn new(width: u32, height: u32) -> Self {
        Self {
            centre_x: width as f64 / 2.0,
            centre_y: height as f64 / 2.0,
            radius: width.min(height) as f64 / 3.0,
            angle: 0.0,
            last: None,
        }
    }

    fn advance(&mut self) -> PointerDrag {
        self.angle += std::f64::consts::TAU / Self::ORBIT_FRAMES;
        let x = self.centre_x + self.radius * self.angle.cos();
        let y = self.centre_y + self.radius * self.angle.sin();

        let (dx, dy) = match self.last {
            Some((lx, ly)) => (x - lx, y - ly),
            None => (0.0, 0.0),
        };
        self.last = Some((x, y));

        PointerDrag::new(x, y, dx, dy)
    }
}
