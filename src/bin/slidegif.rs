use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use slidegif::{CaptionOverlay, Overlay, PipelineOpts, PositionedQuoteOverlay, QuoteOverlay};

#[derive(Parser, Debug)]
#[command(name = "slidegif", version, about = "Turn a folder of images into an animated GIF")]
struct Cli {
    /// Folder containing the input images (.png .jpg .jpeg .bmp .gif).
    folder: PathBuf,

    /// Output GIF path.
    output: PathBuf,

    /// Display time of every frame, in milliseconds.
    #[arg(long)]
    duration: Option<u32>,

    /// Stretch every image to WIDTHxHEIGHT, e.g. 500x500.
    #[arg(long, value_parser = parse_resize)]
    resize: Option<slidegif::ResizeSpec>,

    /// Static caption drawn on every image.
    #[arg(long, conflicts_with = "quotes")]
    text: Option<String>,

    /// Draw a random quote on every image.
    #[arg(long, value_enum)]
    quotes: Option<QuoteStyle>,

    /// Cross-fade frames between consecutive images.
    #[arg(long = "fade-steps")]
    fade_steps: Option<u32>,

    /// Font file path or installed family name for the overlay text.
    #[arg(long)]
    font: Option<String>,

    /// Overlay font size in pixels.
    #[arg(long = "font-size")]
    font_size: Option<f32>,

    /// Seed for quote and color picks.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON options file; explicit flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GIF quantizer speed (1 = best quality, 30 = fastest).
    #[arg(long = "quantize-speed", value_parser = clap::value_parser!(i32).range(1..=30))]
    quantize_speed: Option<i32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QuoteStyle {
    /// Centered on the frame.
    Centered,
    /// Anchored near the lower-left corner.
    Positioned,
}

fn parse_resize(s: &str) -> Result<slidegif::ResizeSpec, String> {
    s.parse::<slidegif::ResizeSpec>().map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=slidegif=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let opts = build_opts(&cli)?;
    let report = slidegif::render_gif(&cli.folder, &cli.output, &opts)?;

    if let Some(slidegif::FontResolution::Fallback { family: None, .. }) = &report.font {
        eprintln!("warning: no usable font is installed, overlay text was not drawn");
    }
    println!(
        "created GIF with {} frames (including fades) at '{}'",
        report.frame_count,
        cli.output.display()
    );
    Ok(())
}

fn build_opts(cli: &Cli) -> anyhow::Result<PipelineOpts> {
    let mut opts = match &cli.config {
        Some(path) => PipelineOpts::from_path(path)?,
        None => PipelineOpts::default(),
    };

    if let Some(ms) = cli.duration {
        opts.frame_duration_ms = ms;
    }
    if let Some(resize) = cli.resize {
        opts.resize = Some(resize);
    }
    if let Some(steps) = cli.fade_steps {
        opts.transition_steps = steps;
    }
    if let Some(text) = &cli.text {
        opts.overlay = Overlay::Caption(CaptionOverlay::new(text.clone()));
    }
    match cli.quotes {
        Some(QuoteStyle::Centered) => {
            opts.overlay = Overlay::CenteredQuote(QuoteOverlay::centered())
        }
        Some(QuoteStyle::Positioned) => {
            opts.overlay = Overlay::PositionedQuote(PositionedQuoteOverlay::default())
        }
        None => {}
    }
    if let Some(size) = cli.font_size {
        opts.overlay.set_font_size(size);
    }
    if let Some(font) = &cli.font {
        opts.font = Some(font.clone());
    }
    if let Some(seed) = cli.seed {
        opts.seed = Some(seed);
    }
    if let Some(speed) = cli.quantize_speed {
        opts.quantize_speed = speed;
    }

    opts.validate()?;
    Ok(opts)
}
