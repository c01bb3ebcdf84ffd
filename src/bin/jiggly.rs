use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use jiggly::{
    ApproxMetrics, FrameLoop, FrameLoopOpts, FrameSink, JigglyText, JigglyTextProps,
    ParleyMetrics, PngDirSink, SvgDirSink, TextMetrics,
};

#[derive(Parser, Debug)]
#[command(name = "jiggly", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the undisplaced outline description.
    Outline(OutlineArgs),
    /// Render the outline at one point in time as SVG or PNG (by extension).
    Frame(FrameArgs),
    /// Render a span of frames into a directory.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Props JSON (camelCase fields, all optional).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Text to draw.
    #[arg(long)]
    text: Option<String>,

    /// Font stack.
    #[arg(long)]
    font: Option<String>,

    /// Font size in pixels.
    #[arg(long)]
    font_size: Option<f64>,

    /// Seed for reproducible jitter.
    #[arg(long)]
    seed: Option<u64>,

    /// Measure advances from this font file instead of the built-in table.
    #[arg(long)]
    font_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct OutlineArgs {
    #[command(flatten)]
    text: TextArgs,

    /// One line per character instead of the concatenated outline.
    #[arg(long, default_value_t = false)]
    letters: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    text: TextArgs,

    /// Elapsed milliseconds since the text was laid out.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Output path (`.svg` or `.png`).
    #[arg(long)]
    out: PathBuf,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    hz: f64,

    /// PNG scale factor.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Png,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    text: TextArgs,

    /// Span to render, in milliseconds.
    #[arg(long, default_value_t = 1000.0)]
    duration: f64,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    hz: f64,

    /// PNG scale factor.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Outline(args) => cmd_outline(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_props(args: &TextArgs) -> anyhow::Result<JigglyTextProps> {
    let mut props = match &args.config {
        Some(path) => JigglyTextProps::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => JigglyTextProps::default(),
    };
    if let Some(text) = &args.text {
        props.text.clone_from(text);
    }
    if let Some(font) = &args.font {
        props.font.clone_from(font);
    }
    if let Some(size) = args.font_size {
        props.font_size = size;
    }
    if args.seed.is_some() {
        props.animation.seed = args.seed;
    }
    props.validate()?;
    Ok(props)
}

fn load_metrics(args: &TextArgs) -> anyhow::Result<Box<dyn TextMetrics>> {
    match &args.font_file {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read font '{}'", path.display()))?;
            Ok(Box::new(ParleyMetrics::from_font_bytes(&bytes)?))
        }
        None => Ok(Box::new(ApproxMetrics::new())),
    }
}

fn build(args: &TextArgs) -> anyhow::Result<JigglyText> {
    let props = load_props(args)?;
    let metrics = load_metrics(args)?;
    Ok(JigglyText::new(props, metrics, 0.0)?)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_outline(args: OutlineArgs) -> anyhow::Result<()> {
    let text = build(&args.text)?;
    if args.letters {
        for d in &text.layout().letters {
            println!("{d}");
        }
    } else {
        println!("{}", text.layout().full);
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut text = build(&args.text)?;
    let lp = FrameLoop::new(FrameLoopOpts {
        refresh_hz: args.hz,
        start_ms: 0.0,
        duration_ms: args.at,
    })?;
    lp.advance(&mut text)?;
    let svg = text.to_svg();

    ensure_parent(&args.out)?;
    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?,
        Some("png") => jiggly::encode::write_png(&args.out, &svg, args.scale)?,
        _ => anyhow::bail!(
            "unsupported output extension for '{}' (expected .svg or .png)",
            args.out.display()
        ),
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut text = build(&args.text)?;
    let lp = FrameLoop::new(FrameLoopOpts {
        refresh_hz: args.hz,
        start_ms: 0.0,
        duration_ms: args.duration,
    })?;

    let mut sink: Box<dyn FrameSink> = match args.format {
        Format::Svg => Box::new(SvgDirSink::new(&args.out_dir)),
        Format::Png => Box::new(PngDirSink::new(&args.out_dir, args.scale)?),
    };
    let stats = lp.run(&mut text, sink.as_mut())?;

    eprintln!(
        "wrote {} frames to {} ({} callbacks, {} throttled)",
        stats.frames_applied,
        args.out_dir.display(),
        stats.frames_total,
        stats.frames_throttled
    );
    Ok(())
}
