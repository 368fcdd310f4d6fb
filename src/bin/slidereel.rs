use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use slidereel::{FrameIndex, PresentationConfig, ScriptedScene, Timeline};

#[derive(Parser, Debug)]
#[command(name = "slidereel", version)]
struct Cli {
    /// Log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the segment table and total length.
    Info(InputArgs),
    /// Print one composed frame as JSON.
    Frame(FrameArgs),
    /// Print a range of composed frames as JSON lines.
    Frames(FramesArgs),
    /// Print the built-in presentation as JSON, as a starting point for a config file.
    Template,
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Presentation JSON. Defaults to the built-in presentation.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Global frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    input: InputArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the end of the timeline.
    #[arg(long)]
    end: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Template => cmd_template(),
    }
}

fn load_timeline(args: &InputArgs) -> anyhow::Result<Timeline<ScriptedScene>> {
    let cfg = match &args.in_path {
        Some(path) => PresentationConfig::from_path(path)
            .with_context(|| format!("load presentation '{}'", path.display()))?,
        None => PresentationConfig::ledgerling(),
    };
    Ok(cfg.build_timeline()?)
}

fn cmd_info(args: InputArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args)?;
    let total = timeline.total_frames()?;

    println!(
        "{} segments, transition {} frames, {} fps",
        timeline.segments().len(),
        timeline.transition(),
        timeline.fps().as_f64()
    );
    for (i, seg) in timeline.segments().iter().enumerate() {
        println!(
            "{i:>3}  {:<20} start {:>6}  end {:>6}  ({} frames)",
            seg.id, seg.start.0, seg.end().0, seg.duration
        );
    }
    if let Some(overlay) = timeline.overlay() {
        let r = overlay.range();
        println!(
            "overlay  frames {}..{}  fade {}  peak {}",
            r.start.0,
            r.end.0,
            overlay.fade(),
            overlay.peak()
        );
    }
    println!("total {} frames ({:.2} s)", total.0, timeline.duration_secs()?);

    for w in timeline.overlap_windows() {
        if !w.is_adjacent() {
            tracing::warn!(
                first = w.first,
                second = w.second,
                "non-adjacent segments overlap"
            );
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.input)?;
    let composed = timeline.compose(FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&composed).context("serialize composed frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let timeline = load_timeline(&args.input)?;
    let end = match args.end {
        Some(end) => end,
        None => timeline.total_frames()?.0,
    };
    anyhow::ensure!(
        args.start <= end,
        "start frame {} is after end frame {end}",
        args.start
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for f in args.start..end {
        let composed = timeline.compose(FrameIndex(f))?;
        serde_json::to_writer(&mut out, &composed)
            .with_context(|| format!("serialize frame {f}"))?;
        out.write_all(b"\n").context("write frame")?;
    }
    out.flush().context("flush output")?;
    Ok(())
}

fn cmd_template() -> anyhow::Result<()> {
    println!("{}", PresentationConfig::ledgerling().to_json_pretty()?);
    Ok(())
}
