use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "melody", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a score at a fixed frame rate and print one line per frame.
    Sample(SampleArgs),
    /// Run the looping block sketch headless and print block positions.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input score JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to print. Defaults to one pass through the score plus one frame.
    #[arg(long)]
    frames: Option<u64>,

    /// Restart the score whenever it finishes.
    #[arg(long = "loop")]
    looping: bool,

    /// Print JSON lines instead of CSV.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_score_json(path: &Path) -> anyhow::Result<melody::Score> {
    let f = File::open(path).with_context(|| format!("open score '{}'", path.display()))?;
    let score = melody::Score::from_reader(BufReader::new(f))
        .with_context(|| format!("parse score '{}'", path.display()))?;
    Ok(score)
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let score = read_score_json(&args.in_path)?;
    let fps = melody::Fps::new(args.fps, 1)?;
    let frames = match args.frames {
        Some(frames) => frames,
        None => {
            let per_frame = fps.frame_duration().as_nanos().max(1);
            let frames = score.total()?.as_nanos().div_ceil(per_frame) + 1;
            u64::try_from(frames).unwrap_or(u64::MAX)
        }
    };
    let frames = usize::try_from(frames).unwrap_or(usize::MAX);

    // Streamed, so long runs never hold more than one sample.
    let samples = score.play(fps, args.looping)?.take(frames);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        writeln!(out, "frame,time_ms,index,value,looped,done")?;
    }
    for s in samples {
        if args.json {
            serde_json::to_writer(&mut out, &s)?;
            writeln!(out)?;
        } else {
            writeln!(
                out,
                "{},{:.3},{},{:.6},{},{}",
                s.frame, s.time_ms, s.index, s.value, s.looped, s.done
            )?;
        }
    }
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let fps = melody::Fps::new(args.fps, 1)?;
    let delta = fps.frame_duration();
    let mut sketch = melody::sketch::various_motion::VariousMotion::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "frame,block_x,block_y,block2_x,block2_y,wrapped")?;
    for frame in 0..args.frames {
        let (diagonal, square) = if frame == 0 {
            (false, false)
        } else {
            sketch.update(delta)
        };
        let a = sketch.block_origin();
        let b = sketch.block2_origin();
        writeln!(
            out,
            "{frame},{:.3},{:.3},{:.3},{:.3},{}",
            a.x,
            a.y,
            b.x,
            b.y,
            diagonal || square
        )?;
    }
    Ok(())
}
