use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use logomotive::{
    AnimationConfig, FrameIndex, RenderThreading, compose_frame, ensure_parent_dir,
    render_to_png_sequence, write_frame_png,
};

#[derive(Parser, Debug)]
#[command(name = "logomotive", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the full frame sequence into a directory.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (1-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Optional config JSON overriding the stock animation constants.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Output directory for `frame-<i>.png` files.
    #[arg(long = "out-dir")]
    out_dir: PathBuf,

    /// Optional config JSON overriding the stock animation constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AnimationConfig> {
    match path {
        Some(p) => {
            AnimationConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(AnimationConfig::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let frame = compose_frame(&config, FrameIndex(args.frame))?;

    ensure_parent_dir(&args.out)?;
    write_frame_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let threading = RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };

    let paths = render_to_png_sequence(&config, &args.out_dir, &threading)?;

    eprintln!("wrote {} frames to {}", paths.len(), args.out_dir.display());
    Ok(())
}
