use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reveal", version)]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print randomly drawn, rendered fact rows.
    Facts(FactsArgs),
    /// Run the feed against an in-memory surface on a virtual clock.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct FactsArgs {
    /// Input config JSON (full config or a bare `{name: value}` map).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of facts to print.
    #[arg(long, default_value_t = 5)]
    count: usize,

    /// Seed for reproducible draws.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input config JSON (full config or a bare `{name: value}` map).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scripted transfer events (`history`, `live`) for the tracked token.
    #[arg(long)]
    transfers: Option<PathBuf>,

    /// Simulated run length in seconds.
    #[arg(long, default_value_t = 30)]
    seconds: u64,

    /// Interval between clock signals in milliseconds.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 600.0)]
    viewport_height: f64,

    /// Height of every row in pixels.
    #[arg(long, default_value_t = 64.0)]
    row_height: f64,

    /// Seed for reproducible draws.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Facts(args) => cmd_facts(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: &Path) -> anyhow::Result<reveal::RevealConfig> {
    let cfg = reveal::RevealConfig::load(path)
        .with_context(|| format!("load config '{}'", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate config '{}'", path.display()))?;
    Ok(cfg)
}

fn index_source(seed: Option<u64>) -> Box<dyn reveal::IndexSource> {
    match seed {
        Some(seed) => Box::new(reveal::SeededSource::new(seed)),
        None => Box::new(reveal::ThreadRngSource),
    }
}

fn cmd_facts(args: FactsArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    let store = cfg.store();
    let registry = reveal::Registry::standard();
    let mut rng = index_source(args.seed);

    for _ in 0..args.count {
        let fact = store.render_random_fact(&registry, rng.as_mut())?;
        println!(r#"<div class="fact">{}</div>"#, fact.to_markup());
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    if args.frame_ms == 0 {
        anyhow::bail!("--frame-ms must be > 0");
    }

    let tracker = match (&args.transfers, cfg.token_id) {
        (Some(path), Some(token_id)) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read transfers '{}'", path.display()))?;
            let source = reveal::InMemoryTransferSource::from_json_str(&s)
                .with_context(|| format!("parse transfers '{}'", path.display()))?;
            reveal::OwnershipTracker::new(token_id, Box::new(source))
        }
        (Some(_), None) => anyhow::bail!("--transfers requires token_id in the config"),
        (None, token_id) => reveal::OwnershipTracker::disabled(token_id.unwrap_or_default()),
    };

    let surface = reveal::StackSurface::with_height(args.viewport_height, args.row_height);
    let mut rt = reveal::Runtime::new(&cfg, surface, tracker, index_source(args.seed))?;
    rt.start()?;

    let end = reveal::Timestamp::ZERO.advance(Duration::from_secs(args.seconds));
    let step = Duration::from_millis(args.frame_ms);
    let mut now = reveal::Timestamp::ZERO;
    while now < end {
        now = now.advance(step);
        rt.pump(now)?;
    }

    for row in rt.feed().rows() {
        println!("{:>4}  {}", row.id.0, row.fact.name);
    }
    println!("{}", serde_json::to_string_pretty(&rt.stats())?);
    Ok(())
}
