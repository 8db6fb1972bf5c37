use clap::Parser;
use env_logger::{Builder, Env};
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;

use randres::io_utils::{io_cli_error, randres_cli_error, read_text};
use randres::output::{write_entries, write_selection, write_sweep, write_tally};
use randres::{parse, select, sweep, tally, Config, Format, RandresError, MAX_SWEEP_COUNT};

/// Pick a random resolution from a weighted `WIDTHxHEIGHT[:WEIGHT]` list.
#[derive(Parser)]
#[command(name = "randres", version)]
struct Args {
    /// Resolution list given inline, one entry per line (wins over --file)
    #[arg(long)]
    text: Option<String>,
    /// Read the resolution list from a file (`-` for stdin)
    #[arg(long)]
    file: Option<PathBuf>,
    /// JSON config with resolutions_text, invert and seed
    #[arg(long)]
    config: Option<PathBuf>,
    /// Swap width and height of the pick
    #[arg(long, overrides_with = "no_invert")]
    invert: bool,
    /// Keep width and height as listed, even if the config inverts
    #[arg(long, overrides_with = "invert")]
    no_invert: bool,
    /// Seed for the selection
    #[arg(long)]
    seed: Option<u64>,
    /// Pick once for each of this many consecutive seeds
    #[arg(long)]
    count: Option<u64>,
    /// With --count, print how often each resolution came up
    #[arg(long)]
    tally: bool,
    /// Print the parsed entries and exit
    #[arg(long)]
    list: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    Builder::from_env(Env::default().filter_or("RUST_LOG", "warn")).init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut cfg = match &args.config {
        Some(path) => Config::load(path).map_err(|e| match e {
            RandresError::Io(io) => io_cli_error("reading config", path, io),
            other => randres_cli_error(&format!("loading config '{}'", path.display()), other),
        })?,
        None => Config::default(),
    };

    if let Some(text) = &args.text {
        cfg.resolutions_text = text.clone();
    } else if let Some(path) = &args.file {
        cfg.resolutions_text =
            read_text(path).map_err(|e| io_cli_error("reading resolutions", path, e))?;
    }
    if args.invert {
        cfg.invert = true;
    } else if args.no_invert {
        cfg.invert = false;
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    Ok(cfg)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.count == Some(0) {
        let e = RandresError::Usage("--count must be at least 1".into());
        return Err(randres_cli_error("invalid arguments", e).into());
    }
    if args.count.is_some_and(|n| n > MAX_SWEEP_COUNT) {
        let e = RandresError::Usage(format!("--count may be at most {MAX_SWEEP_COUNT}"));
        return Err(randres_cli_error("invalid arguments", e).into());
    }
    if args.tally && args.count.is_none() {
        let e = RandresError::Usage("--tally needs --count".into());
        return Err(randres_cli_error("invalid arguments", e).into());
    }

    let cfg = load_config(&args)?;
    let entries = parse(&cfg.resolutions_text);
    debug!("parsed {} entries", entries.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let rendered = if args.list {
        write_entries(&mut out, &entries, args.format)
    } else if let Some(count) = args.count {
        let rows = sweep(&entries, cfg.invert, cfg.seed, count);
        if args.tally {
            write_tally(&mut out, &tally(rows), args.format)
        } else {
            write_sweep(&mut out, rows, args.format)
        }
    } else {
        let result = select(&entries, cfg.invert, cfg.seed);
        write_selection(&mut out, &result, args.format)
    };
    rendered.map_err(|e| randres_cli_error("writing output", e))?;
    out.flush()?;
    Ok(())
}
