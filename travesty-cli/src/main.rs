use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use travesty_core::io::load_corpus;
use travesty_core::model::config::{ORDER_MAX, ORDER_MIN};
use travesty_core::{Strategy, TravestyConfig, travesty};

/// Candidate lookup strategy, as spelled on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Rescan the corpus for every character
    Scan,
    /// Build a follow table once
    Indexed,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scan => Strategy::Scan,
            StrategyArg::Indexed => Strategy::Indexed,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "travesty")]
#[command(version, about = "A \"travesty\" text generator", long_about = None)]
struct Cli {
    /// Specify the travesty "order" (substring length)
    #[arg(short, long, value_name = "value", default_value_t = 3,
          value_parser = clap::value_parser!(u8).range(ORDER_MIN as i64..=ORDER_MAX as i64))]
    order: u8,

    /// Output the specified No. of characters
    #[arg(short, long, value_name = "characters", default_value_t = 1000)]
    length: usize,

    /// Initialise the random number seed value (0 uses the current time)
    #[arg(short, long, value_name = "value", default_value_t = 0)]
    seed: u64,

    /// Candidate lookup strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Indexed)]
    strategy: StrategyArg,

    /// Give up after this many consecutive reseeds (unbounded by default)
    #[arg(long, value_name = "n")]
    max_reseeds: Option<usize>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, value_name = "level", default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Sample text files, stdin when none
    files: Vec<PathBuf>,
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

/// Writes the generated text followed by a single newline.
fn write_output<W: Write>(mut out: W, output: &[u8]) -> io::Result<()> {
    out.write_all(output)?;
    out.write_all(b"\n")?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut config = TravestyConfig::new(usize::from(cli.order))?;
    config.length = cli.length;
    config.seed = cli.seed;
    config.strategy = cli.strategy.into();
    config.reseed_limit = cli.max_reseeds;

    let corpus = load_corpus(&cli.files).context("failed to read the sample text")?;
    let output = travesty(&corpus, &config).context("generation failed")?;

    write_output(BufWriter::new(io::stdout().lock()), &output)?;

    Ok(())
}
