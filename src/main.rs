use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use sigil_sax::{
    Representation, SaxConfig, Segmentation, breakpoints, euclidean_distance, random_walk,
    z_normalize,
};

#[derive(Parser)]
#[command(name = "sigil")]
#[command(about = "Symbolic aggregate approximation of time series")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// RNG seed for the generated random walks
    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Number of threads for parallel computation (defaults to all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

/// Shared SAX parameters.
#[derive(Args, Debug, Clone)]
struct SaxArgs {
    /// Number of PAA segments (symbols per word)
    #[arg(long, default_value_t = 8)]
    word_length: usize,

    /// Alphabet size
    #[arg(long, default_value_t = 4)]
    cardinality: usize,

    /// Symbol rendering: "binary", "letter", or "integer"
    #[arg(long, default_value = "letter")]
    representation: String,

    /// Segment policy: "proportional" or "exact"
    #[arg(long, default_value = "proportional")]
    segmentation: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the N(0, 1) breakpoints for an alphabet size
    Breakpoints {
        /// Alphabet size
        #[arg(long)]
        cardinality: usize,
    },

    /// Discretize a seeded random walk into a SAX word
    Discretize {
        /// Length of the generated series
        #[arg(long, default_value_t = 128)]
        length: usize,

        #[command(flatten)]
        sax: SaxArgs,
    },

    /// Compare MINDIST against the Euclidean distance for two seeded random walks
    Distance {
        /// Length of each generated series
        #[arg(long, default_value_t = 128)]
        length: usize,

        #[command(flatten)]
        sax: SaxArgs,
    },

    /// Score a naive one-step-lagged forecast of a seeded random walk
    Metrics {
        /// Number of forecast points
        #[arg(long, default_value_t = 100)]
        length: usize,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct BreakpointsOutput {
    cardinality: usize,
    breakpoints: Vec<f64>,
}

#[derive(Serialize)]
struct DiscretizeOutput {
    seed: u64,
    length: usize,
    word_length: usize,
    cardinality: usize,
    representation: String,
    segmentation: String,
    paa: Vec<f64>,
    word: String,
    symbols: Vec<String>,
    symbol_frequency: Vec<usize>,
}

#[derive(Serialize)]
struct DistanceOutput {
    seeds: [u64; 2],
    length: usize,
    word_a: String,
    word_b: String,
    mindist: f64,
    euclidean: f64,
    lower_bound_holds: bool,
}

#[derive(Serialize)]
struct MetricsOutput {
    seed: u64,
    length: usize,
    mse: f64,
    rmse: f64,
    mae: f64,
    mape: f64,
    mpe: f64,
}

fn build_config(args: &SaxArgs) -> Result<SaxConfig> {
    let representation: Representation = args
        .representation
        .parse()
        .context("invalid --representation")?;
    let segmentation: Segmentation = args
        .segmentation
        .parse()
        .context("invalid --segmentation")?;
    Ok(SaxConfig::new(args.word_length, args.cardinality)?
        .with_representation(representation)
        .with_segmentation(segmentation))
}

/// Round `length` up to what `config` can aggregate, logging any change.
fn align_length(config: &SaxConfig, length: usize) -> usize {
    let aligned = config.aligned_length(length);
    if aligned != length {
        info!(
            requested = length,
            aligned,
            word_length = config.word_length(),
            "series length adjusted to fit the segmentation"
        );
    }
    aligned
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Configure Rayon thread pool
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
        info!(threads, "thread pool configured");
    }

    match cli.command {
        Command::Breakpoints { cardinality } => {
            let cuts = breakpoints(cardinality).context("failed to compute breakpoints")?;
            let output = BreakpointsOutput {
                cardinality,
                breakpoints: cuts,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Discretize { length, sax } => {
            let config = build_config(&sax)?;
            let length = align_length(&config, length);

            let series = random_walk(length, cli.seed).context("failed to generate series")?;
            info!(n = series.len(), seed = cli.seed, "random walk generated");

            let transform = config
                .transform(series.as_view())
                .context("discretization failed")?;

            let output = DiscretizeOutput {
                seed: cli.seed,
                length,
                word_length: config.word_length(),
                cardinality: config.cardinality(),
                representation: config.effective_representation().to_string(),
                segmentation: config.segmentation().to_string(),
                paa: transform.coefficients,
                word: transform.word.to_string(),
                symbols: transform.word.symbols(),
                symbol_frequency: transform.word.symbol_frequency(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Distance { length, sax } => {
            let config = build_config(&sax)?;
            let length = align_length(&config, length);
            let seeds = [cli.seed, cli.seed.wrapping_add(1)];

            let a = random_walk(length, seeds[0]).context("failed to generate first series")?;
            let b = random_walk(length, seeds[1]).context("failed to generate second series")?;
            let a = z_normalize(a.as_view()).context("failed to normalize first series")?;
            let b = z_normalize(b.as_view()).context("failed to normalize second series")?;

            // Series are already normalized.
            let config = config.with_normalize(false);
            let ta = config.transform(a.as_view()).context("discretization failed")?;
            let tb = config.transform(b.as_view()).context("discretization failed")?;

            let mindist = config
                .mindist(&ta.word, &tb.word, length)
                .context("MINDIST failed")?;
            let euclidean = euclidean_distance(a.as_ref(), b.as_ref())
                .context("Euclidean distance failed")?;
            info!(mindist = %mindist, euclidean = %euclidean, "distances computed");

            let output = DistanceOutput {
                seeds,
                length,
                word_a: ta.word.to_string(),
                word_b: tb.word.to_string(),
                mindist: mindist.value(),
                euclidean: euclidean.value(),
                lower_bound_holds: mindist.value() <= euclidean.value() + 1e-9,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Metrics { length } => {
            anyhow::ensure!(length > 0, "--length must be at least 1");
            let walk = random_walk(length + 1, cli.seed)
                .context("failed to generate series")?
                .into_inner();
            let (actual, forecast) = (&walk[1..], &walk[..length]);

            let output = MetricsOutput {
                seed: cli.seed,
                length,
                mse: sigil_metrics::mse(actual, forecast)?,
                rmse: sigil_metrics::rmse(actual, forecast)?,
                mae: sigil_metrics::mae(actual, forecast)?,
                mape: sigil_metrics::mape(actual, forecast)
                    .context("percentage error undefined for this walk")?,
                mpe: sigil_metrics::mpe(actual, forecast)
                    .context("percentage error undefined for this walk")?,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
