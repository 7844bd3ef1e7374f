use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wifi_diagram::{
    AxisCeiling, CanvasSize, DiagramConfig, RadioBand, WifiSignalDiagram, parse_records,
    parse_records_strict, retain_valid,
};

#[derive(Parser)]
#[command(
    name = "wifi-diagram",
    version,
    about = "Render Wi-Fi networks as signal curves over their channels",
    after_help = "Input is one network per line: ssid,channel,signal[,bandwidth]
Lines starting with '# ' are comments; '#office,6,-50' is a network.

Examples:
  wifi-diagram scan.csv > scan.svg                    2.4GHz diagram to stdout
  wifi-diagram --band 5 --ceiling -20 scan.csv        5GHz with a -20 dBm ceiling
  wifi-diagram --format json -o layout.json scan.csv  Pixel layout as JSON
  cat scan.csv | wifi-diagram -                       Read from stdin"
)]
struct Args {
    /// Record file, or - for stdin
    input: String,

    /// Frequency band (overrides the config file)
    #[arg(short, long, value_enum)]
    band: Option<BandArg>,

    /// Top of the signal axis in dBm (overrides the config file)
    #[arg(short, long, value_enum, allow_hyphen_values = true)]
    ceiling: Option<CeilingArg>,

    /// Canvas width in pixels
    #[arg(long, default_value = "400", value_name = "PX")]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value = "300", value_name = "PX")]
    height: f64,

    /// Diagram config file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Diagram title
    #[arg(short, long)]
    title: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Fail on unparsable fields instead of using defaults
    #[arg(long)]
    strict: bool,

    /// Log layout details
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BandArg {
    #[value(name = "2.4")]
    TwoPointFour,
    #[value(name = "5")]
    Five,
}

impl From<BandArg> for RadioBand {
    fn from(arg: BandArg) -> Self {
        match arg {
            BandArg::TwoPointFour => RadioBand::TwoPointFourGHz,
            BandArg::Five => RadioBand::FiveGHz,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CeilingArg {
    #[value(name = "0")]
    Zero,
    #[value(name = "-10")]
    NegativeTen,
    #[value(name = "-20")]
    NegativeTwenty,
}

impl From<CeilingArg> for AxisCeiling {
    fn from(arg: CeilingArg) -> Self {
        match arg {
            CeilingArg::Zero => AxisCeiling::Zero,
            CeilingArg::NegativeTen => AxisCeiling::NegativeTen,
            CeilingArg::NegativeTwenty => AxisCeiling::NegativeTwenty,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read records from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

fn build_config(args: &Args) -> Result<DiagramConfig> {
    let mut config = match &args.config {
        Some(path) => DiagramConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DiagramConfig::default(),
    };

    if let Some(band) = args.band {
        config.band = band.into();
    }
    if let Some(ceiling) = args.ceiling {
        config.ceiling = ceiling.into();
    }
    if let Some(title) = &args.title {
        config.title = Some(title.clone());
    }
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    if !(args.width > 0.0 && args.height > 0.0) {
        anyhow::bail!("Canvas size must be positive, got {}x{}", args.width, args.height);
    }

    let config = build_config(&args)?;
    let text = read_input(&args.input)?;

    let records = if args.strict {
        parse_records_strict(&text).context("Invalid record")?
    } else {
        parse_records(&text)
    };
    let parsed = records.len();
    let records = retain_valid(records, config.band);
    tracing::info!(parsed, kept = records.len(), band = %config.band, "loaded records");

    let diagram = WifiSignalDiagram::new(config, &records);
    let canvas = CanvasSize::new(args.width, args.height);

    let output = match args.format {
        Format::Svg => diagram.render_svg(canvas),
        Format::Json => serde_json::to_string_pretty(&diagram.layout(canvas))
            .context("Failed to serialize layout")?,
    };

    match &args.output {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", output),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
