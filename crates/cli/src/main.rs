//! # stroke-eda
//!
//! Command-line interface for exploring stroke-risk datasets: IQR fences,
//! outlier detection and flagging, and chart-ready summaries.

use clap::{Args, Parser, Subcommand};
use outlier::{
    box_summary, compute_all_bounds, correlation_matrix, histogram, load_path, value_counts,
    CollectingReporter, ColumnKind, Dataset, HistogramConfig, IqrScanner, OutlierError,
    OutlierScanner, ScanConfig, ScanConfigBuilder, ScanMode,
};
use serde_json::{json, Value};
use std::fs::File;
use std::path::PathBuf;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "stroke-eda")]
#[command(about = "Stroke-risk exploratory data analysis CLI", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Input, feature selection and output shared by every command.
#[derive(Args, Debug)]
struct DataArgs {
    /// Input file (CSV or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Comma-separated feature names
    #[arg(short, long, value_delimiter = ',', required = true)]
    features: Vec<String>,

    /// Output file (optional, JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DataArgs {
    fn feature_refs(&self) -> Vec<&str> {
        self.features.iter().map(String::as_str).collect()
    }
}

/// Fence parameters and failure policy for scanning commands.
#[derive(Args, Debug)]
struct ScanArgs {
    /// IQR multiplier for the fences
    #[arg(short, long, default_value = "1.5")]
    multiplier: f64,

    /// Abort on the first absent, categorical or empty feature
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Skip absent, categorical or empty features with a diagnostic
    #[arg(long)]
    lenient: bool,
}

impl ScanArgs {
    fn config(&self, default_mode: ScanMode) -> CliResult<ScanConfig> {
        let mode = if self.strict {
            ScanMode::Strict
        } else if self.lenient {
            ScanMode::Lenient
        } else {
            default_mode
        };
        ScanConfigBuilder::new()
            .multiplier(self.multiplier)
            .mode(mode)
            .build()
            .map_err(|e| e.to_string())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print IQR fences for numeric features
    Bounds {
        #[command(flatten)]
        data: DataArgs,

        /// IQR multiplier for the fences
        #[arg(short, long, default_value = "1.5")]
        multiplier: f64,
    },

    /// List anomalous rows projected onto the selected features (lenient by default)
    Detect {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Emit a per-row outlier mask (strict by default)
    Flag {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Box-plot statistics, histograms and category counts
    Describe {
        #[command(flatten)]
        data: DataArgs,

        /// Histogram bin count
        #[arg(short, long, default_value = "40")]
        bins: usize,
    },

    /// Pearson correlation matrix of numeric features
    Correlate {
        #[command(flatten)]
        data: DataArgs,
    },
}

/// Load a dataset from file (format from extension)
fn load_data(path: &PathBuf) -> CliResult<Dataset> {
    let ds = load_path(path).map_err(|e| e.to_string())?;
    println!(
        "Loaded {} rows x {} columns from {:?}",
        ds.row_count(),
        ds.column_count(),
        path.file_name().unwrap_or_default()
    );
    Ok(ds)
}

/// Write results to file or stdout
fn write_results(json: &Value, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("\nResults written to {:?}", path);
    } else {
        let text = serde_json::to_string_pretty(json)
            .map_err(|e| format!("Failed to render JSON: {}", e))?;
        println!("{}", text);
    }
    Ok(())
}

/// Run bounds command
fn run_bounds(ds: &Dataset, features: &[&str], multiplier: f64) -> CliResult<Value> {
    let config = ScanConfigBuilder::new()
        .multiplier(multiplier)
        .build()
        .map_err(|e| e.to_string())?;

    let bounds = compute_all_bounds(ds, features, &config.iqr)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    println!("Fences (multiplier={}):", multiplier);
    for b in &bounds {
        println!(
            "  {:<20} Q1={:.4} Q3={:.4} IQR={:.4} [{:.4}, {:.4}]",
            b.feature,
            b.q1,
            b.q3,
            b.iqr(),
            b.lower,
            b.upper
        );
    }

    Ok(json!({
        "multiplier": multiplier,
        "bounds": bounds,
    }))
}

/// Run detect command
fn run_detect(ds: &Dataset, features: &[&str], scan: &ScanArgs) -> CliResult<Value> {
    let scanner = IqrScanner::new(scan.config(ScanMode::Lenient)?);
    let mut reporter = CollectingReporter::new();
    let table = scanner
        .detect(ds, features, &mut reporter)
        .map_err(|e| e.to_string())?;

    let diagnostics = reporter.lines();
    for line in &diagnostics {
        println!("{}", line);
    }
    println!("Anomalous rows: {}", table.len());

    Ok(json!({
        "mode": scanner.mode(),
        "anomaly_count": table.len(),
        "table": table,
        "diagnostics": diagnostics,
    }))
}

/// Run flag command
fn run_flag(ds: &Dataset, features: &[&str], scan: &ScanArgs) -> CliResult<Value> {
    let scanner = IqrScanner::new(scan.config(ScanMode::Strict)?);
    let mut reporter = CollectingReporter::new();
    let mask = scanner
        .flag(ds, features, &mut reporter)
        .map_err(|e| e.to_string())?;

    for line in reporter.lines() {
        println!("{}", line);
    }
    let flagged: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter_map(|(i, &f)| f.then_some(i))
        .collect();
    println!("Flagged {} of {} rows", flagged.len(), mask.len());

    Ok(json!({
        "mode": scanner.mode(),
        "anomaly_count": flagged.len(),
        "flagged_rows": flagged,
        "mask": mask,
    }))
}

/// Run describe command
fn run_describe(ds: &Dataset, features: &[&str], bins: usize) -> CliResult<Value> {
    let config = HistogramConfig::new(bins);
    let mut described = Vec::with_capacity(features.len());

    for &feature in features {
        let column = ds.column(feature).ok_or_else(|| {
            OutlierError::FeatureNotFound {
                feature: feature.to_string(),
            }
            .to_string()
        })?;

        match column.kind() {
            ColumnKind::Numeric => {
                let summary = box_summary(ds, feature).map_err(|e| e.to_string())?;
                let hist = histogram(ds, feature, &config).map_err(|e| e.to_string())?;
                println!(
                    "  {:<20} n={} min={:.2} median={:.2} max={:.2} mean={:.2} sd={:.2}",
                    feature,
                    summary.count,
                    summary.min,
                    summary.median,
                    summary.max,
                    summary.mean,
                    summary.std_dev
                );
                described.push(json!({
                    "feature": feature,
                    "kind": "numeric",
                    "summary": summary,
                    "histogram": hist,
                }));
            }
            ColumnKind::Categorical => {
                let counts = value_counts(ds, feature).map_err(|e| e.to_string())?;
                let rendered: Vec<String> = counts
                    .iter()
                    .map(|(label, n)| format!("{}={}", label, n))
                    .collect();
                println!("  {:<20} {}", feature, rendered.join(", "));
                described.push(json!({
                    "feature": feature,
                    "kind": "categorical",
                    "counts": counts
                        .iter()
                        .map(|(label, n)| json!({"value": label, "count": n}))
                        .collect::<Vec<_>>(),
                }));
            }
        }
    }

    Ok(json!({ "features": described }))
}

/// Run correlate command
fn run_correlate(ds: &Dataset, features: &[&str]) -> CliResult<Value> {
    let matrix = correlation_matrix(ds, features).map_err(|e| e.to_string())?;

    print!("{:<20}", "");
    for f in &matrix.features {
        print!(" {:>10.10}", f);
    }
    println!();
    for (f, row) in matrix.features.iter().zip(&matrix.values) {
        print!("{:<20.20}", f);
        for r in row {
            print!(" {:>10.4}", r);
        }
        println!();
    }

    serde_json::to_value(&matrix).map_err(|e| format!("Failed to render JSON: {}", e))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn run(command: Commands) -> CliResult<()> {
    let (json, output) = match command {
        Commands::Bounds { data, multiplier } => {
            let ds = load_data(&data.input)?;
            (run_bounds(&ds, &data.feature_refs(), multiplier)?, data.output)
        }
        Commands::Detect { data, scan } => {
            let ds = load_data(&data.input)?;
            (run_detect(&ds, &data.feature_refs(), &scan)?, data.output)
        }
        Commands::Flag { data, scan } => {
            let ds = load_data(&data.input)?;
            (run_flag(&ds, &data.feature_refs(), &scan)?, data.output)
        }
        Commands::Describe { data, bins } => {
            let ds = load_data(&data.input)?;
            (run_describe(&ds, &data.feature_refs(), bins)?, data.output)
        }
        Commands::Correlate { data } => {
            let ds = load_data(&data.input)?;
            (run_correlate(&ds, &data.feature_refs())?, data.output)
        }
    };

    write_results(&json, output.as_ref())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
