// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use path_comparison_render::analysis_context::AnalysisContext;
use path_comparison_render::constants::REPORT_OUTPUT_FILE;
use path_comparison_render::data_analysis::alignment::align;
use path_comparison_render::data_analysis::comparison_report::ComparisonReport;
use path_comparison_render::data_input::path_parser::parse_path_file;
use path_comparison_render::plot_functions::plot_detailed_comparison::plot_detailed_comparisons;
use path_comparison_render::plot_functions::plot_path_comparison::plot_path_comparison;

/// Compare an original and an optimized planner path and render comparison charts.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path analysis CSV containing both `original` and `optimized` rows.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Directory for the generated images (defaults to the input file's directory).
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Also write the comparison table as CSV.
    #[arg(long)]
    report_csv: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let ctx = AnalysisContext::new(cli.input, cli.output_dir);

    // --- Load ---
    let pair = parse_path_file(&ctx.input_path)
        .with_context(|| format!("failed to load '{}'", ctx.input_path.display()))?;

    // --- Align ---
    let aligned = align(&pair);
    if aligned.is_empty() {
        warn!(
            "The two paths share no common path_length range; detailed charts will not be drawn."
        );
    }

    // --- Aggregate and Report ---
    info!("--- Comparison Report ---");
    let report = ComparisonReport::from_pair(&pair);
    report.log_summary();
    if cli.report_csv {
        report
            .write_csv_file(&ctx.output_path(REPORT_OUTPUT_FILE))
            .context("failed to write the comparison report")?;
    }

    // --- Render ---
    info!("--- Generating Composite Comparison Plot ---");
    plot_path_comparison(&pair, &report, &ctx).context("failed to render the composite figure")?;

    info!("--- Generating Detailed Comparison Plots ---");
    let detailed = plot_detailed_comparisons(&aligned, &ctx)
        .context("failed to render the detailed comparison charts")?;

    info!(
        "Path comparison completed: 1 composite and {} detailed charts written to '{}'.",
        detailed.len(),
        ctx.output_dir.display()
    );
    Ok(())
}

// src/main.rs
