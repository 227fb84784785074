use anyhow::Context;
use clap::Parser;
use effcore::render::output_path_for;
use std::path::PathBuf;
use workflow::config::PipelineConfig;
use workflow::report::write_report;
use workflow::runner::Runner;

mod viewer;
mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Plot time-resolved load balance, serialization and transfer efficiency"
)]
struct Args {
    /// Monitoring log: whitespace-separated columns after one header line
    input: PathBuf,
    /// Load plot settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Whole-run efficiencies drawn as dashed reference lines
    #[arg(long, num_args = 3, value_names = ["LB", "SER", "TRF"])]
    reference: Option<Vec<f64>>,
    /// Image path; defaults to the input path with a .tiff extension
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Also write the derived table as JSON
    #[arg(long)]
    report: Option<PathBuf>,
    /// Open the saved image in the system viewer
    #[arg(long, default_value_t = false)]
    show: bool,
    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reference = match args.reference.as_deref() {
        Some(values) => Some(
            <[f64; 3]>::try_from(values).context("--reference takes exactly three values")?,
        ),
        None => None,
    };

    let config = if let Some(path) = args.config.as_ref() {
        PipelineConfig::load(path)?
    } else {
        PipelineConfig::default()
    }
    .with_overrides(args.width, args.height, reference, args.show);

    println!("{}", args.input.display());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(&args.input));

    let runner = Runner::new(config.clone());
    let result = runner.execute(&args.input, &output)?;

    println!(
        "Saved {} ({}x{}) -> rows {}, clamped {}, non-finite {}",
        result.output_path.display(),
        result.image_size.0,
        result.image_size.1,
        result.table.len(),
        result.metrics.values_clamped,
        result.metrics.values_non_finite
    );
    for note in &result.notes {
        log::debug!("{}", note);
    }

    if let Some(report_path) = args.report.as_ref() {
        write_report(&result.table, report_path)?;
        println!("Report written to {}", report_path.display());
    }

    if config.show {
        viewer::show(&result.output_path)?;
    }

    Ok(())
}
