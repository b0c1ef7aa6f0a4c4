use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use assist_dash::utils::logging::console::{print_cleaning_report, print_page};
use assist_dash::{
    CleaningPipeline, Dashboard, DashboardConfig, Dimension, PipelineConfig, SignedFilter,
    ViewRequest, read_cleaned,
};
use clap::Parser;
use log::info;

/// Clean the application spreadsheet, then render the dashboard views
#[derive(Debug, Parser)]
#[command(name = "assist-dash", version, about)]
struct Args {
    /// Raw application spreadsheet (.xlsx, .xls, .ods or .csv)
    #[arg(long, default_value = "data/raw_data.xlsx")]
    input: PathBuf,

    /// Cleaned artifact (.csv, or .parquet)
    #[arg(long, default_value = "data/cleaned_data.csv")]
    output: PathBuf,

    /// JSON pipeline configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the simulated support delays
    #[arg(long)]
    seed: Option<u64>,

    /// Grouping for Support by Demographics (all, city, state, gender, insurance, year, income)
    #[arg(long, default_value = "state")]
    group_by: String,

    /// Signed filter for Ready for Review (all, yes, no)
    #[arg(long, default_value = "all")]
    signed: String,

    /// Print the pages as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Render from an existing artifact without cleaning
    #[arg(long)]
    skip_clean: bool,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if !args.skip_clean {
        let mut config = match &args.config {
            Some(path) => PipelineConfig::from_json_file(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => PipelineConfig::default(),
        };
        if let Some(seed) = args.seed {
            config = config.with_seed(seed);
        }
        config.show_progress = !args.json;

        let start = Instant::now();
        let pipeline = CleaningPipeline::new(config)?;
        let report = pipeline
            .run(&args.input, &args.output)
            .with_context(|| format!("cleaning {}", args.input.display()))?;
        info!("Cleaning finished in {:?}", start.elapsed());

        if !args.json {
            print_cleaning_report(&report);
        }
    }

    let table = read_cleaned(&args.output)
        .with_context(|| format!("loading cleaned data {}", args.output.display()))?;
    let mut dashboard = Dashboard::new(Arc::new(table), DashboardConfig::default())?;

    let pages = ViewRequest::pages(
        SignedFilter::parse(&args.signed),
        Dimension::parse(&args.group_by),
    );
    let rendered = dashboard.render_all(&pages);

    if args.json {
        let json: Vec<_> = rendered
            .iter()
            .map(|(request, page)| serde_json::json!({ "page": request.title(), "result": page }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        for (request, page) in &rendered {
            print_page(request, page);
        }
    }

    Ok(())
}
