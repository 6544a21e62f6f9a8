use advisor::{Advisor, Advisory};
use analytics::{
    contribution_breakdown, daily_series, daily_series_from, financial_breakdown, kpi_profile,
    DailyEntry, ForecastEngine, ForecastReport, HypeTier, KpiPoint, LiquidityTier, ProfitStatus,
    Slice,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use configuration::{init_tracing, load_config, ParameterOverrides};
use core_types::{ParameterSet, Variant};
use serde::Serialize;
use std::path::PathBuf;

mod render;

/// The main entry point for the listing forecast tool.
fn main() -> Result<()> {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Forecast(args) => handle_forecast(args),
        Commands::Bounds => {
            render::print_bounds();
            Ok(())
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Projects first-week volume, traders and profit for a new coin listing.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the forecast and print metrics, the daily series and advisories.
    Forecast(ForecastArgs),
    /// Print the allowed range of every parameter.
    Bounds,
}

#[derive(Parser)]
struct ForecastArgs {
    /// Configuration file (defaults to ./config.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which model to run.
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    #[command(flatten)]
    overrides: ParameterOverrides,

    /// Listing day, used to date the daily series (format: YYYY-MM-DD).
    #[arg(long)]
    launch_date: Option<NaiveDate>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Accept parameters outside their calibrated ranges.
    #[arg(long)]
    no_bounds_check: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Simple,
    Extended,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Simple => Variant::Simple,
            VariantArg::Extended => Variant::Extended,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Forecast Command Logic
// ==============================================================================

/// Everything one evaluation produces, in the shape the dashboard consumes.
#[derive(Debug, Serialize)]
struct ForecastOutput {
    parameters: ParameterSet,
    report: ForecastReport,
    assessment: Assessment,
    daily: [DailyEntry; 7],
    contribution: [Slice; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    financial: Option<[Slice; 2]>,
    kpis: Vec<KpiPoint>,
    advisories: Vec<Advisory>,
}

#[derive(Debug, Serialize)]
struct Assessment {
    hype: HypeTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    liquidity: Option<LiquidityTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profit: Option<ProfitStatus>,
}

impl ForecastOutput {
    /// Runs the full pipeline for one parameter set.
    fn build(params: ParameterSet, launch_date: Option<NaiveDate>) -> Result<Self> {
        let report = ForecastEngine::new().calculate(&params);
        let daily = match launch_date {
            Some(date) => daily_series_from(&report, date)?,
            None => daily_series(&report),
        };
        let advisories = Advisor::new().advise(&params, &report);

        Ok(Self {
            assessment: Assessment {
                hype: HypeTier::classify(params.hype_factor),
                liquidity: params
                    .variant
                    .has_financials()
                    .then(|| LiquidityTier::classify(params.liquidity_factor)),
                profit: ProfitStatus::classify(&report),
            },
            contribution: contribution_breakdown(&report),
            financial: financial_breakdown(&report),
            kpis: kpi_profile(&params),
            parameters: params,
            daily,
            advisories,
            report,
        })
    }
}

/// Resolves configuration and flags into a parameter set, then prints the forecast.
fn handle_forecast(args: ForecastArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    let _log_guard = init_tracing(&config.logging)?;

    // Command-line flags take precedence over the file and environment.
    if let Some(variant) = args.variant {
        config.forecast.variant = variant.into();
    }
    if args.no_bounds_check {
        config.forecast.enforce_bounds = false;
    }
    if args.launch_date.is_some() {
        config.forecast.launch_date = args.launch_date;
    }
    config.forecast.parameters = config.forecast.parameters.merge(args.overrides);

    let params = config.forecast.parameter_set()?;
    tracing::info!(variant = %params.variant, "Running forecast.");

    let output = ForecastOutput::build(params, config.forecast.launch_date)?;
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Table => render::print_forecast(&output),
    }

    Ok(())
}
