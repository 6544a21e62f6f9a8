//! # Listing Forecast Analytics Engine
//!
//! This crate turns a `ParameterSet` into the projected first-week metrics of a coin
//! listing, and derives the daily series and breakdowns shown alongside them.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems.
//!   It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `ForecastEngine` is a stateless calculator. It takes
//!   a parameter set as input and produces a `ForecastReport` as output. The same input
//!   always yields the same report.
//!
//! ## Public API
//!
//! - `ForecastEngine` / `compute`: the metric calculator.
//! - `ForecastReport`: volumes, trader counts, contribution shares and financials.
//! - `daily_series`, `contribution_breakdown`, `financial_breakdown`, `kpi_profile`.
//! - `HypeTier`, `LiquidityTier`, `ProfitStatus`, `format_currency`: presentation helpers.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;
pub mod series;
pub mod tiers;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{compute, ForecastEngine, AVG_TRANSACTIONS_PER_TRADER};
pub use error::AnalyticsError;
pub use report::{Financials, ForecastReport};
pub use series::{
    contribution_breakdown, daily_series, daily_series_from, financial_breakdown, kpi_profile,
    DailyEntry, KpiPoint, Slice, DAY_WEIGHTS,
};
pub use tiers::{format_currency, group_thousands, HypeTier, LiquidityTier, ProfitStatus};
