use core_types::Variant;
use serde::{Deserialize, Serialize};

/// The full set of derived first-week metrics.
///
/// This struct is the final output of the `ForecastEngine` and serves as the
/// data transfer object for the series generator, the advisor and the CLI.
/// It is recomputed from scratch for every `ParameterSet`.
///
/// Percentages whose denominator is zero resolve to `0.0` and clear the matching
/// `*_defined` flag, so no NaN or infinity ever reaches a consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub variant: Variant,

    // I. Volume
    pub existing_users_volume: f64,
    pub new_users_volume: f64,
    pub total_volume: f64,

    // II. Activity
    pub active_traders: u64,
    pub total_traders: u64,
    pub total_transactions: u64,
    /// Active traders as a share of MAU.
    pub participation_rate: f64,

    // III. Contribution
    #[serde(rename = "existingContribution")]
    pub existing_contribution_pct: f64,
    #[serde(rename = "newContribution")]
    pub new_contribution_pct: f64,
    /// False when total volume is zero and both contributions are placeholders.
    pub contribution_defined: bool,

    // IV. Profit and loss, extended variant only
    #[serde(flatten)]
    pub financials: Option<Financials>,
}

/// Revenue, cost and profit figures of the extended variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub direct_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    #[serde(rename = "profitMargin")]
    pub profit_margin_pct: f64,
    pub profit_margin_defined: bool,
    #[serde(rename = "roi")]
    pub roi_pct: f64,
    pub roi_defined: bool,
}

impl ForecastReport {
    /// Creates a zeroed-out report for the given variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            existing_users_volume: 0.0,
            new_users_volume: 0.0,
            total_volume: 0.0,
            active_traders: 0,
            total_traders: 0,
            total_transactions: 0,
            participation_rate: 0.0,
            existing_contribution_pct: 0.0,
            new_contribution_pct: 0.0,
            contribution_defined: false,
            financials: variant.has_financials().then(Financials::default),
        }
    }

    pub fn net_profit(&self) -> Option<f64> {
        self.financials.map(|f| f.net_profit)
    }

    pub fn roi_pct(&self) -> Option<f64> {
        self.financials.map(|f| f.roi_pct)
    }

    pub fn direct_revenue(&self) -> Option<f64> {
        self.financials.map(|f| f.direct_revenue)
    }
}

impl Default for Financials {
    fn default() -> Self {
        Self {
            direct_revenue: 0.0,
            total_cost: 0.0,
            net_profit: 0.0,
            profit_margin_pct: 0.0,
            profit_margin_defined: false,
            roi_pct: 0.0,
            roi_defined: false,
        }
    }
}
