use crate::report::{Financials, ForecastReport};
use core_types::ParameterSet;

/// Average number of transactions a trader places during launch week.
pub const AVG_TRANSACTIONS_PER_TRADER: f64 = 3.5;

/// A stateless calculator for deriving launch-week metrics from a `ParameterSet`.
#[derive(Debug, Default)]
pub struct ForecastEngine {}

impl ForecastEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the forecast.
    ///
    /// # Arguments
    ///
    /// * `params` - The parameter set to evaluate. It is not validated here.
    ///
    /// # Returns
    ///
    /// A `ForecastReport`. The calculation cannot fail: ratios with a zero
    /// denominator are reported as `0.0` with their `*_defined` flag cleared.
    pub fn calculate(&self, params: &ParameterSet) -> ForecastReport {
        let mut report = ForecastReport::new(params.variant);

        self.calculate_volume(params, &mut report);
        self.calculate_activity(params, &mut report);
        self.calculate_contribution(&mut report);
        if params.variant.has_financials() {
            report.financials = Some(self.calculate_financials(params, report.total_volume));
        }

        tracing::debug!(
            variant = %params.variant,
            total_volume = report.total_volume,
            total_traders = report.total_traders,
            "Forecast calculated."
        );
        report
    }

    /// Splits volume into the existing-user and new-user components.
    fn calculate_volume(&self, params: &ParameterSet, report: &mut ForecastReport) {
        let conversion = params.conversion_rate_pct / 100.0;
        let liquidity = params.effective_liquidity_factor();

        report.existing_users_volume =
            params.mau as f64 * conversion * params.avg_trade * params.hype_factor * liquidity;

        // The simple model does not apply hype to acquired users.
        report.new_users_volume = if params.variant.has_financials() {
            params.new_users as f64 * params.avg_trade_new * params.hype_factor * liquidity
        } else {
            params.new_users as f64 * params.avg_trade_new
        };

        report.total_volume = report.existing_users_volume + report.new_users_volume;
    }

    /// Trader and transaction counts. The liquidity factor never applies here.
    ///
    /// Counts saturate at `u64::MAX`, so `total_traders == active_traders + new_users`
    /// holds only below saturation.
    fn calculate_activity(&self, params: &ParameterSet, report: &mut ForecastReport) {
        let conversion = params.conversion_rate_pct / 100.0;

        report.active_traders = round_count(params.mau as f64 * conversion * params.hype_factor);
        report.total_traders = report.active_traders.saturating_add(params.new_users);
        report.total_transactions =
            round_count(report.total_traders as f64 * AVG_TRANSACTIONS_PER_TRADER);
        report.participation_rate =
            percent_of(report.active_traders as f64, params.mau as f64).unwrap_or(0.0);
    }

    fn calculate_contribution(&self, report: &mut ForecastReport) {
        let existing = percent_of(report.existing_users_volume, report.total_volume);
        let new = percent_of(report.new_users_volume, report.total_volume);

        match (existing, new) {
            (Some(existing), Some(new)) => {
                report.existing_contribution_pct = existing;
                report.new_contribution_pct = new;
                report.contribution_defined = true;
            }
            _ => {
                tracing::warn!("Total volume is zero; contribution shares are undefined.");
                report.existing_contribution_pct = 0.0;
                report.new_contribution_pct = 0.0;
                report.contribution_defined = false;
            }
        }
    }

    /// Spread revenue against marketing and liquidity spend.
    fn calculate_financials(&self, params: &ParameterSet, total_volume: f64) -> Financials {
        let direct_revenue = total_volume * (params.spread_margin_pct / 100.0);
        let total_cost = params.marketing_cost + params.liquidity_cost;
        let net_profit = direct_revenue - total_cost;

        let profit_margin = percent_of(net_profit, direct_revenue);
        let roi = percent_of(net_profit, total_cost);
        if roi.is_none() {
            tracing::warn!("Total cost is zero; ROI is undefined.");
        }

        Financials {
            direct_revenue,
            total_cost,
            net_profit,
            profit_margin_pct: profit_margin.unwrap_or(0.0),
            profit_margin_defined: profit_margin.is_some(),
            roi_pct: roi.unwrap_or(0.0),
            roi_defined: roi.is_some(),
        }
    }
}

/// Convenience wrapper around `ForecastEngine::calculate`.
pub fn compute(params: &ParameterSet) -> ForecastReport {
    ForecastEngine::new().calculate(params)
}

/// `numerator / denominator * 100`, or `None` when the result is not finite.
fn percent_of(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let pct = numerator / denominator * 100.0;
    pct.is_finite().then_some(pct)
}

/// Rounds half away from zero. Negative and NaN inputs saturate to zero, values
/// beyond `u64::MAX` saturate to `u64::MAX`.
fn round_count(value: f64) -> u64 {
    value.round() as u64
}
