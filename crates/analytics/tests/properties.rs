//! Properties of the forecast pipeline that must hold for every parameter set.

use analytics::{compute, daily_series, DAY_WEIGHTS};
use approx::assert_relative_eq;
use core_types::{ParameterSet, Variant};
use proptest::prelude::*;

fn any_variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Simple), Just(Variant::Extended)]
}

prop_compose! {
    fn any_params()(
        variant in any_variant(),
        mau in 0u64..1_000_000,
        conversion_rate_pct in 0.0f64..20.0,
        avg_trade in 0.0f64..50_000_000.0,
        hype_factor in 0.0f64..3.0,
        liquidity_factor in 0.0f64..1.5,
        new_users in 0u64..20_000,
        avg_trade_new in 0.0f64..20_000_000.0,
        spread_margin_pct in 0.0f64..2.0,
        marketing_cost in 0.0f64..1_000_000_000.0,
        liquidity_cost in 0.0f64..1_000_000_000.0,
    ) -> ParameterSet {
        ParameterSet {
            variant,
            mau,
            conversion_rate_pct,
            avg_trade,
            hype_factor,
            liquidity_factor,
            new_users,
            avg_trade_new,
            spread_margin_pct,
            marketing_cost,
            liquidity_cost,
        }
    }
}

proptest! {
    #[test]
    fn total_volume_is_exact_sum(params in any_params()) {
        let report = compute(&params);
        prop_assert_eq!(report.total_volume, report.existing_users_volume + report.new_users_volume);
    }

    #[test]
    fn contributions_add_to_one_hundred(params in any_params()) {
        let report = compute(&params);
        if report.total_volume > 0.0 {
            prop_assert!(report.contribution_defined);
            let sum = report.existing_contribution_pct + report.new_contribution_pct;
            prop_assert!((sum - 100.0).abs() < 1e-9, "sum was {}", sum);
        } else {
            prop_assert!(!report.contribution_defined);
            prop_assert_eq!(report.existing_contribution_pct, 0.0);
        }
    }

    #[test]
    fn trader_and_transaction_counts(params in any_params()) {
        // Generated audiences stay far below u64 saturation.
        let report = compute(&params);
        prop_assert_eq!(report.total_traders, report.active_traders + params.new_users);
        prop_assert_eq!(
            report.total_transactions,
            (report.total_traders as f64 * 3.5).round() as u64
        );
    }

    #[test]
    fn no_metric_is_ever_non_finite(params in any_params()) {
        let report = compute(&params);
        prop_assert!(report.existing_contribution_pct.is_finite());
        prop_assert!(report.new_contribution_pct.is_finite());
        prop_assert!(report.participation_rate.is_finite());
        if let Some(fin) = report.financials {
            prop_assert!(fin.roi_pct.is_finite());
            prop_assert!(fin.profit_margin_pct.is_finite());
            if fin.total_cost == 0.0 {
                prop_assert!(!fin.roi_defined);
                prop_assert_eq!(fin.roi_pct, 0.0);
            } else {
                prop_assert_eq!(fin.roi_pct, fin.net_profit / fin.total_cost * 100.0);
            }
        }
    }

    #[test]
    fn financials_exist_only_for_extended(params in any_params()) {
        let report = compute(&params);
        prop_assert_eq!(report.financials.is_some(), params.variant == Variant::Extended);
    }
}

#[test]
fn daily_series_uses_weight_table_at_the_boundaries() {
    let report = compute(&ParameterSet::simple_defaults());
    let series = daily_series(&report);

    assert_eq!(series.len(), 7);
    assert_eq!(series[0].weight, 1.8);
    assert_eq!(series[6].weight, 0.7);
    assert_eq!(series.map(|d| d.weight), DAY_WEIGHTS);
}

#[test]
fn daily_volume_keeps_launch_week_skew() {
    let report = compute(&ParameterSet::simple_defaults());
    let series = daily_series(&report);

    let daily_total: i64 = series.iter().map(|d| d.volume).sum();
    let weekly_millions = report.total_volume / 1_000_000.0;

    assert_ne!(daily_total as f64, weekly_millions);
    assert_relative_eq!(daily_total as f64 / weekly_millions, 7.8 / 7.0, max_relative = 1e-3);
}

#[test]
fn scenario_two_projects_a_loss() {
    let report = compute(&ParameterSet::extended_defaults());
    let fin = report.financials.unwrap();

    assert_relative_eq!(report.total_volume, 22_230_000_000.0, max_relative = 1e-9);
    assert_relative_eq!(fin.net_profit, -116_655_000.0, max_relative = 1e-9);
    assert!(fin.net_profit < 0.0);
}
