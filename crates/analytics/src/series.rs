use crate::error::AnalyticsError;
use crate::report::ForecastReport;
use chrono::{Days, NaiveDate};
use core_types::ParameterSet;
use serde::Serialize;

/// Launch-week decay relative to the 7-day average, day 1 first.
///
/// The weights sum to 7.8 rather than 7, so the daily volumes add up to
/// 7.8/7 of the weekly total. Consumers depend on these exact values.
pub const DAY_WEIGHTS: [f64; 7] = [1.8, 1.5, 1.2, 1.0, 0.85, 0.75, 0.7];

/// Share of traders assumed active on any given day.
pub const DAILY_ACTIVE_SHARE: f64 = 0.7;

const MILLION: f64 = 1_000_000.0;

/// One day of the projected launch week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    /// 1-based day number.
    pub day: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub weight: f64,
    /// Volume in millions of the base currency unit.
    pub volume: i64,
    pub traders: u64,
    pub transactions: u64,
    /// Spread revenue in millions, extended variant only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<i64>,
}

/// Builds the 7-day breakdown of a report.
pub fn daily_series(report: &ForecastReport) -> [DailyEntry; 7] {
    let base_volume = report.total_volume / 7.0;
    let revenue = report.direct_revenue();

    std::array::from_fn(|i| {
        let weight = DAY_WEIGHTS[i];
        DailyEntry {
            day: (i + 1) as u8,
            date: None,
            weight,
            volume: (base_volume * weight / MILLION).round() as i64,
            traders: (report.total_traders as f64 * weight * DAILY_ACTIVE_SHARE / 7.0).round()
                as u64,
            transactions: (report.total_transactions as f64 * weight / 7.0).round() as u64,
            revenue: revenue.map(|r| (r * weight / (7.0 * MILLION)).round() as i64),
        }
    })
}

/// Like [`daily_series`], with each day labelled by its calendar date.
pub fn daily_series_from(
    report: &ForecastReport,
    launch: NaiveDate,
) -> Result<[DailyEntry; 7], AnalyticsError> {
    let mut series = daily_series(report);
    for (offset, entry) in series.iter_mut().enumerate() {
        let date = launch
            .checked_add_days(Days::new(offset as u64))
            .ok_or(AnalyticsError::DateOutOfRange(launch))?;
        entry.date = Some(date);
    }
    Ok(series)
}

/// A labelled share of a two-way split.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    /// Share of the pair total, 0 when the total is zero.
    pub share_pct: f64,
}

fn split(left: (&'static str, f64), right: (&'static str, f64)) -> [Slice; 2] {
    let total = left.1 + right.1;
    let share = |value: f64| {
        if total == 0.0 {
            0.0
        } else {
            value / total * 100.0
        }
    };
    [
        Slice { label: left.0, value: left.1, share_pct: share(left.1) },
        Slice { label: right.0, value: right.1, share_pct: share(right.1) },
    ]
}

/// Volume contributed by existing versus newly acquired users.
pub fn contribution_breakdown(report: &ForecastReport) -> [Slice; 2] {
    split(
        ("Existing users", report.existing_users_volume),
        ("New users", report.new_users_volume),
    )
}

/// Direct revenue against total cost. `None` for the simple variant.
pub fn financial_breakdown(report: &ForecastReport) -> Option<[Slice; 2]> {
    report
        .financials
        .map(|f| split(("Direct revenue", f.direct_revenue), ("Costs", f.total_cost)))
}

/// One axis of the KPI radar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiPoint {
    pub metric: &'static str,
    pub value: f64,
    pub full_mark: f64,
}

pub const KPI_FULL_MARK: f64 = 100.0;

/// Scales the key inputs onto a common 0-100 axis.
///
/// Values are not clamped; inputs outside the usual ranges plot past the full mark.
pub fn kpi_profile(params: &ParameterSet) -> Vec<KpiPoint> {
    let point = |metric, value| KpiPoint { metric, value, full_mark: KPI_FULL_MARK };

    let mut points = vec![
        point("Conversion rate", params.conversion_rate_pct * 10.0),
        point("Hype", (params.hype_factor - 1.0) * 100.0),
    ];
    if params.variant.has_financials() {
        points.push(point("Liquidity", params.liquidity_factor * 100.0));
        points.push(point("Spread margin", params.spread_margin_pct * 10.0));
    }
    points.push(point("User acquisition", params.new_users as f64 / 100.0));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use approx::assert_relative_eq;

    #[test]
    fn weight_table_is_front_loaded() {
        assert_eq!(DAY_WEIGHTS[0], 1.8);
        assert_eq!(DAY_WEIGHTS[6], 0.7);
        assert_relative_eq!(DAY_WEIGHTS.iter().sum::<f64>(), 7.8, epsilon = 1e-12);
    }

    #[test]
    fn simple_defaults_daily_values() {
        let series = daily_series(&compute(&ParameterSet::simple_defaults()));

        // 21e9 / 7 * 1.8 / 1e6 = 5400
        assert_eq!(series[0].day, 1);
        assert_eq!(series[0].volume, 5_400);
        assert_eq!(series[0].traders, 918);
        assert_eq!(series[0].transactions, 4_590);
        assert_eq!(series[6].day, 7);
        assert_eq!(series[6].volume, 2_100);
        assert_eq!(series[6].transactions, 1_785);
        assert!(series.iter().all(|d| d.revenue.is_none() && d.date.is_none()));
    }

    #[test]
    fn extended_series_carries_revenue() {
        let series = daily_series(&compute(&ParameterSet::extended_defaults()));
        // 33_345_000 * 1.8 / 7e6 = 8.57 -> 9
        assert_eq!(series[0].revenue, Some(9));
        assert_eq!(series[6].revenue, Some(3));
    }

    #[test]
    fn launch_date_labels_consecutive_days() {
        let report = compute(&ParameterSet::simple_defaults());
        let launch = NaiveDate::from_ymd_opt(2024, 12, 29).unwrap();
        let series = daily_series_from(&report, launch).unwrap();

        assert_eq!(series[0].date, Some(launch));
        assert_eq!(series[6].date, NaiveDate::from_ymd_opt(2025, 1, 4));
    }

    #[test]
    fn launch_date_at_calendar_end_is_an_error() {
        let report = compute(&ParameterSet::simple_defaults());
        let result = daily_series_from(&report, NaiveDate::MAX);
        assert!(matches!(result, Err(AnalyticsError::DateOutOfRange(_))));
    }

    #[test]
    fn breakdowns_split_the_totals() {
        let report = compute(&ParameterSet::extended_defaults());

        let contribution = contribution_breakdown(&report);
        assert_relative_eq!(
            contribution[0].share_pct + contribution[1].share_pct,
            100.0,
            epsilon = 1e-9
        );
        assert_eq!(contribution[1].value, report.new_users_volume);

        let financial = financial_breakdown(&report).unwrap();
        assert_eq!(financial[1].value, 150_000_000.0);
        assert!(financial_breakdown(&compute(&ParameterSet::simple_defaults())).is_none());
    }

    #[test]
    fn kpi_profile_normalizes_inputs() {
        let kpis = kpi_profile(&ParameterSet::extended_defaults());
        let values: Vec<f64> = kpis.iter().map(|k| k.value).collect();

        assert_eq!(kpis.len(), 5);
        assert_relative_eq!(values[0], 30.0, epsilon = 1e-9);
        assert_relative_eq!(values[1], 30.0, epsilon = 1e-9);
        assert_relative_eq!(values[2], 95.0, epsilon = 1e-9);
        assert_relative_eq!(values[3], 1.5, epsilon = 1e-9);
        assert_relative_eq!(values[4], 15.0, epsilon = 1e-9);
        assert!(kpis.iter().all(|k| k.full_mark == 100.0));

        assert_eq!(kpi_profile(&ParameterSet::simple_defaults()).len(), 3);
    }
}
