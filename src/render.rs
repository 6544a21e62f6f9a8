use crate::ForecastOutput;
use analytics::{format_currency, group_thousands, ForecastReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use core_types::{Parameter, Tone};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn pct(value: f64, defined: bool) -> String {
    if defined {
        format!("{:.1}%", value)
    } else {
        "n/a".to_string()
    }
}

/// Prints the summary cards, daily series, breakdowns and advisories.
pub fn print_forecast(output: &ForecastOutput) {
    let report = &output.report;

    println!("--- First-Week Forecast ({} model) ---", output.parameters.variant);
    println!("{}", summary_table(output));

    let mut header = vec!["Day", "Date", "Volume (M)", "Traders", "Transactions"];
    if report.financials.is_some() {
        header.push("Revenue (M)");
    }
    let mut daily = new_table(header);
    for entry in &output.daily {
        let mut row = vec![
            entry.day.to_string(),
            entry.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
            group_thousands(entry.volume),
            group_thousands(entry.traders as i64),
            group_thousands(entry.transactions as i64),
        ];
        if let Some(revenue) = entry.revenue {
            row.push(group_thousands(revenue));
        }
        daily.add_row(row);
    }
    println!("\n--- Daily Projection ---");
    println!("{daily}");

    let mut breakdown = new_table(vec!["Slice", "Value", "Share"]);
    for slice in output.contribution.iter().chain(output.financial.iter().flatten()) {
        breakdown.add_row(vec![
            slice.label.to_string(),
            format_currency(slice.value),
            format!("{:.1}%", slice.share_pct),
        ]);
    }
    println!("\n--- Breakdown ---");
    println!("{breakdown}");

    let mut kpis = new_table(vec!["KPI", "Score", "Full mark"]);
    for point in &output.kpis {
        kpis.add_row(vec![
            point.metric.to_string(),
            format!("{:.1}", point.value),
            format!("{:.0}", point.full_mark),
        ]);
    }
    println!("\n--- KPI Profile ---");
    println!("{kpis}");

    println!("\n--- Strategic Advisories ---");
    if output.advisories.is_empty() {
        println!("No advisories for these parameters.");
    } else {
        let mut advisories = new_table(vec!["", "Advisory", "Details"]);
        for advisory in &output.advisories {
            advisories.add_row(vec![
                tone_marker(advisory.tone).to_string(),
                advisory.title.to_string(),
                advisory.text.clone(),
            ]);
        }
        println!("{advisories}");
    }
}

fn summary_table(output: &ForecastOutput) -> Table {
    let report: &ForecastReport = &output.report;
    let mut table = new_table(vec!["Metric", "Value", "Note"]);

    table.add_row(vec![
        "Total volume".to_string(),
        format_currency(report.total_volume),
        String::new(),
    ]);
    table.add_row(vec![
        "Existing users volume".to_string(),
        format_currency(report.existing_users_volume),
        format!("{} of total", pct(report.existing_contribution_pct, report.contribution_defined)),
    ]);
    table.add_row(vec![
        "New users volume".to_string(),
        format_currency(report.new_users_volume),
        format!("{} of total", pct(report.new_contribution_pct, report.contribution_defined)),
    ]);
    table.add_row(vec![
        "Total traders".to_string(),
        group_thousands(report.total_traders as i64),
        participation_note(report.participation_rate),
    ]);
    table.add_row(vec![
        "Total transactions".to_string(),
        group_thousands(report.total_transactions as i64),
        String::new(),
    ]);
    table.add_row(vec![
        "Hype".to_string(),
        output.parameters.hype_factor.to_string(),
        output.assessment.hype.to_string(),
    ]);

    if let Some(fin) = report.financials {
        table.add_row(vec![
            "Liquidity".to_string(),
            output.parameters.liquidity_factor.to_string(),
            output
                .assessment
                .liquidity
                .map(|l| l.to_string())
                .unwrap_or_default(),
        ]);
        table.add_row(vec![
            "Direct revenue".to_string(),
            format_currency(fin.direct_revenue),
            format!("at {}% spread", output.parameters.spread_margin_pct),
        ]);
        table.add_row(vec![
            "Total cost".to_string(),
            format_currency(fin.total_cost),
            String::new(),
        ]);
        table.add_row(vec![
            "Net profit".to_string(),
            format_currency(fin.net_profit),
            format!("margin {}", pct(fin.profit_margin_pct, fin.profit_margin_defined)),
        ]);
        table.add_row(vec![
            "ROI".to_string(),
            pct(fin.roi_pct, fin.roi_defined),
            output
                .assessment
                .profit
                .map(|p| p.to_string())
                .unwrap_or_default(),
        ]);
    }
    table
}

/// Below this share of MAU actively trading, the summary suggests incentives.
const LOW_PARTICIPATION_PCT: f64 = 3.0;

fn participation_note(rate: f64) -> String {
    let note = format!("{:.1}% of MAU trade", rate);
    if rate < LOW_PARTICIPATION_PCT {
        format!("{note}; try to raise this ratio with incentives")
    } else {
        note
    }
}

fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "i",
        Tone::Positive => "+",
        Tone::Warning => "!",
        Tone::Critical => "!!",
    }
}

/// Prints the calibrated range of every parameter.
pub fn print_bounds() {
    let mut table = new_table(vec!["Parameter", "Min", "Max", "Step", "Variant", "Description"]);
    for parameter in Parameter::ALL {
        let bounds = parameter.bounds();
        table.add_row(vec![
            parameter.name().to_string(),
            bounds.min.to_string(),
            bounds.max.to_string(),
            bounds.step.to_string(),
            if parameter.extended_only() { "extended" } else { "all" }.to_string(),
            parameter.description().to_string(),
        ]);
    }
    println!("{table}");
}
