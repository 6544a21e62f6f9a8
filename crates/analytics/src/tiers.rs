use crate::report::ForecastReport;
use serde::Serialize;
use std::fmt;

/// Qualitative reading of the hype factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HypeTier {
    VeryLow,
    Low,
    Moderate,
    High,
    Viral,
}

impl HypeTier {
    pub fn classify(hype_factor: f64) -> Self {
        match hype_factor {
            h if h >= 1.8 => HypeTier::Viral,
            h if h >= 1.5 => HypeTier::High,
            h if h >= 1.2 => HypeTier::Moderate,
            h if h >= 1.0 => HypeTier::Low,
            _ => HypeTier::VeryLow,
        }
    }
}

impl fmt::Display for HypeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HypeTier::VeryLow => "Very low",
            HypeTier::Low => "Low - ordinary coin",
            HypeTier::Moderate => "Moderate - well known",
            HypeTier::High => "High - popular coin",
            HypeTier::Viral => "Very high - viral, top market trend",
        };
        f.write_str(text)
    }
}

/// Qualitative reading of the liquidity factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiquidityTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl LiquidityTier {
    pub fn classify(liquidity_factor: f64) -> Self {
        match liquidity_factor {
            l if l >= 1.1 => LiquidityTier::Excellent,
            l if l >= 1.0 => LiquidityTier::Good,
            l if l >= 0.9 => LiquidityTier::Fair,
            _ => LiquidityTier::Poor,
        }
    }
}

impl fmt::Display for LiquidityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LiquidityTier::Poor => "Poor - high slippage risk",
            LiquidityTier::Fair => "Fair - needs improvement",
            LiquidityTier::Good => "Good - adequate liquidity",
            LiquidityTier::Excellent => "Excellent - very deep liquidity",
        };
        f.write_str(text)
    }
}

/// Headline verdict on the listing's profit and loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfitStatus {
    LossMaking,
    Profitable,
    Good,
    Excellent,
}

impl ProfitStatus {
    /// Returns `None` when the report carries no financials.
    pub fn classify(report: &ForecastReport) -> Option<Self> {
        let fin = report.financials?;
        let status = if fin.net_profit > 0.0 {
            if fin.roi_pct > 50.0 {
                ProfitStatus::Excellent
            } else if fin.roi_pct > 20.0 {
                ProfitStatus::Good
            } else {
                ProfitStatus::Profitable
            }
        } else {
            ProfitStatus::LossMaking
        };
        Some(status)
    }
}

impl fmt::Display for ProfitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ProfitStatus::LossMaking => "Loss-making",
            ProfitStatus::Profitable => "Profitable",
            ProfitStatus::Good => "Good",
            ProfitStatus::Excellent => "Excellent",
        };
        f.write_str(text)
    }
}

/// Formats a currency amount in billions or millions with one decimal,
/// or as a grouped integer below a million.
pub fn format_currency(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.1} billion", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("{:.1} million", value / 1_000_000.0)
    } else {
        group_thousands(value.round() as i64)
    }
}

/// Inserts comma separators: 1234567 -> "1,234,567".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute;
    use core_types::ParameterSet;

    #[test]
    fn hype_tiers_use_inclusive_lower_bounds() {
        assert_eq!(HypeTier::classify(0.9), HypeTier::VeryLow);
        assert_eq!(HypeTier::classify(1.0), HypeTier::Low);
        assert_eq!(HypeTier::classify(1.2), HypeTier::Moderate);
        assert_eq!(HypeTier::classify(1.5), HypeTier::High);
        assert_eq!(HypeTier::classify(1.8), HypeTier::Viral);
    }

    #[test]
    fn liquidity_tiers() {
        assert_eq!(LiquidityTier::classify(0.85), LiquidityTier::Poor);
        assert_eq!(LiquidityTier::classify(0.95), LiquidityTier::Fair);
        assert_eq!(LiquidityTier::classify(1.0), LiquidityTier::Good);
        assert_eq!(LiquidityTier::classify(1.15), LiquidityTier::Excellent);
    }

    #[test]
    fn profit_status_follows_roi() {
        let mut params = ParameterSet::extended_defaults();
        assert_eq!(
            ProfitStatus::classify(&compute(&params)),
            Some(ProfitStatus::LossMaking)
        );

        params.spread_margin_pct = 1.0;
        params.marketing_cost = 0.0;
        params.liquidity_cost = 100_000_000.0;
        // revenue 222.3M against 100M cost -> ROI 122%
        assert_eq!(
            ProfitStatus::classify(&compute(&params)),
            Some(ProfitStatus::Excellent)
        );

        assert_eq!(
            ProfitStatus::classify(&compute(&ParameterSet::simple_defaults())),
            None
        );
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(21_000_000_000.0), "21.0 billion");
        assert_eq!(format_currency(33_345_000.0), "33.3 million");
        assert_eq!(format_currency(999_999.0), "999,999");
        assert_eq!(format_currency(-116_655_000.0), "-116,655,000");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(100), "100");
    }
}
