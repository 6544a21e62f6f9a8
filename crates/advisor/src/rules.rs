use analytics::{format_currency, ForecastReport};
use core_types::{AdvisoryCategory, ParameterSet, Tone, Variant};
use std::fmt;

/// Which variants a rule is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    ExtendedOnly,
}

impl Scope {
    pub fn includes(&self, variant: Variant) -> bool {
        match self {
            Scope::All => true,
            Scope::ExtendedOnly => variant.has_financials(),
        }
    }
}

pub type Predicate = fn(&ParameterSet, &ForecastReport) -> bool;
pub type Template = fn(&ParameterSet, &ForecastReport) -> String;

/// A single advisory rule: when `applies` holds, `render` produces the message.
///
/// Rules are independent of each other. A rule must not assume any other rule
/// has or has not fired.
#[derive(Clone, Copy)]
pub struct Rule {
    pub category: AdvisoryCategory,
    pub scope: Scope,
    pub tone: Tone,
    pub title: &'static str,
    pub applies: Predicate,
    pub render: Template,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("category", &self.category)
            .field("scope", &self.scope)
            .field("tone", &self.tone)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

pub const RELIANCE_THRESHOLD_PCT: f64 = 70.0;
pub const STRONG_ACQUISITION_THRESHOLD_PCT: f64 = 30.0;
pub const HIGH_HYPE_SIMPLE: f64 = 1.5;
pub const HIGH_HYPE_EXTENDED: f64 = 1.8;
pub const LOW_CONVERSION_PCT: f64 = 2.0;
pub const HIGH_VOLUME: f64 = 50_000_000_000.0;
pub const HIGHLY_PROFITABLE_ROI_PCT: f64 = 50.0;
pub const LOW_LIQUIDITY: f64 = 0.95;
pub const THIN_MARGIN_PCT: f64 = 0.1;

/// The hype level at which heavy traffic is expected.
pub fn hype_threshold(variant: Variant) -> f64 {
    match variant {
        Variant::Simple => HIGH_HYPE_SIMPLE,
        Variant::Extended => HIGH_HYPE_EXTENDED,
    }
}

/// The default rule table, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        category: AdvisoryCategory::RelianceOnExistingUsers,
        scope: Scope::All,
        tone: Tone::Info,
        title: "Relies on existing users",
        applies: relies_on_existing_users,
        render: render_reliance,
    },
    Rule {
        category: AdvisoryCategory::StrongAcquisition,
        scope: Scope::All,
        tone: Tone::Positive,
        title: "Strong user acquisition",
        applies: has_strong_acquisition,
        render: render_acquisition,
    },
    Rule {
        category: AdvisoryCategory::HighHypeWarning,
        scope: Scope::All,
        tone: Tone::Warning,
        title: "High hype",
        applies: is_high_hype,
        render: render_hype,
    },
    Rule {
        category: AdvisoryCategory::LowConversionWarning,
        scope: Scope::All,
        tone: Tone::Warning,
        title: "Low conversion rate",
        applies: is_low_conversion,
        render: render_conversion,
    },
    Rule {
        category: AdvisoryCategory::HighVolumeScaleWarning,
        scope: Scope::All,
        tone: Tone::Warning,
        title: "Very high volume",
        applies: is_high_volume,
        render: render_volume,
    },
    Rule {
        category: AdvisoryCategory::HighlyProfitable,
        scope: Scope::ExtendedOnly,
        tone: Tone::Positive,
        title: "Highly profitable listing",
        applies: is_highly_profitable,
        render: render_profitable,
    },
    Rule {
        category: AdvisoryCategory::ProjectedLoss,
        scope: Scope::ExtendedOnly,
        tone: Tone::Critical,
        title: "Projected loss",
        applies: is_projected_loss,
        render: render_loss,
    },
    Rule {
        category: AdvisoryCategory::LowLiquidityWarning,
        scope: Scope::ExtendedOnly,
        tone: Tone::Warning,
        title: "Low liquidity",
        applies: is_low_liquidity,
        render: render_liquidity,
    },
    Rule {
        category: AdvisoryCategory::ThinMarginWarning,
        scope: Scope::ExtendedOnly,
        tone: Tone::Warning,
        title: "Thin spread margin",
        applies: is_thin_margin,
        render: render_margin,
    },
];

// --- Predicates ---

fn relies_on_existing_users(_: &ParameterSet, r: &ForecastReport) -> bool {
    r.existing_contribution_pct > RELIANCE_THRESHOLD_PCT
}

fn has_strong_acquisition(_: &ParameterSet, r: &ForecastReport) -> bool {
    r.new_contribution_pct > STRONG_ACQUISITION_THRESHOLD_PCT
}

fn is_high_hype(p: &ParameterSet, _: &ForecastReport) -> bool {
    p.hype_factor >= hype_threshold(p.variant)
}

fn is_low_conversion(p: &ParameterSet, _: &ForecastReport) -> bool {
    p.conversion_rate_pct < LOW_CONVERSION_PCT
}

fn is_high_volume(_: &ParameterSet, r: &ForecastReport) -> bool {
    r.total_volume > HIGH_VOLUME
}

fn is_highly_profitable(_: &ParameterSet, r: &ForecastReport) -> bool {
    r.financials
        .is_some_and(|f| f.net_profit > 0.0 && f.roi_pct > HIGHLY_PROFITABLE_ROI_PCT)
}

fn is_projected_loss(_: &ParameterSet, r: &ForecastReport) -> bool {
    r.financials.is_some_and(|f| f.net_profit < 0.0)
}

fn is_low_liquidity(p: &ParameterSet, _: &ForecastReport) -> bool {
    p.liquidity_factor < LOW_LIQUIDITY
}

fn is_thin_margin(p: &ParameterSet, _: &ForecastReport) -> bool {
    p.spread_margin_pct < THIN_MARGIN_PCT
}

// --- Templates ---

fn render_reliance(_: &ParameterSet, r: &ForecastReport) -> String {
    format!(
        "{:.0}% of volume comes from existing users. Focus on push notifications and in-app promotion.",
        r.existing_contribution_pct
    )
}

fn render_acquisition(_: &ParameterSet, r: &ForecastReport) -> String {
    format!(
        "{:.0}% of volume comes from new users. The go-to-market campaign is working; consider a larger budget.",
        r.new_contribution_pct
    )
}

fn render_hype(p: &ParameterSet, _: &ForecastReport) -> String {
    match p.variant {
        Variant::Simple => format!(
            "Hype factor is {}. Be ready for heavy traffic and deeper liquidity needs.",
            p.hype_factor
        ),
        Variant::Extended => format!(
            "Hype factor is {}. This coin is going viral; prepare for heavy traffic.",
            p.hype_factor
        ),
    }
}

fn render_conversion(p: &ParameterSet, _: &ForecastReport) -> String {
    format!(
        "Conversion rate is {}%. Consider incentive campaigns such as airdrops or trading competitions.",
        p.conversion_rate_pct
    )
}

fn render_volume(_: &ParameterSet, r: &ForecastReport) -> String {
    format!(
        "Projected volume is {}. Make sure infrastructure scales and liquidity is sufficient.",
        format_currency(r.total_volume)
    )
}

fn render_profitable(_: &ParameterSet, r: &ForecastReport) -> String {
    format!(
        "ROI is {:.0}%. This listing has excellent potential; consider allocating more budget.",
        r.roi_pct().unwrap_or(0.0)
    )
}

fn render_loss(_: &ParameterSet, r: &ForecastReport) -> String {
    format!(
        "This listing is projected to lose {}. Reduce costs or raise the hype factor.",
        format_currency(r.net_profit().unwrap_or(0.0).abs())
    )
}

fn render_liquidity(p: &ParameterSet, _: &ForecastReport) -> String {
    format!(
        "Liquidity factor is {}. Slippage risk is high; provision more liquidity.",
        p.liquidity_factor
    )
}

fn render_margin(p: &ParameterSet, _: &ForecastReport) -> String {
    format!(
        "Spread margin is {}%. Profitability will be low at this rate.",
        p.spread_margin_pct
    )
}
