use crate::enums::Variant;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// The complete set of user-adjustable forecast inputs.
///
/// Rates are percent-as-number (3.0 means 3%) and monetary values are in base
/// currency units. The serialized names match the field names used by existing
/// dashboard consumers, so they are kept camelCase with `MAU` upper-cased.
///
/// The calculator never validates a `ParameterSet`; callers that accept user input
/// are expected to run [`ParameterSet::validate`] first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    #[serde(default)]
    pub variant: Variant,

    /// Monthly active users of the exchange.
    #[serde(rename = "MAU")]
    pub mau: u64,
    #[serde(rename = "conversionRate", alias = "conversionRatePercent")]
    pub conversion_rate_pct: f64,
    pub avg_trade: f64,
    pub hype_factor: f64,
    /// Slippage haircut on volume. The simple variant treats this as 1.
    #[serde(default = "neutral_liquidity")]
    pub liquidity_factor: f64,

    pub new_users: u64,
    pub avg_trade_new: f64,

    // Extended variant only.
    #[serde(default, rename = "spreadMargin", alias = "spreadMarginPercent")]
    pub spread_margin_pct: f64,
    #[serde(default)]
    pub marketing_cost: f64,
    #[serde(default)]
    pub liquidity_cost: f64,
}

fn neutral_liquidity() -> f64 {
    1.0
}

impl ParameterSet {
    /// Launch defaults for the simple volume-only model.
    pub fn simple_defaults() -> Self {
        Self {
            variant: Variant::Simple,
            mau: 100_000,
            conversion_rate_pct: 3.0,
            avg_trade: 5_000_000.0,
            hype_factor: 1.2,
            liquidity_factor: 1.0,
            new_users: 1_500,
            avg_trade_new: 2_000_000.0,
            spread_margin_pct: 0.0,
            marketing_cost: 0.0,
            liquidity_cost: 0.0,
        }
    }

    /// Launch defaults for the model with liquidity and profit accounting.
    pub fn extended_defaults() -> Self {
        Self {
            variant: Variant::Extended,
            hype_factor: 1.3,
            liquidity_factor: 0.95,
            spread_margin_pct: 0.15,
            marketing_cost: 50_000_000.0,
            liquidity_cost: 100_000_000.0,
            ..Self::simple_defaults()
        }
    }

    pub fn defaults_for(variant: Variant) -> Self {
        match variant {
            Variant::Simple => Self::simple_defaults(),
            Variant::Extended => Self::extended_defaults(),
        }
    }

    /// The liquidity factor the pipeline actually applies.
    pub fn effective_liquidity_factor(&self) -> f64 {
        if self.variant.has_financials() {
            self.liquidity_factor
        } else {
            1.0
        }
    }

    /// Reads a parameter as a float, regardless of its storage type.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Mau => self.mau as f64,
            Parameter::ConversionRate => self.conversion_rate_pct,
            Parameter::AvgTrade => self.avg_trade,
            Parameter::HypeFactor => self.hype_factor,
            Parameter::LiquidityFactor => self.liquidity_factor,
            Parameter::NewUsers => self.new_users as f64,
            Parameter::AvgTradeNew => self.avg_trade_new,
            Parameter::MarketingCost => self.marketing_cost,
            Parameter::LiquidityCost => self.liquidity_cost,
            Parameter::SpreadMargin => self.spread_margin_pct,
        }
    }

    /// Checks every parameter used by this variant against its allowed range.
    ///
    /// Step alignment is not enforced; the bounds only guard against values the
    /// model was never calibrated for.
    pub fn validate(&self) -> Result<(), CoreError> {
        for parameter in Parameter::ALL {
            if parameter.extended_only() && !self.variant.has_financials() {
                continue;
            }
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(CoreError::NonFinite(parameter.name()));
            }
            let bounds = parameter.bounds();
            if !bounds.contains(value) {
                return Err(CoreError::OutOfRange {
                    field: parameter.name(),
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::extended_defaults()
    }
}

/// The slider range of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Bounds {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Identifies one field of a `ParameterSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Mau,
    ConversionRate,
    AvgTrade,
    HypeFactor,
    LiquidityFactor,
    NewUsers,
    AvgTradeNew,
    MarketingCost,
    LiquidityCost,
    SpreadMargin,
}

impl Parameter {
    pub const ALL: [Parameter; 10] = [
        Parameter::Mau,
        Parameter::ConversionRate,
        Parameter::AvgTrade,
        Parameter::HypeFactor,
        Parameter::LiquidityFactor,
        Parameter::NewUsers,
        Parameter::AvgTradeNew,
        Parameter::MarketingCost,
        Parameter::LiquidityCost,
        Parameter::SpreadMargin,
    ];

    /// The serialized field name.
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Mau => "MAU",
            Parameter::ConversionRate => "conversionRate",
            Parameter::AvgTrade => "avgTrade",
            Parameter::HypeFactor => "hypeFactor",
            Parameter::LiquidityFactor => "liquidityFactor",
            Parameter::NewUsers => "newUsers",
            Parameter::AvgTradeNew => "avgTradeNew",
            Parameter::MarketingCost => "marketingCost",
            Parameter::LiquidityCost => "liquidityCost",
            Parameter::SpreadMargin => "spreadMargin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Parameter::Mau => "Monthly active users",
            Parameter::ConversionRate => "Share of MAU that trades the new coin (%)",
            Parameter::AvgTrade => "Average trade size of existing users",
            Parameter::HypeFactor => "Market excitement multiplier",
            Parameter::LiquidityFactor => "Slippage haircut on volume",
            Parameter::NewUsers => "Users acquired by the listing campaign",
            Parameter::AvgTradeNew => "Average trade size of new users",
            Parameter::MarketingCost => "Marketing budget",
            Parameter::LiquidityCost => "Market-making and liquidity budget",
            Parameter::SpreadMargin => "Share of volume captured as spread (%)",
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Parameter::Mau => Bounds::new(10_000.0, 500_000.0, 10_000.0),
            Parameter::ConversionRate => Bounds::new(0.5, 10.0, 0.5),
            Parameter::AvgTrade => Bounds::new(1_000_000.0, 20_000_000.0, 500_000.0),
            Parameter::HypeFactor => Bounds::new(1.0, 2.2, 0.1),
            Parameter::LiquidityFactor => Bounds::new(0.80, 1.20, 0.01),
            Parameter::NewUsers => Bounds::new(0.0, 10_000.0, 100.0),
            Parameter::AvgTradeNew => Bounds::new(500_000.0, 10_000_000.0, 500_000.0),
            Parameter::MarketingCost => Bounds::new(0.0, 500_000_000.0, 10_000_000.0),
            Parameter::LiquidityCost => Bounds::new(0.0, 500_000_000.0, 10_000_000.0),
            Parameter::SpreadMargin => Bounds::new(0.05, 1.0, 0.05),
        }
    }

    /// Parameters that only the extended variant reads.
    pub fn extended_only(&self) -> bool {
        matches!(
            self,
            Parameter::LiquidityFactor
                | Parameter::MarketingCost
                | Parameter::LiquidityCost
                | Parameter::SpreadMargin
        )
    }
}
