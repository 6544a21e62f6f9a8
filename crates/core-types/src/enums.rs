use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects which calculation pipeline a `ParameterSet` runs through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Volume and trader projections only.
    Simple,
    /// Adds the liquidity factor and the revenue/cost/profit layer.
    #[default]
    Extended,
}

impl Variant {
    /// Returns true if the cost/revenue extension is active.
    pub fn has_financials(&self) -> bool {
        matches!(self, Variant::Extended)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Simple => write!(f, "simple"),
            Variant::Extended => write!(f, "extended"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdvisoryCategory {
    RelianceOnExistingUsers,
    StrongAcquisition,
    HighHypeWarning,
    LowConversionWarning,
    HighVolumeScaleWarning,
    HighlyProfitable,
    ProjectedLoss,
    LowLiquidityWarning,
    ThinMarginWarning,
}

impl AdvisoryCategory {
    /// The stable kebab-case tag used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryCategory::RelianceOnExistingUsers => "reliance-on-existing-users",
            AdvisoryCategory::StrongAcquisition => "strong-acquisition",
            AdvisoryCategory::HighHypeWarning => "high-hype-warning",
            AdvisoryCategory::LowConversionWarning => "low-conversion-warning",
            AdvisoryCategory::HighVolumeScaleWarning => "high-volume-scale-warning",
            AdvisoryCategory::HighlyProfitable => "highly-profitable",
            AdvisoryCategory::ProjectedLoss => "projected-loss",
            AdvisoryCategory::LowLiquidityWarning => "low-liquidity-warning",
            AdvisoryCategory::ThinMarginWarning => "thin-margin-warning",
        }
    }
}

impl fmt::Display for AdvisoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an advisory should be presented. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Positive,
    Warning,
    Critical,
}
