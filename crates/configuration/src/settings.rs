use crate::error::ConfigError;
use chrono::NaiveDate;
use core_types::{ParameterSet, Variant};
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub forecast: ForecastSettings,
    #[serde(default)]
    pub logging: LogSettings,
}

/// Which model to run and with which inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    pub variant: Variant,
    /// Reject parameter sets outside the calibrated slider ranges.
    pub enforce_bounds: bool,
    /// Labels the daily series with calendar dates when set.
    pub launch_date: Option<NaiveDate>,
    /// Any subset of parameters; the rest come from the variant defaults.
    pub parameters: ParameterOverrides,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            enforce_bounds: true,
            launch_date: None,
            parameters: ParameterOverrides::default(),
        }
    }
}

impl ForecastSettings {
    /// Resolves the final `ParameterSet`: variant defaults, then overrides.
    ///
    /// Bounds are checked here, not in the calculator, when `enforce_bounds` is set.
    pub fn parameter_set(&self) -> Result<ParameterSet, ConfigError> {
        let params = self
            .parameters
            .apply(ParameterSet::defaults_for(self.variant));
        if self.enforce_bounds {
            params.validate()?;
        }
        Ok(params)
    }
}

/// Optional per-field replacements for a `ParameterSet`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(default)]
pub struct ParameterOverrides {
    /// Monthly active users.
    #[cfg_attr(feature = "clap", arg(long))]
    pub mau: Option<u64>,
    /// Conversion rate in percent (3 means 3%).
    #[cfg_attr(feature = "clap", arg(long))]
    pub conversion_rate: Option<f64>,
    /// Average trade size of existing users.
    #[cfg_attr(feature = "clap", arg(long))]
    pub avg_trade: Option<f64>,
    /// Hype multiplier.
    #[cfg_attr(feature = "clap", arg(long))]
    pub hype_factor: Option<f64>,
    /// Liquidity multiplier (extended variant).
    #[cfg_attr(feature = "clap", arg(long))]
    pub liquidity_factor: Option<f64>,
    /// Users acquired by the listing campaign.
    #[cfg_attr(feature = "clap", arg(long))]
    pub new_users: Option<u64>,
    /// Average trade size of new users.
    #[cfg_attr(feature = "clap", arg(long))]
    pub avg_trade_new: Option<f64>,
    /// Spread margin in percent (extended variant).
    #[cfg_attr(feature = "clap", arg(long))]
    pub spread_margin: Option<f64>,
    /// Marketing budget (extended variant).
    #[cfg_attr(feature = "clap", arg(long))]
    pub marketing_cost: Option<f64>,
    /// Liquidity budget (extended variant).
    #[cfg_attr(feature = "clap", arg(long))]
    pub liquidity_cost: Option<f64>,
}

impl ParameterOverrides {
    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: ParameterOverrides) -> Self {
        Self {
            mau: other.mau.or(self.mau),
            conversion_rate: other.conversion_rate.or(self.conversion_rate),
            avg_trade: other.avg_trade.or(self.avg_trade),
            hype_factor: other.hype_factor.or(self.hype_factor),
            liquidity_factor: other.liquidity_factor.or(self.liquidity_factor),
            new_users: other.new_users.or(self.new_users),
            avg_trade_new: other.avg_trade_new.or(self.avg_trade_new),
            spread_margin: other.spread_margin.or(self.spread_margin),
            marketing_cost: other.marketing_cost.or(self.marketing_cost),
            liquidity_cost: other.liquidity_cost.or(self.liquidity_cost),
        }
    }

    /// Returns `base` with every set field replaced.
    pub fn apply(&self, base: ParameterSet) -> ParameterSet {
        ParameterSet {
            variant: base.variant,
            mau: self.mau.unwrap_or(base.mau),
            conversion_rate_pct: self.conversion_rate.unwrap_or(base.conversion_rate_pct),
            avg_trade: self.avg_trade.unwrap_or(base.avg_trade),
            hype_factor: self.hype_factor.unwrap_or(base.hype_factor),
            liquidity_factor: self.liquidity_factor.unwrap_or(base.liquidity_factor),
            new_users: self.new_users.unwrap_or(base.new_users),
            avg_trade_new: self.avg_trade_new.unwrap_or(base.avg_trade_new),
            spread_margin_pct: self.spread_margin.unwrap_or(base.spread_margin_pct),
            marketing_cost: self.marketing_cost.unwrap_or(base.marketing_cost),
            liquidity_cost: self.liquidity_cost.unwrap_or(base.liquidity_cost),
        }
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// An `EnvFilter` directive. `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Enables a daily rolling log file in this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            directory: None,
            file_prefix: "listing-forecast.log".to_string(),
        }
    }
}
