//! # Listing Forecast Advisor
//!
//! Selects strategic advisories for a forecast from a declarative table of
//! threshold rules. Every rule is an independent (predicate, template) pair; all
//! rules that hold fire, and the output keeps the table order.
//!
//! Extending the advisor means adding a `Rule` to the table, or building an
//! `Advisor` with a custom rule set.

use analytics::ForecastReport;
use core_types::{AdvisoryCategory, ParameterSet, Tone};
use serde::Serialize;

pub mod rules;

pub use rules::{Rule, Scope, RULES};

/// A rendered recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub category: AdvisoryCategory,
    pub tone: Tone,
    pub title: &'static str,
    pub text: String,
}

/// Evaluates a rule table against a parameter set and its forecast.
#[derive(Debug, Clone)]
pub struct Advisor {
    rules: Vec<Rule>,
}

impl Advisor {
    /// Creates an advisor with the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(RULES.to_vec())
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Appends a rule after the existing ones.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns every advisory whose rule applies, in rule order.
    pub fn advise(&self, params: &ParameterSet, report: &ForecastReport) -> Vec<Advisory> {
        let advisories: Vec<Advisory> = self
            .rules
            .iter()
            .filter(|rule| rule.scope.includes(params.variant))
            .filter(|rule| (rule.applies)(params, report))
            .map(|rule| Advisory {
                category: rule.category,
                tone: rule.tone,
                title: rule.title,
                text: (rule.render)(params, report),
            })
            .collect();

        tracing::debug!(
            fired = advisories.len(),
            evaluated = self.rules.len(),
            "Advisory rules evaluated."
        );
        advisories
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper that evaluates the built-in rule table.
pub fn advise(params: &ParameterSet, report: &ForecastReport) -> Vec<Advisory> {
    Advisor::new().advise(params, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::compute;
    use core_types::Variant;

    fn categories(params: &ParameterSet) -> Vec<AdvisoryCategory> {
        advise(params, &compute(params))
            .into_iter()
            .map(|a| a.category)
            .collect()
    }

    #[test]
    fn simple_defaults_only_flag_reliance() {
        // 85.7% of volume comes from existing users.
        assert_eq!(
            categories(&ParameterSet::simple_defaults()),
            vec![AdvisoryCategory::RelianceOnExistingUsers]
        );
    }

    #[test]
    fn extended_defaults_project_a_loss() {
        let params = ParameterSet::extended_defaults();
        let advisories = advise(&params, &compute(&params));
        let loss = advisories
            .iter()
            .find(|a| a.category == AdvisoryCategory::ProjectedLoss)
            .expect("loss advisory");

        assert_eq!(loss.tone, Tone::Critical);
        assert!(loss.text.contains("116.7 million"), "{}", loss.text);
        assert_eq!(
            categories(&params),
            vec![
                AdvisoryCategory::RelianceOnExistingUsers,
                AdvisoryCategory::ProjectedLoss,
            ]
        );
    }

    #[test]
    fn hype_threshold_depends_on_variant() {
        let mut simple = ParameterSet::simple_defaults();
        simple.hype_factor = 1.5;
        assert!(categories(&simple).contains(&AdvisoryCategory::HighHypeWarning));

        let mut extended = ParameterSet::extended_defaults();
        extended.hype_factor = 1.5;
        assert!(!categories(&extended).contains(&AdvisoryCategory::HighHypeWarning));
        extended.hype_factor = 1.8;
        assert!(categories(&extended).contains(&AdvisoryCategory::HighHypeWarning));
    }

    #[test]
    fn extended_rules_never_fire_for_simple_variant() {
        let mut params = ParameterSet::simple_defaults();
        params.liquidity_factor = 0.8;
        params.spread_margin_pct = 0.0;
        let fired = categories(&params);

        assert!(!fired.contains(&AdvisoryCategory::LowLiquidityWarning));
        assert!(!fired.contains(&AdvisoryCategory::ThinMarginWarning));
        assert!(!fired.contains(&AdvisoryCategory::ProjectedLoss));
    }

    #[test]
    fn custom_rules_are_appended_in_order() {
        fn always(_: &ParameterSet, _: &ForecastReport) -> bool {
            true
        }
        fn text(_: &ParameterSet, _: &ForecastReport) -> String {
            "always".to_string()
        }

        let mut advisor = Advisor::with_rules(Vec::new());
        advisor.push(Rule {
            category: AdvisoryCategory::StrongAcquisition,
            scope: Scope::All,
            tone: Tone::Info,
            title: "Always",
            applies: always,
            render: text,
        });
        let params = ParameterSet {
            variant: Variant::Simple,
            ..ParameterSet::simple_defaults()
        };
        let out = advisor.advise(&params, &compute(&params));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "always");
        assert_eq!(advisor.rules().len(), 1);
    }
}
