//! The built-in rule set.

use crate::{
    pluralized_resource_names, snake_case_properties, CorrectHttpMethods,
    LowercasePathSegments, NoTrailingSlash, NoUriVersioning, PluralizedResourceNames,
    SnakeCaseProperties, SnakeCaseQueryParams, TopLevelJsonObject,
};
use api_lint_core::{Config, RuleBox, RuleRegistry};
use tracing::debug;

/// Returns every built-in rule with default settings, in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(TopLevelJsonObject::new()),
        Box::new(NoTrailingSlash::new()),
        Box::new(NoUriVersioning::new()),
        Box::new(PluralizedResourceNames::new()),
        Box::new(SnakeCaseProperties::new()),
        Box::new(CorrectHttpMethods::new()),
        Box::new(LowercasePathSegments::new()),
        Box::new(SnakeCaseQueryParams::new()),
    ]
}

/// Returns a registry holding every built-in rule.
#[must_use]
pub fn registry() -> RuleRegistry {
    RuleRegistry::new(all_rules())
}

/// Returns a registry whose rules carry the options set in `config`.
///
/// Enablement and severity overrides are applied by the evaluator; only
/// rule-specific options are read here.
#[must_use]
pub fn registry_from_config(config: &Config) -> RuleRegistry {
    let ignored = |name: &str| {
        let ignore = config
            .rule(name)
            .map(|rule| rule.get_str_array("ignore"))
            .unwrap_or_default();
        if !ignore.is_empty() {
            debug!("{name}: ignoring {ignore:?}");
        }
        ignore
    };

    RuleRegistry::new(vec![
        Box::new(TopLevelJsonObject::new()),
        Box::new(NoTrailingSlash::new()),
        Box::new(NoUriVersioning::new()),
        Box::new(PluralizedResourceNames::new().ignore(ignored(pluralized_resource_names::NAME))),
        Box::new(SnakeCaseProperties::new().ignore(ignored(snake_case_properties::NAME))),
        Box::new(CorrectHttpMethods::new()),
        Box::new(LowercasePathSegments::new()),
        Box::new(SnakeCaseQueryParams::new()),
    ])
}
