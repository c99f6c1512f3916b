//! Check command implementation.

use anyhow::Result;
use api_lint_core::{Document, Evaluator};
use api_lint_rules::registry_from_config;
use std::path::Path;
use std::process::ExitCode;

use crate::config_resolver;
use crate::CheckArgs;

/// Exit status when violations reach the `fail_on` threshold.
const EXIT_VIOLATIONS: u8 = 1;

/// Runs the check command.
///
/// Returns the process exit code: success when no violation reaches the
/// configured threshold.
pub fn run(
    spec_file: &Path,
    args: &CheckArgs,
    verbose: bool,
    explicit_config: Option<&Path>,
) -> Result<ExitCode> {
    let config = config_resolver::resolve(spec_file, explicit_config).load()?;

    let document = Document::from_file(spec_file)?;

    let mut registry = registry_from_config(&config);
    if let Some(filter) = &args.rules {
        let selectors: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        for unknown in registry.retain_selected(&selectors) {
            tracing::warn!("Unknown rule: {}", unknown);
        }
    }

    let evaluator = Evaluator::builder().registry(registry).config(config).build();

    tracing::info!(
        "Checking {} with {} rules",
        spec_file.display(),
        evaluator.rule_count()
    );

    let result = evaluator.evaluate(&document, spec_file);

    super::output::print(&result, args.format, verbose)?;

    if result.has_violations_at(evaluator.config().fail_threshold()) {
        return Ok(ExitCode::from(EXIT_VIOLATIONS));
    }

    Ok(ExitCode::SUCCESS)
}
