//! Shared output formatting for lint results.

use anyhow::Result;
use api_lint_core::{LintResult, Severity, Violation};
use std::fmt::Write as _;
use std::io::IsTerminal;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, verbose: bool) -> Result<()> {
    let color = format == OutputFormat::Text && std::io::stdout().is_terminal();
    print!("{}", render(result, format, verbose, color)?);
    Ok(())
}

/// Renders lint results as they are printed.
pub fn render(
    result: &LintResult,
    format: OutputFormat,
    verbose: bool,
    color: bool,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result, verbose, color),
        OutputFormat::Compact => render_compact(result),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(result)?),
    })
}

fn severity_label(severity: Severity, color: bool) -> String {
    if !color {
        return severity.to_string();
    }
    let code = match severity {
        Severity::Error => "31",
        Severity::Warning => "33",
        Severity::Info => "34",
    };
    format!("\x1b[{code}m{severity}\x1b[0m")
}

fn render_text(result: &LintResult, verbose: bool, color: bool) -> String {
    let mut out = String::new();

    for violation in &result.violations {
        let _ = writeln!(
            out,
            "{}: {} [{}] {} ({})",
            violation.location.pointer,
            severity_label(violation.severity, color),
            violation.code,
            violation.message,
            violation.rule,
        );
        if verbose {
            for hint in violation.hints() {
                let _ = writeln!(out, "  = {hint}");
            }
        }
    }

    if verbose {
        let (errors, warnings, _) = result.count_by_severity();
        let summary = result.summary();
        if color {
            let summary_color = if errors > 0 {
                "31"
            } else if warnings > 0 {
                "33"
            } else {
                "32"
            };
            let _ = writeln!(out, "\x1b[{summary_color}m{summary}\x1b[0m");
        } else {
            let _ = writeln!(out, "{summary}");
        }
    }

    out
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(Violation::to_string)
        .map(|line| line + "\n")
        .collect()
}
