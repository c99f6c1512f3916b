//! List rules command implementation.

use anyhow::Result;
use api_lint_core::RuleRegistry;
use std::fmt::{self, Write};

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    let mut out = String::new();
    render(&api_lint_rules::registry(), &mut out)?;
    print!("{out}");
    Ok(())
}

fn render(registry: &RuleRegistry, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "Available rules:\n")?;
    writeln!(out, "{:<8} {:<32} Description", "Code", "Name")?;
    writeln!(out, "{}", "-".repeat(100))?;

    for rule in registry.iter() {
        writeln!(
            out,
            "{:<8} {:<32} {}",
            rule.code(),
            rule.name(),
            rule.description()
        )?;
    }

    writeln!(out, "\nUse --rules to run specific rules, e.g.:")?;
    writeln!(out, "  api-lint --rules no-trailing-slash,snake-case-properties api.yaml")?;
    writeln!(out, "  api-lint --rules API001,API005 api.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_rule_in_order() {
        let mut out = String::new();
        render(&api_lint_rules::registry(), &mut out).unwrap();
        let codes: Vec<&str> = out
            .lines()
            .filter(|line| line.starts_with("API"))
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(codes.len(), 8);
        assert_eq!(codes.first(), Some(&"API001"));
        assert_eq!(codes.last(), Some(&"API008"));
        assert!(out.contains("pluralized-resource-names"));
    }
}
