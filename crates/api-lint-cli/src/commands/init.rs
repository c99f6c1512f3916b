//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# api-lint configuration
# Place this file next to the document you check, or pass it with --config.

# Lowest severity that makes the run fail: "info", "warning" or "error"
fail_on = "info"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.top-level-json-object]
enabled = true
# severity = "warning"  # Override default severity

[rules.pluralized-resource-names]
enabled = true
# Segments that are not resources
ignore = ["health"]

[rules.snake-case-properties]
enabled = true
# Property names accepted as-is
ignore = ["_links", "_embedded"]

# [rules.no-uri-versioning]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("api-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created api-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit api-lint.toml to configure rules");
    println!("  2. Run: api-lint <SPEC_FILE>");

    Ok(())
}
