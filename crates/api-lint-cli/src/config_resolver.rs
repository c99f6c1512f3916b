//! Finds and loads the configuration that applies to a checked document.
//!
//! Lookup order:
//!
//! 1. `--config <FILE>`
//! 2. `api-lint.toml`, then `.api-lint.toml`, in the document's directory
//! 3. `config.toml` in `$API_LINT_CONFIG_DIR`, or in `~/.api-lint/`
//! 4. built-in defaults

use anyhow::{Context, Result};
use api_lint_core::Config;
use std::fmt;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_NAMES: &[&str] = &["api-lint.toml", ".api-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Where the configuration for a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to the document.
    Local(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Reads the configuration, or returns the defaults for
    /// [`ConfigSource::Default`].
    pub fn load(&self) -> Result<Config> {
        let path = match self {
            Self::Explicit(path) | Self::Local(path) => {
                tracing::info!("Using config: {self}");
                path
            }
            Self::Global(path) => {
                tracing::info!("No config next to the document; using {self}");
                path
            }
            Self::Default => {
                tracing::debug!("Using {self}");
                return Ok(Config::default());
            }
        };
        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "{} (--config)", p.display()),
            Self::Local(p) => write!(f, "{}", p.display()),
            Self::Global(p) => write!(f, "{} (global)", p.display()),
            Self::Default => f.write_str("built-in defaults"),
        }
    }
}

/// Resolves the configuration source for the document at `document`.
#[must_use]
pub fn resolve(document: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(document, explicit, global_config_dir().as_deref())
}

fn resolve_with_global(
    document: &Path,
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    let dir = document_dir(document);
    if let Some(local) = LOCAL_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        return ConfigSource::Local(local);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// The directory holding `document`; `.` for a bare file name.
fn document_dir(document: &Path) -> &Path {
    document
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// `$API_LINT_CONFIG_DIR`, or `~/.api-lint/`.
fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os("API_LINT_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|h| h.join(".api-lint")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_lint_core::Severity;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_config_wins_without_existence_check() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("api-lint.toml"), "").unwrap();

        let source = resolve_with_global(
            &tmp.path().join("api.yaml"),
            Some(Path::new("missing.toml")),
            None,
        );
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("missing.toml")));
        assert!(source.load().is_err());
    }

    #[test]
    fn config_next_to_nested_document() {
        let tmp = TempDir::new().unwrap();
        let specs = tmp.path().join("apis/orders");
        fs::create_dir_all(&specs).unwrap();
        fs::write(specs.join(".api-lint.toml"), "").unwrap();
        fs::write(specs.join("api-lint.toml"), "").unwrap();
        fs::write(tmp.path().join("api-lint.toml"), "").unwrap();

        let source = resolve_with_global(&specs.join("orders.yaml"), None, None);
        assert_eq!(source, ConfigSource::Local(specs.join("api-lint.toml")));
    }

    #[test]
    fn directory_named_like_a_config_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("api-lint.toml")).unwrap();
        fs::write(tmp.path().join(".api-lint.toml"), "").unwrap();

        let source = resolve_with_global(&tmp.path().join("api.yaml"), None, None);
        assert_eq!(source, ConfigSource::Local(tmp.path().join(".api-lint.toml")));
    }

    #[test]
    fn bare_file_name_looks_in_current_directory() {
        assert_eq!(document_dir(Path::new("api.yaml")), Path::new("."));
        assert_eq!(document_dir(Path::new("specs/api.yaml")), Path::new("specs"));
    }

    #[test]
    fn global_config_only_without_local_one() {
        let docs = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "fail_on = \"error\"\n").unwrap();
        let document = docs.path().join("api.yaml");

        let source = resolve_with_global(&document, None, Some(global.path()));
        assert_eq!(source, ConfigSource::Global(global.path().join("config.toml")));
        assert_eq!(source.load().unwrap().fail_threshold(), Severity::Error);

        fs::write(docs.path().join("api-lint.toml"), "").unwrap();
        let source = resolve_with_global(&document, None, Some(global.path()));
        assert!(matches!(source, ConfigSource::Local(_)));
    }

    #[test]
    fn defaults_when_nothing_is_found() {
        let docs = TempDir::new().unwrap();
        let empty_global = TempDir::new().unwrap();

        let source = resolve_with_global(
            &docs.path().join("api.yaml"),
            None,
            Some(empty_global.path()),
        );
        assert_eq!(source, ConfigSource::Default);
        assert_eq!(source.load().unwrap().fail_threshold(), Severity::Info);
    }

    #[test]
    fn display_names_the_source() {
        let p = PathBuf::from("cfg.toml");
        assert_eq!(ConfigSource::Explicit(p.clone()).to_string(), "cfg.toml (--config)");
        assert_eq!(ConfigSource::Local(p.clone()).to_string(), "cfg.toml");
        assert_eq!(ConfigSource::Global(p).to_string(), "cfg.toml (global)");
        assert_eq!(ConfigSource::Default.to_string(), "built-in defaults");
    }
}
