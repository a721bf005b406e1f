//! Configuration loading and validation.
//!
//! Values are layered with [`figment`], later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`Config::default`]).
//! 2. The user configuration file in the platform config directory, if any.
//! 3. An explicitly passed file (`.toml`, `.yaml`/`.yml` or `.json`).
//! 4. `SOBOOK_`-prefixed environment variables, e.g. `SOBOOK_BOOKS_DIR`.
//!
//! ```toml
//! dump_dir = "stack-overflow-docs-dump"
//! books_dir = "books"
//!
//! [[books]]
//! title = "Python Language"
//! name = "Python"
//! import = true
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::instrument;

pub const ENV_PREFIX: &str = "SOBOOK_";
pub const DEFAULT_DUMP_DIR: &str = "stack-overflow-docs-dump";
pub const DEFAULT_BOOKS_DIR: &str = "books";

/// Top-level configuration for an import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the compressed dump files.
    pub dump_dir: PathBuf,
    /// Root of the generated book tree.
    pub books_dir: PathBuf,
    /// Known books, in processing order.
    pub books: Vec<BookConfig>,
}
impl Default for Config {
    fn default() -> Self {
        Self { dump_dir: PathBuf::from(DEFAULT_DUMP_DIR), books_dir: PathBuf::from(DEFAULT_BOOKS_DIR), books: vec![] }
    }
}

/// A book that can be generated from one tag of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookConfig {
    /// Exact title of the source tag.
    pub title: String,
    /// Display name of the generated book; empty means "same as `title`".
    #[serde(default)]
    pub name: String,
    /// Only books with `import = true` are generated.
    #[serde(default)]
    pub import: bool,
}
impl BookConfig {
    pub fn new(title: impl Into<String>, name: impl Into<String>, import: bool) -> Self {
        Self { title: title.into(), name: name.into(), import }
    }

    /// The name the book is published under.
    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => &self.title,
            name => name,
        }
    }
}

impl Config {
    /// Location of the per-user configuration file, if the platform has one.
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sobook").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the user configuration, `explicit` (if given) and the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_layers(Self::user_config_path(), explicit)
    }

    /// Same as [`load`](Self::load), with the user configuration location supplied by the caller.
    #[instrument(level = "debug", skip_all, fields(user = ?user, explicit = ?explicit))]
    pub fn load_layers(user: Option<PathBuf>, explicit: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(user) = user {
            // Missing files are silently skipped by figment's file providers.
            figment = figment.merge(Toml::file(user));
        }
        if let Some(path) = explicit {
            if !path.is_file() {
                exn::bail!(ErrorKind::NotFound(path.to_path_buf()));
            }
            figment = merge_file(figment, path);
        }
        let config: Config = figment.merge(Env::prefixed(ENV_PREFIX)).extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        tracing::debug!(books = config.books.len(), imported = config.imported().count(), "configuration loaded");
        Ok(config)
    }

    /// Books selected for import, in configured order.
    pub fn imported(&self) -> impl Iterator<Item = &BookConfig> {
        self.books.iter().filter(|book| book.import)
    }

    /// Rejects configurations that can be loaded but not run.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for book in &self.books {
            if book.title.trim().is_empty() {
                exn::bail!(ErrorKind::Invalid("book with an empty title".to_string()));
            }
            if book.import && !seen.insert(book.title.as_str()) {
                exn::bail!(ErrorKind::Invalid(format!("book '{}' is imported more than once", book.title)));
            }
        }
        Ok(())
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()).map(str::to_lowercase).as_deref() {
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        Some("json") => figment.merge(Json::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load_layers(None, None).unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.imported().count(), 0);
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "sobook.toml",
                r#"
                books_dir = "out"

                [[books]]
                title = "Go"
                import = true

                [[books]]
                title = "Python Language"
                name = "Python"
                "#,
            )?;
            jail.set_env("SOBOOK_BOOKS_DIR", "elsewhere");

            let config = Config::load_layers(None, Some(Path::new("sobook.toml"))).unwrap();
            assert_eq!(config.dump_dir, PathBuf::from(DEFAULT_DUMP_DIR));
            assert_eq!(config.books_dir, PathBuf::from("elsewhere"));
            assert_eq!(config.books.len(), 2);
            let imported: Vec<_> = config.imported().map(|b| b.title.as_str()).collect();
            assert_eq!(imported, vec!["Go"]);
            Ok(())
        });
    }

    #[test]
    fn test_user_file_overridden_by_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("user.toml", r#"dump_dir = "user-dump""#)?;
            jail.create_file("explicit.json", r#"{"books_dir": "json-books"}"#)?;

            let config =
                Config::load_layers(Some(PathBuf::from("user.toml")), Some(Path::new("explicit.json"))).unwrap();
            assert_eq!(config.dump_dir, PathBuf::from("user-dump"));
            assert_eq!(config.books_dir, PathBuf::from("json-books"));
            Ok(())
        });
    }

    #[test]
    fn test_yaml_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("books.yaml");
        std::fs::write(&path, "books:\n  - title: jQuery\n    import: true\n").unwrap();

        let config = Config::load_layers(None, Some(&path)).unwrap();
        assert_eq!(config.books, vec![BookConfig::new("jQuery", "", true)]);
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nope.toml");
        let err = Config::load_layers(None, Some(&path)).unwrap_err();
        assert_eq!(*err, ErrorKind::NotFound(path));
    }

    #[rstest]
    #[case(BookConfig::new("Python Language", "Python", true), "Python")]
    #[case(BookConfig::new("Python Language", "", true), "Python Language")]
    #[case(BookConfig::new("Python Language", "  ", false), "Python Language")]
    fn test_display_name(#[case] book: BookConfig, #[case] expected: &str) {
        assert_eq!(book.display_name(), expected);
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let config = Config { books: vec![BookConfig::new(" ", "Name", false)], ..Default::default() };
        assert!(matches!(*config.validate().unwrap_err(), ErrorKind::Invalid(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_import() {
        let mut config = Config {
            books: vec![BookConfig::new("Go", "", true), BookConfig::new("Go", "Golang", false)],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        config.books[1].import = true;
        assert!(matches!(*config.validate().unwrap_err(), ErrorKind::Invalid(_)));
    }
}
