use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use todo_fmt_engine::{Bullet, Catalog, CatalogError, FormatError, FormatMode, Formatter, HostSettings};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "TODO_FMT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid todo file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Invalid bullet catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    #[error(transparent)]
    InvalidFormat(#[from] FormatError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format_on_save: bool,
    pub remove_completed_on_save: bool,
    /// File name globs formatted in todo mode. Everything else is notes.
    pub todo_patterns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_chars: Option<Vec<char>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<Bullet>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format_on_save: true,
            remove_completed_on_save: false,
            todo_patterns: vec!["*.todo".to_string()],
            rule_chars: None,
            delimiters: None,
            bullets: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Surface bad globs at load time rather than on first use
        config.todo_globs()?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        Self::config_path_from(std::env::var(CONFIG_ENV_VAR).ok().as_deref())
    }

    fn config_path_from(override_path: Option<&str>) -> PathBuf {
        if let Some(path) = override_path.filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            return Self::expand_path(&path).unwrap_or(path);
        }
        let config_dir = shellexpand::tilde("~/.config/todo-fmt");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    fn todo_globs(&self) -> Result<Vec<glob::Pattern>, ConfigError> {
        self.todo_patterns
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Whether `path` matches one of the todo patterns. Patterns are tried
    /// against the file name and against the whole path.
    pub fn is_todo_file(&self, path: &Path) -> Result<bool, ConfigError> {
        let file_name = path.file_name().map(|n| n.to_string_lossy());
        Ok(self.todo_globs()?.iter().any(|glob| {
            glob.matches_path(path) || file_name.as_deref().is_some_and(|n| glob.matches(n))
        }))
    }

    pub fn mode_for_path(&self, path: &Path) -> Result<FormatMode, ConfigError> {
        Ok(if self.is_todo_file(path)? {
            FormatMode::Todo
        } else {
            FormatMode::Notes
        })
    }

    /// Builds the formatter described by this config, falling back to the
    /// built-in catalog, rule characters and delimiters for unset fields.
    pub fn formatter(&self) -> Result<Formatter, ConfigError> {
        let catalog = match &self.bullets {
            Some(bullets) => Catalog::new(bullets.iter().map(|b| (b.name.as_str(), b.symbol)))?,
            None => Catalog::default(),
        };

        let mut formatter = Formatter::new(catalog);
        if let Some(rule_chars) = &self.rule_chars {
            formatter = formatter.with_rule_chars(rule_chars.iter().copied())?;
        }
        if let Some(delimiters) = &self.delimiters {
            formatter = formatter.with_delimiters(delimiters.iter().map(String::as_str))?;
        }
        Ok(formatter)
    }

    pub fn host_settings(&self) -> HostSettings {
        let mut settings = HostSettings::new();
        settings
            .set(HostSettings::FORMAT_ON_SAVE, self.format_on_save)
            .set(
                HostSettings::REMOVE_COMPLETED_ON_SAVE,
                self.remove_completed_on_save,
            );
        settings
    }
}
