//! Configuration types for pnsearch.
//!
//! [`Config::load`] layers, lowest to highest precedence: the embedded
//! defaults, the config file (an explicit path, or
//! `~/.config/pnsearch/config.toml` when present) and `PNSEARCH__*`
//! environment variables. [`Config::defaults`] returns the embedded defaults
//! without touching the filesystem (useful in tests).

use crate::alias::{AliasError, AliasTable};
use crate::materialize::Limits;
use crate::query::QueryDefaults;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 9000

[dataset]
path  = "./data/sqlite3.db"
query = "SELECT * FROM order2 ORDER BY 登録日 DESC"

[limits]
display_rows = 1000
export_rows  = 50000

[search]
natural_order = "登録日"
sort_choices = [
    "登録日", "発注日", "納期", "納入日", "製番",
    "要求番号", "品番", "品名", "型式", "回答納期",
]
default_select = [
    "発注日", "納入日", "要求番号", "メーカ", "装置名", "品名", "型式",
    "必要数", "発注数", "発注単価", "発注金額", "工程名", "納入場所",
]

[[aliases]]
column  = "製番_品名"
display = "製番名称"

[[aliases]]
column  = "ユニットNo"
display = "要求番号"

[[aliases]]
column  = "員数"
display = "数量"

[[aliases]]
column  = "形式寸法"
display = "型式"

[[aliases]]
column  = "材質"
display = "装置名"

[[aliases]]
column  = "部品発注数"
display = "発注数"

[[aliases]]
column  = "納入場所名"
display = "納入場所"
"#;

const ENV_PREFIX: &str = "PNSEARCH";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub limits: LimitsConfig,
    pub search: SearchConfig,
    #[serde(default)]
    pub aliases: Vec<AliasConfig>,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[dataset]` section: where the table comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub path: PathBuf,
    /// SQL run against SQLite sources. Its ORDER BY must produce the
    /// descending natural order named in `[search]`.
    pub query: String,
}

/// `[limits]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub display_rows: usize,
    pub export_rows: usize,
}

/// `[search]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Default sort column. SQLite rows are taken as already descending on
    /// it; CSV rows are sorted on request.
    pub natural_order: String,
    #[serde(default)]
    pub sort_choices: Vec<String>,
    #[serde(default)]
    pub default_select: Vec<String>,
}

/// One `[[aliases]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AliasConfig {
    pub column: String,
    pub display: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path` (or the user config file) over the built-in defaults, then
    /// apply environment overrides such as `PNSEARCH__SERVER__PORT=8080`.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn alias_table(&self) -> Result<AliasTable, AliasError> {
        AliasTable::new(
            self.aliases
                .iter()
                .map(|a| (a.column.as_str(), a.display.as_str())),
        )
    }

    pub fn limits(&self) -> Limits {
        Limits {
            display_rows: self.limits.display_rows,
            export_rows: self.limits.export_rows,
        }
    }

    pub fn query_defaults(&self) -> QueryDefaults {
        QueryDefaults {
            sort_column: self.search.natural_order.clone(),
            select: self.search.default_select.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("pnsearch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
