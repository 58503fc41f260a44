use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult, ISSUE_STATE, Record, RecordKind};

pub const CONFIG_FILENAME: &str = "prstats.toml";

const DEFAULT_REPO: &str = "kottans/frontend-2021-homeworks";
const DEFAULT_HOST: &str = "github.com";
const DEFAULT_OUTPUT: &str = "pr-stats.md";
const DEFAULT_TITLE: &str = "Open and merged PRs by task labels";
const DEFAULT_LIMIT: u32 = 200;
const DEFAULT_LABELS: [&str; 7] = [
    "Hooli-style Popup",
    "JS DOM",
    "JS pre-OOP",
    "JS OOP",
    "JS post-OOP",
    "Memory Pair Game",
    "Friends App",
];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

/// A pull-request lifecycle state to query, in precedence order.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StateConfig {
    pub name: String,
    /// Suffix shown after the number; defaults to the first letter of `name`
    pub code: Option<String>,
    /// Bold numbers render without a suffix
    pub bold: Option<bool>,
}

impl StateConfig {
    pub fn new(name: &str, bold: bool) -> Self {
        Self {
            name: name.to_string(),
            code: None,
            bold: Some(bold),
        }
    }

    pub fn code(&self) -> String {
        match &self.code {
            Some(code) => code.clone(),
            None => self.name.chars().take(1).collect(),
        }
    }

    pub fn bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            name: self.name.clone(),
            code: Some(self.code()),
            bold: Some(self.bold()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct IssueConfig {
    pub enabled: Option<bool>,
    pub code: Option<String>,
}

impl IssueConfig {
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("i")
    }

    pub fn to_effective(&self) -> Self {
        Self {
            enabled: Some(self.enabled()),
            code: Some(self.code().to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub repo: Option<String>,
    pub host: Option<String>,
    pub gh: Option<String>,
    pub output: Option<String>,
    pub title: Option<String>,
    pub limit: Option<u32>,
    pub max_concurrency: Option<usize>, // None = unbounded (semantic)
    pub labels: Option<Vec<String>>,
    pub states: Option<Vec<StateConfig>>,

    // Nested sections
    pub issues: Option<IssueConfig>,
    pub log: Option<LogConfig>,
}

impl Config {
    pub fn repo(&self) -> &str {
        self.repo.as_deref().unwrap_or(DEFAULT_REPO)
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn gh(&self) -> &str {
        self.gh.as_deref().unwrap_or("gh")
    }

    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    pub fn labels(&self) -> Vec<String> {
        match &self.labels {
            Some(labels) => labels.clone(),
            None => DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn states(&self) -> Vec<StateConfig> {
        match &self.states {
            Some(states) => states.clone(),
            None => vec![
                StateConfig::new("merged", true),
                StateConfig::new("open", false),
            ],
        }
    }

    pub fn issues(&self) -> IssueConfig {
        self.issues.clone().unwrap_or_default()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    /// Base URL of the repository, always ending in a slash
    pub fn repo_url(&self) -> String {
        format!(
            "https://{}/{}/",
            self.host().trim_end_matches('/'),
            self.repo().trim_matches('/')
        )
    }

    /// Suffix code and boldness for a record's state
    pub fn style_for(&self, record: &Record) -> (String, bool) {
        if record.kind == RecordKind::Issue || record.state == ISSUE_STATE {
            return (self.issues().code().to_string(), false);
        }
        match self.states().iter().find(|s| s.name == record.state) {
            Some(state) => (state.code(), state.bold()),
            None => (record.state.chars().take(1).collect(), false),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.labels().is_empty() {
            return Err(AppError::Config("at least one label is required".into()));
        }
        let states = self.states();
        if states.is_empty() {
            return Err(AppError::Config("at least one state is required".into()));
        }
        let mut seen = HashSet::new();
        for state in &states {
            if state.name.trim().is_empty() {
                return Err(AppError::Config("state names must not be empty".into()));
            }
            if state.name == ISSUE_STATE {
                return Err(AppError::Config(format!(
                    "state name \"{ISSUE_STATE}\" is reserved for the issue pass"
                )));
            }
            if !seen.insert(state.name.as_str()) {
                return Err(AppError::Config(format!(
                    "duplicate state \"{}\"",
                    state.name
                )));
            }
        }
        if self.limit() == 0 {
            return Err(AppError::Config("limit must be greater than zero".into()));
        }
        if self.max_concurrency == Some(0) {
            return Err(AppError::Config(
                "max_concurrency must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn to_effective(&self) -> Self {
        Self {
            repo: Some(self.repo().to_string()),
            host: Some(self.host().to_string()),
            gh: Some(self.gh().to_string()),
            output: Some(self.output().to_string()),
            title: Some(self.title().to_string()),
            limit: Some(self.limit()),
            max_concurrency: self.max_concurrency,
            labels: Some(self.labels()),
            states: Some(self.states().iter().map(|s| s.to_effective()).collect()),
            issues: Some(self.issues().to_effective()),
            log: Some(self.log().to_effective()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<String>,
    pub repo: Option<String>,
    pub limit: Option<u32>,
    pub max_concurrency: Option<usize>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Load, merge, and validate the effective config, then install it globally.
pub fn init_with_overrides(explicit: Option<&Path>, overrides: &CliOverrides) -> AppResult<()> {
    let cfg = load(explicit, overrides)?;
    let _ = CONFIG.set(cfg);
    Ok(())
}

pub fn load(explicit: Option<&Path>, overrides: &CliOverrides) -> AppResult<Config> {
    let mut cfg = Config::default();

    // 1) Config file: explicit path, else nearest ancestor, else user config dir
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_nearest_config_file().or_else(find_user_config_file),
    };
    if let Some(path) = path {
        let file_cfg = read_config_file(&path)?;
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    cfg.validate()?;
    Ok(cfg)
}

fn read_config_file(path: &Path) -> AppResult<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str::<Config>(&contents)?)
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Top-level fields replace defaults wholesale
    if file.repo.is_some() {
        cfg.repo = file.repo.clone();
    }
    if file.host.is_some() {
        cfg.host = file.host.clone();
    }
    if file.gh.is_some() {
        cfg.gh = file.gh.clone();
    }
    if file.output.is_some() {
        cfg.output = file.output.clone();
    }
    if file.title.is_some() {
        cfg.title = file.title.clone();
    }
    if file.limit.is_some() {
        cfg.limit = file.limit;
    }
    if file.max_concurrency.is_some() {
        cfg.max_concurrency = file.max_concurrency;
    }
    if file.labels.is_some() {
        cfg.labels = file.labels.clone();
    }
    if file.states.is_some() {
        cfg.states = file.states.clone();
    }

    // Merge issues section
    if let Some(file_issues) = &file.issues {
        let mut issues = cfg.issues.clone().unwrap_or_default();
        if file_issues.enabled.is_some() {
            issues.enabled = file_issues.enabled;
        }
        if file_issues.code.is_some() {
            issues.code = file_issues.code.clone();
        }
        cfg.issues = Some(issues);
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if let Some(output) = &overrides.output
        && !output.trim().is_empty()
    {
        cfg.output = Some(output.clone());
    }
    if let Some(repo) = &overrides.repo
        && !repo.trim().is_empty()
    {
        cfg.repo = Some(repo.trim().to_string());
    }
    if overrides.limit.is_some() {
        cfg.limit = overrides.limit;
    }
    if overrides.max_concurrency.is_some() {
        cfg.max_concurrency = overrides.max_concurrency;
    }

    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

fn find_user_config_file() -> Option<PathBuf> {
    let candidate = dirs_next::config_dir()?.join("prstats").join("config.toml");
    candidate.exists().then_some(candidate)
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
