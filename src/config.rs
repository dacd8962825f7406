/// Configuration resolution module
///
/// This module handles:
/// - Locating and parsing the optional TOML config file
/// - Layering CLI flags over file values over defaults
/// - Choosing the record source
///
/// The result is an immutable `ReportConfig` resolved once at startup.
use crate::cli::{self, CliArgs};
use crate::error::ConfigError;
use crate::report::{DocumentOptions, HeadlineMode};
use crate::source::{FileSource, FixtureSource, HttpSource, RecordSource};
use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TITLE: &str = "Flight Log System – Report";
const DEFAULT_SUBTITLE: &str = "Comprehensive flight event tracking and documentation";
const DEFAULT_OUTPUT_HTML: &str = "skylinq-report.html";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const LOCAL_CONFIG_FILE: &str = "skylinq-report.toml";
const CONFIG_ENV_VAR: &str = "SKYLINQ_REPORT_CONFIG";

/// Values accepted in the TOML config file; all optional
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub use_static_placeholders: Option<bool>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_html: Option<PathBuf>,
    pub output_json: Option<PathBuf>,
}

/// Where records are loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum SourceSpec {
    Fixture,
    File(PathBuf),
    Http { url: String, timeout: Duration },
}

impl SourceSpec {
    /// Instantiate the matching record source
    pub fn into_source(self) -> Box<dyn RecordSource> {
        match self {
            SourceSpec::Fixture => Box::new(FixtureSource),
            SourceSpec::File(path) => Box::new(FileSource { path }),
            SourceSpec::Http { url, timeout } => Box::new(HttpSource::new(url, timeout)),
        }
    }
}

/// Fully resolved run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub source: SourceSpec,
    pub title: String,
    pub subtitle: String,
    /// Legacy placeholder headline figures instead of derived ones
    pub use_static_placeholders: bool,
    pub output_html: Option<PathBuf>,
    pub output_json: Option<PathBuf>,
    pub print_json: bool,
    pub quiet: bool,
}

impl ReportConfig {
    pub fn headline_mode(&self) -> HeadlineMode {
        HeadlineMode::from_static_flag(self.use_static_placeholders)
    }

    /// Document options for a render happening now
    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions::new(self.title.clone(), self.subtitle.clone(), self.headline_mode())
    }
}

/// Build the run configuration from CLI arguments and the config file.
///
/// Precedence: CLI flags, then the config file, then built-in defaults.
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, ConfigError> {
    let file = match locate_config_file(args)? {
        Some(path) => load_config_file(&path)?,
        None => FileConfig::default(),
    };
    resolve(args, file)
}

/// Find the config file to use, if any.
///
/// An explicitly named file (flag or environment) must exist; the implicit
/// locations are only used when present.
fn locate_config_file(args: &CliArgs) -> Result<Option<PathBuf>, ConfigError> {
    let explicit = args.config.clone().or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::Invalid(format!("Config file not found: {}", path.display())));
        }
        return Ok(Some(path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Ok(Some(local));
    }

    Ok(cli::default_config_path().filter(|p| p.exists()))
}

/// Parse a TOML config file
pub fn load_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    debug!("Loading config from {:?}", path);
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// Layer CLI arguments over file values
pub fn resolve(args: &CliArgs, file: FileConfig) -> Result<ReportConfig, ConfigError> {
    let timeout_secs = args.timeout_secs.or(file.timeout_secs).unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(ConfigError::Invalid("timeout_secs must be greater than zero".to_string()));
    }

    // An explicit --input wins over an api_url coming from the file
    let source = if let Some(ref path) = args.input {
        SourceSpec::File(path.clone())
    } else if let Some(url) = args.api_url.clone().or(file.api_url) {
        SourceSpec::Http { url, timeout: Duration::from_secs(timeout_secs) }
    } else {
        SourceSpec::Fixture
    };
    debug!("Record source: {:?}", source);

    let output_html = if args.no_html {
        None
    } else {
        Some(args.output_html.clone().or(file.output_html).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_HTML)))
    };

    let config = ReportConfig {
        source,
        title: args.title.clone().or(file.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        subtitle: file.subtitle.unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
        use_static_placeholders: args.static_placeholders || file.use_static_placeholders.unwrap_or(false),
        output_html,
        output_json: args.output_json.clone().or(file.output_json),
        print_json: args.json,
        quiet: args.quiet,
    };

    debug!("Resolved config: {:?}", config);
    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
