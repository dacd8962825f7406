use clap::Parser;
use std::path::PathBuf;

/// Default location of the user-level config file
/// - Linux: ~/.config/skylinq-report/config.toml
/// - macOS: ~/Library/Application Support/skylinq-report/config.toml
/// - Windows: %APPDATA%/skylinq-report/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("skylinq-report").join("config.toml"))
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "skylinq-report")]
#[command(about = "Summarize SKYLinq flight logs and export shareable reports")]
#[command(version)]
pub struct CliArgs {
    /// Read records from a JSON file (array, or object with "records"/"data")
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Fetch records from a SKYLinq REST endpoint
    /// Example: https://skylinq-backend.example/api/flightLogs
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Configuration file (TOML)
    /// Default: ./skylinq-report.toml, then the user config directory
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// HTML report output path
    #[arg(long = "output-html", value_name = "PATH")]
    pub output_html: Option<PathBuf>,

    /// Skip writing the HTML report
    #[arg(long)]
    pub no_html: bool,

    /// Also write the report as JSON to this path
    #[arg(long = "output-json", value_name = "PATH")]
    pub output_json: Option<PathBuf>,

    /// Print the JSON report to stdout instead of the console table
    #[arg(long)]
    pub json: bool,

    /// Use the legacy fixed headline figures instead of deriving them from records
    #[arg(long)]
    pub static_placeholders: bool,

    /// Report title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// HTTP timeout in seconds for --api-url
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Override console width (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,

    /// Don't print the console table and breakdown
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_some() && self.api_url.is_some() {
            return Err("Cannot specify both --input and --api-url".to_string());
        }

        if let Some(ref url) = self.api_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(format!("--api-url must be an http(s) URL, got '{}'", url));
        }

        if self.timeout_secs == Some(0) {
            return Err("--timeout-secs must be greater than zero".to_string());
        }

        if self.no_html && self.output_html.is_some() {
            return Err("Cannot specify both --no-html and --output-html".to_string());
        }

        if let Some(ref input) = self.input
            && !input.exists()
        {
            return Err(format!("Input file not found: {}", input.display()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_and_api_url_fails() {
        let args = CliArgs {
            input: Some(PathBuf::from("Cargo.toml")),
            api_url: Some("https://example.com/api/flightLogs".to_string()),
            ..Default::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let args = CliArgs { api_url: Some("ftp://example.com/logs".to_string()), ..Default::default() };
        assert!(args.validate().unwrap_err().contains("http"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let args = CliArgs { timeout_secs: Some(0), ..Default::default() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_no_html_conflict() {
        let args = CliArgs { no_html: true, output_html: Some(PathBuf::from("r.html")), ..Default::default() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_missing_input() {
        let args = CliArgs { input: Some(PathBuf::from("./does-not-exist.json")), ..Default::default() };
        assert!(args.validate().unwrap_err().contains("does-not-exist.json"));
    }

    #[test]
    fn test_validate_defaults_succeed() {
        assert!(CliArgs::default().validate().is_ok());
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from([
            "skylinq-report",
            "--api-url",
            "https://example.com/api/flightLogs",
            "--static-placeholders",
            "--output-json",
            "out.json",
            "-q",
        ]);
        assert_eq!(args.api_url.as_deref(), Some("https://example.com/api/flightLogs"));
        assert!(args.static_placeholders);
        assert!(args.quiet);
        assert_eq!(args.output_json, Some(PathBuf::from("out.json")));
        assert!(args.output_html.is_none());
    }
}
