// src/cli.rs
use clap::{Parser, ValueEnum};

/// ct-recon: subdomain discovery from certificate transparency search
///
/// Queries crt.sh for every domain in the input file and writes the
/// discovered subdomains to results.csv or results.json.
#[derive(Parser, Debug, Clone)]
#[command(name = "ct-recon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // ===== Input & Configuration =====
    /// File of domains or URLs to query, one per line
    #[arg(short = 'u', long = "urls")]
    pub urls: String,

    /// Optional TOML config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    // ===== Output =====
    /// Output format
    #[arg(short = 'o', long = "output-format", value_enum, default_value_t = OutputFormat::Csv)]
    pub output_format: OutputFormat,

    /// Directory the results file is written to
    #[arg(long = "output-dir", default_value = ".")]
    pub output_dir: String,

    // ===== Filtering & Probing =====
    /// Only keep entries logged after this Unix timestamp (0 disables)
    #[arg(short = 't', long = "min-time", default_value_t = 0, allow_negative_numbers = true)]
    pub min_time: i64,

    /// Try a TCP connection to port 443 of every discovered host
    #[arg(short = 'a', long = "active")]
    pub active: bool,

    // ===== Display =====
    /// Disable progress indicator
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    // ===== Logging =====
    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.urls.trim().is_empty() {
            anyhow::bail!("-u requires a path to a domain list");
        }

        // Verbose and quiet are mutually exclusive
        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        Ok(())
    }

    /// Log level forced by flags, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }
}

/// Report file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Fixed file name of the report
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "results.csv",
            OutputFormat::Json => "results.json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ct-recon", "-u", "domains.txt"]);
        assert_eq!(cli.urls, "domains.txt");
        assert_eq!(cli.output_format, OutputFormat::Csv);
        assert_eq!(cli.min_time, 0);
        assert!(!cli.active);
        assert_eq!(cli.output_dir, ".");
        assert!(cli.config.is_none());
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_urls_required() {
        assert!(Cli::try_parse_from(["ct-recon"]).is_err());
    }

    #[test]
    fn test_json_output_format() {
        let cli = Cli::parse_from(["ct-recon", "-u", "d.txt", "-o", "json"]);
        assert_eq!(cli.output_format, OutputFormat::Json);
        assert_eq!(cli.output_format.file_name(), "results.json");
    }

    #[test]
    fn test_invalid_output_format() {
        assert!(Cli::try_parse_from(["ct-recon", "-u", "d.txt", "-o", "xml"]).is_err());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["ct-recon", "-u", "d.txt", "-t", "1682899200", "-a", "-o", "csv"]);
        assert_eq!(cli.min_time, 1682899200);
        assert!(cli.active);
        assert_eq!(cli.output_format.file_name(), "results.csv");
    }

    #[test]
    fn test_non_numeric_min_time() {
        assert!(Cli::try_parse_from(["ct-recon", "-u", "d.txt", "-t", "yesterday"]).is_err());
    }

    #[test]
    fn test_empty_urls_invalid() {
        let cli = Cli::parse_from(["ct-recon", "-u", ""]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_verbose_and_quiet_invalid() {
        let cli = Cli::parse_from(["ct-recon", "-u", "d.txt", "--verbose", "--quiet"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_log_level_override() {
        let cli = Cli::parse_from(["ct-recon", "-u", "d.txt", "-v"]);
        assert_eq!(cli.log_level_override(), Some("debug"));

        let cli = Cli::parse_from(["ct-recon", "-u", "d.txt", "-q"]);
        assert_eq!(cli.log_level_override(), Some("warn"));

        let cli = Cli::parse_from(["ct-recon", "-u", "d.txt"]);
        assert_eq!(cli.log_level_override(), None);
    }
}
