use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cpu-utilization")]
#[command(about = "Per-interval CPU utilization breakdown at each sample point")]
pub struct CliConfig {
    /// Input file: sample points on the first line, then `name start stop count` lines
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Omit sample points where no interval is active
    #[arg(long)]
    pub skip_idle: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn skip_idle(&self) -> bool {
        self.skip_idle
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::try_parse_from(["cpu-utilization", "jam.txt"]).unwrap();

        assert_eq!(config.input_path(), "jam.txt");
        assert_eq!(config.output_path(), None);
        assert_eq!(config.format(), OutputFormat::Text);
        assert!(!config.skip_idle());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_all_flags() {
        let config = CliConfig::try_parse_from([
            "cpu-utilization",
            "jam.txt",
            "--output",
            "report.csv",
            "--format",
            "csv",
            "--skip-idle",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.output_path(), Some("report.csv"));
        assert_eq!(config.format(), OutputFormat::Csv);
        assert!(config.skip_idle());
        assert!(config.verbose);
    }

    #[test]
    fn test_input_is_required() {
        assert!(CliConfig::try_parse_from(["cpu-utilization"]).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(CliConfig::try_parse_from(["cpu-utilization", "a.txt", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let config = CliConfig::try_parse_from(["cpu-utilization", "jam.txt", "-o", ""]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_verbose_with_json_logs() {
        let config =
            CliConfig::try_parse_from(["cpu-utilization", "jam.txt", "--log-json", "-v"]).unwrap();
        assert!(config.log_json);
        assert!(config.verbose);
    }
}
