pub mod toml_config;

use crate::domain::clock::Clock;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::{TomlConfig, LOG_LEVELS, OUTPUT_FORMATS};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "clock-shop")]
#[command(about = "Load, sort, search and save collections of 24-hour clocks")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// File of H:M:S clocks to load
    #[arg(short, long)]
    pub input: Option<String>,

    /// File to write the shop to
    #[arg(short, long)]
    pub output: Option<String>,

    /// Extra clock to append, as H:M:S (repeatable)
    #[arg(long = "add")]
    pub add: Vec<Clock>,

    /// Sort the shop before printing and saving
    #[arg(long)]
    pub sort: bool,

    /// Report the index of the first clock equal to H:M:S
    #[arg(long)]
    pub find: Option<Clock>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Show a clock before and after reading the current time
    #[arg(long)]
    pub now: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after command-line flags are layered over the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub input: Option<String>,
    pub output: Option<String>,
    pub add: Vec<Clock>,
    pub sort: bool,
    pub find: Option<Clock>,
    pub format: String,
    pub now: bool,
    pub log_level: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        Ok(Self {
            input: file.shop.input.clone(),
            output: file.shop.output.clone(),
            add: file.extra_clocks()?,
            sort: file.sort_enabled(),
            find: None,
            format: file.output_format().to_string(),
            now: false,
            log_level: file.logging.level.clone(),
            json_logs: file.json_logs(),
            verbose: false,
        })
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 設定與命令列參數，命令列優先
    pub fn resolve(&self, file: Option<&TomlConfig>) -> Result<Settings> {
        let mut settings = match file {
            Some(file) => Settings::from_toml(file)?,
            None => Settings {
                format: "text".to_string(),
                ..Settings::default()
            },
        };

        if self.input.is_some() {
            settings.input = self.input.clone();
        }
        if self.output.is_some() {
            settings.output = self.output.clone();
        }
        if let Some(format) = &self.format {
            settings.format = format.clone();
        }
        settings.add.extend(self.add.iter().copied());
        settings.sort |= self.sort;
        settings.find = self.find;
        settings.now = self.now;
        settings.json_logs |= self.json_logs;
        settings.verbose = self.verbose;

        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        validate_one_of("format", &self.format, &OUTPUT_FORMATS)?;
        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::try_parse_from([
            "clock-shop",
            "--input",
            "in.txt",
            "--add",
            "1:2:3",
            "--add",
            "4:5:6",
            "--find",
            "4:5:6",
            "--sort",
        ])
        .unwrap();

        assert_eq!(cli.input.as_deref(), Some("in.txt"));
        assert_eq!(cli.add.len(), 2);
        assert_eq!(cli.find, Some(Clock::new(4, 5, 6).unwrap()));
        assert!(cli.sort);
    }

    #[test]
    fn test_cli_rejects_invalid_clock() {
        assert!(CliConfig::try_parse_from(["clock-shop", "--add", "25:0:0"]).is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[shop]\ninput = \"file.txt\"\noutput = \"out.txt\"\nclocks = [\"0:0:1\"]\n[display]\nformat = \"json\"\n",
        )
        .unwrap();
        let cli = CliConfig::try_parse_from([
            "clock-shop",
            "--input",
            "cli.txt",
            "--format",
            "text",
            "--add",
            "0:0:2",
        ])
        .unwrap();

        let settings = cli.resolve(Some(&file)).unwrap();
        assert_eq!(settings.input.as_deref(), Some("cli.txt"));
        assert_eq!(settings.output.as_deref(), Some("out.txt"));
        assert_eq!(settings.format, "text");
        assert_eq!(
            settings.add,
            vec![Clock::new(0, 0, 1).unwrap(), Clock::new(0, 0, 2).unwrap()]
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_resolve_without_file_defaults_to_text() {
        let cli = CliConfig::try_parse_from(["clock-shop"]).unwrap();
        let settings = cli.resolve(None).unwrap();
        assert_eq!(settings.format, "text");
        assert!(!settings.is_json());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_reject_unknown_format() {
        let cli = CliConfig::try_parse_from(["clock-shop", "--format", "xml"]).unwrap();
        let settings = cli.resolve(None).unwrap();
        assert!(settings.validate().is_err());
    }
}
