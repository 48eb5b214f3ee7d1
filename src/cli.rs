use anyhow::Result;
use clap::{Parser, Subcommand};
use common::{BmiSource, Revision};
use std::path::PathBuf;

pub mod commands;

use crate::config::Settings;
use commands::{PredictArgs, predict, print_schema, serve};

#[derive(Parser)]
#[command(name = "heartcheck")]
#[command(about = "Heart disease prediction form: submit from the terminal or host the web form")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML)
    ///
    /// Defaults to ./heartcheck.toml when present. Values can also be set
    /// through HEARTCHECK_* environment variables.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit the form once and print the prediction
    ///
    /// Every widget starts at its default. Values from --input are applied
    /// first, then each --set in order.
    ///
    /// Examples:
    ///   heartcheck predict --revision compact --set HadDiabetes=true
    ///   heartcheck predict --input answers.json --charts report.html
    Predict {
        /// Form revision: full, extended or compact
        #[arg(short, long)]
        revision: Option<Revision>,

        /// BMI source: derived or supplied
        #[arg(long)]
        bmi_source: Option<BmiSource>,

        /// Base URL of the prediction endpoint
        #[arg(short, long)]
        api_url: Option<String>,

        /// JSON object of field values
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Field value as KEY=VALUE, repeatable
        #[arg(short, long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,

        /// Write an HTML page with the charts to this path
        #[arg(long)]
        charts: Option<PathBuf>,

        /// Print the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print a revision's field contract as JSON
    Schema {
        /// Form revision: full, extended or compact
        #[arg(short, long)]
        revision: Option<Revision>,

        /// BMI source: derived or supplied
        #[arg(long)]
        bmi_source: Option<BmiSource>,
    },
    /// Host the built web form and its client configuration
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8501, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory holding the built frontend
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut settings = Settings::load(self.config.as_deref())?;

        match self.command {
            Commands::Predict { revision, bmi_source, api_url, input, set, charts, json } => {
                settings.override_with(api_url, revision, bmi_source)?;
                let args = PredictArgs { input, set, charts, json };
                let output = predict(&settings, args).await?;
                print!("{}", output);
            }
            Commands::Schema { revision, bmi_source } => {
                settings.override_with(None, revision, bmi_source)?;
                println!("{}", print_schema(&settings)?);
            }
            Commands::Serve { bind_address, static_dir } => {
                if let Some(bind_address) = bind_address {
                    settings.bind_address = bind_address;
                }
                if let Some(static_dir) = static_dir {
                    settings.static_dir = static_dir;
                }
                serve(&settings).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("Sex=Female").unwrap(),
            ("Sex".to_string(), "Female".to_string())
        );
        assert_eq!(
            parse_key_value("RaceEthnicityCategory=Other race only, Non-Hispanic").unwrap().1,
            "Other race only, Non-Hispanic"
        );
        assert!(parse_key_value("Sex").is_err());
        assert!(parse_key_value("=Female").is_err());
    }

    #[test]
    fn test_cli_parses_predict() {
        let cli = Cli::try_parse_from([
            "heartcheck",
            "predict",
            "--revision",
            "compact",
            "--set",
            "HadDiabetes=true",
            "-s",
            "SleepHours=6",
        ])
        .unwrap();

        match cli.command {
            Commands::Predict { revision, set, .. } => {
                assert_eq!(revision, Some(Revision::Compact));
                assert_eq!(set.len(), 2);
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_revision() {
        assert!(Cli::try_parse_from(["heartcheck", "schema", "--revision", "minimal"]).is_err());
    }
}
