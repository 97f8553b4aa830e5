use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::form::{fields, FormData};

#[derive(Parser, Debug)]
#[command(name = "certbridge")]
#[command(about = "Submit and validate certificates on the ledger service", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,

    /// Base URL of the certificate service
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit the add-block form
    AddBlock {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        position: String,
        #[arg(long, default_value = "")]
        guests: String,
        #[arg(long, default_value = "")]
        institution: String,
        #[arg(long, default_value = "")]
        additional_token: String,
    },

    /// Submit the certificate validation form
    Validate {
        #[arg(long)]
        certificate_id: String,
    },

    /// Check that the service is up
    Ping,

    /// Click a tab link and show the resulting panel state
    Tabs {
        /// `href` of the link to click
        #[arg(long, default_value = "#validateBlock")]
        click: String,
    },
}

impl Command {
    /// Form values carried by a submit command, keyed by page field name.
    pub fn form_data(&self) -> FormData {
        match self {
            Command::AddBlock { name, position, guests, institution, additional_token } => [
                (fields::NAME, name),
                (fields::POSITION, position),
                (fields::GUESTS, guests),
                (fields::INSTITUTION, institution),
                (fields::ADDITIONAL_TOKEN, additional_token),
            ]
            .into_iter()
            .map(|(k, v)| (k, v.as_str()))
            .collect(),
            Command::Validate { certificate_id } => {
                [(fields::CERTIFICATE_ID, certificate_id.as_str())].into_iter().collect()
            }
            Command::Ping | Command::Tabs { .. } => FormData::new(),
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_block_command_form_data() {
        let args = Args::parse_from([
            "certbridge",
            "add-block",
            "--name",
            "Ada",
            "--institution",
            "Analytical Society",
            "--additional-token",
            "t0k",
        ]);

        let form = args.command.form_data();
        assert_eq!(form.get("name"), Some("Ada"));
        assert_eq!(form.get("position"), Some(""));
        assert_eq!(form.get("institution"), Some("Analytical Society"));
        assert_eq!(form.get("additionalToken"), Some("t0k"));
    }

    #[test]
    fn test_validate_command_form_data() {
        let args = Args::parse_from(["certbridge", "validate", "--certificate-id", "CERT-42"]);
        assert_eq!(args.command.form_data().get("certificateId"), Some("CERT-42"));
    }

    #[test]
    fn test_global_flags() {
        let args = Args::parse_from(["certbridge", "-c", "bridge.toml", "tabs"]);
        assert_eq!(args.config_path, Some(PathBuf::from("bridge.toml")));
        assert_eq!(args.command, Command::Tabs { click: "#validateBlock".to_string() });
        assert!(args.command.form_data().is_empty());
    }

    #[test]
    fn test_validate_requires_certificate_id() {
        assert!(Args::try_parse_from(["certbridge", "validate"]).is_err());
    }
}
